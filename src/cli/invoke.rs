use crate::{context::Context, error, handler};

/// Runs a single invocation and prints the host response on stdout.
pub async fn invoke(ctx: &Context) {
    let response = match handler::handle_invocation(ctx).await {
        Ok(response) => response,
        Err(e) => error!("Invocation failed: {}", e),
    };

    match serde_json::to_string_pretty(&response) {
        Ok(json) => println!("{json}"),
        Err(e) => error!("Cannot print response: {}", e),
    }
}
