use std::sync::Arc;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotnp::{
    cli,
    config::{self, Config},
    context::Context,
    error,
    store::MemoryStore,
    types::{AuthRecord, TrackRecord},
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Serve the now playing endpoint over HTTP
    Serve,

    /// Run a single invocation and print the response
    Invoke(InvokeOptions),

    /// Create the auth and track records in a fresh store
    Seed(SeedOptions),

    /// Show the stored token state and track
    Status,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct InvokeOptions {
    /// Use a throwaway in-memory store instead of the configured one
    #[clap(long)]
    pub memory: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct SeedOptions {
    /// Overwrite records that already exist
    #[clap(long)]
    pub force: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Command::Completions(opt) = &cli.command {
        let mut cmd = Cli::command_for_update();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => error!("Invalid configuration: {}", e),
    };

    match cli.command {
        Command::Serve => cli::serve(Context::with_file_store(config)).await,
        Command::Invoke(opt) => {
            let ctx = if opt.memory {
                Context::new(config, Arc::new(fresh_memory_store()))
            } else {
                Context::with_file_store(config)
            };
            cli::invoke(&ctx).await
        }
        Command::Seed(opt) => cli::seed(&config, opt.force).await,
        Command::Status => cli::status(&Context::with_file_store(config)).await,
        Command::Completions(_) => {}
    }
}

fn fresh_memory_store() -> MemoryStore {
    MemoryStore::seeded(
        AuthRecord {
            access_token: String::new(),
            expires_at: 0,
            last_request_at: 0,
        },
        TrackRecord::default(),
    )
}
