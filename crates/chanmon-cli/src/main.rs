//! Chanmon CLI - admin surface for the channel-lifecycle log.

use chanmon_cli::{commands, Cli, Command, Config, Formatter};
use chanmon_store::{EventLogStore, JsonFileBackend};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let formatter = Formatter::new(!cli.no_color);

    // Commands that touch the log open the store at the resolved state
    // path; the wizard does not need it.
    let state_path = match &cli.state {
        Some(p) => p.clone(),
        None => config.state_path()?,
    };

    match cli.command {
        Command::PrintLog(args) => {
            let store = EventLogStore::open(JsonFileBackend::new(&state_path))?;
            commands::execute_print_log(args, &store, &formatter)?;
        }
        Command::Clean(args) => {
            let store = EventLogStore::open(JsonFileBackend::new(&state_path))?;
            commands::execute_clean(args, &store, &config, &formatter)?;
        }
        Command::Watch => {
            let store = EventLogStore::open(JsonFileBackend::new(&state_path))?;
            commands::execute_watch(store, &config).await?;
        }
        Command::NewEvent => {
            commands::execute_new_event(&formatter)?;
        }
    }

    Ok(())
}
