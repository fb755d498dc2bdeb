use clap::Parser;
use tokio::io::BufReader;

use userdir::cli::Cli;
use userdir::config::Config;
use userdir::logging::init_tracing;
use userdir::ui::Shell;
use userdir::users::UserStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match cli.load_config(Config::env_api_url()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let store = UserStore::from_config(&config)?;
    tracing::info!(url = %config.api_url()?, "Starting user directory");

    let mut shell = Shell::new(store, BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .fetch_on_start(!cli.no_fetch);
    shell.run().await?;

    Ok(())
}
