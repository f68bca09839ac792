use anyhow::Result;
use clap::Parser;

use menese_wallet::{
    app::{load_config, load_config_file},
    cli::{handle_command, Cli},
    utils::init_logger,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments; usage problems exit with status 1
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            let code = match err.kind() {
                // An explicitly requested help/version page is not a usage error
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            std::process::exit(code);
        }
    };

    // Set up logging if verbose
    if cli.verbose {
        init_logger();
    }

    // Load configuration
    let mut config = if let Some(config_path) = &cli.config {
        load_config_file(config_path)?
    } else {
        load_config().unwrap_or_default()
    };

    // A --network flag wins over every config source
    if let Some(network) = &cli.network {
        config.gateway.network = network.clone();
    }

    handle_command(&cli.command, &config).await
}
