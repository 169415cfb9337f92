use clap::Parser;

use catalog_rs::cli::{Cli, Commands, ConfigurationMerger};
use catalog_rs::config::settings::Settings;
use catalog_rs::logger;
use catalog_rs::server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let merger = ConfigurationMerger::from_config_path(cli.config.as_ref())?;
    let settings: Settings = merger.merge_cli_args(&cli)?;

    logger::init(&settings.logger)?;

    match cli.command {
        Some(Commands::Serve { dry_run: true, .. }) => {
            settings.validate()?;
            println!("Configuration is valid");
            println!("Server would bind to: {}", settings.server.address());
            Ok(())
        }
        _ => Server::new(settings).run().await,
    }
}
