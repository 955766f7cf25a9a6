use clap::{Parser, Subcommand};
use log::info;
use rcollector::clients::errors::Result;

use crate::collector;

#[derive(Parser)]
#[command(name = "rcollector")]
#[command(version, about = "Collect top Spotify tracks, playlists and artists per market into a CSV", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Collect {},
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Collect {} => {
            collect_data().await?;
        }
    }
    Ok(())
}

async fn collect_data() -> Result<()> {
    info!("Building config ...");
    let config = collector::ConfigBuilder::new().build()?;
    info!("Authorizing Spotify client ...");
    // A browser consent prompt may be shown on this call
    config.spotify.authorize_client().await?;
    let collector = collector::Collector::new(config);
    collector.run().await
}
