use log::{debug, info};
use rcollector::clients::{
    entities::{Market, Record},
    errors::Result,
    export,
    spotify::SpotifyClient,
};

// Configuration for the Collector struct
pub struct Config {
    pub spotify: SpotifyClient,
    pub limit: u32,
}

pub struct ConfigBuilder {
    spotify: Option<SpotifyClient>,
    limit: Option<u32>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            spotify: None,
            limit: None, // Default number of items requested per search. Default is 10.
        }
    }

    pub fn build(self) -> Result<Config> {
        let spotify = match self.spotify {
            Some(s) => s,
            None => SpotifyClient::try_default()?,
        };
        Ok(Config {
            spotify,
            limit: self.limit.unwrap_or(10),
        })
    }
}

// The main Collector struct that gathers records and exports them
pub struct Collector {
    config: Config,
}

impl Collector {
    pub fn new(config: Config) -> Self {
        Collector { config }
    }

    pub async fn run(&self) -> Result<()> {
        info!("Starting collection process ...");
        let records = self.collect().await?;
        debug!(
            "Collected {} records across {} markets",
            records.len(),
            Market::ALL.len()
        );

        export::write_csv(export::OUTPUT_PATH, &records)?;
        println!("Datos guardados en {}", export::OUTPUT_PATH);
        Ok(())
    }

    // Gather all records, market by market, in the fixed collection order.
    // Any failing call aborts the run before anything is written.
    async fn collect(&self) -> Result<Vec<Record>> {
        let limit = self.config.limit;
        let mut all_records = Vec::new();

        for market in Market::ALL {
            let tracks = self.config.spotify.top_tracks(market, limit).await?;
            let playlists = self.config.spotify.top_playlists(market, limit).await?;
            let artists = self.config.spotify.top_artists(market, limit).await?;
            debug!(
                "{market}: {} tracks, {} playlists, {} artists",
                tracks.len(),
                playlists.len(),
                artists.len()
            );

            all_records.extend(tracks);
            all_records.extend(playlists);
            all_records.extend(artists);

            println!("Datos recopilados para el mercado: {market}");
        }

        Ok(all_records)
    }
}
