use std::path::PathBuf;

use log::debug;

use crate::clients::{
    entities::{ArtistRecord, Market, PlaylistRecord, Record, TrackRecord},
    errors::{Error, Result},
};
use rspotify::{
    AuthCodeSpotify, Config, Credentials, OAuth,
    model::{Country, FullArtist, FullTrack, SearchResult, SearchType, SimplifiedPlaylist},
    prelude::*,
    scopes,
};

// Every extraction is a catalog search with the same fixed genre query
const SEARCH_QUERY: &str = "genre:pop";

impl From<Market> for rspotify::model::Market {
    fn from(m: Market) -> rspotify::model::Market {
        let country = match m {
            Market::Us => Country::UnitedStates,
            Market::Gb => Country::UnitedKingdom,
            Market::Ca => Country::Canada,
            Market::De => Country::Germany,
            Market::Fr => Country::France,
        };
        rspotify::model::Market::Country(country)
    }
}

fn track_record(item: FullTrack, market: Market) -> Result<TrackRecord> {
    // Keep the first listed artist; a track without artists is malformed
    let artist = item
        .artists
        .first()
        .map(|a| a.name.clone())
        .ok_or_else(|| {
            Error::UnexpectedResponse(format!("track '{}' has an empty artists list", item.name))
        })?;
    Ok(TrackRecord {
        name: item.name,
        artist,
        album: item.album.name,
        popularity: item.popularity,
        market,
    })
}

fn playlist_record(item: SimplifiedPlaylist, market: Market) -> PlaylistRecord {
    PlaylistRecord {
        name: item.name,
        owner: item.owner.display_name,
        tracks: item.tracks.total,
        market,
    }
}

fn artist_record(item: FullArtist, market: Market) -> ArtistRecord {
    ArtistRecord {
        name: item.name,
        followers: item.followers.total,
        popularity: item.popularity,
        market,
    }
}

fn env_var(name: &str) -> Result<String> {
    std::env::var(name)
        .map_err(|_| Error::ConfigurationError(format!("Missing {name} in environment variables")))
}

pub struct SpotifyClient {
    pub spotify: AuthCodeSpotify,
}

impl SpotifyClient {
    pub fn new(spotify: AuthCodeSpotify) -> Self {
        SpotifyClient { spotify }
    }

    // Authorize the Spotify client via CLI prompt and OAuth flow
    // This function requires the `cli` feature enabled.
    pub async fn authorize_client(&self) -> Result<()> {
        debug!("Starting Spotify authorization ...");
        let url = self.spotify.get_authorize_url(false)?;
        // This function requires the `cli` feature enabled.
        self.spotify.prompt_for_token(&url).await?;
        let user = self.spotify.me().await?;
        debug!("Authenticated as user: {:?}", user.display_name);
        Ok(())
    }

    // Create a SpotifyClient from environment variables or raise a configuration error
    pub fn try_default() -> Result<Self> {
        let client_id = env_var("SPOTIPY_CLIENT_ID")?;
        let client_secret = env_var("SPOTIPY_CLIENT_SECRET")?;
        let redirect_uri = env_var("SPOTIPY_REDIRECT_URI")?;

        let creds = Credentials::new(&client_id, &client_secret);
        let oauth = OAuth {
            redirect_uri,
            scopes: scopes!(
                "playlist-read-private",
                "playlist-read-collaborative",
                "user-top-read"
            ),
            ..Default::default()
        };

        // Set up token caching in a default cache directory
        let cache_path = dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from("/tmp")) // Fallback to /tmp if cache directory can't be determined
            .join(".rcollector_cache");

        let spotify = AuthCodeSpotify::with_config(
            creds,
            oauth,
            Config {
                token_cached: true,
                cache_path,
                ..Default::default()
            },
        );

        Ok(Self { spotify })
    }

    // Fetch the top tracks of the search genre for one market, first page only
    pub async fn top_tracks(&self, market: Market, limit: u32) -> Result<Vec<Record>> {
        let result = self
            .spotify
            .search(
                SEARCH_QUERY,
                SearchType::Track,
                Some(market.into()),
                None,
                Some(limit),
                None,
            )
            .await?;
        match result {
            SearchResult::Tracks(page) => page
                .items
                .into_iter()
                .map(|item| track_record(item, market).map(Record::Track))
                .collect(),
            other => Err(unexpected_kind("tracks", &other)),
        }
    }

    // Fetch the top playlists of the search genre for one market, first page only
    pub async fn top_playlists(&self, market: Market, limit: u32) -> Result<Vec<Record>> {
        let result = self
            .spotify
            .search(
                SEARCH_QUERY,
                SearchType::Playlist,
                Some(market.into()),
                None,
                Some(limit),
                None,
            )
            .await?;
        match result {
            SearchResult::Playlists(page) => Ok(page
                .items
                .into_iter()
                .map(|item| Record::Playlist(playlist_record(item, market)))
                .collect()),
            other => Err(unexpected_kind("playlists", &other)),
        }
    }

    // Fetch the top artists of the search genre for one market, first page only
    pub async fn top_artists(&self, market: Market, limit: u32) -> Result<Vec<Record>> {
        let result = self
            .spotify
            .search(
                SEARCH_QUERY,
                SearchType::Artist,
                Some(market.into()),
                None,
                Some(limit),
                None,
            )
            .await?;
        match result {
            SearchResult::Artists(page) => Ok(page
                .items
                .into_iter()
                .map(|item| Record::Artist(artist_record(item, market)))
                .collect()),
            other => Err(unexpected_kind("artists", &other)),
        }
    }
}

fn unexpected_kind(expected: &str, got: &SearchResult) -> Error {
    Error::UnexpectedResponse(format!("expected {expected} search result, got {got:?}"))
}
