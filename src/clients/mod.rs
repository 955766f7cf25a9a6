/// Data entities for collected tracks, playlists and artists
pub mod entities;
/// Error types and result aliases
pub mod errors;
/// CSV export of the collected aggregate
pub mod export;
/// Spotify API client
pub mod spotify;

pub use spotify::SpotifyClient;
