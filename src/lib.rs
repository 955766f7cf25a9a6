//! Rcollector - Collect top Spotify catalog data across regional markets
//!
//! This library provides functionality to search the Spotify catalog for the
//! top tracks, playlists and artists of a genre in a fixed set of markets
//! and export the combined records as a single CSV file.

/// Client modules for the Spotify API, record entities and CSV export
pub mod clients;
