//! Client for looking up artists, songs and lyrics on Genius.
//!
//! Resolve an artist with [`GeniusClient::search_artist`], list their songs
//! with [`GeniusClient::search_song`] or [`GeniusClient::get_all_songs`], then
//! scrape a song's page with [`GeniusClient::get_song_lyrics`].

pub mod artist;
pub mod client;
pub mod config;
pub mod error;
pub mod headers;
pub mod parsing;
pub mod song;
pub mod r#trait;

pub use artist::ArtistIdentity;
pub use client::GeniusClientImpl;
pub use config::{ClientConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT, DEFAULT_WEB_URL};
pub use error::GeniusError;
pub use parsing::{is_skipped_title, GeniusParser, SKIPPED_TITLE_TERMS};
pub use r#trait::{GeniusClient, ALL_SONGS_PAGES, ARTIST_SEARCH_PER_PAGE, SONGS_PER_PAGE};
pub use song::{SongPage, SongSummary};

#[cfg(feature = "mock")]
pub use r#trait::MockGeniusClient;

// Re-export scraper types for testing
pub use scraper::Html;

pub type Result<T> = std::result::Result<T, GeniusError>;
