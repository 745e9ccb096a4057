use crate::{ArtistIdentity, GeniusError, Result, SongPage, SongSummary};
use async_trait::async_trait;

/// Number of song search pages [`GeniusClient::get_all_songs`] walks.
pub const ALL_SONGS_PAGES: u32 = 5;

/// Page size for song searches; Genius caps it at 20 regardless.
pub const SONGS_PER_PAGE: u32 = 20;

/// Page size [`GeniusClient::search_artist`] asks for.
pub const ARTIST_SEARCH_PER_PAGE: u32 = 5;

/// Trait for Genius lookups that can be mocked for testing.
///
/// The intended call order is artist first, then songs, then lyrics:
///
/// ```rust,no_run
/// # use genius_lyrics::{GeniusClient, GeniusClientImpl};
/// # tokio_test::block_on(async {
/// let client = GeniusClientImpl::new(
///     Box::new(http_client::native::NativeClient::new()),
///     "token",
/// );
///
/// let artist = client.search_artist("tupac").await?;
/// let songs = client.get_all_songs(&artist).await?;
/// if let Some(song) = songs.first() {
///     println!("{}", client.get_song_lyrics(song).await?);
/// }
/// # Ok::<(), genius_lyrics::GeniusError>(())
/// # });
/// ```
///
/// # Mocking Support
///
/// When the `mock` feature is enabled, this crate provides `MockGeniusClient`
/// that implements this trait using the `mockall` library.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait(?Send)]
pub trait GeniusClient {
    /// Resolve a free-text artist name to the first artist hit of a web
    /// search.
    ///
    /// Returns [`GeniusError::NotFound`] when the search has no artist hits.
    async fn search(&self, artist_name: &str, page: u32, per_page: u32)
        -> Result<ArtistIdentity>;

    /// [`search`](Self::search) with the first page of five results.
    async fn search_artist(&self, artist_name: &str) -> Result<ArtistIdentity> {
        self.search(artist_name, 1, ARTIST_SEARCH_PER_PAGE).await
    }

    /// Fetch one page of the artist's songs sorted by popularity.
    ///
    /// `artist` must come from [`search`](Self::search): hits whose primary
    /// artist id differs are dropped, as are tracklists, album art pages and
    /// translations. The page can be empty.
    async fn search_song(
        &self,
        artist: &ArtistIdentity,
        page: u32,
        per_page: u32,
    ) -> Result<SongPage>;

    /// Up to 100 of the artist's most popular songs.
    ///
    /// Always requests pages 1 through [`ALL_SONGS_PAGES`]. They are fetched
    /// concurrently and concatenated in page order without deduplication.
    /// Any failing page fails the whole call.
    async fn get_all_songs(&self, artist: &ArtistIdentity) -> Result<Vec<SongSummary>> {
        log::debug!("Fetching {ALL_SONGS_PAGES} song pages for {artist}");

        let pages = futures::future::try_join_all(
            (1..=ALL_SONGS_PAGES).map(|page| self.search_song(artist, page, SONGS_PER_PAGE)),
        )
        .await?;

        let songs: Vec<SongSummary> = pages.into_iter().flat_map(|page| page.songs).collect();
        if songs.is_empty() {
            return Err(GeniusError::NotFound(format!("No songs found for {artist}")));
        }

        log::debug!("Collected {} songs for {artist}", songs.len());
        Ok(songs)
    }

    /// Titles of [`get_all_songs`](Self::get_all_songs), in the same order.
    async fn get_all_song_titles(&self, artist: &ArtistIdentity) -> Result<Vec<String>> {
        Ok(self
            .get_all_songs(artist)
            .await?
            .into_iter()
            .map(|song| song.title)
            .collect())
    }

    /// Scrape the lyrics text from the song's Genius page.
    async fn get_song_lyrics(&self, song: &SongSummary) -> Result<String>;
}
