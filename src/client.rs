use crate::headers;
use crate::parsing::GeniusParser;
use crate::r#trait::GeniusClient;
use crate::{ArtistIdentity, ClientConfig, GeniusError, Result, SongPage, SongSummary};
use async_trait::async_trait;
use http_client::{HttpClient, Request};
use http_types::{Method, Url};
use scraper::Html;
use std::time::Duration;

/// Which surface a request goes to; decides headers and authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Surface {
    /// The public API, authorized with the bearer token
    Api,
    /// The web API behind genius.com, sent without credentials
    Web,
    /// A rendered HTML page
    Page,
}

/// Client for Genius' public API, its web API and rendered lyrics pages.
///
/// # Examples
///
/// ```rust,no_run
/// use genius_lyrics::{GeniusClient, GeniusClientImpl, Result};
///
/// #[tokio::main]
/// async fn main() -> Result<()> {
///     // Create client with any HTTP implementation
///     let http_client = http_client::native::NativeClient::new();
///     let client = GeniusClientImpl::new(Box::new(http_client), "my-access-token");
///
///     let artist = client.search_artist("tupac").await?;
///     assert_eq!(artist.name, "2Pac");
///
///     Ok(())
/// }
/// ```
pub struct GeniusClientImpl {
    client: Box<dyn HttpClient>,
    config: ClientConfig,
    parser: GeniusParser,
}

impl GeniusClientImpl {
    /// Create a new [`GeniusClientImpl`] with the default URLs and a three
    /// second timeout.
    ///
    /// The credential is not checked here; a bad token shows up as
    /// [`GeniusError::Upstream`] with status 401 on the first song search.
    ///
    /// # Arguments
    ///
    /// * `client` - Any HTTP client implementation that implements [`HttpClient`]
    /// * `credential` - Genius API access token
    pub fn new(client: Box<dyn HttpClient>, credential: impl Into<String>) -> Self {
        Self::with_config(client, ClientConfig::new(credential))
    }

    /// Create a new [`GeniusClientImpl`] from a full [`ClientConfig`].
    ///
    /// This is useful for testing or if Genius moves its endpoints.
    pub fn with_config(client: Box<dyn HttpClient>, config: ClientConfig) -> Self {
        Self {
            client,
            config,
            parser: GeniusParser::new(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Base URL of the public API.
    pub fn api_url(&self) -> &str {
        &self.config.api_base_url
    }

    /// Base URL of the web API.
    pub fn web_url(&self) -> &str {
        &self.config.web_base_url
    }

    /// Upper bound for each request.
    pub fn timeout(&self) -> Duration {
        self.config.timeout
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        self.config.timeout = timeout;
    }

    /// GET `url` and return the body of a 200 response.
    ///
    /// The configured timeout covers both the send and the body read.
    async fn get(&self, url: &str, surface: Surface) -> Result<String> {
        let parsed = url
            .parse::<Url>()
            .map_err(|e| GeniusError::Http(format!("Invalid URL '{url}': {e}")))?;

        let mut request = Request::new(Method::Get, parsed);
        match surface {
            Surface::Api => {
                headers::add_json_headers(&mut request, Some(self.config.credential.as_str()))
            }
            Surface::Web => headers::add_json_headers(&mut request, None),
            Surface::Page => headers::add_page_headers(&mut request),
        }

        log::debug!("GET {url} ({surface:?})");

        let exchange = async {
            let mut response = self
                .client
                .send(request)
                .await
                .map_err(|e| GeniusError::Http(e.to_string()))?;

            let status: u16 = response.status().into();
            log::debug!("Response status {status} for {url}");
            if status != 200 {
                return Err(GeniusError::Upstream { status });
            }

            response
                .body_string()
                .await
                .map_err(|e| GeniusError::Http(e.to_string()))
        };

        let body = tokio::time::timeout(self.config.timeout, exchange)
            .await
            .map_err(|_| GeniusError::Timeout(self.config.timeout))??;

        log::trace!("Read {} bytes from {url}", body.len());
        Ok(body)
    }
}

#[async_trait(?Send)]
impl GeniusClient for GeniusClientImpl {
    async fn search(
        &self,
        artist_name: &str,
        page: u32,
        per_page: u32,
    ) -> Result<ArtistIdentity> {
        let url = format!(
            "{}search/multi?per_page={}&page={}&q={}",
            self.config.web_base_url,
            per_page,
            page,
            urlencoding::encode(artist_name)
        );

        let body = self.get(&url, Surface::Web).await?;
        let artist = self.parser.parse_artist_search(&body, artist_name)?;
        log::debug!("Resolved '{artist_name}' to {artist}");
        Ok(artist)
    }

    async fn search_song(
        &self,
        artist: &ArtistIdentity,
        page: u32,
        per_page: u32,
    ) -> Result<SongPage> {
        let url = format!(
            "{}search?q={}&sort=popularity&per_page={}&page={}",
            self.config.api_base_url,
            urlencoding::encode(&artist.name),
            per_page,
            page
        );

        let body = self.get(&url, Surface::Api).await?;
        self.parser.parse_song_search(&body, artist, page)
    }

    async fn get_song_lyrics(&self, song: &SongSummary) -> Result<String> {
        let url = song.url().ok_or_else(|| {
            GeniusError::Parse(format!("Song record for '{}' has no url", song.title))
        })?;

        log::debug!("Fetching lyrics for '{}'", song.title);
        let html = self.get(url, Surface::Page).await?;
        let document = Html::parse_document(&html);
        self.parser.parse_lyrics(&document)
    }
}
