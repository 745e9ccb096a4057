use std::time::Duration;
use thiserror::Error;

/// Error types for Genius operations.
///
/// Every public operation returns one of these instead of mixing data and
/// status codes in the same return value, so callers always branch on a
/// single typed path.
///
/// # Error Handling Examples
///
/// ```rust,no_run
/// use genius_lyrics::{GeniusClient, GeniusClientImpl, GeniusError};
///
/// #[tokio::main]
/// async fn main() {
///     let client = GeniusClientImpl::new(
///         Box::new(http_client::native::NativeClient::new()),
///         "token",
///     );
///
///     match client.search_artist("tupac").await {
///         Ok(artist) => println!("{} ({})", artist.name, artist.id),
///         Err(GeniusError::NotFound(msg)) => eprintln!("Nothing matched: {}", msg),
///         Err(GeniusError::Upstream { status }) => eprintln!("Genius answered {}", status),
///         Err(e) => eprintln!("Other error: {}", e),
///     }
/// }
/// ```
#[derive(Error, Debug)]
pub enum GeniusError {
    /// HTTP/network related errors.
    ///
    /// Connection failures, DNS errors, unreadable bodies and URLs that
    /// cannot be built all land here.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The request did not complete within the configured timeout.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Genius answered with a status other than 200.
    ///
    /// # Common Causes
    /// - 401: missing or invalid access token
    /// - 404: the lyrics page no longer exists
    /// - 429: too many requests
    #[error("Upstream returned status {status}")]
    Upstream {
        /// HTTP status code of the response
        status: u16,
    },

    /// The request succeeded but held nothing usable: no artist hit, no
    /// songs across all pages, or no lyrics container on the page.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Failed to parse Genius' response.
    ///
    /// This happens when a body is not the expected JSON shape or a song
    /// record is missing a field the operation needs.
    #[error("Failed to parse response: {0}")]
    Parse(String),
}
