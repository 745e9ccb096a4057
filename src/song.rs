use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// One song hit from a Genius search.
///
/// `raw` is the full result record exactly as the service returned it. The
/// accessors below read the handful of fields this crate relies on; anything
/// else is left for the caller to pick out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongSummary {
    /// The song title
    pub title: String,
    /// The untouched result record
    pub raw: Value,
}

impl SongSummary {
    pub fn new(title: impl Into<String>, raw: Value) -> Self {
        Self {
            title: title.into(),
            raw,
        }
    }

    /// Genius song id.
    pub fn id(&self) -> Option<u64> {
        self.raw.get("id").and_then(Value::as_u64)
    }

    /// URL of the rendered lyrics page.
    pub fn url(&self) -> Option<&str> {
        self.raw.get("url").and_then(Value::as_str)
    }

    /// Id of the song's primary artist.
    pub fn primary_artist_id(&self) -> Option<u64> {
        self.raw
            .get("primary_artist")
            .and_then(|artist| artist.get("id"))
            .and_then(Value::as_u64)
    }
}

impl fmt::Display for SongSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// A single page of filtered song search results.
#[derive(Debug, Clone, PartialEq)]
pub struct SongPage {
    pub songs: Vec<SongSummary>,
    pub page_number: u32,
}

impl SongPage {
    /// Song titles in service order.
    pub fn titles(&self) -> Vec<String> {
        self.songs.iter().map(|song| song.title.clone()).collect()
    }

    /// Raw result records in service order, parallel to [`titles`](Self::titles).
    pub fn records(&self) -> Vec<Value> {
        self.songs.iter().map(|song| song.raw.clone()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}
