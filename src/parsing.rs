//! Response parsing for Genius' JSON APIs and rendered lyrics pages.
//!
//! Everything here is a pure function of a response body, so the client only
//! has to fetch and hand over. The JSON envelopes are typed; the individual
//! result records stay as [`serde_json::Value`] because callers receive them
//! untouched.

use crate::{ArtistIdentity, GeniusError, Result, SongPage, SongSummary};
use scraper::{ElementRef, Html, Node, Selector};
use serde::Deserialize;
use serde_json::Value;

/// Lowercased title fragments that mark a hit as a tracklist, cover-art page
/// or translated variant rather than the song itself.
pub const SKIPPED_TITLE_TERMS: [&str; 7] = [
    "tracklist",
    "album art",
    "deutsche",
    "nederlandse",
    "latino",
    "française",
    "español",
];

/// Container Genius historically rendered the whole lyrics text into.
const LYRICS_SELECTOR: &str = "div.lyrics";

/// Containers of the current page layout; lyrics are split across several.
const LYRICS_CONTAINER_SELECTOR: &str = "div[data-lyrics-container=\"true\"]";

#[derive(Debug, Deserialize)]
struct WebSearchResponse {
    response: WebSearchBody,
}

#[derive(Debug, Deserialize)]
struct WebSearchBody {
    #[serde(default)]
    sections: Vec<WebSearchSection>,
}

#[derive(Debug, Deserialize)]
struct WebSearchSection {
    #[serde(default)]
    hits: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct ApiSearchResponse {
    response: ApiSearchBody,
}

#[derive(Debug, Deserialize)]
struct ApiSearchBody {
    #[serde(default)]
    hits: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    #[serde(rename = "type", default)]
    hit_type: String,
    #[serde(default)]
    result: Value,
}

/// Returns true when a title contains one of [`SKIPPED_TITLE_TERMS`].
///
/// Plain substring containment on the lowercased title, so a legitimate song
/// with one of these words in its name is skipped too.
pub fn is_skipped_title(title: &str) -> bool {
    let lowered = title.to_lowercase();
    SKIPPED_TITLE_TERMS
        .iter()
        .any(|term| lowered.contains(term))
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| GeniusError::Parse(format!("Invalid CSS selector '{css}': {e:?}")))
}

/// Parser for Genius responses.
///
/// Stateless; one instance lives on the client.
#[derive(Debug, Clone, Default)]
pub struct GeniusParser;

impl GeniusParser {
    pub fn new() -> Self {
        Self
    }

    /// Every artist hit of a web search response, in service order.
    ///
    /// Hits whose `result._type` is not `"artist"` are ignored, as are artist
    /// hits missing a name or id.
    pub fn parse_artist_hits(&self, body: &str) -> Result<Vec<ArtistIdentity>> {
        let payload: WebSearchResponse = serde_json::from_str(body)
            .map_err(|e| GeniusError::Parse(format!("Invalid artist search payload: {e}")))?;

        let mut artists = Vec::new();
        for section in &payload.response.sections {
            for hit in &section.hits {
                if hit.result.get("_type").and_then(Value::as_str) != Some("artist") {
                    continue;
                }

                let name = hit.result.get("name").and_then(Value::as_str);
                let id = hit.result.get("id").and_then(Value::as_u64);
                match (name, id) {
                    (Some(name), Some(id)) => artists.push(ArtistIdentity::new(name, id)),
                    _ => log::debug!("Skipping artist hit without name or id: {}", hit.result),
                }
            }
        }

        log::debug!(
            "Parsed {} artist hits from {} sections",
            artists.len(),
            payload.response.sections.len()
        );
        Ok(artists)
    }

    /// The first artist hit of a web search response.
    pub fn parse_artist_search(&self, body: &str, query: &str) -> Result<ArtistIdentity> {
        self.parse_artist_hits(body)?
            .into_iter()
            .next()
            .ok_or_else(|| GeniusError::NotFound(format!("No artist matching '{query}'")))
    }

    /// Parse one page of a popularity-sorted song search.
    ///
    /// A hit is kept when it is a song, its title is not skipped by
    /// [`is_skipped_title`], and its primary artist is `artist`.
    pub fn parse_song_search(
        &self,
        body: &str,
        artist: &ArtistIdentity,
        page_number: u32,
    ) -> Result<SongPage> {
        let payload: ApiSearchResponse = serde_json::from_str(body)
            .map_err(|e| GeniusError::Parse(format!("Invalid song search payload: {e}")))?;

        let total_hits = payload.response.hits.len();
        let mut songs = Vec::new();

        for hit in payload.response.hits {
            if hit.hit_type != "song" {
                continue;
            }

            let title = match hit.result.get("title").and_then(Value::as_str) {
                Some(title) => title.to_string(),
                None => {
                    log::debug!("Skipping song hit without a title");
                    continue;
                }
            };

            let song = SongSummary::new(title, hit.result);
            let Some(primary_artist_id) = song.primary_artist_id() else {
                log::debug!("Skipping '{}': no primary artist id", song.title);
                continue;
            };

            if is_skipped_title(&song.title) {
                log::trace!("Skipping variant listing '{}'", song.title);
                continue;
            }

            if primary_artist_id != artist.id {
                log::trace!(
                    "Skipping '{}': primary artist {} is not {}",
                    song.title,
                    primary_artist_id,
                    artist.id
                );
                continue;
            }

            songs.push(song);
        }

        log::debug!(
            "Kept {} of {} hits on page {page_number} for {artist}",
            songs.len(),
            total_hits
        );

        Ok(SongPage { songs, page_number })
    }

    /// Extract lyrics text from a rendered song page.
    ///
    /// Uses the first `div.lyrics` when present. Otherwise every
    /// `data-lyrics-container` block is read with `<br>` as a line break and
    /// the blocks are joined by newlines.
    pub fn parse_lyrics(&self, document: &Html) -> Result<String> {
        let lyrics_selector = selector(LYRICS_SELECTOR)?;
        if let Some(container) = document.select(&lyrics_selector).next() {
            return Ok(container.text().collect::<String>().trim().to_string());
        }

        let container_selector = selector(LYRICS_CONTAINER_SELECTOR)?;
        let blocks: Vec<String> = document
            .select(&container_selector)
            .map(|container| container_text(&container))
            .collect();

        if blocks.is_empty() {
            return Err(GeniusError::NotFound(
                "Lyrics container not found".to_string(),
            ));
        }

        log::debug!("Read lyrics from {} containers", blocks.len());
        Ok(blocks.join("\n").trim().to_string())
    }
}

/// Visible text of a container with `<br>` rendered as a newline.
fn container_text(container: &ElementRef) -> String {
    let mut text = String::new();
    for node in container.descendants() {
        match node.value() {
            Node::Text(fragment) => text.push_str(fragment),
            Node::Element(element) if element.name() == "br" => text.push('\n'),
            _ => {}
        }
    }
    text
}
