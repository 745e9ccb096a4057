use serde::{Deserialize, Serialize};
use std::fmt;

/// An artist as Genius names and numbers it.
///
/// The spelling a user types rarely matches the catalog (`"tupac"` is stored
/// as `"2Pac"`), so song lookups take this resolved identity rather than raw
/// user input.
///
/// # Examples
///
/// ```rust
/// use genius_lyrics::ArtistIdentity;
///
/// let artist = ArtistIdentity::new("2Pac", 59);
/// assert_eq!(artist.to_string(), "2Pac (59)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtistIdentity {
    /// Canonical artist name
    pub name: String,
    /// Genius artist id
    pub id: u64,
}

impl ArtistIdentity {
    pub fn new(name: impl Into<String>, id: u64) -> Self {
        Self {
            name: name.into(),
            id,
        }
    }
}

impl fmt::Display for ArtistIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
