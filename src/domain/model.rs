use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Best-guess artist/title pair for the video being watched.
///
/// `title` is trimmed and non-empty whenever the source title had any text.
/// An empty `artist` means the artist is unknown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongInfo {
    pub artist: String,
    pub title: String,
}

impl SongInfo {
    pub fn new(artist: impl AsRef<str>, title: impl AsRef<str>) -> Self {
        Self {
            artist: artist.as_ref().trim().to_string(),
            title: title.as_ref().trim().to_string(),
        }
    }

    pub fn untitled_artist(title: impl AsRef<str>) -> Self {
        Self::new("", title)
    }

    pub fn has_artist(&self) -> bool {
        !self.artist.is_empty()
    }

    /// Human-readable rendering used inside prompts.
    pub fn describe(&self) -> String {
        if self.has_artist() {
            format!("{} - {}", self.artist, self.title)
        } else {
            format!("a song titled '{}' (artist unknown)", self.title)
        }
    }
}

impl fmt::Display for SongInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_artist() {
            write!(f, "{} - {}", self.artist, self.title)
        } else {
            write!(f, "{}", self.title)
        }
    }
}

/// Tab-hosting sites the panel offers shortcut searches for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabSite {
    UltimateGuitar,
    Songsterr,
    Google,
}

impl TabSite {
    pub const ALL: [TabSite; 3] = [TabSite::UltimateGuitar, TabSite::Songsterr, TabSite::Google];

    pub fn id(&self) -> &'static str {
        match self {
            TabSite::UltimateGuitar => "ultimate-guitar",
            TabSite::Songsterr => "songsterr",
            TabSite::Google => "google",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TabSite::UltimateGuitar => "Ultimate Guitar",
            TabSite::Songsterr => "Songsterr",
            TabSite::Google => "Google Search",
        }
    }
}

impl FromStr for TabSite {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TabSite::ALL
            .into_iter()
            .find(|site| site.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown tab site: {}", s))
    }
}
