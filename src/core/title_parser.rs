//! Offline reduction of a noisy video title to an artist/title guess.
//!
//! Parsing runs in two steps. [`normalize`] strips bracketed decorations
//! such as `(Official Music Video)` or `[HD]` and a handful of emoji,
//! and [`split`] tries a fixed list of separator patterns before falling
//! back to the rightmost ` - ` or `: `.

use crate::domain::model::SongInfo;
use regex::Regex;
use std::sync::LazyLock;

/// Decorations removed when they fill a whole `( )` or `[ ]` group.
const DECORATIONS: &[&str] = &[
    "official music video",
    "official video",
    "official audio",
    "official",
    "lyric video",
    "lyrics",
    "music video",
    "hd",
    "extended",
    "remix",
];

/// Emoji as they appear after UTF-8 was mis-read as Windows-1252, plus
/// the intact characters themselves.
const EMOJI_ARTIFACTS: &[&str] = &[
    "\u{f0}\u{178}\u{17d}\u{b5}",
    "\u{f0}\u{178}\u{2019}\u{a5}",
    "\u{f0}\u{178}\u{201d}\u{a5}",
    "\u{e2}\u{ad}",
    "\u{1f3b5}",
    "\u{1f4a5}",
    "\u{1f525}",
    "\u{2b50}",
];

static DECORATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    let words = DECORATIONS
        .iter()
        .map(|d| d.replace(' ', r"\s+"))
        .collect::<Vec<_>>()
        .join("|");
    // "[Loop]", "[5 Hours Loop]", "(10 Hour Loop)"
    let inner = format!(r"(?:{}|(?:\d+\s+hours?\s+)?loop)", words);
    Regex::new(&format!(r"(?i)\(\s*{inner}\s*\)|\[\s*{inner}\s*\]"))
        .expect("decoration pattern is valid")
});

/// Separator patterns, tried in order; first match wins.
static SPLIT_PATTERNS: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        "^(.+?)\\s*[-\u{2013}\u{2014}]\\s*(.+)$",
        r"^(.+?)\s*:\s*(.+)$",
        r#"^(.+?)\s*"(.+?)"$"#,
        r"^(.+?)\s*'(.+?)'$",
    ]
    .map(|p| Regex::new(p).expect("split pattern is valid"))
});

/// Strips decorations and emoji artifacts, then trims.
///
/// Removal repeats until nothing changes so that text exposed by one
/// removal (`"(Lyr(HD)ics)"`) is handled too. This makes the function
/// idempotent.
pub fn normalize(raw: &str) -> String {
    let mut current = raw.to_string();
    loop {
        let mut next = DECORATION_RE.replace_all(&current, "").into_owned();
        for artifact in EMOJI_ARTIFACTS {
            next = next.replace(artifact, "");
        }
        if next == current {
            break;
        }
        current = next;
    }
    current.trim().to_string()
}

/// Splits a cleaned title into artist and title. Never fails.
pub fn split(clean: &str) -> SongInfo {
    for pattern in SPLIT_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(clean) {
            let info = SongInfo::new(&caps[1], &caps[2]);
            if !info.title.is_empty() {
                return info;
            }
        }
    }

    if let Some(info) = split_at_last_separator(clean) {
        return info;
    }

    SongInfo::untitled_artist(clean)
}

/// `split(normalize(raw))`: the local fallback parse.
pub fn parse(raw: &str) -> SongInfo {
    split(&normalize(raw))
}

fn split_at_last_separator(clean: &str) -> Option<SongInfo> {
    let index = [clean.rfind(" - "), clean.rfind(": ")]
        .into_iter()
        .flatten()
        .max()?;

    // both separators are ASCII, so index + 2 stays on a char boundary
    let info = SongInfo::new(&clean[..index], &clean[index + 2..]);
    if info.has_artist() && !info.title.is_empty() {
        Some(info)
    } else {
        None
    }
}


/// Property-based tests using proptest
#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Titles assembled from words, separators and decorations.
    fn noisy_title() -> impl Strategy<Value = String> {
        let noise = prop::sample::select(vec![
            " - ",
            " \u{2013} ",
            ": ",
            "\"",
            "'",
            "(Official Music Video)",
            "[HD]",
            "[5 Hours Loop]",
            "(Lyr",
            "ics)",
            "\u{f0}\u{178}\u{17d}\u{b5}",
            "\u{1f525}",
        ])
        .prop_map(str::to_string);
        let piece = prop_oneof!["[A-Za-z0-9 ]{1,12}", noise];
        prop::collection::vec(piece, 0..8).prop_map(|parts| parts.concat())
    }

    proptest! {
        /// Normalizing twice gives the same result as normalizing once
        #[test]
        fn normalize_is_idempotent(raw in noisy_title()) {
            let once = normalize(&raw);
            prop_assert_eq!(normalize(&once), once);
        }

        /// Also holds for arbitrary text
        #[test]
        fn normalize_is_idempotent_for_any_text(raw in any::<String>()) {
            let once = normalize(&raw);
            prop_assert_eq!(normalize(&once), once);
        }

        /// A non-empty cleaned title never yields an empty song title
        #[test]
        fn split_keeps_a_title(raw in noisy_title()) {
            let clean = normalize(&raw);
            prop_assume!(!clean.is_empty());
            let info = split(&clean);
            prop_assert!(!info.title.is_empty(), "empty title for {:?}", clean);
            prop_assert_eq!(info.title.trim(), info.title.as_str());
            prop_assert_eq!(info.artist.trim(), info.artist.as_str());
        }
    }
}
