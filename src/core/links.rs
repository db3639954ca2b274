use crate::domain::model::{SongInfo, TabSite};
use url::form_urlencoded;

pub fn search_query(song: &SongInfo) -> String {
    if song.has_artist() {
        format!("{} {} tab", song.artist, song.title)
    } else {
        format!("{} tab guitar", song.title)
    }
}

/// Search page for `song` on `site`.
pub fn search_url(site: TabSite, song: &SongInfo) -> String {
    let query: String = form_urlencoded::byte_serialize(search_query(song).as_bytes()).collect();

    match site {
        TabSite::UltimateGuitar => format!(
            "https://www.ultimate-guitar.com/search.php?search_type=title&value={}",
            query
        ),
        TabSite::Songsterr => format!("https://www.songsterr.com/?pattern={}", query),
        TabSite::Google => format!("https://www.google.com/search?q={}", query),
    }
}

pub fn all_search_urls(song: &SongInfo) -> Vec<(TabSite, String)> {
    TabSite::ALL
        .into_iter()
        .map(|site| (site, search_url(site, song)))
        .collect()
}
