use crate::core::title_probe::is_video_page;
use crate::domain::model::SongInfo;

/// Identifies the page state an in-flight request was issued against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// A question ready to send, tied to the song it was asked about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingQuestion {
    pub question: String,
    pub song: SongInfo,
    pub ticket: Ticket,
}

/// Per-tab state: the page being watched and the song identified on it.
///
/// Every navigation bumps the generation, so results of requests issued
/// for an earlier page are recognised as stale and dropped.
#[derive(Debug, Default)]
pub struct Session {
    current_url: Option<String>,
    song: Option<SongInfo>,
    generation: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a page change. Returns a ticket for identifying the new
    /// page when it is a video page and differs from the current one.
    pub fn navigate(&mut self, url: &str) -> Option<Ticket> {
        if self.current_url.as_deref() == Some(url) {
            return None;
        }

        tracing::debug!("URL changed to {}, resetting song", url);
        self.current_url = Some(url.to_string());
        self.song = None;
        self.generation += 1;

        is_video_page(url).then_some(Ticket(self.generation))
    }

    pub fn current_url(&self) -> Option<&str> {
        self.current_url.as_deref()
    }

    pub fn song(&self) -> Option<&SongInfo> {
        self.song.as_ref()
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }

    /// Stores an identification result unless the page changed meanwhile.
    pub fn accept_song(&mut self, ticket: Ticket, song: SongInfo) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!("Discarding stale song result {:?}", song);
            return false;
        }
        self.song = Some(song);
        true
    }

    /// Prepares a question for sending. Blank questions and questions asked
    /// before a song is known are ignored.
    pub fn ask(&self, question: &str) -> Option<PendingQuestion> {
        let question = question.trim();
        if question.is_empty() {
            return None;
        }
        let song = self.song.clone()?;
        Some(PendingQuestion {
            question: question.to_string(),
            song,
            ticket: Ticket(self.generation),
        })
    }

    /// Returns `answer` only if it still belongs to the current page.
    pub fn accept_answer<T>(&self, ticket: Ticket, answer: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(answer)
        } else {
            tracing::debug!("Discarding stale answer");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIDEO_A: &str = "https://www.youtube.com/watch?v=aaaa";
    const VIDEO_B: &str = "https://www.youtube.com/watch?v=bbbb";

    #[test]
    fn test_navigate_to_video_issues_ticket() {
        let mut session = Session::new();
        let ticket = session.navigate(VIDEO_A).unwrap();

        assert!(session.accept_song(ticket, SongInfo::new("Adele", "Hello")));
        assert_eq!(session.song(), Some(&SongInfo::new("Adele", "Hello")));
        assert_eq!(session.current_url(), Some(VIDEO_A));
    }

    #[test]
    fn test_same_url_is_not_a_navigation() {
        let mut session = Session::new();
        let ticket = session.navigate(VIDEO_A).unwrap();
        session.accept_song(ticket, SongInfo::new("Adele", "Hello"));

        assert!(session.navigate(VIDEO_A).is_none());
        assert!(session.song().is_some());
    }

    #[test]
    fn test_non_video_page_clears_song() {
        let mut session = Session::new();
        let ticket = session.navigate(VIDEO_A).unwrap();
        session.accept_song(ticket, SongInfo::new("Adele", "Hello"));

        assert!(session.navigate("https://www.youtube.com/").is_none());
        assert!(session.song().is_none());
    }

    #[test]
    fn test_stale_results_are_discarded() {
        let mut session = Session::new();
        let first = session.navigate(VIDEO_A).unwrap();
        let second = session.navigate(VIDEO_B).unwrap();

        assert!(!session.accept_song(first, SongInfo::new("Old", "Song")));
        assert!(session.song().is_none());
        assert!(session.accept_song(second, SongInfo::new("New", "Song")));

        let pending = session.ask("chords?").unwrap();
        session.navigate(VIDEO_A);
        assert_eq!(session.accept_answer(pending.ticket, "G C D"), None);
    }

    #[test]
    fn test_ask_requires_song_and_question() {
        let mut session = Session::new();
        assert!(session.ask("chords?").is_none());

        let ticket = session.navigate(VIDEO_A).unwrap();
        session.accept_song(ticket, SongInfo::untitled_artist("Imagine"));

        assert!(session.ask("   ").is_none());
        let pending = session.ask("  chords? ").unwrap();
        assert_eq!(pending.question, "chords?");
        assert_eq!(pending.song, SongInfo::untitled_artist("Imagine"));
        assert_eq!(session.accept_answer(pending.ticket, "Am F C G"), Some("Am F C G"));
    }
}
