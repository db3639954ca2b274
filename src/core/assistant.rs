use crate::core::{prompts, title_parser};
use crate::domain::model::SongInfo;
use crate::domain::ports::RemoteService;
use crate::utils::error::AssistantError;
use serde_json::Value;

/// Artist value the remote service uses when it cannot tell who performs
/// the song. The identify prompt asks for exactly this string.
const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// Remote-assisted song identification and question answering.
///
/// Holds nothing but the remote service handle, so one instance can be
/// shared by every caller of a session.
pub struct SongAssistant<R: RemoteService> {
    remote: R,
}

impl<R: RemoteService> SongAssistant<R> {
    pub fn new(remote: R) -> Self {
        Self { remote }
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    /// Asks the remote service to parse `raw_title`, falling back to the
    /// local parser on any failure. Always resolves.
    pub async fn identify(&self, raw_title: &str) -> SongInfo {
        let prompt = prompts::identify_prompt(raw_title);

        match self.remote.call(&prompt).await {
            Ok(reply) => match parse_remote_reply(&reply) {
                Some(info) => {
                    tracing::debug!("Remote parse: {:?}", info);
                    info
                }
                None => {
                    tracing::info!("Remote reply was not a usable song JSON, using local parse");
                    tracing::debug!("Unusable reply: {}", reply);
                    title_parser::parse(raw_title)
                }
            },
            Err(e) => {
                tracing::warn!("Remote parse failed ({}), using local parse", e);
                title_parser::parse(raw_title)
            }
        }
    }

    /// Answers a free-text question about `song`. There is no local
    /// fallback, so every remote failure surfaces as [`AssistantError`].
    pub async fn answer(&self, question: &str, song: &SongInfo) -> Result<String, AssistantError> {
        let prompt = prompts::answer_prompt(question, song);
        tracing::debug!("Asking about {}: {}", song, question);

        self.remote.call(&prompt).await.map_err(|e| {
            tracing::error!("Error asking about song: {}", e);
            AssistantError::from(e)
        })
    }
}

/// Accepts the reply only when it is a JSON object whose `artist` and
/// `title` are both non-empty after trimming.
fn parse_remote_reply(reply: &str) -> Option<SongInfo> {
    let parsed: Value = serde_json::from_str(reply.trim()).ok()?;
    let fields = parsed.as_object()?;
    let info = SongInfo::new(
        fields.get("artist")?.as_str()?,
        fields.get("title")?.as_str()?,
    );

    if info.artist.is_empty() || info.title.is_empty() {
        return None;
    }

    if info.artist.eq_ignore_ascii_case(UNKNOWN_ARTIST) {
        return Some(SongInfo::untitled_artist(info.title));
    }

    Some(info)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::utils::error::RemoteCallError;
    use async_trait::async_trait;
    use proptest::prelude::*;

    struct Unreachable;

    #[async_trait]
    impl RemoteService for Unreachable {
        async fn call(&self, _prompt: &str) -> Result<String, RemoteCallError> {
            Err(RemoteCallError::MalformedEnvelope("unreachable".to_string()))
        }
    }

    struct Garbled(String);

    #[async_trait]
    impl RemoteService for Garbled {
        async fn call(&self, _prompt: &str) -> Result<String, RemoteCallError> {
            Ok(self.0.clone())
        }
    }

    /// Replies that are plain text or valid JSON other than an object.
    fn non_object_reply() -> impl Strategy<Value = String> {
        prop_oneof![
            "[^{]{0,40}",
            prop::collection::vec(".{0,12}", 0..3)
                .prop_map(|items| serde_json::to_string(&items).unwrap()),
            ".{0,20}".prop_map(|text| serde_json::to_string(&text).unwrap()),
            any::<i64>().prop_map(|n| n.to_string()),
            Just("null".to_string()),
            Just("true".to_string()),
        ]
    }

    proptest! {
        /// With the remote down, identify is exactly the local parse
        #[test]
        fn identify_matches_local_parse_when_remote_fails(raw in ".{0,60}") {
            let assistant = SongAssistant::new(Unreachable);
            let info = tokio_test::block_on(assistant.identify(&raw));
            prop_assert_eq!(info, title_parser::parse(&raw));
        }

        /// Replies that are not a JSON object are never half-used
        #[test]
        fn identify_ignores_non_object_replies(raw in ".{0,60}", reply in non_object_reply()) {
            let assistant = SongAssistant::new(Garbled(reply));
            let info = tokio_test::block_on(assistant.identify(&raw));
            prop_assert_eq!(info, title_parser::parse(&raw));
        }
    }
}
