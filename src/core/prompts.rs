use crate::domain::model::SongInfo;

/// Upper bound on answer length requested from the remote service.
pub const ANSWER_WORD_LIMIT: usize = 150;

pub fn identify_prompt(raw_title: &str) -> String {
    format!(
        r#"Extract the artist and song title from this video title. Return ONLY a JSON object with "artist" and "title" fields and nothing else.

Video title: "{raw_title}"

Example output: {{"artist": "Ed Sheeran", "title": "Perfect"}}

Rules:
- Drop decorations such as "(Official Music Video)", "(Official Video)", "[HD]", "(Lyrics)", "(Lyric Video)", "[Official Audio]", "[Loop]", "[Extended]", "[Remix]"
- Drop emojis and stray special characters
- For "Artist - Title" style titles, split on the separator
- If no artist can be found, use "Unknown Artist"
- Return valid JSON only, without markdown fences"#
    )
}

pub fn answer_prompt(question: &str, song: &SongInfo) -> String {
    let unknown_hint = if song.has_artist() {
        ""
    } else {
        "\n- Since the artist is unknown, suggest searching by the song title and mention chord progressions common to similar songs"
    };

    format!(
        r#"You are a music assistant who helps people learn songs on guitar: tabs, chords and practical theory.

The user is asking about this song: {song}

User question: {question}

Answer concisely (under {limit} words) with:
- Brief, actionable advice
- Chord progressions or tab suggestions when relevant
- Where to find resources (Ultimate Guitar, Songsterr, YouTube lessons), with links
- Difficulty level and tips for beginners when it applies{unknown_hint}

Stay encouraging and focused on helping someone play this song."#,
        song = song.describe(),
        limit = ANSWER_WORD_LIMIT,
    )
}
