//! Line tokenizer — splits a content line into chord and lyric tokens.

use once_cell::sync::Lazy;
use regex::Regex;

/// Shortest `[...]` run; an unmatched `[` never matches and stays lyric text.
static CHORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[.*?\]").expect("chord pattern is valid"));

/// One element of a content line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Inline chord, brackets stripped (`[Am7]` → `Am7`).
    Chord(String),
    /// Lyric text, verbatim including interior spacing.
    Lyric {
        text: String,
        /// Set when a chord sits directly on this token's first character.
        underline_first: bool,
    },
}

impl Token {
    /// Lyric token with no anchor mark.
    pub fn lyric(text: impl Into<String>) -> Self {
        Token::Lyric {
            text: text.into(),
            underline_first: false,
        }
    }
}

/// Split a raw (untrimmed) content line into tokens.
///
/// Bracketed chords become [`Token::Chord`]; the text between them becomes
/// [`Token::Lyric`] with no anchor marks yet. Empty pieces are dropped.
pub fn tokenize(line: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut last = 0;

    for m in CHORD_PATTERN.find_iter(line) {
        if m.start() > last {
            tokens.push(Token::lyric(&line[last..m.start()]));
        }
        let bracketed = m.as_str();
        tokens.push(Token::Chord(bracketed[1..bracketed.len() - 1].to_string()));
        last = m.end();
    }

    if last < line.len() {
        tokens.push(Token::lyric(&line[last..]));
    }

    tokens
}
