//! Chord-over-lyric alignment.
//!
//! Walks a token stream once, building a chord line and a lyric line. Each
//! chord is padded so that it starts at the display column of the lyric
//! character that follows it, measured with [`string_width`] so wide
//! characters keep the columns in step.

use crate::model::RenderedLine;
use crate::parser::ParseOptions;
use crate::tokenizer::{tokenize, Token};
use crate::width::string_width;

/// Markup wrapped around the lyric character a chord lands on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorMarkup {
    pub open: String,
    pub close: String,
}

impl AnchorMarkup {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    /// No markup at all; anchors are indistinguishable in the output.
    pub fn none() -> Self {
        Self::new("", "")
    }
}

impl Default for AnchorMarkup {
    fn default() -> Self {
        Self::new(r#"<span class="anchor">"#, "</span>")
    }
}

/// Flag every lyric token that directly follows a chord.
///
/// A chord followed by another chord marks nothing; the later chord claims
/// the next lyric token instead.
pub fn mark_anchors(tokens: &mut [Token]) {
    let mut pending = false;
    for token in tokens.iter_mut() {
        match token {
            Token::Chord(_) => pending = true,
            Token::Lyric { underline_first, .. } => {
                *underline_first = pending;
                pending = false;
            }
        }
    }
}

/// Lay out an already-marked token stream as a content line.
pub fn align_tokens(tokens: &[Token], options: &ParseOptions) -> RenderedLine {
    let mut chords = String::new();
    let mut lyrics = String::new();
    // Tracked alongside `chords` so padding never rescans the line.
    let mut chords_width = 0usize;
    let mut vis_len = 0usize;

    for token in tokens {
        match token {
            Token::Chord(symbol) => {
                if vis_len > chords_width {
                    let padding = vis_len - chords_width;
                    chords.extend(std::iter::repeat(' ').take(padding));
                    chords_width += padding;
                }
                chords.push_str(symbol);
                chords_width += string_width(symbol);
            }
            Token::Lyric {
                text,
                underline_first,
            } => {
                let mut chars = text.chars();
                if *underline_first {
                    if let Some(first) = chars.next() {
                        lyrics.push_str(&options.anchor.open);
                        push_lyric_char(&mut lyrics, first, options.escape_lyrics);
                        lyrics.push_str(&options.anchor.close);
                    }
                }
                for c in chars {
                    push_lyric_char(&mut lyrics, c, options.escape_lyrics);
                }
                vis_len += string_width(text);
            }
        }
    }

    RenderedLine::Content { chords, lyrics }
}

/// Tokenize, mark and align one raw content line.
pub fn align_line(line: &str, options: &ParseOptions) -> RenderedLine {
    let mut tokens = tokenize(line);
    mark_anchors(&mut tokens);
    align_tokens(&tokens, options)
}

fn push_lyric_char(out: &mut String, c: char, escape: bool) {
    if !escape {
        out.push(c);
        return;
    }
    match c {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        _ => out.push(c),
    }
}
