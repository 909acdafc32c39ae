//! Plain-text renderer — lays a parsed Song out as a monospace sheet.
//!
//! Chord lines are printed directly above their lyric lines, so the column
//! alignment computed by the parser carries straight through to any
//! fixed-width display.

mod text_builder;

use crate::model::*;
use crate::parser::{parse_chordpro_with_options, ParseOptions};
use text_builder::TextBuilder;

// ═══════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════

/// Render a parsed Song as plain text.
///
/// Lyric lines are copied through untouched, including any anchor markup;
/// parse with [`ParseOptions::plain`] (or call [`render_text`]) for a
/// markup-free sheet.
pub fn render_song_to_text(song: &Song) -> String {
    let mut text = TextBuilder::new();

    render_header(&mut text, &song.metadata);

    for section in &song.sections {
        text.blank();
        render_section(&mut text, section);
    }

    text.build()
}

/// Parse ChordPro text and render it as plain text.
pub fn render_text(source: &str) -> String {
    let song = parse_chordpro_with_options(source, &ParseOptions::plain());
    render_song_to_text(&song)
}

// ═══════════════════════════════════════════════════════════════════════
// Header & sections
// ═══════════════════════════════════════════════════════════════════════

fn render_header(text: &mut TextBuilder, meta: &Metadata) {
    text.line(&meta.title);
    text.line(&meta.artist);

    let details: Vec<String> = [("Key", &meta.key), ("Tempo", &meta.tempo), ("Time", &meta.time)]
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(name, value)| format!("{name}: {value}"))
        .collect();
    if !details.is_empty() {
        text.line(&details.join("  "));
    }

    for (name, value) in &meta.extras {
        text.line(&format!("{name}: {value}"));
    }
}

fn render_section(text: &mut TextBuilder, section: &Section) {
    if !section.label.is_empty() {
        text.line(&format!("[{}]", section.label));
    }

    for line in &section.lines {
        match line {
            RenderedLine::Empty => text.blank(),
            RenderedLine::Comment { text: comment } => text.line(&format!("({comment})")),
            RenderedLine::Content { chords, lyrics } => {
                if !chords.trim().is_empty() {
                    text.line(chords);
                }
                // chord-only lines have nothing to print below the chords
                if !lyrics.trim().is_empty() || chords.trim().is_empty() {
                    text.line(lyrics);
                }
            }
        }
    }
}
