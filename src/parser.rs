//! ChordPro parser — converts song-sheet text into the Song data model.
//!
//! Parsing is total: malformed directives, unclosed sections and stray
//! brackets degrade to best-effort output instead of errors.

use crate::align::{align_line, AnchorMarkup};
use crate::assembler::SongBuilder;
use crate::directive::{classify_line, Directive, LineKind};
use crate::model::*;

/// Options controlling how lyric lines are marked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Markup around the lyric character each chord lands on
    pub anchor: AnchorMarkup,
    /// HTML-escape `&`, `<` and `>` in lyric text. Off by default: lyric
    /// text is copied verbatim and escaping is left to the renderer.
    pub escape_lyrics: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            anchor: AnchorMarkup::default(),
            escape_lyrics: false,
        }
    }
}

impl ParseOptions {
    /// No anchor markup and no escaping; lyric lines are the bare text.
    pub fn plain() -> Self {
        Self {
            anchor: AnchorMarkup::none(),
            escape_lyrics: false,
        }
    }
}

/// Parse ChordPro text into a Song using the default HTML anchor markup.
pub fn parse_chordpro(text: &str) -> Song {
    parse_chordpro_with_options(text, &ParseOptions::default())
}

/// Parse ChordPro text into a Song.
pub fn parse_chordpro_with_options(text: &str, options: &ParseOptions) -> Song {
    let mut metadata = Metadata::default();
    let mut builder = SongBuilder::new();
    let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);

    // `lines` accepts both "\n" and "\r\n" and yields no trailing empty line
    for line in text.lines() {
        match classify_line(line) {
            LineKind::Directive(directive) => {
                apply_directive(directive, &mut metadata, &mut builder)
            }
            LineKind::SourceComment => {}
            LineKind::Blank => builder.push_line(RenderedLine::Empty),
            LineKind::Content(raw) => builder.push_line(align_line(raw, options)),
        }
    }

    let song = builder.finish(metadata);
    log::debug!(
        "parsed {:?}: {} sections, {} lines",
        song.metadata.title,
        song.sections.len(),
        song.line_count()
    );
    song
}

// ─── Directives ──────────────────────────────────────────────────────

fn apply_directive(directive: Directive, metadata: &mut Metadata, builder: &mut SongBuilder) {
    match directive {
        Directive::Comment(text) => builder.push_line(RenderedLine::Comment { text }),
        Directive::StartOfSection { kind, label } => builder.open_section(kind, label),
        Directive::EndOfSection => builder.close_section(),
        Directive::Metadata { field, value } => field.apply(metadata, value),
        Directive::Unknown { key } => {
            log::debug!("ignoring unrecognized directive key {key:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn end_to_end_chorus() {
        let text = "{title: Test Song}\n{key: G}\n{start_of_chorus}\n[G]Shine on [D]me\n{end_of_chorus}";
        let song = parse_chordpro_with_options(text, &ParseOptions::plain());

        assert_eq!(song.metadata.title, "Test Song");
        assert_eq!(song.metadata.key, "G");
        assert_eq!(song.metadata.artist, "Unknown");
        assert_eq!(
            song.sections,
            vec![Section {
                kind: SectionKind::Chorus,
                label: "Chorus".into(),
                lines: vec![RenderedLine::Content {
                    chords: "G        D".into(),
                    lyrics: "Shine on me".into(),
                }],
            }]
        );
    }

    #[test]
    fn last_metadata_value_wins() {
        let song = parse_chordpro("{title: A}\n{title: B}");
        assert_eq!(song.metadata.title, "B");
        assert!(song.sections.is_empty());
    }

    #[test]
    fn crlf_and_trailing_newline() {
        let song = parse_chordpro("{soc}\r\nla\r\n{eoc}\r\n");
        assert_eq!(song.sections.len(), 1);
        assert_eq!(song.sections[0].lines.len(), 1);
    }

    #[test]
    fn blank_lines_are_preserved() {
        let song = parse_chordpro("{sov}\nline one\n\n   \nline two");
        let lines = &song.sections[0].lines;
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], RenderedLine::Empty);
        assert_eq!(lines[2], RenderedLine::Empty);
    }

    #[test]
    fn source_comments_are_dropped() {
        let song = parse_chordpro("# arranged by me\nla la");
        assert_eq!(song.line_count(), 1);
    }

    #[test]
    fn comment_directive_stays_in_current_section() {
        let song = parse_chordpro("{soc}\n{c: Softly}\n[C]la\n{eoc}");
        assert_eq!(song.sections.len(), 1);
        assert_eq!(
            song.sections[0].lines[0],
            RenderedLine::Comment {
                text: "Softly".into()
            }
        );
    }

    #[test]
    fn unclosed_section_is_closed_at_end() {
        let song = parse_chordpro("{start_of_bridge}\n[Em]oh");
        assert_eq!(song.sections.len(), 1);
        assert_eq!(song.sections[0].kind, SectionKind::Bridge);
    }

    #[test]
    fn malformed_directive_becomes_lyrics() {
        let song = parse_chordpro_with_options("{title: Oops", &ParseOptions::plain());
        assert_eq!(song.metadata.title, "Untitled");
        assert_eq!(
            song.sections[0].lines[0],
            RenderedLine::Content {
                chords: String::new(),
                lyrics: "{title: Oops".into(),
            }
        );
    }

    #[test]
    fn leading_bom_does_not_hide_first_directive() {
        let song = parse_chordpro("\u{FEFF}{title: Bom}\n[C]la");
        assert_eq!(song.metadata.title, "Bom");
        assert_eq!(song.line_count(), 1);
    }

    #[test]
    fn empty_input_gives_empty_song() {
        let song = parse_chordpro("");
        assert_eq!(song.metadata, Metadata::default());
        assert!(song.sections.is_empty());
    }
}
