//! Document assembler — owns the current section while lines stream in.

use crate::model::{Metadata, RenderedLine, Section, SectionKind, Song};

/// Builds a [`Song`] from rendered lines and section transitions.
///
/// Exactly one section is current at any time. Closing a section moves it
/// into the finished list only when it holds at least one line.
#[derive(Debug)]
pub struct SongBuilder {
    sections: Vec<Section>,
    current: Section,
}

impl SongBuilder {
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
            current: Section::standard(),
        }
    }

    /// Append a line to the current section.
    pub fn push_line(&mut self, line: RenderedLine) {
        self.current.lines.push(line);
    }

    /// Close the current section and start a new one.
    pub fn open_section(&mut self, kind: SectionKind, label: impl Into<String>) {
        self.replace_current(Section::new(kind, label));
        log::trace!(
            "opened {:?} section {:?}",
            self.current.kind,
            self.current.label
        );
    }

    /// Close the current section and fall back to an unlabeled standard one.
    pub fn close_section(&mut self) {
        self.replace_current(Section::standard());
    }

    /// Close the final section and produce the song.
    pub fn finish(mut self, metadata: Metadata) -> Song {
        self.close_section();
        Song {
            metadata,
            sections: self.sections,
        }
    }

    fn replace_current(&mut self, next: Section) {
        let done = std::mem::replace(&mut self.current, next);
        if done.is_empty() {
            log::debug!("discarded empty {:?} section {:?}", done.kind, done.label);
        } else {
            log::trace!(
                "closed {:?} section {:?} ({} lines)",
                done.kind,
                done.label,
                done.lines.len()
            );
            self.sections.push(done);
        }
    }
}

impl Default for SongBuilder {
    fn default() -> Self {
        Self::new()
    }
}
