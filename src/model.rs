//! Data model for a parsed ChordPro song sheet.
//!
//! These structures are the render-ready output of the parser: metadata
//! plus an ordered list of sections, each holding chord/lyric line pairs
//! already aligned for monospace display.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A complete song sheet parsed from ChordPro text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub metadata: Metadata,
    /// Sections in input order. Never contains an empty section.
    pub sections: Vec<Section>,
}

/// Document-level metadata collected from directives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub title: String,
    pub artist: String,
    pub key: String,
    pub tempo: String,
    pub time: String,
    /// Extension fields (Subtitle, CCLI, Copyright, Composer, Lyricist)
    pub extras: BTreeMap<String, String>,
}

/// Kind of a section block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Standard,
    Verse,
    Chorus,
    Bridge,
}

/// A contiguous labeled block of rendered lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    #[serde(rename = "type")]
    pub kind: SectionKind,
    /// Display label, possibly empty
    pub label: String,
    pub lines: Vec<RenderedLine>,
}

/// One output line inside a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RenderedLine {
    /// Blank source line, kept for layout fidelity
    Empty,
    /// `{comment: ...}` / `{c: ...}` text
    Comment { text: String },
    /// Chord line above a lyric line. `lyrics` may contain anchor markup.
    #[serde(rename = "line")]
    Content { chords: String, lyrics: String },
}

impl Song {
    /// Total number of rendered lines across all sections.
    pub fn line_count(&self) -> usize {
        self.sections.iter().map(|s| s.lines.len()).sum()
    }

    /// Sections of the given kind, in order.
    pub fn sections_of(&self, kind: SectionKind) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(move |s| s.kind == kind)
    }
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            title: "Untitled".to_string(),
            artist: "Unknown".to_string(),
            key: String::new(),
            tempo: String::new(),
            time: String::new(),
            extras: BTreeMap::new(),
        }
    }
}

impl SectionKind {
    /// Label used when a start-of-section directive carries none.
    pub fn default_label(self) -> &'static str {
        match self {
            SectionKind::Standard => "",
            SectionKind::Verse => "Verse",
            SectionKind::Chorus => "Chorus",
            SectionKind::Bridge => "Bridge",
        }
    }
}

impl Section {
    pub fn new(kind: SectionKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            lines: Vec::new(),
        }
    }

    /// The unlabeled block that holds lines outside any section directive.
    pub fn standard() -> Self {
        Self::new(SectionKind::Standard, "")
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
