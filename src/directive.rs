//! Directive interpreter — classifies source lines and decodes `{...}` directives.
//!
//! Directive text can match several patterns at once (`{comment_box}` looks
//! like both a comment and a metadata key), so the checks run in a fixed
//! order: comment, start of section, end of section, metadata.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{Metadata, SectionKind};

static LABEL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"label="(.*?)""#).expect("label pattern is valid"));

/// Classification of one physical source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `{...}` control line
    Directive(Directive),
    /// `# ...` line; dropped from the output
    SourceComment,
    /// Whitespace only
    Blank,
    /// Lyrics and inline chords, untrimmed
    Content(&'a str),
}

/// A decoded `{...}` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    Comment(String),
    StartOfSection { kind: SectionKind, label: String },
    EndOfSection,
    Metadata { field: MetadataField, value: String },
    /// Metadata-shaped directive whose key is not recognized
    Unknown { key: String },
}

/// Metadata slot a directive key writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataField {
    Title,
    Subtitle,
    Artist,
    Key,
    Tempo,
    Time,
    Ccli,
    Copyright,
    Composer,
    Lyricist,
}

impl MetadataField {
    /// Map a lower-cased, trimmed directive key to its field.
    pub fn from_key(key: &str) -> Option<Self> {
        Some(match key {
            "title" | "t" => MetadataField::Title,
            "subtitle" | "st" => MetadataField::Subtitle,
            "artist" | "a" | "author" => MetadataField::Artist,
            "key" | "k" => MetadataField::Key,
            "tempo" | "bpm" => MetadataField::Tempo,
            "time" => MetadataField::Time,
            "ccli" => MetadataField::Ccli,
            "copyright" => MetadataField::Copyright,
            "composer" => MetadataField::Composer,
            "lyricist" => MetadataField::Lyricist,
            _ => return None,
        })
    }

    /// Name under which an extension field is stored in `Metadata::extras`.
    pub fn extras_name(self) -> Option<&'static str> {
        match self {
            MetadataField::Subtitle => Some("Subtitle"),
            MetadataField::Ccli => Some("CCLI"),
            MetadataField::Copyright => Some("Copyright"),
            MetadataField::Composer => Some("Composer"),
            MetadataField::Lyricist => Some("Lyricist"),
            _ => None,
        }
    }

    /// Store `value`, replacing whatever the field held before.
    pub fn apply(self, metadata: &mut Metadata, value: String) {
        if let Some(name) = self.extras_name() {
            metadata.extras.insert(name.to_string(), value);
            return;
        }
        match self {
            MetadataField::Title => metadata.title = value,
            MetadataField::Artist => metadata.artist = value,
            MetadataField::Key => metadata.key = value,
            MetadataField::Tempo => metadata.tempo = value,
            MetadataField::Time => metadata.time = value,
            _ => {}
        }
    }
}

/// Classify one physical line.
pub fn classify_line(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();

    if let Some(inner) = trimmed
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
    {
        return LineKind::Directive(parse_directive(inner));
    }
    if trimmed.starts_with('#') {
        return LineKind::SourceComment;
    }
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    LineKind::Content(line)
}

/// Decode the text between a directive's braces.
pub fn parse_directive(inner: &str) -> Directive {
    if inner.starts_with("comment") || inner.starts_with("c:") || inner.starts_with("c ") {
        return Directive::Comment(comment_text(inner));
    }

    if inner.starts_with("start_of") || inner == "soc" || inner == "sov" {
        let kind = section_kind(inner);
        let label = match LABEL_PATTERN.captures(inner) {
            Some(caps) => caps[1].to_string(),
            None => kind.default_label().to_string(),
        };
        return Directive::StartOfSection { kind, label };
    }

    if inner.starts_with("end_of") || inner == "eoc" || inner == "eov" {
        return Directive::EndOfSection;
    }

    let (key, value) = inner.split_once(':').unwrap_or((inner, ""));
    let key = key.to_lowercase().trim().to_string();
    let value = value.trim().to_string();

    match MetadataField::from_key(&key) {
        Some(field) => Directive::Metadata { field, value },
        None => Directive::Unknown { key },
    }
}

/// Text after the first colon, or the directive minus its `c ` prefix.
fn comment_text(inner: &str) -> String {
    match inner.split_once(':') {
        Some((_, rest)) => rest.trim().to_string(),
        None => strip_short_comment_prefix(inner).trim().to_string(),
    }
}

fn strip_short_comment_prefix(inner: &str) -> &str {
    if let Some(rest) = inner.strip_prefix('c') {
        let stripped = rest.trim_start();
        if stripped.len() < rest.len() {
            return stripped;
        }
    }
    inner
}

fn section_kind(inner: &str) -> SectionKind {
    if inner.contains("chorus") || inner == "soc" {
        SectionKind::Chorus
    } else if inner.contains("verse") || inner == "sov" {
        SectionKind::Verse
    } else if inner.contains("bridge") {
        SectionKind::Bridge
    } else {
        SectionKind::Standard
    }
}
