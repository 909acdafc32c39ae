//! Song index listing — cheap title extraction without a full parse.
//!
//! Listing pages only need a title per file, so this scans for the first
//! `{t:...}` / `{title:...}` directive instead of laying out every line.

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ChordError;

static TITLE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\{t(?:itle)?:(.*?)\}").expect("title pattern is valid"));

/// Extension of song files picked up by [`song_entries`].
pub const SONG_EXTENSION: &str = "cho";

/// One row of a song index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongEntry {
    pub filename: String,
    pub title: String,
}

impl SongEntry {
    /// Build an entry from a file's name and contents.
    ///
    /// Falls back to the filename without its `.cho` extension when the
    /// source carries no title directive.
    pub fn from_source(filename: &str, content: &str) -> Self {
        let title = extract_title(content).unwrap_or_else(|| {
            filename
                .strip_suffix(".cho")
                .unwrap_or(filename)
                .to_string()
        });
        Self {
            filename: filename.to_string(),
            title,
        }
    }
}

/// First `{t:...}` or `{title:...}` value in `content`, trimmed.
pub fn extract_title(content: &str) -> Option<String> {
    TITLE_PATTERN
        .captures(content)
        .map(|caps| caps[1].trim().to_string())
}

/// List every `.cho` file in `dir`, sorted by filename.
pub fn song_entries<P: AsRef<Path>>(dir: P) -> Result<Vec<SongEntry>, ChordError> {
    let dir = dir.as_ref();
    let mut entries = Vec::new();

    for item in fs::read_dir(dir).map_err(|e| ChordError::io(dir, e))? {
        let path = item.map_err(|e| ChordError::io(dir, e))?.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(SONG_EXTENSION) {
            continue;
        }
        let Some(filename) = path.file_name().and_then(|n| n.to_str()) else {
            log::debug!("skipping song file with non-UTF-8 name: {}", path.display());
            continue;
        };
        let bytes = fs::read(&path).map_err(|e| ChordError::io(&path, e))?;
        // mis-encoded files still get listed, with replacement characters
        let content = String::from_utf8_lossy(&bytes);
        entries.push(SongEntry::from_source(filename, &content));
    }

    entries.sort_by(|a, b| a.filename.cmp(&b.filename));
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn finds_short_and_long_title_forms() {
        assert_eq!(extract_title("{t: Short}").as_deref(), Some("Short"));
        assert_eq!(extract_title("{title:Long }").as_deref(), Some("Long"));
        assert_eq!(extract_title("{TITLE: Loud}").as_deref(), Some("Loud"));
    }

    #[test]
    fn first_title_wins_and_other_keys_are_ignored() {
        let content = "{artist: X}\n{key: G}\n{title: One}\n{title: Two}";
        assert_eq!(extract_title(content).as_deref(), Some("One"));
        assert_eq!(extract_title("{subtitle: Nope}"), None);
    }

    #[test]
    fn entry_falls_back_to_filename() {
        assert_eq!(
            SongEntry::from_source("amazing-grace.cho", "[G]A-[C]ma-zing"),
            SongEntry {
                filename: "amazing-grace.cho".into(),
                title: "amazing-grace".into(),
            }
        );
    }

    #[test]
    fn lists_only_song_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.cho"), "{title: Bee}").unwrap();
        fs::write(dir.path().join("a.cho"), "no title here").unwrap();
        fs::write(dir.path().join("notes.txt"), "{title: Skip}").unwrap();

        let entries = song_entries(dir.path()).unwrap();
        assert_eq!(
            entries,
            vec![
                SongEntry {
                    filename: "a.cho".into(),
                    title: "a".into(),
                },
                SongEntry {
                    filename: "b.cho".into(),
                    title: "Bee".into(),
                },
            ]
        );
    }

    #[test]
    fn mis_encoded_file_does_not_hide_others() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("good.cho"), "{title: Good}").unwrap();
        fs::write(dir.path().join("latin1.cho"), b"{title: Caf\xe9}").unwrap();

        let entries = song_entries(dir.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "Good");
        assert_eq!(entries[1].filename, "latin1.cho");
        assert_eq!(entries[1].title, "Caf\u{FFFD}");
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let err = song_entries("/definitely/not/here").unwrap_err();
        assert!(matches!(err, ChordError::Io { .. }));
    }
}
