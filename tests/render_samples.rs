//! Rendering tests — parse sample files and render them as plain text.

use chordlib::{extract_title, render_file_to_text, song_entries, SongEntry};
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn songs_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("songs")
}

#[test]
fn render_amazing_grace_text() {
    let text = render_file_to_text(songs_dir().join("amazing-grace.cho"))
        .expect("Failed to render amazing-grace");

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        &lines[..5],
        &[
            "Amazing Grace",
            "John Newton",
            "Key: G  Tempo: 72  Time: 3/4",
            "CCLI: 22025",
            "Subtitle: Traditional hymn",
        ]
    );

    assert!(text.contains("(Intro)\nG  D  G\n"), "{text}");
    assert!(
        text.contains(
            "[Verse 1]\n  G       G7         C         G\nA-ma-zing grace, how sweet the sound\n"
        ),
        "{text}"
    );
    assert!(text.contains("[Chorus]\n"), "{text}");
    assert!(!text.contains("anchor"), "plain text must not carry markup");
    assert!(!text.contains("capo"), "source comments are dropped");
}

#[test]
fn render_tongnian_text() {
    let text = render_file_to_text(songs_dir().join("童年.cho")).expect("Failed to render 童年");

    assert!(text.starts_with("童年\n罗大佑\nKey: C\n"), "{text}");
    assert!(text.contains("[Verse]\nC       Am\n池塘边的榕树上\n"), "{text}");
}

#[test]
fn listing_uses_lightweight_title_scan() {
    let entries = song_entries(songs_dir()).expect("Failed to list songs");
    assert_eq!(
        entries,
        vec![
            SongEntry {
                filename: "amazing-grace.cho".into(),
                title: "Amazing Grace".into(),
            },
            SongEntry {
                filename: "messy.cho".into(),
                // the scan keeps the first title, unlike the full parse
                title: "Broken: A Song".into(),
            },
            SongEntry {
                filename: "童年.cho".into(),
                title: "童年".into(),
            },
        ]
    );
}

#[test]
fn extract_title_matches_full_parse_for_simple_files() {
    let source = std::fs::read_to_string(songs_dir().join("amazing-grace.cho")).unwrap();
    let song = chordlib::parse_chordpro(&source);
    assert_eq!(extract_title(&source), Some(song.metadata.title));
}
