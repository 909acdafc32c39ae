//! chordlib — ChordPro song-sheet parser and chord/lyric layout library.
//!
//! Turns chord-annotated lyric markup into a render-ready document: metadata,
//! verse/chorus/bridge sections, and chord lines padded so each chord sits
//! above the lyric character it is sung on, with wide (e.g. CJK) characters
//! counted as two columns.
//!
//! # Example
//! ```
//! use chordlib::{parse_chordpro, RenderedLine};
//!
//! let song = parse_chordpro("{title: Test Song}\n{soc}\n[G]Shine on [D]me\n{eoc}");
//! assert_eq!(song.metadata.title, "Test Song");
//! assert_eq!(song.sections.len(), 1);
//! if let RenderedLine::Content { chords, .. } = &song.sections[0].lines[0] {
//!     assert_eq!(chords, "G        D");
//! }
//! ```

pub mod align;
pub mod assembler;
pub mod directive;
pub mod error;
pub mod listing;
pub mod model;
pub mod parser;
pub mod renderer;
pub mod tokenizer;
pub mod width;

#[cfg(target_os = "android")]
pub mod android;

use std::path::Path;

pub use align::AnchorMarkup;
pub use error::ChordError;
pub use listing::{extract_title, song_entries, SongEntry};
pub use model::*;
pub use parser::{parse_chordpro, parse_chordpro_with_options, ParseOptions};
pub use renderer::render_text;
/// Render a parsed Song as plain text.
///
/// Lyric lines are printed as stored, so a song parsed with the default
/// options keeps its `<span class="anchor">` markup. Parse with
/// [`ParseOptions::plain`], or use [`render_text`], for a markup-free sheet.
pub use renderer::render_song_to_text;
pub use width::{char_width, string_width};

/// Parse a ChordPro file from a file path.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Song, ChordError> {
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|e| ChordError::io(path, e))?;
    parse_bytes(&data)
}

/// Parse ChordPro from raw bytes. A leading UTF-8 byte-order mark is skipped.
pub fn parse_bytes(data: &[u8]) -> Result<Song, ChordError> {
    Ok(parse_chordpro(decode_utf8(data)?))
}

fn decode_utf8(data: &[u8]) -> Result<&str, ChordError> {
    let data = data.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(data);
    Ok(std::str::from_utf8(data)?)
}

/// Convert a parsed song to a JSON string.
/// Useful for passing data across FFI boundaries.
pub fn song_to_json(song: &Song) -> Result<String, ChordError> {
    Ok(serde_json::to_string_pretty(song)?)
}

/// Parse a ChordPro file and render it directly to plain text.
pub fn render_file_to_text<P: AsRef<Path>>(path: P) -> Result<String, ChordError> {
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|e| ChordError::io(path, e))?;
    Ok(render_text(decode_utf8(&data)?))
}

// ═══════════════════════════════════════════════════════════════════════
// C FFI — for iOS (static library) and Android (JNI)
// ═══════════════════════════════════════════════════════════════════════

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Read a borrowed, null-terminated UTF-8 C string.
///
/// # Safety
/// `ptr` must be null or a valid null-terminated C string.
unsafe fn borrow_c_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(ptr) }.to_str().ok()
}

fn into_c_string(s: String) -> *mut c_char {
    CString::new(s)
        .map(CString::into_raw)
        .unwrap_or(std::ptr::null_mut())
}

/// Parse ChordPro text and return the song as a JSON C string.
/// The caller must free the returned string with `chordlib_free_string`.
///
/// # Safety
/// `text` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn chordlib_parse_to_json(text: *const c_char) -> *mut c_char {
    let Some(text) = (unsafe { borrow_c_str(text) }) else {
        return std::ptr::null_mut();
    };
    match song_to_json(&parse_chordpro(text)) {
        Ok(json) => into_c_string(json),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Parse ChordPro text and return a plain-text sheet as a C string.
/// The caller must free the returned string with `chordlib_free_string`.
///
/// # Safety
/// `text` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn chordlib_render_text(text: *const c_char) -> *mut c_char {
    match unsafe { borrow_c_str(text) } {
        Some(text) => into_c_string(render_text(text)),
        None => std::ptr::null_mut(),
    }
}

/// Return the song's title directive as a C string, or null when absent.
/// The caller must free the returned string with `chordlib_free_string`.
///
/// # Safety
/// `text` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn chordlib_extract_title(text: *const c_char) -> *mut c_char {
    match unsafe { borrow_c_str(text) }.and_then(extract_title) {
        Some(title) => into_c_string(title),
        None => std::ptr::null_mut(),
    }
}

/// Free a string previously returned by chordlib functions.
///
/// # Safety
/// `ptr` must be a string previously returned by a chordlib function, or null.
#[no_mangle]
pub unsafe extern "C" fn chordlib_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}
