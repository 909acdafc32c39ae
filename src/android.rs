//! JNI bindings for Android.
//!
//! These functions are called from Kotlin via the JNI bridge.

use jni::objects::{JClass, JString};
use jni::sys::jstring;
use jni::JNIEnv;

use crate::{parse_chordpro, render_text, song_to_json};

/// Parse ChordPro text and return the song as JSON.
///
/// Called from Kotlin as:
///   external fun parseToJson(text: String): String?
#[no_mangle]
pub extern "system" fn Java_com_chordlib_app_ChordLib_parseToJson(
    mut env: JNIEnv,
    _class: JClass,
    text: JString,
) -> jstring {
    let source: String = match env.get_string(&text) {
        Ok(s) => s.into(),
        Err(_) => return std::ptr::null_mut(),
    };

    match song_to_json(&parse_chordpro(&source)) {
        Ok(json) => match env.new_string(&json) {
            Ok(js) => js.into_raw(),
            Err(_) => std::ptr::null_mut(),
        },
        Err(_) => std::ptr::null_mut(),
    }
}

/// Parse ChordPro text and return a plain-text sheet.
///
/// Called from Kotlin as:
///   external fun renderText(text: String): String?
#[no_mangle]
pub extern "system" fn Java_com_chordlib_app_ChordLib_renderText(
    mut env: JNIEnv,
    _class: JClass,
    text: JString,
) -> jstring {
    let source: String = match env.get_string(&text) {
        Ok(s) => s.into(),
        Err(_) => return std::ptr::null_mut(),
    };

    match env.new_string(render_text(&source)) {
        Ok(js) => js.into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}
