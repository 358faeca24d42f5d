//! Save-path selection and file export for translated subtitles.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use chrono::Local;
use tracing::info;

use crate::error::{Result, SubtranError};

/// Insert `suffix` into a path just before its extension.
///
/// `movie.srt` with `_fa` becomes `movie_fa.srt`; a path without an
/// extension gets the suffix appended to its name.
fn insert_suffix(path: &Path, suffix: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let file_name = match path.extension() {
        Some(ext) => format!("{}{}.{}", stem, suffix, ext.to_string_lossy()),
        None => format!("{}{}", stem, suffix),
    };

    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(file_name),
        _ => PathBuf::from(file_name),
    }
}

/// Default save location: the original path with `_{lang}` inserted before
/// the extension.
pub fn default_save_path(original: &Path, lang: &str) -> PathBuf {
    insert_suffix(original, &format!("_{}", lang))
}

/// Interpret the interactive answer to the filename prompt. An empty answer
/// means "take the default"; a custom name lacking the subtitle extension
/// gets it appended.
pub fn apply_custom_name(input: &str, extension: &str) -> Option<PathBuf> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let wanted = format!(".{}", extension);
    if trimmed.ends_with(&wanted) {
        Some(PathBuf::from(trimmed))
    } else {
        Some(PathBuf::from(format!("{}{}", trimmed, wanted)))
    }
}

/// Offer the default save location and let the user override it with a
/// custom filename.
pub fn ask_save_path(original: &Path, lang: &str, extension: &str) -> PathBuf {
    let default_path = default_save_path(original, lang);

    println!("\n Default save location: {}", default_path.display());
    println!("Enter custom filename or press Enter to accept default");
    print!("New filename: ");
    let _ = io::stdout().flush();

    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return default_path;
    }

    apply_custom_name(&answer, extension).unwrap_or(default_path)
}

/// Write the translated document as UTF-8 to the target path re-suffixed
/// with `_{lang}_{HHMMSS}`, returning the path actually written.
///
/// The language code appears twice in the final name when the target came
/// from [`ask_save_path`] (`movie_fa.srt` → `movie_fa_fa_153012.srt`); that
/// naming shape is kept deliberately for compatibility with existing
/// consumers. An existing file at the computed path is silently overwritten.
pub async fn save_translated_file(content: &str, target: &Path, lang: &str) -> Result<PathBuf> {
    let timestamp = Local::now().format("%H%M%S");
    let final_path = insert_suffix(target, &format!("_{}_{}", lang, timestamp));

    tokio::fs::write(&final_path, content)
        .await
        .map_err(|e| match e.kind() {
            io::ErrorKind::PermissionDenied => {
                SubtranError::Save("Permission denied: Cannot write to file".to_string())
            }
            _ => SubtranError::Save(format!("Error saving file: {}", e)),
        })?;

    info!("File saved successfully: {}", final_path.display());
    println!(" File saved successfully: {}", final_path.display());

    Ok(final_path)
}
