use crate::model::{SongMetadata, SongValue};
use std::path::Path;

#[derive(thiserror::Error, Debug)]
pub enum ChartImportError {
    #[error("io error: {0}")]
    Io(String),
}

pub fn read_song_metadata_path(path: &Path) -> Result<SongMetadata, ChartImportError> {
    let text = std::fs::read_to_string(path).map_err(|e| ChartImportError::Io(e.to_string()))?;
    Ok(parse_song_metadata(&text))
}

/// Collects `Key = Value` lines of the `[Song]` section, or of the preamble
/// before any section. A stored `Resolution` is skipped.
pub fn parse_song_metadata(text: &str) -> SongMetadata {
    let mut meta = SongMetadata::new();
    let mut section: Option<&str> = None;

    for line in text.lines() {
        let line = line.trim();
        if let Some(name) = section_header(line) {
            section = Some(name);
            continue;
        }
        if !matches!(section, None | Some("Song")) {
            continue;
        }
        let Some((key, value)) = parse_item(line) else {
            continue;
        };
        if key == SongMetadata::RESOLUTION_KEY {
            continue;
        }
        meta.insert(key, SongValue::classify(value));
    }

    meta
}

fn section_header(line: &str) -> Option<&str> {
    let name = line.strip_prefix('[')?.split(']').next()?;
    let is_word = !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_');
    is_word.then_some(name)
}

fn parse_item(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    let value = value.trim();
    let is_word = !key.is_empty() && key.chars().all(|c| c.is_alphanumeric() || c == '_');
    (is_word && !value.is_empty()).then_some((key, value))
}
