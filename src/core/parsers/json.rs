use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use crate::core::data::{CodeTranslateWords, CompactTable, TranslateData};

/// Reads per-language translations (`{ "<lang>": { "DEFAULTS": ..., "SUBTYPES": ... } }`).
pub fn load_translate_data(path: &Path) -> Result<TranslateData> {
    read_json(path)
}

/// Reads the words referenced by code (`{ "DEFAULTS": [...], "SUBTYPES": {...} }`).
pub fn load_code_words(path: &Path) -> Result<CodeTranslateWords> {
    read_json(path)
}

/// Reads a cached table written by `generate --table`.
pub fn load_table(path: &Path) -> Result<CompactTable> {
    read_json(path)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {:?}", path))?;

    serde_json::from_str(&content).with_context(|| format!("Failed to parse JSON file: {:?}", path))
}
