//! Stage 1: per-language dictionary -> deduplicated [`CompactTable`].

use std::collections::BTreeMap;

use tracing::debug;

use super::data::{
    CompactTable, DEFAULT_CATEGORY, TranslateData, WordEntry, WordMap, check_category_name,
};
use super::error::CompactResult;

/// Compacts per-language translations into one table.
///
/// Languages are indexed in sorted order. Within a word entry, a translation
/// equal to one at an earlier language index is stored as that index instead
/// of the string.
///
/// Every category name is validated before anything is recorded; a reserved
/// name aborts the whole compaction.
pub fn compact(data: &TranslateData) -> CompactResult<CompactTable> {
    for translations in data.values() {
        for category in translations.subtypes.keys() {
            check_category_name(category)?;
        }
    }

    // BTreeMap keys are already sorted, which fixes each language's index.
    let languages: Vec<String> = data.keys().cloned().collect();
    let mut categories: BTreeMap<String, WordMap> = BTreeMap::new();

    for (index, translations) in data.values().enumerate() {
        let defaults = translations
            .defaults
            .iter()
            .map(|(word, translation)| (DEFAULT_CATEGORY, word, translation));
        let subtypes = translations.subtypes.iter().flat_map(|(category, words)| {
            words
                .iter()
                .map(move |(word, translation)| (category.as_str(), word, translation))
        });

        for (category, word, translation) in defaults.chain(subtypes) {
            let entry = categories
                .entry(category.to_string())
                .or_default()
                .entry(word.clone())
                .or_insert(None)
                .get_or_insert_with(|| WordEntry::new(languages.len()));
            entry.record(index, translation);
        }
    }

    debug!(
        "compacted {} languages into {} categories",
        languages.len(),
        categories.len()
    );

    Ok(CompactTable {
        languages,
        categories,
    })
}
