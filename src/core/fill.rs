//! Stage 2: placeholders for words referenced by code but never translated.

use tracing::debug;

use super::data::{CodeTranslateWords, CompactTable, DEFAULT_CATEGORY, check_category_name};
use super::error::CompactResult;

/// Adds a `None` entry for every referenced word missing from its category.
///
/// Existing entries are never touched, including words the code no longer
/// references. A bucket with no words does not create its category.
pub fn fill_untranslated(
    mut table: CompactTable,
    words: &CodeTranslateWords,
) -> CompactResult<CompactTable> {
    for category in words.subtypes.keys() {
        check_category_name(category)?;
    }

    let buckets = std::iter::once((DEFAULT_CATEGORY, &words.defaults)).chain(
        words
            .subtypes
            .iter()
            .map(|(category, words)| (category.as_str(), words)),
    );

    let mut added = 0;
    for (category, bucket) in buckets {
        if bucket.is_empty() {
            continue;
        }
        let entries = table.categories.entry(category.to_string()).or_default();
        for word in bucket {
            if !entries.contains_key(word) {
                entries.insert(word.clone(), None);
                added += 1;
            }
        }
    }

    debug!("added {} untranslated placeholders", added);
    Ok(table)
}
