//! Data types shared by the compaction pipeline.
//!
//! - `input`: the per-language translations and the words referenced by code
//! - `table`: the deduplicated [`CompactTable`] every stage reads and extends

pub mod input;
pub mod table;

pub use input::{CodeTranslateWords, LanguageTranslations, TranslateData};
pub use table::{
    CompactTable, DEFAULT_CATEGORY, LANGUAGES_KEY, Slot, TableStats, WordEntry, WordMap,
    check_category_name,
};
