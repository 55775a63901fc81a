//! Compaction pipeline.
//!
//! Data flows strictly forward, each stage a pure function of its inputs:
//!
//! 1. [`compact`]: per-language translations -> [`CompactTable`]
//! 2. [`fill_untranslated`]: adds placeholders for words used by code
//! 3. [`codegen::generate_code`]: table -> commented object-literal text
//!
//! [`parsers::decode_code`] reads emitted text back into a table.

pub mod codegen;
pub mod compact;
pub mod data;
pub mod error;
pub mod fill;
pub mod parsers;

pub use compact::compact;
pub use data::{
    CodeTranslateWords, CompactTable, LanguageTranslations, Slot, TableStats, TranslateData,
    WordEntry,
};
pub use error::{CompactError, CompactResult};
pub use fill::fill_untranslated;

/// Runs the compactor and the gap filler.
pub fn build_table(
    data: &TranslateData,
    words: &CodeTranslateWords,
) -> CompactResult<CompactTable> {
    fill_untranslated(compact(data)?, words)
}
