//! Error types for the compaction pipeline.
//!
//! Library functions return [`CompactError`]; the CLI layer wraps it in
//! `anyhow` with file context.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompactError {
    /// A category collides with `*`, `$`, or a `$`-prefixed name.
    #[error("`{name}` is a reserved category name (`*`, `$` and `$...` are system reserved)")]
    ReservedCategory { name: String },

    /// A word entry holds more slots than there are languages.
    #[error(
        "word `{word}` in category `{category}` has {found} translations but only {expected} languages"
    )]
    SlotCount {
        category: String,
        word: String,
        expected: usize,
        found: usize,
    },

    /// A back-reference does not point at an earlier literal slot.
    #[error(
        "word `{word}` in category `{category}` has an invalid back-reference {index} at slot {slot}"
    )]
    InvalidReference {
        category: String,
        word: String,
        slot: usize,
        index: usize,
    },

    /// Emitted code could not be read back into a table.
    #[error("failed to decode translation code: {0}")]
    Decode(String),
}

pub type CompactResult<T> = Result<T, CompactError>;
