//! Readers for pipeline inputs and emitted code.
//!
//! - `json`: Input A / Input B documents and cached tables
//! - `code`: emitted translation code (uses swc to parse it back)

pub mod code;
pub mod json;

pub use code::decode_code;
pub use json::{load_code_words, load_table, load_translate_data};
