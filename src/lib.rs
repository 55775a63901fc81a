//! jsoncode - compact translation tables into diff-stable code
//!
//! jsoncode turns resolved per-language translations into a single
//! JavaScript object literal: repeated translations become back-references,
//! words used by code but never translated stay visible as comments, and
//! keys are emitted in a fixed order so regenerated files diff cleanly.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Compaction pipeline (compact, fill, codegen, decode)

pub mod cli;
pub mod config;
pub mod core;
