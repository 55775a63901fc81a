//! Stage 3: [`CompactTable`] -> source text.
//!
//! The table is first turned into a code tree ([`build_tree`]), the tree is
//! rendered by a [`Renderer`], and finally the comment-carrier properties are
//! stripped from the text.

pub mod ast;
mod builder;
mod js;

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

pub use ast::{ArrayLit, Comment, Expr, Lit, ObjectLit, Property};
pub use builder::build_tree;
pub use js::{JsRenderer, quote};

use crate::core::data::CompactTable;

/// Text emitted for a table without any content.
pub const EMPTY_OBJECT: &str = "{}";

/// A rendered `'': null` carrier property on its own line, together with the
/// line break before it. A separating comma is taken from before the carrier,
/// or from after it when the renderer writes trailing commas.
static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"(?m),?\s*^[ \t]*(?:''|"")[ \t]*:[ \t]*null[ \t]*$"#,
        r#"|\s*^[ \t]*(?:''|"")[ \t]*:[ \t]*null[ \t]*,[ \t]*$"#,
    ))
    .unwrap()
});

/// Turns code trees into source text.
pub trait Renderer {
    type Error;

    /// Renders a whole tree.
    fn render(&self, tree: &ObjectLit) -> Result<String, Self::Error>;

    /// Renders a single literal exactly as it would appear inside a tree.
    fn render_literal(&self, lit: &Lit) -> String;
}

/// Renders a table as source text.
///
/// Returns `{}` for an empty table. Renderer errors are returned unchanged.
pub fn generate_code<R: Renderer + ?Sized>(
    table: &CompactTable,
    renderer: &R,
) -> Result<String, R::Error> {
    let Some(tree) = build_tree(table, renderer) else {
        return Ok(EMPTY_OBJECT.to_string());
    };

    let code = renderer.render(&tree)?;
    let code = strip_placeholders(&code);
    debug!("generated {} bytes of translation code", code.len());
    Ok(code)
}

/// Removes rendered comment-carrier properties, keeping their comments.
pub fn strip_placeholders(code: &str) -> String {
    PLACEHOLDER_REGEX.replace_all(code, "").into_owned()
}
