//! JavaScript object-literal renderer.

use std::fmt::{self, Write};

use super::Renderer;
use super::ast::{ArrayLit, Expr, Lit, ObjectLit};

/// Renders code trees as JavaScript: single-quoted strings, one property per
/// line, arrays on a single line.
#[derive(Debug, Clone)]
pub struct JsRenderer {
    indent: String,
}

impl Default for JsRenderer {
    fn default() -> Self {
        Self {
            indent: "    ".to_string(),
        }
    }
}

impl JsRenderer {
    pub fn with_indent(indent: impl Into<String>) -> Self {
        Self {
            indent: indent.into(),
        }
    }

    fn write_object(&self, out: &mut String, object: &ObjectLit, depth: usize) -> fmt::Result {
        if object.props.is_empty() {
            return out.write_str("{}");
        }

        out.write_str("{\n")?;
        let inner = self.indent.repeat(depth + 1);
        for (index, prop) in object.props.iter().enumerate() {
            for comment in &prop.leading_comments {
                writeln!(out, "{}//{}", inner, comment.text)?;
            }
            write!(out, "{}{}: ", inner, quote(&prop.key))?;
            self.write_expr(out, &prop.value, depth + 1)?;
            if index + 1 < object.props.len() {
                out.write_char(',')?;
            }
            out.write_char('\n')?;
        }
        write!(out, "{}}}", self.indent.repeat(depth))
    }

    fn write_array(&self, out: &mut String, array: &ArrayLit, depth: usize) -> fmt::Result {
        out.write_char('[')?;
        for (index, elem) in array.elems.iter().enumerate() {
            if index > 0 {
                out.write_str(", ")?;
            }
            if let Some(elem) = elem {
                self.write_expr(out, elem, depth)?;
            }
        }
        // A trailing hole needs its own comma to count as an element.
        if matches!(array.elems.last(), Some(None)) {
            out.write_char(',')?;
        }
        out.write_char(']')
    }

    fn write_expr(&self, out: &mut String, expr: &Expr, depth: usize) -> fmt::Result {
        match expr {
            Expr::Object(object) => self.write_object(out, object, depth),
            Expr::Array(array) => self.write_array(out, array, depth),
            Expr::Lit(lit) => out.write_str(&self.render_literal(lit)),
        }
    }
}

impl Renderer for JsRenderer {
    type Error = fmt::Error;

    fn render(&self, tree: &ObjectLit) -> Result<String, Self::Error> {
        let mut out = String::new();
        self.write_object(&mut out, tree, 0)?;
        Ok(out)
    }

    fn render_literal(&self, lit: &Lit) -> String {
        match lit {
            Lit::Str(value) => quote(value),
            Lit::Num(value) => value.to_string(),
            Lit::Null => "null".to_string(),
        }
    }
}

/// Single-quoted JavaScript string literal.
///
/// Line terminators (including U+2028/U+2029) and control characters are
/// escaped so the literal always stays on one line.
pub fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for c in value.chars() {
        match c {
            '\'' => quoted.push_str("\\'"),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            '\u{8}' => quoted.push_str("\\b"),
            '\u{b}' => quoted.push_str("\\v"),
            '\u{c}' => quoted.push_str("\\f"),
            '\u{2028}' | '\u{2029}' => {
                let _ = write!(quoted, "\\u{:04X}", c as u32);
            }
            c if c.is_control() && (c as u32) < 0x100 => {
                let _ = write!(quoted, "\\x{:02X}", c as u32);
            }
            c => quoted.push(c),
        }
    }
    quoted.push('\'');
    quoted
}
