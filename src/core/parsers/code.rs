//! Reads emitted translation code back into a [`CompactTable`].
//!
//! The text is parsed with swc as a JavaScript expression. Word arrays become
//! slots again, and `// '<word>':` comments inside a category object become
//! untranslated placeholders.

use std::collections::BTreeMap;

use swc_common::{
    FileName, SourceMap, Span,
    comments::{Comment, CommentKind, Comments, SingleThreadedComments},
};
use swc_ecma_ast::{
    Expr, ExprOrSpread, Lit, ModuleItem, ObjectLit, Prop, PropName, PropOrSpread, Stmt, Str,
};
use swc_ecma_parser::{Parser, StringInput, Syntax};
use tracing::debug;

use crate::core::data::{CompactTable, LANGUAGES_KEY, Slot, WordEntry, WordMap};
use crate::core::error::{CompactError, CompactResult};

/// Decodes the object literal produced by
/// [`generate_code`](crate::core::codegen::generate_code).
///
/// Comments that are not untranslated-word markers are ignored. The result
/// is validated like a cached table: reserved category names, slot counts
/// and back-references are checked.
pub fn decode_code(code: &str) -> CompactResult<CompactTable> {
    let comments = SingleThreadedComments::default();
    let expr = parse_expression(code, Some(&comments))?;
    let Expr::Object(root) = expr else {
        return Err(decode_error("expected an object literal"));
    };

    let all_comments = collect_comments(&comments);
    let mut languages = Vec::new();
    let mut categories = BTreeMap::new();

    for (key, value) in key_values(&root)? {
        if key == LANGUAGES_KEY {
            languages = string_array(value)?;
            continue;
        }
        let Expr::Object(object) = value else {
            return Err(decode_error(format!("category `{}` is not an object", key)));
        };
        let words = decode_category(object, &all_comments)?;
        categories.insert(key, words);
    }

    debug!(
        "decoded {} languages and {} categories",
        languages.len(),
        categories.len()
    );
    CompactTable::from_parts(languages, categories)
}

fn decode_category(object: &ObjectLit, comments: &[Comment]) -> CompactResult<WordMap> {
    let mut words = WordMap::new();

    for (word, value) in key_values(object)? {
        match value {
            // Comment carrier left in place by a renderer without cleanup.
            Expr::Lit(Lit::Null(_)) if word.is_empty() => {}
            Expr::Lit(Lit::Null(_)) => {
                words.insert(word, None);
            }
            value => {
                let slots = slots(value)?;
                words.insert(word, Some(WordEntry::from_slots(slots)));
            }
        }
    }

    for comment in comments_within(comments, object.span) {
        if let Some(word) = untranslated_word(comment) {
            words.entry(word).or_insert(None);
        }
    }

    Ok(words)
}

/// `key: value` pairs of an object literal, in source order.
fn key_values(object: &ObjectLit) -> CompactResult<Vec<(String, &Expr)>> {
    object
        .props
        .iter()
        .map(|prop| match prop {
            PropOrSpread::Prop(prop) => match &**prop {
                Prop::KeyValue(kv) => Ok((prop_name(&kv.key)?, &*kv.value)),
                _ => Err(decode_error("only `key: value` properties are supported")),
            },
            PropOrSpread::Spread(_) => Err(decode_error("spread properties are not supported")),
        })
        .collect()
}

fn prop_name(key: &PropName) -> CompactResult<String> {
    match key {
        PropName::Ident(ident) => Ok(ident.sym.to_string()),
        PropName::Str(s) => string_value(s),
        PropName::Num(n) => Ok(n.value.to_string()),
        _ => Err(decode_error("computed property keys are not supported")),
    }
}

fn string_value(s: &Str) -> CompactResult<String> {
    s.value
        .as_str()
        .map(|s| s.to_string())
        .ok_or_else(|| decode_error("string literal is not valid UTF-8"))
}

fn string_array(expr: &Expr) -> CompactResult<Vec<String>> {
    let Expr::Array(array) = expr else {
        return Err(decode_error("language list is not an array"));
    };
    array
        .elems
        .iter()
        .map(|elem| match elem {
            Some(ExprOrSpread { spread: None, expr }) => match &**expr {
                Expr::Lit(Lit::Str(s)) => string_value(s),
                _ => Err(decode_error("language identifiers must be strings")),
            },
            _ => Err(decode_error("unexpected element in language list")),
        })
        .collect()
}

fn slots(expr: &Expr) -> CompactResult<Vec<Option<Slot>>> {
    let Expr::Array(array) = expr else {
        return Err(decode_error("word translations must be an array"));
    };
    array
        .elems
        .iter()
        .map(|elem| match elem {
            None => Ok(None),
            Some(elem) if elem.spread.is_some() => {
                Err(decode_error("spread elements are not supported"))
            }
            Some(elem) => slot(&elem.expr).map(Some),
        })
        .collect()
}

fn slot(expr: &Expr) -> CompactResult<Slot> {
    match expr {
        Expr::Array(array) if array.elems.is_empty() => Ok(Slot::Text(String::new())),
        Expr::Lit(Lit::Str(s)) => string_value(s).map(Slot::Text),
        Expr::Lit(Lit::Num(n)) if n.value >= 0.0 && n.value.fract() == 0.0 => {
            Ok(Slot::Ref(n.value as usize))
        }
        _ => Err(decode_error(
            "translations must be strings, `[]` or back-reference indices",
        )),
    }
}

fn collect_comments(comments: &SingleThreadedComments) -> Vec<Comment> {
    let (leading, trailing) = comments.borrow_all();
    let mut all: Vec<Comment> = leading
        .values()
        .chain(trailing.values())
        .flatten()
        .cloned()
        .collect();
    all.sort_by_key(|comment| comment.span.lo);
    all.dedup_by_key(|comment| comment.span.lo);
    all
}

fn comments_within(comments: &[Comment], span: Span) -> impl Iterator<Item = &Comment> {
    comments
        .iter()
        .filter(move |comment| span.lo <= comment.span.lo && comment.span.hi <= span.hi)
}

/// The word of a `// '<word>':` comment, or `None` for any other comment.
fn untranslated_word(comment: &Comment) -> Option<String> {
    if comment.kind != CommentKind::Line {
        return None;
    }
    let text = comment.text.to_string();
    let literal = text.trim().strip_suffix(':')?;
    match parse_expression(literal, None).ok()? {
        Expr::Lit(Lit::Str(s)) => string_value(&s).ok(),
        _ => None,
    }
}

/// Parses `code` as a single JavaScript expression.
fn parse_expression(code: &str, comments: Option<&dyn Comments>) -> CompactResult<Expr> {
    let source_map = SourceMap::default();
    // The newline keeps a trailing line comment from swallowing the `)`.
    let source_file = source_map.new_source_file(FileName::Anon.into(), format!("({}\n);", code));

    let mut parser = Parser::new(
        Syntax::Es(Default::default()),
        StringInput::from(&*source_file),
        comments,
    );
    let module = parser
        .parse_module()
        .map_err(|e| decode_error(format!("{:?}", e)))?;

    let mut body = module.body.into_iter();
    match (body.next(), body.next()) {
        (Some(ModuleItem::Stmt(Stmt::Expr(stmt))), None) => match *stmt.expr {
            Expr::Paren(paren) => Ok(*paren.expr),
            expr => Ok(expr),
        },
        _ => Err(decode_error("expected a single expression")),
    }
}

fn decode_error(message: impl Into<String>) -> CompactError {
    CompactError::Decode(message.into())
}
