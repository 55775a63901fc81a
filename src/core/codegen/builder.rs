//! Stage 3a: [`CompactTable`] -> ordered, commented code tree.

use super::Renderer;
use super::ast::{ArrayLit, Comment, Expr, Lit, ObjectLit, Property};
use crate::core::data::{CompactTable, LANGUAGES_KEY, Slot, WordEntry, WordMap};

/// Builds the object literal for a table, or `None` when the table has no
/// content at all.
///
/// Top-level keys: `$` first, then `*`, then the other categories sorted.
/// Words are sorted within each category. Keeping this order fixed is what
/// keeps successive outputs diffable.
pub fn build_tree<R: Renderer + ?Sized>(table: &CompactTable, renderer: &R) -> Option<ObjectLit> {
    let mut props = Vec::with_capacity(table.categories.len() + 1);

    if !table.languages.is_empty() {
        let elems = table
            .languages
            .iter()
            .map(|lang| Some(Expr::Lit(Lit::Str(lang.clone()))))
            .collect();
        props.push(Property::new(
            LANGUAGES_KEY,
            Expr::Array(ArrayLit { elems }),
        ));
    }

    for (category, words) in table.ordered_categories() {
        props.push(Property::new(
            category,
            Expr::Object(category_object(words, renderer)),
        ));
    }

    if props.is_empty() {
        None
    } else {
        Some(ObjectLit { props })
    }
}

/// State carried across the sorted words of one category.
#[derive(Default)]
struct CategoryFold {
    /// Comments for untranslated words not yet attached to a property.
    pending: Vec<Comment>,
    props: Vec<Property>,
}

fn category_object<R: Renderer + ?Sized>(words: &WordMap, renderer: &R) -> ObjectLit {
    let CategoryFold { pending, mut props } =
        words
            .iter()
            .fold(CategoryFold::default(), |mut fold, (word, entry)| {
                match entry {
                    None => fold.pending.push(untranslated_comment(word, renderer)),
                    Some(entry) => {
                        let mut prop =
                            Property::new(word.as_str(), Expr::Array(translations(entry)));
                        prop.leading_comments = std::mem::take(&mut fold.pending);
                        fold.props.push(prop);
                    }
                }
                fold
            });

    if !pending.is_empty() {
        match props.last_mut() {
            Some(last) => last.leading_comments.extend(pending),
            None => props.push(Property::placeholder(pending)),
        }
    }

    ObjectLit { props }
}

/// `// '<word>':`, with the word escaped exactly like a string literal.
fn untranslated_comment<R: Renderer + ?Sized>(word: &str, renderer: &R) -> Comment {
    let literal = renderer.render_literal(&Lit::Str(word.to_string()));
    Comment::line(format!(" {}:", literal))
}

/// One element per language; trailing languages without a translation are
/// left out.
fn translations(entry: &WordEntry) -> ArrayLit {
    let slots = entry.slots();
    let len = slots
        .iter()
        .rposition(Option::is_some)
        .map_or(0, |last| last + 1);

    let elems = slots[..len]
        .iter()
        .map(|slot| {
            slot.as_ref().map(|slot| match slot {
                Slot::Text(text) if text.is_empty() => Expr::Array(ArrayLit::default()),
                Slot::Text(text) => Expr::Lit(Lit::Str(text.clone())),
                Slot::Ref(index) => Expr::Lit(Lit::Num(*index)),
            })
        })
        .collect();

    ArrayLit { elems }
}
