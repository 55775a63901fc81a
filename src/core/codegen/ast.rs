//! Code tree handed to a [`Renderer`](super::Renderer).
//!
//! Shapes follow `swc_ecma_ast`: an array element of `None` is a hole, and
//! comments are attached to the property they precede.

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Object(ObjectLit),
    Array(ArrayLit),
    Lit(Lit),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Lit {
    Str(String),
    Num(usize),
    Null,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectLit {
    pub props: Vec<Property>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArrayLit {
    pub elems: Vec<Option<Expr>>,
}

/// `key: value`, preceded by its leading comments.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub key: String,
    pub value: Expr,
    pub leading_comments: Vec<Comment>,
    /// Carrier for comments only; removed from the rendered text.
    pub placeholder: bool,
}

impl Property {
    pub fn new(key: impl Into<String>, value: Expr) -> Self {
        Self {
            key: key.into(),
            value,
            leading_comments: Vec::new(),
            placeholder: false,
        }
    }

    /// Empty key with a `null` value, carrying trailing comments of a
    /// category that has no real property.
    pub fn placeholder(leading_comments: Vec<Comment>) -> Self {
        Self {
            key: String::new(),
            value: Expr::Lit(Lit::Null),
            leading_comments,
            placeholder: true,
        }
    }
}

/// A `//` line comment. `text` excludes the slashes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub text: String,
}

impl Comment {
    pub fn line(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
