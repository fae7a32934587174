//! Token interface between an external dependency parser and the extractor.

use serde::{Deserialize, Serialize};

/// What the extractor needs to know about one parsed token.
///
/// Any parser adapter can feed the extractor by implementing this trait
/// for its own token type.
pub trait ParsedToken {
    /// Surface text of the token.
    fn text(&self) -> &str;

    /// 0-based position of the token within its sentence.
    fn index(&self) -> usize;

    /// Dependency label assigned by the parser (e.g. `nsubj`, `ROOT`).
    fn dependency_label(&self) -> &str;

    /// Surface text of the token's syntactic head.
    fn head_text(&self) -> &str;
}

/// An owned parsed token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub index: usize,
    pub dependency_label: String,
    pub head_text: String,
}

impl Token {
    /// Create a new token.
    pub fn new(
        text: impl Into<String>,
        index: usize,
        dependency_label: impl Into<String>,
        head_text: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            index,
            dependency_label: dependency_label.into(),
            head_text: head_text.into(),
        }
    }
}

impl ParsedToken for Token {
    fn text(&self) -> &str {
        &self.text
    }

    fn index(&self) -> usize {
        self.index
    }

    fn dependency_label(&self) -> &str {
        &self.dependency_label
    }

    fn head_text(&self) -> &str {
        &self.head_text
    }
}

impl<T: ParsedToken + ?Sized> ParsedToken for &T {
    fn text(&self) -> &str {
        (**self).text()
    }

    fn index(&self) -> usize {
        (**self).index()
    }

    fn dependency_label(&self) -> &str {
        (**self).dependency_label()
    }

    fn head_text(&self) -> &str {
        (**self).head_text()
    }
}
