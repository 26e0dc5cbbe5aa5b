//! Textual payload types shared by messages and sections.

use serde::{Deserialize, Serialize};

/// Plain or code-formatted text.
///
/// Both fields may be set at once; renderers decide how to combine them.
///
/// # Examples
///
/// ```
/// use chatblocks::message::domain::Body;
///
/// assert!(Body::default().is_empty());
/// assert!(!Body::plaintext("hello").is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Body {
    /// Text rendered as a code block.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub code_block: String,
    /// Text rendered as-is.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub plaintext: String,
}

impl Body {
    /// Creates a body holding only plaintext.
    #[must_use]
    pub fn plaintext(text: impl Into<String>) -> Self {
        Self {
            code_block: String::new(),
            plaintext: text.into(),
        }
    }

    /// Creates a body holding only a code block.
    #[must_use]
    pub fn code_block(code: impl Into<String>) -> Self {
        Self {
            code_block: code.into(),
            plaintext: String::new(),
        }
    }

    /// Returns `true` if both fields are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.code_block.is_empty() && self.plaintext.is_empty()
    }
}

/// Header, description, and body shared by every section.
///
/// Serialised inline: a section's `header`, `description`, and `body` keys sit
/// next to its other keys rather than under a nested object.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Base {
    /// Section header.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub header: String,
    /// Short description shown under the header.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Main section text.
    #[serde(skip_serializing_if = "Body::is_empty")]
    pub body: Body,
}

impl Base {
    /// Returns `true` if header, description, and body are all empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.description.is_empty() && self.body.is_empty()
    }
}
