//! Error types for the message schema.
//!
//! The schema predicates and the button builder are total and never fail.
//! These errors only surface at the edges: parsing enum labels from text and
//! encoding or decoding whole messages.

use thiserror::Error;

/// Error returned while parsing a schema enum from its wire label.
///
/// # Examples
///
/// ```
/// use chatblocks::message::domain::ButtonStyle;
/// use chatblocks::message::error::ParseVariantError;
///
/// let err = ButtonStyle::try_from("loud").unwrap_err();
/// assert_eq!(err, ParseVariantError::new("button style", "loud"));
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind}: {value}")]
pub struct ParseVariantError {
    /// Human-readable name of the enum being parsed.
    pub kind: &'static str,
    /// The rejected input, as provided.
    pub value: String,
}

impl ParseVariantError {
    /// Creates a parse error for the given enum kind and rejected value.
    #[must_use]
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// Errors that can occur while encoding or decoding a message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// The message could not be serialised.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The input could not be decoded into a message.
    #[error("deserialization error: {0}")]
    Deserialization(String),
}

impl SchemaError {
    /// Creates a serialisation error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Creates a deserialisation error.
    #[must_use]
    pub fn deserialization(message: impl Into<String>) -> Self {
        Self::Deserialization(message.into())
    }
}
