//! The Message root type representing one outgoing chat message.
//!
//! A message is a tree of value types: it owns its sections, which in turn
//! own their interactive elements. Nothing is shared between owners.

use super::{Body, LabelInputs, Section, macros::labelled_enum};
use crate::message::error::SchemaError;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Deserializer, Serialize};

labelled_enum! {
    /// How a communicator should deliver a message.
    pub enum MessageType("message type") {
        /// The communicator's default, interactive where supported.
        #[default]
        Default => "",
        /// Plaintext card with the buttons sent in a separate interactive
        /// message.
        BasicCardWithButtonsInSeparateMessage => "basicCardWithButtonsInSeparateMessage",
        /// Plaintext rendering of the base body only, with the built-in
        /// filter applied. Every other field is ignored.
        BaseBodyWithFilter => "baseBodyWithFilter",
        /// Renderable by non-interactive platforms: exactly one section,
        /// interactive elements and base body ignored.
        NonInteractiveSingleSection => "nonInteractiveEventSingleSection",
        /// Shown to the user as a popup where possible.
        Popup => "form",
        /// Sent into a thread.
        Thread => "threadMessage",
        /// Not sent to the end user at all.
        Skip => "skipMessage",
    }
}

/// One outgoing chat message.
///
/// Fields are public and assigned directly by whoever builds the message;
/// the `with_*` helpers are a chaining convenience over the same fields.
///
/// # Emptiness
///
/// A message is empty when it has no base body, no plaintext inputs, no
/// sections and no timestamp. Flags, the user handle and the thread id do not
/// count: they describe delivery, not content.
///
/// # Examples
///
/// ```
/// use chatblocks::message::domain::{Body, Message, Section};
///
/// let message = Message::new()
///     .with_base_body(Body::plaintext("3 pods restarted"))
///     .with_section(Section::new().with_header("Restarts"));
///
/// assert!(message.has_base_body());
/// assert!(message.has_sections());
/// assert!(!message.is_empty());
/// assert!(Message::default().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Message {
    /// Delivery mode.
    #[serde(rename = "type", skip_serializing_if = "super::is_zero_value")]
    pub message_type: MessageType,
    /// Non-interactive fallback text.
    #[serde(skip_serializing_if = "Body::is_empty")]
    pub base_body: Body,
    /// Time the message refers to; `None` is the zero value.
    ///
    /// The zero instant `0001-01-01T00:00:00Z` decodes as `None`.
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_timestamp"
    )]
    pub timestamp: Option<DateTime<Utc>>,
    /// Sections in display order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<Section>,
    /// Message-level free-text inputs.
    #[serde(skip_serializing_if = "LabelInputs::is_empty")]
    pub plaintext_inputs: LabelInputs,
    /// Show the message only to the requesting user.
    #[serde(skip_serializing_if = "super::is_zero_value")]
    pub only_visible_for_you: bool,
    /// Replace the message that triggered this one.
    #[serde(skip_serializing_if = "super::is_zero_value")]
    pub replace_original: bool,
    /// Handle of the user the message addresses.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub user_handle: String,
    /// Originating message of a thread; when set the message is posted there.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub parent_activity_id: String,
}

/// Seconds between the Unix epoch and `0001-01-01T00:00:00Z`, the instant
/// producers without an optional time type write for "no time".
const ZERO_INSTANT_SECS: i64 = -62_135_596_800;

fn is_zero_instant(timestamp: &DateTime<Utc>) -> bool {
    timestamp.timestamp() == ZERO_INSTANT_SECS && timestamp.timestamp_subsec_nanos() == 0
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let timestamp = Option::<DateTime<Utc>>::deserialize(deserializer)?;
    Ok(timestamp.filter(|instant| !is_zero_instant(instant)))
}

impl Message {
    /// Creates an empty message of the default type.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a message that must not reach the end user.
    ///
    /// Callers return this when there is nothing to send and no fallback
    /// indicator should be shown either.
    #[must_use]
    pub fn skip() -> Self {
        Self::new().with_type(MessageType::Skip)
    }

    /// Returns `true` if there is no content to send.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.has_base_body()
            && !self.has_inputs()
            && !self.has_sections()
            && !self.has_timestamp()
    }

    /// Returns `true` if a timestamp other than the zero instant is set.
    #[must_use]
    pub fn has_timestamp(&self) -> bool {
        self.timestamp
            .as_ref()
            .is_some_and(|instant| !is_zero_instant(instant))
    }

    /// Returns `true` if the base body is set.
    #[must_use]
    pub fn has_base_body(&self) -> bool {
        !self.base_body.is_empty()
    }

    /// Returns `true` if the message has sections.
    #[must_use]
    pub fn has_sections(&self) -> bool {
        !self.sections.is_empty()
    }

    /// Returns `true` if the message has message-level inputs.
    #[must_use]
    pub fn has_inputs(&self) -> bool {
        !self.plaintext_inputs.is_empty()
    }

    /// Sets the delivery mode.
    #[must_use]
    pub const fn with_type(mut self, message_type: MessageType) -> Self {
        self.message_type = message_type;
        self
    }

    /// Sets the base body.
    #[must_use]
    pub fn with_base_body(mut self, body: Body) -> Self {
        self.base_body = body;
        self
    }

    /// Sets the timestamp. The zero instant clears it.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp).filter(|instant| !is_zero_instant(instant));
        self
    }

    /// Sets the timestamp to the clock's current time.
    #[must_use]
    pub fn stamped(self, clock: &impl Clock) -> Self {
        self.with_timestamp(clock.utc())
    }

    /// Appends a section.
    #[must_use]
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Appends a message-level input.
    #[must_use]
    pub fn with_plaintext_input(mut self, input: super::LabelInput) -> Self {
        self.plaintext_inputs.push(input);
        self
    }

    /// Restricts visibility to the requesting user.
    #[must_use]
    pub const fn visible_only_to_requester(mut self) -> Self {
        self.only_visible_for_you = true;
        self
    }

    /// Marks the message as a replacement of the triggering one.
    #[must_use]
    pub const fn replacing_original(mut self) -> Self {
        self.replace_original = true;
        self
    }

    /// Sets the addressed user handle.
    #[must_use]
    pub fn with_user_handle(mut self, handle: impl Into<String>) -> Self {
        self.user_handle = handle.into();
        self
    }

    /// Posts the message into the thread started by `activity_id`.
    #[must_use]
    pub fn in_thread(mut self, activity_id: impl Into<String>) -> Self {
        self.parent_activity_id = activity_id.into();
        self
    }

    /// Serialises the message to JSON, omitting zero-valued fields.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Serialization`] if encoding fails.
    pub fn to_json(&self) -> Result<String, SchemaError> {
        serde_json::to_string(self).map_err(|e| SchemaError::serialization(e.to_string()))
    }

    /// Decodes a message from JSON. Missing fields take their zero value.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Deserialization`] if the input is not a valid
    /// message document.
    ///
    /// # Examples
    ///
    /// ```
    /// use chatblocks::message::domain::{Message, MessageType};
    ///
    /// let message = Message::from_json(r#"{"type":"threadMessage","userHandle":"@ann"}"#)
    ///     .expect("valid document");
    /// assert_eq!(message.message_type, MessageType::Thread);
    /// assert!(message.is_empty());
    /// ```
    pub fn from_json(input: &str) -> Result<Self, SchemaError> {
        serde_json::from_str(input).map_err(|e| SchemaError::deserialization(e.to_string()))
    }
}
