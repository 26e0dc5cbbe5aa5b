//! Free-text input fields.

use super::macros::{element_collection, labelled_enum};
use serde::{Deserialize, Serialize};

labelled_enum! {
    /// When an input's value is dispatched to the bot.
    pub enum DispatchedInputAction("dispatched input action") {
        /// Never dispatched on its own.
        #[default]
        None => "",
        /// Dispatched when the user presses Enter.
        OnEnter => "on_enter_pressed",
        /// Dispatched on every typed character.
        OnCharacter => "on_character_entered",
    }
}

/// A labelled text input.
///
/// # Examples
///
/// ```
/// use chatblocks::message::domain::{DispatchedInputAction, LabelInput};
///
/// let input = LabelInput::new("logs --filter", "Filter output")
///     .with_placeholder("Filter output by regex")
///     .with_dispatched_action(DispatchedInputAction::OnEnter);
///
/// assert_eq!(input.dispatched_action.as_str(), "on_enter_pressed");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LabelInput {
    /// Command run with the entered text appended.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub command: String,
    /// Label shown above the field.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
    /// Hint shown inside an empty field.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub placeholder: String,
    /// Dispatch trigger.
    #[serde(skip_serializing_if = "super::is_zero_value")]
    pub dispatched_action: DispatchedInputAction,
}

impl LabelInput {
    /// Creates an input with a command and label.
    #[must_use]
    pub fn new(command: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            text: text.into(),
            placeholder: String::new(),
            dispatched_action: DispatchedInputAction::None,
        }
    }

    /// Sets the placeholder hint.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Sets the dispatch trigger.
    #[must_use]
    pub const fn with_dispatched_action(mut self, action: DispatchedInputAction) -> Self {
        self.dispatched_action = action;
        self
    }
}

element_collection! {
    /// Ordered plaintext inputs.
    pub struct LabelInputs(LabelInput);
}
