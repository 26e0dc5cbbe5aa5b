//! Action buttons and their styles.

use super::macros::{element_collection, labelled_enum};
use serde::{Deserialize, Serialize};

labelled_enum! {
    /// Visual emphasis of a button.
    pub enum ButtonStyle("button style") {
        /// Platform default look.
        #[default]
        Default => "",
        /// Highlighted, affirmative action.
        Primary => "primary",
        /// Destructive action.
        Danger => "danger",
    }
}

labelled_enum! {
    /// How a button's description is rendered.
    ///
    /// An unset style is read as [`ButtonDescriptionStyle::Code`].
    pub enum ButtonDescriptionStyle("button description style") {
        /// Bold text.
        Bold => "bold",
        /// Plain text.
        Text => "text",
        /// Inline code.
        #[default]
        Code => "code" | "",
    }
}

/// A clickable action.
///
/// A button either runs a command or opens a URL. The schema does not forbid
/// setting both; use [`Button::is_command`] and [`Button::is_url`] to inspect
/// the shape.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Button {
    /// Text displayed next to the button.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Rendering style for `description`. Always written.
    pub description_style: ButtonDescriptionStyle,
    /// Button label.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Command executed on click.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub command: String,
    /// Link opened on click.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    /// Visual emphasis.
    #[serde(skip_serializing_if = "super::is_zero_value")]
    pub style: ButtonStyle,
}

impl Button {
    /// Returns `true` if the button carries a command.
    #[must_use]
    pub fn is_command(&self) -> bool {
        !self.command.is_empty()
    }

    /// Returns `true` if the button carries a URL.
    #[must_use]
    pub fn is_url(&self) -> bool {
        !self.url.is_empty()
    }

    /// Returns `true` if the button has a description.
    #[must_use]
    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }
}

element_collection! {
    /// Ordered interactive buttons of a section.
    pub struct Buttons(Button);
}

impl Buttons {
    /// Returns the buttons that have a description, in their original order.
    ///
    /// # Examples
    ///
    /// ```
    /// use chatblocks::message::builder::ButtonBuilder;
    /// use chatblocks::message::domain::Buttons;
    ///
    /// let builder = ButtonBuilder::new();
    /// let buttons = Buttons::from(vec![
    ///     builder.for_url("Docs", "https://example.com"),
    ///     builder.for_command("Run", "run", "Runs the job"),
    /// ]);
    ///
    /// let described = buttons.buttons_with_description();
    /// assert_eq!(described.len(), 1);
    /// assert_eq!(described[0].name, "Run");
    /// ```
    #[must_use]
    pub fn buttons_with_description(&self) -> Self {
        self.iter().filter(|b| b.has_description()).cloned().collect()
    }

    /// Returns the buttons without a description, in their original order.
    #[must_use]
    pub fn buttons_without_description(&self) -> Self {
        self.iter()
            .filter(|b| !b.has_description())
            .cloned()
            .collect()
    }
}

/// Description-based partitioning over a possibly absent button collection.
///
/// An absent collection yields empty results, matching how a section with no
/// buttons behaves.
///
/// # Examples
///
/// ```
/// use chatblocks::message::domain::{ButtonPartition, Buttons};
///
/// let absent: Option<&Buttons> = None;
/// assert!(absent.buttons_with_description().is_empty());
/// assert!(absent.buttons_without_description().is_empty());
/// ```
pub trait ButtonPartition {
    /// Returns the buttons that have a description.
    #[must_use]
    fn buttons_with_description(&self) -> Buttons;

    /// Returns the buttons that lack a description.
    #[must_use]
    fn buttons_without_description(&self) -> Buttons;
}

impl ButtonPartition for Option<&Buttons> {
    fn buttons_with_description(&self) -> Buttons {
        self.map(Buttons::buttons_with_description).unwrap_or_default()
    }

    fn buttons_without_description(&self) -> Buttons {
        self.map(Buttons::buttons_without_description).unwrap_or_default()
    }
}
