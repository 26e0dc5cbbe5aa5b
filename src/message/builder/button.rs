//! Button factory applying the bot-name placeholder convention.
//!
//! Command text handed to a button is prefixed with
//! [`BOT_NAME_PLACEHOLDER`] exactly once, here, so renderers can swap in the
//! real invocation prefix later. Descriptions derived from a command get the
//! same prefix; free-form descriptions do not.

use crate::message::domain::{Button, ButtonDescriptionStyle, ButtonStyle};
use crate::message::substitution::BOT_NAME_PLACEHOLDER;

/// Builds [`Button`] values.
///
/// The builder carries only the style applied to the buttons it produces,
/// [`ButtonStyle::Default`] unless overridden with [`ButtonBuilder::with_style`].
///
/// # Examples
///
/// ```
/// use chatblocks::message::builder::ButtonBuilder;
/// use chatblocks::message::domain::{ButtonDescriptionStyle, ButtonStyle};
///
/// let button = ButtonBuilder::new().for_command_with_desc_cmd("Run", "run-now");
/// assert_eq!(button.command, "{{BotName}} run-now");
/// assert_eq!(button.description, "{{BotName}} run-now");
/// assert_eq!(button.description_style, ButtonDescriptionStyle::Code);
///
/// let danger = ButtonBuilder::new()
///     .with_style(ButtonStyle::Danger)
///     .for_command_without_desc("Delete", "delete pod nginx");
/// assert_eq!(danger.style, ButtonStyle::Danger);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonBuilder {
    style: ButtonStyle,
}

impl ButtonBuilder {
    /// Creates a builder producing default-styled buttons.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            style: ButtonStyle::Default,
        }
    }

    /// Returns a builder producing buttons with the given style.
    #[must_use]
    pub const fn with_style(self, style: ButtonStyle) -> Self {
        Self { style }
    }

    /// Returns the style applied to produced buttons.
    #[must_use]
    pub const fn style(&self) -> ButtonStyle {
        self.style
    }

    /// Command button whose description repeats the command.
    #[must_use]
    pub fn for_command_with_desc_cmd(&self, name: &str, cmd: &str) -> Button {
        self.command_with_cmd_desc(name, cmd, cmd)
    }

    /// Command button with a free-form description rendered bold.
    #[must_use]
    pub fn for_command_with_bold_desc(&self, name: &str, desc: &str, cmd: &str) -> Button {
        self.command_with_desc(name, cmd, desc, ButtonDescriptionStyle::Bold)
    }

    /// Command button without a description.
    #[must_use]
    pub fn for_command_without_desc(&self, name: &str, cmd: &str) -> Button {
        Button {
            name: name.to_owned(),
            command: with_placeholder(cmd),
            style: self.style,
            ..Button::default()
        }
    }

    /// Command button whose description is shown as code.
    ///
    /// For a bold description use [`ButtonBuilder::for_command_with_bold_desc`].
    #[must_use]
    pub fn for_command(&self, name: &str, cmd: &str, desc: &str) -> Button {
        self.command_with_cmd_desc(name, cmd, desc)
    }

    /// Link button.
    #[must_use]
    pub fn for_url(&self, name: &str, url: &str) -> Button {
        Button {
            name: name.to_owned(),
            url: url.to_owned(),
            style: self.style,
            ..Button::default()
        }
    }

    /// Link button with a bold description.
    #[must_use]
    pub fn for_url_with_bold_desc(&self, name: &str, desc: &str, url: &str) -> Button {
        self.url_with_desc(name, desc, url, ButtonDescriptionStyle::Bold)
    }

    /// Link button with a plain-text description.
    #[must_use]
    pub fn for_url_with_text_desc(&self, name: &str, desc: &str, url: &str) -> Button {
        self.url_with_desc(name, desc, url, ButtonDescriptionStyle::Text)
    }

    /// Link button described by the command it corresponds to.
    ///
    /// The command is not executed; it only shows up, prefixed, as the
    /// description.
    #[must_use]
    pub fn description_url(&self, name: &str, cmd: &str, url: &str) -> Button {
        Button {
            description: with_placeholder(cmd),
            ..self.for_url(name, url)
        }
    }

    fn url_with_desc(
        &self,
        name: &str,
        desc: &str,
        url: &str,
        desc_style: ButtonDescriptionStyle,
    ) -> Button {
        Button {
            description: desc.to_owned(),
            description_style: desc_style,
            ..self.for_url(name, url)
        }
    }

    fn command_with_cmd_desc(&self, name: &str, cmd: &str, desc: &str) -> Button {
        self.command_with_desc(
            name,
            cmd,
            &with_placeholder(desc),
            ButtonDescriptionStyle::Code,
        )
    }

    fn command_with_desc(
        &self,
        name: &str,
        cmd: &str,
        desc: &str,
        desc_style: ButtonDescriptionStyle,
    ) -> Button {
        Button {
            name: name.to_owned(),
            command: with_placeholder(cmd),
            description: desc.to_owned(),
            description_style: desc_style,
            url: String::new(),
            style: self.style,
        }
    }
}

fn with_placeholder(text: &str) -> String {
    format!("{BOT_NAME_PLACEHOLDER} {text}")
}
