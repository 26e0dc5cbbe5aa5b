//! Configuration for bot-name substitution.

use super::BOT_NAME_PLACEHOLDER;
use serde::{Deserialize, Serialize};

/// Bot name used when none is configured.
pub const DEFAULT_BOT_NAME: &str = "@bot";

/// Configuration for [`BotNameResolver`](super::BotNameResolver).
///
/// Every field is optional when deserialising.
///
/// # Examples
///
/// ```
/// use chatblocks::message::substitution::{BOT_NAME_PLACEHOLDER, SubstitutionConfig};
///
/// let config = SubstitutionConfig::default();
/// assert_eq!(config.placeholder, BOT_NAME_PLACEHOLDER);
/// assert_eq!(config.bot_name, "@bot");
///
/// let custom = SubstitutionConfig::new("@Botkube");
/// assert_eq!(custom.bot_name, "@Botkube");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SubstitutionConfig {
    /// Token to search for.
    pub placeholder: String,
    /// Replacement text, usually the bot mention or command prefix.
    pub bot_name: String,
}

impl SubstitutionConfig {
    /// Creates a configuration replacing the standard placeholder with
    /// `bot_name`.
    #[must_use]
    pub fn new(bot_name: impl Into<String>) -> Self {
        Self {
            bot_name: bot_name.into(),
            ..Self::default()
        }
    }

    /// Overrides the token to search for.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }
}

impl Default for SubstitutionConfig {
    fn default() -> Self {
        Self {
            placeholder: BOT_NAME_PLACEHOLDER.to_owned(),
            bot_name: DEFAULT_BOT_NAME.to_owned(),
        }
    }
}
