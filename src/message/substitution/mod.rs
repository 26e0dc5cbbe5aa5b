//! Bot-name placeholder handling.
//!
//! Generated command strings embed [`BOT_NAME_PLACEHOLDER`] instead of the
//! bot's real invocation prefix, which differs per platform and deployment.
//! A renderer replaces it right before display, either itself or through
//! [`BotNameResolver`].

mod config;
mod resolver;

pub use config::{DEFAULT_BOT_NAME, SubstitutionConfig};
pub use resolver::BotNameResolver;

/// Token standing in for the bot's invocation prefix in command text.
pub const BOT_NAME_PLACEHOLDER: &str = "{{BotName}}";
