//! Interactive message schema for Chatblocks.
//!
//! # Architecture
//!
//! - **Domain**: Plain value types ([`domain::Message`], [`domain::Section`], [`domain::Button`], etc.)
//!   with the predicates renderers rely on
//! - **Builder**: [`builder::ButtonBuilder`], applying the bot-name placeholder convention
//! - **Substitution**: [`substitution::BotNameResolver`], replacing the placeholder before display
//!
//! # Example
//!
//! ```
//! use chatblocks::message::builder::ButtonBuilder;
//! use chatblocks::message::domain::{Body, Message, Section};
//! use chatblocks::message::substitution::{BotNameResolver, SubstitutionConfig};
//!
//! let buttons = ButtonBuilder::new();
//! let message = Message::new()
//!     .with_base_body(Body::plaintext("Deployment api is degraded"))
//!     .with_section(
//!         Section::new()
//!             .with_header("api")
//!             .with_button(buttons.for_command_with_desc_cmd("Describe", "describe deploy/api")),
//!     );
//! assert!(!message.is_empty());
//!
//! let resolver = BotNameResolver::new(SubstitutionConfig::new("@Botkube"));
//! let resolved = resolver.resolve_message(&message);
//! assert_eq!(resolved.sections[0].buttons[0].command, "@Botkube describe deploy/api");
//! ```

pub mod builder;
pub mod domain;
pub mod error;
pub mod substitution;

#[cfg(test)]
mod tests;
