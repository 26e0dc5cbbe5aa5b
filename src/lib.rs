//! Chatblocks: platform-agnostic interactive chat messages.
//!
//! This crate defines the data model an outgoing chat message is built from
//! (sections, buttons, drop-downs, inputs, and text blocks) together with
//! the helpers renderers use to inspect it. It does not render anything
//! itself: per-platform renderers read the schema and decide the layout.
//!
//! # Modules
//!
//! - [`message`]: Message schema, button builder, and bot-name substitution
pub mod message;
