//! Domain types for the message schema.
//!
//! This module contains pure value types with no rendering or transport
//! concerns. Every type is a plain tree node: cloned freely, compared
//! structurally, and serialisable via serde with zero-valued fields omitted.

mod macros;

mod body;
mod button;
mod input;
mod message;
mod section;
mod select;

pub use body::{Base, Body};
pub use button::{Button, ButtonDescriptionStyle, ButtonPartition, ButtonStyle, Buttons};
pub use input::{DispatchedInputAction, LabelInput, LabelInputs};
pub use message::{Message, MessageType};
pub use section::{
    BulletList, BulletLists, ContextItem, ContextItems, DividerStyle, Section, SectionStyle,
    TextField, TextFields,
};
pub use select::{
    MultiSelect, OptionGroup, OptionItem, OptionsDefined, Select, SelectType, Selects,
};

/// Serde `skip_serializing_if` predicate for fields whose zero value is
/// their `Default`.
fn is_zero_value<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}
