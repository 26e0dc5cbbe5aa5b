//! Factories producing consistently shaped schema values.

mod button;

pub use button::ButtonBuilder;
