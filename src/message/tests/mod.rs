//! Unit tests for the message module.
//!
//! Tests are organised by domain concept, covering the predicates renderers
//! depend on, the button builder conventions, and the wire format.

mod section_tests;
mod select_tests;
