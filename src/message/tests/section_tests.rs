//! Unit tests for sections and their non-interactive elements.

use crate::message::domain::{
    Body, BulletList, BulletLists, Button, Buttons, ContextItem, ContextItems, DividerStyle,
    LabelInput, MultiSelect, OptionItem, Section, Selects, TextField,
};
use rstest::rstest;

// ============================================================================
// TextField
// ============================================================================

#[rstest]
#[case("", "", true)]
#[case("key", "", false)]
#[case("", "value", false)]
#[case("key", "value", false)]
fn text_field_is_empty(#[case] key: &str, #[case] value: &str, #[case] expected: bool) {
    assert_eq!(TextField::new(key, value).is_empty(), expected);
}

// ============================================================================
// BulletLists
// ============================================================================

#[rstest]
fn no_lists_means_no_items() {
    assert!(!BulletLists::new().are_items_defined());
}

#[rstest]
fn titled_but_empty_lists_have_no_items() {
    let lists = BulletLists::from(vec![BulletList::new("a"), BulletList::new("b")]);

    assert!(!lists.are_items_defined());
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(2)]
fn any_list_with_items_defines_items(#[case] populated: usize) {
    let lists: BulletLists = (0..3)
        .map(|i| {
            let list = BulletList::new(format!("list-{i}"));
            if i == populated {
                list.with_item("entry")
            } else {
                list
            }
        })
        .collect();

    assert!(lists.are_items_defined());
}

// ============================================================================
// ContextItems
// ============================================================================

#[rstest]
fn context_items_defined_when_non_empty() {
    assert!(!ContextItems::new().is_defined());
    assert!(ContextItems::from([ContextItem::new("")]).is_defined());
}

// ============================================================================
// Section
// ============================================================================

#[rstest]
fn new_section_is_empty() {
    let section = Section::new();

    assert!(section.is_empty());
    assert!(section.base.is_empty());
    assert_eq!(section.style.divider, DividerStyle::Default);
}

#[rstest]
fn section_helpers_populate_each_collection() {
    let section = Section::new()
        .with_divider(DividerStyle::None)
        .with_header("Pods")
        .with_description("Running pods")
        .with_body(Body::plaintext("3 running"))
        .with_multi_select(
            MultiSelect::new("Namespaces", "get pods -n")
                .with_option(OptionItem::new("default", "default")),
        )
        .with_selects(Selects::new("select-block"))
        .with_plaintext_input(LabelInput::new("logs", "Pod name"))
        .with_text_field(TextField::new("Ready", "3/3"))
        .with_bullet_list(BulletList::new("Images").with_item("nginx:1.25"))
        .with_context_item(ContextItem::new("cluster: prod"));

    assert!(!section.is_empty());
    assert_eq!(section.style.divider, DividerStyle::None);
    assert_eq!(section.base.description, "Running pods");
    assert!(section.multi_select.are_options_defined());
    assert!(!section.selects.are_options_defined());
    assert_eq!(section.plaintext_inputs.len(), 1);
    assert_eq!(section.text_fields.len(), 1);
    assert!(section.bullet_lists.are_items_defined());
    assert!(section.context.is_defined());
}

#[rstest]
fn with_buttons_replaces_existing_buttons() {
    let section = Section::new()
        .with_button(Button::default())
        .with_buttons(Buttons::new());

    assert!(section.buttons.is_empty());
}
