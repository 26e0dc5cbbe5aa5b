//! Unit tests for drop-down elements.

use crate::message::domain::{
    MultiSelect, OptionGroup, OptionItem, OptionsDefined, Select, SelectType, Selects,
};
use rstest::rstest;

fn namespace_select() -> Select {
    Select::new(SelectType::Static, "Namespace", "get pods -n").with_option_group(
        OptionGroup::new("Namespaces").with_option(OptionItem::new("default", "default")),
    )
}

#[rstest]
fn selects_without_items_have_no_options() {
    assert!(!Selects::new("block").are_options_defined());
}

#[rstest]
fn selects_with_items_have_options() {
    let selects = Selects::new("block").with_item(namespace_select());

    assert!(selects.are_options_defined());
}

#[rstest]
fn absent_selects_have_no_options() {
    let absent: Option<&Selects> = None;

    assert!(!absent.are_options_defined());
}

#[rstest]
fn absent_multi_select_has_no_options() {
    let absent: Option<&MultiSelect> = None;

    assert!(!absent.are_options_defined());
}

#[rstest]
fn present_elements_answer_through_option() {
    let selects = Selects::new("block").with_item(namespace_select());
    let multi = MultiSelect::new("Labels", "get pods -l").with_option(OptionItem::new("a", "a"));

    assert!(Some(&selects).are_options_defined());
    assert!(Some(multi).are_options_defined());
}

#[rstest]
fn multi_select_needs_options_not_initial_options() {
    let multi = MultiSelect::new("Labels", "get pods -l")
        .with_initial_option(OptionItem::new("orphan", "orphan"));

    assert!(!multi.are_options_defined());
}

#[rstest]
fn initial_option_outside_offered_set_is_not_rejected() {
    let select =
        namespace_select().with_initial_option(OptionItem::new("kube-system", "kube-system"));

    assert_eq!(
        select.initial_option,
        Some(OptionItem::new("kube-system", "kube-system"))
    );
}

#[rstest]
fn empty_multi_select_is_empty() {
    assert!(MultiSelect::default().is_empty());
    assert!(!MultiSelect::new("n", "").is_empty());
}
