//! Behavioural integration tests for building and inspecting messages.
//!
//! These tests exercise the path a notification takes before rendering:
//! assemble a message with the builder, inspect it the way a renderer
//! does, resolve the bot name, and encode it.

use chatblocks::message::{
    builder::ButtonBuilder,
    domain::{
        Body, BulletList, ButtonPartition, ButtonStyle, Buttons, ContextItem, Message,
        MessageType, MultiSelect, OptionItem, OptionsDefined, Section, Selects, TextField,
    },
    substitution::{BotNameResolver, SubstitutionConfig},
};
use mockable::DefaultClock;

fn alert_message() -> Message {
    let buttons = ButtonBuilder::new();
    Message::new()
        .with_base_body(Body::plaintext("Pod api-0 is CrashLooping"))
        .stamped(&DefaultClock)
        .with_section(
            Section::new()
                .with_header("api-0")
                .with_text_field(TextField::new("Namespace", "prod"))
                .with_text_field(TextField::new("Restarts", "7"))
                .with_buttons(vec![
                    buttons.for_command_with_desc_cmd("Logs", "logs pod/api-0 -n prod"),
                    buttons.for_url("Runbook", "https://runbooks.example.com/crashloop"),
                    buttons
                        .with_style(ButtonStyle::Danger)
                        .for_command_without_desc("Delete", "delete pod/api-0 -n prod"),
                ])
                .with_bullet_list(
                    BulletList::new("Recent events")
                        .with_item("Back-off restarting failed container"),
                )
                .with_context_item(ContextItem::new("cluster: prod-eu")),
        )
}

// ============================================================================
// Scenario: Renderer splits buttons by description
// ============================================================================

/// A renderer lays out described buttons as rows and the rest as a single
/// action bar; between them every button is placed exactly once.
#[test]
fn renderer_splits_buttons_by_description() {
    // Arrange
    let message = alert_message();
    let buttons = &message.sections[0].buttons;

    // Act
    let rows = buttons.buttons_with_description();
    let bar = buttons.buttons_without_description();

    // Assert
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Logs");
    let bar_names: Vec<&str> = bar.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(bar_names, ["Runbook", "Delete"]);
    assert_eq!(bar[1].style, ButtonStyle::Danger);
}

// ============================================================================
// Scenario: Renderer skips empty messages
// ============================================================================

/// When a command produces nothing, the caller replaces the empty message
/// with a skip message instead of sending an empty card.
#[test]
fn empty_message_is_replaced_with_skip() {
    // Arrange
    let produced = Message::new().with_user_handle("@ann");

    // Act
    let outgoing = if produced.is_empty() {
        Message::skip()
    } else {
        produced
    };

    // Assert
    assert_eq!(outgoing.message_type, MessageType::Skip);
}

// ============================================================================
// Scenario: Absent optional elements are safe to inspect
// ============================================================================

/// Renderers probe optional drop-downs and button rows without checking for
/// presence first.
#[test]
fn absent_elements_report_nothing_defined() {
    let no_selects: Option<&Selects> = None;
    let no_multi: Option<&MultiSelect> = None;
    let no_buttons: Option<&Buttons> = None;

    assert!(!no_selects.are_options_defined());
    assert!(!no_multi.are_options_defined());
    assert!(no_buttons.buttons_with_description().is_empty());
    assert!(no_buttons.buttons_without_description().is_empty());
}

// ============================================================================
// Scenario: Message is resolved and encoded for delivery
// ============================================================================

/// Before delivery the bot name is substituted and the message is encoded;
/// the receiving side decodes an identical tree.
#[test]
fn resolved_message_survives_encoding() {
    // Arrange
    let resolver = BotNameResolver::new(SubstitutionConfig::new("@Botkube"));
    let message = alert_message().with_section(
        Section::new().with_multi_select(
            MultiSelect::new("Namespaces", "{{BotName}} get pods -n")
                .with_option(OptionItem::new("prod", "prod")),
        ),
    );

    // Act
    let resolved = resolver.resolve_message(&message);
    let encoded = resolved.to_json().expect("encode");
    let decoded = Message::from_json(&encoded).expect("decode");

    // Assert
    assert_eq!(decoded, resolved);
    assert_eq!(
        decoded.sections[0].buttons[0].command,
        "@Botkube logs pod/api-0 -n prod"
    );
    assert!(decoded.sections[1].multi_select.are_options_defined());
    assert!(decoded.timestamp.is_some());
    assert!(!encoded.contains("{{BotName}}"));
}
