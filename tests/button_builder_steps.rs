//! Behavioural tests for the button builder and bot-name resolution.

use chatblocks::message::{
    builder::ButtonBuilder,
    domain::{Button, ButtonDescriptionStyle, ButtonStyle, Message, Section},
    substitution::{BOT_NAME_PLACEHOLDER, BotNameResolver, SubstitutionConfig},
};
use eyre::{Result, eyre};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[derive(Default)]
struct ButtonWorld {
    builder: Option<ButtonBuilder>,
    button: Option<Button>,
    resolved: Option<Message>,
}

#[fixture]
fn world() -> ButtonWorld {
    ButtonWorld::default()
}

impl ButtonWorld {
    fn button(&self) -> Result<&Button> {
        self.button
            .as_ref()
            .ok_or_else(|| eyre!("expected a built button"))
    }
}

#[given("a default button builder")]
fn default_builder(world: &mut ButtonWorld) {
    world.builder = Some(ButtonBuilder::new());
    world.button = None;
    world.resolved = None;
}

#[given("a button builder with danger style")]
fn danger_builder(world: &mut ButtonWorld) {
    world.builder = Some(ButtonBuilder::new().with_style(ButtonStyle::Danger));
    world.button = None;
    world.resolved = None;
}

#[when("I build a command button named \"Run\" for command \"run-now\"")]
fn build_command_button(world: &mut ButtonWorld) {
    if let Some(builder) = &world.builder {
        world.button = Some(builder.for_command_with_desc_cmd("Run", "run-now"));
    }
}

#[when("I build a link button named \"Docs\" described as \"See docs\" for \"https://x\"")]
fn build_link_button(world: &mut ButtonWorld) {
    if let Some(builder) = &world.builder {
        world.button = Some(builder.for_url_with_bold_desc("Docs", "See docs", "https://x"));
    }
}

#[when("the message carrying the button is resolved for \"@Botkube\"")]
fn resolve_message(world: &mut ButtonWorld) {
    if let Some(button) = &world.button {
        let message = Message::new().with_section(Section::new().with_button(button.clone()));
        let resolver = BotNameResolver::new(SubstitutionConfig::new("@Botkube"));
        world.resolved = Some(resolver.resolve_message(&message));
    }
}

#[then("the button command carries the bot-name placeholder")]
fn command_has_placeholder(world: &ButtonWorld) -> Result<()> {
    let button = world.button()?;

    assert_eq!(button.command, format!("{BOT_NAME_PLACEHOLDER} run-now"));
    Ok(())
}

#[then("the button description is rendered as code")]
fn description_is_code(world: &ButtonWorld) -> Result<()> {
    let button = world.button()?;

    assert_eq!(button.description, format!("{BOT_NAME_PLACEHOLDER} run-now"));
    assert_eq!(button.description_style, ButtonDescriptionStyle::Code);
    Ok(())
}

#[then("the button opens \"https://x\" with a bold description")]
fn link_with_bold_description(world: &ButtonWorld) -> Result<()> {
    let button = world.button()?;

    assert_eq!(button.url, "https://x");
    assert_eq!(button.description, "See docs");
    assert_eq!(button.description_style, ButtonDescriptionStyle::Bold);
    assert!(button.command.is_empty());
    Ok(())
}

#[then("the button is styled as danger")]
fn styled_as_danger(world: &ButtonWorld) -> Result<()> {
    let button = world.button()?;

    assert_eq!(button.style, ButtonStyle::Danger);
    Ok(())
}

#[then("the resolved button command is \"@Botkube run-now\"")]
fn resolved_command(world: &ButtonWorld) -> Result<()> {
    let message = world
        .resolved
        .as_ref()
        .ok_or_else(|| eyre!("expected a resolved message"))?;
    let button = message
        .sections
        .first()
        .and_then(|section| section.buttons.first())
        .ok_or_else(|| eyre!("expected a button in the first section"))?;

    assert_eq!(button.command, "@Botkube run-now");
    Ok(())
}

#[then("no placeholder remains in the encoded message")]
fn no_placeholder_remains(world: &ButtonWorld) -> Result<()> {
    let message = world
        .resolved
        .as_ref()
        .ok_or_else(|| eyre!("expected a resolved message"))?;
    let encoded = message.to_json()?;

    assert!(!encoded.contains(BOT_NAME_PLACEHOLDER));
    Ok(())
}

#[scenario(
    path = "tests/features/button_builder.feature",
    name = "Command button repeats its command as description"
)]
#[tokio::test(flavor = "multi_thread")]
async fn command_button(world: ButtonWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/button_builder.feature",
    name = "Link button with a bold description"
)]
#[tokio::test(flavor = "multi_thread")]
async fn link_button(world: ButtonWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/button_builder.feature",
    name = "Danger style is applied to every produced button"
)]
#[tokio::test(flavor = "multi_thread")]
async fn danger_style(world: ButtonWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/button_builder.feature",
    name = "Resolved message contains no placeholders"
)]
#[tokio::test(flavor = "multi_thread")]
async fn resolved_message(world: ButtonWorld) {
    let _ = world;
}
