//! Placeholder replacement across a message tree.

use super::SubstitutionConfig;
use crate::message::domain::{Base, Body, Button, LabelInput, Message, Section};
use tracing::{debug, warn};

/// Replaces the bot-name placeholder with the configured bot name.
///
/// Resolution never mutates its input; each call returns a new value.
///
/// # Examples
///
/// ```
/// use chatblocks::message::builder::ButtonBuilder;
/// use chatblocks::message::substitution::{BotNameResolver, SubstitutionConfig};
///
/// let resolver = BotNameResolver::new(SubstitutionConfig::new("@Botkube"));
/// let button = ButtonBuilder::new().for_command_without_desc("Logs", "logs deploy/api");
///
/// assert_eq!(resolver.resolve_button(&button).command, "@Botkube logs deploy/api");
/// assert_eq!(button.command, "{{BotName}} logs deploy/api");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotNameResolver {
    config: SubstitutionConfig,
}

impl BotNameResolver {
    /// Creates a resolver. An empty placeholder disables substitution.
    #[must_use]
    pub fn new(config: SubstitutionConfig) -> Self {
        if config.placeholder.is_empty() {
            warn!("empty bot-name placeholder configured; substitution is disabled");
        }
        Self { config }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &SubstitutionConfig {
        &self.config
    }

    /// Returns `text` with every placeholder occurrence replaced.
    #[must_use]
    pub fn resolve(&self, text: &str) -> String {
        let mut resolved = text.to_owned();
        let mut pass = self.pass();
        pass.text(&mut resolved);
        pass.report("text");
        resolved
    }

    /// Returns a copy of `button` with its command and description resolved.
    #[must_use]
    pub fn resolve_button(&self, button: &Button) -> Button {
        let mut resolved = button.clone();
        let mut pass = self.pass();
        pass.button(&mut resolved);
        pass.report("button");
        resolved
    }

    /// Returns a copy of `section` with all of its text resolved.
    #[must_use]
    pub fn resolve_section(&self, section: &Section) -> Section {
        let mut resolved = section.clone();
        let mut pass = self.pass();
        pass.section(&mut resolved);
        pass.report("section");
        resolved
    }

    /// Returns a copy of `message` with all of its text resolved.
    ///
    /// Names, URLs, identifiers and option values are left untouched; they
    /// are never generated with the placeholder.
    #[must_use]
    pub fn resolve_message(&self, message: &Message) -> Message {
        let mut resolved = message.clone();
        let mut pass = self.pass();
        pass.body(&mut resolved.base_body);
        for section in &mut resolved.sections {
            pass.section(section);
        }
        for input in resolved.plaintext_inputs.iter_mut() {
            pass.input(input);
        }
        debug!(
            replaced = pass.replaced,
            sections = resolved.sections.len(),
            bot_name = %self.config.bot_name,
            "resolved bot-name placeholders in message"
        );
        resolved
    }

    fn pass(&self) -> Pass<'_> {
        Pass {
            placeholder: &self.config.placeholder,
            bot_name: &self.config.bot_name,
            replaced: 0,
        }
    }
}

/// One substitution walk, counting replacements as it goes.
struct Pass<'a> {
    placeholder: &'a str,
    bot_name: &'a str,
    replaced: usize,
}

impl Pass<'_> {
    fn report(&self, scope: &'static str) {
        debug!(
            replaced = self.replaced,
            bot_name = %self.bot_name,
            "resolved bot-name placeholders in {scope}"
        );
    }

    fn text(&mut self, text: &mut String) {
        if self.placeholder.is_empty() {
            return;
        }
        let occurrences = text.matches(self.placeholder).count();
        if occurrences == 0 {
            return;
        }
        *text = text.replace(self.placeholder, self.bot_name);
        self.replaced = self.replaced.saturating_add(occurrences);
    }

    fn body(&mut self, body: &mut Body) {
        self.text(&mut body.code_block);
        self.text(&mut body.plaintext);
    }

    fn base(&mut self, base: &mut Base) {
        self.text(&mut base.header);
        self.text(&mut base.description);
        self.body(&mut base.body);
    }

    fn button(&mut self, button: &mut Button) {
        self.text(&mut button.command);
        self.text(&mut button.description);
    }

    fn input(&mut self, input: &mut LabelInput) {
        self.text(&mut input.command);
        self.text(&mut input.text);
        self.text(&mut input.placeholder);
    }

    fn section(&mut self, section: &mut Section) {
        self.base(&mut section.base);
        for button in section.buttons.iter_mut() {
            self.button(button);
        }
        self.text(&mut section.multi_select.command);
        self.body(&mut section.multi_select.description);
        for select in &mut section.selects.items {
            self.text(&mut select.command);
        }
        for input in section.plaintext_inputs.iter_mut() {
            self.input(input);
        }
        for field in section.text_fields.iter_mut() {
            self.text(&mut field.value);
        }
        for list in section.bullet_lists.iter_mut() {
            for item in &mut list.items {
                self.text(item);
            }
        }
        for item in section.context.iter_mut() {
            self.text(&mut item.text);
        }
    }
}
