//! Sections and their non-interactive building blocks.

use super::{
    Base, Body, Buttons, LabelInputs, MultiSelect, Selects,
    macros::{element_collection, labelled_enum},
};
use serde::{Deserialize, Serialize};

labelled_enum! {
    /// Separator placed between a section and the one above it.
    pub enum DividerStyle("divider style") {
        /// A block divider, like an `<hr>`.
        #[default]
        Default => "",
        /// No divider.
        None => "none",
    }
}

/// Visual separation settings of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionStyle {
    /// Divider above the section.
    #[serde(
        alias = "dividerStyle",
        skip_serializing_if = "super::is_zero_value"
    )]
    pub divider: DividerStyle,
}

impl SectionStyle {
    /// Returns `true` if the default style is in effect.
    #[must_use]
    pub fn is_default(self) -> bool {
        self.divider.is_default()
    }
}

/// A key/value pair displayed in a section.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TextField {
    /// Field label.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub key: String,
    /// Field value.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value: String,
}

impl TextField {
    /// Creates a text field.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Returns `true` if both key and value are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.key.is_empty() && self.value.is_empty()
    }
}

element_collection! {
    /// Ordered key/value fields.
    pub struct TextFields(TextField);
}

/// A titled list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletList {
    /// List title.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// Entries in display order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<String>,
}

impl BulletList {
    /// Creates an empty list with a title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
        }
    }

    /// Appends an entry.
    #[must_use]
    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.items.push(item.into());
        self
    }
}

element_collection! {
    /// Ordered bullet lists.
    pub struct BulletLists(BulletList);
}

impl BulletLists {
    /// Returns `true` if at least one list has an entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use chatblocks::message::domain::{BulletList, BulletLists};
    ///
    /// let lists = BulletLists::from(vec![
    ///     BulletList::new("Empty"),
    ///     BulletList::new("Pods").with_item("nginx-1"),
    /// ]);
    /// assert!(lists.are_items_defined());
    /// assert!(!BulletLists::new().are_items_defined());
    /// ```
    #[must_use]
    pub fn are_items_defined(&self) -> bool {
        self.iter().any(|list| !list.items.is_empty())
    }
}

/// A small annotation rendered as a section footer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextItem {
    /// Annotation text.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
}

impl ContextItem {
    /// Creates a context item.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

element_collection! {
    /// Ordered context annotations.
    pub struct ContextItems(ContextItem);
}

impl ContextItems {
    /// Returns `true` if any context items are present.
    #[must_use]
    pub fn is_defined(&self) -> bool {
        !self.is_empty()
    }
}

/// A self-contained block of a message.
///
/// What a renderer draws for a section is the union of whichever element
/// collections are non-empty.
///
/// Header, description and body are written inline. Decoding also accepts
/// them nested under a `base` key, the layout used by configuration files;
/// inline values win where both are present.
///
/// # Examples
///
/// ```
/// use chatblocks::message::builder::ButtonBuilder;
/// use chatblocks::message::domain::{Body, Section, TextField};
///
/// let section = Section::new()
///     .with_header("Deployment")
///     .with_body(Body::code_block("replicas: 3"))
///     .with_text_field(TextField::new("Namespace", "default"))
///     .with_button(ButtonBuilder::new().for_command_with_desc_cmd("Scale", "scale"));
///
/// assert_eq!(section.base.header, "Deployment");
/// assert_eq!(section.buttons.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "SectionDocument")]
pub struct Section {
    /// Visual separation.
    #[serde(skip_serializing_if = "super::is_zero_value")]
    pub style: SectionStyle,
    /// Header, description, and body, serialised inline.
    #[serde(flatten)]
    pub base: Base,
    /// Action buttons.
    #[serde(skip_serializing_if = "Buttons::is_empty")]
    pub buttons: Buttons,
    /// Multi-choice drop-down.
    #[serde(skip_serializing_if = "MultiSelect::is_empty")]
    pub multi_select: MultiSelect,
    /// Single-choice drop-downs.
    #[serde(skip_serializing_if = "Selects::is_empty")]
    pub selects: Selects,
    /// Free-text inputs.
    #[serde(skip_serializing_if = "LabelInputs::is_empty")]
    pub plaintext_inputs: LabelInputs,
    /// Key/value fields.
    #[serde(skip_serializing_if = "TextFields::is_empty")]
    pub text_fields: TextFields,
    /// Titled lists.
    #[serde(skip_serializing_if = "BulletLists::is_empty")]
    pub bullet_lists: BulletLists,
    /// Footer annotations.
    #[serde(skip_serializing_if = "ContextItems::is_empty")]
    pub context: ContextItems,
}

/// Decoding form of [`Section`] accepting both base layouts.
#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct SectionDocument {
    style: SectionStyle,
    #[serde(flatten)]
    inline: Base,
    base: Option<Base>,
    buttons: Buttons,
    multi_select: MultiSelect,
    selects: Selects,
    plaintext_inputs: LabelInputs,
    text_fields: TextFields,
    bullet_lists: BulletLists,
    context: ContextItems,
}

impl From<SectionDocument> for Section {
    fn from(document: SectionDocument) -> Self {
        Self {
            style: document.style,
            base: fill_empty(document.inline, document.base.unwrap_or_default()),
            buttons: document.buttons,
            multi_select: document.multi_select,
            selects: document.selects,
            plaintext_inputs: document.plaintext_inputs,
            text_fields: document.text_fields,
            bullet_lists: document.bullet_lists,
            context: document.context,
        }
    }
}

fn fill_empty(inline: Base, nested: Base) -> Base {
    Base {
        header: non_empty_or(inline.header, nested.header),
        description: non_empty_or(inline.description, nested.description),
        body: if inline.body.is_empty() {
            nested.body
        } else {
            inline.body
        },
    }
}

fn non_empty_or(value: String, fallback: String) -> String {
    if value.is_empty() { fallback } else { value }
}

impl Section {
    /// Creates an empty section.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the divider style.
    #[must_use]
    pub const fn with_divider(mut self, divider: DividerStyle) -> Self {
        self.style.divider = divider;
        self
    }

    /// Sets the header.
    #[must_use]
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.base.header = header.into();
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.base.description = description.into();
        self
    }

    /// Sets the body.
    #[must_use]
    pub fn with_body(mut self, body: Body) -> Self {
        self.base.body = body;
        self
    }

    /// Appends a button.
    #[must_use]
    pub fn with_button(mut self, button: super::Button) -> Self {
        self.buttons.push(button);
        self
    }

    /// Replaces the buttons.
    #[must_use]
    pub fn with_buttons(mut self, buttons: impl Into<Buttons>) -> Self {
        self.buttons = buttons.into();
        self
    }

    /// Sets the multi-choice drop-down.
    #[must_use]
    pub fn with_multi_select(mut self, multi_select: MultiSelect) -> Self {
        self.multi_select = multi_select;
        self
    }

    /// Sets the single-choice drop-downs.
    #[must_use]
    pub fn with_selects(mut self, selects: Selects) -> Self {
        self.selects = selects;
        self
    }

    /// Appends a free-text input.
    #[must_use]
    pub fn with_plaintext_input(mut self, input: super::LabelInput) -> Self {
        self.plaintext_inputs.push(input);
        self
    }

    /// Appends a key/value field.
    #[must_use]
    pub fn with_text_field(mut self, field: TextField) -> Self {
        self.text_fields.push(field);
        self
    }

    /// Appends a bullet list.
    #[must_use]
    pub fn with_bullet_list(mut self, list: BulletList) -> Self {
        self.bullet_lists.push(list);
        self
    }

    /// Appends a footer annotation.
    #[must_use]
    pub fn with_context_item(mut self, item: ContextItem) -> Self {
        self.context.push(item);
        self
    }

    /// Returns `true` if every field holds its zero value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
