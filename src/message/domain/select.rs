//! Drop-down selection elements.
//!
//! Pre-selected options are expected to be members of the offered options.
//! That relation is left to the caller and to the platform renderer; nothing
//! here checks it.

use super::{Body, macros::labelled_enum};
use serde::{Deserialize, Serialize};

labelled_enum! {
    /// Where a select's options come from.
    pub enum SelectType("select type") {
        /// Not specified; renderers treat it as static.
        #[default]
        Unspecified => "",
        /// Options are embedded in the message.
        Static => "static",
        /// Options are loaded by the platform from an external source.
        External => "external",
    }
}

/// A selectable option.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionItem {
    /// Display name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Value submitted when the option is chosen.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value: String,
}

impl OptionItem {
    /// Creates an option.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A named group of options within a select menu.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionGroup {
    /// Group label.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Options in display order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionItem>,
}

impl OptionGroup {
    /// Creates an empty group.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Vec::new(),
        }
    }

    /// Appends an option to the group.
    #[must_use]
    pub fn with_option(mut self, option: OptionItem) -> Self {
        self.options.push(option);
        self
    }
}

/// A single-choice drop-down.
///
/// # Examples
///
/// ```
/// use chatblocks::message::domain::{OptionGroup, OptionItem, Select, SelectType};
///
/// let select = Select::new(SelectType::Static, "Namespace", "get pods -n")
///     .with_option_group(
///         OptionGroup::new("Namespaces")
///             .with_option(OptionItem::new("default", "default"))
///             .with_option(OptionItem::new("kube-system", "kube-system")),
///     )
///     .with_initial_option(OptionItem::new("default", "default"));
///
/// assert_eq!(select.option_groups[0].options.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Select {
    /// Option source.
    #[serde(rename = "type", skip_serializing_if = "super::is_zero_value")]
    pub select_type: SelectType,
    /// Placeholder label.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Command run with the chosen value appended.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub command: String,
    /// Options grouped under labels.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub option_groups: Vec<OptionGroup>,
    /// Pre-selected option, one of `option_groups`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_option: Option<OptionItem>,
}

impl Select {
    /// Creates a select with no options.
    #[must_use]
    pub fn new(
        select_type: SelectType,
        name: impl Into<String>,
        command: impl Into<String>,
    ) -> Self {
        Self {
            select_type,
            name: name.into(),
            command: command.into(),
            option_groups: Vec::new(),
            initial_option: None,
        }
    }

    /// Appends an option group.
    #[must_use]
    pub fn with_option_group(mut self, group: OptionGroup) -> Self {
        self.option_groups.push(group);
        self
    }

    /// Sets the pre-selected option.
    #[must_use]
    pub fn with_initial_option(mut self, option: OptionItem) -> Self {
        self.initial_option = Some(option);
        self
    }
}

/// A block of single-choice drop-downs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Selects {
    /// Identifies the block when the message is updated in place.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// The drop-downs, in display order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Select>,
}

impl Selects {
    /// Creates an empty block with the given identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            items: Vec::new(),
        }
    }

    /// Appends a drop-down.
    #[must_use]
    pub fn with_item(mut self, select: Select) -> Self {
        self.items.push(select);
        self
    }

    /// Returns `true` if the block has at least one drop-down.
    #[must_use]
    pub fn are_options_defined(&self) -> bool {
        !self.items.is_empty()
    }

    /// Returns `true` if neither an identifier nor drop-downs are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.id.is_empty() && self.items.is_empty()
    }
}

/// A multi-choice drop-down.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MultiSelect {
    /// Placeholder label.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Text displayed next to the drop-down.
    #[serde(skip_serializing_if = "Body::is_empty")]
    pub description: Body,
    /// Command run with the chosen values appended.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub command: String,
    /// Every available option.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionItem>,
    /// Pre-selected options, a subset of `options`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub initial_options: Vec<OptionItem>,
}

impl MultiSelect {
    /// Creates a multi-select with no options.
    #[must_use]
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
            ..Self::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: Body) -> Self {
        self.description = description;
        self
    }

    /// Appends an available option.
    #[must_use]
    pub fn with_option(mut self, option: OptionItem) -> Self {
        self.options.push(option);
        self
    }

    /// Appends a pre-selected option.
    #[must_use]
    pub fn with_initial_option(mut self, option: OptionItem) -> Self {
        self.initial_options.push(option);
        self
    }

    /// Returns `true` if any options are offered.
    #[must_use]
    pub fn are_options_defined(&self) -> bool {
        !self.options.is_empty()
    }

    /// Returns `true` if every field holds its zero value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Option presence over a possibly absent drop-down.
///
/// Implemented for [`Selects`] and [`MultiSelect`], for references to them,
/// and for `Option` of any implementor, so an absent element answers `false`
/// instead of requiring a check at every call site.
///
/// # Examples
///
/// ```
/// use chatblocks::message::domain::{MultiSelect, OptionsDefined, Selects};
///
/// let absent: Option<&Selects> = None;
/// assert!(!absent.are_options_defined());
///
/// let empty = MultiSelect::default();
/// assert!(!Some(&empty).are_options_defined());
/// ```
pub trait OptionsDefined {
    /// Returns `true` if options are available.
    #[must_use]
    fn are_options_defined(&self) -> bool;
}

impl OptionsDefined for Selects {
    fn are_options_defined(&self) -> bool {
        Self::are_options_defined(self)
    }
}

impl OptionsDefined for MultiSelect {
    fn are_options_defined(&self) -> bool {
        Self::are_options_defined(self)
    }
}

impl<T: OptionsDefined + ?Sized> OptionsDefined for &T {
    fn are_options_defined(&self) -> bool {
        (**self).are_options_defined()
    }
}

impl<T: OptionsDefined> OptionsDefined for Option<T> {
    fn are_options_defined(&self) -> bool {
        self.as_ref().is_some_and(OptionsDefined::are_options_defined)
    }
}
