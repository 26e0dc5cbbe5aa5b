//! Declarative helpers for the schema's repetitive shapes.
//!
//! Every closed enumeration in the schema is carried on the wire as a string
//! label, with the empty label reserved for the zero-value variant where one
//! exists. `labelled_enum!` derives the serde mapping, the `as_str`
//! accessor, `Display`, and the `TryFrom<&str>`/`FromStr` parsers from a
//! single variant table so the four can never drift apart.
//!
//! Element collections (`Buttons`, `TextFields`, ...) are transparent
//! newtypes over `Vec` so they can carry their own predicates.

/// Declares a wire-labelled enum.
///
/// Each variant is written `Variant => "label"`, optionally followed by
/// `| "alias"` entries that are accepted when parsing but never emitted.
macro_rules! labelled_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($kind:literal) {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $label:literal $(| $alias:literal)*,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Default,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $label $(, alias = $alias)*)]
                $variant,
            )+
        }

        impl $name {
            /// Returns the wire label of this variant.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }

            /// Returns `true` for the zero-value variant.
            #[must_use]
            pub fn is_default(self) -> bool {
                self == Self::default()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl TryFrom<&str> for $name {
            type Error = $crate::message::error::ParseVariantError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                match value.trim() {
                    $($label $(| $alias)* => Ok(Self::$variant),)+
                    _ => Err($crate::message::error::ParseVariantError::new($kind, value)),
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::message::error::ParseVariantError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Self::try_from(value)
            }
        }
    };
}

/// Declares a transparent, ordered collection newtype over `Vec<$item>`.
macro_rules! element_collection {
    (
        $(#[$meta:meta])*
        pub struct $name:ident($item:ty);
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Default,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(Vec<$item>);

        impl $name {
            /// Creates an empty collection.
            #[must_use]
            pub const fn new() -> Self {
                Self(Vec::new())
            }

            /// Appends an element, preserving insertion order.
            pub fn push(&mut self, item: $item) {
                self.0.push(item);
            }

            /// Returns the number of elements.
            #[must_use]
            pub fn len(&self) -> usize {
                self.0.len()
            }

            /// Returns `true` if the collection holds no elements.
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// Consumes the collection and returns the underlying vector.
            #[must_use]
            pub fn into_inner(self) -> Vec<$item> {
                self.0
            }
        }

        impl ::std::ops::Deref for $name {
            type Target = [$item];

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl ::std::ops::DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }

        impl From<Vec<$item>> for $name {
            fn from(items: Vec<$item>) -> Self {
                Self(items)
            }
        }

        impl<const N: usize> From<[$item; N]> for $name {
            fn from(items: [$item; N]) -> Self {
                Self(Vec::from(items))
            }
        }

        impl FromIterator<$item> for $name {
            fn from_iter<I: IntoIterator<Item = $item>>(iter: I) -> Self {
                Self(iter.into_iter().collect())
            }
        }

        impl IntoIterator for $name {
            type Item = $item;
            type IntoIter = ::std::vec::IntoIter<$item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = &'a $item;
            type IntoIter = ::std::slice::Iter<'a, $item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }
    };
}

pub(super) use {element_collection, labelled_enum};
