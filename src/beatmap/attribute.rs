//! Key-value tables of the simple sections such as `[General]` and `[Metadata]`.
//!
//! Each line is split on the first separator (`:` for most sections, `=` for `[Variables]`), so
//! that values may contain the separator themselves, e.g. `Title:Operation: Zenithfall`.

use std::str::FromStr;

use thiserror::Error;

use super::{
    mixin::{SourceLineMixin, SourceLineMixinExt},
    section::SectionLine,
};

/// A non-fatal problem found in an attribute section.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributeWarning {
    /// The line has no separator, so it was skipped.
    #[error("expected `key{separator}value` in [{section}], the line was skipped")]
    Malformed {
        /// The section name.
        section: String,
        /// The expected separator.
        separator: char,
    },
}

/// An attribute warning with its position.
pub type AttributeWarningWithPos = SourceLineMixin<AttributeWarning>;

/// A fatal problem found in an attribute section.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributeError {
    /// The value could not be converted into the expected type.
    #[error("invalid value `{value}` for `{key}` in [{section}], expected {expected}")]
    InvalidValue {
        /// The section name.
        section: String,
        /// The attribute key.
        key: String,
        /// The raw value.
        value: String,
        /// What the value should look like.
        expected: String,
    },
}

/// An attribute error with its position.
pub type AttributeErrorWithPos = SourceLineMixin<AttributeError>;

/// One `key: value` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Attribute<'a> {
    /// The trimmed key.
    pub key: &'a str,
    /// The trimmed value, may be empty.
    pub value: &'a str,
}

/// The entries of a key-value section in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeTable<'a> {
    section: &'a str,
    entries: Vec<SourceLineMixin<Attribute<'a>>>,
}

impl<'a> AttributeTable<'a> {
    /// Builds the table from the lines of `section`, splitting each line on the first `separator`.
    #[must_use]
    pub fn parse(
        section: &'a str,
        lines: &[SectionLine<'a>],
        separator: char,
    ) -> (Self, Vec<AttributeWarningWithPos>) {
        let mut entries = Vec::with_capacity(lines.len());
        let mut warnings = vec![];
        for line in lines {
            let Some((key, value)) = line.content().split_once(separator) else {
                warnings.push(
                    AttributeWarning::Malformed {
                        section: section.to_owned(),
                        separator,
                    }
                    .into_wrapper(line),
                );
                continue;
            };
            entries.push(
                Attribute {
                    key: key.trim(),
                    value: value.trim(),
                }
                .into_wrapper(line),
            );
        }
        (Self { section, entries }, warnings)
    }

    /// Returns the section name of the table.
    #[must_use]
    pub const fn section(&self) -> &'a str {
        self.section
    }

    fn entry(&self, key: &str) -> Option<&SourceLineMixin<Attribute<'a>>> {
        self.entries
            .iter()
            .rev()
            .find(|entry| entry.content().key == key)
    }

    /// Returns the value of the key. If the key appears more than once, the last one wins.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.entry(key).map(|entry| entry.content().value)
    }

    /// Returns the non-empty value of the key as an owned string.
    #[must_use]
    pub fn get_string(&self, key: &str) -> Option<String> {
        self.get(key)
            .filter(|value| !value.is_empty())
            .map(ToOwned::to_owned)
    }

    /// Parses the value of the key. Absent or empty values are `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`AttributeError::InvalidValue`] when the value cannot be parsed as `T`.
    pub fn parse_value<T: FromStr>(
        &self,
        key: &str,
        expected: &'static str,
    ) -> Result<Option<T>, AttributeErrorWithPos> {
        self.convert_value(key, expected, |value| value.parse().ok())
    }

    /// Converts the value of the key with `convert`. Absent or empty values are `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`AttributeError::InvalidValue`] when `convert` returns `None`.
    pub fn convert_value<T>(
        &self,
        key: &str,
        expected: &'static str,
        convert: impl FnOnce(&str) -> Option<T>,
    ) -> Result<Option<T>, AttributeErrorWithPos> {
        let Some(entry) = self.entry(key) else {
            return Ok(None);
        };
        let value = entry.content().value;
        if value.is_empty() {
            return Ok(None);
        }
        convert(value).map(Some).ok_or_else(|| {
            AttributeError::InvalidValue {
                section: self.section.to_owned(),
                key: key.to_owned(),
                value: value.to_owned(),
                expected: expected.to_owned(),
            }
            .into_wrapper(entry)
        })
    }

    /// Iterates the entries in source order.
    pub fn iter(&self) -> impl Iterator<Item = &SourceLineMixin<Attribute<'a>>> {
        self.entries.iter()
    }
}
