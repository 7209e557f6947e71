//! The `[Variables]` section and `$NAME` substitution in storyboard lines.
//!
//! ```text
//! [Variables]
//! $bg=sb/bg.png
//!
//! [Events]
//! Sprite,Background,Centre,$bg,320,240
//! ```

use std::{borrow::Cow, collections::HashMap};

use super::{attribute::AttributeWarningWithPos, section::SectionLine};
use crate::beatmap::attribute::AttributeTable;

/// The prefix marking a variable reference.
pub const VARIABLE_PREFIX: char = '$';

/// Names and their replacements. Names are stored without the `$` prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariableTable {
    variables: HashMap<String, String>,
}

impl VariableTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the table from `name=value` lines of the `[Variables]` section.
    #[must_use]
    pub fn from_lines(lines: &[SectionLine<'_>]) -> (Self, Vec<AttributeWarningWithPos>) {
        let (table, warnings) = AttributeTable::parse(super::section::VARIABLES, lines, '=');
        let variables: Self = table
            .iter()
            .map(|entry| (entry.content().key, entry.content().value))
            .collect();
        (variables, warnings)
    }

    /// Inserts a variable. A leading `$` on the name is stripped.
    pub fn insert(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
        let name = name.as_ref();
        let name = name.strip_prefix(VARIABLE_PREFIX).unwrap_or(name);
        self.variables.insert(name.to_owned(), value.into());
    }

    /// Returns the replacement of the variable, given without `$`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns whether there is no variable.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Replaces every `$NAME` reference in the line.
    ///
    /// A reference runs from `$` to the next `,` or the end of the line. Replacement text is not
    /// scanned again. References to unknown names are kept verbatim and returned as the second
    /// element, without `$`.
    #[must_use]
    pub fn substitute<'a>(&self, line: &'a str) -> (Cow<'a, str>, Vec<&'a str>) {
        if !line.contains(VARIABLE_PREFIX) {
            return (Cow::Borrowed(line), vec![]);
        }
        let mut output = String::with_capacity(line.len());
        let mut undefined = vec![];
        let mut rest = line;
        while let Some(dollar) = rest.find(VARIABLE_PREFIX) {
            output.push_str(&rest[..dollar]);
            let reference = &rest[dollar..];
            let end = reference.find(',').unwrap_or(reference.len());
            let name = &reference[1..end];
            match self.get(name) {
                Some(value) => output.push_str(value),
                None => {
                    undefined.push(name);
                    output.push_str(&reference[..end]);
                }
            }
            rest = &reference[end..];
        }
        output.push_str(rest);
        (Cow::Owned(output), undefined)
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for VariableTable {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (name, value) in iter {
            table.insert(name, value);
        }
        table
    }
}
