//! The storyboard in the `[Events]` section.
//!
//! Lines are indented with spaces or underscores. Objects sit at depth 0, their commands one
//! level deeper, and commands inside loops and triggers deeper still:
//!
//! ```text
//! [Events]
//! 0,0,"bg.jpg",0,0
//! Sprite,Foreground,Centre,"sb/star.png",320,240
//!  F,0,0,1000,0,1
//!  L,1000,4
//!   R,0,0,500,0,6.2832
//! Sample,1500,0,"sb/clap.wav",80
//! ```
//!
//! [`Events::parse`] builds the tree in source order, [`Events::sort`] applies the order of the
//! game, and the `Display` implementation writes the section back.

pub mod command;
mod fields;
mod line;
pub mod object;
mod parser;
pub mod sort;
pub mod types;
pub mod unparse;
pub mod values;

use thiserror::Error;

use self::{
    object::EventObject,
    parser::DepthStack,
    sort::{CanonicalOrder, SortPolicy},
};
use super::{mixin::SourceLineMixin, section::SectionLine, variable::VariableTable};

/// A fatal problem in an `[Events]` line. The whole parse fails with it.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventsError {
    /// The first field is neither an object nor a command code.
    #[error("unrecognized code `{code}` at line {line}")]
    UnrecognizedCode {
        /// The first field as written.
        code: String,
        /// The line number, starts with 1.
        line: usize,
    },
    /// A field is missing or cannot be read.
    #[error("invalid field {field} `{value}` of `{code}` at line {line}, expected {expected}")]
    FieldFormat {
        /// The code of the line.
        code: String,
        /// The line number, starts with 1.
        line: usize,
        /// The index of the field, the code being field 0.
        field: usize,
        /// The field as written, empty if missing.
        value: String,
        /// What the field should look like.
        expected: String,
    },
    /// A command is indented but no sprite or animation is open to receive it.
    #[error("command at line {line} is indented by {depth} but belongs to no sprite or animation")]
    MalformedIndentation {
        /// The line number, starts with 1.
        line: usize,
        /// The indentation of the line.
        depth: usize,
    },
}

/// An events error with its position.
pub type EventsErrorWithPos = SourceLineMixin<EventsError>;

/// A non-fatal problem in an `[Events]` line.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventsWarning {
    /// A `$NAME` reference has no entry in `[Variables]`, so it was kept as written.
    #[error("undefined variable `${name}`")]
    UndefinedVariable {
        /// The name without `$`.
        name: String,
    },
}

/// An events warning with its position.
pub type EventsWarningWithPos = SourceLineMixin<EventsWarning>;

pub(crate) type Result<T> = std::result::Result<T, EventsError>;

/// The storyboard objects of a beatmap.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Events {
    /// The objects, each owning its commands.
    pub objects: Vec<EventObject>,
}

/// The result of [`Events::parse`].
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct EventsOutput {
    /// The parsed objects in source order.
    pub events: Events,
    /// Non-fatal problems found on the way.
    pub warnings: Vec<EventsWarningWithPos>,
}

impl Events {
    /// Parses the lines of an `[Events]` section, substituting `variables` first.
    ///
    /// Objects and commands stay in source order. Call [`Self::sort`] for the order of the game.
    ///
    /// # Errors
    ///
    /// Returns the first [`EventsError`], there is no partial result.
    pub fn parse(
        lines: &[SectionLine<'_>],
        variables: &VariableTable,
    ) -> std::result::Result<EventsOutput, EventsErrorWithPos> {
        let (objects, warnings) = DepthStack::new(variables).parse_lines(lines)?;
        Ok(EventsOutput {
            events: Self { objects },
            warnings,
        })
    }

    /// Sorts with [`CanonicalOrder::default`].
    pub fn sort(&mut self) {
        self.sort_with(&CanonicalOrder::default());
    }

    /// Sorts with the given policy.
    pub fn sort_with(&mut self, policy: &impl SortPolicy) {
        policy.sort(&mut self.objects);
    }

    /// Returns whether there are no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iterates the objects.
    pub fn iter(&self) -> impl Iterator<Item = &EventObject> {
        self.objects.iter()
    }
}

impl<'a> IntoIterator for &'a Events {
    type Item = &'a EventObject;
    type IntoIter = std::slice::Iter<'a, EventObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.iter()
    }
}

impl From<Vec<EventObject>> for Events {
    fn from(objects: Vec<EventObject>) -> Self {
        Self { objects }
    }
}
