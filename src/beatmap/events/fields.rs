use std::str::FromStr;

use super::{EventsError, Result};

/// A cursor over the comma separated fields of one storyboard line.
///
/// Field indices in errors count the code as field 0.
pub struct Fields<'a> {
    /// The line number, starts with 1.
    line: usize,
    /// All fields of the line, the code included.
    fields: Vec<&'a str>,
    /// The index of the next field.
    index: usize,
}

impl<'a> Fields<'a> {
    pub fn new(line: usize, fields: Vec<&'a str>) -> Self {
        Self {
            line,
            fields,
            index: 1,
        }
    }

    /// Returns the code in field 0.
    pub fn code(&self) -> &'a str {
        self.fields.first().copied().unwrap_or_default()
    }

    pub const fn line(&self) -> usize {
        self.line
    }

    /// Returns the index of the next field.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Drops empty fields at the end of the line, such as the ones left by a trailing comma.
    pub fn trim_trailing_empty(&mut self) {
        while self.fields.len() > 1 && self.fields.last().is_some_and(|field| field.is_empty()) {
            self.fields.pop();
        }
    }

    /// Returns whether there are fields left.
    pub fn has_remaining(&self) -> bool {
        self.index < self.fields.len()
    }

    /// Moves through and returns the next field. Fields past the end are empty.
    pub fn next_field(&mut self) -> &'a str {
        let field = self.fields.get(self.index).copied().unwrap_or_default();
        self.index += 1;
        field
    }

    /// Takes the next `count` fields, padding the missing ones with empty strings.
    pub fn take(&mut self, count: usize) -> Vec<&'a str> {
        (0..count).map(|_| self.next_field()).collect()
    }

    /// Makes an error about the field at `index`.
    pub fn make_err_field(&self, index: usize, expected: &str) -> EventsError {
        EventsError::FieldFormat {
            code: self.code().to_owned(),
            line: self.line,
            field: index,
            value: self.fields.get(index).copied().unwrap_or_default().to_owned(),
            expected: expected.to_owned(),
        }
    }

    /// Converts the next field, which must be present and non-empty.
    pub fn required<T>(
        &mut self,
        expected: &str,
        convert: impl FnOnce(&'a str) -> Option<T>,
    ) -> Result<T> {
        let index = self.index;
        self.optional(expected, convert)?
            .ok_or_else(|| self.make_err_field(index, expected))
    }

    /// Converts the next field if it is present and non-empty.
    pub fn optional<T>(
        &mut self,
        expected: &str,
        convert: impl FnOnce(&'a str) -> Option<T>,
    ) -> Result<Option<T>> {
        let index = self.index;
        let field = self.next_field();
        if field.is_empty() {
            return Ok(None);
        }
        convert(field)
            .map(Some)
            .ok_or_else(|| self.make_err_field(index, expected))
    }

    /// Parses the next field as a number.
    pub fn number<T: FromStr>(&mut self, expected: &str) -> Result<T> {
        self.required(expected, |field| field.parse().ok())
    }

    /// Parses the next field as a number if it is present and non-empty.
    pub fn optional_number<T: FromStr>(&mut self, expected: &str) -> Result<Option<T>> {
        self.optional(expected, |field| field.parse().ok())
    }

    /// Converts the next field with a `TryFrom<&str>` implementation.
    pub fn token<T: TryFrom<&'a str>>(&mut self, expected: &str) -> Result<T> {
        self.required(expected, |field| T::try_from(field).ok())
    }

    /// Converts the next field with a `TryFrom<&str>` implementation if it is present and non-empty.
    pub fn optional_token<T: TryFrom<&'a str>>(
        &mut self,
        expected: &str,
    ) -> Result<Option<T>> {
        self.optional(expected, |field| T::try_from(field).ok())
    }

    /// Returns the next field with one pair of surrounding double quotes removed.
    pub fn path(&mut self, expected: &str) -> Result<String> {
        self.required(expected, |field| Some(unquote(field).to_owned()))
    }
}

/// Strips exactly one pair of surrounding double quotes, if any.
pub fn unquote(field: &str) -> &str {
    field
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(field)
}
