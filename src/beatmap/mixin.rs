//! Mixin types for attaching source positions to values.
//!
//! - [`SourceLineMixin`] wraps a value together with the 1-based line number and the byte range of
//!   the source line it came from.
//! - [`SourceLineMixinExt`] provides extension methods to wrap any value with a position.

use std::ops::Range;

/// A generic wrapper that attaches a source line position to a value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceLineMixin<T> {
    /// Wrapped content value.
    content: T,
    /// Line number in the source, starts with 1.
    line: usize,
    /// Byte range of the line in the source string.
    range: Range<usize>,
}

impl<T> SourceLineMixin<T> {
    /// Instances a new `SourceLineMixin`.
    pub const fn new(content: T, line: usize, range: Range<usize>) -> Self {
        Self {
            content,
            line,
            range,
        }
    }

    /// Returns the wrapped content.
    pub const fn content(&self) -> &T {
        &self.content
    }

    /// Leans the content out of the wrapper.
    pub fn into_content(self) -> T {
        self.content
    }

    /// Returns the line number, starts with 1.
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Returns the byte range of the source line.
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// Maps the content of the wrapper, keeping the position.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> SourceLineMixin<U> {
        SourceLineMixin::new(f(self.content), self.line, self.range)
    }
}

impl<T: std::fmt::Display> std::fmt::Display for SourceLineMixin<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (line {})", self.content, self.line)
    }
}

impl<T: std::error::Error + 'static> std::error::Error for SourceLineMixin<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.content)
    }
}

/// Extension methods for [`SourceLineMixin`].
pub trait SourceLineMixinExt {
    /// Instances a new `SourceLineMixin` at the same position as another wrapper.
    fn into_wrapper<W>(self, wrapper: &SourceLineMixin<W>) -> SourceLineMixin<Self>
    where
        Self: Sized,
    {
        SourceLineMixin::new(self, wrapper.line, wrapper.range())
    }

    /// Instances a new `SourceLineMixin` with a given line number and byte range.
    fn into_wrapper_at(self, line: usize, range: Range<usize>) -> SourceLineMixin<Self>
    where
        Self: Sized,
    {
        SourceLineMixin::new(self, line, range)
    }
}

impl<T> SourceLineMixinExt for T {}
