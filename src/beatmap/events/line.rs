//! Classification of a raw `[Events]` line into its nesting depth and fields.

/// The characters of the indentation. Both may appear in one file, even in one line.
const INDENT_CHARS: [char; 2] = [' ', '_'];

/// The minimum number of characters of a meaningful line, after trimming.
const MINIMUM_CHARS: usize = 2;

/// An `[Events]` line split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine<'a> {
    /// The number of leading indentation characters.
    pub depth: usize,
    /// The fields after the indentation, the code first.
    pub fields: Vec<&'a str>,
}

/// Classifies a line, or returns `None` for comments and lines too short to mean anything.
pub fn classify(line: &str) -> Option<ClassifiedLine<'_>> {
    let trimmed = line.trim();
    if trimmed.starts_with("//") || trimmed.chars().count() < MINIMUM_CHARS {
        return None;
    }
    let line = line.trim_end();
    let body = line.trim_start_matches(INDENT_CHARS);
    if body.is_empty() {
        return None;
    }
    Some(ClassifiedLine {
        depth: line.len() - body.len(),
        fields: body.split(',').collect(),
    })
}
