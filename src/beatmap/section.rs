//! Splitter of the source text into labeled sections.
//!
//! Raw [String] == [`Sections::split`] ==> [`Sections`] == section parsers ==> [`super::Beatmap`]
//!
//! Every kept line remembers its line number and byte range, so later stages can point back into
//! the source. Lines of the `[Events]` section keep their leading indentation because it encodes
//! the nesting of storyboard commands.

use log::debug;

use super::mixin::{SourceLineMixin, SourceLineMixinExt};

/// The section name of the storyboard events.
pub const EVENTS: &str = "Events";
/// The section name of the variables used by the storyboard.
pub const VARIABLES: &str = "Variables";
/// The section name of the general settings.
pub const GENERAL: &str = "General";
/// The section name of the editor settings.
pub const EDITOR: &str = "Editor";
/// The section name of the metadata.
pub const METADATA: &str = "Metadata";
/// The section name of the difficulty settings.
pub const DIFFICULTY: &str = "Difficulty";
/// The section name of the combo colours.
pub const COLOURS: &str = "Colours";
/// The section name of the timing points.
pub const TIMING_POINTS: &str = "TimingPoints";
/// The section name of the hit objects.
pub const HIT_OBJECTS: &str = "HitObjects";

/// The prefix of the first line, followed by the format version.
const FORMAT_HEADER: &str = "osu file format v";

/// Lines shorter than this are dropped, except in `[Events]`.
const MINIMUM_LINE_CHARS: usize = 3;
/// Lines of `[Events]` shorter than this (after trimming) are dropped.
const MINIMUM_EVENTS_LINE_CHARS: usize = 2;

/// A line of a section with its position.
pub type SectionLine<'a> = SourceLineMixin<&'a str>;

/// The source text grouped by section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections<'a> {
    /// The version number of `osu file format vN`, if the source starts with it.
    pub format_version: Option<u32>,
    sections: Vec<(&'a str, Vec<SectionLine<'a>>)>,
}

impl<'a> Sections<'a> {
    /// Splits the source into sections, dropping blank lines and `//` comments.
    ///
    /// Lines are trimmed on both sides, except in `[Events]` where only the trailing whitespace is
    /// removed. Lines before the first section header, other than the format version line, are
    /// ignored. Repeated headers continue the same section.
    #[must_use]
    pub fn split(source: &'a str) -> Self {
        let mut output = Self::default();
        let mut current: Option<usize> = None;
        let mut line_start = 0;
        for (index, raw) in source.split_inclusive('\n').enumerate() {
            let raw_start = line_start;
            line_start += raw.len();

            let without_bom = if index == 0 {
                raw.trim_start_matches('\u{feff}')
            } else {
                raw
            };
            let text_start = raw_start + (raw.len() - without_bom.len());
            let text = without_bom.trim_end_matches(['\n', '\r']);
            let trimmed = text.trim();
            if trimmed.is_empty() {
                continue;
            }

            if current.is_none()
                && output.format_version.is_none()
                && let Some(version) = trimmed.strip_prefix(FORMAT_HEADER)
            {
                output.format_version = version.trim().parse().ok();
                continue;
            }

            if let Some(name) = trimmed
                .strip_prefix('[')
                .and_then(|rest| rest.strip_suffix(']'))
            {
                debug!("entering section [{name}] at line {}", index + 1);
                current = Some(output.section_index_or_insert(name));
                continue;
            }

            let Some(current) = current else {
                continue;
            };
            if trimmed.starts_with("//") {
                continue;
            }
            let Some((section_name, section_lines)) = output.sections.get_mut(current) else {
                continue;
            };
            let is_events = *section_name == EVENTS;
            let (kept, minimum) = if is_events {
                (text.trim_end(), MINIMUM_EVENTS_LINE_CHARS)
            } else {
                (trimmed, MINIMUM_LINE_CHARS)
            };
            if trimmed.chars().count() < minimum {
                continue;
            }
            let kept_start = if is_events {
                text_start
            } else {
                text_start + (text.len() - text.trim_start().len())
            };
            section_lines.push(kept.into_wrapper_at(index + 1, kept_start..kept_start + kept.len()));
        }
        output
    }

    fn section_index_or_insert(&mut self, name: &'a str) -> usize {
        if let Some(found) = self.sections.iter().position(|(n, _)| *n == name) {
            return found;
        }
        self.sections.push((name, vec![]));
        self.sections.len() - 1
    }

    /// Returns the lines of the section, or an empty slice if the section is absent.
    #[must_use]
    pub fn get(&self, name: &str) -> &[SectionLine<'a>] {
        self.sections
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, lines)| lines.as_slice())
            .unwrap_or_default()
    }

    /// Returns whether the section header appeared in the source.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.sections.iter().any(|(n, _)| *n == name)
    }

    /// Iterates the section names in order of first appearance.
    pub fn names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.sections.iter().map(|(name, _)| *name)
    }
}
