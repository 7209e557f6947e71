//! The parser of beatmap (`.osu`) and storyboard (`.osb`) files.
//!
//! Parsing runs in three steps:
//!
//! 1. [`section::Sections::split`] groups the lines under their `[Section]` headers.
//! 2. The key-value sections are read into [`attribute::AttributeTable`]s and then into the typed
//!    structs of [`model`]. `[Variables]` becomes a [`variable::VariableTable`].
//! 3. [`events::Events::parse`] builds the storyboard tree from `[Events]`, which is then ordered
//!    by a [`events::sort::SortPolicy`].
//!
//! In detail, our policies are:
//!
//! - Take UTF-8 text. Decoding other encodings is the job of the caller.
//! - Fail on the first token that cannot be read. There is no partial result.
//! - Keep `[TimingPoints]` and `[HitObjects]` as raw lines.
//! - Write the storyboard back in a canonical form, see [`events::unparse`].

pub mod attribute;
pub mod events;
pub mod mixin;
pub mod model;
pub mod prelude;
pub mod section;
pub mod variable;

use log::debug;
use thiserror::Error;

use self::{
    attribute::{AttributeErrorWithPos, AttributeTable, AttributeWarningWithPos},
    events::{Events, EventsErrorWithPos, EventsOutput, EventsWarningWithPos, sort::SortPolicy},
    model::{Colour, Difficulty, Editor, General, Metadata, colours_from_table},
    section::Sections,
    variable::VariableTable,
};

/// The format version assumed when the source does not declare one.
pub const DEFAULT_FORMAT_VERSION: u32 = 14;

/// A non-fatal problem found when parsing a beatmap.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BeatmapWarning {
    /// The source does not start with `osu file format vN`.
    #[error("Warn: missing `osu file format v` header, assumed v{assumed}")]
    MissingFormatVersion {
        /// The version used instead.
        assumed: u32,
    },
    /// A warning comes from a key-value section.
    #[error("Warn: attribute: {0}")]
    Attribute(#[from] AttributeWarningWithPos),
    /// A warning comes from the storyboard.
    #[error("Warn: events: {0}")]
    Events(#[from] EventsWarningWithPos),
}

/// A fatal problem found when parsing a beatmap.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BeatmapError {
    /// A value of a key-value section cannot be read.
    #[error("Error: attribute: {0}")]
    Attribute(#[from] AttributeErrorWithPos),
    /// A storyboard line cannot be read.
    #[error("Error: events: {0}")]
    Events(#[from] EventsErrorWithPos),
}

/// A parsed beatmap.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Beatmap {
    /// The version of `osu file format vN`.
    pub format_version: u32,
    /// `[General]`.
    pub general: General,
    /// `[Metadata]`.
    pub metadata: Metadata,
    /// `[Editor]`.
    pub editor: Editor,
    /// `[Difficulty]`.
    pub difficulty: Difficulty,
    /// `[Colours]`, in source order.
    pub colours: Vec<Colour>,
    /// `[Variables]`, already substituted into `events`.
    pub variables: VariableTable,
    /// `[Events]`.
    pub events: Events,
    /// The lines of `[TimingPoints]`, as written.
    pub timing_points: Vec<String>,
    /// The lines of `[HitObjects]`, as written.
    pub hit_objects: Vec<String>,
}

impl Default for Beatmap {
    fn default() -> Self {
        Self {
            format_version: DEFAULT_FORMAT_VERSION,
            general: General::default(),
            metadata: Metadata::default(),
            editor: Editor::default(),
            difficulty: Difficulty::default(),
            colours: vec![],
            variables: VariableTable::default(),
            events: Events::default(),
            timing_points: vec![],
            hit_objects: vec![],
        }
    }
}

/// Output of parsing a beatmap.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BeatmapOutput {
    /// The parsed beatmap.
    pub beatmap: Beatmap,
    /// Warnings that occurred during parsing.
    pub warnings: Vec<BeatmapWarning>,
}

/// Parse a beatmap from source text, ordering the storyboard like the game does.
///
/// # Example
///
/// ```
/// use osu_rs::beatmap::{BeatmapOutput, parse_beatmap};
///
/// let source = "osu file format v14\n[Metadata]\nTitle:Test Song\n[Events]\n0,0,\"bg.jpg\",0,0\n";
/// let BeatmapOutput { beatmap, warnings } = parse_beatmap(source).unwrap();
/// println!("Title: {}", beatmap.metadata.title.as_deref().unwrap_or("Unknown"));
/// println!("Objects: {}", beatmap.events.objects.len());
/// println!("Warnings: {:?}", warnings);
/// ```
///
/// # Errors
///
/// Returns the first value or storyboard line that cannot be read.
pub fn parse_beatmap(source: &str) -> Result<BeatmapOutput, BeatmapError> {
    parse_beatmap_with_order(source, events::sort::CanonicalOrder::default())
}

/// Parse a beatmap from source text, ordering the storyboard with `order`.
///
/// A step of [`parse_beatmap`]
///
/// # Errors
///
/// Returns the first value or storyboard line that cannot be read.
pub fn parse_beatmap_with_order(
    source: &str,
    order: impl SortPolicy,
) -> Result<BeatmapOutput, BeatmapError> {
    let sections = Sections::split(source);
    let mut warnings = vec![];

    let format_version = sections.format_version.unwrap_or_else(|| {
        warnings.push(BeatmapWarning::MissingFormatVersion {
            assumed: DEFAULT_FORMAT_VERSION,
        });
        DEFAULT_FORMAT_VERSION
    });

    let general = General::from_table(&attribute_table(&sections, section::GENERAL, &mut warnings))?;
    let metadata =
        Metadata::from_table(&attribute_table(&sections, section::METADATA, &mut warnings))?;
    let editor = Editor::from_table(&attribute_table(&sections, section::EDITOR, &mut warnings))?;
    let difficulty =
        Difficulty::from_table(&attribute_table(&sections, section::DIFFICULTY, &mut warnings))?;
    let colours =
        colours_from_table(&attribute_table(&sections, section::COLOURS, &mut warnings))?;

    let (variables, variable_warnings) = VariableTable::from_lines(sections.get(section::VARIABLES));
    warnings.extend(variable_warnings.into_iter().map(BeatmapWarning::Attribute));

    let EventsOutput {
        mut events,
        warnings: events_warnings,
    } = Events::parse(sections.get(section::EVENTS), &variables)?;
    warnings.extend(events_warnings.into_iter().map(BeatmapWarning::Events));
    events.sort_with(&order);
    debug!(
        "parsed beatmap v{format_version}: {} storyboard objects, {} warnings",
        events.objects.len(),
        warnings.len()
    );

    let raw_lines = |name: &str| -> Vec<String> {
        sections
            .get(name)
            .iter()
            .map(|line| (*line.content()).to_owned())
            .collect()
    };
    let beatmap = Beatmap {
        format_version,
        general,
        metadata,
        editor,
        difficulty,
        colours,
        variables,
        events,
        timing_points: raw_lines(section::TIMING_POINTS),
        hit_objects: raw_lines(section::HIT_OBJECTS),
    };
    Ok(BeatmapOutput { beatmap, warnings })
}

fn attribute_table<'a>(
    sections: &Sections<'a>,
    name: &'a str,
    warnings: &mut Vec<BeatmapWarning>,
) -> AttributeTable<'a> {
    let (table, table_warnings) = AttributeTable::parse(name, sections.get(name), ':');
    warnings.extend(table_warnings.into_iter().map(BeatmapWarning::Attribute));
    table
}
