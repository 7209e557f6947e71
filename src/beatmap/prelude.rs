//! Prelude module for the beatmap parser.
//!
//! This module re-exports all public types of the beatmap module for convenient access.
//! You can use `use osu_rs::beatmap::prelude::*;` to import them at once.

// Re-export diagnostics from crate level
#[cfg(feature = "diagnostics")]
pub use crate::diagnostics::{
    SimpleSource, ToAriadne, build_report, collect_beatmap_reports, emit_beatmap_warnings,
};

pub use super::{
    Beatmap, BeatmapError, BeatmapOutput, BeatmapWarning, DEFAULT_FORMAT_VERSION,
    attribute::{
        Attribute, AttributeError, AttributeErrorWithPos, AttributeTable, AttributeWarning,
        AttributeWarningWithPos,
    },
    events::{
        Events, EventsError, EventsErrorWithPos, EventsOutput, EventsWarning,
        EventsWarningWithPos,
        command::{
            Command, CommandList, LoopCommand, ParameterCommand, Transition, TriggerCommand,
        },
        object::{
            Animation, Break, DEFAULT_SAMPLE_VOLUME, EventKind, EventObject, Media, Sample, Sprite,
        },
        sort::{CanonicalOrder, KeepSourceOrder, SortPolicy, SpriteStart},
        types::{Easing, Layer, LoopType, Origin, Parameter},
        unparse::{EVENTS_HEADER, EVENTS_SENTINEL},
        values::{CommandValue, Rgb, Vector2},
    },
    mixin::{SourceLineMixin, SourceLineMixinExt},
    model::{
        Colour, Countdown, Difficulty, Editor, GameMode, General, Metadata, OverlayPosition,
        SampleSet, colours_from_table,
    },
    parse_beatmap, parse_beatmap_with_order,
    section::{SectionLine, Sections},
    variable::{VARIABLE_PREFIX, VariableTable},
};
