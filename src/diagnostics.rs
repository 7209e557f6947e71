//! Fancy diagnostics support using `ariadne`.
//!
//! This module converts the positioned errors and warnings of the parser (such as
//! `EventsErrorWithPos`, `AttributeWarningWithPos`, and the aggregated `BeatmapWarning` and
//! `BeatmapError`) into `ariadne::Report`s.
//!
//! Since `SourceLineMixin` keeps the byte range of the offending line, ariadne handles the
//! row/column calculations for display.
//!
//! # Usage Example
//!
//! ```rust
//! # #[cfg(feature = "diagnostics")]
//! # {
//! use osu_rs::{beatmap::parse_beatmap, diagnostics::emit_beatmap_warnings};
//!
//! let source = "[Metadata]\nno separator\n[Events]\nSprite,Pass,Centre,$missing,0,0\n";
//! let output = parse_beatmap(source).unwrap();
//!
//! // Output all warnings
//! emit_beatmap_warnings("test.osb", source, &output.warnings);
//! # }
//! ```

#[cfg(feature = "diagnostics")]
use ariadne::{Color, Label, Report, ReportKind, Source};

#[cfg(feature = "diagnostics")]
use crate::beatmap::{
    BeatmapError, BeatmapWarning, attribute::AttributeErrorWithPos,
    attribute::AttributeWarningWithPos, events::EventsErrorWithPos, events::EventsWarningWithPos,
};

/// Simple source container that holds the filename and source text.
///
/// # Usage Example
///
/// ```rust
/// use osu_rs::diagnostics::SimpleSource;
///
/// let source_text = "[Events]\n0,0,\"bg.jpg\",0,0\n";
/// let source = SimpleSource::new("test.osb", source_text);
///
/// assert_eq!(source.text(), source_text);
/// assert_eq!(source.name(), "test.osb");
/// ```
pub struct SimpleSource<'a> {
    /// Name of the source file.
    name: &'a str,
    /// Source text content.
    text: &'a str,
}

impl<'a> SimpleSource<'a> {
    /// Create a new source container instance.
    #[must_use]
    pub const fn new(name: &'a str, text: &'a str) -> Self {
        Self { name, text }
    }

    /// Get source text content.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// Get source file name.
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }
}

/// Trait for converting positioned errors to `ariadne::Report`.
///
/// # Usage Example
///
/// ```rust
/// use osu_rs::{beatmap::parse_beatmap, diagnostics::{SimpleSource, ToAriadne}};
/// use ariadne::Source;
///
/// let source_text = "[Events]\nSprite,Pass,Centre,\"a.png\",0,0\n F,0,zero,,1\n";
/// let err = parse_beatmap(source_text).unwrap_err();
///
/// let source = SimpleSource::new("test.osb", source_text);
/// let report = err.to_report(&source);
/// let _ = report.eprint(("test.osb".to_string(), Source::from(source_text)));
/// ```
#[cfg(feature = "diagnostics")]
pub trait ToAriadne {
    /// Convert error to ariadne Report.
    ///
    /// # Parameters
    /// * `src` - Source file container (used for filename, ariadne handles row/column calculation)
    fn to_report<'a>(&self, src: &SimpleSource<'a>)
    -> Report<'a, (String, std::ops::Range<usize>)>;
}

/// Helper to build a styled ariadne `Report` consistently.
#[cfg(feature = "diagnostics")]
#[must_use]
pub fn build_report<'a>(
    src: &SimpleSource<'a>,
    kind: ReportKind<'a>,
    range: std::ops::Range<usize>,
    title: &str,
    label_message: impl ToString,
    color: Color,
) -> Report<'a, (String, std::ops::Range<usize>)> {
    let filename = src.name().to_string();
    Report::build(kind, (filename.clone(), range.clone()))
        .with_message(title)
        .with_label(
            Label::new((filename, range))
                .with_message(label_message.to_string())
                .with_color(color),
        )
        .finish()
}

#[cfg(feature = "diagnostics")]
impl ToAriadne for AttributeWarningWithPos {
    fn to_report<'a>(
        &self,
        src: &SimpleSource<'a>,
    ) -> Report<'a, (String, std::ops::Range<usize>)> {
        build_report(
            src,
            ReportKind::Warning,
            self.range(),
            "attribute",
            self.content(),
            Color::Yellow,
        )
    }
}

#[cfg(feature = "diagnostics")]
impl ToAriadne for AttributeErrorWithPos {
    fn to_report<'a>(
        &self,
        src: &SimpleSource<'a>,
    ) -> Report<'a, (String, std::ops::Range<usize>)> {
        build_report(
            src,
            ReportKind::Error,
            self.range(),
            "attribute",
            self.content(),
            Color::Red,
        )
    }
}

#[cfg(feature = "diagnostics")]
impl ToAriadne for EventsWarningWithPos {
    fn to_report<'a>(
        &self,
        src: &SimpleSource<'a>,
    ) -> Report<'a, (String, std::ops::Range<usize>)> {
        build_report(
            src,
            ReportKind::Warning,
            self.range(),
            "events",
            self.content(),
            Color::Cyan,
        )
    }
}

#[cfg(feature = "diagnostics")]
impl ToAriadne for EventsErrorWithPos {
    fn to_report<'a>(
        &self,
        src: &SimpleSource<'a>,
    ) -> Report<'a, (String, std::ops::Range<usize>)> {
        build_report(
            src,
            ReportKind::Error,
            self.range(),
            "events",
            self.content(),
            Color::Red,
        )
    }
}

#[cfg(feature = "diagnostics")]
impl ToAriadne for BeatmapWarning {
    fn to_report<'a>(
        &self,
        src: &SimpleSource<'a>,
    ) -> Report<'a, (String, std::ops::Range<usize>)> {
        match self {
            Self::MissingFormatVersion { .. } => {
                build_report(src, ReportKind::Warning, 0..0, "header", self, Color::Yellow)
            }
            Self::Attribute(warning) => warning.to_report(src),
            Self::Events(warning) => warning.to_report(src),
        }
    }
}

#[cfg(feature = "diagnostics")]
impl ToAriadne for BeatmapError {
    fn to_report<'a>(
        &self,
        src: &SimpleSource<'a>,
    ) -> Report<'a, (String, std::ops::Range<usize>)> {
        match self {
            Self::Attribute(err) => err.to_report(src),
            Self::Events(err) => err.to_report(src),
        }
    }
}

/// Convenience method: batch render `BeatmapWarning` list to stderr.
///
/// # Parameters
/// * `name` - Name of the source file, used for display in diagnostic information
/// * `source` - Complete source text
/// * `warnings` - List of warnings to display
#[cfg(feature = "diagnostics")]
pub fn emit_beatmap_warnings<'a>(
    name: &'a str,
    source: &'a str,
    warnings: impl IntoIterator<Item = &'a BeatmapWarning>,
) {
    let simple = SimpleSource::new(name, source);
    let ariadne_source = Source::from(source);
    for w in warnings {
        let report = w.to_report(&simple);
        let _ = report.eprint((name.to_string(), ariadne_source.clone()));
    }
}

/// Collect `ariadne::Report` instances for a list of `BeatmapWarning` without printing.
///
/// This is useful in tests to verify diagnostics can be generated while keeping test output clean.
#[cfg(feature = "diagnostics")]
#[must_use]
pub fn collect_beatmap_reports<'a>(
    name: &'a str,
    source: &'a str,
    warnings: impl IntoIterator<Item = &'a BeatmapWarning>,
) -> Vec<Report<'a, (String, std::ops::Range<usize>)>> {
    let simple = SimpleSource::new(name, source);
    warnings.into_iter().map(|w| w.to_report(&simple)).collect()
}
