//! Storyboard objects, the lines at the top level of `[Events]`.
//!
//! An object line starts with a name or a legacy numeric code, compared case-insensitively:
//!
//! | name | code |
//! | --- | --- |
//! | `Background` | `0` |
//! | `Video` | `1` |
//! | `Break` | `2` |
//! | `Sprite` | `4` |
//! | `Sample` | `5` |
//! | `Animation` | `6` |

use super::{
    EventsError, Result,
    command::CommandList,
    fields::Fields,
    types::{Layer, LoopType, Origin},
};

/// The kind of an [`EventObject`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    /// The background image.
    Background,
    /// The background video.
    Video,
    /// A break period.
    Break,
    /// A static image.
    Sprite,
    /// An image cycling through frames.
    Animation,
    /// A sound effect.
    Sample,
}

impl EventKind {
    /// Every kind, in the default sort order.
    pub const ALL: [Self; 6] = [
        Self::Background,
        Self::Video,
        Self::Break,
        Self::Sprite,
        Self::Animation,
        Self::Sample,
    ];

    /// Returns the name written at the start of the line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Background => "Background",
            Self::Video => "Video",
            Self::Break => "Break",
            Self::Sprite => "Sprite",
            Self::Animation => "Animation",
            Self::Sample => "Sample",
        }
    }

    /// Returns the legacy numeric code.
    #[must_use]
    pub const fn legacy_code(self) -> u8 {
        match self {
            Self::Background => 0,
            Self::Video => 1,
            Self::Break => 2,
            Self::Sprite => 4,
            Self::Sample => 5,
            Self::Animation => 6,
        }
    }
}

impl<'a> TryFrom<&'a str> for EventKind {
    type Error = &'a str;
    /// Accepts the name in any case, or the legacy numeric code.
    fn try_from(value: &'a str) -> std::result::Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|kind| {
                kind.name().eq_ignore_ascii_case(value)
                    || value.parse::<u8>().is_ok_and(|code| code == kind.legacy_code())
            })
            .ok_or(value)
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A background image or video.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Media {
    /// The time the media appears, in milliseconds.
    pub start_time: i32,
    /// The path relative to the beatmap folder, without quotes.
    pub filename: String,
    /// The horizontal offset from the centre, in pixels.
    pub x_offset: i32,
    /// The vertical offset from the centre, in pixels.
    pub y_offset: i32,
}

/// A break period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Break {
    /// The time the break starts, in milliseconds.
    pub start_time: i32,
    /// The time the break ends, in milliseconds.
    pub end_time: i32,
}

/// A static image animated by commands.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sprite {
    /// The layer drawn into.
    pub layer: Layer,
    /// The anchor point of the image.
    pub origin: Origin,
    /// The image path relative to the beatmap folder, without quotes.
    pub filepath: String,
    /// The initial horizontal position.
    pub x: f32,
    /// The initial vertical position.
    pub y: f32,
    /// The commands in source order, or sorted after [`super::Events::sort`].
    pub commands: CommandList,
}

/// An image cycling through numbered frames, animated by commands.
///
/// The frames are loaded from `filepath` with the frame index inserted before the extension.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Animation {
    /// The layer drawn into.
    pub layer: Layer,
    /// The anchor point of the image.
    pub origin: Origin,
    /// The base image path relative to the beatmap folder, without quotes.
    pub filepath: String,
    /// The initial horizontal position.
    pub x: f32,
    /// The initial vertical position.
    pub y: f32,
    /// The number of frames.
    pub frame_count: i32,
    /// The delay between two frames, in milliseconds.
    pub frame_delay: f32,
    /// Whether the frames repeat.
    pub loop_type: LoopType,
    /// The commands in source order, or sorted after [`super::Events::sort`].
    pub commands: CommandList,
}

/// A sound played at a time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample {
    /// The time the sound is played, in milliseconds.
    pub time: i32,
    /// The layer, which decides when the sound is audible.
    pub layer: Layer,
    /// The sound path relative to the beatmap folder, without quotes.
    pub filepath: String,
    /// The volume from 0 to 100.
    pub volume: u8,
}

/// The volume of a sample written without one.
pub const DEFAULT_SAMPLE_VOLUME: u8 = 100;

/// A top level storyboard object.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventObject {
    /// `Background`, code `0`.
    Background(Media),
    /// `Video`, code `1`.
    Video(Media),
    /// `Break`, code `2`.
    Break(Break),
    /// `Sprite`, code `4`.
    Sprite(Sprite),
    /// `Animation`, code `6`.
    Animation(Animation),
    /// `Sample`, code `5`.
    Sample(Sample),
}

impl EventObject {
    /// Returns the kind of the object.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::Background(_) => EventKind::Background,
            Self::Video(_) => EventKind::Video,
            Self::Break(_) => EventKind::Break,
            Self::Sprite(_) => EventKind::Sprite,
            Self::Animation(_) => EventKind::Animation,
            Self::Sample(_) => EventKind::Sample,
        }
    }

    /// Returns the commands of a sprite or an animation.
    #[must_use]
    pub const fn commands(&self) -> Option<&CommandList> {
        match self {
            Self::Sprite(sprite) => Some(&sprite.commands),
            Self::Animation(animation) => Some(&animation.commands),
            _ => None,
        }
    }

    /// Returns the commands of a sprite or an animation, mutably.
    pub const fn commands_mut(&mut self) -> Option<&mut CommandList> {
        match self {
            Self::Sprite(sprite) => Some(&mut sprite.commands),
            Self::Animation(animation) => Some(&mut animation.commands),
            _ => None,
        }
    }

    /// Returns the time written on the object line. Sprites and animations have none.
    #[must_use]
    pub const fn own_start_time(&self) -> Option<i32> {
        match self {
            Self::Background(media) | Self::Video(media) => Some(media.start_time),
            Self::Break(period) => Some(period.start_time),
            Self::Sample(sample) => Some(sample.time),
            Self::Sprite(_) | Self::Animation(_) => None,
        }
    }

    /// Parses an object line.
    pub(crate) fn parse(fields: &mut Fields<'_>) -> Result<Self> {
        let Ok(kind) = EventKind::try_from(fields.code()) else {
            return Err(EventsError::UnrecognizedCode {
                code: fields.code().to_owned(),
                line: fields.line(),
            });
        };
        let object = match kind {
            EventKind::Background => Self::Background(parse_media(fields)?),
            EventKind::Video => Self::Video(parse_media(fields)?),
            EventKind::Break => Self::Break(Break {
                start_time: fields.number("start time")?,
                end_time: fields.number("end time")?,
            }),
            EventKind::Sprite => Self::Sprite(Sprite {
                layer: fields.token("layer name")?,
                origin: fields.token("origin name")?,
                filepath: fields.path("file path")?,
                x: position(fields)?,
                y: position(fields)?,
                commands: vec![],
            }),
            EventKind::Animation => Self::Animation(Animation {
                layer: fields.token("layer name")?,
                origin: fields.token("origin name")?,
                filepath: fields.path("file path")?,
                x: position(fields)?,
                y: position(fields)?,
                frame_count: fields.number("frame count")?,
                frame_delay: fields.required("frame delay", finite)?,
                loop_type: fields
                    .optional_token("LoopForever or LoopOnce")?
                    .unwrap_or_default(),
                commands: vec![],
            }),
            EventKind::Sample => Self::Sample(Sample {
                time: fields.number("time")?,
                layer: fields.token("layer name or code from 0 to 3")?,
                filepath: fields.path("file path")?,
                volume: fields
                    .optional("volume from 0 to 100", |field| {
                        field.parse().ok().filter(|volume| *volume <= 100)
                    })?
                    .unwrap_or(DEFAULT_SAMPLE_VOLUME),
            }),
        };
        Ok(object)
    }
}

fn parse_media(fields: &mut Fields<'_>) -> Result<Media> {
    Ok(Media {
        start_time: fields.number("start time")?,
        filename: fields.path("file name")?,
        x_offset: fields.optional_number("offset")?.unwrap_or(0),
        y_offset: fields.optional_number("offset")?.unwrap_or(0),
    })
}

fn finite(field: &str) -> Option<f32> {
    field.parse().ok().filter(|value: &f32| value.is_finite())
}

fn position(fields: &mut Fields<'_>) -> Result<f32> {
    Ok(fields.optional("position", finite)?.unwrap_or(0.0))
}
