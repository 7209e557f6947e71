//! Typed views of the key-value sections.
//!
//! Every field falls back to the default of the game when the key is absent or empty. A value
//! that is present but cannot be read is an [`AttributeError`](super::attribute::AttributeError).

use super::{
    attribute::{Attribute, AttributeError, AttributeErrorWithPos, AttributeTable},
    events::values::Rgb,
    mixin::SourceLineMixinExt,
};

type Result<T> = std::result::Result<T, AttributeErrorWithPos>;

/// The countdown before the first hit object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Countdown {
    /// Code 0.
    None,
    /// Code 1.
    #[default]
    Normal,
    /// Code 2, half speed.
    Half,
    /// Code 3, double speed.
    Double,
}

impl<'a> TryFrom<&'a str> for Countdown {
    type Error = &'a str;
    fn try_from(value: &'a str) -> std::result::Result<Self, Self::Error> {
        match value {
            "0" => Ok(Self::None),
            "1" => Ok(Self::Normal),
            "2" => Ok(Self::Half),
            "3" => Ok(Self::Double),
            _ => Err(value),
        }
    }
}

/// The default sample set of hit objects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SampleSet {
    /// `Normal`.
    #[default]
    Normal,
    /// `Soft`.
    Soft,
    /// `Drum`.
    Drum,
}

impl<'a> TryFrom<&'a str> for SampleSet {
    type Error = &'a str;
    fn try_from(value: &'a str) -> std::result::Result<Self, Self::Error> {
        match value {
            "Normal" => Ok(Self::Normal),
            "Soft" => Ok(Self::Soft),
            "Drum" => Ok(Self::Drum),
            _ => Err(value),
        }
    }
}

/// The game mode the beatmap is made for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameMode {
    /// `osu!`, code 0.
    #[default]
    Standard,
    /// `osu!taiko`, code 1.
    Taiko,
    /// `osu!catch`, code 2.
    Catch,
    /// `osu!mania`, code 3.
    Mania,
}

impl<'a> TryFrom<&'a str> for GameMode {
    type Error = &'a str;
    fn try_from(value: &'a str) -> std::result::Result<Self, Self::Error> {
        match value {
            "0" => Ok(Self::Standard),
            "1" => Ok(Self::Taiko),
            "2" => Ok(Self::Catch),
            "3" => Ok(Self::Mania),
            _ => Err(value),
        }
    }
}

/// Where hit circle overlays are drawn relative to the numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OverlayPosition {
    /// Follows the skin.
    #[default]
    NoChange,
    /// Overlays are drawn under the numbers.
    Below,
    /// Overlays are drawn over the numbers.
    Above,
}

impl<'a> TryFrom<&'a str> for OverlayPosition {
    type Error = &'a str;
    fn try_from(value: &'a str) -> std::result::Result<Self, Self::Error> {
        match value {
            "NoChange" => Ok(Self::NoChange),
            "Below" => Ok(Self::Below),
            "Above" => Ok(Self::Above),
            _ => Err(value),
        }
    }
}

fn flag(table: &AttributeTable<'_>, key: &str) -> Result<Option<bool>> {
    table.convert_value(key, "0 or 1", |value| {
        value.parse::<i32>().ok().map(|value| value != 0)
    })
}

fn token<T: for<'a> TryFrom<&'a str>>(
    table: &AttributeTable<'_>,
    key: &str,
    expected: &'static str,
) -> Result<Option<T>> {
    table.convert_value(key, expected, |value| T::try_from(value).ok())
}

/// `[General]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct General {
    /// The audio path relative to the beatmap folder.
    pub audio_filename: Option<String>,
    /// Silence before the audio starts, in milliseconds.
    pub audio_lead_in: i32,
    /// Where the song select preview starts, in milliseconds. `-1` is the middle of the song.
    pub preview_time: i32,
    /// The countdown speed before the first object.
    pub countdown: Countdown,
    /// The sample set of objects without their own.
    pub sample_set: SampleSet,
    /// How close objects must be to stack.
    pub stack_leniency: f32,
    /// The game mode.
    pub mode: GameMode,
    /// Whether breaks have a letterboxing effect.
    pub letterbox_in_breaks: bool,
    /// Whether the storyboard may use the skin of the player.
    pub use_skin_sprites: bool,
    /// Where hit circle overlays are drawn.
    pub overlay_position: OverlayPosition,
    /// The preferred skin name.
    pub skin_preference: Option<String>,
    /// Whether a warning about flashing colours is shown.
    pub epilepsy_warning: bool,
    /// Beats to skip of the countdown.
    pub countdown_offset: i32,
    /// Whether the N+1 key layout of mania is used.
    pub special_style: bool,
    /// Whether the storyboard is widescreen.
    pub widescreen_storyboard: bool,
    /// Whether samples follow the playback rate of rate-changing mods.
    pub samples_match_playback_rate: bool,
}

impl Default for General {
    fn default() -> Self {
        Self {
            audio_filename: None,
            audio_lead_in: 0,
            preview_time: -1,
            countdown: Countdown::default(),
            sample_set: SampleSet::default(),
            stack_leniency: 0.7,
            mode: GameMode::default(),
            letterbox_in_breaks: false,
            use_skin_sprites: false,
            overlay_position: OverlayPosition::default(),
            skin_preference: None,
            epilepsy_warning: false,
            countdown_offset: 0,
            special_style: false,
            widescreen_storyboard: false,
            samples_match_playback_rate: false,
        }
    }
}

impl General {
    /// Reads the section from its table.
    ///
    /// # Errors
    ///
    /// Returns the first value that cannot be read.
    pub fn from_table(table: &AttributeTable<'_>) -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            audio_filename: table.get_string("AudioFilename"),
            audio_lead_in: table
                .parse_value("AudioLeadIn", "integer")?
                .unwrap_or(defaults.audio_lead_in),
            preview_time: table
                .parse_value("PreviewTime", "integer")?
                .unwrap_or(defaults.preview_time),
            countdown: token(table, "Countdown", "countdown code from 0 to 3")?
                .unwrap_or(defaults.countdown),
            sample_set: token(table, "SampleSet", "Normal, Soft or Drum")?
                .unwrap_or(defaults.sample_set),
            stack_leniency: table
                .parse_value("StackLeniency", "number")?
                .unwrap_or(defaults.stack_leniency),
            mode: token(table, "Mode", "mode code from 0 to 3")?.unwrap_or(defaults.mode),
            letterbox_in_breaks: flag(table, "LetterboxInBreaks")?
                .unwrap_or(defaults.letterbox_in_breaks),
            use_skin_sprites: flag(table, "UseSkinSprites")?.unwrap_or(defaults.use_skin_sprites),
            overlay_position: token(table, "OverlayPosition", "NoChange, Below or Above")?
                .unwrap_or(defaults.overlay_position),
            skin_preference: table.get_string("SkinPreference"),
            epilepsy_warning: flag(table, "EpilepsyWarning")?.unwrap_or(defaults.epilepsy_warning),
            countdown_offset: table
                .parse_value("CountdownOffset", "integer")?
                .unwrap_or(defaults.countdown_offset),
            special_style: flag(table, "SpecialStyle")?.unwrap_or(defaults.special_style),
            widescreen_storyboard: flag(table, "WidescreenStoryboard")?
                .unwrap_or(defaults.widescreen_storyboard),
            samples_match_playback_rate: flag(table, "SamplesMatchPlaybackRate")?
                .unwrap_or(defaults.samples_match_playback_rate),
        })
    }
}

/// `[Metadata]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// The romanised title.
    pub title: Option<String>,
    /// The title in its original script.
    pub title_unicode: Option<String>,
    /// The romanised artist.
    pub artist: Option<String>,
    /// The artist in its original script.
    pub artist_unicode: Option<String>,
    /// The mapper.
    pub creator: Option<String>,
    /// The difficulty name.
    pub version: Option<String>,
    /// Where the song comes from.
    pub source: Option<String>,
    /// Search terms.
    pub tags: Vec<String>,
    /// The online id of this difficulty.
    pub beatmap_id: Option<i32>,
    /// The online id of the set this difficulty belongs to.
    pub beatmap_set_id: Option<i32>,
}

impl Metadata {
    /// Reads the section from its table.
    ///
    /// # Errors
    ///
    /// Returns the first value that cannot be read.
    pub fn from_table(table: &AttributeTable<'_>) -> Result<Self> {
        Ok(Self {
            title: table.get_string("Title"),
            title_unicode: table.get_string("TitleUnicode"),
            artist: table.get_string("Artist"),
            artist_unicode: table.get_string("ArtistUnicode"),
            creator: table.get_string("Creator"),
            version: table.get_string("Version"),
            source: table.get_string("Source"),
            tags: table
                .get("Tags")
                .map(|tags| tags.split_whitespace().map(ToOwned::to_owned).collect())
                .unwrap_or_default(),
            beatmap_id: table.parse_value("BeatmapID", "integer")?,
            beatmap_set_id: table.parse_value("BeatmapSetID", "integer")?,
        })
    }
}

/// `[Editor]`, only meaningful to the editor.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Editor {
    /// Times of the bookmarks, in milliseconds.
    pub bookmarks: Vec<i32>,
    /// The distance snap multiplier.
    pub distance_spacing: Option<f32>,
    /// The beat snap divisor.
    pub beat_divisor: Option<i32>,
    /// The grid size.
    pub grid_size: Option<i32>,
    /// The zoom of the timeline.
    pub timeline_zoom: Option<f32>,
}

impl Editor {
    /// Reads the section from its table.
    ///
    /// # Errors
    ///
    /// Returns the first value that cannot be read.
    pub fn from_table(table: &AttributeTable<'_>) -> Result<Self> {
        Ok(Self {
            bookmarks: table
                .convert_value("Bookmarks", "comma separated integers", |value| {
                    value
                        .split(',')
                        .map(|time| time.trim().parse().ok())
                        .collect()
                })?
                .unwrap_or_default(),
            distance_spacing: table.parse_value("DistanceSpacing", "number")?,
            beat_divisor: table.parse_value("BeatDivisor", "integer")?,
            grid_size: table.parse_value("GridSize", "integer")?,
            timeline_zoom: table.parse_value("TimelineZoom", "number")?,
        })
    }
}

/// `[Difficulty]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Difficulty {
    /// HP drain rate, from 0 to 10.
    pub hp_drain_rate: f32,
    /// Circle size, from 0 to 10.
    pub circle_size: f32,
    /// Overall difficulty, from 0 to 10.
    pub overall_difficulty: f32,
    /// Approach rate, from 0 to 10.
    pub approach_rate: f32,
    /// Base slider velocity in hundreds of osu! pixels per beat.
    pub slider_multiplier: f64,
    /// Slider ticks per beat.
    pub slider_tick_rate: f64,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self {
            hp_drain_rate: 0.0,
            circle_size: 0.0,
            overall_difficulty: 0.0,
            approach_rate: 0.0,
            slider_multiplier: 1.4,
            slider_tick_rate: 1.0,
        }
    }
}

impl Difficulty {
    /// Reads the section from its table.
    ///
    /// # Errors
    ///
    /// Returns the first value that cannot be read.
    pub fn from_table(table: &AttributeTable<'_>) -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            hp_drain_rate: table
                .parse_value("HPDrainRate", "number")?
                .unwrap_or(defaults.hp_drain_rate),
            circle_size: table
                .parse_value("CircleSize", "number")?
                .unwrap_or(defaults.circle_size),
            overall_difficulty: table
                .parse_value("OverallDifficulty", "number")?
                .unwrap_or(defaults.overall_difficulty),
            approach_rate: table
                .parse_value("ApproachRate", "number")?
                .unwrap_or(defaults.approach_rate),
            slider_multiplier: table
                .parse_value("SliderMultiplier", "number")?
                .unwrap_or(defaults.slider_multiplier),
            slider_tick_rate: table
                .parse_value("SliderTickRate", "number")?
                .unwrap_or(defaults.slider_tick_rate),
        })
    }
}

/// One entry of `[Colours]`, such as `Combo1 : 255,128,0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Colour {
    /// The key, such as `Combo1` or `SliderBorder`.
    pub name: String,
    /// The colour value.
    pub colour: Rgb,
}

/// Reads every entry of `[Colours]` in source order.
///
/// # Errors
///
/// Returns the first value that is not `r,g,b`.
pub fn colours_from_table(table: &AttributeTable<'_>) -> Result<Vec<Colour>> {
    table
        .iter()
        .filter(|entry| !entry.content().value.is_empty())
        .map(|entry| {
            let Attribute { key, value } = *entry.content();
            let colour = Rgb::parse_triple(value).ok_or_else(|| {
                AttributeError::InvalidValue {
                    section: table.section().to_owned(),
                    key: key.to_owned(),
                    value: value.to_owned(),
                    expected: "r,g,b".to_owned(),
                }
                .into_wrapper(entry)
            })?;
            Ok(Colour {
                name: key.to_owned(),
                colour,
            })
        })
        .collect()
}
