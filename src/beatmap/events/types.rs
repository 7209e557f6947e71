//! Enumerations used in storyboard object and command fields.

/// An easing curve applied between the start and end value of a command.
///
/// Written in the source as its integer code, from `0` to `34`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Easing {
    /// No easing, code 0.
    #[default]
    Linear = 0,
    /// Decelerating, code 1.
    EasingOut = 1,
    /// Accelerating, code 2.
    EasingIn = 2,
    /// Code 3.
    QuadIn = 3,
    /// Code 4.
    QuadOut = 4,
    /// Code 5.
    QuadInOut = 5,
    /// Code 6.
    CubicIn = 6,
    /// Code 7.
    CubicOut = 7,
    /// Code 8.
    CubicInOut = 8,
    /// Code 9.
    QuartIn = 9,
    /// Code 10.
    QuartOut = 10,
    /// Code 11.
    QuartInOut = 11,
    /// Code 12.
    QuintIn = 12,
    /// Code 13.
    QuintOut = 13,
    /// Code 14.
    QuintInOut = 14,
    /// Code 15.
    SineIn = 15,
    /// Code 16.
    SineOut = 16,
    /// Code 17.
    SineInOut = 17,
    /// Code 18.
    ExpoIn = 18,
    /// Code 19.
    ExpoOut = 19,
    /// Code 20.
    ExpoInOut = 20,
    /// Code 21.
    CircIn = 21,
    /// Code 22.
    CircOut = 22,
    /// Code 23.
    CircInOut = 23,
    /// Code 24.
    ElasticIn = 24,
    /// Code 25.
    ElasticOut = 25,
    /// Code 26.
    ElasticHalfOut = 26,
    /// Code 27.
    ElasticQuarterOut = 27,
    /// Code 28.
    ElasticInOut = 28,
    /// Code 29.
    BackIn = 29,
    /// Code 30.
    BackOut = 30,
    /// Code 31.
    BackInOut = 31,
    /// Code 32.
    BounceIn = 32,
    /// Code 33.
    BounceOut = 33,
    /// Code 34.
    BounceInOut = 34,
}

impl Easing {
    /// All easings, indexed by their code.
    pub const ALL: [Self; 35] = [
        Self::Linear,
        Self::EasingOut,
        Self::EasingIn,
        Self::QuadIn,
        Self::QuadOut,
        Self::QuadInOut,
        Self::CubicIn,
        Self::CubicOut,
        Self::CubicInOut,
        Self::QuartIn,
        Self::QuartOut,
        Self::QuartInOut,
        Self::QuintIn,
        Self::QuintOut,
        Self::QuintInOut,
        Self::SineIn,
        Self::SineOut,
        Self::SineInOut,
        Self::ExpoIn,
        Self::ExpoOut,
        Self::ExpoInOut,
        Self::CircIn,
        Self::CircOut,
        Self::CircInOut,
        Self::ElasticIn,
        Self::ElasticOut,
        Self::ElasticHalfOut,
        Self::ElasticQuarterOut,
        Self::ElasticInOut,
        Self::BackIn,
        Self::BackOut,
        Self::BackInOut,
        Self::BounceIn,
        Self::BounceOut,
        Self::BounceInOut,
    ];

    /// Returns the integer code of the easing.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Easing {
    type Error = u8;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL.get(value as usize).copied().ok_or(value)
    }
}

impl<'a> TryFrom<&'a str> for Easing {
    type Error = &'a str;
    fn try_from(value: &'a str) -> Result<Self, Self::Error> {
        value
            .parse::<u8>()
            .ok()
            .and_then(|code| Self::try_from(code).ok())
            .ok_or(value)
    }
}

impl std::fmt::Display for Easing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A toggle effect of the `P` command, applied for the duration of the command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Parameter {
    /// `H`, flips the image horizontally.
    Horizontal,
    /// `V`, flips the image vertically.
    Vertical,
    /// `A`, uses additive colour blending.
    AdditiveColour,
}

impl Parameter {
    /// Returns the letter written in the source.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Horizontal => 'H',
            Self::Vertical => 'V',
            Self::AdditiveColour => 'A',
        }
    }
}

impl<'a> TryFrom<&'a str> for Parameter {
    type Error = &'a str;
    fn try_from(value: &'a str) -> Result<Self, Self::Error> {
        let letter = value
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
            .unwrap_or(value);
        match letter {
            "H" => Ok(Self::Horizontal),
            "V" => Ok(Self::Vertical),
            "A" => Ok(Self::AdditiveColour),
            _ => Err(value),
        }
    }
}

impl std::fmt::Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A compositing layer of a sprite or a sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Layer {
    /// Drawn first, code 0.
    #[default]
    Background,
    /// Only shown while the player is failing, code 1.
    Fail,
    /// Only shown while the player is passing, code 2.
    Pass,
    /// Drawn last, code 3.
    Foreground,
}

impl Layer {
    const NAMES: [(&'static str, Self); 4] = [
        ("Background", Self::Background),
        ("Fail", Self::Fail),
        ("Pass", Self::Pass),
        ("Foreground", Self::Foreground),
    ];

    /// Returns the numeric code of the layer.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Background => 0,
            Self::Fail => 1,
            Self::Pass => 2,
            Self::Foreground => 3,
        }
    }

    /// Returns the name of the layer.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Background => "Background",
            Self::Fail => "Fail",
            Self::Pass => "Pass",
            Self::Foreground => "Foreground",
        }
    }
}

impl<'a> TryFrom<&'a str> for Layer {
    type Error = &'a str;
    /// Accepts the name in any case, or the numeric code.
    fn try_from(value: &'a str) -> Result<Self, Self::Error> {
        if let Ok(code) = value.parse::<usize>() {
            return Self::NAMES.get(code).map(|&(_, layer)| layer).ok_or(value);
        }
        Self::NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(value))
            .map(|&(_, layer)| layer)
            .ok_or(value)
    }
}

impl std::fmt::Display for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The anchor point of an image, used for positioning, scaling and rotation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Origin {
    /// The top left corner.
    TopLeft,
    /// The centre of the image.
    #[default]
    Centre,
    /// The middle of the left edge.
    CentreLeft,
    /// The top right corner.
    TopRight,
    /// The middle of the bottom edge.
    BottomCentre,
    /// The middle of the top edge.
    TopCentre,
    /// Kept for compatibility, placed like `TopLeft`.
    Custom,
    /// The middle of the right edge.
    CentreRight,
    /// The bottom left corner.
    BottomLeft,
    /// The bottom right corner.
    BottomRight,
}

impl Origin {
    const NAMES: [(&'static str, Self); 10] = [
        ("TopLeft", Self::TopLeft),
        ("Centre", Self::Centre),
        ("CentreLeft", Self::CentreLeft),
        ("TopRight", Self::TopRight),
        ("BottomCentre", Self::BottomCentre),
        ("TopCentre", Self::TopCentre),
        ("Custom", Self::Custom),
        ("CentreRight", Self::CentreRight),
        ("BottomLeft", Self::BottomLeft),
        ("BottomRight", Self::BottomRight),
    ];

    /// Returns the name of the origin.
    #[must_use]
    pub fn name(self) -> &'static str {
        Self::NAMES
            .iter()
            .find(|&&(_, origin)| origin == self)
            .map_or("Centre", |&(name, _)| name)
    }
}

impl<'a> TryFrom<&'a str> for Origin {
    type Error = &'a str;
    /// Accepts the name in any case.
    fn try_from(value: &'a str) -> Result<Self, Self::Error> {
        Self::NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(value))
            .map(|&(_, origin)| origin)
            .ok_or(value)
    }
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How an animation repeats its frames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LoopType {
    /// Restarts from the first frame after the last one.
    #[default]
    LoopForever,
    /// Stops on the last frame.
    LoopOnce,
}

impl<'a> TryFrom<&'a str> for LoopType {
    type Error = &'a str;
    fn try_from(value: &'a str) -> Result<Self, Self::Error> {
        if value.eq_ignore_ascii_case("LoopForever") {
            Ok(Self::LoopForever)
        } else if value.eq_ignore_ascii_case("LoopOnce") {
            Ok(Self::LoopOnce)
        } else {
            Err(value)
        }
    }
}

impl std::fmt::Display for LoopType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LoopForever => f.write_str("LoopForever"),
            Self::LoopOnce => f.write_str("LoopOnce"),
        }
    }
}
