//! Values animated by storyboard commands.
//!
//! Every value type knows how many comma separated fields it spans, see [`CommandValue::ARITY`].

use std::{fmt, str::FromStr};

/// A pair of floats, the value of `M` and `V` commands.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2 {
    /// The horizontal component.
    pub x: f32,
    /// The vertical component.
    pub y: f32,
}

impl Vector2 {
    /// Creates a new vector.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Vector2 {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl From<Vector2> for (f32, f32) {
    fn from(vector: Vector2) -> Self {
        (vector.x, vector.y)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// A colour without alpha, the value of `C` commands and of combo colours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// A component of red.
    pub red: u8,
    /// A component of green.
    pub green: u8,
    /// A component of blue.
    pub blue: u8,
}

impl Rgb {
    /// Creates a new colour.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parses `r,g,b`, allowing spaces around each component.
    #[must_use]
    pub fn parse_triple(value: &str) -> Option<Self> {
        let mut components = value.split(',').map(|component| component.trim().parse().ok());
        let red = components.next()??;
        let green = components.next()??;
        let blue = components.next()??;
        components.next().is_none().then_some(Self { red, green, blue })
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self { red, green, blue }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.red, self.green, self.blue)
    }
}

/// A value of a transition command, spanning [`Self::ARITY`] fields.
///
/// `Display` writes the components separated by `,`.
pub trait CommandValue: Copy + PartialEq + fmt::Display {
    /// The number of fields of one value.
    const ARITY: usize;
    /// Describes a component for error messages.
    const EXPECTED: &'static str;

    /// Builds a value from exactly [`Self::ARITY`] raw components.
    ///
    /// An empty component takes the matching component of `fallback`.
    ///
    /// # Errors
    ///
    /// Returns the index of the first component that is invalid, or empty without a fallback.
    fn from_components(components: &[&str], fallback: Option<Self>) -> Result<Self, usize>;
}

fn component<T: FromStr>(
    components: &[&str],
    index: usize,
    fallback: Option<T>,
    accept: impl FnOnce(&T) -> bool,
) -> Result<T, usize> {
    let raw = components.get(index).copied().unwrap_or_default();
    if raw.is_empty() {
        return fallback.ok_or(index);
    }
    raw.parse().ok().filter(accept).ok_or(index)
}

fn float_component(components: &[&str], index: usize, fallback: Option<f32>) -> Result<f32, usize> {
    component(components, index, fallback, |value: &f32| value.is_finite())
}

impl CommandValue for f32 {
    const ARITY: usize = 1;
    const EXPECTED: &'static str = "number";

    fn from_components(components: &[&str], fallback: Option<Self>) -> Result<Self, usize> {
        float_component(components, 0, fallback)
    }
}

impl CommandValue for Vector2 {
    const ARITY: usize = 2;
    const EXPECTED: &'static str = "number";

    fn from_components(components: &[&str], fallback: Option<Self>) -> Result<Self, usize> {
        Ok(Self {
            x: float_component(components, 0, fallback.map(|v| v.x))?,
            y: float_component(components, 1, fallback.map(|v| v.y))?,
        })
    }
}

impl CommandValue for Rgb {
    const ARITY: usize = 3;
    const EXPECTED: &'static str = "colour component from 0 to 255";

    fn from_components(components: &[&str], fallback: Option<Self>) -> Result<Self, usize> {
        Ok(Self {
            red: component(components, 0, fallback.map(|c| c.red), |_| true)?,
            green: component(components, 1, fallback.map(|c| c.green), |_| true)?,
            blue: component(components, 2, fallback.map(|c| c.blue), |_| true)?,
        })
    }
}
