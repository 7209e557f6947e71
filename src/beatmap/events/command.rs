//! Storyboard commands, the lines nested under sprites and animations.
//!
//! ```text
//! Sprite,Foreground,Centre,"sb/star.png",320,240
//!  F,0,1000,2000,0,1
//!  M,1,1000,2000,0,0,640,480
//!  L,3000,4
//!   R,0,0,500,0,3.1415
//! ```
//!
//! Transition commands share the shape `code,easing,start,end,startValue,endValue[,more values]`,
//! so they are all [`Transition`]s over different [`CommandValue`]s.

use super::{
    EventsError, Result,
    fields::Fields,
    types::{Easing, Parameter},
    values::{CommandValue, Rgb, Vector2},
};

/// Commands in source order.
pub type CommandList = Vec<Command>;

/// A change of a value over time, possibly followed by more keyframes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition<V> {
    /// The easing between two keyframes.
    pub easing: Easing,
    /// The time the transition starts, in milliseconds.
    pub start_time: i32,
    /// The time the transition ends. Equal to `start_time` when omitted.
    pub end_time: i32,
    /// The value at `start_time`.
    pub start: V,
    /// The value at `end_time`. Equal to `start` when omitted.
    pub end: V,
    /// Further keyframes. Each one runs for the same duration and starts where the previous one ended.
    pub sequence: Vec<V>,
}

impl<V: Copy> Transition<V> {
    /// Creates a transition without further keyframes.
    pub fn new(easing: Easing, start_time: i32, end_time: i32, start: V, end: V) -> Self {
        Self {
            easing,
            start_time,
            end_time,
            start,
            end,
            sequence: vec![],
        }
    }

    /// Creates a transition that holds `value` from `start_time` to `end_time`.
    pub fn hold(start_time: i32, end_time: i32, value: V) -> Self {
        Self::new(Easing::Linear, start_time, end_time, value, value)
    }
}

impl<V: CommandValue> Transition<V> {
    fn parse(fields: &mut Fields<'_>) -> Result<Self> {
        let easing = fields.token("easing code from 0 to 34")?;
        let start_time = fields.number("start time")?;
        let end_time = fields.optional_number("end time")?.unwrap_or(start_time);
        let start = read_value(fields, None)?;
        let end = if fields.has_remaining() {
            read_value(fields, Some(start))?
        } else {
            start
        };
        let mut sequence = vec![];
        let mut last = end;
        while fields.has_remaining() {
            last = read_value(fields, Some(last))?;
            sequence.push(last);
        }
        Ok(Self {
            easing,
            start_time,
            end_time,
            start,
            end,
            sequence,
        })
    }

    /// Returns whether the end value can be left out of the source.
    pub(crate) fn is_collapsible(&self) -> bool {
        self.start == self.end && self.sequence.is_empty()
    }
}

fn read_value<V: CommandValue>(fields: &mut Fields<'_>, fallback: Option<V>) -> Result<V> {
    let first = fields.index();
    let components = fields.take(V::ARITY);
    V::from_components(&components, fallback)
        .map_err(|offset| fields.make_err_field(first + offset, V::EXPECTED))
}

/// `P`, turns an effect on for the duration of the command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParameterCommand {
    /// Unused by the effect but kept for the round trip.
    pub easing: Easing,
    /// The time the effect is turned on.
    pub start_time: i32,
    /// The time the effect is turned off. Equal to `start_time` when omitted.
    pub end_time: i32,
    /// The effect.
    pub parameter: Parameter,
}

/// `L`, repeats the nested commands.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoopCommand {
    /// The time the first iteration starts.
    pub start_time: i32,
    /// How many times the nested commands run.
    pub loop_count: i32,
    /// The nested commands, timed relative to the start of each iteration.
    pub commands: CommandList,
}

/// `T`, runs the nested commands when a gameplay event happens.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TriggerCommand {
    /// The trigger name, such as `HitSoundClap` or `Passing`.
    pub trigger_type: String,
    /// The time the trigger starts listening.
    pub start_time: i32,
    /// The time the trigger stops listening. Equal to `start_time` when omitted.
    pub end_time: i32,
    /// Triggers of the same group cancel each other.
    pub group_number: Option<i32>,
    /// The nested commands, timed relative to the activation.
    pub commands: CommandList,
}

/// A storyboard command.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    /// `F`, opacity from 0 to 1.
    Fade(Transition<f32>),
    /// `M`, position.
    Move(Transition<Vector2>),
    /// `MX`, horizontal position.
    MoveX(Transition<f32>),
    /// `MY`, vertical position.
    MoveY(Transition<f32>),
    /// `S`, uniform scale.
    Scale(Transition<f32>),
    /// `V`, scale per axis.
    VectorScale(Transition<Vector2>),
    /// `R`, rotation in radians.
    Rotate(Transition<f32>),
    /// `C`, colour tint.
    Color(Transition<Rgb>),
    /// `P`, toggled effect.
    Parameter(ParameterCommand),
    /// `L`, repetition of nested commands.
    Loop(LoopCommand),
    /// `T`, nested commands run on a gameplay event.
    Trigger(TriggerCommand),
}

impl Command {
    /// Every command code.
    pub const CODES: [&'static str; 11] = ["F", "M", "MX", "MY", "S", "V", "R", "C", "P", "L", "T"];

    /// Returns whether `code` introduces a command line.
    #[must_use]
    pub fn is_command_code(code: &str) -> bool {
        Self::CODES.contains(&code)
    }

    /// Returns the code written at the start of the line.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Fade(_) => "F",
            Self::Move(_) => "M",
            Self::MoveX(_) => "MX",
            Self::MoveY(_) => "MY",
            Self::Scale(_) => "S",
            Self::VectorScale(_) => "V",
            Self::Rotate(_) => "R",
            Self::Color(_) => "C",
            Self::Parameter(_) => "P",
            Self::Loop(_) => "L",
            Self::Trigger(_) => "T",
        }
    }

    /// Returns the start time in milliseconds.
    #[must_use]
    pub const fn start_time(&self) -> i32 {
        match self {
            Self::Fade(t) | Self::MoveX(t) | Self::MoveY(t) | Self::Scale(t) | Self::Rotate(t) => {
                t.start_time
            }
            Self::Move(t) | Self::VectorScale(t) => t.start_time,
            Self::Color(t) => t.start_time,
            Self::Parameter(p) => p.start_time,
            Self::Loop(l) => l.start_time,
            Self::Trigger(t) => t.start_time,
        }
    }

    /// Returns the end time in milliseconds.
    ///
    /// A loop ends when its last iteration of the nested commands ends.
    #[must_use]
    pub fn end_time(&self) -> i32 {
        match self {
            Self::Fade(t) | Self::MoveX(t) | Self::MoveY(t) | Self::Scale(t) | Self::Rotate(t) => {
                t.end_time
            }
            Self::Move(t) | Self::VectorScale(t) => t.end_time,
            Self::Color(t) => t.end_time,
            Self::Parameter(p) => p.end_time,
            Self::Loop(l) => {
                let iteration = l.commands.iter().map(Self::end_time).max().unwrap_or(0);
                l.start_time
                    .saturating_add(iteration.saturating_mul(l.loop_count.max(1)))
            }
            Self::Trigger(t) => t.end_time,
        }
    }

    /// Returns the nested commands of a loop or a trigger.
    #[must_use]
    pub const fn commands(&self) -> Option<&CommandList> {
        match self {
            Self::Loop(l) => Some(&l.commands),
            Self::Trigger(t) => Some(&t.commands),
            _ => None,
        }
    }

    /// Returns the nested commands of a loop or a trigger, mutably.
    pub const fn commands_mut(&mut self) -> Option<&mut CommandList> {
        match self {
            Self::Loop(l) => Some(&mut l.commands),
            Self::Trigger(t) => Some(&mut t.commands),
            _ => None,
        }
    }

    /// Parses a command line. Nested commands are attached later by the parser.
    pub(crate) fn parse(fields: &mut Fields<'_>) -> Result<Self> {
        fields.trim_trailing_empty();
        let command = match fields.code() {
            "F" => Self::Fade(Transition::parse(fields)?),
            "M" => Self::Move(Transition::parse(fields)?),
            "MX" => Self::MoveX(Transition::parse(fields)?),
            "MY" => Self::MoveY(Transition::parse(fields)?),
            "S" => Self::Scale(Transition::parse(fields)?),
            "V" => Self::VectorScale(Transition::parse(fields)?),
            "R" => Self::Rotate(Transition::parse(fields)?),
            "C" => Self::Color(Transition::parse(fields)?),
            "P" => {
                let easing = fields.token("easing code from 0 to 34")?;
                let start_time = fields.number("start time")?;
                let end_time = fields.optional_number("end time")?.unwrap_or(start_time);
                let parameter = fields.token("H, V or A")?;
                Self::Parameter(ParameterCommand {
                    easing,
                    start_time,
                    end_time,
                    parameter,
                })
            }
            "L" => Self::Loop(LoopCommand {
                start_time: fields.number("start time")?,
                loop_count: fields.number("loop count")?,
                commands: vec![],
            }),
            "T" => {
                let trigger_type = fields.required("trigger name", |name| Some(name.to_owned()))?;
                let start_time = fields.number("start time")?;
                let end_time = fields.optional_number("end time")?.unwrap_or(start_time);
                let group_number = fields.optional_number("group number")?;
                Self::Trigger(TriggerCommand {
                    trigger_type,
                    start_time,
                    end_time,
                    group_number,
                    commands: vec![],
                })
            }
            code => {
                return Err(EventsError::UnrecognizedCode {
                    code: code.to_owned(),
                    line: fields.line(),
                });
            }
        };
        Ok(command)
    }
}
