//! Writing the object tree back into `[Events]` text.
//!
//! The output is canonical: names instead of numeric codes, quoted paths, one space per nesting
//! level, and the shortest form of commands whose end equals their start.

use std::fmt::{self, Write};

use itertools::Itertools;

use super::{
    Events,
    command::{Command, CommandList, Transition},
    object::EventObject,
    values::CommandValue,
};

/// The header line of the section.
pub const EVENTS_HEADER: &str = "[Events]";
/// The comment written after the last object.
pub const EVENTS_SENTINEL: &str = "//Storyboard Sound Samples";

const INDENT: char = ' ';

fn fmt_transition<V: CommandValue>(
    f: &mut fmt::Formatter<'_>,
    code: &str,
    transition: &Transition<V>,
) -> fmt::Result {
    let holds = transition.sequence.is_empty();
    write!(f, "{code},{},{},", transition.easing, transition.start_time)?;
    if !holds || transition.end_time != transition.start_time {
        write!(f, "{}", transition.end_time)?;
    }
    write!(f, ",{}", transition.start)?;
    if !transition.is_collapsible() {
        write!(f, ",{}", transition.end)?;
    }
    if !holds {
        write!(f, ",{}", transition.sequence.iter().format(","))?;
    }
    Ok(())
}

fn fmt_command_line(f: &mut fmt::Formatter<'_>, command: &Command) -> fmt::Result {
    let code = command.code();
    match command {
        Command::Fade(t)
        | Command::MoveX(t)
        | Command::MoveY(t)
        | Command::Scale(t)
        | Command::Rotate(t) => fmt_transition(f, code, t),
        Command::Move(t) | Command::VectorScale(t) => fmt_transition(f, code, t),
        Command::Color(t) => fmt_transition(f, code, t),
        Command::Parameter(p) => {
            write!(f, "{code},{},{},", p.easing, p.start_time)?;
            if p.end_time != p.start_time {
                write!(f, "{}", p.end_time)?;
            }
            write!(f, ",{}", p.parameter)
        }
        Command::Loop(l) => write!(f, "{code},{},{}", l.start_time, l.loop_count),
        Command::Trigger(t) => {
            write!(f, "{code},{},{},{}", t.trigger_type, t.start_time, t.end_time)?;
            if let Some(group) = t.group_number {
                write!(f, ",{group}")?;
            }
            Ok(())
        }
    }
}

/// Writes each command on its own line, preceded by a line break and indented by `depth`.
fn fmt_commands(f: &mut fmt::Formatter<'_>, commands: &CommandList, depth: usize) -> fmt::Result {
    for command in commands {
        f.write_char('\n')?;
        for _ in 0..depth {
            f.write_char(INDENT)?;
        }
        fmt_command_line(f, command)?;
        if let Some(nested) = command.commands() {
            fmt_commands(f, nested, depth + 1)?;
        }
    }
    Ok(())
}

/// Writes the command line, then the nested commands one level deeper.
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_command_line(f, self)?;
        if let Some(nested) = self.commands() {
            fmt_commands(f, nested, 1)?;
        }
        Ok(())
    }
}

fn fmt_object_line(f: &mut fmt::Formatter<'_>, object: &EventObject) -> fmt::Result {
    let name = object.kind().name();
    match object {
        EventObject::Background(media) | EventObject::Video(media) => write!(
            f,
            "{name},{},\"{}\",{},{}",
            media.start_time, media.filename, media.x_offset, media.y_offset
        ),
        EventObject::Break(period) => write!(f, "{name},{},{}", period.start_time, period.end_time),
        EventObject::Sprite(sprite) => write!(
            f,
            "{name},{},{},\"{}\",{},{}",
            sprite.layer, sprite.origin, sprite.filepath, sprite.x, sprite.y
        ),
        EventObject::Animation(animation) => write!(
            f,
            "{name},{},{},\"{}\",{},{},{},{},{}",
            animation.layer,
            animation.origin,
            animation.filepath,
            animation.x,
            animation.y,
            animation.frame_count,
            animation.frame_delay,
            animation.loop_type
        ),
        EventObject::Sample(sample) => write!(
            f,
            "{name},{},{},\"{}\",{}",
            sample.time,
            sample.layer.code(),
            sample.filepath,
            sample.volume
        ),
    }
}

/// Writes the object line, then its commands one space deep.
impl fmt::Display for EventObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_object_line(f, self)?;
        if let Some(commands) = self.commands() {
            fmt_commands(f, commands, 1)?;
        }
        Ok(())
    }
}

/// Writes the whole section, header and closing comment included, each line ending with `\n`.
impl fmt::Display for Events {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{EVENTS_HEADER}")?;
        for object in &self.objects {
            writeln!(f, "{object}")?;
        }
        writeln!(f, "{EVENTS_SENTINEL}")
    }
}
