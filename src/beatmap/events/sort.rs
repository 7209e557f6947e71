//! Policies ordering the parsed objects and commands.
//!
//! The game expects objects grouped by kind, and the commands of a sprite ordered by start time.
//! How exactly differs between writers of the format, so the order is a [`SortPolicy`]:
//!
//! - [`CanonicalOrder`] is used by [`crate::beatmap::parse_beatmap`], and can be reconfigured.
//! - [`KeepSourceOrder`] leaves everything as written.

use log::debug;

use super::{
    command::{Command, CommandList},
    object::{EventKind, EventObject},
};

/// A strategy to order [`EventObject`]s and their commands.
///
/// Every method has a default, so an implementation only overrides what it changes.
pub trait SortPolicy {
    /// Returns the rank of the kind. Objects of lower ranks come first.
    fn kind_rank(&self, kind: EventKind) -> usize {
        kind as usize
    }

    /// Returns whether the commands nested in loops and triggers are sorted too.
    fn sorts_nested_lists(&self) -> bool {
        false
    }

    /// Returns the time used to order objects of the same kind.
    ///
    /// Sprites and animations start with their earliest command, or 0 without commands.
    fn effective_start(&self, object: &EventObject) -> i32 {
        object.own_start_time().unwrap_or_else(|| {
            object
                .commands()
                .and_then(|commands| commands.iter().map(Command::start_time).min())
                .unwrap_or(0)
        })
    }

    /// Sorts the commands of every sprite and animation by start time, then the objects by rank
    /// and effective start. Both sorts are stable.
    fn sort(&self, objects: &mut [EventObject]) {
        let nested = self.sorts_nested_lists();
        debug!("sorting {} objects, nested lists {nested}", objects.len());
        for commands in objects.iter_mut().filter_map(EventObject::commands_mut) {
            sort_commands(commands, nested);
        }
        objects.sort_by_cached_key(|object| {
            (self.kind_rank(object.kind()), self.effective_start(object))
        });
    }
}

fn sort_commands(commands: &mut CommandList, nested: bool) {
    commands.sort_by_key(Command::start_time);
    if nested {
        for inner in commands.iter_mut().filter_map(Command::commands_mut) {
            sort_commands(inner, nested);
        }
    }
}

/// Which command decides the start of a sprite or an animation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpriteStart {
    /// The minimum start time among the direct commands.
    #[default]
    Earliest,
    /// The start time of the first direct command in the list as it stands when objects are ordered.
    First,
}

/// The order of the game, with each point where writers disagree exposed as a field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CanonicalOrder {
    /// The kinds from first to last. A kind missing here goes after all listed ones.
    pub ranks: [EventKind; 6],
    /// Whether the commands in loops and triggers are sorted too.
    pub sort_nested: bool,
    /// Which command decides the start of a sprite or an animation.
    pub sprite_start: SpriteStart,
}

impl Default for CanonicalOrder {
    fn default() -> Self {
        Self {
            ranks: EventKind::ALL,
            sort_nested: false,
            sprite_start: SpriteStart::Earliest,
        }
    }
}

impl SortPolicy for CanonicalOrder {
    fn kind_rank(&self, kind: EventKind) -> usize {
        self.ranks
            .iter()
            .position(|&ranked| ranked == kind)
            .unwrap_or(self.ranks.len())
    }

    fn sorts_nested_lists(&self) -> bool {
        self.sort_nested
    }

    fn effective_start(&self, object: &EventObject) -> i32 {
        object.own_start_time().unwrap_or_else(|| {
            let commands = object.commands().map(Vec::as_slice).unwrap_or_default();
            let start = match self.sprite_start {
                SpriteStart::Earliest => commands.iter().map(Command::start_time).min(),
                SpriteStart::First => commands.first().map(Command::start_time),
            };
            start.unwrap_or(0)
        })
    }
}

/// Leaves objects and commands in source order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct KeepSourceOrder;

impl SortPolicy for KeepSourceOrder {
    fn sort(&self, _objects: &mut [EventObject]) {}
}
