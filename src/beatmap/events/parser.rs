//! The depth-stack parser turning indented lines into the object tree.
//!
//! The stack holds the path to the command list that receives the next command line: the index
//! of the object first, then the index of each open loop or trigger. A line of depth `d` closes
//! every scope deeper than `d` before it is placed.

use log::trace;

use super::{
    EventsError, EventsErrorWithPos, EventsWarning, EventsWarningWithPos,
    command::{Command, CommandList},
    fields::Fields,
    line::classify,
    object::EventObject,
};
use crate::beatmap::{mixin::SourceLineMixinExt, section::SectionLine, variable::VariableTable};

/// The state while parsing the lines of one `[Events]` section.
pub struct DepthStack<'v> {
    variables: &'v VariableTable,
    objects: Vec<EventObject>,
    stack: Vec<usize>,
    warnings: Vec<EventsWarningWithPos>,
}

impl<'v> DepthStack<'v> {
    pub const fn new(variables: &'v VariableTable) -> Self {
        Self {
            variables,
            objects: vec![],
            stack: vec![],
            warnings: vec![],
        }
    }

    /// Places every line and returns the objects with the warnings found on the way.
    pub fn parse_lines(
        mut self,
        lines: &[SectionLine<'_>],
    ) -> Result<(Vec<EventObject>, Vec<EventsWarningWithPos>), EventsErrorWithPos> {
        for line in lines {
            self.parse_line(line)?;
        }
        Ok((self.objects, self.warnings))
    }

    fn parse_line(&mut self, line: &SectionLine<'_>) -> Result<(), EventsErrorWithPos> {
        let (text, undefined) = self.variables.substitute(line.content());
        self.warnings.extend(undefined.into_iter().map(|name| {
            EventsWarning::UndefinedVariable {
                name: name.to_owned(),
            }
            .into_wrapper(line)
        }));
        let Some(classified) = classify(&text) else {
            return Ok(());
        };
        let depth = classified.depth;
        trace!(
            "line {}: depth {depth}, open scopes {}, fields {:?}",
            line.line(),
            self.stack.len(),
            classified.fields
        );

        self.stack.truncate(depth);
        let mut fields = Fields::new(line.line(), classified.fields);
        let placed = if self.stack.is_empty() {
            self.place_object(&mut fields, depth)
        } else {
            self.place_command(&mut fields, depth)
        };
        placed.map_err(|err| err.into_wrapper(line))
    }

    fn place_object(&mut self, fields: &mut Fields<'_>, depth: usize) -> Result<(), EventsError> {
        if depth > 0 && Command::is_command_code(fields.code()) {
            return Err(EventsError::MalformedIndentation {
                line: fields.line(),
                depth,
            });
        }
        let object = EventObject::parse(fields)?;
        let opens_scope = object.commands().is_some();
        self.objects.push(object);
        if opens_scope {
            self.stack.push(self.objects.len() - 1);
        }
        Ok(())
    }

    fn place_command(&mut self, fields: &mut Fields<'_>, depth: usize) -> Result<(), EventsError> {
        let command = Command::parse(fields)?;
        let opens_scope = command.commands().is_some();
        let Some(list) = self.open_list() else {
            return Err(EventsError::MalformedIndentation {
                line: fields.line(),
                depth,
            });
        };
        list.push(command);
        let index = list.len() - 1;
        if opens_scope {
            self.stack.push(index);
        }
        Ok(())
    }

    /// Follows the stack down to the innermost open command list.
    fn open_list(&mut self) -> Option<&mut CommandList> {
        let (&object, path) = self.stack.split_first()?;
        let mut list = self.objects.get_mut(object)?.commands_mut()?;
        for &index in path {
            list = list.get_mut(index)?.commands_mut()?;
        }
        Some(list)
    }
}
