use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use crate::foundation::core::Point;
use crate::foundation::error::{ShapeshiftError, ShapeshiftResult};
use crate::foundation::math::points_close;
use crate::path::command::{Command, CommandKind};

/// Polyline resolution used when measuring curved commands.
///
/// Higher values trade construction time for length accuracy; 100 keeps the error of a
/// typical icon-sized cubic well below a hundredth of a unit.
pub const LENGTH_SAMPLES: usize = 100;

/// Immutable vector path: an ordered list of sub-paths, each starting with a `MoveTo`.
///
/// The flattened command list, the total length and the path string are computed once at
/// construction.
#[derive(Clone, Debug)]
pub struct Path {
    commands: Vec<Command>,
    sub_paths: Vec<Range<usize>>,
    length: f64,
    path_string: String,
}

/// Borrowed view of one sub-path of a [`Path`].
#[derive(Clone, Copy, Debug)]
pub struct SubPath<'a> {
    commands: &'a [Command],
}

impl<'a> SubPath<'a> {
    pub fn commands(&self) -> &'a [Command] {
        self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn kinds(&self) -> impl Iterator<Item = CommandKind> + 'a {
        self.commands.iter().map(Command::kind)
    }

    /// End point of the leading `MoveTo`.
    pub fn move_point(&self) -> Point {
        self.commands[0].end()
    }

    /// Closed iff the last command is a `ClosePath` or ends on the `MoveTo` point.
    pub fn is_closed(&self) -> bool {
        let Some(last) = self.commands.last() else {
            return false;
        };
        last.kind() == CommandKind::ClosePath
            || (self.commands.len() > 1 && last.end() == self.move_point())
    }
}

impl Path {
    /// Builds a path, validating sub-path structure and command chaining.
    pub fn new(commands: Vec<Command>) -> ShapeshiftResult<Self> {
        let sub_paths = validate(&commands)?;
        Ok(Self::assemble(commands, sub_paths))
    }

    /// Builds a path whose commands are valid by construction.
    pub(crate) fn new_unchecked(commands: Vec<Command>) -> Self {
        debug_assert!(validate(&commands).is_ok());
        let mut sub_paths = Vec::new();
        let mut sub_start = 0usize;
        for (i, cmd) in commands.iter().enumerate() {
            if i > 0 && cmd.kind() == CommandKind::MoveTo {
                sub_paths.push(sub_start..i);
                sub_start = i;
            }
        }
        if !commands.is_empty() {
            sub_paths.push(sub_start..commands.len());
        }
        Self::assemble(commands, sub_paths)
    }

    fn assemble(commands: Vec<Command>, sub_paths: Vec<Range<usize>>) -> Self {
        let length = commands
            .iter()
            .map(|cmd| cmd.length(LENGTH_SAMPLES))
            .sum();
        let path_string = commands
            .iter()
            .map(Command::to_path_string)
            .collect::<Vec<_>>()
            .join(" ");
        Self {
            commands,
            sub_paths,
            length,
            path_string,
        }
    }

    pub fn empty() -> Self {
        Self {
            commands: Vec::new(),
            sub_paths: Vec::new(),
            length: 0.0,
            path_string: String::new(),
        }
    }

    /// Parses path-string text. Relative commands are converted to absolute.
    pub fn parse(s: &str) -> ShapeshiftResult<Self> {
        crate::path::parse::parse_path(s)
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn sub_path_count(&self) -> usize {
        self.sub_paths.len()
    }

    pub fn sub_paths(&self) -> impl ExactSizeIterator<Item = SubPath<'_>> + '_ {
        self.sub_paths.iter().map(|r| SubPath {
            commands: &self.commands[r.clone()],
        })
    }

    pub fn sub_path(&self, index: usize) -> Option<SubPath<'_>> {
        self.sub_paths.get(index).map(|r| SubPath {
            commands: &self.commands[r.clone()],
        })
    }

    pub fn command(&self, sub_path_index: usize, command_index: usize) -> Option<&Command> {
        self.sub_path(sub_path_index)?
            .commands()
            .get(command_index)
    }

    /// Total arc length over every command.
    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn to_path_string(&self) -> &str {
        &self.path_string
    }

    pub fn has_closed_sub_path(&self) -> bool {
        self.sub_paths().any(|s| s.is_closed())
    }

    pub fn has_split_command(&self) -> bool {
        self.commands.iter().any(Command::is_split)
    }

    /// Returns a new path with one command replaced by `replacement`.
    pub(crate) fn replace_command(
        &self,
        sub_path_index: usize,
        command_index: usize,
        replacement: Vec<Command>,
    ) -> ShapeshiftResult<Self> {
        let range = self.sub_paths.get(sub_path_index).ok_or_else(|| {
            ShapeshiftError::malformed_path(format!("no sub-path at index {sub_path_index}"))
        })?;
        if command_index >= range.len() {
            return Err(ShapeshiftError::malformed_path(format!(
                "no command at index {command_index} in sub-path {sub_path_index}"
            )));
        }
        let flat = range.start + command_index;
        let mut commands = Vec::with_capacity(self.commands.len() + replacement.len());
        commands.extend_from_slice(&self.commands[..flat]);
        commands.extend(replacement);
        commands.extend_from_slice(&self.commands[flat + 1..]);
        Self::new(commands)
    }
}

fn validate(commands: &[Command]) -> ShapeshiftResult<Vec<Range<usize>>> {
    let mut ranges: Vec<Range<usize>> = Vec::new();
    let mut sub_start = 0usize;
    for (i, cmd) in commands.iter().enumerate() {
        if cmd.kind() == CommandKind::MoveTo {
            if cmd.start().is_some() {
                return Err(ShapeshiftError::malformed_path(format!(
                    "MoveTo at command {i} must not have a start point"
                )));
            }
            if i > 0 {
                ranges.push(sub_start..i);
            }
            sub_start = i;
            continue;
        }

        if i == 0 {
            return Err(ShapeshiftError::malformed_path(format!(
                "path must begin with MoveTo, found {:?}",
                cmd.kind()
            )));
        }
        let prev = &commands[i - 1];
        if prev.kind() == CommandKind::ClosePath {
            return Err(ShapeshiftError::malformed_path(format!(
                "command {i} follows ClosePath without a MoveTo"
            )));
        }
        match cmd.start() {
            Some(start) if points_close(start, prev.end()) => {}
            Some(start) => {
                return Err(ShapeshiftError::malformed_path(format!(
                    "command {i} starts at ({}, {}) but previous command ends at ({}, {})",
                    start.x,
                    start.y,
                    prev.end().x,
                    prev.end().y
                )));
            }
            None => {
                return Err(ShapeshiftError::malformed_path(format!(
                    "command {i} ({:?}) has no start point",
                    cmd.kind()
                )));
            }
        }
        if cmd.kind() == CommandKind::ClosePath {
            let move_point = commands[sub_start].end();
            if !points_close(cmd.end(), move_point) {
                return Err(ShapeshiftError::malformed_path(format!(
                    "ClosePath at command {i} must end on its sub-path's MoveTo point"
                )));
            }
        }
    }
    if !commands.is_empty() {
        ranges.push(sub_start..commands.len());
    }
    Ok(ranges)
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.commands == other.commands
    }
}

impl Default for Path {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path_string)
    }
}

impl FromStr for Path {
    type Err = ShapeshiftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for Path {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.path_string)
    }
}

impl<'de> serde::Deserialize<'de> for Path {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/model.rs"]
mod tests;
