//! Endpoint replay over a command sequence.
//!
//! Replay is a left-to-right fold carrying a [`Cursor`]: the current point,
//! the start of the current subpath, and the first point ever assigned by a
//! move command.

use super::{CommandKind, PathCommand};
use pathweave_core::Point;

/// Replay state after some prefix of a command sequence.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cursor {
    pub current: Point,
    pub subpath_start: Point,
    /// First point set by a move command, if one has run
    pub first: Option<Point>,
}

impl Cursor {
    /// Resolves a coordinate pair against the current point when relative.
    pub fn resolve(&self, relative: bool, x: f64, y: f64) -> Point {
        if relative {
            Point::new(self.current.x + x, self.current.y + y)
        } else {
            Point::new(x, y)
        }
    }

    /// Starts a new subpath at `to`.
    pub fn move_to(self, to: Point) -> Cursor {
        Cursor {
            current: to,
            subpath_start: to,
            first: self.first.or(Some(to)),
        }
    }

    /// Moves the current point without touching the subpath start.
    pub fn draw_to(self, to: Point) -> Cursor {
        Cursor { current: to, ..self }
    }

    /// Returns the current point to the subpath start.
    pub fn close(self) -> Cursor {
        Cursor {
            current: self.subpath_start,
            ..self
        }
    }

    /// Target point of one parameter group of `command`.
    pub fn group_target(&self, command: &PathCommand, group: &[f64]) -> Point {
        match command.kind {
            CommandKind::HorizontalLineTo => {
                let x = if command.relative {
                    self.current.x + group[0]
                } else {
                    group[0]
                };
                Point::new(x, self.current.y)
            }
            CommandKind::VerticalLineTo => {
                let y = if command.relative {
                    self.current.y + group[0]
                } else {
                    group[0]
                };
                Point::new(self.current.x, y)
            }
            _ => {
                let n = group.len();
                self.resolve(command.relative, group[n - 2], group[n - 1])
            }
        }
    }

    /// Executes one command.
    ///
    /// Extra coordinate pairs after a move are implicit line-draws.
    pub fn advance(self, command: &PathCommand) -> Cursor {
        if command.kind == CommandKind::ClosePath {
            return self.close();
        }

        command
            .groups()
            .enumerate()
            .fold(self, |cursor, (index, group)| {
                let target = cursor.group_target(command, group);
                if command.kind == CommandKind::MoveTo && index == 0 {
                    cursor.move_to(target)
                } else {
                    cursor.draw_to(target)
                }
            })
    }
}

/// Replays a whole sequence from the origin.
pub fn replay(commands: &[PathCommand]) -> Cursor {
    commands.iter().fold(Cursor::default(), Cursor::advance)
}

/// First and last point visited, or `None` if no move command ever ran.
pub fn extract_endpoints(commands: &[PathCommand]) -> Option<(Point, Point)> {
    let cursor = replay(commands);
    cursor.first.map(|start| (start, cursor.current))
}
