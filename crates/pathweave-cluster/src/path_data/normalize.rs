//! Rewrites command sequences into absolute, explicit, single-group form.
//!
//! Output uses only `M`, `L`, `C`, `Q`, `A` and `Z`, one parameter group per
//! command. Horizontal/vertical lines become `L`; smooth curves become full
//! curves with the reflected control point made explicit.

use super::{CommandKind, Cursor, PathCommand};
use pathweave_core::Point;

#[derive(Default)]
struct Normalizer {
    cursor: Cursor,
    /// Second control point of the previous cubic, for `S`
    last_cubic_ctrl: Option<Point>,
    /// Control point of the previous quadratic, for `T`
    last_quad_ctrl: Option<Point>,
    out: Vec<PathCommand>,
}

impl Normalizer {
    fn emit(&mut self, kind: CommandKind, args: Vec<f64>) {
        self.out.push(PathCommand::absolute(kind, args));
    }

    fn point(&self, relative: bool, x: f64, y: f64) -> Point {
        self.cursor.resolve(relative, x, y)
    }

    fn push_command(&mut self, command: &PathCommand) {
        let rel = command.relative;

        if command.kind == CommandKind::ClosePath {
            self.emit(CommandKind::ClosePath, Vec::new());
            self.cursor = self.cursor.close();
            self.last_cubic_ctrl = None;
            self.last_quad_ctrl = None;
            return;
        }

        for (index, g) in command.groups().enumerate() {
            let target = self.cursor.group_target(command, g);
            let mut cubic_ctrl = None;
            let mut quad_ctrl = None;

            match command.kind {
                CommandKind::MoveTo if index == 0 => {
                    self.emit(CommandKind::MoveTo, vec![target.x, target.y]);
                    self.cursor = self.cursor.move_to(target);
                    self.last_cubic_ctrl = None;
                    self.last_quad_ctrl = None;
                    continue;
                }
                CommandKind::MoveTo
                | CommandKind::LineTo
                | CommandKind::HorizontalLineTo
                | CommandKind::VerticalLineTo => {
                    self.emit(CommandKind::LineTo, vec![target.x, target.y]);
                }
                CommandKind::CubicTo => {
                    let c1 = self.point(rel, g[0], g[1]);
                    let c2 = self.point(rel, g[2], g[3]);
                    self.emit(
                        CommandKind::CubicTo,
                        vec![c1.x, c1.y, c2.x, c2.y, target.x, target.y],
                    );
                    cubic_ctrl = Some(c2);
                }
                CommandKind::SmoothCubicTo => {
                    let current = self.cursor.current;
                    let c1 = self
                        .last_cubic_ctrl
                        .map(|c| c.reflect_about(&current))
                        .unwrap_or(current);
                    let c2 = self.point(rel, g[0], g[1]);
                    self.emit(
                        CommandKind::CubicTo,
                        vec![c1.x, c1.y, c2.x, c2.y, target.x, target.y],
                    );
                    cubic_ctrl = Some(c2);
                }
                CommandKind::QuadraticTo => {
                    let c = self.point(rel, g[0], g[1]);
                    self.emit(CommandKind::QuadraticTo, vec![c.x, c.y, target.x, target.y]);
                    quad_ctrl = Some(c);
                }
                CommandKind::SmoothQuadraticTo => {
                    let current = self.cursor.current;
                    let c = self
                        .last_quad_ctrl
                        .map(|c| c.reflect_about(&current))
                        .unwrap_or(current);
                    self.emit(CommandKind::QuadraticTo, vec![c.x, c.y, target.x, target.y]);
                    quad_ctrl = Some(c);
                }
                CommandKind::ArcTo => {
                    self.emit(
                        CommandKind::ArcTo,
                        vec![g[0], g[1], g[2], g[3], g[4], target.x, target.y],
                    );
                }
                CommandKind::ClosePath => unreachable!("close-path has no parameter groups"),
            }

            self.cursor = self.cursor.draw_to(target);
            self.last_cubic_ctrl = cubic_ctrl;
            self.last_quad_ctrl = quad_ctrl;
        }
    }
}

/// Normalizes a command sequence; endpoints are preserved exactly.
pub fn normalize(commands: &[PathCommand]) -> Vec<PathCommand> {
    let mut normalizer = Normalizer::default();
    for command in commands {
        normalizer.push_command(command);
    }
    normalizer.out
}
