//! Command reversal and chain merging.
//!
//! Reversal works on normalized commands only (absolute `M`/`L`/`C`/`Q`/`A`/`Z`,
//! see [`normalize`]). Anything else is rejected with
//! [`PathDataError::UnsupportedReversal`] rather than dropped.

use crate::path_data::{
    format_commands, normalize, parse_path_data, CommandKind, Cursor, PathCommand,
};
use pathweave_core::{PathDataError, PathSegment, Point};

/// One drawing element of a subpath, with the point it starts from.
#[derive(Debug, Clone)]
struct Element {
    kind: CommandKind,
    /// Arguments without the target coordinates
    params: Vec<f64>,
    from: Point,
}

#[derive(Debug, Clone)]
struct Subpath {
    /// Where the reversed subpath begins
    end: Point,
    elements: Vec<Element>,
}

impl Subpath {
    fn at(point: Point) -> Self {
        Self {
            end: point,
            elements: Vec::new(),
        }
    }
}

fn ensure_reversible(command: &PathCommand) -> Result<(), PathDataError> {
    let supported = matches!(
        command.kind,
        CommandKind::MoveTo
            | CommandKind::LineTo
            | CommandKind::CubicTo
            | CommandKind::QuadraticTo
            | CommandKind::ArcTo
            | CommandKind::ClosePath
    );
    if supported && !command.relative {
        Ok(())
    } else {
        Err(PathDataError::UnsupportedReversal {
            command: command.letter(),
        })
    }
}

/// Splits normalized commands into subpaths.
///
/// A drawing command after a close-path opens an implicit subpath at the
/// closed subpath's start.
fn split_subpaths(commands: &[PathCommand]) -> Result<Vec<Subpath>, PathDataError> {
    let mut subpaths: Vec<Subpath> = Vec::new();
    let mut open = false;
    let mut current = Point::default();
    let mut subpath_start = Point::default();

    for command in commands {
        ensure_reversible(command)?;

        if command.kind == CommandKind::ClosePath {
            if !open {
                subpaths.push(Subpath::at(current));
            }
            if let Some(subpath) = subpaths.last_mut() {
                subpath.elements.push(Element {
                    kind: CommandKind::ClosePath,
                    params: Vec::new(),
                    from: current,
                });
                subpath.end = subpath_start;
            }
            current = subpath_start;
            open = false;
            continue;
        }

        for (index, group) in command.groups().enumerate() {
            let n = group.len();
            let target = Point::new(group[n - 2], group[n - 1]);

            if command.kind == CommandKind::MoveTo && index == 0 {
                subpaths.push(Subpath::at(target));
                subpath_start = target;
                current = target;
                open = true;
                continue;
            }

            if !open {
                subpaths.push(Subpath::at(current));
                subpath_start = current;
                open = true;
            }

            let kind = match command.kind {
                CommandKind::MoveTo => CommandKind::LineTo,
                other => other,
            };
            if let Some(subpath) = subpaths.last_mut() {
                subpath.elements.push(Element {
                    kind,
                    params: group[..n - 2].to_vec(),
                    from: current,
                });
                subpath.end = target;
            }
            current = target;
        }
    }

    Ok(subpaths)
}

fn reverse_element(element: &Element) -> PathCommand {
    let to = element.from;
    let p = &element.params;
    match element.kind {
        CommandKind::CubicTo => {
            PathCommand::absolute(CommandKind::CubicTo, vec![p[2], p[3], p[0], p[1], to.x, to.y])
        }
        CommandKind::QuadraticTo => {
            PathCommand::absolute(CommandKind::QuadraticTo, vec![p[0], p[1], to.x, to.y])
        }
        CommandKind::ArcTo => {
            let sweep = if p[4] != 0.0 { 0.0 } else { 1.0 };
            PathCommand::absolute(CommandKind::ArcTo, vec![p[0], p[1], p[2], p[3], sweep, to.x, to.y])
        }
        // Lines, and close-path which becomes an explicit line back
        _ => PathCommand::absolute(CommandKind::LineTo, vec![to.x, to.y]),
    }
}

/// Reverses normalized commands so they draw from the old end to the old start.
///
/// Subpath order is reversed and each subpath is rewritten backwards,
/// starting with its own move command:
/// - lines swap their ends
/// - cubics swap their two control points
/// - quadratics keep their control point
/// - arcs keep radii, rotation and the large-arc flag and flip the sweep flag
/// - close-path becomes a line back to the point before the close
pub fn reverse_commands(commands: &[PathCommand]) -> Result<Vec<PathCommand>, PathDataError> {
    let subpaths = split_subpaths(commands)?;
    let mut out = Vec::with_capacity(commands.len() + subpaths.len());

    for subpath in subpaths.iter().rev() {
        out.push(PathCommand::absolute(
            CommandKind::MoveTo,
            vec![subpath.end.x, subpath.end.y],
        ));
        out.extend(subpath.elements.iter().rev().map(reverse_element));
    }

    Ok(out)
}

/// Parses, normalizes and reverses command text.
pub fn reverse_path_data(d: &str) -> Result<Vec<PathCommand>, PathDataError> {
    reverse_commands(&normalize(&parse_path_data(d)))
}

/// Drops the leading move command; extra pairs it carried stay as lines.
pub fn strip_leading_move(mut commands: Vec<PathCommand>) -> Vec<PathCommand> {
    match commands.first() {
        Some(first) if first.kind == CommandKind::MoveTo => {
            let first = commands.remove(0);
            let arity = CommandKind::MoveTo.arity();
            if first.args.len() >= 2 * arity {
                commands.insert(
                    0,
                    PathCommand::new(CommandKind::LineTo, first.relative, first.args[arity..].to_vec()),
                );
            }
            commands
        }
        _ => commands,
    }
}

/// Replaces each close-path with a line to its subpath start.
///
/// Once a segment's leading move is stripped its subpath start belongs to an
/// earlier segment, so a close-path would return to the wrong point.
pub fn close_explicitly(commands: &[PathCommand]) -> Vec<PathCommand> {
    let mut cursor = Cursor::default();
    commands
        .iter()
        .map(|command| {
            let out = if command.kind == CommandKind::ClosePath {
                let to = cursor.subpath_start;
                PathCommand::absolute(CommandKind::LineTo, vec![to.x, to.y])
            } else {
                command.clone()
            };
            cursor = cursor.advance(command);
            out
        })
        .collect()
}

/// Normalized commands of one segment in the requested direction.
pub fn oriented_commands(
    segment: &PathSegment,
    reversed: bool,
) -> Result<Vec<PathCommand>, PathDataError> {
    let commands = normalize(&parse_path_data(&segment.d_attribute));
    if reversed {
        reverse_commands(&commands)
    } else {
        Ok(commands)
    }
}

/// Concatenates segments into one command sequence with a single leading move.
///
/// Every segment after the first loses its leading move and has its
/// close-paths made explicit.
pub fn merge_commands<'a>(
    steps: impl IntoIterator<Item = (&'a PathSegment, bool)>,
) -> Result<Vec<PathCommand>, PathDataError> {
    let mut merged = Vec::new();
    for (position, (segment, reversed)) in steps.into_iter().enumerate() {
        let commands = oriented_commands(segment, reversed)?;
        if position == 0 {
            merged.extend(commands);
        } else {
            merged.extend(strip_leading_move(close_explicitly(&commands)));
        }
    }
    Ok(merged)
}

/// Merged command text of a chain, numbers in shortest round-trip form.
pub fn merge_segments<'a>(
    steps: impl IntoIterator<Item = (&'a PathSegment, bool)>,
) -> Result<String, PathDataError> {
    merge_commands(steps).map(|commands| format_commands(&commands, None))
}
