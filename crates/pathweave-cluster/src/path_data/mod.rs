//! Curve-command parsing, replay, normalization, and formatting.
//!
//! Command text is tokenized into [`PathCommand`]s, one per command letter,
//! each carrying the flat argument list of every parameter group written
//! after that letter. Replay ([`replay`]) computes the points a command
//! sequence visits; normalization ([`normalize`]) rewrites a sequence into
//! absolute single-group `M`/`L`/`C`/`Q`/`A`/`Z` commands, which is the only
//! form the merger accepts.

mod format;
mod normalize;
mod replay;
mod tokenizer;

pub use format::{format_commands, format_number};
pub use normalize::normalize;
pub use replay::{extract_endpoints, replay, Cursor};
pub use tokenizer::parse_path_data;

use pathweave_core::{PathDataError, PathSegment, SegmentId, VisualAttrs};
use std::fmt;

/// Command alphabet of curve-command text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    MoveTo,
    LineTo,
    HorizontalLineTo,
    VerticalLineTo,
    CubicTo,
    SmoothCubicTo,
    QuadraticTo,
    SmoothQuadraticTo,
    ArcTo,
    ClosePath,
}

impl CommandKind {
    /// Maps a command letter to its kind and whether it is relative.
    pub fn from_letter(letter: char) -> Option<(CommandKind, bool)> {
        let kind = match letter.to_ascii_uppercase() {
            'M' => CommandKind::MoveTo,
            'L' => CommandKind::LineTo,
            'H' => CommandKind::HorizontalLineTo,
            'V' => CommandKind::VerticalLineTo,
            'C' => CommandKind::CubicTo,
            'S' => CommandKind::SmoothCubicTo,
            'Q' => CommandKind::QuadraticTo,
            'T' => CommandKind::SmoothQuadraticTo,
            'A' => CommandKind::ArcTo,
            'Z' => CommandKind::ClosePath,
            _ => return None,
        };
        Some((kind, letter.is_ascii_lowercase()))
    }

    /// Command letter, lowercase when relative.
    pub fn letter(self, relative: bool) -> char {
        let upper = match self {
            CommandKind::MoveTo => 'M',
            CommandKind::LineTo => 'L',
            CommandKind::HorizontalLineTo => 'H',
            CommandKind::VerticalLineTo => 'V',
            CommandKind::CubicTo => 'C',
            CommandKind::SmoothCubicTo => 'S',
            CommandKind::QuadraticTo => 'Q',
            CommandKind::SmoothQuadraticTo => 'T',
            CommandKind::ArcTo => 'A',
            CommandKind::ClosePath => 'Z',
        };
        if relative {
            upper.to_ascii_lowercase()
        } else {
            upper
        }
    }

    /// Number of arguments in one parameter group.
    pub fn arity(self) -> usize {
        match self {
            CommandKind::ClosePath => 0,
            CommandKind::HorizontalLineTo | CommandKind::VerticalLineTo => 1,
            CommandKind::MoveTo | CommandKind::LineTo | CommandKind::SmoothQuadraticTo => 2,
            CommandKind::SmoothCubicTo | CommandKind::QuadraticTo => 4,
            CommandKind::CubicTo => 6,
            CommandKind::ArcTo => 7,
        }
    }
}

/// One command letter and its arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct PathCommand {
    pub kind: CommandKind,
    pub relative: bool,
    pub args: Vec<f64>,
}

impl PathCommand {
    pub fn new(kind: CommandKind, relative: bool, args: Vec<f64>) -> Self {
        Self {
            kind,
            relative,
            args,
        }
    }

    /// Absolute command with the given arguments.
    pub fn absolute(kind: CommandKind, args: Vec<f64>) -> Self {
        Self::new(kind, false, args)
    }

    pub fn letter(&self) -> char {
        self.kind.letter(self.relative)
    }

    /// Complete parameter groups; a trailing partial group is ignored.
    pub fn groups(&self) -> std::slice::ChunksExact<'_, f64> {
        // chunks_exact panics on zero, close-path has no groups anyway
        let arity = self.kind.arity().max(1);
        let args: &[f64] = if self.kind.arity() == 0 {
            &[]
        } else {
            &self.args
        };
        args.chunks_exact(arity)
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_commands(std::slice::from_ref(self), None))
    }
}

/// True when the command text ends with an explicit close-path.
pub fn is_path_closed(d: &str) -> bool {
    d.trim_end().ends_with(['Z', 'z'])
}

/// Builds a segment from raw command text.
///
/// Fails with [`PathDataError::Empty`] when replay never reaches a move
/// command, so no endpoint exists.
pub fn build_segment(
    segment_id: SegmentId,
    d: &str,
    visual_attrs: VisualAttrs,
) -> Result<PathSegment, PathDataError> {
    let commands = parse_path_data(d);
    let (start, end) = extract_endpoints(&commands).ok_or_else(|| PathDataError::Empty {
        data: d.to_string(),
    })?;
    Ok(PathSegment::new(
        segment_id,
        start,
        end,
        d,
        visual_attrs,
        is_path_closed(d),
    ))
}
