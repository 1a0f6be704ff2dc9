//! Permissive tokenizer for curve-command text.
//!
//! Anything outside the command alphabet and number syntax is skipped:
//! separators, stray letters, unreadable numbers. Numbers written before
//! the first command letter have nowhere to go and are dropped.

use super::{CommandKind, PathCommand};
use tracing::trace;

/// Parses command text into commands with their flat argument lists.
pub fn parse_path_data(data: &str) -> Vec<PathCommand> {
    let bytes = data.as_bytes();
    let mut commands = Vec::new();
    let mut current: Option<PathCommand> = None;
    let mut i = 0usize;

    while i < bytes.len() {
        let b = bytes[i];

        if let Some((kind, relative)) = CommandKind::from_letter(char::from(b)) {
            if let Some(cmd) = current.take() {
                commands.push(cmd);
            }
            current = Some(PathCommand::new(kind, relative, Vec::new()));
            i += 1;
            continue;
        }

        if !is_number_start(b) {
            i += 1;
            continue;
        }

        // Arc flags are single digits and may be packed without separators.
        if let Some(cmd) = current.as_mut() {
            if cmd.kind == CommandKind::ArcTo
                && matches!(cmd.args.len() % 7, 3 | 4)
                && matches!(b, b'0' | b'1')
            {
                cmd.args.push(f64::from(b - b'0'));
                i += 1;
                continue;
            }
        }

        match scan_number(bytes, i) {
            Some((value, next)) => {
                match current.as_mut() {
                    Some(cmd) if value.is_finite() => cmd.args.push(value),
                    Some(_) => trace!("dropping non-finite number at offset {}", i),
                    None => trace!("dropping number before first command at offset {}", i),
                }
                i = next;
            }
            None => i += 1,
        }
    }

    if let Some(cmd) = current {
        commands.push(cmd);
    }

    commands
}

fn is_number_start(b: u8) -> bool {
    b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.')
}

/// Reads `[sign] digits [. digits] [(e|E) [sign] digits]` starting at `start`.
///
/// Returns the value and the offset just past it, or `None` when no digit
/// was found. An exponent marker without digits is not consumed.
fn scan_number(bytes: &[u8], start: usize) -> Option<(f64, usize)> {
    let len = bytes.len();
    let mut i = start;

    if i < len && matches!(bytes[i], b'+' | b'-') {
        i += 1;
    }

    let int_start = i;
    while i < len && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < len && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < len && bytes[i].is_ascii_digit() {
            i += 1;
        }
        digits += i - frac_start;
    }

    if digits == 0 {
        return None;
    }

    if i < len && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < len && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    let text = std::str::from_utf8(&bytes[start..i]).ok()?;
    text.parse::<f64>().ok().map(|value| (value, i))
}
