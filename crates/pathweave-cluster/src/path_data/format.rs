//! Command text rendering.

use super::PathCommand;

/// Renders one number.
///
/// `None` gives the shortest text that parses back to the same value;
/// `Some(p)` rounds to `p` decimals and trims trailing zeros. Negative zero
/// is written as `0`.
pub fn format_number(value: f64, precision: Option<usize>) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    match precision {
        None => format!("{}", value),
        Some(p) => {
            let mut text = format!("{:.*}", p, value);
            if text.contains('.') {
                let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
                text.truncate(trimmed);
            }
            if text == "-0" {
                text = "0".to_string();
            }
            text
        }
    }
}

/// Renders commands as `<letter> <arg> <arg> ...` joined by single spaces.
pub fn format_commands(commands: &[PathCommand], precision: Option<usize>) -> String {
    let mut out = String::new();
    for command in commands {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push(command.letter());
        for arg in &command.args {
            out.push(' ');
            out.push_str(&format_number(*arg, precision));
        }
    }
    out
}
