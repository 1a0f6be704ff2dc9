//! Stroke colour normalization.
//!
//! Known forms become uppercase `#RRGGBB`:
//! `rgb(x%, y%, z%)`, `rgb(r, g, b)`, `#rgb`, `#rrggbb`, and the names
//! `white` and `black`. Anything else is returned trimmed but unchanged.

/// White as produced by [`normalize_color`].
pub const WHITE: &str = "#FFFFFF";

fn hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

/// Percent channel, truncated like `int(p * 255 / 100)`.
fn percent_channel(text: &str) -> Option<u8> {
    let value: f64 = text.strip_suffix('%')?.trim().parse().ok()?;
    if !(0.0..=100.0).contains(&value) {
        return None;
    }
    Some((value * 255.0 / 100.0) as u8)
}

fn integer_channel(text: &str) -> Option<u8> {
    let value: f64 = text.parse().ok()?;
    if !(0.0..=255.0).contains(&value) {
        return None;
    }
    Some(value.round() as u8)
}

fn parse_rgb_function(color: &str) -> Option<String> {
    let inner = color
        .strip_prefix("rgb(")
        .or_else(|| color.strip_prefix("RGB("))?
        .strip_suffix(')')?;
    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return None;
    }

    let percent = parts.iter().all(|p| p.ends_with('%'));
    let channels: Option<Vec<u8>> = if percent {
        parts.iter().map(|p| percent_channel(p)).collect()
    } else {
        parts.iter().map(|p| integer_channel(p)).collect()
    };
    channels.map(|c| hex(c[0], c[1], c[2]))
}

fn parse_hex(color: &str) -> Option<String> {
    let digits = color.strip_prefix('#')?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match digits.len() {
        6 => Some(format!("#{}", digits.to_ascii_uppercase())),
        3 => {
            let expanded: String = digits
                .chars()
                .flat_map(|c| [c, c])
                .collect::<String>()
                .to_ascii_uppercase();
            Some(format!("#{expanded}"))
        }
        _ => None,
    }
}

/// Normalizes a stroke colour.
pub fn normalize_color(color: &str) -> String {
    let color = color.trim();
    if let Some(normalized) = parse_rgb_function(color).or_else(|| parse_hex(color)) {
        return normalized;
    }
    match color.to_ascii_lowercase().as_str() {
        "white" => WHITE.to_string(),
        "black" => hex(0, 0, 0),
        _ => color.to_string(),
    }
}

/// True for strokes that normalize to white (background halos).
pub fn is_white(color: &str) -> bool {
    normalize_color(color) == WHITE
}
