/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Parse `#rgb` or `#rrggbb` (leading `#` optional) into RGB components.
pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let h = hex.trim().trim_start_matches('#');
    if !h.is_ascii() {
        return None;
    }
    match h.len() {
        3 => {
            let mut it = h.chars();
            let r = it.next()?.to_digit(16)? as u8;
            let g = it.next()?.to_digit(16)? as u8;
            let b = it.next()?.to_digit(16)? as u8;
            Some((r * 17, g * 17, b * 17))
        }
        6 => {
            let r = u8::from_str_radix(&h[0..2], 16).ok()?;
            let g = u8::from_str_radix(&h[2..4], 16).ok()?;
            let b = u8::from_str_radix(&h[4..6], 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}

/// Render a solid color block of `width` cells using a 24-bit background.
/// Unparseable colors render as an uncolored block.
pub fn swatch(hex: &str, width: usize) -> String {
    match parse_hex(hex) {
        Some((r, g, b)) => format!("\x1b[48;2;{r};{g};{b}m{:width$}{RESET}", "", width = width),
        None => format!("{:width$}", "", width = width),
    }
}

/// Status color for display only; the label itself stays opaque text.
pub fn color_for_status(status: &str) -> &'static str {
    match status {
        "approved" => GREEN,
        "rejected" => RED,
        "pending" => YELLOW,
        _ => RESET,
    }
}
