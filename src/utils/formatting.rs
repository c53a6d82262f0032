//! Formatting utilities used for CLI and export outputs.

use regex::Regex;
use std::sync::OnceLock;
use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Strip ANSI escape sequences, for width computation and log files.
pub fn strip_ansi(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap());
    re.replace_all(s, "").to_string()
}

/// Display width of a cell: ANSI-free, unicode-aware (the inspection point
/// names contain umlauts).
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

/// Pad to `width` display cells, accounting for ANSI escapes.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = visible_width(s);
    let fill = width.saturating_sub(w);
    format!("{}{}", s, " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_ansi_sequences() {
        assert_eq!(strip_ansi("\x1b[32mok\x1b[0m"), "ok");
        assert_eq!(strip_ansi("plain"), "plain");
    }

    #[test]
    fn width_ignores_ansi() {
        assert_eq!(visible_width("\x1b[31mrot\x1b[0m"), 3);
        assert_eq!(visible_width("Testliner weiß"), 14);
    }

    #[test]
    fn pads_colored_cells_correctly() {
        let padded = pad_right("\x1b[32mok\x1b[0m", 5);
        assert_eq!(visible_width(&padded), 5);
    }
}
