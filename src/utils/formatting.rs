//! Formatting utilities used for CLI and export outputs.

use super::colors::parse_hex;
use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn strike(s: &str) -> String {
    format!("\x1b[9m{}\x1b[0m", s)
}

/// Pad on display width, so emoji and `km²` line up.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

pub fn center(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    let total = width.saturating_sub(w);
    let left = total / 2;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(total - left))
}

/// Black or white text, whichever reads better on `bg`.
/// Non-hex input falls back to black.
pub fn text_color_for_bg(bg: &str) -> &'static str {
    match parse_hex(bg) {
        Some((r, g, b)) => {
            let luminance = (0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64) / 255.0;
            if luminance > 0.5 { "#000000" } else { "#FFFFFF" }
        }
        None => "#000000",
    }
}

/// Capitalize the first character (`"light rain"` → `"Light rain"`).
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Wrap a paragraph and indent every line.
pub fn wrap_indented(text: &str, width: usize, indent: &str) -> String {
    let opts = textwrap::Options::new(width)
        .initial_indent(indent)
        .subsequent_indent(indent);
    textwrap::fill(text, opts)
}

/// Horizontal bar of `value / max * width` cells.
pub fn bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let cells = ((value / max) * width as f64).round() as usize;
    "■".repeat(cells.min(width))
}
