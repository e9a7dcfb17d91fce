/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Parse `#RRGGBB` into its components.
pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let h = hex.strip_prefix('#')?;
    if h.len() != 6 || !h.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&h[0..2], 16).ok()?;
    let g = u8::from_str_radix(&h[2..4], 16).ok()?;
    let b = u8::from_str_radix(&h[4..6], 16).ok()?;
    Some((r, g, b))
}

/// 24-bit background escape for a `#RRGGBB` color; empty when unparseable.
pub fn bg_hex(hex: &str) -> String {
    match parse_hex(hex) {
        Some((r, g, b)) => format!("\x1b[48;2;{r};{g};{b}m"),
        None => String::new(),
    }
}

/// 24-bit foreground escape for a `#RRGGBB` color; empty when unparseable.
pub fn fg_hex(hex: &str) -> String {
    match parse_hex(hex) {
        Some((r, g, b)) => format!("\x1b[38;2;{r};{g};{b}m"),
        None => String::new(),
    }
}

/// Paint `text` on `bg` with a readable foreground.
pub fn paint_on(text: &str, bg: &str) -> String {
    let fg = super::formatting::text_color_for_bg(bg);
    format!("{}{}{}{}", bg_hex(bg), fg_hex(fg), text, RESET)
}

/// INR color: red outside the range, green inside.
pub fn color_for_inr(in_range: bool) -> &'static str {
    if in_range { GREEN } else { RED }
}
