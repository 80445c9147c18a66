use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

/// Colours and styles derived from the configured accent.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Accent colour.
    pub accent: Color,
    /// Toast body.
    pub toast_style: Style,
    /// Toast border, drawn in the accent colour.
    pub border_style: Style,
    /// Secondary text.
    pub dimmed_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new("Yellow")
    }
}

impl Theme {
    /// Builds a theme from a colour name or `#rrggbb` hex string.
    #[must_use]
    pub fn new(accent_color_str: &str) -> Self {
        Self::from_color(parse_color(accent_color_str))
    }

    /// Builds a theme around `accent`.
    #[must_use]
    pub fn from_color(accent: Color) -> Self {
        Self {
            accent,
            toast_style: Style::default()
                .fg(Color::White)
                .bg(Color::Indexed(236))
                .add_modifier(Modifier::BOLD),
            border_style: Style::default().fg(accent).bg(Color::Indexed(236)),
            dimmed_style: Style::default().fg(Color::DarkGray),
        }
    }
}

fn parse_color(s: &str) -> Color {
    if let Ok(c) = Color::from_str(s) {
        return c;
    }

    if s.starts_with('#')
        && let Some((r, g, b)) = parse_hex_color(s)
    {
        return Color::Rgb(r, g, b);
    }

    match s.to_lowercase().as_str() {
        "orange" => Color::Indexed(208),
        _ => Color::Yellow,
    }
}

fn parse_hex_color(s: &str) -> Option<(u8, u8, u8)> {
    let s = s.trim_start_matches('#');

    if !s.is_ascii() {
        return None;
    }

    match s.len() {
        6 => Some((
            u8::from_str_radix(&s[0..2], 16).ok()?,
            u8::from_str_radix(&s[2..4], 16).ok()?,
            u8::from_str_radix(&s[4..6], 16).ok()?,
        )),
        3 => {
            let channel = |i: usize| u8::from_str_radix(&s[i..=i].repeat(2), 16).ok();
            Some((channel(0)?, channel(1)?, channel(2)?))
        }
        _ => None,
    }
}
