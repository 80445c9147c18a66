use crate::presentation::events::KeyHint;
use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Styles used by [`FooterBar`].
pub struct FooterBarStyle {
    /// Bar background.
    pub background: Style,
    /// Hint labels.
    pub label_style: Style,
    /// Key names.
    pub key_style: Style,
    /// Right-aligned info text.
    pub info: Style,
}

impl FooterBarStyle {
    /// Derives footer styles from the theme.
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            label_style: Style::default()
                .bg(theme.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            info: theme.dimmed_style,
            ..Self::default()
        }
    }
}

impl Default for FooterBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            label_style: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            key_style: Style::default().fg(Color::White).bg(Color::DarkGray),
            info: Style::default().fg(Color::DarkGray),
        }
    }
}

/// Single-line bar listing key hints.
pub struct FooterBar<'a> {
    hints: &'a [KeyHint],
    right_info: Option<&'a str>,
    style: FooterBarStyle,
}

impl<'a> FooterBar<'a> {
    /// Creates a bar showing `hints`.
    #[must_use]
    pub fn new(hints: &'a [KeyHint]) -> Self {
        Self {
            hints,
            right_info: None,
            style: FooterBarStyle::default(),
        }
    }

    /// Sets the right-aligned info text.
    #[must_use]
    pub const fn right_info(mut self, info: Option<&'a str>) -> Self {
        self.right_info = info;
        self
    }

    /// Overrides the styles.
    #[must_use]
    pub fn style(mut self, style: FooterBarStyle) -> Self {
        self.style = style;
        self
    }

    fn build_left_spans(&self) -> Vec<Span<'_>> {
        let mut spans = Vec::new();

        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(
                format!(" {} ", hint.label),
                self.style.label_style,
            ));
            spans.push(Span::styled(format!(" {} ", hint.key), self.style.key_style));
        }

        spans
    }
}

impl Widget for FooterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        let right_width = self
            .right_info
            .map_or(0, |s| u16::try_from(s.width()).unwrap_or(u16::MAX));
        let left_width = area.width.saturating_sub(right_width.saturating_add(1));

        let left_area = Rect::new(area.x, area.y, left_width, 1);
        Paragraph::new(Line::from(self.build_left_spans())).render(left_area, buf);

        if let Some(info) = self.right_info
            && right_width < area.width
        {
            let right_area = Rect::new(
                area.right().saturating_sub(right_width),
                area.y,
                right_width,
                1,
            );
            Paragraph::new(Line::from(Span::styled(info, self.style.info))).render(right_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::events::KEY_HINTS;

    #[test]
    fn test_renders_hints_and_info() {
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);

        FooterBar::new(KEY_HINTS)
            .right_info(Some("visible"))
            .render(area, &mut buf);

        let line: String = (0..80).map(|x| buf[(x, 0)].symbol()).collect();
        assert!(line.starts_with(" TOP  t "));
        assert!(line.trim_end().ends_with("visible"));
    }
}
