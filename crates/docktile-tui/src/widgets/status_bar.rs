use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;

/// One-line footer: input mode, key hints, and a right-aligned message.
pub struct StatusBarWidget<'a> {
    pub mode: &'a str,
    pub view: &'a str,
    pub hints: &'a [(String, String)],
    pub message: Option<&'a str>,
    pub is_error: bool,
    pub theme: &'a Theme,
}

impl<'a> StatusBarWidget<'a> {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let t = self.theme;
        let bar_bg = t.status_bar.bg.unwrap_or(Color::Reset);
        let bar_fg = t.status_bar.fg.unwrap_or(Color::Reset);
        let sep = t.text_dim.bg(bar_bg);
        let mut spans = Vec::new();

        spans.push(Span::styled(
            format!(" {} ", self.mode.to_uppercase()),
            Style::default().fg(bar_bg).bg(t.accent).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!(" {} ", self.view), Style::default().fg(t.accent).bg(bar_bg)));

        for (key, desc) in self.hints {
            spans.push(Span::styled(" │ ", sep));
            spans.push(Span::styled(format!("<{key}>"), Style::default().fg(t.accent).bg(bar_bg)));
            spans.push(Span::styled(format!(" {desc}"), Style::default().fg(bar_fg).bg(bar_bg)));
        }

        let left_used: u16 = spans.iter().map(|s| s.width() as u16).sum();
        if let Some(message) = self.message {
            let style = if self.is_error {
                t.status_failed.bg(bar_bg)
            } else {
                Style::default().fg(bar_fg).bg(bar_bg).add_modifier(Modifier::DIM)
            };
            let room = area.width.saturating_sub(left_used + 1) as usize;
            let text = truncate(message, room);
            let fill = area.width.saturating_sub(left_used + text.width() as u16 + 1);
            spans.push(Span::styled(" ".repeat(fill as usize), Style::default().bg(bar_bg)));
            spans.push(Span::styled(format!("{text} "), style));
        }

        let bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(bar_bg));
        frame.render_widget(bar, area);
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    crate::layout::fit(s, max).trim_end().to_string()
}
