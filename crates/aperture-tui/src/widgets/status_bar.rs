use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let mode_str = if app.lightbox.is_open() {
            "LIGHTBOX"
        } else if app.compare.is_dragging() {
            "DRAG"
        } else {
            "SHOWCASE"
        };

        let revealed = app
            .sections
            .iter()
            .filter(|s| s.reveal.state().is_visible())
            .count();

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {} | {}", mode_str, msg)
        } else {
            format!(
                " {} | {:>3.0}% | revealed {}/{} | split {:.0}%",
                mode_str,
                app.progress.progress(),
                revealed,
                app.sections.len(),
                app.compare.ratio()
            )
        };

        let help_hint = if app.lightbox.is_open() {
            " n/p:photo q:close "
        } else {
            " q:quit j/k:scroll ←/→:slider Tab:photo t:headlines "
        };
        let padding_len = (area.width as usize)
            .saturating_sub(status_text.width() + help_hint.width());

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(theme.fg0).bg(theme.bg2)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.grey1).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
