use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct ProgressBarWidget;

impl ProgressBarWidget {
    /// Fixed one-row bar across the top of the screen
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let filled = app.progress.bar_width(area.width).min(area.width);
        let line = Line::from(vec![
            Span::styled(
                "━".repeat(filled as usize),
                Style::default().fg(app.theme.progress).bg(app.theme.bg1),
            ),
            Span::styled(
                "─".repeat((area.width - filled) as usize),
                Style::default().fg(app.theme.bg2).bg(app.theme.bg1),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}
