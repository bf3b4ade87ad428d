pub mod app;
pub mod event;
pub mod input;
pub mod page;
pub mod picture;
pub mod scroll;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use theme::Theme;

use std::time::Instant;

use ratatui::{style::Style, widgets::Block, Frame};

/// Draw one frame of the showcase
pub fn draw(frame: &mut Frame, app: &App, now: Instant) {
    let (progress_area, content_area, status_area) = app::screen_layout(frame.area());

    frame.render_widget(
        Block::default().style(Style::default().bg(app.theme.bg0)),
        content_area,
    );
    widgets::ProgressBarWidget::render(frame, progress_area, app);
    widgets::render_document(frame, content_area, app, now);
    widgets::StatusBarWidget::render(frame, status_area, app);
    widgets::LightboxWidget::render(frame, app);
}
