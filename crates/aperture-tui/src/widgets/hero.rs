use std::time::{Duration, Instant};

use aperture_core::typewriter::cursor_visible;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::{blit, place, scratch};
use crate::app::App;
use crate::page::CellRect;

const CURSOR: &str = "▌";
const CURSOR_PERIOD: Duration = Duration::from_millis(1000);

pub struct HeroWidget;

impl HeroWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, cells: CellRect, now: Instant) {
        let Some(placement) = place(area, cells, app.scroll_row(), 0, 0) else {
            return;
        };
        let theme = &app.theme;
        let mut buf = scratch(cells.width, cells.height);

        let headline = app.typewriter.displayed_text();
        let cursor = if cursor_visible(now.saturating_duration_since(app.started), CURSOR_PERIOD) {
            CURSOR
        } else {
            " "
        };
        // Pad so the line does not shift while the caret blinks or text grows
        let longest = app
            .typewriter
            .texts()
            .iter()
            .map(|t| t.width())
            .max()
            .unwrap_or(0);
        let padding = " ".repeat(longest.saturating_sub(headline.width()));

        let lines = vec![
            Line::default(),
            Line::default(),
            Line::from(Span::styled(
                "A P E R T U R E",
                Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "photography studio",
                Style::default().fg(theme.grey1),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled(
                    headline.to_string(),
                    Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                ),
                Span::styled(cursor, Style::default().fg(theme.accent)),
                Span::raw(padding),
            ]),
            Line::default(),
            Line::default(),
            Line::from(Span::styled(
                "scroll  j/k  ·  drag the slider  ·  Enter opens the gallery",
                Style::default().fg(theme.grey0),
            )),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().bg(theme.bg0))
            .render(buf.area, &mut buf);
        blit(frame.buffer_mut(), &buf, placement);
    }
}
