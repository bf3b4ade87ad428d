use std::time::Instant;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
    Frame,
};

use super::{blit, place, scratch};
use crate::app::{App, SectionView};
use crate::page::{CellRect, CELL_HEIGHT, CELL_WIDTH, INSET};
use crate::theme::blend;

/// Below this the section is not drawn at all
const MIN_OPACITY: f64 = 0.02;

pub struct SectionWidget;

impl SectionWidget {
    /// Draw a text card with the section's current reveal style applied
    #[allow(clippy::too_many_arguments)]
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        app: &App,
        cells: CellRect,
        section: &SectionView,
        title: &str,
        body: &[&str],
        now: Instant,
    ) {
        let style = section.transition.sample(now);
        if style.opacity < MIN_OPACITY {
            return;
        }
        let theme = &app.theme;

        let base_width = cells.width.saturating_sub(2 * INSET);
        let width = ((base_width as f64 * style.scale).round() as u16).clamp(1, base_width.max(1));
        let card = CellRect {
            col: cells.col + INSET + (base_width - width.min(base_width)) / 2,
            row: cells.row,
            width,
            height: cells.height,
        };
        let dx = (style.translate_x / CELL_WIDTH).round() as i32;
        let dy = (style.translate_y / CELL_HEIGHT).round() as i32;
        let Some(placement) = place(area, card, app.scroll_row(), dx, dy) else {
            return;
        };

        let fg = blend(theme.bg0, theme.fg0, style.opacity);
        let muted = blend(theme.bg0, theme.fg1, style.opacity);
        let border = blend(theme.bg0, theme.border, style.opacity);
        let accent = blend(theme.bg0, theme.accent, style.opacity);

        let mut buf = scratch(card.width, card.height);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(Span::styled(
                format!(" {} ", title),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(theme.bg0));

        let mut lines = vec![Line::default()];
        lines.extend(
            body.iter()
                .map(|text| Line::from(Span::styled(*text, Style::default().fg(muted)))),
        );
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            section.reveal.variant().name(),
            Style::default().fg(fg).add_modifier(Modifier::ITALIC),
        )));

        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(buf.area, &mut buf);
        blit(frame.buffer_mut(), &buf, placement);
    }
}
