use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use super::{blit, place, scratch};
use crate::app::App;
use crate::page::{CellRect, INSET};
use crate::picture::{paint, sample, Grade};

pub struct GalleryWidget;

impl GalleryWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, cells: CellRect) {
        let Some(placement) = place(area, cells, app.scroll_row(), 0, 0) else {
            return;
        };
        let theme = &app.theme;
        let mut buf = scratch(cells.width, cells.height);

        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(Span::styled(
                " Gallery ",
                Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(theme.bg0))
            .render(
                Rect::new(
                    INSET,
                    1,
                    cells.width.saturating_sub(2 * INSET),
                    cells.height.saturating_sub(2),
                ),
                &mut buf,
            );

        let thumbnails = app.layout.thumbnail_cells(app.lightbox.len());
        for (index, (thumb, photo)) in thumbnails.iter().zip(app.lightbox.items()).enumerate() {
            let selected = index == app.selected_photo;
            let x = thumb.col - cells.col;
            let y = thumb.row - cells.row;
            let image_height = thumb.height.saturating_sub(1);

            paint(&mut buf, Rect::new(x, y, thumb.width, image_height), |u, v| {
                sample(photo.scene, Grade::Finished, u, v)
            });

            let label_style = if selected {
                Style::default()
                    .fg(theme.bg0)
                    .bg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.grey1)
            };
            Paragraph::new(Line::from(Span::styled(photo.title, label_style)))
                .alignment(Alignment::Center)
                .render(Rect::new(x, y + image_height, thumb.width, 1), &mut buf);
        }

        blit(frame.buffer_mut(), &buf, placement);
    }
}
