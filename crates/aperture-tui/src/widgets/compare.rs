use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use super::{blit, place, scratch};
use crate::app::App;
use crate::page::{CellRect, Scene, CELL_WIDTH, INSET};
use crate::picture::{paint, sample, Grade};

const HANDLE: char = '┃';

pub struct CompareWidget;

impl CompareWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, cells: CellRect) {
        let Some(placement) = place(area, cells, app.scroll_row(), 0, 0) else {
            return;
        };
        let theme = &app.theme;
        let compare = &app.compare;
        let picture = app.layout.compare_cells();
        let mut buf = scratch(cells.width, cells.height);

        let frame_area = Rect::new(
            INSET,
            1,
            cells.width.saturating_sub(2 * INSET),
            cells.height.saturating_sub(2),
        );
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if compare.is_dragging() {
                theme.accent
            } else {
                theme.border
            }))
            .title(Span::styled(
                " Before / After ",
                Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(theme.bg0))
            .render(frame_area, &mut buf);

        // Overlay is the finished edit, clipped to the slider position
        let region = compare.region();
        let image_area = Rect::new(
            picture.col - cells.col,
            picture.row - cells.row,
            picture.width,
            picture.height,
        );
        let clip = compare.clip_width() / region.width.max(f64::MIN_POSITIVE);
        paint(&mut buf, image_area, |u, v| {
            let grade = if u < clip { Grade::Finished } else { Grade::Raw };
            sample(Scene::Coast, grade, u, v)
        });

        if picture.width > 0 {
            let offset = ((compare.handle_x() - region.left) / CELL_WIDTH).floor();
            let handle_col = (offset.max(0.0) as u16).min(picture.width - 1);
            for row in 0..picture.height {
                if let Some(cell) = buf.cell_mut((image_area.x + handle_col, image_area.y + row)) {
                    cell.set_char(HANDLE).set_fg(theme.handle);
                }
            }
        }

        let caption = Line::from(vec![
            Span::styled("after ", Style::default().fg(theme.grey1)),
            Span::styled(
                format!("{:>3.0}%", compare.ratio()),
                Style::default().fg(theme.accent),
            ),
            Span::styled("  ◀ drag or ←/→ ▶", Style::default().fg(theme.grey0)),
        ]);
        Paragraph::new(caption)
            .alignment(Alignment::Center)
            .render(Rect::new(0, cells.height.saturating_sub(1), cells.width, 1), &mut buf);

        blit(frame.buffer_mut(), &buf, placement);
    }
}
