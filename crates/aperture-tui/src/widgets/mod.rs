mod compare;
mod gallery;
mod hero;
mod lightbox;
mod progress_bar;
mod section;
mod status_bar;
mod zoom;

pub use compare::CompareWidget;
pub use gallery::GalleryWidget;
pub use hero::HeroWidget;
pub use lightbox::LightboxWidget;
pub use progress_bar::ProgressBarWidget;
pub use section::SectionWidget;
pub use status_bar::StatusBarWidget;
pub use zoom::ZoomWidget;

use std::time::Instant;

use ratatui::{buffer::Buffer, layout::Rect, Frame};

use crate::app::App;
use crate::page::{BlockKind, CellRect};

/// Visible part of a document rectangle on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Placement {
    pub area: Rect,
    /// Rows of the source cut off above the screen area
    pub skip_rows: u16,
    /// Columns cut off to the left
    pub skip_cols: u16,
}

/// Map a document rectangle, shifted by `(dx, dy)` cells, into `content`
pub(crate) fn place(content: Rect, cells: CellRect, scroll: u16, dx: i32, dy: i32) -> Option<Placement> {
    let top = content.y as i32 + cells.row as i32 - scroll as i32 + dy;
    let left = content.x as i32 + cells.col as i32 + dx;
    let bottom = top + cells.height as i32;
    let right = left + cells.width as i32;

    let clip_top = top.max(content.y as i32);
    let clip_left = left.max(content.x as i32);
    let clip_bottom = bottom.min(content.bottom() as i32);
    let clip_right = right.min(content.right() as i32);
    if clip_top >= clip_bottom || clip_left >= clip_right {
        return None;
    }

    Some(Placement {
        area: Rect::new(
            clip_left as u16,
            clip_top as u16,
            (clip_right - clip_left) as u16,
            (clip_bottom - clip_top) as u16,
        ),
        skip_rows: (clip_top - top) as u16,
        skip_cols: (clip_left - left) as u16,
    })
}

/// Copy the visible part of an off-screen block onto the frame
pub(crate) fn blit(buf: &mut Buffer, scratch: &Buffer, placement: Placement) {
    for y in 0..placement.area.height {
        for x in 0..placement.area.width {
            let src = (x + placement.skip_cols, y + placement.skip_rows);
            let dst = (placement.area.x + x, placement.area.y + y);
            if let (Some(from), Some(to)) = (scratch.cell(src), buf.cell_mut(dst)) {
                *to = from.clone();
            }
        }
    }
}

/// Off-screen buffer sized to a block
pub(crate) fn scratch(width: u16, height: u16) -> Buffer {
    Buffer::empty(Rect::new(0, 0, width, height))
}

/// Rows a revealing card may be shifted by (50 px slide over 16 px cells, rounded up)
const REVEAL_SLACK_ROWS: u16 = 4;

/// Whether a block, at its resting rows or shifted by up to `REVEAL_SLACK_ROWS`,
/// can overlap a viewport of `rows` starting at `scroll`
pub(crate) fn near_view(cells: CellRect, scroll: u16, rows: u16) -> bool {
    let top = cells.row.saturating_sub(REVEAL_SLACK_ROWS);
    let bottom = cells.row.saturating_add(cells.height).saturating_add(REVEAL_SLACK_ROWS);
    top < scroll.saturating_add(rows) && bottom > scroll
}

/// Draw every block that overlaps the document viewport
///
/// Blocks just outside the viewport are still visited, since a reveal offset
/// can slide them in; `place` clips whatever stays off screen.
pub fn render_document(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
    for (index, block) in app.layout.blocks.iter().enumerate() {
        let cells = app.layout.block_cells(block);
        if !near_view(cells, app.scroll_row(), area.height) {
            continue;
        }

        match &block.kind {
            BlockKind::Hero => HeroWidget::render(frame, area, app, cells, now),
            BlockKind::Section { title, body, .. } => {
                if let Some(section) = app.sections.iter().find(|s| s.block == index) {
                    SectionWidget::render(frame, area, app, cells, section, title, &[*body], now);
                }
            }
            BlockKind::Compare => CompareWidget::render(frame, area, app, cells),
            BlockKind::Zoom => ZoomWidget::render(frame, area, app, cells),
            BlockKind::Gallery => GalleryWidget::render(frame, area, app, cells),
            BlockKind::Footer => {
                if let Some(section) = app.sections.iter().find(|s| s.block == index) {
                    SectionWidget::render(
                        frame,
                        area,
                        app,
                        cells,
                        section,
                        "Aperture Studio",
                        &["Studio 4, Harbour Lane", "hello@aperture.studio"],
                        now,
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    fn cells(col: u16, row: u16, width: u16, height: u16) -> CellRect {
        CellRect {
            col,
            row,
            width,
            height,
        }
    }

    #[test]
    fn test_place_clips_top() {
        let content = Rect::new(0, 1, 80, 20);
        let placed = place(content, cells(0, 10, 80, 8), 14, 0, 0).unwrap();
        assert_eq!(placed.area, Rect::new(0, 1, 80, 4));
        assert_eq!(placed.skip_rows, 4);
    }

    #[test]
    fn test_place_applies_offset() {
        let content = Rect::new(0, 1, 80, 20);
        let placed = place(content, cells(4, 2, 10, 3), 0, -6, 2).unwrap();
        assert_eq!(placed.area, Rect::new(0, 5, 8, 3));
        assert_eq!(placed.skip_cols, 2);
    }

    #[test]
    fn test_place_outside_view() {
        let content = Rect::new(0, 1, 80, 20);
        assert_eq!(place(content, cells(0, 40, 80, 5), 0, 0, 0), None);
    }

    #[test]
    fn test_near_view_includes_reveal_offset() {
        // Card resting two rows below a 20-row viewport, sliding up by 3 rows
        let card = cells(0, 22, 80, 7);
        assert!(near_view(card, 0, 20));
        let placed = place(Rect::new(0, 1, 80, 20), card, 0, 0, -3).unwrap();
        assert_eq!(placed.area, Rect::new(0, 20, 80, 1));

        assert!(!near_view(cells(0, 30, 80, 7), 0, 20));
        assert!(near_view(cells(0, 0, 80, 3), 6, 20));
        assert!(!near_view(cells(0, 0, 80, 3), 8, 20));
    }

    #[test]
    fn test_blit_copies_visible_cells() {
        let mut source = scratch(4, 4);
        source[(1, 2)].set_char('x').set_fg(Color::Red);
        let mut target = Buffer::empty(Rect::new(0, 0, 10, 10));
        let placement = Placement {
            area: Rect::new(5, 5, 3, 2),
            skip_rows: 2,
            skip_cols: 0,
        };
        blit(&mut target, &source, placement);
        assert_eq!(target[(6, 5)].symbol(), "x");
        assert_eq!(target[(6, 5)].fg, Color::Red);
    }
}
