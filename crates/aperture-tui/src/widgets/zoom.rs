use aperture_core::zoom::ZoomTransform;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use super::{blit, place, scratch};
use crate::app::App;
use crate::page::{CellRect, Scene, INSET};
use crate::picture::{paint, sample, Grade};

pub struct ZoomWidget;

/// Where the unscaled image is sampled for screen position `(u, v)`
///
/// Inverse of scaling about the transform origin.
pub(crate) fn source_point(transform: ZoomTransform, u: f64, v: f64) -> (f64, f64) {
    match transform {
        ZoomTransform::Identity => (u, v),
        ZoomTransform::Magnify {
            origin_x_pct,
            origin_y_pct,
            scale,
        } => {
            let ox = origin_x_pct / 100.0;
            let oy = origin_y_pct / 100.0;
            (ox + (u - ox) / scale, oy + (v - oy) / scale)
        }
    }
}

impl ZoomWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, cells: CellRect) {
        let Some(placement) = place(area, cells, app.scroll_row(), 0, 0) else {
            return;
        };
        let theme = &app.theme;
        let transform = app.zoom.transform();
        let picture = app.layout.zoom_cells();
        let mut buf = scratch(cells.width, cells.height);

        let active = matches!(transform, ZoomTransform::Magnify { .. });
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if active { theme.accent } else { theme.border }))
            .title(Span::styled(
                " Detail ",
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

        let image_area = Rect::new(
            picture.col - cells.col,
            picture.row - cells.row,
            picture.width,
            picture.height,
        );
        paint(&mut buf, image_area, |u, v| {
            let (su, sv) = source_point(transform, u, v);
            sample(Scene::Portrait, Grade::Finished, su, sv)
        });

        let caption = match transform {
            ZoomTransform::Identity => "hover to magnify".to_string(),
            ZoomTransform::Magnify {
                origin_x_pct,
                origin_y_pct,
                scale,
            } => format!("{scale:.1}x at {origin_x_pct:.0}% {origin_y_pct:.0}%"),
        };
        Paragraph::new(Line::from(Span::styled(caption, Style::default().fg(theme.grey1))))
            .alignment(Alignment::Center)
            .render(Rect::new(0, cells.height.saturating_sub(1), cells.width, 1), &mut buf);

        blit(frame.buffer_mut(), &buf, placement);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_stays_fixed() {
        let transform = ZoomTransform::Magnify {
            origin_x_pct: 25.0,
            origin_y_pct: 75.0,
            scale: 2.0,
        };
        assert_eq!(source_point(transform, 0.25, 0.75), (0.25, 0.75));
        let (u, _) = source_point(transform, 0.75, 0.75);
        assert!((u - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_identity_passthrough() {
        assert_eq!(source_point(ZoomTransform::Identity, 0.1, 0.9), (0.1, 0.9));
    }
}
