use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::picture::{paint, sample, Grade};

pub struct LightboxWidget;

impl LightboxWidget {
    /// Full-screen viewer over the page; draws nothing while closed
    pub fn render(frame: &mut Frame, app: &App) {
        let (Some(index), Some(photo)) = (app.lightbox.open_index(), app.lightbox.current()) else {
            return;
        };
        let theme = &app.theme;
        let area = frame.area();

        let popup_width = area.width.saturating_sub(8).max(10).min(area.width);
        let popup_height = area.height.saturating_sub(4).max(6).min(area.height);
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(format!(" {} ", photo.title))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg1));
        let inner_area = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // Photo
                Constraint::Length(1), // Caption
            ])
            .split(inner_area);

        let scene = photo.scene;
        paint(frame.buffer_mut(), chunks[0], |u, v| {
            sample(scene, Grade::Finished, u, v)
        });

        let caption = Paragraph::new(Line::from(vec![
            Span::styled(photo.caption, Style::default().fg(theme.fg1)),
            Span::styled(
                format!("   {}/{}   ", index + 1, app.lightbox.len()),
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled("n/p: browse  q: close", Style::default().fg(theme.grey1)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(caption, chunks[1]);
    }
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let rect = centered_rect(20, 10, Rect::new(0, 0, 80, 24));
        assert_eq!(rect, Rect::new(30, 7, 20, 10));
    }

    #[test]
    fn test_centered_rect_larger_than_area() {
        let rect = centered_rect(100, 30, Rect::new(0, 0, 80, 24));
        assert_eq!((rect.x, rect.y), (0, 0));
    }
}
