use std::time::{Duration, Instant};

use aperture_core::capability::{PointerEvent, PointerPhase, ScrollLock, ScrollMetrics};
use aperture_core::geometry::{self, Point};
use aperture_core::reveal::{RevealController, RevealTransition};
use aperture_core::{
    AppConfig, DragComparison, LayoutObserver, Lightbox, PointerHub, ScrollProgressReporter,
    Typewriter, ZoomFollow,
};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use tracing::debug;

use crate::input::Action;
use crate::page::{cell_center, gallery_photos, PageLayout, Photo, CELL_HEIGHT, CELL_WIDTH};
use crate::scroll::ScrollAnimator;
use crate::theme::{load_theme, Theme};

/// Rows moved by one wheel notch or one j/k press
const SCROLL_STEP: i32 = 3;
/// Slider movement per arrow key, in percent
const NUDGE_STEP: f64 = 5.0;

const ALTERNATE_HEADLINES: [&str; 3] = ["Portraits", "Weddings", "Commercial Work"];

/// Split the terminal into progress bar, document and status bar
pub fn screen_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Document scroll lock held while the lightbox is open
#[derive(Debug, Default)]
pub struct ScrollLatch {
    locked: bool,
}

impl ScrollLatch {
    pub fn is_locked(&self) -> bool {
        self.locked
    }
}

impl ScrollLock for ScrollLatch {
    fn set_locked(&mut self, locked: bool) {
        debug!(locked, "document scroll lock");
        self.locked = locked;
    }
}

/// One reveal-on-scroll block and the style animation drawn for it
#[derive(Debug, Clone)]
pub struct SectionView {
    /// Index into `PageLayout::blocks`
    pub block: usize,
    pub reveal: RevealController,
    pub transition: RevealTransition,
}

pub struct App {
    pub config: AppConfig,
    pub theme: Theme,
    pub should_quit: bool,
    pub pending_key: Option<char>,
    pub status_message: Option<String>,

    /// Page geometry for the current terminal width
    pub layout: PageLayout,
    /// Where the document is drawn on screen
    pub content_area: Rect,
    pub scroll: ScrollAnimator,
    /// Scroll row the observer and progress bar last saw
    synced_scroll: u16,

    pub observer: LayoutObserver,
    pub sections: Vec<SectionView>,
    pub compare: DragComparison,
    pub zoom: ZoomFollow,
    zoom_hover: bool,
    pub typewriter: Typewriter,
    pub progress: ScrollProgressReporter,
    pub lightbox: Lightbox<Photo>,
    pub selected_photo: usize,

    pub pointer: PointerHub,
    pub scroll_lock: ScrollLatch,
    pub started: Instant,
}

impl App {
    pub fn new(config: AppConfig, screen: Rect, now: Instant) -> Self {
        let theme = load_theme(&config.ui.theme);
        let (_, content_area, _) = screen_layout(screen);
        let layout = PageLayout::build(content_area.width, config.reveal.variant);
        let mut observer = LayoutObserver::new(viewport_rect(content_area, 0));

        let mut sections = Vec::new();
        for (index, block) in layout.blocks.iter().enumerate() {
            let Some(variant) = block.kind.reveal_variant() else {
                continue;
            };
            let mut reveal = RevealController::from_config(&config.reveal).with_variant(variant);
            reveal.mount(&mut observer, layout.block_cells(block).to_document());
            let transition = RevealTransition::new(
                &reveal.active_style(),
                config.ui.easing,
                config.ui.transition_duration(),
            );
            sections.push(SectionView {
                block: index,
                reveal,
                transition,
            });
        }

        let mut compare =
            DragComparison::with_ratio(layout.compare_cells().to_document(), config.compare.initial_ratio);
        compare.mount();
        let zoom = ZoomFollow::with_scale(layout.zoom_cells().to_document(), config.zoom.scale);

        let mut typewriter = Typewriter::from_config(&config.typewriter);
        typewriter.start(now);

        let mut app = Self {
            theme,
            should_quit: false,
            pending_key: None,
            status_message: None,
            scroll: ScrollAnimator::new(&config.ui),
            synced_scroll: 0,
            layout,
            content_area,
            observer,
            sections,
            compare,
            zoom,
            zoom_hover: false,
            typewriter,
            progress: ScrollProgressReporter::new(),
            lightbox: Lightbox::new(gallery_photos()),
            selected_photo: 0,
            pointer: PointerHub::new(),
            scroll_lock: ScrollLatch::default(),
            started: now,
            config,
        };

        let metrics = app.metrics();
        app.progress.mount(&metrics);
        app.deliver(now);
        app
    }

    /// Current document geometry in document units
    pub fn metrics(&self) -> ScrollMetrics {
        ScrollMetrics {
            scroll_top: self.synced_scroll as f64 * CELL_HEIGHT,
            scroll_height: self.layout.height as f64 * CELL_HEIGHT,
            client_height: self.content_area.height as f64 * CELL_HEIGHT,
        }
    }

    pub fn max_scroll(&self) -> u16 {
        self.layout.max_scroll(self.content_area.height)
    }

    /// Scroll row currently drawn
    pub fn scroll_row(&self) -> u16 {
        self.synced_scroll
    }

    /// Advance animations and timers to `now`
    pub fn tick(&mut self, now: Instant) {
        let row = self.scroll.update(self.max_scroll(), now);
        if row != self.synced_scroll {
            self.synced_scroll = row;
            self.sync_viewport(now);
        }

        self.typewriter.advance(now);

        for section in &mut self.sections {
            section.transition.update(now);
        }
    }

    /// Something on screen is moving and wants frames at the animation rate
    pub fn is_animating(&self, now: Instant) -> bool {
        self.scroll.needs_update() || self.sections.iter().any(|s| s.transition.is_animating(now))
    }

    /// How long the event loop may block before the next frame is due
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        if self.is_animating(now) {
            return self.config.ui.animation_tick();
        }
        let idle = Duration::from_millis(self.config.ui.tick_rate_ms);
        match self.typewriter.next_deadline() {
            Some(deadline) => idle.min(deadline.saturating_duration_since(now)),
            None => idle,
        }
    }

    /// Terminal resized: relayout and move every observed target
    pub fn resize(&mut self, screen: Rect, now: Instant) {
        let (_, content_area, _) = screen_layout(screen);
        self.content_area = content_area;
        self.layout = PageLayout::build(content_area.width, self.config.reveal.variant);

        for section in &self.sections {
            let (Some(id), Some(block)) = (
                section.reveal.tracker().observer_id(),
                self.layout.block(section.block),
            ) else {
                continue;
            };
            self.observer
                .set_target(id, self.layout.block_cells(block).to_document());
        }
        self.compare.set_region(self.layout.compare_cells().to_document());
        self.zoom.set_region(self.layout.zoom_cells().to_document());

        let max = self.max_scroll();
        if self.scroll.target_scroll() > max || self.scroll.current_scroll() > max {
            self.scroll.set_scroll(max.min(self.scroll.current_scroll()));
        }
        self.synced_scroll = self.scroll.current_scroll();
        self.sync_viewport(now);
    }

    fn sync_viewport(&mut self, now: Instant) {
        self.observer
            .set_viewport(viewport_rect(self.content_area, self.synced_scroll));
        let metrics = self.metrics();
        self.progress.on_scroll(&metrics);
        self.deliver(now);
    }

    /// Hand intersection reports to every section and retarget the ones that flipped
    fn deliver(&mut self, now: Instant) {
        for entry in self.observer.update() {
            for section in &mut self.sections {
                if section.reveal.on_entry(&entry).is_some() {
                    section
                        .transition
                        .retarget(&section.reveal.active_style(), now);
                }
            }
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    fn scroll_by(&mut self, rows: i32) {
        if self.scroll_lock.is_locked() {
            return;
        }
        self.scroll.scroll_by(rows, self.max_scroll());
    }

    fn scroll_to(&mut self, row: u16, now: Instant) {
        if self.scroll_lock.is_locked() {
            return;
        }
        self.scroll.scroll_to(row, self.max_scroll(), now);
    }

    pub fn apply_action(&mut self, action: Action, now: Instant) {
        if action != Action::PendingG {
            self.pending_key = None;
        }
        let half_page = (self.content_area.height / 2).max(1) as i32;

        match action {
            Action::Quit => self.should_quit = true,
            Action::ScrollDown => self.scroll_by(SCROLL_STEP),
            Action::ScrollUp => self.scroll_by(-SCROLL_STEP),
            Action::ScrollHalfPageDown => self.scroll_by(half_page),
            Action::ScrollHalfPageUp => self.scroll_by(-half_page),
            Action::JumpToTop => self.scroll_to(0, now),
            Action::JumpToBottom => self.scroll_to(self.max_scroll(), now),
            Action::PendingG => self.pending_key = Some('g'),
            Action::NudgeLeft => self.nudge_compare(-NUDGE_STEP),
            Action::NudgeRight => self.nudge_compare(NUDGE_STEP),
            Action::SelectNextPhoto => {
                if !self.lightbox.is_empty() {
                    self.selected_photo = (self.selected_photo + 1) % self.lightbox.len();
                }
            }
            Action::SelectPrevPhoto => {
                if !self.lightbox.is_empty() {
                    let len = self.lightbox.len();
                    self.selected_photo = (self.selected_photo + len - 1) % len;
                }
            }
            Action::OpenLightbox => {
                self.lightbox.open(&mut self.scroll_lock, self.selected_photo);
            }
            Action::NextPhoto => {
                if let Some(index) = self.lightbox.next() {
                    self.selected_photo = index;
                }
            }
            Action::PrevPhoto => {
                if let Some(index) = self.lightbox.prev() {
                    self.selected_photo = index;
                }
            }
            Action::CloseLightbox => self.lightbox.close(&mut self.scroll_lock),
            Action::SwapHeadlines => self.swap_headlines(now),
            Action::ToggleHeadline => {
                if self.typewriter.is_running() {
                    self.typewriter.stop();
                    self.set_status("Headline paused");
                } else {
                    self.typewriter.start(now);
                    self.clear_status();
                }
            }
            Action::None => {}
        }
    }

    fn swap_headlines(&mut self, now: Instant) {
        let alternate: Vec<String> = ALTERNATE_HEADLINES.iter().map(|s| s.to_string()).collect();
        let texts = if self.typewriter.texts() == alternate.as_slice() {
            self.config.typewriter.texts.clone()
        } else {
            alternate
        };
        if self.typewriter.set_texts(texts, now) {
            self.set_status(format!("Headlines: {}", self.typewriter.texts().join(" / ")));
        }
    }

    /// Move the slider with a synthetic press, move and release
    fn nudge_compare(&mut self, delta: f64) {
        let region = self.compare.region();
        if region.width <= 0.0 {
            return;
        }
        let y = region.top + region.height / 2.0;
        let target = (self.compare.ratio() + delta).clamp(0.0, 100.0);
        let x = region.left + region.width * target / 100.0;

        let events = [
            PointerEvent::mouse(PointerPhase::Press, region.left + region.width / 2.0, y),
            PointerEvent::mouse(PointerPhase::Move, x, y),
            PointerEvent::mouse(PointerPhase::Release, x, y),
        ];
        for event in events {
            self.dispatch_pointer(&event);
        }
    }

    /// Route a pointer event the way a browser would: presses go to the
    /// element under the pointer, moves and releases to global listeners
    fn dispatch_pointer(&mut self, event: &PointerEvent) -> bool {
        match event.phase {
            PointerPhase::Press => self.compare.handle(&mut self.pointer, event),
            phase => {
                self.pointer.is_listening(phase) && self.compare.handle(&mut self.pointer, event)
            }
        }
    }

    /// Document position under a screen cell
    pub fn document_point(&self, column: u16, row: u16) -> Point {
        let doc_row = row as f64 - self.content_area.y as f64 + self.synced_scroll as f64;
        cell_center(column.saturating_sub(self.content_area.x), doc_row)
    }

    /// Gallery thumbnail under a screen cell
    pub fn thumbnail_at(&self, column: u16, row: u16) -> Option<usize> {
        if row < self.content_area.y || row >= self.content_area.bottom() {
            return None;
        }
        let doc_row = row - self.content_area.y + self.synced_scroll;
        let doc_col = column.saturating_sub(self.content_area.x);
        self.layout
            .thumbnail_cells(self.lightbox.len())
            .iter()
            .position(|cell| cell.contains(doc_col, doc_row))
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let point = self.document_point(mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.lightbox.is_open() {
                    self.lightbox.close(&mut self.scroll_lock);
                    return;
                }
                let press = PointerEvent::mouse(PointerPhase::Press, point.x, point.y);
                if self.dispatch_pointer(&press) {
                    return;
                }
                if let Some(index) = self.thumbnail_at(mouse.column, mouse.row) {
                    self.selected_photo = index;
                    self.lightbox.open(&mut self.scroll_lock, index);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
                let event = PointerEvent::mouse(PointerPhase::Move, point.x, point.y);
                self.dispatch_pointer(&event);
                self.update_zoom_hover(point);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let event = PointerEvent::mouse(PointerPhase::Release, point.x, point.y);
                self.dispatch_pointer(&event);
            }
            MouseEventKind::ScrollDown => self.scroll_by(SCROLL_STEP),
            MouseEventKind::ScrollUp => self.scroll_by(-SCROLL_STEP),
            _ => {}
        }
    }

    /// Terminals report no enter/leave, so derive them from region membership
    fn update_zoom_hover(&mut self, point: Point) {
        let inside = !self.lightbox.is_open() && self.zoom.region().contains(point);
        match (self.zoom_hover, inside) {
            (false, true) => {
                self.zoom.pointer_enter();
                self.zoom.pointer_move(point);
            }
            (true, true) => self.zoom.pointer_move(point),
            (true, false) => self.zoom.pointer_leave(),
            (false, false) => {}
        }
        self.zoom_hover = inside;
    }

    /// Release every subscription, timer and lock before the terminal is restored
    pub fn shutdown(&mut self) {
        for section in &mut self.sections {
            section.reveal.unmount(&mut self.observer);
        }
        self.compare.unmount(&mut self.pointer);
        self.lightbox.unmount(&mut self.scroll_lock);
        self.typewriter.stop();
        self.progress.unmount();
        debug!("showcase torn down");
    }
}

/// Visible document area for a scroll row
fn viewport_rect(content: Rect, scroll_row: u16) -> geometry::Rect {
    geometry::Rect::new(
        0.0,
        scroll_row as f64 * CELL_HEIGHT,
        content.width as f64 * CELL_WIDTH,
        content.height as f64 * CELL_HEIGHT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use aperture_core::reveal::RevealState;
    use aperture_core::zoom::ZoomTransform;
    use crossterm::event::KeyModifiers;

    fn instant_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.ui.smooth_scroll = false;
        config
    }

    fn app() -> (App, Instant) {
        let now = Instant::now();
        (App::new(instant_config(), Rect::new(0, 0, 80, 24), now), now)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn scroll_near(app: &mut App, doc_row: u16, now: Instant) {
        let max = app.max_scroll();
        app.scroll.scroll_to(doc_row.saturating_sub(2), max, now);
        app.tick(now);
    }

    /// Screen row of a document row at the current scroll
    fn screen_row(app: &App, doc_row: u16) -> u16 {
        doc_row - app.scroll_row() + app.content_area.y
    }

    #[test]
    fn test_content_area_between_bars() {
        let (app, _) = app();
        assert_eq!(app.content_area, Rect::new(0, 1, 80, 22));
        assert_eq!(app.progress.progress(), 0.0);
    }

    #[test]
    fn test_scrolling_updates_progress() {
        let (mut app, now) = app();
        app.apply_action(Action::JumpToBottom, now);
        app.tick(now);
        assert_eq!(app.scroll_row(), app.max_scroll());
        assert_eq!(app.progress.progress(), 100.0);

        app.apply_action(Action::PendingG, now);
        assert_eq!(app.pending_key, Some('g'));
        app.apply_action(Action::JumpToTop, now);
        app.tick(now);
        assert_eq!(app.progress.progress(), 0.0);
        assert_eq!(app.pending_key, None);
    }

    #[test]
    fn test_sections_follow_scroll() {
        let (mut app, now) = app();
        // The first section sits in view at the top of the page
        assert_eq!(app.sections[0].reveal.state(), RevealState::Visible);
        assert!(app.sections[0].reveal.tracker().state().has_ever_intersected);

        app.apply_action(Action::JumpToBottom, now);
        app.tick(now);
        // Seen, then scrolled away: the once policy hides it again
        assert_eq!(app.sections[0].reveal.state(), RevealState::Hidden);
        assert!(app.is_animating(now));
    }

    #[test]
    fn test_mouse_drag_moves_slider() {
        let (mut app, now) = app();
        let region = app.layout.compare_cells();
        scroll_near(&mut app, region.row, now);

        let row = screen_row(&app, region.row + 1);
        let start_col = region.col + region.width / 2;
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), start_col, row));
        assert!(app.compare.is_dragging());
        assert_eq!(app.compare.ratio(), 50.0);

        // Dragging over the status bar still counts
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), region.col, 23));
        assert!(app.compare.ratio() < 5.0);

        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 0, 23));
        assert!(!app.compare.is_dragging());
        assert_eq!(app.pointer.listener_count(), 0);
    }

    #[test]
    fn test_nudge_keeps_slider_in_range() {
        let (mut app, now) = app();
        app.apply_action(Action::NudgeRight, now);
        assert!((app.compare.ratio() - 55.0).abs() < 1e-9);
        for _ in 0..20 {
            app.apply_action(Action::NudgeRight, now);
        }
        assert_eq!(app.compare.ratio(), 100.0);
        assert!(!app.compare.is_dragging());
    }

    #[test]
    fn test_zoom_hover_enter_and_leave() {
        let (mut app, now) = app();
        let region = app.layout.zoom_cells();
        scroll_near(&mut app, region.row, now);

        let row = screen_row(&app, region.row);
        app.handle_mouse(mouse(MouseEventKind::Moved, region.col, row));
        assert!(app.zoom.focal_point().active);
        assert!(matches!(app.zoom.transform(), ZoomTransform::Magnify { .. }));

        app.handle_mouse(mouse(MouseEventKind::Moved, 0, 0));
        assert_eq!(app.zoom.transform(), ZoomTransform::Identity);
    }

    #[test]
    fn test_lightbox_locks_scrolling() {
        let (mut app, now) = app();
        app.apply_action(Action::SelectNextPhoto, now);
        app.apply_action(Action::OpenLightbox, now);
        assert!(app.scroll_lock.is_locked());
        assert_eq!(app.lightbox.open_index(), Some(1));

        app.apply_action(Action::ScrollDown, now);
        app.tick(now);
        assert_eq!(app.scroll_row(), 0);

        app.apply_action(Action::PrevPhoto, now);
        app.apply_action(Action::PrevPhoto, now);
        assert_eq!(app.selected_photo, app.lightbox.len() - 1);

        app.apply_action(Action::CloseLightbox, now);
        assert!(!app.scroll_lock.is_locked());
        app.apply_action(Action::ScrollDown, now);
        app.tick(now);
        assert_eq!(app.scroll_row(), 3);
    }

    #[test]
    fn test_thumbnail_click_opens_lightbox() {
        let (mut app, now) = app();
        let thumbs = app.layout.thumbnail_cells(app.lightbox.len());
        scroll_near(&mut app, thumbs[2].row, now);

        let row = screen_row(&app, thumbs[2].row);
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), thumbs[2].col, row));
        assert_eq!(app.lightbox.open_index(), Some(2));

        // Any click closes it again
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 0, 0));
        assert!(!app.lightbox.is_open());
    }

    #[test]
    fn test_headline_types_and_swaps() {
        let (mut app, now) = app();
        app.tick(now + Duration::from_millis(350));
        assert_eq!(app.typewriter.displayed_text(), "Cap");

        app.apply_action(Action::SwapHeadlines, now + Duration::from_millis(350));
        assert_eq!(app.typewriter.displayed_text(), "");
        assert_eq!(app.typewriter.texts()[0], "Portraits");

        app.apply_action(Action::ToggleHeadline, now);
        assert!(!app.typewriter.is_running());
    }

    #[test]
    fn test_poll_timeout_waits_for_typewriter() {
        let (app, now) = app();
        let timeout = app.poll_timeout(now);
        assert!(timeout <= Duration::from_millis(100));
    }

    #[test]
    fn test_resize_moves_regions() {
        let (mut app, now) = app();
        app.resize(Rect::new(0, 0, 120, 40), now);
        assert_eq!(app.content_area.width, 120);
        assert_eq!(app.compare.region(), app.layout.compare_cells().to_document());
        assert!(app.scroll_row() <= app.max_scroll());
    }

    #[test]
    fn test_shutdown_releases_everything() {
        let (mut app, now) = app();
        app.apply_action(Action::OpenLightbox, now);
        app.shutdown();
        assert!(app.observer.is_empty());
        assert!(!app.scroll_lock.is_locked());
        assert!(!app.typewriter.is_running());
        assert_eq!(app.pointer.listener_count(), 0);
    }
}
