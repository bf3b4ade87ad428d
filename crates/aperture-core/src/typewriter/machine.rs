//! Typewriter state machine
//!
//! ```text
//!            last char typed              delay elapsed
//!   Typing ───────────────────▶ Pausing ───────────────▶ Deleting
//!     ▲                                                     │
//!     └──────── text emptied, next index (or Halted) ───────┘
//! ```
//!
//! Every step is driven by the single timer slot: entering a phase cancels
//! the previous deadline and schedules the next one. Hosts call `advance`
//! with the current time; all overdue steps are replayed in order, each one
//! scheduled from the deadline of the step before it.

use std::time::{Duration, Instant};

use tracing::debug;

use super::timer::SingleShotTimer;
use crate::config::TypewriterConfig;

/// Shortest gap between two steps, so `advance` always terminates
const MIN_STEP: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No texts to show
    Idle,
    Typing,
    Pausing,
    Deleting,
    /// Non-looping sequence finished; nothing else will happen
    Halted,
}

/// Snapshot handed to renderers
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TypewriterState {
    pub text_index: usize,
    /// Always a prefix of `texts[text_index]`
    pub displayed_text: String,
    pub is_deleting: bool,
    pub is_paused: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterOptions {
    pub typing_speed: Duration,
    pub deleting_speed: Duration,
    pub delay_between_texts: Duration,
    pub looping: bool,
}

impl Default for TypewriterOptions {
    fn default() -> Self {
        Self {
            typing_speed: Duration::from_millis(100),
            deleting_speed: Duration::from_millis(50),
            delay_between_texts: Duration::from_millis(2000),
            looping: true,
        }
    }
}

impl From<&TypewriterConfig> for TypewriterOptions {
    fn from(config: &TypewriterConfig) -> Self {
        Self {
            typing_speed: Duration::from_millis(config.typing_speed_ms),
            deleting_speed: Duration::from_millis(config.deleting_speed_ms),
            delay_between_texts: Duration::from_millis(config.delay_between_texts_ms),
            looping: config.looping,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    texts: Vec<String>,
    options: TypewriterOptions,
    state: TypewriterState,
    /// Characters (not bytes) currently shown
    shown: usize,
    phase: Phase,
    timer: SingleShotTimer,
    running: bool,
}

impl Typewriter {
    pub fn new(texts: Vec<String>, options: TypewriterOptions) -> Self {
        let phase = Self::initial_phase(&texts);
        Self {
            texts,
            options,
            state: TypewriterState::default(),
            shown: 0,
            phase,
            timer: SingleShotTimer::new(),
            running: false,
        }
    }

    pub fn from_config(config: &TypewriterConfig) -> Self {
        Self::new(config.texts.clone(), TypewriterOptions::from(config))
    }

    fn initial_phase(texts: &[String]) -> Phase {
        if texts.is_empty() {
            Phase::Idle
        } else {
            Phase::Typing
        }
    }

    #[inline]
    pub fn state(&self) -> &TypewriterState {
        &self.state
    }

    #[inline]
    pub fn displayed_text(&self) -> &str {
        &self.state.displayed_text
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    pub fn options(&self) -> TypewriterOptions {
        self.options
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// When the next step fires, if one is scheduled
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    /// Begin animating from the current state
    pub fn start(&mut self, now: Instant) {
        self.running = true;
        self.schedule_current(now);
    }

    /// Cancel the pending step; later `advance` calls do nothing
    pub fn stop(&mut self) {
        self.running = false;
        self.timer.cancel();
    }

    /// Replace the text sequence
    ///
    /// A sequence that differs from the current one resets the machine to
    /// the first text with nothing shown. Returns true if a reset happened.
    pub fn set_texts(&mut self, texts: Vec<String>, now: Instant) -> bool {
        if texts == self.texts {
            return false;
        }
        self.texts = texts;
        self.state = TypewriterState::default();
        self.shown = 0;
        self.phase = Self::initial_phase(&self.texts);
        self.timer.cancel();
        if self.running {
            self.schedule_current(now);
        }
        true
    }

    /// Run every step due at `now`. Returns true if the visible state changed.
    pub fn advance(&mut self, now: Instant) -> bool {
        if !self.running {
            return false;
        }
        let mut changed = false;
        while let Some(fired_at) = self.timer.take_due(now) {
            changed |= self.step();
            self.schedule_current(fired_at);
        }
        changed
    }

    fn schedule_current(&mut self, from: Instant) {
        let delay = match self.phase {
            Phase::Typing => self.options.typing_speed,
            Phase::Pausing => self.options.delay_between_texts,
            Phase::Deleting => self.options.deleting_speed,
            Phase::Idle | Phase::Halted => {
                self.timer.cancel();
                return;
            }
        };
        self.timer.schedule(from, delay.max(MIN_STEP));
    }

    fn step(&mut self) -> bool {
        let before = self.state.clone();
        let target = &self.texts[self.state.text_index];
        let target_len = target.chars().count();

        match self.phase {
            Phase::Typing => {
                if self.shown < target_len {
                    self.shown += 1;
                    self.state.displayed_text = prefix(target, self.shown).to_string();
                }
                if self.shown == target_len {
                    self.enter(Phase::Pausing);
                }
            }
            Phase::Pausing => self.enter(Phase::Deleting),
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                self.state.displayed_text = prefix(target, self.shown).to_string();
                if self.shown == 0 {
                    let last = self.state.text_index + 1 == self.texts.len();
                    if last && !self.options.looping {
                        self.enter(Phase::Halted);
                        debug!(texts = self.texts.len(), "typewriter sequence finished");
                    } else {
                        self.state.text_index = (self.state.text_index + 1) % self.texts.len();
                        self.enter(Phase::Typing);
                    }
                }
            }
            Phase::Idle | Phase::Halted => {}
        }

        self.state != before
    }

    fn enter(&mut self, phase: Phase) {
        self.phase = phase;
        self.state.is_paused = phase == Phase::Pausing;
        self.state.is_deleting = phase == Phase::Deleting;
    }
}

/// First `chars` characters of `text`
fn prefix(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Blinking caret: on for the first half of each period
pub fn cursor_visible(elapsed: Duration, period: Duration) -> bool {
    if period.is_zero() {
        return true;
    }
    let phase = elapsed.as_millis() % period.as_millis();
    phase < period.as_millis() / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn texts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn options(looping: bool) -> TypewriterOptions {
        TypewriterOptions {
            looping,
            ..Default::default()
        }
    }

    #[test]
    fn test_single_text_without_loop_halts() {
        let start = Instant::now();
        let mut tw = Typewriter::new(texts(&["Hi"]), options(false));
        tw.start(start);
        assert_eq!(tw.phase(), Phase::Typing);

        tw.advance(start + ms(100));
        assert_eq!(tw.displayed_text(), "H");
        tw.advance(start + ms(200));
        assert_eq!(tw.displayed_text(), "Hi");
        assert_eq!(tw.phase(), Phase::Pausing);
        assert!(tw.state().is_paused);

        tw.advance(start + ms(2200));
        assert_eq!(tw.phase(), Phase::Deleting);
        assert!(tw.state().is_deleting);
        assert_eq!(tw.displayed_text(), "Hi");

        tw.advance(start + ms(2250));
        assert_eq!(tw.displayed_text(), "H");
        tw.advance(start + ms(2300));
        assert_eq!(tw.displayed_text(), "");
        assert_eq!(tw.phase(), Phase::Halted);
        assert!(tw.next_deadline().is_none());

        // Frozen from here on
        assert!(!tw.advance(start + Duration::from_secs(3600)));
        assert_eq!(tw.displayed_text(), "");
    }

    #[test]
    fn test_looping_cycles_indices() {
        let start = Instant::now();
        let mut tw = Typewriter::new(texts(&["A", "B"]), options(true));
        tw.start(start);

        let mut seen = vec![tw.state().text_index];
        let mut now = start;
        for _ in 0..200 {
            now += ms(50);
            tw.advance(now);
            let state = tw.state();
            let current = &tw.texts()[state.text_index];
            assert!(current.starts_with(&state.displayed_text));
            assert!(state.displayed_text.chars().count() <= current.chars().count());
            if seen.last() != Some(&state.text_index) {
                seen.push(state.text_index);
            }
        }
        assert!(seen.len() >= 4, "saw {:?}", seen);
        for pair in seen.windows(2) {
            assert_eq!(pair[1], (pair[0] + 1) % 2);
        }
    }

    #[test]
    fn test_catch_up_replays_overdue_steps() {
        let start = Instant::now();
        let mut tw = Typewriter::new(texts(&["Hello"]), options(true));
        tw.start(start);
        assert!(tw.advance(start + ms(500)));
        assert_eq!(tw.displayed_text(), "Hello");
        assert_eq!(tw.next_deadline(), Some(start + ms(2500)));
    }

    #[test]
    fn test_empty_sequence_is_inert() {
        let start = Instant::now();
        let mut tw = Typewriter::new(Vec::new(), options(true));
        tw.start(start);
        assert_eq!(tw.phase(), Phase::Idle);
        assert!(tw.next_deadline().is_none());
        assert!(!tw.advance(start + Duration::from_secs(10)));
        assert_eq!(tw.displayed_text(), "");
    }

    #[test]
    fn test_new_texts_reset_state() {
        let start = Instant::now();
        let mut tw = Typewriter::new(texts(&["Alpha", "Beta"]), options(true));
        tw.start(start);
        tw.advance(start + ms(300));
        assert_eq!(tw.displayed_text(), "Alp");

        assert!(!tw.set_texts(texts(&["Alpha", "Beta"]), start + ms(300)));
        assert_eq!(tw.displayed_text(), "Alp");

        assert!(tw.set_texts(texts(&["Gamma"]), start + ms(300)));
        assert_eq!(tw.state(), &TypewriterState::default());
        assert_eq!(tw.next_deadline(), Some(start + ms(400)));
    }

    #[test]
    fn test_stop_cancels_pending_step() {
        let start = Instant::now();
        let mut tw = Typewriter::new(texts(&["Hi"]), options(true));
        tw.start(start);
        tw.stop();
        assert!(tw.next_deadline().is_none());
        assert!(!tw.advance(start + Duration::from_secs(1)));
        assert_eq!(tw.displayed_text(), "");
    }

    #[test]
    fn test_zero_delays_still_return() {
        let start = Instant::now();
        let mut tw = Typewriter::new(
            texts(&["Hi"]),
            TypewriterOptions {
                typing_speed: Duration::ZERO,
                deleting_speed: Duration::ZERO,
                delay_between_texts: Duration::ZERO,
                looping: true,
            },
        );
        tw.start(start);
        assert!(!tw.advance(start));
        assert_eq!(tw.next_deadline(), Some(start + ms(1)));

        assert!(tw.advance(start + ms(2)));
        assert_eq!(tw.displayed_text(), "Hi");

        // A long gap replays a bounded number of steps and keeps cycling
        tw.advance(start + ms(1000));
        assert!(tw.next_deadline().is_some_and(|d| d > start + ms(1000)));
        let state = tw.state();
        assert!(tw.texts()[state.text_index].starts_with(&state.displayed_text));
    }

    #[test]
    fn test_multibyte_characters() {
        let start = Instant::now();
        let mut tw = Typewriter::new(texts(&["光と影"]), options(true));
        tw.start(start);
        tw.advance(start + ms(200));
        assert_eq!(tw.displayed_text(), "光と");
    }

    #[test]
    fn test_cursor_blink() {
        let period = ms(1000);
        assert!(cursor_visible(ms(0), period));
        assert!(!cursor_visible(ms(600), period));
        assert!(cursor_visible(ms(1100), period));
        assert!(cursor_visible(ms(5), Duration::ZERO));
    }
}
