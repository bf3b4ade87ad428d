//! Drives a typewriter on tokio timers
//!
//! The machine's timer slot is the only source of wakeups: the driver sleeps
//! until the pending deadline, advances, and reports a frame when the
//! visible state changed.

use tokio::sync::watch;
use tokio::time::{sleep_until, Instant as TokioInstant};
use tracing::debug;

use super::machine::{Typewriter, TypewriterState};

/// Run `typewriter` until it halts, its text list is empty, or `shutdown`
/// turns true (or its sender is dropped)
///
/// `on_frame` receives the initial state and every changed state after it.
/// The machine is stopped and handed back so callers can inspect it.
pub async fn run_typewriter<F>(
    mut typewriter: Typewriter,
    mut shutdown: watch::Receiver<bool>,
    mut on_frame: F,
) -> Typewriter
where
    F: FnMut(&TypewriterState),
{
    typewriter.start(TokioInstant::now().into_std());
    on_frame(typewriter.state());

    while let Some(deadline) = typewriter.next_deadline() {
        if *shutdown.borrow() {
            break;
        }

        tokio::select! {
            _ = sleep_until(TokioInstant::from_std(deadline)) => {
                if typewriter.advance(TokioInstant::now().into_std()) {
                    on_frame(typewriter.state());
                }
            }
            changed = shutdown.changed() => {
                if changed.is_err() || *shutdown.borrow() {
                    break;
                }
            }
        }
    }

    debug!(phase = ?typewriter.phase(), "typewriter driver exiting");
    typewriter.stop();
    typewriter
}
