//! Typewriter text effect
//!
//! - `timer` - single-slot cancellable deadline
//! - `machine` - the typing/pausing/deleting state machine
//! - `driver` - runs a machine on tokio timers

pub mod driver;
pub mod machine;
pub mod timer;

pub use driver::run_typewriter;
pub use machine::{cursor_visible, Phase, Typewriter, TypewriterOptions, TypewriterState};
pub use timer::SingleShotTimer;
