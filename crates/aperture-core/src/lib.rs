pub mod capability;
pub mod compare;
pub mod config;
pub mod error;
pub mod geometry;
pub mod lightbox;
pub mod motion;
pub mod pointer;
pub mod progress;
pub mod reveal;
pub mod typewriter;
pub mod viewport;
pub mod zoom;

pub use compare::DragComparison;
pub use config::{AppConfig, EasingType};
pub use error::{Error, Result};
pub use lightbox::Lightbox;
pub use pointer::PointerHub;
pub use progress::ScrollProgressReporter;
pub use reveal::{RevealController, RevealState};
pub use typewriter::Typewriter;
pub use viewport::{LayoutObserver, VisibilityTracker};
pub use zoom::ZoomFollow;
