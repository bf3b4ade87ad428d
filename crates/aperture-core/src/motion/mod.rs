//! Motion primitives shared by the animated controllers
//!
//! - `easing` - pure easing curves mapping `[0, 1]` to `[0, 1]`
//! - `timing` - progress and interpolation helpers over `Instant`s

pub mod easing;
pub mod timing;

pub use crate::config::EasingType;
pub use timing::{is_complete, lerp, progress};
