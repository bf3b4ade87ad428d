//! Reveal-on-scroll
//!
//! - `variant` - named style pairs (fade, slide, scale, none)
//! - `controller` - maps observation state + trigger policy to hidden/visible
//! - `transition` - eased interpolation between the two styles for renderers

pub mod controller;
pub mod transition;
pub mod variant;

pub use controller::{reveal_state, RevealController, RevealState, TriggerPolicy};
pub use transition::RevealTransition;
pub use variant::{ResolvedStyle, RevealVariant, StyleDescriptor, VariantStyles};
