//! Animated swamp scene.
//!
//! A wandering ogre bounces around a night-time swamp on an HTML canvas:
//! - Bounce physics with jittered reflections and clamped speed
//! - A throttled, capped trail of fading footprints
//! - Pulsing fireflies scattered once per session
//! - A speech bubble with a random quote on a jittered schedule
//! - Re-clamping of the character when the window shrinks
//!
//! The simulation (`state`, `motion`, `footprints`, `fireflies`, `quotes`,
//! `viewport`) has no DOM dependency and takes its clock and random source as
//! arguments; `component` and `render` bind it to the browser.
//!
//! # Example
//!
//! ```ignore
//! use swamp_vibes::{SwampCanvas, SwampConfig};
//!
//! view! { <SwampCanvas config=SwampConfig::default() /> }
//! ```

mod component;
pub mod config;
pub mod fireflies;
pub mod footprints;
pub mod jitter;
pub mod motion;
pub mod quotes;
mod render;
pub mod state;
pub mod theme;
pub mod viewport;

pub use component::SwampCanvas;
pub use config::SwampConfig;
pub use state::SwampState;
pub use theme::Theme;
