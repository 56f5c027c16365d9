//! UI components.

pub mod swamp;
