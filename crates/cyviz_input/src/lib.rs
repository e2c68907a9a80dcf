//! Pointer input handling for the cyviz explorer
//!
//! This crate turns raw pointer events into orbit and zoom intents, and
//! tracks the hover cursor that attracts the surface.

mod orbit_controller;

pub use orbit_controller::{OrbitController, OrbitControl};
