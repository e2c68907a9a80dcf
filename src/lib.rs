//! Calabi-Yau explorer application
//!
//! Library half of the `cyviz` binary: configuration, keyboard mapping and
//! the systems the event loop drives.

pub mod config;
pub mod input;
pub mod systems;
