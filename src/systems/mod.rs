//! Application systems
//!
//! Modular systems extracted from main.rs for better organization and testability.

mod render;
mod scheduler;
mod window;

pub use render::{RenderError, RenderSystem};
pub use scheduler::FrameScheduler;
pub use window::{hud_title, WindowError, WindowSystem};
