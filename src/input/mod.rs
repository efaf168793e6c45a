//! Input Module
//!
//! Keyboard handling with a small modal state machine: Normal for
//! navigation, Insert for editing the focused text field, Confirm for
//! destructive prompts.

pub mod keymap;
pub mod modes;
pub mod text;

// Re-exports
pub use keymap::Action;
pub use modes::{InputMode, ModeState};
