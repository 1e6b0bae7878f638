//! User Interface layer
//!
//! This module contains all UI-related code:
//! - Theme registry (style tokens per theme)
//! - Page composition (what is on screen)
//! - Reusable widgets
//! - Main render loop

pub mod render;
pub mod theme;
pub mod view;
pub mod widgets;

pub use render::render;
