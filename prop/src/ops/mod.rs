//! Core operations.
//!
//! This module contains the logic behind prop commands, separated from
//! CLI argument parsing and output rendering.

pub mod attrs;
pub mod check;
pub mod render;

pub use attrs::attrs;
pub use check::check;
pub use render::render;
