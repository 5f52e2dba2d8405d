//! Shared helpers used across config, font and render modules

pub mod color;
pub mod types;
