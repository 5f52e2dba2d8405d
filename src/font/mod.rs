//! Font discovery and text rasterization
//!
//! Fonts are resolved once per run: candidates are probed in order and the
//! first usable TrueType font wins, with a built-in bitmap font as the last resort.

pub mod builtin;
pub mod discovery;
pub mod rendering;

pub use rendering::{FontFace, RenderedText};
