//! Configuration management
//!
//! The placeholder table, palette and output settings. Built-in defaults can be
//! replaced by a JSON manifest and overridden from the command line.

pub mod manifest;
pub mod palette;
pub mod placeholders;
pub mod runtime;

pub use manifest::Manifest;
pub use palette::Palette;
pub use placeholders::PlaceholderSpec;
pub use runtime::{Overrides, RunConfig};
