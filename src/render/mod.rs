//! Placeholder rasterization and encoding

pub mod canvas;
pub mod encode;
pub mod placeholder;

pub use encode::OutputFormat;
pub use placeholder::draw_placeholder;
