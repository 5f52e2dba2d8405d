//! Application-wide constants
//!
//! This module contains all magic numbers and string literals used throughout
//! the application, providing a single source of truth for constant values.

/// Placeholder palette (studio site colors)
pub mod palette {
    /// Dark background (#222226)
    pub const BACKGROUND: &str = "#222226";

    /// Gold border (#B79B69)
    pub const BORDER: &str = "#B79B69";

    /// White title text
    pub const TITLE: &str = "#FFFFFF";

    /// Gold subtitle text
    pub const SUBTITLE: &str = "#B79B69";

    /// Grey footer text (filename)
    pub const FOOTER: &str = "#787882";

    /// Diagonal guide lines
    pub const GUIDES: &str = "#3C3C41";
}

/// Placeholder layout measurements (pixels)
pub mod layout {
    /// Distance of the border rectangle from the canvas edge
    pub const BORDER_INSET: u32 = 4;

    /// Border stroke width, grows inward
    pub const BORDER_WIDTH: u32 = 2;

    /// Gap between the title's bottom edge and the vertical center
    pub const TITLE_GAP: i32 = 30;

    /// Offset of the first subtitle line below the vertical center
    pub const SUBTITLE_OFFSET: i32 = 10;

    /// Minimum distance between subtitle line tops
    pub const SUBTITLE_LINE_SPACING: i32 = 30;

    /// Gap kept between subtitle lines when the font outgrows the minimum spacing
    pub const SUBTITLE_LINE_GAP: i32 = 6;

    /// Distance of the footer's top edge from the bottom of the canvas
    pub const FOOTER_FROM_BOTTOM: i32 = 40;

    /// Largest accepted width or height
    pub const MAX_SIDE: u32 = 16_384;
}

/// Font sizing rules: `max(MIN, min(width, height) / DIVISOR)`
pub mod font_size {
    pub const TITLE_MIN: u32 = 28;
    pub const TITLE_DIVISOR: u32 = 12;

    pub const SUBTITLE_MIN: u32 = 18;
    pub const SUBTITLE_DIVISOR: u32 = 22;

    pub const FOOTER_MIN: u32 = 14;
    pub const FOOTER_DIVISOR: u32 = 30;
}

/// Font discovery
pub mod fonts {
    /// Known font files, tried in order. First one that loads wins.
    pub const FONT_CANDIDATES: &[&str] = &[
        "C:/Windows/Fonts/arial.ttf",
        "C:/Windows/Fonts/segoeui.ttf",
        "C:/Windows/Fonts/calibri.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/System/Library/Fonts/Helvetica.ttc",
    ];

    /// File looked up inside the user's font directory
    pub const USER_FONT_FILE: &str = "DejaVuSans.ttf";

    /// Cell size of the built-in bitmap font
    pub const BUILTIN_CELL: u32 = 8;

    /// Drawn in place of characters the built-in font lacks
    pub const BUILTIN_REPLACEMENT: char = '?';
}

/// Output encoding
pub mod encoding {
    /// Default JPEG quality (1-100)
    pub const JPEG_QUALITY: u8 = 85;

    /// Extensions written as JPEG
    pub const JPEG_EXTENSIONS: &[&str] = &["jpg", "jpeg"];

    /// Extensions written as PNG
    pub const PNG_EXTENSIONS: &[&str] = &["png"];
}

/// Output paths
pub mod paths {
    /// Default output directory, relative to the crate root
    pub const OUTPUT_DIR: &str = "assets/images";
}
