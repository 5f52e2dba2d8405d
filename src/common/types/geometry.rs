//! Geometric types for canvas coordinates and dimensions
//!
//! Provides type-safe wrappers for positions and sizes to avoid
//! common integer confusion (e.g., swapping width/height or x/y).

use serde::Deserialize;
use std::fmt;

/// A position on the canvas (may lie outside it; drawing clips)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Create a new position
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Convert to tuple for compatibility
    pub fn as_tuple(self) -> (i32, i32) {
        (self.x, self.y)
    }
}

/// Image dimensions (width × height)
/// Using a newtype prevents accidentally swapping width and height
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    /// Create new dimensions
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Both sides are non-zero
    pub fn is_positive(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Length of the shorter side
    pub fn min_side(&self) -> u32 {
        self.width.min(self.height)
    }

    /// Convert to tuple for compatibility
    #[cfg(test)]
    pub fn as_tuple(self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl From<(u32, u32)> for Dimensions {
    fn from(tuple: (u32, u32)) -> Self {
        Self::new(tuple.0, tuple.1)
    }
}

/// Formats as the label printed on placeholders, e.g. `800 × 600`
impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} × {}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_as_tuple() {
        let pos = Position::new(-4, 200);
        assert_eq!(pos.x, -4);
        assert_eq!(pos.y, 200);
        assert_eq!(pos.as_tuple(), (-4, 200));
    }

    #[test]
    fn test_dimensions_min_side() {
        assert_eq!(Dimensions::new(1920, 1080).min_side(), 1080);
        assert_eq!(Dimensions::new(800, 1000).min_side(), 800);
    }

    #[test]
    fn test_dimensions_positive() {
        assert!(Dimensions::new(1, 1).is_positive());
        assert!(!Dimensions::new(0, 100).is_positive());
        assert!(!Dimensions::new(100, 0).is_positive());
    }

    #[test]
    fn test_dimensions_display() {
        assert_eq!(Dimensions::new(800, 1000).to_string(), "800 × 1000");
    }

    #[test]
    fn test_dimensions_from_trait() {
        let dims: Dimensions = (1024, 768).into();
        assert_eq!(dims.as_tuple(), (1024, 768));
    }
}
