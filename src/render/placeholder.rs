//! Placeholder layout and drawing
//!
//! Layout, for a canvas of `w × h`:
//! - border rectangle inset by 4 px, 2 px stroke
//! - two diagonal guide lines between the inset corners
//! - title centered horizontally, bottom edge 30 px above the middle
//! - subtitle lines starting 10 px below the middle, at least 30 px apart
//! - `[ filename ]` centered 40 px above the bottom edge

use image::RgbImage;

use crate::common::types::{Dimensions, Position};
use crate::config::{Palette, PlaceholderSpec};
use crate::constants::{font_size, layout};
use crate::font::{FontFace, RenderedText};
use crate::render::canvas::Canvas;

/// Pixel sizes for the three text blocks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextSizes {
    pub title: f32,
    pub subtitle: f32,
    pub footer: f32,
}

impl TextSizes {
    /// Scale with the shorter side, never below the readable minimums
    pub fn for_dimensions(dimensions: Dimensions) -> Self {
        let side = dimensions.min_side();
        let size = |min: u32, divisor: u32| (side / divisor).max(min) as f32;
        Self {
            title: size(font_size::TITLE_MIN, font_size::TITLE_DIVISOR),
            subtitle: size(font_size::SUBTITLE_MIN, font_size::SUBTITLE_DIVISOR),
            footer: size(font_size::FOOTER_MIN, font_size::FOOTER_DIVISOR),
        }
    }
}

/// Left edge that centers `text` horizontally on a canvas `canvas_width` wide
fn centered_x(canvas_width: u32, text: &RenderedText) -> i32 {
    (canvas_width as i32 - text.width as i32) / 2
}

/// Distance between subtitle line tops; grows with large fonts so lines never overlap
fn line_step(lines: &[RenderedText]) -> i32 {
    let tallest = lines.iter().map(|line| line.height as i32).max().unwrap_or(0);
    layout::SUBTITLE_LINE_SPACING.max(tallest + layout::SUBTITLE_LINE_GAP)
}

/// Draw one placeholder image
pub fn draw_placeholder(spec: &PlaceholderSpec, palette: &Palette, face: &FontFace) -> RgbImage {
    let dims = spec.dimensions;
    let (w, h) = (dims.width as i32, dims.height as i32);
    let mut canvas = Canvas::new(dims, palette.background);

    let inset = layout::BORDER_INSET as i32;
    canvas.stroke_rect(
        Position::new(inset, inset),
        Position::new(w - inset - 1, h - inset - 1),
        layout::BORDER_WIDTH,
        palette.border,
    );

    // Diagonal guides
    canvas.stroke_line(
        Position::new(inset, inset),
        Position::new(w - inset, h - inset),
        palette.guides,
    );
    canvas.stroke_line(
        Position::new(w - inset, inset),
        Position::new(inset, h - inset),
        palette.guides,
    );

    let sizes = TextSizes::for_dimensions(dims);
    let middle = h / 2;

    let title = face.sized(sizes.title).render(&spec.title);
    canvas.draw_text(
        &title,
        Position::new(
            centered_x(dims.width, &title),
            middle - title.height as i32 - layout::TITLE_GAP,
        ),
        palette.title,
    );

    let subtitle_font = face.sized(sizes.subtitle);
    let lines: Vec<RenderedText> = spec
        .subtitle_lines()
        .iter()
        .map(|line| subtitle_font.render(line))
        .collect();
    let line_step = line_step(&lines);
    for (i, rendered) in lines.iter().enumerate() {
        canvas.draw_text(
            rendered,
            Position::new(
                centered_x(dims.width, rendered),
                middle + layout::SUBTITLE_OFFSET + i as i32 * line_step,
            ),
            palette.subtitle,
        );
    }

    let footer = face.sized(sizes.footer).render(&spec.footer_label());
    canvas.draw_text(
        &footer,
        Position::new(
            centered_x(dims.width, &footer),
            h - layout::FOOTER_FROM_BOTTOM,
        ),
        palette.footer,
    );

    canvas.into_image()
}
