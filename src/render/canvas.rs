//! RGB drawing surface with the few primitives placeholders need

use image::{Rgb, RgbImage};

use crate::common::color::HexColor;
use crate::common::types::{Dimensions, Position};
use crate::font::RenderedText;

pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Create a canvas filled with a solid color
    pub fn new(dimensions: Dimensions, background: HexColor) -> Self {
        Self {
            image: RgbImage::from_pixel(dimensions.width, dimensions.height, background.to_rgb()),
        }
    }

    #[cfg(test)]
    pub fn dimensions(&self) -> Dimensions {
        self.image.dimensions().into()
    }

    #[cfg(test)]
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    fn put(&mut self, x: i32, y: i32, color: Rgb<u8>) {
        if x >= 0 && y >= 0 && (x as u32) < self.image.width() && (y as u32) < self.image.height()
        {
            self.image.put_pixel(x as u32, y as u32, color);
        }
    }

    fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb<u8>) {
        for y in y0..=y1 {
            for x in x0..=x1 {
                self.put(x, y, color);
            }
        }
    }

    /// Outline the rectangle with inclusive corners `top_left`/`bottom_right`.
    /// The stroke grows inward from the outer edge.
    pub fn stroke_rect(
        &mut self,
        top_left: Position,
        bottom_right: Position,
        width: u32,
        color: HexColor,
    ) {
        let (x0, y0) = top_left.as_tuple();
        let (x1, y1) = bottom_right.as_tuple();
        if x1 < x0 || y1 < y0 || width == 0 {
            return;
        }
        let rgb = color.to_rgb();
        let w = width as i32 - 1;

        // Top, bottom, left, right bands
        self.fill_rect(x0, y0, x1, (y0 + w).min(y1), rgb);
        self.fill_rect(x0, (y1 - w).max(y0), x1, y1, rgb);
        self.fill_rect(x0, y0, (x0 + w).min(x1), y1, rgb);
        self.fill_rect((x1 - w).max(x0), y0, x1, y1, rgb);
    }

    /// 1 px line between two points (Bresenham), clipped to the canvas
    pub fn stroke_line(&mut self, from: Position, to: Position, color: HexColor) {
        let rgb = color.to_rgb();
        let (mut x, mut y) = from.as_tuple();
        let (x1, y1) = to.as_tuple();

        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.put(x, y, rgb);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Blend a coverage mask onto the canvas with its top-left corner at `origin`
    pub fn draw_text(&mut self, text: &RenderedText, origin: Position, color: HexColor) {
        if text.is_empty() {
            return;
        }
        let [fg_r, fg_g, fg_b] = color.to_rgb().0;
        let alpha = color.alpha() as u32;

        for row in 0..text.height {
            for col in 0..text.width {
                let coverage = text.coverage[row * text.width + col] as u32;
                if coverage == 0 {
                    continue;
                }

                let x = origin.x + col as i32;
                let y = origin.y + row as i32;
                if x < 0
                    || y < 0
                    || x as u32 >= self.image.width()
                    || y as u32 >= self.image.height()
                {
                    continue;
                }

                // Integer math: weight = coverage * alpha in 0..=255
                let weight = coverage * alpha / 255;
                let pixel = self.image.get_pixel_mut(x as u32, y as u32);
                let blend = |bg: u8, fg: u8| {
                    ((fg as u32 * weight + bg as u32 * (255 - weight) + 127) / 255) as u8
                };
                *pixel = Rgb([
                    blend(pixel[0], fg_r),
                    blend(pixel[1], fg_g),
                    blend(pixel[2], fg_b),
                ]);
            }
        }
    }
}
