//! Bitmap Font
//!
//! Text for menus is drawn from a 5x7 bitmap glyph table, one SDL2 rectangle
//! per lit pixel. `BitmapFont` is the font resource handed to UI components:
//! it measures strings and turns them into `TextLabel`s, which a surface
//! later blits at a position.

use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Glyph cell width in font pixels (5 lit columns + 1 spacing)
const CELL_WIDTH: u32 = 6;
const GLYPH_HEIGHT: u32 = 7;

/// Rows of each glyph, top to bottom; bit 4 is the leftmost column
const GLYPHS: &[(char, [u8; 7])] = &[
    ('A', [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11]),
    ('B', [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E]),
    ('C', [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E]),
    ('D', [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E]),
    ('E', [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F]),
    ('F', [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10]),
    ('G', [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0E]),
    ('H', [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11]),
    ('I', [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x1F]),
    ('J', [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C]),
    ('K', [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11]),
    ('L', [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F]),
    ('M', [0x11, 0x1B, 0x15, 0x11, 0x11, 0x11, 0x11]),
    ('N', [0x11, 0x19, 0x15, 0x13, 0x11, 0x11, 0x11]),
    ('O', [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E]),
    ('P', [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10]),
    ('Q', [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D]),
    ('R', [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11]),
    ('S', [0x0E, 0x11, 0x10, 0x0E, 0x01, 0x11, 0x0E]),
    ('T', [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04]),
    ('U', [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E]),
    ('V', [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04]),
    ('W', [0x11, 0x11, 0x11, 0x11, 0x15, 0x1B, 0x11]),
    ('X', [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11]),
    ('Y', [0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04]),
    ('Z', [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F]),
    ('0', [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E]),
    ('1', [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E]),
    ('2', [0x0E, 0x11, 0x01, 0x06, 0x08, 0x10, 0x1F]),
    ('3', [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E]),
    ('4', [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02]),
    ('5', [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E]),
    ('6', [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E]),
    ('7', [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08]),
    ('8', [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E]),
    ('9', [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C]),
    (':', [0x00, 0x00, 0x04, 0x00, 0x04, 0x00, 0x00]),
    ('/', [0x01, 0x02, 0x02, 0x04, 0x08, 0x08, 0x10]),
    ('<', [0x02, 0x04, 0x08, 0x10, 0x08, 0x04, 0x02]),
    ('>', [0x08, 0x04, 0x02, 0x01, 0x02, 0x04, 0x08]),
    ('-', [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00]),
    ('+', [0x00, 0x04, 0x04, 0x1F, 0x04, 0x04, 0x00]),
    ('.', [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C]),
    ('!', [0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04]),
    ('(', [0x02, 0x04, 0x08, 0x08, 0x08, 0x04, 0x02]),
    (')', [0x08, 0x04, 0x02, 0x02, 0x02, 0x04, 0x08]),
    (' ', [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
];

/// Drawn for characters missing from the table
const UNKNOWN_GLYPH: [u8; 7] = [0x1F; 7];

/// Looks up the glyph rows for a character (case-insensitive)
fn glyph(c: char) -> &'static [u8; 7] {
    let upper = c.to_ascii_uppercase();
    GLYPHS
        .iter()
        .find(|(ch, _)| *ch == upper)
        .map(|(_, rows)| rows)
        .unwrap_or(&UNKNOWN_GLYPH)
}

/// A bitmap font at a fixed integer scale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapFont {
    scale: u32,
}

impl BitmapFont {
    /// Creates a font; a scale of 0 is bumped to 1
    pub fn new(scale: u32) -> Self {
        BitmapFont {
            scale: scale.max(1),
        }
    }

    /// Height of one line of text in pixels
    pub fn line_height(&self) -> u32 {
        GLYPH_HEIGHT * self.scale
    }

    /// Width and height of `text` in pixels
    pub fn measure(&self, text: &str) -> (u32, u32) {
        let chars = text.chars().count() as u32;
        (chars * CELL_WIDTH * self.scale, self.line_height())
    }

    /// Prepares `text` for blitting
    pub fn render(&self, text: &str, color: Color) -> TextLabel {
        let (width, height) = self.measure(text);
        TextLabel {
            text: text.to_string(),
            color,
            scale: self.scale,
            width,
            height,
        }
    }
}

/// Text ready to be drawn: string, color and its measured size
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub color: Color,
    pub scale: u32,
    pub width: u32,
    pub height: u32,
}

impl TextLabel {
    /// Top-left position that puts the label's left edge at `x`,
    /// vertically centered on `center_y`
    pub fn mid_left(&self, x: i32, center_y: i32) -> Point {
        Point::new(x, center_y - self.height as i32 / 2)
    }

    /// Top-left position that puts the label's right edge at `x`,
    /// vertically centered on `center_y`
    pub fn mid_right(&self, x: i32, center_y: i32) -> Point {
        Point::new(x - self.width as i32, center_y - self.height as i32 / 2)
    }
}

/// Draws `label` with its top-left corner at `position`
///
/// # Returns
///
/// - `Ok(())` on success
/// - `Err(String)` if SDL2 rendering fails
pub fn draw_label(
    canvas: &mut Canvas<Window>,
    label: &TextLabel,
    position: Point,
) -> Result<(), String> {
    canvas.set_draw_color(label.color);

    let pixel = label.scale as i32;
    let advance = (CELL_WIDTH * label.scale) as i32;

    for (i, c) in label.text.chars().enumerate() {
        let origin_x = position.x() + i as i32 * advance;

        for (row, &bits) in glyph(c).iter().enumerate() {
            for col in 0..5 {
                if (bits >> (4 - col)) & 1 == 1 {
                    canvas.fill_rect(Rect::new(
                        origin_x + col * pixel,
                        position.y() + row as i32 * pixel,
                        label.scale,
                        label.scale,
                    ))?;
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_scales_with_font() {
        let font = BitmapFont::new(3);
        assert_eq!(font.measure("corn"), (4 * 6 * 3, 21));
        assert_eq!(font.measure(""), (0, 21));
    }

    #[test]
    fn test_zero_scale_is_clamped() {
        assert_eq!(BitmapFont::new(0), BitmapFont::new(1));
    }

    #[test]
    fn test_lowercase_uses_uppercase_glyph() {
        assert_eq!(glyph('w'), glyph('W'));
        assert_eq!(glyph('~'), &UNKNOWN_GLYPH);
    }

    #[test]
    fn test_label_anchors() {
        let font = BitmapFont::new(2);
        let label = font.render("buy", Color::RGB(0, 0, 0));
        assert_eq!((label.width, label.height), (36, 14));

        assert_eq!(label.mid_left(100, 50), Point::new(100, 43));
        assert_eq!(label.mid_right(100, 50), Point::new(64, 43));
    }
}
