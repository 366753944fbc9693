//! Menu Drawing Surface
//!
//! The handful of drawing primitives the trade menu needs, behind a trait so
//! the menu never touches SDL2 directly. `Canvas<Window>` implements it for
//! the game; tests implement it with a recorder.

use crate::text::{TextLabel, draw_label};
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Drawing backend for screen-space menus
pub trait MenuSurface {
    /// Logical size of the drawable area
    fn viewport_size(&self) -> (u32, u32);

    /// Draws a rectangle with rounded corners
    ///
    /// A `border_width` of 0 fills the rectangle; anything larger strokes an
    /// outline that many pixels thick.
    fn draw_rounded_rect(
        &mut self,
        rect: Rect,
        color: Color,
        border_width: u32,
        corner_radius: u32,
    ) -> Result<(), String>;

    /// Draws a prepared label with its top-left corner at `position`
    fn blit(&mut self, label: &TextLabel, position: Point) -> Result<(), String>;
}

/// Horizontal inset of row `dy` (distance from the nearest top/bottom edge)
/// needed to round a corner of the given radius
fn corner_inset(dy: u32, radius: u32) -> u32 {
    if dy >= radius {
        return 0;
    }
    // Circle centered at (radius, radius); row dy sits (radius - dy - 0.5) above it
    let r = radius as f32;
    let offset = r - dy as f32 - 0.5;
    let half_chord = (r * r - offset * offset).max(0.0).sqrt();
    (r - half_chord).round() as u32
}

/// Fills `rect` with rounded corners as one horizontal span per row
fn fill_rounded(canvas: &mut Canvas<Window>, rect: Rect, radius: u32) -> Result<(), String> {
    let radius = radius.min(rect.width() / 2).min(rect.height() / 2);

    for dy in 0..rect.height() {
        let edge_distance = dy.min(rect.height() - 1 - dy);
        let inset = corner_inset(edge_distance, radius);
        let width = rect.width().saturating_sub(inset * 2);
        if width == 0 {
            continue;
        }
        canvas.fill_rect(Rect::new(
            rect.x() + inset as i32,
            rect.y() + dy as i32,
            width,
            1,
        ))?;
    }

    Ok(())
}

impl MenuSurface for Canvas<Window> {
    fn viewport_size(&self) -> (u32, u32) {
        // Use logical size (game coordinates), not physical window size
        match self.logical_size() {
            (0, 0) => self.output_size().unwrap_or((0, 0)),
            size => size,
        }
    }

    fn draw_rounded_rect(
        &mut self,
        rect: Rect,
        color: Color,
        border_width: u32,
        corner_radius: u32,
    ) -> Result<(), String> {
        self.set_draw_color(color);

        if border_width == 0 {
            return fill_rounded(self, rect, corner_radius);
        }

        // Stroke as a stack of one-pixel outlines shrinking inward
        for i in 0..border_width {
            let inset = i as i32;
            let width = rect.width().saturating_sub(i * 2);
            let height = rect.height().saturating_sub(i * 2);
            if width < 2 || height < 2 {
                break;
            }
            let ring = Rect::new(rect.x() + inset, rect.y() + inset, width, height);
            let radius = corner_radius.saturating_sub(i);

            let points = outline_points(ring, radius);
            self.draw_points(points.as_slice())?;
        }

        Ok(())
    }

    fn blit(&mut self, label: &TextLabel, position: Point) -> Result<(), String> {
        draw_label(self, label, position)
    }
}

/// Edge pixels of a rounded rectangle outline
fn outline_points(rect: Rect, radius: u32) -> Vec<Point> {
    let radius = radius.min(rect.width() / 2).min(rect.height() / 2);
    let mut points = Vec::new();
    let right = rect.x() + rect.width() as i32 - 1;

    for dy in 0..rect.height() {
        let edge_distance = dy.min(rect.height() - 1 - dy);
        let inset = corner_inset(edge_distance, radius) as i32;
        let y = rect.y() + dy as i32;

        if dy == 0 || dy == rect.height() - 1 {
            for x in (rect.x() + inset)..=(right - inset) {
                points.push(Point::new(x, y));
            }
        } else {
            // Bridge to the neighboring row's inset so curves stay connected
            let neighbor = corner_inset(edge_distance.saturating_sub(1), radius) as i32;
            let reach = (neighbor - inset).max(1);
            for step in 0..reach {
                points.push(Point::new(rect.x() + inset + step, y));
                points.push(Point::new(right - inset - step, y));
            }
        }
    }

    points
}
