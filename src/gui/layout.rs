//! Trade Menu Layout
//!
//! Pure geometry for the trade panel: given the label height of every row,
//! the spacing constants and the viewport size, produce the centered panel
//! rectangle and one background rectangle per row.

use sdl2::rect::Rect;
use serde::Deserialize;

/// Spacing constants for the trade panel, in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LayoutMetrics {
    /// Width of the panel and of every row
    pub panel_width: u32,
    /// Space above and below the label inside each row
    pub row_padding: u32,
    /// Gap between consecutive rows
    pub row_spacing: u32,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        LayoutMetrics {
            panel_width: 400,
            row_padding: 8,
            row_spacing: 10,
        }
    }
}

/// Computed panel and row rectangles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuGeometry {
    /// Bounds of the whole panel, centered in the viewport
    pub panel: Rect,
    /// One background rectangle per row, top to bottom
    pub rows: Vec<Rect>,
}

/// Lays out the panel for rows with the given label heights
///
/// Each row is its label height plus padding above and below. Rows stack
/// from the panel top with `row_spacing` between them. The panel is
/// centered both horizontally and vertically in `viewport`. The same
/// inputs always produce the same geometry.
pub fn compute_layout(
    label_heights: &[u32],
    metrics: &LayoutMetrics,
    viewport: (u32, u32),
) -> MenuGeometry {
    let row_heights: Vec<u32> = label_heights
        .iter()
        .map(|h| h + metrics.row_padding * 2)
        .collect();

    let gaps = row_heights.len().saturating_sub(1) as u32;
    let total_height = row_heights.iter().sum::<u32>() + gaps * metrics.row_spacing;

    let (viewport_width, viewport_height) = viewport;
    let left = (viewport_width as i32 - metrics.panel_width as i32) / 2;
    let top = (viewport_height as i32 - total_height as i32) / 2;

    let mut rows = Vec::with_capacity(row_heights.len());
    let mut y = top;
    for height in row_heights {
        rows.push(Rect::new(left, y, metrics.panel_width, height));
        y += (height + metrics.row_spacing) as i32;
    }

    MenuGeometry {
        panel: Rect::new(left, top, metrics.panel_width, total_height),
        rows,
    }
}
