//! Box grid layout and SVG drawing.
//!
//! A metric is drawn as `ceil(box_count)` unit boxes laid out left to right,
//! top to bottom, wrapping after a fixed number of columns. Only the final
//! box may be fractional: when `box_count` has a remainder `0 < f < 1`, the
//! last box is `f` of a box wide and full height. Every other box is a full
//! square.

use latency_numbers_core::{BOX_SIZE_PX, GRID_COLUMNS};
use latency_numbers_types::Tier;
use std::fmt::Write;

/// Upper bound on boxes drawn for one metric
pub const DEFAULT_MAX_BOXES: usize = 10_000;

/// Grid dimensions shared by all metrics of a page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    /// Boxes per row
    pub columns: u32,
    /// Edge length of one box in pixels
    pub box_size: f64,
    /// Grids beyond this many boxes are truncated
    pub max_boxes: usize,
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self {
            columns: GRID_COLUMNS,
            box_size: BOX_SIZE_PX,
            max_boxes: DEFAULT_MAX_BOXES,
        }
    }
}

/// One drawn box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Laid-out boxes for one metric
#[derive(Debug, Clone, PartialEq)]
pub struct BoxGrid {
    rects: Vec<BoxRect>,
    width: f64,
    height: f64,
    truncated: bool,
}

impl BoxGrid {
    pub fn layout(box_count: f64, geometry: &GridGeometry) -> Self {
        let columns = geometry.columns.max(1) as usize;
        let size = geometry.box_size;
        let box_count = if box_count.is_finite() { box_count.max(0.0) } else { 0.0 };

        let needed = box_count.ceil() as usize;
        let truncated = needed > geometry.max_boxes;
        let total = if truncated {
            log::warn!(
                "Box grid of {} boxes exceeds limit of {}, truncating",
                needed,
                geometry.max_boxes
            );
            geometry.max_boxes
        } else {
            needed
        };

        let mut rects = Vec::with_capacity(total);
        let mut width: f64 = 0.0;
        for i in 0..total {
            let remaining = box_count - i as f64;
            let box_width = if remaining < 1.0 { remaining * size } else { size };
            let x = (i % columns) as f64 * size;
            let y = (i / columns) as f64 * size;
            width = width.max(x + box_width);
            rects.push(BoxRect {
                x,
                y,
                width: box_width,
                height: size,
            });
        }

        let rows = total.div_ceil(columns);
        Self {
            rects,
            width,
            height: rows as f64 * size,
            truncated,
        }
    }

    pub fn rects(&self) -> &[BoxRect] {
        &self.rects
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Whether boxes were dropped to stay under the limit
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Inline SVG drawing of the grid in `tier`'s colors
    pub fn to_svg(&self, tier: Tier) -> String {
        let style = format!(
            "stroke:{}; fill: {}",
            tier.stroke().to_hex(),
            tier.fill().to_hex()
        );
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
            self.width, self.height
        );
        for rect in &self.rects {
            // Writing into a String cannot fail
            let _ = write!(
                svg,
                r#"<rect x="{}" y="{}" width="{}" height="{}" style="{}"/>"#,
                rect.x, rect.y, rect.width, rect.height, style
            );
        }
        svg.push_str("</svg>");
        svg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(box_count: f64) -> BoxGrid {
        BoxGrid::layout(box_count, &GridGeometry::default())
    }

    #[test]
    fn test_full_grid_is_ten_by_ten() {
        let g = grid(100.0);
        assert_eq!(g.rects().len(), 100);
        assert_eq!(g.width(), 300.0);
        assert_eq!(g.height(), 300.0);
        let last = g.rects().last().unwrap();
        assert_eq!((last.x, last.y), (270.0, 270.0));
    }

    #[test]
    fn test_only_last_box_is_fractional() {
        let g = grid(12.5);
        assert_eq!(g.rects().len(), 13);
        assert!(g.rects()[..12].iter().all(|r| r.width == 30.0));
        let last = g.rects()[12];
        assert_eq!(last.width, 15.0);
        assert_eq!(last.height, 30.0);
        assert_eq!((last.x, last.y), (60.0, 30.0));
        assert_eq!(g.height(), 60.0);
        assert_eq!(g.width(), 300.0);
    }

    #[test]
    fn test_single_partial_box() {
        let g = grid(0.4);
        assert_eq!(g.rects().len(), 1);
        assert!((g.width() - 12.0).abs() < 1e-9);
        assert_eq!(g.height(), 30.0);
    }

    #[test]
    fn test_partial_row_width() {
        let g = grid(3.0);
        assert_eq!(g.width(), 90.0);
        assert_eq!(g.height(), 30.0);
        assert!(grid(0.0).rects().is_empty());
    }

    #[test]
    fn test_truncates_oversized_grids() {
        let geometry = GridGeometry {
            max_boxes: 50,
            ..GridGeometry::default()
        };
        let g = BoxGrid::layout(1234.0, &geometry);
        assert!(g.is_truncated());
        assert_eq!(g.rects().len(), 50);
        assert_eq!(g.height(), 150.0);
    }

    #[test]
    fn test_svg_uses_tier_palette() {
        let svg = grid(2.0).to_svg(Tier::Green);
        assert!(svg.starts_with("<svg"));
        assert_eq!(svg.matches("<rect").count(), 2);
        assert!(svg.contains("stroke:#FFFFFF; fill: #00CC00"));
        assert!(svg.contains(r#"width="60" height="30""#));
    }
}
