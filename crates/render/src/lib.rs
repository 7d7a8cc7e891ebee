//! latency-numbers-render: SVG box grids and the animated HTML page.

pub mod box_grid;
pub mod html_page;

pub use box_grid::{BoxGrid, BoxRect, GridGeometry, DEFAULT_MAX_BOXES};
pub use html_page::HtmlPage;
