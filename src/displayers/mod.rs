//! Built-in render adapters
//!
//! The HTML page adapter lives in the render crate; the adapters here write
//! plain text or JSON to any `std::io::Write`.

mod json;
mod text;

pub use json::JsonDisplayer;
pub use text::TextDisplayer;

use crate::config::{AppConfig, OutputFormat};
use anyhow::Result;
use latency_numbers_core::{render_all, MetricCatalog};
use latency_numbers_render::HtmlPage;
use std::io::Write;

/// Render `catalog` in `format` with every reveal applied at once.
///
/// Timing is preserved in the output where the format can carry it (HTML
/// script offsets, JSON `offset_ms`).
pub fn render_static(
    config: &AppConfig,
    format: OutputFormat,
    catalog: &mut MetricCatalog,
    out: &mut dyn Write,
) -> Result<()> {
    let year = catalog.year();
    let events = config.animation.scheduler().schedule(catalog);
    match format {
        OutputFormat::Text => {
            let mut displayer = TextDisplayer::new(&mut *out);
            render_all(&mut displayer, events)?;
        }
        OutputFormat::Json => {
            let mut displayer = JsonDisplayer::new(&mut *out, year, config.animation.step_duration());
            render_all(&mut displayer, events)?;
        }
        OutputFormat::Html => {
            let mut page = HtmlPage::new(year, config.grid.geometry(), config.animation.step_duration());
            render_all(&mut page, events)?;
            if let Some(document) = page.document() {
                out.write_all(document.as_bytes())?;
            }
        }
    }
    out.flush()?;
    Ok(())
}
