//! Self-contained HTML page rendering of a revealed catalog.
//!
//! Every metric becomes a hidden `div.metric` holding its box grid and
//! caption. Reveal events are embedded with their offsets and applied by a
//! small inline script, one independent timeout per event. The stylesheet's
//! `--stepTime` is generated from the same step duration as the schedule.

use crate::box_grid::{BoxGrid, GridGeometry};
use latency_numbers_core::{Metric, RenderAdapter, RenderError};
use latency_numbers_types::RevealEvent;
use log::debug;
use std::fmt::Write;
use std::time::Duration;

const STYLESHEET: &str = r#"
body { font-family: sans-serif; margin: 2em; }
.metric { display: flex; align-items: flex-start; gap: 1em; margin-bottom: 1em; }
.metric.hidden { opacity: 0; }
.metric.show { opacity: 1; transition: opacity calc(var(--stepTime) * 0.25) ease-in; }
.metric .boxes svg { display: block; transform-origin: top left; }
.metric.show.shrink .boxes svg { animation: shrink var(--stepTime) ease-in-out forwards; }
.metric.show.shrink { overflow: hidden; animation: collapse var(--stepTime) ease-in forwards; }
.metric.last .caption { font-weight: bold; }
@keyframes shrink { 0%, 40% { transform: scale(1); } 90%, 100% { transform: scale(0.1); } }
@keyframes collapse { 0%, 90% { max-height: 400px; } 100% { max-height: 0; opacity: 0; margin: 0; } }
"#;

const SCRIPT: &str = r#"
for (const [index, offset, classes] of reveals) {
    setTimeout(() => {
        const element = document.querySelector(`.metric[data-number="${index}"]`);
        if (element) {
            element.setAttribute("class", classes);
        }
    }, offset);
}
"#;

/// Render adapter producing one HTML document
#[derive(Debug, Clone)]
pub struct HtmlPage {
    year: i32,
    geometry: GridGeometry,
    step: Duration,
    elements: Vec<String>,
    reveals: Vec<RevealEvent>,
    document: Option<String>,
}

impl HtmlPage {
    pub fn new(year: i32, geometry: GridGeometry, step: Duration) -> Self {
        Self {
            year,
            geometry,
            step,
            elements: Vec::new(),
            reveals: Vec::new(),
            document: None,
        }
    }

    /// The finished document, available after [`RenderAdapter::finish`]
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    pub fn into_document(self) -> Option<String> {
        self.document
    }

    fn build_document(&self) -> Result<String, RenderError> {
        let reveals: Vec<(usize, f64, String)> = self
            .reveals
            .iter()
            .map(|e| (e.index, e.offset.as_secs_f64() * 1000.0, e.class.css_classes()))
            .collect();
        let reveals = serde_json::to_string(&reveals)?;

        let mut html = String::new();
        // Writing into a String cannot fail
        let _ = write!(
            html,
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
             <title>Latency numbers every programmer should know ({year})</title>\n\
             <style>\n:root {{ --stepTime: {step}ms; }}{style}</style>\n</head>\n<body>\n\
             <h1>Latency numbers every programmer should know ({year})</h1>\n\
             <div id=\"container\">\n",
            year = self.year,
            step = self.step.as_millis(),
            style = STYLESHEET,
        );
        for element in &self.elements {
            html.push_str(element);
            html.push('\n');
        }
        // Writing into a String cannot fail
        let _ = write!(
            html,
            "</div>\n<script>\nconst reveals = {};{}</script>\n</body>\n</html>\n",
            reveals, SCRIPT
        );
        Ok(html)
    }
}

impl RenderAdapter for HtmlPage {
    fn id(&self) -> &str {
        "html"
    }

    fn draw_metric(&mut self, index: usize, metric: &Metric) -> Result<(), RenderError> {
        let grid = BoxGrid::layout(metric.box_count(), &self.geometry);
        debug!(
            "Metric {} drawn as {} {} boxes",
            index,
            grid.rects().len(),
            metric.tier().name()
        );
        self.elements.push(format!(
            "<div class=\"metric hidden\" data-number=\"{}\"><div class=\"boxes\">{}</div><div class=\"caption\">{}</div></div>",
            index,
            grid.to_svg(metric.tier()),
            escape_html(metric.display_string())
        ));
        Ok(())
    }

    fn apply_reveal(&mut self, event: &RevealEvent) -> Result<(), RenderError> {
        if event.index >= self.elements.len() {
            return Err(RenderError::UnknownIndex(event.index));
        }
        self.reveals.push(*event);
        Ok(())
    }

    fn finish(&mut self) -> Result<(), RenderError> {
        self.document = Some(self.build_document()?);
        Ok(())
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use latency_numbers_core::{render_all, MetricCatalog, RevealScheduler, STEP_DURATION};

    fn page_for(year: i32) -> String {
        let mut catalog = MetricCatalog::for_year(year).unwrap();
        let events = RevealScheduler::default().schedule(&mut catalog);
        let mut page = HtmlPage::new(year, GridGeometry::default(), STEP_DURATION);
        render_all(&mut page, events).unwrap();
        page.into_document().unwrap()
    }

    #[test]
    fn test_page_contains_every_metric_hidden() {
        let html = page_for(2026);
        assert_eq!(html.matches("class=\"metric hidden\"").count(), MetricCatalog::LEN);
        assert!(html.contains("data-number=\"0\""));
        assert!(html.contains("data-number=\"21\""));
        assert!(html.contains("Round trip in same datacenter: 500 μs = 500,000 ns"));
    }

    #[test]
    fn test_step_time_synced_with_schedule() {
        let html = page_for(2026);
        assert!(html.contains("--stepTime: 4000ms;"));
        assert!(html.contains("[0,0.0,\"metric show\"]"));
        assert!(html.contains("\"metric show last\"]]"));
        assert_eq!(html.matches("metric show shrink").count(), 3);
    }

    #[test]
    fn test_reveal_before_draw_is_rejected() {
        let mut page = HtmlPage::new(2026, GridGeometry::default(), STEP_DURATION);
        let event = RevealEvent {
            index: 0,
            offset: Duration::ZERO,
            class: Default::default(),
        };
        assert!(page.apply_reveal(&event).is_err());
        assert!(page.document().is_none());
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
    }
}
