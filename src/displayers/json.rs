//! JSON displayer: the whole render pass as one document

use latency_numbers_core::{Metric, RenderAdapter, RenderError};
use latency_numbers_types::RevealEvent;
use serde::Serialize;
use std::io::Write;
use std::time::Duration;

#[derive(Serialize)]
struct JsonDocument<'a> {
    year: i32,
    step_ms: u64,
    metrics: &'a [Metric],
    events: &'a [RevealEvent],
}

/// Collects metrics and events, written out on finish
pub struct JsonDisplayer<W: Write> {
    out: W,
    year: i32,
    step: Duration,
    metrics: Vec<Metric>,
    events: Vec<RevealEvent>,
}

impl<W: Write> JsonDisplayer<W> {
    pub fn new(out: W, year: i32, step: Duration) -> Self {
        Self {
            out,
            year,
            step,
            metrics: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderAdapter for JsonDisplayer<W> {
    fn id(&self) -> &str {
        "json"
    }

    fn draw_metric(&mut self, index: usize, metric: &Metric) -> Result<(), RenderError> {
        if index != self.metrics.len() {
            return Err(RenderError::UnknownIndex(index));
        }
        self.metrics.push(metric.clone());
        Ok(())
    }

    fn apply_reveal(&mut self, event: &RevealEvent) -> Result<(), RenderError> {
        if event.index >= self.metrics.len() {
            return Err(RenderError::UnknownIndex(event.index));
        }
        self.events.push(*event);
        Ok(())
    }

    fn finish(&mut self) -> Result<(), RenderError> {
        let document = JsonDocument {
            year: self.year,
            step_ms: self.step.as_millis() as u64,
            metrics: &self.metrics,
            events: &self.events,
        };
        serde_json::to_writer_pretty(&mut self.out, &document)?;
        writeln!(self.out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use latency_numbers_core::{render_all, MetricCatalog, RevealScheduler, STEP_DURATION};
    use serde_json::Value;

    #[test]
    fn test_document_shape() {
        let mut catalog = MetricCatalog::for_year(2026).unwrap();
        let events = RevealScheduler::default().schedule(&mut catalog);
        let mut displayer = JsonDisplayer::new(Vec::new(), 2026, STEP_DURATION);
        render_all(&mut displayer, events).unwrap();

        let doc: Value = serde_json::from_slice(&displayer.into_inner()).unwrap();
        assert_eq!(doc["year"], 2026);
        assert_eq!(doc["step_ms"], 4000);
        let metrics = doc["metrics"].as_array().unwrap();
        let events = doc["events"].as_array().unwrap();
        assert_eq!(metrics.len(), MetricCatalog::LEN);
        assert_eq!(events.len(), MetricCatalog::LEN);

        assert_eq!(metrics[0]["nanoseconds"], 1.0);
        assert_eq!(metrics[0]["unit"], "ns");
        assert_eq!(metrics[0]["tier"], "black");
        assert_eq!(events[21]["class"], "last");
        assert_eq!(events[0]["offset_ms"], 0.0);
    }
}
