//! Render adapter trait and a headless implementation

use crate::metric::Metric;
use crate::scheduler::RevealEvents;
use latency_numbers_types::RevealEvent;

/// Errors raised by render adapters
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// A reveal event referenced an element that was never drawn
    #[error("no element drawn for metric index {0}")]
    UnknownIndex(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Trait for everything that presents a revealed catalog.
///
/// Adapters first receive every metric in reveal order through
/// [`draw_metric`](RenderAdapter::draw_metric), which creates a hidden
/// element, and then one [`apply_reveal`](RenderAdapter::apply_reveal) per
/// event. An event only ever touches the element at its own index.
pub trait RenderAdapter {
    /// Unique identifier for this adapter type
    fn id(&self) -> &str;

    /// Create the (hidden) element for the metric at `index`
    fn draw_metric(&mut self, index: usize, metric: &Metric) -> Result<(), RenderError>;

    /// Apply the reveal classes for a fired event
    fn apply_reveal(&mut self, event: &RevealEvent) -> Result<(), RenderError>;

    /// Called once after the last event has been applied
    fn finish(&mut self) -> Result<(), RenderError> {
        Ok(())
    }
}

/// Draw every metric of `events`, then apply all events back to back.
///
/// Used by adapters whose output encodes the timing itself (HTML, JSON)
/// and by headless tests.
pub fn render_all(adapter: &mut dyn RenderAdapter, events: RevealEvents<'_>) -> Result<(), RenderError> {
    for (index, metric) in events.metrics().iter().enumerate() {
        adapter.draw_metric(index, metric)?;
    }
    for event in events {
        adapter.apply_reveal(&event)?;
    }
    adapter.finish()
}

/// Element state kept by [`HeadlessAdapter`]
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessElement {
    pub display_string: String,
    pub classes: String,
}

/// Adapter without any output, recording element classes for inspection
#[derive(Debug, Default)]
pub struct HeadlessAdapter {
    elements: Vec<HeadlessElement>,
    applied: Vec<RevealEvent>,
    finished: bool,
}

impl HeadlessAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elements(&self) -> &[HeadlessElement] {
        &self.elements
    }

    /// Events in the order they were applied
    pub fn applied(&self) -> &[RevealEvent] {
        &self.applied
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl RenderAdapter for HeadlessAdapter {
    fn id(&self) -> &str {
        "headless"
    }

    fn draw_metric(&mut self, index: usize, metric: &Metric) -> Result<(), RenderError> {
        if index != self.elements.len() {
            return Err(RenderError::UnknownIndex(index));
        }
        self.elements.push(HeadlessElement {
            display_string: metric.display_string().to_string(),
            classes: "metric hidden".to_string(),
        });
        Ok(())
    }

    fn apply_reveal(&mut self, event: &RevealEvent) -> Result<(), RenderError> {
        let element = self
            .elements
            .get_mut(event.index)
            .ok_or(RenderError::UnknownIndex(event.index))?;
        element.classes = event.class.css_classes();
        self.applied.push(*event);
        Ok(())
    }

    fn finish(&mut self) -> Result<(), RenderError> {
        self.finished = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MetricCatalog, RevealScheduler};
    use latency_numbers_types::RevealClass;
    use std::time::Duration;

    #[test]
    fn test_render_all_reveals_every_element() {
        let mut catalog = MetricCatalog::for_year(2026).unwrap();
        let events = RevealScheduler::default().schedule(&mut catalog);
        let mut adapter = HeadlessAdapter::new();
        render_all(&mut adapter, events).unwrap();

        assert!(adapter.is_finished());
        assert_eq!(adapter.elements().len(), MetricCatalog::LEN);
        assert!(adapter.elements().iter().all(|e| e.classes.starts_with("metric show")));
        assert_eq!(
            adapter.elements().last().unwrap().classes,
            "metric show last"
        );
        let shrinking = adapter
            .elements()
            .iter()
            .filter(|e| e.classes == "metric show shrink")
            .count();
        assert_eq!(shrinking, 3);
    }

    #[test]
    fn test_reveal_of_undrawn_element_fails() {
        let mut adapter = HeadlessAdapter::new();
        let event = RevealEvent {
            index: 4,
            offset: Duration::ZERO,
            class: RevealClass::Plain,
        };
        assert!(matches!(
            adapter.apply_reveal(&event),
            Err(RenderError::UnknownIndex(4))
        ));
    }
}
