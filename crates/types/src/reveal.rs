//! Reveal events produced by the scheduler and consumed by render adapters.

use serde::{Deserialize, Serialize, Serializer};
use std::time::Duration;

/// Visual modifier applied alongside `show` when a metric is revealed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RevealClass {
    #[default]
    Plain,
    /// Demoted grid that morphs into a single box of the next tier
    Shrink,
    /// Final metric of the sequence
    Last,
}

impl RevealClass {
    /// Modifier class name, empty for [`RevealClass::Plain`]
    pub fn modifier(self) -> &'static str {
        match self {
            RevealClass::Plain => "",
            RevealClass::Shrink => "shrink",
            RevealClass::Last => "last",
        }
    }

    /// Full class attribute an element carries once revealed
    pub fn css_classes(self) -> String {
        match self {
            RevealClass::Plain => "metric show".to_string(),
            other => format!("metric show {}", other.modifier()),
        }
    }
}

/// One scheduled reveal: the metric at `index` of the sorted catalog becomes
/// visible `offset` after the sequence starts.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct RevealEvent {
    pub index: usize,
    #[serde(rename = "offset_ms", serialize_with = "serialize_millis")]
    pub offset: Duration,
    pub class: RevealClass,
}

fn serialize_millis<S: Serializer>(offset: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(offset.as_secs_f64() * 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_classes() {
        assert_eq!(RevealClass::Plain.css_classes(), "metric show");
        assert_eq!(RevealClass::Shrink.css_classes(), "metric show shrink");
        assert_eq!(RevealClass::Last.css_classes(), "metric show last");
    }

    #[test]
    fn test_event_serializes_offset_in_millis() {
        let event = RevealEvent {
            index: 2,
            offset: Duration::from_millis(7200),
            class: RevealClass::Shrink,
        };
        let json = serde_json::to_value(event).unwrap();
        assert_eq!(json["index"], 2);
        assert_eq!(json["offset_ms"], 7200.0);
        assert_eq!(json["class"], "shrink");
    }
}
