//! Terminal displayer: one caption line per revealed metric

use latency_numbers_core::{format_number, Metric, RenderAdapter, RenderError, BOXES_PER_TIER};
use latency_numbers_types::{RevealClass, RevealEvent, Tier};
use std::io::Write;

/// Writes each metric's line when its reveal event is applied
pub struct TextDisplayer<W: Write> {
    out: W,
    lines: Vec<String>,
}

impl<W: Write> TextDisplayer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            lines: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Box count as shown next to the caption: whole boxes, or up to two
/// decimals for a single partial box
fn format_boxes(box_count: f64) -> String {
    if box_count < 1.0 {
        format!("{:.2}", box_count)
    } else {
        format_number(box_count)
    }
}

fn metric_line(metric: &Metric) -> String {
    let boxes = format_boxes(metric.box_count());
    let tier = metric.tier();
    let plural = if boxes == "1" { "" } else { "es" };
    format!(
        "[{:<5}] {:>7} box{:<2}  {}",
        tier.name(),
        boxes,
        plural,
        metric.display_string()
    )
}

impl<W: Write> RenderAdapter for TextDisplayer<W> {
    fn id(&self) -> &str {
        "text"
    }

    fn draw_metric(&mut self, index: usize, metric: &Metric) -> Result<(), RenderError> {
        if index != self.lines.len() {
            return Err(RenderError::UnknownIndex(index));
        }
        self.lines.push(metric_line(metric));
        Ok(())
    }

    fn apply_reveal(&mut self, event: &RevealEvent) -> Result<(), RenderError> {
        let line = self
            .lines
            .get(event.index)
            .ok_or(RenderError::UnknownIndex(event.index))?;
        match event.class {
            RevealClass::Shrink => writeln!(self.out, "{}  (100 boxes become 1)", line)?,
            _ => writeln!(self.out, "{}", line)?,
        }
        self.out.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), RenderError> {
        let legend: Vec<String> = Tier::ALL
            .iter()
            .map(|tier| {
                let nanos = BOXES_PER_TIER.powi(tier.index());
                format!("{} = {} ns", tier.name(), format_number(nanos))
            })
            .collect();
        writeln!(self.out, "\nOne box: {}", legend.join(", "))?;
        self.out.flush()?;
        Ok(())
    }
}
