use crate::chart::ChartHandle;
use crate::layout::Element;

/// The drawing surface of a chart.
#[derive(Debug)]
pub struct Canvas {
    id: String,
    chart: ChartHandle,
}

impl Canvas {
    /// Creates the canvas with the given element id drawing `chart`.
    pub fn new(id: String, chart: ChartHandle) -> Canvas {
        Self { id, chart }
    }

    /// The chart drawn on the canvas.
    pub fn chart(&self) -> &ChartHandle {
        &self.chart
    }
}

impl Element for Canvas {
    fn id(&self) -> Option<&str> {
        Some(self.id.as_str())
    }
}
