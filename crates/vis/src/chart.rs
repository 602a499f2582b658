//! The chart model handed to Chart.js.

mod options;

use std::cell::Ref;
use std::cell::RefCell;
use std::cell::RefMut;
use std::rc::Rc;

use serde::Serialize;
use serde::Serializer;

use crate::chart::options::Options;
use crate::color::Color;
use crate::metric::MetricKind;

/// A value of a dataset at the time of a run.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DataPoint {
    /// The run time in milliseconds since the unix epoch.
    pub t: i64,
    /// The measured value, `NaN` for runs without a measurement.
    pub y: f64,
    #[serde(skip)]
    run: usize,
}

impl DataPoint {
    /// Creates the point of the run at position `run` in the run timeline.
    pub fn new(run: usize, t: i64, y: f64) -> DataPoint {
        Self { t, y, run }
    }

    /// Creates a point standing in for a missing measurement.
    pub fn placeholder(run: usize, t: i64) -> DataPoint {
        Self::new(run, t, f64::NAN)
    }

    /// The position of the point's run in the run timeline.
    pub fn run(&self) -> usize {
        self.run
    }

    /// Whether the point stands in for a missing measurement.
    pub fn is_placeholder(&self) -> bool {
        self.y.is_nan()
    }
}

/// The series of one benchmark on one chart.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    label: String,
    data: Vec<DataPoint>,
    fill: bool,
    background_color: Color,
    border_color: Color,
    point_radius: u32,
}

impl Dataset {
    /// Creates a dataset named after a benchmark, seeded with its first point.
    pub fn new(label: String, first: DataPoint, color: Color) -> Dataset {
        Self {
            label,
            data: vec![first],
            fill: false,
            background_color: color,
            border_color: color,
            point_radius: 4,
        }
    }

    /// The benchmark name.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The data points in run order.
    pub fn data(&self) -> &[DataPoint] {
        &self.data
    }

    /// The color of the line and its points.
    pub fn color(&self) -> Color {
        self.border_color
    }

    /// Appends the point of a run.
    ///
    /// A run contributes a single point: when the dataset already holds one
    /// for the same run, the point is ignored and `false` is returned.
    pub fn push(&mut self, point: DataPoint) -> bool {
        if self.data.last().is_some_and(|last| last.run >= point.run) {
            return false;
        }

        self.data.push(point);
        true
    }

    /// Inserts placeholders for the runs of `timeline` that have no point,
    /// so that the dataset holds one point per run at the run's position.
    ///
    /// `timeline` holds the time of every run processed so far, in
    /// milliseconds.
    pub fn fill_gaps(&mut self, timeline: &[i64]) {
        if self.data.len() >= timeline.len() {
            return;
        }

        let mut points = std::mem::take(&mut self.data).into_iter().peekable();
        let mut filled = Vec::with_capacity(timeline.len());

        for (run, &t) in timeline.iter().enumerate() {
            match points.next_if(|point| point.run == run) {
                Some(point) => filled.push(point),
                None => filled.push(DataPoint::placeholder(run, t)),
            }
        }

        self.data = filled;
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "lowercase")]
enum ChartKind {
    #[default]
    Line,
}

#[derive(Debug, Clone, Serialize)]
struct ChartData {
    labels: Rc<[String]>,
    datasets: Vec<Dataset>,
}

/// A line chart of one metric for one package.
#[derive(Debug, Clone, Serialize)]
pub struct Chart {
    #[serde(rename = "type")]
    kind: ChartKind,
    data: ChartData,
    options: Options,
    #[serde(skip)]
    metric: MetricKind,
}

impl Chart {
    /// Creates a chart over the shared run labels.
    pub fn new(metric: MetricKind, labels: Rc<[String]>, datasets: Vec<Dataset>) -> Chart {
        Self {
            kind: ChartKind::Line,
            data: ChartData { labels, datasets },
            options: Options::new(metric),
            metric,
        }
    }

    /// The metric plotted by the chart.
    pub fn metric(&self) -> MetricKind {
        self.metric
    }

    /// The x-axis labels, one per run.
    pub fn labels(&self) -> &[String] {
        &self.data.labels
    }

    /// The datasets in creation order.
    pub fn datasets(&self) -> &[Dataset] {
        &self.data.datasets
    }

    /// Finds the first dataset with the given benchmark name.
    pub fn dataset(&self, label: &str) -> Option<&Dataset> {
        self.data.datasets.iter().find(|d| d.label == label)
    }

    /// Finds the first dataset with the given benchmark name.
    pub fn dataset_mut(&mut self, label: &str) -> Option<&mut Dataset> {
        self.data.datasets.iter_mut().find(|d| d.label == label)
    }

    /// Pads every dataset to the length of `timeline`.
    pub fn fill_gaps(&mut self, timeline: &[i64]) {
        for dataset in &mut self.data.datasets {
            dataset.fill_gaps(timeline);
        }
    }
}

/// A chart shared between the chart registry, which keeps adding data
/// to it, and the page element drawing it.
#[derive(Debug, Clone)]
pub struct ChartHandle(Rc<RefCell<Chart>>);

impl ChartHandle {
    /// Wraps a chart into a shareable handle.
    pub fn new(chart: Chart) -> ChartHandle {
        Self(Rc::new(RefCell::new(chart)))
    }

    /// Borrows the chart.
    ///
    /// # Panics
    ///
    /// Panics if the chart is currently mutably borrowed.
    pub fn borrow(&self) -> Ref<'_, Chart> {
        self.0.borrow()
    }

    /// Mutably borrows the chart.
    ///
    /// # Panics
    ///
    /// Panics if the chart is currently borrowed.
    pub fn borrow_mut(&self) -> RefMut<'_, Chart> {
        self.0.borrow_mut()
    }
}

impl Serialize for ChartHandle {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.borrow().serialize(serializer)
    }
}
