//! The charts created while processing one benchmark history.

use std::collections::HashMap;
use std::fmt::Display;
use std::fmt::Formatter;

use crate::chart::ChartHandle;
use crate::metric::MetricKind;

/// Identifies the chart of one metric of one package.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChartKey {
    pkg: String,
    metric: MetricKind,
}

impl ChartKey {
    /// Creates the key of the `metric` chart of `pkg`.
    pub fn new(pkg: &str, metric: MetricKind) -> ChartKey {
        Self {
            pkg: pkg.to_owned(),
            metric,
        }
    }

}

/// Formats the key as `<pkg>-<metric>`, the element id of the chart.
impl Display for ChartKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.pkg, self.metric)
    }
}

/// Maps every (package, metric) pair seen so far to its chart.
#[derive(Debug, Default)]
pub struct ChartRegistry {
    charts: HashMap<String, HashMap<MetricKind, ChartHandle>>,
}

impl ChartRegistry {
    /// Creates an empty registry.
    pub fn new() -> ChartRegistry {
        Self::default()
    }

    /// Registers a chart, replacing the chart previously registered
    /// under the same key.
    pub fn insert(&mut self, key: ChartKey, chart: ChartHandle) -> Option<ChartHandle> {
        self.charts
            .entry(key.pkg)
            .or_default()
            .insert(key.metric, chart)
    }

    /// Looks up the `metric` chart of `pkg`.
    pub fn get(&self, pkg: &str, metric: MetricKind) -> Option<&ChartHandle> {
        self.charts.get(pkg)?.get(&metric)
    }

    /// Whether the `metric` chart of `pkg` exists.
    pub fn contains(&self, pkg: &str, metric: MetricKind) -> bool {
        self.get(pkg, metric).is_some()
    }

    /// The number of charts.
    pub fn len(&self) -> usize {
        self.charts.values().map(HashMap::len).sum()
    }

    /// Whether no chart has been registered.
    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    /// Iterates over the package, metric and chart of every chart in
    /// arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, MetricKind, &ChartHandle)> {
        self.charts.iter().flat_map(|(pkg, charts)| {
            charts
                .iter()
                .map(move |(metric, chart)| (pkg.as_str(), *metric, chart))
        })
    }

    /// Pads the datasets of all charts to the length of `timeline`.
    pub fn fill_gaps(&self, timeline: &[i64]) {
        for chart in self.charts.values().flat_map(HashMap::values) {
            chart.borrow_mut().fill_gaps(timeline);
        }
    }
}
