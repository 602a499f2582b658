//! The measurements plotted for every package.

use std::fmt::Display;
use std::fmt::Formatter;

use benchtrend_runs::Benchmark;

/// A benchmark measurement, one chart per package each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MetricKind {
    /// Nanoseconds per operation.
    NsPerOp,
    /// Bytes allocated per operation.
    BytesPerOp,
    /// Allocations per operation.
    AllocsPerOp,
}

impl MetricKind {
    /// All metric kinds in the order their charts are laid out.
    pub const ALL: [MetricKind; 3] = [
        MetricKind::NsPerOp,
        MetricKind::BytesPerOp,
        MetricKind::AllocsPerOp,
    ];

    /// The name of the metric, also used as the chart title and y-axis label.
    pub fn name(self) -> &'static str {
        match self {
            MetricKind::NsPerOp => "ns/op",
            MetricKind::BytesPerOp => "bytes/op",
            MetricKind::AllocsPerOp => "allocs/op",
        }
    }

    /// Reads the measurement of this kind from a benchmark result.
    pub fn value(self, benchmark: &Benchmark) -> f64 {
        match self {
            MetricKind::NsPerOp => benchmark.ns_per_op,
            MetricKind::BytesPerOp => benchmark.mem.bytes_per_op,
            MetricKind::AllocsPerOp => benchmark.mem.allocs_per_op,
        }
    }
}

impl Display for MetricKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
