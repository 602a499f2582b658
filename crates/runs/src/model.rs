//! The benchmark history document.
//!
//! Field names follow the document layout, which uses `PascalCase` keys:
//!
//! ```json
//! [{
//!   "Date": 1614902400,
//!   "Version": "abcdef1234",
//!   "Suites": [{
//!     "Pkg": "github.com/acme/cache",
//!     "Benchmarks": [{
//!       "Name": "BenchmarkGet",
//!       "NsPerOp": 120.5,
//!       "Mem": { "BytesPerOp": 64, "AllocsPerOp": 2 }
//!     }]
//!   }]
//! }]
//! ```
//!
//! Numeric measurements that are missing from a record parse as `NaN`
//! and are plotted as gaps.

use serde::Deserialize;
use serde::Serialize;

/// One benchmark session, usually one commit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Run {
    /// The time of the run, in seconds since the unix epoch. Fractional
    /// and exponent forms are accepted.
    pub date: f64,

    /// The version the benchmarks ran against, e.g. a commit hash.
    #[serde(default)]
    pub version: String,

    /// The results of the run grouped by package.
    #[serde(default)]
    pub suites: Vec<Suite>,
}

impl Run {
    /// The run time in milliseconds, as plotted on the charts.
    ///
    /// Dates beyond the range of `i64` milliseconds saturate.
    pub fn timestamp_millis(&self) -> i64 {
        (self.date * 1000.0) as i64
    }
}

/// The results of one package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Suite {
    /// The package name.
    pub pkg: String,

    /// The benchmarks of the package in reporting order.
    #[serde(default)]
    pub benchmarks: Vec<Benchmark>,
}

/// The result of one named benchmark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Benchmark {
    /// The benchmark name.
    pub name: String,

    /// Nanoseconds per operation.
    #[serde(default = "missing")]
    pub ns_per_op: f64,

    /// Memory measurements.
    #[serde(default)]
    pub mem: Mem,
}

/// Memory measurements of a benchmark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Mem {
    /// Bytes allocated per operation.
    #[serde(default = "missing")]
    pub bytes_per_op: f64,

    /// Allocations per operation.
    #[serde(default = "missing")]
    pub allocs_per_op: f64,
}

impl Default for Mem {
    fn default() -> Self {
        Self {
            bytes_per_op: f64::NAN,
            allocs_per_op: f64::NAN,
        }
    }
}

fn missing() -> f64 {
    f64::NAN
}
