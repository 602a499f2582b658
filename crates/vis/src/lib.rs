//! [benchtrend]'s visualization library.
//!
//! [benchtrend]: https://github.com/nelusnegur/benchtrend
//!
//! The library turns a history of benchmark runs into a page of line
//! charts, one chart per package and measured metric.
//!
//! **WARNING**: This library is the benchtrend's visualization internal library and
//! there are no plans to stabilize it. The API may break at any time without notice.

#![warn(missing_docs)]

pub mod builder;
pub mod chart;
pub mod color;
pub mod error;
pub mod layout;
pub mod metric;
pub mod registry;
pub mod render;
pub mod template;

pub use crate::builder::RunSeriesBuilder;
pub use crate::layout::View;
pub use crate::template::Page;
