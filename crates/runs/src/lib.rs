//! [benchtrend]'s benchmark history library.
//!
//! [benchtrend]: https://github.com/nelusnegur/benchtrend
//!
//! The library reads a history of benchmark runs, the JSON document
//! produced by `gobenchdata`, from a file or an HTTP endpoint, and offers
//! the helpers needed to lay the runs out on a time axis.

#![warn(missing_docs)]

mod label;
mod order;

pub mod error;
pub mod fetch;
pub mod model;

pub use crate::fetch::Fetch;
pub use crate::fetch::Fetcher;
pub use crate::label::LabelZone;
pub use crate::label::Labeler;
pub use crate::model::Benchmark;
pub use crate::model::Mem;
pub use crate::model::Run;
pub use crate::model::Suite;
pub use crate::order::sort_by_date;
