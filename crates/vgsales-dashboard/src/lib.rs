//! # VGSales Dashboard
//!
//! Binary crate tying the workspace together: configuration, dataset
//! loading, per-interaction recomputation, and chart export.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod dashboard;
pub mod error;

pub use dashboard::*;
pub use error::*;
