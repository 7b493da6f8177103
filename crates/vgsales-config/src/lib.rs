//! # VGSales Config
//!
//! Type-safe configuration management for the vgsales dashboard.
//!
//! Configuration is a single TOML file with environment-variable
//! overrides for the dataset path and output directory. Every field has
//! a default so a partial (or absent) file still yields a working setup.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::*;
pub use schema::*;
