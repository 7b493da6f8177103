//! # VGSales Graphs
//!
//! Chart specifications and rendering for the vgsales dashboard.
//!
//! Each dashboard section has a builder module turning pipeline views
//! into [`ChartSpec`] values; the renderer draws specs to PNG with
//! plotters, and the manager assembles the fixed chart set.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod manager;
pub mod renderer;
pub mod types;

// One builder module per dashboard section.
pub mod game_popularity;
pub mod genre_sales;
pub mod platform_sales;
pub mod publisher_sales;
pub mod region_map;
pub mod region_sales;
pub mod yearly_animation;

pub use manager::*;
pub use renderer::*;
pub use types::*;
