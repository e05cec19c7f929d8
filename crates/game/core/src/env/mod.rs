//! Contracts for the spatial world the core runs against.
//!
//! The [`GridService`] owns tiles and entity placement; the core only queries
//! it and requests commits. [`crate::state::TileGrid`] is the in-crate
//! implementation used by headless drivers and tests.
mod grid;
mod map;

pub use grid::{GridError, GridService};
pub use map::{MapDimensions, TerrainKind};
