//! Spatial state: identifiers, coordinates and the in-memory grid service.
//!
//! Runtime layers query this state freely but change it only through the
//! commit methods of [`GridService`](crate::env::GridService).
pub mod types;

pub use types::{EntityId, Position, TileGrid};
