pub mod common;
pub mod world;

pub use common::{EntityId, Position};
pub use world::TileGrid;
