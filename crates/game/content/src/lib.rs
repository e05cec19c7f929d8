//! Data-driven session setup.
//!
//! Provides loaders for the data files a puzzle session starts from:
//! - Game configuration (TOML): animation timing, tile size
//! - Party definition (RON): turn order and member sprites
//!
//! Loaded values are handed to `tactics-core` once at session start; the core
//! never reads files itself. Embedded defaults ship under `data/`.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult, PartyLoader, PartySpec};
