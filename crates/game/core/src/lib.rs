//! Turn resolution and ability dispatch for a tile-based tactics puzzle.
//!
//! `tactics-core` owns the rules: which entity may enter which tile, whose
//! turn it is inside the party, and what a member's ability does. Spatial
//! state lives behind [`GridService`]; visible feedback leaves through
//! [`PresentationBridge`]. All party actions flow through
//! [`engine::TurnEngine`], which checks legality, commits, and advances the
//! turn exactly once per completed action.
pub mod ability;
pub mod action;
pub mod config;
pub mod engine;
pub mod entity;
pub mod env;
pub mod error;
pub mod party;
pub mod presentation;
pub mod state;

pub use ability::{
    AbilityHandler, AbilityKind, AbilityOutcome, AbilityRegistry, AbilityRequest, Displacement,
    NoAbility, PushAbility, SideEffects,
};
pub use action::{ActionEffect, ActionOutcome, CardinalDirection, PartyAction};
pub use config::GameConfig;
pub use engine::{ExecuteError, GuardReport, TurnEngine};
pub use entity::{Body, Entity, EntityKind, Guard, Obstacle, RemovalContext, can_enter};
pub use env::{GridError, GridService, MapDimensions, TerrainKind};
pub use error::{ErrorSeverity, GameError};
pub use party::{Party, PartyMember, Roster, RosterChange, RosterError, SpriteKey, SpriteMapping};
pub use presentation::{
    EventLog, Motion, MotionPath, MotionStatus, MotionToken, PresentationBridge,
    PresentationEvent, PresentationPoint, RemovalVariant,
};
pub use state::{EntityId, Position, TileGrid};
