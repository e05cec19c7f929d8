use crate::entity::Entity;
use crate::error::{ErrorSeverity, GameError};
use crate::presentation::PresentationPoint;
use crate::state::{EntityId, Position};

use super::{MapDimensions, TerrainKind};

/// Owner of the tile map and of every grid-resident entity.
///
/// The core never mutates occupancy directly; it asks the service through
/// [`commit_move`](GridService::commit_move) and
/// [`commit_removal`](GridService::commit_removal), which makes the service the
/// single writer of spatial state. Query methods are side-effect free.
pub trait GridService {
    fn dimensions(&self) -> MapDimensions;

    /// Terrain at `tile`, `None` outside the grid.
    fn terrain(&self, tile: Position) -> Option<TerrainKind>;

    fn contains(&self, tile: Position) -> bool {
        self.dimensions().contains(tile)
    }

    /// Static walkability. Tiles outside the grid are not walkable.
    fn is_walkable(&self, tile: Position) -> bool {
        self.terrain(tile).is_some_and(TerrainKind::is_walkable)
    }

    /// Walkable only for entity kinds that cross conditional terrain.
    fn is_conditionally_walkable(&self, tile: Position) -> bool {
        self.terrain(tile)
            .is_some_and(TerrainKind::is_conditionally_walkable)
    }

    /// Entities currently on `tile`, in arrival order.
    ///
    /// The order is stable between commits; ability target selection relies on it.
    fn entities_at(&self, tile: Position) -> Vec<&dyn Entity>;

    fn entity(&self, id: EntityId) -> Option<&dyn Entity>;

    fn entity_mut(&mut self, id: EntityId) -> Option<&mut dyn Entity>;

    /// Every known entity id, removed ones included, in ascending order.
    fn entity_ids(&self) -> Vec<EntityId>;

    /// Authoritative relocation of `entity` from `from` to `to`.
    ///
    /// Validates bookkeeping only; game legality is the caller's job.
    fn commit_move(
        &mut self,
        entity: EntityId,
        from: Position,
        to: Position,
        agent: Option<EntityId>,
    ) -> Result<(), GridError>;

    /// Takes a live entity off the board. Its record stays queryable.
    fn commit_removal(&mut self, entity: EntityId, agent: Option<EntityId>)
    -> Result<(), GridError>;

    /// Maps a tile to presentation space. Not used by logical resolution.
    fn tile_to_presentation(&self, tile: Position) -> PresentationPoint;
}

/// Errors raised by a grid service while committing changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("entity {0} not found")]
    UnknownEntity(EntityId),

    #[error("entity {0} has been removed from play")]
    EntityRemoved(EntityId),

    #[error("entity {0} already exists")]
    DuplicateEntity(EntityId),

    #[error("entity {entity} is at {actual}, not {expected}")]
    PositionMismatch {
        entity: EntityId,
        expected: Position,
        actual: Position,
    },

    #[error("position {position} is out of bounds")]
    OutOfBounds { position: Position },

    #[error("tile {position} cannot hold more occupants")]
    TileFull { position: Position },

    #[error("occupancy desync for entity {entity} at {position}")]
    OccupancyDesync { entity: EntityId, position: Position },
}

impl GameError for GridError {
    fn severity(&self) -> ErrorSeverity {
        use GridError::*;
        match self {
            TileFull { .. } => ErrorSeverity::Recoverable,
            UnknownEntity(_) | EntityRemoved(_) | DuplicateEntity(_) | OutOfBounds { .. } => {
                ErrorSeverity::Validation
            }
            PositionMismatch { .. } | OccupancyDesync { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use GridError::*;
        match self {
            UnknownEntity(_) => "GRID_UNKNOWN_ENTITY",
            EntityRemoved(_) => "GRID_ENTITY_REMOVED",
            DuplicateEntity(_) => "GRID_DUPLICATE_ENTITY",
            PositionMismatch { .. } => "GRID_POSITION_MISMATCH",
            OutOfBounds { .. } => "GRID_OUT_OF_BOUNDS",
            TileFull { .. } => "GRID_TILE_FULL",
            OccupancyDesync { .. } => "GRID_OCCUPANCY_DESYNC",
        }
    }
}
