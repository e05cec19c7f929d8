use std::collections::{BTreeMap, BTreeSet, HashMap};

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::entity::Entity;
use crate::env::{GridError, GridService, MapDimensions, TerrainKind};
use crate::presentation::PresentationPoint;

use super::{EntityId, Position};

type OccupantSlots = ArrayVec<EntityId, { GameConfig::MAX_OCCUPANTS_PER_TILE }>;

/// In-memory grid service: terrain layer, per-tile occupancy and the entity
/// records themselves.
///
/// Occupant slots keep arrival order; removal shifts later arrivals down
/// instead of swapping, so enumeration stays stable.
#[derive(Debug)]
pub struct TileGrid {
    dimensions: MapDimensions,
    base: TerrainKind,
    terrain: HashMap<Position, TerrainKind>,
    occupancy: BTreeMap<Position, OccupantSlots>,
    entities: BTreeMap<EntityId, Box<dyn Entity>>,
    removed: BTreeSet<EntityId>,
    tile_size: u32,
}

impl TileGrid {
    /// Grid of `dimensions` where every tile starts as `base`.
    pub fn filled(dimensions: MapDimensions, base: TerrainKind) -> Self {
        Self {
            dimensions,
            base,
            terrain: HashMap::new(),
            occupancy: BTreeMap::new(),
            entities: BTreeMap::new(),
            removed: BTreeSet::new(),
            tile_size: GameConfig::DEFAULT_TILE_SIZE,
        }
    }

    pub fn with_tile_size(mut self, tile_size: u32) -> Self {
        self.tile_size = tile_size;
        self
    }

    /// Overrides the terrain of one tile. Out-of-bounds tiles are ignored.
    pub fn set_terrain(&mut self, tile: Position, kind: TerrainKind) {
        if !self.dimensions.contains(tile) {
            return;
        }
        if kind == self.base {
            self.terrain.remove(&tile);
        } else {
            self.terrain.insert(tile, kind);
        }
    }

    /// Places a new entity at its own position.
    pub fn spawn(&mut self, entity: Box<dyn Entity>) -> Result<EntityId, GridError> {
        let id = entity.id();
        let position = entity.position();

        if self.entities.contains_key(&id) {
            return Err(GridError::DuplicateEntity(id));
        }
        if !self.dimensions.contains(position) {
            return Err(GridError::OutOfBounds { position });
        }

        self.add_occupant(position, id)?;
        self.entities.insert(id, entity);
        tracing::trace!(entity = %id, %position, "spawned");
        Ok(id)
    }

    /// Occupant ids of `tile` in arrival order.
    pub fn occupants(&self, tile: Position) -> &[EntityId] {
        self.occupancy
            .get(&tile)
            .map(|slots| slots.as_slice())
            .unwrap_or(&[])
    }

    fn add_occupant(&mut self, position: Position, entity: EntityId) -> Result<(), GridError> {
        let slots = self.occupancy.entry(position).or_default();
        if slots.contains(&entity) {
            return Ok(());
        }
        slots
            .try_push(entity)
            .map_err(|_| GridError::TileFull { position })
    }

    fn remove_occupant(&mut self, position: Position, entity: EntityId) -> bool {
        let Some(slots) = self.occupancy.get_mut(&position) else {
            return false;
        };
        let Some(index) = slots.iter().position(|occupant| *occupant == entity) else {
            return false;
        };

        slots.remove(index);
        if slots.is_empty() {
            self.occupancy.remove(&position);
        }
        true
    }

    fn live_position(&self, entity: EntityId) -> Result<Position, GridError> {
        let record = self
            .entities
            .get(&entity)
            .ok_or(GridError::UnknownEntity(entity))?;
        if self.removed.contains(&entity) {
            return Err(GridError::EntityRemoved(entity));
        }
        Ok(record.position())
    }
}

impl GridService for TileGrid {
    fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    fn terrain(&self, tile: Position) -> Option<TerrainKind> {
        self.dimensions
            .contains(tile)
            .then(|| self.terrain.get(&tile).copied().unwrap_or(self.base))
    }

    fn entities_at(&self, tile: Position) -> Vec<&dyn Entity> {
        self.occupants(tile)
            .iter()
            .filter_map(|id| self.entity(*id))
            .collect()
    }

    fn entity(&self, id: EntityId) -> Option<&dyn Entity> {
        self.entities.get(&id).map(|entity| entity.as_ref())
    }

    fn entity_mut(&mut self, id: EntityId) -> Option<&mut dyn Entity> {
        let entity: &mut dyn Entity = self.entities.get_mut(&id)?.as_mut();
        Some(entity)
    }

    fn entity_ids(&self) -> Vec<EntityId> {
        self.entities.keys().copied().collect()
    }

    fn commit_move(
        &mut self,
        entity: EntityId,
        from: Position,
        to: Position,
        agent: Option<EntityId>,
    ) -> Result<(), GridError> {
        let actual = self.live_position(entity)?;
        if actual != from {
            return Err(GridError::PositionMismatch {
                entity,
                expected: from,
                actual,
            });
        }
        if !self.dimensions.contains(to) {
            return Err(GridError::OutOfBounds { position: to });
        }

        if !self.remove_occupant(from, entity) {
            return Err(GridError::OccupancyDesync {
                entity,
                position: from,
            });
        }
        if let Err(error) = self.add_occupant(to, entity) {
            // Restore the origin slot; it was just vacated so it has room.
            let _ = self.add_occupant(from, entity);
            return Err(error);
        }

        self.entities
            .get_mut(&entity)
            .ok_or(GridError::UnknownEntity(entity))?
            .body_mut()
            .place(to);

        tracing::trace!(%entity, %from, %to, ?agent, "move committed");
        Ok(())
    }

    fn commit_removal(
        &mut self,
        entity: EntityId,
        agent: Option<EntityId>,
    ) -> Result<(), GridError> {
        let position = self.live_position(entity)?;
        if !self.remove_occupant(position, entity) {
            return Err(GridError::OccupancyDesync { entity, position });
        }
        self.removed.insert(entity);

        tracing::trace!(%entity, %position, ?agent, "removal committed");
        Ok(())
    }

    fn tile_to_presentation(&self, tile: Position) -> PresentationPoint {
        // Tile centres; y grows northward on the grid and downward on screen.
        let size = self.tile_size as f32;
        let flipped_y = self.dimensions.height as i32 - 1 - tile.y;
        PresentationPoint::new(
            (tile.x as f32 + 0.5) * size,
            (flipped_y as f32 + 0.5) * size,
        )
    }
}
