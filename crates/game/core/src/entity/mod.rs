//! Capability protocol shared by every grid-resident entity.
//!
//! Entities are stored by the grid service as `Box<dyn Entity>` and dispatched
//! through [`Entity`]; the grid never needs to know concrete types. Each
//! concrete kind decides who may share its tile and which terrain it crosses,
//! and reacts to committed moves and removals.
mod body;
mod guard;
mod obstacle;

pub use body::Body;
pub use guard::Guard;
pub use obstacle::Obstacle;

use std::fmt;

use crate::env::GridService;
use crate::party::Party;
use crate::presentation::{MotionPath, PresentationBridge, RemovalVariant};
use crate::state::{EntityId, Position};

/// Kind tag carried by every entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum EntityKind {
    Party,
    /// Movable obstacle (crate, barrel).
    Pushable,
    /// Pursuer that catches party members.
    Guard,
}

impl EntityKind {
    pub fn is_pushable(self) -> bool {
        matches!(self, EntityKind::Pushable)
    }
}

/// Who caused a removal, used to pick the removal sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RemovalContext {
    pub agent: Option<EntityId>,
    pub agent_kind: Option<EntityKind>,
}

impl RemovalContext {
    pub fn by(agent: EntityId, agent_kind: EntityKind) -> Self {
        Self {
            agent: Some(agent),
            agent_kind: Some(agent_kind),
        }
    }

    pub fn variant(&self) -> RemovalVariant {
        match self.agent_kind {
            Some(EntityKind::Guard) => RemovalVariant::Caught,
            _ => RemovalVariant::Generic,
        }
    }
}

/// Capability set of a grid-resident entity.
pub trait Entity: Send + Sync + fmt::Debug {
    fn body(&self) -> &Body;

    fn body_mut(&mut self) -> &mut Body;

    fn kind(&self) -> EntityKind;

    fn id(&self) -> EntityId {
        self.body().id()
    }

    fn position(&self) -> Position {
        self.body().position()
    }

    fn is_removed(&self) -> bool {
        self.body().is_removed()
    }

    /// Whether `other` may enter the tile this entity stands on.
    fn is_traversable_by(&self, _other: &dyn Entity) -> bool {
        false
    }

    /// Whether this kind may enter conditionally walkable terrain.
    fn crosses_conditional_terrain(&self) -> bool {
        false
    }

    /// Total predicate: may this entity move from where it is to `target`.
    fn can_move_to(&self, target: Position, grid: &dyn GridService) -> bool;

    /// Called once per completed action cycle.
    fn on_turn_advance(&mut self, _bridge: &mut dyn PresentationBridge) {}

    /// Called after the grid committed a relocation to `to`.
    fn on_moved(&mut self, _to: Position, path: MotionPath, bridge: &mut dyn PresentationBridge) {
        self.body_mut().announce_motion(path, bridge);
    }

    /// Called when the entity leaves play. Idempotent.
    fn on_removed(&mut self, context: RemovalContext, bridge: &mut dyn PresentationBridge) {
        self.body_mut().retire(context, bridge);
    }

    fn as_party(&self) -> Option<&Party> {
        None
    }

    fn as_party_mut(&mut self) -> Option<&mut Party> {
        None
    }

    fn as_guard(&self) -> Option<&Guard> {
        None
    }
}

/// Shared movement rule behind every [`Entity::can_move_to`].
///
/// The destination must be walkable for `entity` (conditional terrain counts
/// only for kinds that cross it; out-of-bounds never does) and every other
/// live occupant must consider `entity` able to traverse it.
pub fn can_enter(entity: &dyn Entity, target: Position, grid: &dyn GridService) -> bool {
    if entity.is_removed() {
        return false;
    }

    let walkable = grid.is_walkable(target)
        || (entity.crosses_conditional_terrain() && grid.is_conditionally_walkable(target));
    if !walkable {
        return false;
    }

    grid.entities_at(target)
        .into_iter()
        .filter(|occupant| occupant.id() != entity.id() && !occupant.is_removed())
        .all(|occupant| occupant.is_traversable_by(entity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{MapDimensions, TerrainKind};
    use crate::party::{Party, PartyMember, Roster, SpriteMapping};
    use crate::state::TileGrid;

    fn party(id: u32, position: Position) -> Party {
        let roster = Roster::initialize(vec![PartyMember::Warlock], SpriteMapping::conventional())
            .expect("roster");
        Party::new(EntityId(id), position, roster)
    }

    fn grid() -> TileGrid {
        let mut grid = TileGrid::filled(MapDimensions::new(5, 5), TerrainKind::Floor);
        grid.set_terrain(Position::new(4, 4), TerrainKind::Shallows);
        grid.set_terrain(Position::new(0, 4), TerrainKind::Wall);
        grid
    }

    #[test]
    fn removal_variant_follows_agent_kind() {
        assert_eq!(
            RemovalContext::by(EntityId(3), EntityKind::Guard).variant(),
            RemovalVariant::Caught
        );
        assert_eq!(
            RemovalContext::by(EntityId(3), EntityKind::Party).variant(),
            RemovalVariant::Generic
        );
        assert_eq!(RemovalContext::default().variant(), RemovalVariant::Generic);
    }

    #[test]
    fn unwalkable_targets_are_rejected_regardless_of_occupancy() {
        let mut grid = grid();
        grid.spawn(Box::new(party(1, Position::new(1, 4)))).expect("spawn");
        let party = grid.entity(EntityId(1)).expect("party");

        assert!(!party.can_move_to(Position::new(0, 4), &grid));
        assert!(!party.can_move_to(Position::new(-1, 4), &grid));
        assert!(!party.can_move_to(Position::new(1, 5), &grid));
        assert!(party.can_move_to(Position::new(1, 3), &grid));
    }

    #[test]
    fn conditional_terrain_depends_on_kind() {
        let mut grid = grid();
        grid.spawn(Box::new(party(1, Position::new(3, 4)))).expect("spawn");
        grid.spawn(Box::new(Obstacle::new(EntityId(2), Position::new(4, 3))))
            .expect("spawn");
        grid.spawn(Box::new(Guard::new(EntityId(3), Position::new(2, 2), Vec::new())))
            .expect("spawn");

        let shallows = Position::new(4, 4);
        assert!(grid.entity(EntityId(1)).expect("party").can_move_to(shallows, &grid));
        assert!(!grid.entity(EntityId(2)).expect("crate").can_move_to(shallows, &grid));
        assert!(!grid.entity(EntityId(3)).expect("guard").can_move_to(shallows, &grid));
    }

    #[test]
    fn occupied_tiles_block_unless_traversable() {
        let mut grid = grid();
        grid.spawn(Box::new(party(1, Position::new(2, 2)))).expect("spawn");
        grid.spawn(Box::new(Obstacle::new(EntityId(2), Position::new(2, 3))))
            .expect("spawn");
        grid.spawn(Box::new(Guard::new(EntityId(3), Position::new(1, 2), Vec::new())))
            .expect("spawn");

        let party = grid.entity(EntityId(1)).expect("party");
        let guard = grid.entity(EntityId(3)).expect("guard");
        let obstacle = grid.entity(EntityId(2)).expect("crate");

        // Party cannot walk into a crate or a guard.
        assert!(!party.can_move_to(Position::new(2, 3), &grid));
        assert!(!party.can_move_to(Position::new(1, 2), &grid));
        // Guards may enter the party tile, crates may not.
        assert!(guard.can_move_to(Position::new(2, 2), &grid));
        assert!(!obstacle.can_move_to(Position::new(2, 2), &grid));
        // Two immovable entities refuse each other both ways.
        assert!(!obstacle.is_traversable_by(guard));
        assert!(!guard.is_traversable_by(obstacle));
    }
}
