//! Commit side of actions: grid writes paired with their lifecycle notifications.

use crate::config::GameConfig;
use crate::entity::RemovalContext;
use crate::env::{GridError, GridService};
use crate::party::PartyMember;
use crate::presentation::{MotionPath, PresentationBridge};
use crate::state::{EntityId, Position};

use super::AbilityKind;

/// A committed relocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Displacement {
    pub entity: EntityId,
    pub from: Position,
    pub to: Position,
}

/// Everything an action may touch while committing.
///
/// Each write goes through the grid service first and only then notifies the
/// entity, so logical state is final before any animation starts.
pub struct SideEffects<'s> {
    grid: &'s mut dyn GridService,
    bridge: &'s mut dyn PresentationBridge,
    config: &'s GameConfig,
}

impl<'s> SideEffects<'s> {
    pub fn new(
        grid: &'s mut dyn GridService,
        bridge: &'s mut dyn PresentationBridge,
        config: &'s GameConfig,
    ) -> Self {
        Self {
            grid,
            bridge,
            config,
        }
    }

    /// Read access for legality checks made while committing.
    pub fn grid(&self) -> &dyn GridService {
        &*self.grid
    }

    /// Commits a move and starts its animation.
    pub fn relocate(
        &mut self,
        entity: EntityId,
        to: Position,
        agent: Option<EntityId>,
    ) -> Result<Displacement, GridError> {
        let from = self
            .grid
            .entity(entity)
            .ok_or(GridError::UnknownEntity(entity))?
            .position();

        self.grid.commit_move(entity, from, to, agent)?;

        let path = MotionPath {
            from: self.grid.tile_to_presentation(from),
            to: self.grid.tile_to_presentation(to),
            duration_ms: self.config.move_duration_ms,
        };
        self.grid
            .entity_mut(entity)
            .ok_or(GridError::UnknownEntity(entity))?
            .on_moved(to, path, &mut *self.bridge);

        tracing::trace!(%entity, %from, %to, ?agent, "relocated");
        Ok(Displacement { entity, from, to })
    }

    /// Takes `entity` out of play. Returns false if it was already removed.
    pub fn remove(&mut self, entity: EntityId, agent: Option<EntityId>) -> Result<bool, GridError> {
        let record = self
            .grid
            .entity(entity)
            .ok_or(GridError::UnknownEntity(entity))?;
        if record.is_removed() {
            return Ok(false);
        }

        let context = RemovalContext {
            agent,
            agent_kind: agent
                .and_then(|agent| self.grid.entity(agent))
                .map(|agent| agent.kind()),
        };

        self.grid.commit_removal(entity, agent)?;
        self.grid
            .entity_mut(entity)
            .ok_or(GridError::UnknownEntity(entity))?
            .on_removed(context, &mut *self.bridge);
        Ok(true)
    }

    /// Emits the cue for an ability that just resolved.
    pub fn ability_used(&mut self, ability: AbilityKind, member: PartyMember, target: Position) {
        tracing::debug!(?ability, %member, %target, "ability used");
        self.bridge.on_ability_used(ability, member, target);
    }
}
