//! Turn resolution façade.
//!
//! [`TurnEngine`] borrows every collaborator explicitly (grid service,
//! presentation bridge, ability table, config) for the span of one driver
//! call; nothing is global. Each party action runs through the same pipeline:
//! legality check → commit → advance turn. A rejected action commits nothing
//! and leaves the turn where it was.

mod errors;
mod guards;
mod turns;

pub use errors::ExecuteError;
pub use guards::GuardReport;

use crate::ability::{
    AbilityOutcome, AbilityRegistry, AbilityRequest, Displacement, SideEffects,
};
use crate::action::{ActionEffect, ActionOutcome, CardinalDirection, PartyAction};
use crate::config::GameConfig;
use crate::entity::Entity;
use crate::env::GridService;
use crate::party::{Party, PartyMember};
use crate::presentation::PresentationBridge;
use crate::state::{EntityId, Position};

/// Driver-facing entry point for one party on one grid.
pub struct TurnEngine<'a> {
    grid: &'a mut dyn GridService,
    bridge: &'a mut dyn PresentationBridge,
    abilities: &'a AbilityRegistry,
    config: &'a GameConfig,
    party: EntityId,
}

impl<'a> TurnEngine<'a> {
    /// Binds the engine to the party entity `party` on `grid`.
    pub fn new(
        grid: &'a mut dyn GridService,
        bridge: &'a mut dyn PresentationBridge,
        abilities: &'a AbilityRegistry,
        config: &'a GameConfig,
        party: EntityId,
    ) -> Result<Self, ExecuteError> {
        if grid.entity(party).and_then(|entity| entity.as_party()).is_none() {
            return Err(ExecuteError::PartyNotFound(party));
        }

        Ok(Self {
            grid,
            bridge,
            abilities,
            config,
            party,
        })
    }

    pub fn party_id(&self) -> EntityId {
        self.party
    }

    pub fn grid(&self) -> &dyn GridService {
        &*self.grid
    }

    pub fn party(&self) -> Result<&Party, ExecuteError> {
        self.grid
            .entity(self.party)
            .and_then(|entity| entity.as_party())
            .ok_or(ExecuteError::PartyNotFound(self.party))
    }

    /// Member whose turn it is. A defeated party reports its last member.
    pub fn active_member(&self) -> Result<PartyMember, ExecuteError> {
        self.party().map(Party::active_member)
    }

    /// Party that may still act.
    fn acting_party(&self) -> Result<&Party, ExecuteError> {
        let party = self.party()?;
        if party.is_removed() || party.is_defeated() {
            return Err(ExecuteError::PartyDefeated(self.party));
        }
        Ok(party)
    }

    pub fn can_move(&self, direction: CardinalDirection) -> bool {
        self.acting_party().is_ok_and(|party| {
            direction
                .step(party.position())
                .is_some_and(|target| party.can_move_to(target, &*self.grid))
        })
    }

    pub fn can_use_ability(&self, target: Position) -> bool {
        self.ability_request(target)
            .is_ok_and(|request| self.abilities.can_use_ability(&request, &*self.grid))
    }

    fn ability_request(&self, target: Position) -> Result<AbilityRequest, ExecuteError> {
        let party = self.acting_party()?;
        Ok(AbilityRequest {
            member: party.active_member(),
            actor: self.party,
            origin: party.position(),
            target,
        })
    }

    fn side_effects(&mut self) -> SideEffects<'_> {
        SideEffects::new(&mut *self.grid, &mut *self.bridge, self.config)
    }

    /// Moves the party one tile. Does not advance the turn.
    pub fn commit_move(&mut self, direction: CardinalDirection) -> Result<Displacement, ExecuteError> {
        let origin = self.acting_party()?.position();
        let target = direction
            .step(origin)
            .filter(|_| self.can_move(direction))
            .ok_or(ExecuteError::IllegalMove { direction, origin })?;

        let party = self.party;
        let displacement = self.side_effects().relocate(party, target, None)?;
        Ok(displacement)
    }

    /// Resolves the active member's ability on `target`. Does not advance
    /// the turn; an illegal request changes nothing.
    pub fn use_ability(&mut self, target: Position) -> Result<AbilityOutcome, ExecuteError> {
        let request = self.ability_request(target)?;
        let abilities = self.abilities;
        let outcome = abilities.use_ability(&request, &mut self.side_effects())?;
        Ok(outcome)
    }

    /// Checks, commits and ends the turn for one party action.
    ///
    /// # Errors
    ///
    /// [`ExecuteError::IllegalMove`] / [`ExecuteError::IllegalAbility`] when
    /// the legality check fails; nothing is committed and the turn stays.
    pub fn execute(&mut self, action: PartyAction) -> Result<ActionOutcome, ExecuteError> {
        let party = self.acting_party()?;
        let actor = party.active_member();
        let origin = party.position();

        let effect = match action {
            PartyAction::Move(direction) => {
                if !self.can_move(direction) {
                    return Err(ExecuteError::IllegalMove { direction, origin });
                }
                ActionEffect::Moved(self.commit_move(direction)?)
            }
            PartyAction::UseAbility(target) => {
                if !self.can_use_ability(target) {
                    return Err(ExecuteError::IllegalAbility {
                        member: actor,
                        target,
                    });
                }
                ActionEffect::Ability(self.use_ability(target)?)
            }
        };

        self.advance_turn();
        let next_active = self.active_member()?;
        tracing::debug!(%actor, ?action, %next_active, "action resolved");

        Ok(ActionOutcome {
            actor,
            effect,
            next_active,
        })
    }

    /// Takes `entity` out of play. Returns false if it already was.
    pub fn remove(&mut self, entity: EntityId, agent: Option<EntityId>) -> Result<bool, ExecuteError> {
        let removed = self.side_effects().remove(entity, agent)?;
        Ok(removed)
    }
}
