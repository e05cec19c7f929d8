use crate::ability::Displacement;
use crate::entity::Entity;
use crate::party::RosterChange;
use crate::state::{EntityId, Position};

use super::{ExecuteError, TurnEngine};

/// What one guard did during a guard phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuardReport {
    pub guard: EntityId,
    /// `None` if the guard held its ground.
    pub step: Option<Displacement>,
    /// Set when the step landed on the party.
    pub caught: Option<RosterChange>,
}

/// Guard phase for TurnEngine.
impl<'a> TurnEngine<'a> {
    /// Moves every live guard one step along its patrol, in id order.
    ///
    /// A guard entering the party's tile catches the active member. Catching
    /// the final member defeats the party and removes it from play; later
    /// guards still move.
    pub fn step_guards(&mut self) -> Result<Vec<GuardReport>, ExecuteError> {
        let mut reports = Vec::new();

        for id in self.grid.entity_ids() {
            let Some(guard) = self.grid.entity(id).and_then(|entity| entity.as_guard()) else {
                continue;
            };
            if guard.is_removed() {
                continue;
            }

            let Some(next) = guard.plan_step(&*self.grid) else {
                reports.push(GuardReport {
                    guard: id,
                    step: None,
                    caught: None,
                });
                continue;
            };

            let step = match self.side_effects().relocate(id, next, None) {
                Ok(step) => step,
                Err(error) => {
                    tracing::warn!(guard = %id, target = %next, %error, "guard step not committed");
                    reports.push(GuardReport {
                        guard: id,
                        step: None,
                        caught: None,
                    });
                    continue;
                }
            };

            let caught = if self.party_stands_at(step.to) {
                Some(self.catch_active_member(id)?)
            } else {
                None
            };

            reports.push(GuardReport {
                guard: id,
                step: Some(step),
                caught,
            });
        }

        Ok(reports)
    }

    fn party_stands_at(&self, tile: Position) -> bool {
        self.party().is_ok_and(|party| {
            !party.is_removed() && !party.is_defeated() && party.position() == tile
        })
    }

    fn catch_active_member(&mut self, guard: EntityId) -> Result<RosterChange, ExecuteError> {
        let party_id = self.party;
        let party = self
            .grid
            .entity_mut(party_id)
            .and_then(|entity| entity.as_party_mut())
            .ok_or(ExecuteError::PartyNotFound(party_id))?;

        let change = party.catch_active()?;
        match change {
            RosterChange::MemberLost {
                member,
                next_active,
            } => {
                let sprite = party.roster().sprite_for(next_active).clone();
                tracing::debug!(party = %party_id, %member, %next_active, %guard, "member caught");
                self.bridge.on_member_caught(party_id, member, guard);
                self.bridge
                    .on_active_member_changed(party_id, next_active, &sprite);
            }
            RosterChange::Defeated { last } => {
                tracing::debug!(party = %party_id, %last, %guard, "party defeated");
                self.bridge.on_member_caught(party_id, last, guard);
                self.remove(party_id, Some(guard))?;
            }
        }

        Ok(change)
    }
}
