use crate::env::{GridError, GridService};
use crate::state::{EntityId, Position};

use super::{AbilityHandler, AbilityKind, AbilityOutcome, AbilityRequest, SideEffects};

/// Shoves the first pushable occupant of an adjacent tile one step further
/// in the same direction.
#[derive(Clone, Copy, Debug, Default)]
pub struct PushAbility;

impl PushAbility {
    /// Pushed entity and its destination, if the push is legal.
    ///
    /// Only the first live pushable in the grid's enumeration order is
    /// considered; if it is blocked the push is illegal.
    fn resolve(request: &AbilityRequest, grid: &dyn GridService) -> Option<(EntityId, Position)> {
        if !request.origin.is_orthogonally_adjacent(request.target) {
            return None;
        }

        let (dx, dy) = request.origin.delta_to(request.target);
        let destination = request.target.checked_offset(dx, dy)?;

        let pushable = grid
            .entities_at(request.target)
            .into_iter()
            .find(|occupant| occupant.kind().is_pushable() && !occupant.is_removed())?;

        pushable
            .can_move_to(destination, grid)
            .then(|| (pushable.id(), destination))
    }
}

impl AbilityHandler for PushAbility {
    fn kind(&self) -> Option<AbilityKind> {
        Some(AbilityKind::Push)
    }

    fn can_use(&self, request: &AbilityRequest, grid: &dyn GridService) -> bool {
        Self::resolve(request, grid).is_some()
    }

    fn apply(
        &self,
        request: &AbilityRequest,
        effects: &mut SideEffects<'_>,
    ) -> Result<AbilityOutcome, GridError> {
        let Some((pushed, destination)) = Self::resolve(request, effects.grid()) else {
            return Ok(AbilityOutcome::NoEffect);
        };

        let displacement = effects.relocate(pushed, destination, Some(request.actor))?;
        effects.ability_used(AbilityKind::Push, request.member, request.target);
        Ok(AbilityOutcome::Pushed(displacement))
    }
}
