use crate::entity::Entity;

use super::TurnEngine;

/// Turn bookkeeping for TurnEngine.
impl<'a> TurnEngine<'a> {
    /// Ends the current action cycle.
    ///
    /// Every live entity receives `on_turn_advance` exactly once, in ascending
    /// id order; the party uses it to hand the turn to its next member.
    pub fn advance_turn(&mut self) {
        for id in self.grid.entity_ids() {
            let Some(entity) = self.grid.entity_mut(id) else {
                continue;
            };
            if entity.is_removed() {
                continue;
            }
            entity.on_turn_advance(&mut *self.bridge);
        }
    }
}
