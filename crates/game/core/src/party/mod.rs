//! The player's party: one grid entity carrying the turn order of its members.
mod member;
mod roster;

pub use member::{PartyMember, SpriteKey, SpriteMapping};
pub use roster::{Roster, RosterChange, RosterError};

use crate::entity::{Body, Entity, EntityKind, can_enter};
use crate::env::GridService;
use crate::presentation::PresentationBridge;
use crate::state::{EntityId, Position};

/// Party entity. Guards may step onto its tile to catch a member; nothing
/// else may share it. Crosses conditional terrain.
#[derive(Clone, Debug)]
pub struct Party {
    body: Body,
    roster: Roster,
}

impl Party {
    pub fn new(id: EntityId, position: Position, roster: Roster) -> Self {
        Self {
            body: Body::new(id, position),
            roster,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn active_member(&self) -> PartyMember {
        self.roster.active_member()
    }

    pub fn is_defeated(&self) -> bool {
        self.roster.is_defeated()
    }

    /// Removes the member whose turn it is.
    pub fn catch_active(&mut self) -> Result<RosterChange, RosterError> {
        self.roster.catch_active()
    }
}

impl Entity for Party {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Party
    }

    fn is_traversable_by(&self, other: &dyn Entity) -> bool {
        other.kind() == EntityKind::Guard
    }

    fn crosses_conditional_terrain(&self) -> bool {
        true
    }

    fn can_move_to(&self, target: Position, grid: &dyn GridService) -> bool {
        can_enter(self, target, grid)
    }

    fn on_turn_advance(&mut self, bridge: &mut dyn PresentationBridge) {
        if self.body.is_removed() || self.roster.is_defeated() {
            return;
        }

        let member = self.roster.advance();
        tracing::debug!(party = %self.body.id(), %member, "turn advanced");
        bridge.on_active_member_changed(self.body.id(), member, self.roster.sprite_for(member));
    }

    fn as_party(&self) -> Option<&Party> {
        Some(self)
    }

    fn as_party_mut(&mut self) -> Option<&mut Party> {
        Some(self)
    }
}
