//! Contract between the logical core and whatever animates it.
//!
//! The core reports committed facts (a move, a removal, an ability cue, a
//! change of active member) through [`PresentationBridge`]. Playback is
//! external; the only thing the core owns is the cancellation handle of each
//! motion so a removal can stop an animation of state that no longer exists.
mod motion;

pub use motion::{Motion, MotionPath, MotionStatus, MotionToken};

use crate::ability::AbilityKind;
use crate::party::{PartyMember, SpriteKey};
use crate::state::{EntityId, Position};

/// Coordinate in presentation space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PresentationPoint {
    pub x: f32,
    pub y: f32,
}

impl PresentationPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn lerp(self, other: PresentationPoint, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }
}

/// Which removal sequence to play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RemovalVariant {
    /// Caught by a pursuer.
    Caught,
    Generic,
}

/// Receiver of logical events that need a visible counterpart.
pub trait PresentationBridge {
    /// A relocation was committed. Any earlier motion of the same entity has
    /// already been cancelled.
    fn on_moved(&mut self, motion: Motion);

    /// The entity left play. Any motion of it has already been cancelled.
    fn on_removed(&mut self, entity: EntityId, agent: Option<EntityId>, variant: RemovalVariant);

    fn on_ability_used(&mut self, ability: AbilityKind, member: PartyMember, target: Position);

    fn on_active_member_changed(
        &mut self,
        _party: EntityId,
        _member: PartyMember,
        _sprite: &SpriteKey,
    ) {
    }

    fn on_member_caught(&mut self, _party: EntityId, _member: PartyMember, _guard: EntityId) {}
}

/// Flattened record of a bridge notification.
#[derive(Clone, Debug)]
pub enum PresentationEvent {
    Moved(Motion),
    Removed {
        entity: EntityId,
        agent: Option<EntityId>,
        variant: RemovalVariant,
    },
    AbilityUsed {
        ability: AbilityKind,
        member: PartyMember,
        target: Position,
    },
    ActiveMemberChanged {
        party: EntityId,
        member: PartyMember,
        sprite: SpriteKey,
    },
    MemberCaught {
        party: EntityId,
        member: PartyMember,
        guard: EntityId,
    },
}

/// Headless bridge that records every notification in order.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<PresentationEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[PresentationEvent] {
        &self.events
    }

    pub fn drain(&mut self) -> Vec<PresentationEvent> {
        std::mem::take(&mut self.events)
    }

    /// Motions reported for `entity`, oldest first.
    pub fn motions_of(&self, entity: EntityId) -> impl Iterator<Item = &Motion> + '_ {
        self.events.iter().filter_map(move |event| match event {
            PresentationEvent::Moved(motion) if motion.entity() == entity => Some(motion),
            _ => None,
        })
    }

    pub fn removals(&self) -> impl Iterator<Item = (EntityId, Option<EntityId>, RemovalVariant)> + '_ {
        self.events.iter().filter_map(|event| match *event {
            PresentationEvent::Removed {
                entity,
                agent,
                variant,
            } => Some((entity, agent, variant)),
            _ => None,
        })
    }
}

impl PresentationBridge for EventLog {
    fn on_moved(&mut self, motion: Motion) {
        self.events.push(PresentationEvent::Moved(motion));
    }

    fn on_removed(&mut self, entity: EntityId, agent: Option<EntityId>, variant: RemovalVariant) {
        self.events.push(PresentationEvent::Removed {
            entity,
            agent,
            variant,
        });
    }

    fn on_ability_used(&mut self, ability: AbilityKind, member: PartyMember, target: Position) {
        self.events.push(PresentationEvent::AbilityUsed {
            ability,
            member,
            target,
        });
    }

    fn on_active_member_changed(&mut self, party: EntityId, member: PartyMember, sprite: &SpriteKey) {
        self.events.push(PresentationEvent::ActiveMemberChanged {
            party,
            member,
            sprite: sprite.clone(),
        });
    }

    fn on_member_caught(&mut self, party: EntityId, member: PartyMember, guard: EntityId) {
        self.events.push(PresentationEvent::MemberCaught {
            party,
            member,
            guard,
        });
    }
}
