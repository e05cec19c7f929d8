use crate::presentation::{Motion, MotionPath, MotionToken, PresentationBridge};
use crate::state::{EntityId, Position};

use super::RemovalContext;

/// Identity, placement and lifecycle record embedded in every entity.
///
/// # Invariants
///
/// - `position` only changes through [`Body::place`], called by the grid
///   service while committing a move
/// - `removed` goes false → true once and never back
/// - a removed body holds no live motion token
#[derive(Clone, Debug)]
pub struct Body {
    id: EntityId,
    position: Position,
    removed: bool,
    motion: Option<MotionToken>,
}

impl Body {
    pub fn new(id: EntityId, position: Position) -> Self {
        Self {
            id,
            position,
            removed: false,
            motion: None,
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_removed(&self) -> bool {
        self.removed
    }

    /// Token of the animation currently attached to this entity, if any.
    pub fn motion(&self) -> Option<&MotionToken> {
        self.motion.as_ref()
    }

    /// Records a committed relocation. Reserved for grid service implementations.
    pub fn place(&mut self, position: Position) {
        self.position = position;
    }

    /// Cancels the in-flight animation. Returns true if one was live.
    pub fn cancel_motion(&mut self) -> bool {
        match self.motion.take() {
            Some(token) if !token.is_cancelled() => {
                token.cancel();
                true
            }
            _ => false,
        }
    }

    /// Supersedes any earlier animation and hands a fresh one to the bridge.
    pub fn announce_motion(&mut self, path: MotionPath, bridge: &mut dyn PresentationBridge) {
        if self.removed {
            return;
        }

        self.cancel_motion();
        let token = MotionToken::new();
        self.motion = Some(token.clone());
        bridge.on_moved(Motion::new(self.id, path, token));
    }

    /// Cancels any motion, then marks the body terminal and notifies the bridge.
    ///
    /// Returns false, emitting nothing, if the body was already removed.
    pub fn retire(&mut self, context: RemovalContext, bridge: &mut dyn PresentationBridge) -> bool {
        self.cancel_motion();
        if self.removed {
            return false;
        }

        self.removed = true;
        tracing::debug!(
            entity = %self.id,
            agent = ?context.agent,
            variant = ?context.variant(),
            "entity removed from play"
        );
        bridge.on_removed(self.id, context.agent, context.variant());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::{EventLog, PresentationPoint, RemovalVariant};

    fn path() -> MotionPath {
        MotionPath {
            from: PresentationPoint::new(0.0, 0.0),
            to: PresentationPoint::new(32.0, 0.0),
            duration_ms: 150,
        }
    }

    #[test]
    fn new_motion_cancels_the_previous_one() {
        let mut body = Body::new(EntityId(1), Position::ORIGIN);
        let mut log = EventLog::new();

        body.announce_motion(path(), &mut log);
        let first = body.motion().cloned().expect("first token");
        body.announce_motion(path(), &mut log);

        assert!(first.is_cancelled());
        assert!(!body.motion().expect("second token").is_cancelled());
        assert_eq!(log.motions_of(EntityId(1)).count(), 2);
    }

    #[test]
    fn retire_cancels_motion_and_is_idempotent() {
        let mut body = Body::new(EntityId(1), Position::ORIGIN);
        let mut log = EventLog::new();

        body.announce_motion(path(), &mut log);
        let token = body.motion().cloned().expect("token");

        assert!(body.retire(RemovalContext::default(), &mut log));
        assert!(token.is_cancelled());
        assert!(body.is_removed());
        assert!(body.motion().is_none());

        assert!(!body.retire(RemovalContext::default(), &mut log));
        assert_eq!(log.removals().count(), 1);
        assert_eq!(
            log.removals().next(),
            Some((EntityId(1), None, RemovalVariant::Generic))
        );
    }

    #[test]
    fn removed_body_announces_nothing() {
        let mut body = Body::new(EntityId(1), Position::ORIGIN);
        let mut log = EventLog::new();

        body.retire(RemovalContext::default(), &mut log);
        body.announce_motion(path(), &mut log);

        assert_eq!(log.motions_of(EntityId(1)).count(), 0);
        assert!(body.motion().is_none());
    }
}
