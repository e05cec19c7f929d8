use crate::env::GridService;
use crate::state::{EntityId, Position};

use super::{Body, Entity, EntityKind, can_enter};

/// Movable obstacle. Nothing may share its tile; it only moves when pushed.
#[derive(Clone, Debug)]
pub struct Obstacle {
    body: Body,
}

impl Obstacle {
    pub fn new(id: EntityId, position: Position) -> Self {
        Self {
            body: Body::new(id, position),
        }
    }
}

impl Entity for Obstacle {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Pushable
    }

    fn can_move_to(&self, target: Position, grid: &dyn GridService) -> bool {
        can_enter(self, target, grid)
    }
}
