use crate::env::GridService;
use crate::presentation::{MotionPath, PresentationBridge};
use crate::state::{EntityId, Position};

use super::{Body, Entity, EntityKind, can_enter};

/// Pursuer walking a closed patrol route.
///
/// A guard that steps onto the party tile catches a party member; the turn
/// engine resolves the catch.
#[derive(Clone, Debug)]
pub struct Guard {
    body: Body,
    patrol: Vec<Position>,
    waypoint: usize,
}

impl Guard {
    pub fn new(id: EntityId, position: Position, patrol: Vec<Position>) -> Self {
        let mut guard = Self {
            body: Body::new(id, position),
            patrol,
            waypoint: 0,
        };
        guard.skip_reached_waypoint();
        guard
    }

    pub fn patrol(&self) -> &[Position] {
        &self.patrol
    }

    /// Waypoint the guard is currently heading for.
    pub fn goal(&self) -> Option<Position> {
        self.patrol.get(self.waypoint).copied()
    }

    /// Next orthogonal step toward the goal, horizontal axis first.
    ///
    /// Returns `None` when the guard has no route, stands on its goal, or both
    /// candidate steps are blocked.
    pub fn plan_step(&self, grid: &dyn GridService) -> Option<Position> {
        let goal = self.goal()?;
        let here = self.position();
        let (dx, dy) = here.delta_to(goal);

        [(dx.signum(), 0), (0, dy.signum())]
            .into_iter()
            .filter(|&(sx, sy)| sx != 0 || sy != 0)
            .filter_map(|(sx, sy)| here.checked_offset(sx, sy))
            .find(|&step| self.can_move_to(step, grid))
    }

    fn skip_reached_waypoint(&mut self) {
        if self.patrol.is_empty() {
            return;
        }
        if self.patrol[self.waypoint] == self.body.position() {
            self.waypoint = (self.waypoint + 1) % self.patrol.len();
        }
    }
}

impl Entity for Guard {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Guard
    }

    fn can_move_to(&self, target: Position, grid: &dyn GridService) -> bool {
        can_enter(self, target, grid)
    }

    fn on_moved(&mut self, _to: Position, path: MotionPath, bridge: &mut dyn PresentationBridge) {
        self.skip_reached_waypoint();
        self.body.announce_motion(path, bridge);
    }

    fn as_guard(&self) -> Option<&Guard> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{MapDimensions, TerrainKind};
    use crate::entity::Obstacle;
    use crate::state::TileGrid;

    fn open_grid() -> TileGrid {
        TileGrid::filled(MapDimensions::new(6, 6), TerrainKind::Floor)
    }

    #[test]
    fn starting_on_first_waypoint_heads_for_the_second() {
        let guard = Guard::new(
            EntityId(1),
            Position::new(0, 0),
            vec![Position::new(0, 0), Position::new(3, 0)],
        );
        assert_eq!(guard.goal(), Some(Position::new(3, 0)));
        assert_eq!(guard.patrol(), &[Position::new(0, 0), Position::new(3, 0)]);
    }

    #[test]
    fn plan_prefers_horizontal_then_vertical() {
        let mut grid = open_grid();
        grid.spawn(Box::new(Guard::new(
            EntityId(1),
            Position::new(1, 1),
            vec![Position::new(3, 3)],
        )))
        .expect("spawn");
        let guard = grid.entity(EntityId(1)).and_then(|e| e.as_guard()).expect("guard");
        assert_eq!(guard.plan_step(&grid), Some(Position::new(2, 1)));

        grid.spawn(Box::new(Obstacle::new(EntityId(2), Position::new(2, 1))))
            .expect("spawn");
        let guard = grid.entity(EntityId(1)).and_then(|e| e.as_guard()).expect("guard");
        assert_eq!(guard.plan_step(&grid), Some(Position::new(1, 2)));
    }

    #[test]
    fn guard_without_route_stays_put() {
        let mut grid = open_grid();
        grid.spawn(Box::new(Guard::new(EntityId(1), Position::new(1, 1), Vec::new())))
            .expect("spawn");
        let guard = grid.entity(EntityId(1)).and_then(|e| e.as_guard()).expect("guard");
        assert_eq!(guard.goal(), None);
        assert_eq!(guard.plan_step(&grid), None);
    }
}
