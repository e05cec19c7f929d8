//! Party-level actions and their results.

use crate::ability::{AbilityOutcome, Displacement};
use crate::party::PartyMember;
use crate::state::Position;

// ============================================================================
// Cardinal Direction
// ============================================================================

/// Orthogonal step direction. Y grows toward north, X toward east.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CardinalDirection {
    North,
    South,
    East,
    West,
}

impl CardinalDirection {
    pub const ALL: [CardinalDirection; 4] = [
        CardinalDirection::North,
        CardinalDirection::South,
        CardinalDirection::East,
        CardinalDirection::West,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            CardinalDirection::North => (0, 1),
            CardinalDirection::South => (0, -1),
            CardinalDirection::East => (1, 0),
            CardinalDirection::West => (-1, 0),
        }
    }

    /// Tile one step from `origin` in this direction, `None` past the `i32` plane.
    pub fn step(self, origin: Position) -> Option<Position> {
        let (dx, dy) = self.delta();
        origin.checked_offset(dx, dy)
    }

    /// Direction of a single orthogonal step, if `delta` is one.
    pub fn from_delta(delta: (i32, i32)) -> Option<Self> {
        Self::ALL.into_iter().find(|direction| direction.delta() == delta)
    }
}

// ============================================================================
// Party Action
// ============================================================================

/// One action of the active party member; each completed action ends a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PartyAction {
    /// Step the whole party one tile.
    Move(CardinalDirection),
    /// Use the active member's ability on a tile.
    UseAbility(Position),
}

/// What a completed party action did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionOutcome {
    /// Member who acted (the active member before the turn advanced).
    pub actor: PartyMember,
    pub effect: ActionEffect,
    /// Member whose turn it is now.
    pub next_active: PartyMember,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionEffect {
    Moved(Displacement),
    Ability(AbilityOutcome),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn north_increases_y() {
        assert_eq!(
            CardinalDirection::North.step(Position::new(2, 2)),
            Some(Position::new(2, 3))
        );
        assert_eq!(
            CardinalDirection::West.step(Position::new(2, 2)),
            Some(Position::new(1, 2))
        );
        assert_eq!(CardinalDirection::East.step(Position::new(i32::MAX, 0)), None);
    }

    #[test]
    fn from_delta_accepts_single_orthogonal_steps_only() {
        assert_eq!(
            CardinalDirection::from_delta((1, 0)),
            Some(CardinalDirection::East)
        );
        assert_eq!(CardinalDirection::from_delta((1, 1)), None);
        assert_eq!(CardinalDirection::from_delta((0, 2)), None);
    }

    #[test]
    fn directions_parse_case_insensitively() {
        assert_eq!(
            CardinalDirection::from_str("South"),
            Ok(CardinalDirection::South)
        );
    }
}
