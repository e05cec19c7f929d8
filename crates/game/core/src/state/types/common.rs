use std::fmt;

/// Unique identifier for any entity resident on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Discrete grid position expressed in tile coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position shifted by `(dx, dy)`, or `None` if it leaves the `i32` plane.
    pub const fn checked_offset(self, dx: i32, dy: i32) -> Option<Self> {
        match (self.x.checked_add(dx), self.y.checked_add(dy)) {
            (Some(x), Some(y)) => Some(Self::new(x, y)),
            _ => None,
        }
    }

    /// Vector from `self` to `other`, saturated per axis.
    pub const fn delta_to(self, other: Position) -> (i32, i32) {
        (other.x.saturating_sub(self.x), other.y.saturating_sub(self.y))
    }

    /// Saturates at `u32::MAX` for coordinates at opposite ends of the plane.
    pub const fn manhattan_distance(self, other: Position) -> u32 {
        self.x.abs_diff(other.x).saturating_add(self.y.abs_diff(other.y))
    }

    /// True when `other` is exactly one step away along an axis.
    pub const fn is_orthogonally_adjacent(self, other: Position) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacency_excludes_diagonals() {
        let origin = Position::new(2, 2);
        assert!(origin.is_orthogonally_adjacent(Position::new(2, 3)));
        assert!(origin.is_orthogonally_adjacent(Position::new(1, 2)));
        assert!(!origin.is_orthogonally_adjacent(Position::new(3, 3)));
        assert!(!origin.is_orthogonally_adjacent(origin));
        assert!(!origin.is_orthogonally_adjacent(Position::new(2, 4)));
    }

    #[test]
    fn delta_and_offset_agree() {
        let from = Position::new(2, 2);
        let to = Position::new(2, 3);
        let (dx, dy) = from.delta_to(to);
        assert_eq!(to.checked_offset(dx, dy), Some(Position::new(2, 4)));
    }

    #[test]
    fn arithmetic_at_the_plane_edges_does_not_overflow() {
        let low = Position::new(i32::MIN, 0);
        let high = Position::new(i32::MAX, 0);

        assert_eq!(low.manhattan_distance(high), u32::MAX);
        assert_eq!(
            Position::new(i32::MIN, i32::MIN).manhattan_distance(Position::new(i32::MAX, i32::MAX)),
            u32::MAX
        );
        assert!(!Position::new(1, 0).is_orthogonally_adjacent(low));
        assert_eq!(high.checked_offset(1, 0), None);
        assert_eq!(low.checked_offset(-1, 0), None);
        assert_eq!(low.delta_to(high), (i32::MAX, 0));
        assert!(Position::new(i32::MAX - 1, 0).is_orthogonally_adjacent(high));
    }
}
