use crate::state::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }
}

/// Canonical terrain classes for static map tiles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerrainKind {
    #[default]
    Floor,
    Wall,
    Void,
    /// Conditionally walkable: only entities that cross conditional terrain may enter.
    Shallows,
}

impl TerrainKind {
    /// Walkable for every entity kind.
    pub fn is_walkable(self) -> bool {
        matches!(self, TerrainKind::Floor)
    }

    pub fn is_conditionally_walkable(self) -> bool {
        matches!(self, TerrainKind::Shallows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_reject_negative_and_overflowing_coordinates() {
        let dims = MapDimensions::new(4, 3);
        assert!(dims.contains(Position::new(0, 0)));
        assert!(dims.contains(Position::new(3, 2)));
        assert!(!dims.contains(Position::new(-1, 0)));
        assert!(!dims.contains(Position::new(4, 0)));
        assert!(!dims.contains(Position::new(0, 3)));
    }

    #[test]
    fn only_floor_is_unconditionally_walkable() {
        assert!(TerrainKind::Floor.is_walkable());
        assert!(!TerrainKind::Shallows.is_walkable());
        assert!(TerrainKind::Shallows.is_conditionally_walkable());
        assert!(!TerrainKind::Wall.is_walkable());
        assert!(!TerrainKind::Void.is_conditionally_walkable());
    }
}
