/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Standard duration of a one-tile move animation, in milliseconds.
    pub move_duration_ms: u32,

    /// Edge length of a tile in presentation space (pixels).
    pub tile_size: u32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Upper bound on entities sharing one tile (a guard standing on the party, etc.).
    pub const MAX_OCCUPANTS_PER_TILE: usize = 4;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MOVE_DURATION_MS: u32 = 150;
    pub const DEFAULT_TILE_SIZE: u32 = 32;

    pub fn new() -> Self {
        Self {
            move_duration_ms: Self::DEFAULT_MOVE_DURATION_MS,
            tile_size: Self::DEFAULT_TILE_SIZE,
        }
    }

    pub fn with_move_duration(move_duration_ms: u32) -> Self {
        Self {
            move_duration_ms,
            ..Self::new()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
