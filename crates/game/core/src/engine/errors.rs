//! Error types for the turn engine.

use crate::action::CardinalDirection;
use crate::env::GridError;
use crate::error::{ErrorSeverity, GameError};
use crate::party::{PartyMember, RosterError};
use crate::state::{EntityId, Position};

/// Errors surfaced while executing a party action or a guard phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    #[error("entity {0} is not a party on this grid")]
    PartyNotFound(EntityId),

    #[error("party {0} is defeated or out of play")]
    PartyDefeated(EntityId),

    #[error("party cannot move {direction} from {origin}")]
    IllegalMove {
        direction: CardinalDirection,
        origin: Position,
    },

    #[error("{member} cannot use an ability on {target}")]
    IllegalAbility {
        member: PartyMember,
        target: Position,
    },

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Roster(#[from] RosterError),
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::IllegalMove { .. } | Self::IllegalAbility { .. } => ErrorSeverity::Recoverable,
            Self::PartyNotFound(_) => ErrorSeverity::Validation,
            Self::PartyDefeated(_) => ErrorSeverity::Fatal,
            Self::Grid(error) => error.severity(),
            Self::Roster(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::PartyNotFound(_) => "EXECUTE_PARTY_NOT_FOUND",
            Self::PartyDefeated(_) => "EXECUTE_PARTY_DEFEATED",
            Self::IllegalMove { .. } => "EXECUTE_ILLEGAL_MOVE",
            Self::IllegalAbility { .. } => "EXECUTE_ILLEGAL_ABILITY",
            Self::Grid(error) => error.error_code(),
            Self::Roster(error) => error.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_errors_keep_their_classification() {
        let error = ExecuteError::from(GridError::OccupancyDesync {
            entity: EntityId(1),
            position: Position::new(0, 0),
        });
        assert_eq!(error.severity(), ErrorSeverity::Internal);
        assert_eq!(error.error_code(), "GRID_OCCUPANCY_DESYNC");

        let illegal = ExecuteError::IllegalMove {
            direction: CardinalDirection::North,
            origin: Position::new(1, 1),
        };
        assert!(illegal.severity().is_recoverable());
        assert_eq!(illegal.to_string(), "party cannot move north from (1, 1)");
    }
}
