use strum::IntoEnumIterator;

use crate::error::{ErrorSeverity, GameError};

use super::{PartyMember, SpriteKey, SpriteMapping};

/// Fixed turn order of the party plus the rotating cursor over it.
///
/// # Invariants
///
/// - `members` is never empty: construction rejects an empty list and
///   removal of the last member flips `defeated` instead of shrinking
/// - `active < members.len()` at all times
/// - `defeated` is monotonic; once set the cursor is frozen so the last
///   active member stays reportable
/// - `sprites` holds one key per [`PartyMember`] kind, in declaration order,
///   and is never mutated
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Roster {
    members: Vec<PartyMember>,
    active: usize,
    sprites: Vec<SpriteKey>,
    defeated: bool,
}

/// Result of taking a member out of the roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RosterChange {
    /// `member` left; `next_active` now holds the cursor.
    MemberLost {
        member: PartyMember,
        next_active: PartyMember,
    },
    /// The final member was taken; the party is defeated.
    Defeated { last: PartyMember },
}

impl Roster {
    /// Establishes turn order (insertion order) and the sprite lookup.
    ///
    /// # Errors
    ///
    /// - [`RosterError::EmptyRoster`] if `members` is empty
    /// - [`RosterError::MissingSprite`] if `sprites` lacks a rostered member,
    ///   or any other member kind
    pub fn initialize(
        members: Vec<PartyMember>,
        sprites: SpriteMapping,
    ) -> Result<Self, RosterError> {
        if members.is_empty() {
            return Err(RosterError::EmptyRoster);
        }

        if let Some(&member) = members.iter().find(|member| sprites.get(**member).is_none()) {
            return Err(RosterError::MissingSprite { member });
        }
        let sprites = PartyMember::iter()
            .map(|member| {
                sprites
                    .get(member)
                    .cloned()
                    .ok_or(RosterError::MissingSprite { member })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            members,
            active: 0,
            sprites,
            defeated: false,
        })
    }

    pub fn active_member(&self) -> PartyMember {
        self.members[self.active]
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn members(&self) -> &[PartyMember] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false; a roster holds at least one member.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_defeated(&self) -> bool {
        self.defeated
    }

    pub fn sprite_for(&self, member: PartyMember) -> &SpriteKey {
        &self.sprites[member as usize]
    }

    pub fn active_sprite(&self) -> &SpriteKey {
        self.sprite_for(self.active_member())
    }

    /// Rotates the cursor to the next member, wrapping after the last.
    ///
    /// A defeated roster keeps its cursor.
    pub fn advance(&mut self) -> PartyMember {
        if !self.defeated {
            self.active = (self.active + 1) % self.members.len();
        }
        self.active_member()
    }

    /// Removes the member whose turn it is.
    pub fn catch_active(&mut self) -> Result<RosterChange, RosterError> {
        if self.defeated {
            return Err(RosterError::AlreadyDefeated);
        }
        Ok(self.remove_at(self.active))
    }

    /// Removes one occurrence of `member`, preferring the active slot.
    pub fn remove_member(&mut self, member: PartyMember) -> Result<RosterChange, RosterError> {
        if self.defeated {
            return Err(RosterError::AlreadyDefeated);
        }

        let index = if self.active_member() == member {
            self.active
        } else {
            self.members
                .iter()
                .position(|candidate| *candidate == member)
                .ok_or(RosterError::NotInRoster { member })?
        };
        Ok(self.remove_at(index))
    }

    fn remove_at(&mut self, index: usize) -> RosterChange {
        if self.members.len() == 1 {
            self.defeated = true;
            return RosterChange::Defeated {
                last: self.members[0],
            };
        }

        let member = self.members.remove(index);
        if index < self.active {
            self.active -= 1;
        } else if index == self.active {
            // the successor slid into this slot; wrap if it was the tail
            self.active %= self.members.len();
        }

        RosterChange::MemberLost {
            member,
            next_active: self.active_member(),
        }
    }
}

/// Errors raised while building or editing a roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("party roster must contain at least one member")]
    EmptyRoster,

    #[error("sprite mapping has no entry for {member}")]
    MissingSprite { member: PartyMember },

    #[error("{member} is not in the roster")]
    NotInRoster { member: PartyMember },

    #[error("party is already defeated")]
    AlreadyDefeated,
}

impl GameError for RosterError {
    fn severity(&self) -> ErrorSeverity {
        use RosterError::*;
        match self {
            EmptyRoster | MissingSprite { .. } => ErrorSeverity::Fatal,
            NotInRoster { .. } | AlreadyDefeated => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use RosterError::*;
        match self {
            EmptyRoster => "ROSTER_EMPTY",
            MissingSprite { .. } => "ROSTER_MISSING_SPRITE",
            NotInRoster { .. } => "ROSTER_NOT_IN_ROSTER",
            AlreadyDefeated => "ROSTER_ALREADY_DEFEATED",
        }
    }
}
