use std::collections::HashMap;
use std::fmt;

use strum::IntoEnumIterator;

/// Character classes that can make up the party.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PartyMember {
    /// Pushes a movable obstacle one tile away.
    Warlock,
    Wizard,
    Pickpocket,
    Sailor,
}

/// Key of a presentation asset (sprite) owned by the asset layer.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SpriteKey(pub String);

impl SpriteKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SpriteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Member → sprite lookup. Read-only once handed to a roster.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SpriteMapping {
    sprites: HashMap<PartyMember, SpriteKey>,
}

impl SpriteMapping {
    pub fn new(sprites: HashMap<PartyMember, SpriteKey>) -> Self {
        Self { sprites }
    }

    /// `sprites/party/<member>.png` for every member kind.
    pub fn conventional() -> Self {
        PartyMember::iter()
            .map(|member| (member, SpriteKey::new(format!("sprites/party/{member}.png"))))
            .collect()
    }

    pub fn get(&self, member: PartyMember) -> Option<&SpriteKey> {
        self.sprites.get(&member)
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

impl FromIterator<(PartyMember, SpriteKey)> for SpriteMapping {
    fn from_iter<I: IntoIterator<Item = (PartyMember, SpriteKey)>>(iter: I) -> Self {
        Self {
            sprites: iter.into_iter().collect(),
        }
    }
}
