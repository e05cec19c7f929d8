//! Party roster loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tactics_core::{PartyMember, Roster, SpriteMapping};

use crate::loaders::{LoadResult, read_file};

const DEFAULT_PARTY: &str = include_str!("../../data/party.ron");

/// Party definition as written in RON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartySpec {
    /// Turn order; the first member acts first.
    pub members: Vec<PartyMember>,
    /// Sprite per member kind. `None` selects the conventional asset paths.
    #[serde(default)]
    pub sprites: Option<SpriteMapping>,
}

impl PartySpec {
    /// Validates the definition into a ready roster.
    pub fn into_roster(self) -> LoadResult<Roster> {
        let sprites = self.sprites.unwrap_or_else(SpriteMapping::conventional);
        Roster::initialize(self.members, sprites)
            .map_err(|e| anyhow::anyhow!("Invalid party definition: {}", e))
    }
}

/// Loader for the starting party from RON files.
pub struct PartyLoader;

impl PartyLoader {
    /// Load and validate a party definition.
    pub fn load(path: &Path) -> LoadResult<Roster> {
        let content = read_file(path)?;
        Self::parse(&content)?.into_roster()
    }

    pub fn parse(content: &str) -> LoadResult<PartySpec> {
        let spec: PartySpec = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse party RON: {}", e))?;
        tracing::debug!(members = spec.members.len(), "party loaded");
        Ok(spec)
    }

    /// Party shipped with the crate.
    pub fn load_default() -> LoadResult<Roster> {
        Self::parse(DEFAULT_PARTY)?.into_roster()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_party_has_all_four_members() {
        let roster = PartyLoader::load_default().expect("embedded party");
        assert_eq!(
            roster.members(),
            &[
                PartyMember::Warlock,
                PartyMember::Wizard,
                PartyMember::Pickpocket,
                PartyMember::Sailor,
            ]
        );
        assert_eq!(roster.active_member(), PartyMember::Warlock);
        assert_eq!(roster.active_sprite().as_str(), "sprites/party/warlock.png");
    }

    #[test]
    fn omitted_sprites_use_conventional_paths() {
        let roster = PartyLoader::parse("(members: [Sailor, Wizard])")
            .and_then(PartySpec::into_roster)
            .expect("roster");
        assert_eq!(
            roster.sprite_for(PartyMember::Wizard).as_str(),
            "sprites/party/wizard.png"
        );
    }

    #[test]
    fn empty_roster_is_a_configuration_error() {
        let error = PartyLoader::parse("(members: [])")
            .and_then(PartySpec::into_roster)
            .unwrap_err();
        assert!(error.to_string().contains("at least one member"));
    }

    #[test]
    fn incomplete_sprite_mapping_is_rejected() {
        let error = PartyLoader::parse(
            r#"(members: [Warlock], sprites: Some({ Warlock: "w.png", Wizard: "z.png" }))"#,
        )
        .and_then(PartySpec::into_roster)
        .unwrap_err();
        assert!(error.to_string().contains("pickpocket"));
    }

    #[test]
    fn unknown_member_fails_to_parse() {
        assert!(PartyLoader::parse("(members: [Bard])").is_err());
    }
}
