//! Per-member special abilities.
//!
//! Abilities are looked up strictly by [`PartyMember`] through an
//! [`AbilityRegistry`]. Every handler splits a pure legality check
//! ([`AbilityHandler::can_use`]) from the committing half
//! ([`AbilityHandler::apply`]); callers must check before they commit.
//! Members without a registered handler resolve to [`NoAbility`], which is
//! never usable, so new member kinds can be added before their abilities.
mod effects;
mod push;

pub use effects::{Displacement, SideEffects};
pub use push::PushAbility;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::env::{GridError, GridService};
use crate::party::PartyMember;
use crate::state::{EntityId, Position};

/// Identifies an ability for presentation cues.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum AbilityKind {
    Push,
}

/// Who is using an ability, from where, on which tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AbilityRequest {
    pub member: PartyMember,
    /// Entity acting on the grid (the party).
    pub actor: EntityId,
    pub origin: Position,
    pub target: Position,
}

/// What a committed ability changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AbilityOutcome {
    NoEffect,
    Pushed(Displacement),
}

/// Legality check plus effect of one ability.
pub trait AbilityHandler: Send + Sync {
    /// `None` for handlers that stand in for a missing ability.
    fn kind(&self) -> Option<AbilityKind>;

    /// Side-effect free.
    fn can_use(&self, request: &AbilityRequest, grid: &dyn GridService) -> bool;

    /// Performs the ability. Assumes `can_use` returned true for `request`;
    /// otherwise does nothing.
    fn apply(
        &self,
        request: &AbilityRequest,
        effects: &mut SideEffects<'_>,
    ) -> Result<AbilityOutcome, GridError>;
}

/// Handler bound to members without an ability.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoAbility;

impl AbilityHandler for NoAbility {
    fn kind(&self) -> Option<AbilityKind> {
        None
    }

    fn can_use(&self, _request: &AbilityRequest, _grid: &dyn GridService) -> bool {
        false
    }

    fn apply(
        &self,
        _request: &AbilityRequest,
        _effects: &mut SideEffects<'_>,
    ) -> Result<AbilityOutcome, GridError> {
        Ok(AbilityOutcome::NoEffect)
    }
}

/// Explicit member → ability table.
#[derive(Clone, Default)]
pub struct AbilityRegistry {
    handlers: HashMap<PartyMember, Arc<dyn AbilityHandler>>,
}

impl AbilityRegistry {
    /// Registry with no abilities at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The shipped table: the Warlock pushes.
    pub fn standard() -> Self {
        Self::empty().with_handler(PartyMember::Warlock, PushAbility)
    }

    pub fn with_handler(mut self, member: PartyMember, handler: impl AbilityHandler + 'static) -> Self {
        self.register(member, Arc::new(handler));
        self
    }

    /// Binds `handler` to `member`, replacing any previous binding.
    pub fn register(&mut self, member: PartyMember, handler: Arc<dyn AbilityHandler>) {
        self.handlers.insert(member, handler);
    }

    pub fn handler_for(&self, member: PartyMember) -> &dyn AbilityHandler {
        self.handlers
            .get(&member)
            .map(|handler| handler.as_ref() as &dyn AbilityHandler)
            .unwrap_or(&NoAbility)
    }

    pub fn ability_of(&self, member: PartyMember) -> Option<AbilityKind> {
        self.handler_for(member).kind()
    }

    pub fn can_use_ability(&self, request: &AbilityRequest, grid: &dyn GridService) -> bool {
        self.handler_for(request.member).can_use(request, grid)
    }

    pub fn use_ability(
        &self,
        request: &AbilityRequest,
        effects: &mut SideEffects<'_>,
    ) -> Result<AbilityOutcome, GridError> {
        self.handler_for(request.member).apply(request, effects)
    }
}

impl fmt::Debug for AbilityRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut bound: Vec<_> = self
            .handlers
            .iter()
            .map(|(member, handler)| (*member, handler.kind()))
            .collect();
        bound.sort_by_key(|(member, _)| *member);
        f.debug_struct("AbilityRegistry")
            .field("handlers", &bound)
            .finish()
    }
}
