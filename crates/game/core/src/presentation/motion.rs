use tokio_util::sync::CancellationToken;

use crate::state::EntityId;

use super::PresentationPoint;

/// Shared cancellation flag for an in-flight animation.
///
/// The entity keeps one clone, the presentation layer another. Cancelling
/// either clone is observed by both.
#[derive(Clone, Debug, Default)]
pub struct MotionToken {
    inner: CancellationToken,
}

impl MotionToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.inner.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.is_cancelled()
    }

    /// Underlying token, for presentation layers that await cancellation.
    pub fn cancellation(&self) -> &CancellationToken {
        &self.inner
    }
}

/// Start, end, and duration of a tile-to-tile animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionPath {
    pub from: PresentationPoint,
    pub to: PresentationPoint,
    pub duration_ms: u32,
}

/// Outcome of stepping a [`Motion`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MotionStatus {
    InFlight(PresentationPoint),
    Finished(PresentationPoint),
    /// The entity was removed or moved again. Normal termination.
    Cancelled,
}

/// Animation handed to the presentation bridge after a committed move.
///
/// Logical state is already final when a `Motion` exists; stepping it only
/// interpolates the rendered position.
#[derive(Clone, Debug)]
pub struct Motion {
    entity: EntityId,
    path: MotionPath,
    elapsed_ms: u32,
    token: MotionToken,
}

impl Motion {
    pub fn new(entity: EntityId, path: MotionPath, token: MotionToken) -> Self {
        Self {
            entity,
            path,
            elapsed_ms: 0,
            token,
        }
    }

    pub fn entity(&self) -> EntityId {
        self.entity
    }

    pub fn path(&self) -> MotionPath {
        self.path
    }

    pub fn token(&self) -> &MotionToken {
        &self.token
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Advances the animation clock by `dt_ms`.
    pub fn advance(&mut self, dt_ms: u32) -> MotionStatus {
        if self.token.is_cancelled() {
            return MotionStatus::Cancelled;
        }

        self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms);
        if self.elapsed_ms >= self.path.duration_ms {
            return MotionStatus::Finished(self.path.to);
        }

        let t = self.elapsed_ms as f32 / self.path.duration_ms as f32;
        MotionStatus::InFlight(self.path.from.lerp(self.path.to, t))
    }
}
