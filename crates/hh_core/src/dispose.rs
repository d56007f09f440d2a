//! Permanent, idempotent disposal protocol.
//!
//! Every cache-owning object in the engine carries a `Lifecycle` tag and
//! checks it at the top of each operation. Disposal must be:
//!
//! 1. Permanent: a disposed object cannot be revived.
//! 2. Infallible: `dispose` never fails, whatever the prior state.
//! 3. Idempotent: a second `dispose` is a no-op.

use crate::errors::CoreError;

/// Two-state liveness tag checked by every operation on a disposable object.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Lifecycle {
    #[default]
    Active,
    Disposed,
}

impl Lifecycle {
    /// `Err(CoreError::Disposed)` once disposed; `Ok(())` while active.
    pub fn verify_active(&self) -> Result<(), CoreError> {
        match self {
            Lifecycle::Active => Ok(()),
            Lifecycle::Disposed => Err(CoreError::Disposed),
        }
    }

    /// Transition to `Disposed`. Returns `true` on the first call only,
    /// so callers can gate their cleanup on the actual transition.
    pub fn dispose(&mut self) -> bool {
        match self {
            Lifecycle::Active => {
                *self = Lifecycle::Disposed;
                true
            }
            Lifecycle::Disposed => false,
        }
    }

    pub fn is_disposed(&self) -> bool {
        matches!(self, Lifecycle::Disposed)
    }
}

/// An object that permanently releases its internal caches.
pub trait Disposable {
    /// Clear all internal state and mark the object unusable. Never fails;
    /// safe to call any number of times.
    fn dispose(&mut self);

    fn is_disposed(&self) -> bool;
}
