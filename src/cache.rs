//! Last-applied state cache.
//!
//! The panel is a slow, stateful output device, so the sync engine only
//! writes an LED when its derived state actually changes.  This cache
//! holds the state last *successfully* applied to each indicator.
//!
//! Ownership rule: the cache belongs to [`SyncService`] and is mutated
//! from the single poll thread only.  Rules never see it.  A future
//! parallel writer would have to confine it behind a mutex or a channel;
//! nothing in here assumes that yet.
//!
//! [`SyncService`]: crate::app::service::SyncService

use crate::panel::IndicatorId;
use crate::rules::DerivedState;

/// Array-backed map from indicator slot to last applied state.
///
/// `None` is the "unset" sentinel: it compares unequal to every real
/// state, so the first pass after a [`reset`](Self::reset) always emits
/// a command for every active rule.
#[derive(Debug, Clone)]
pub struct StateCache {
    slots: [Option<DerivedState>; IndicatorId::COUNT],
}

impl StateCache {
    /// A fresh cache with every indicator unset.
    pub const fn new() -> Self {
        Self {
            slots: [None; IndicatorId::COUNT],
        }
    }

    /// Last state applied to `id`, or `None` if nothing has been applied
    /// since the last reset.
    pub fn get(&self, id: IndicatorId) -> Option<DerivedState> {
        self.slots[id.index()]
    }

    /// Record a successful write.
    pub fn set(&mut self, id: IndicatorId, state: DerivedState) {
        debug_assert!(
            state != DerivedState::Unsupported,
            "Unsupported must never be cached"
        );
        self.slots[id.index()] = Some(state);
    }

    /// Forget everything — run at session start, after the all-off sweep.
    pub fn reset(&mut self) {
        self.slots = [None; IndicatorId::COUNT];
    }
}

impl Default for StateCache {
    fn default() -> Self {
        Self::new()
    }
}
