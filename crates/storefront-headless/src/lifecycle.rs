//! Mount tracking and change notification for logic handles.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Whether a component instance is still on screen.
///
/// Shared by every clone of a handle and by the tasks it hands out. Once
/// unmounted it stays unmounted.
#[derive(Debug, Clone)]
pub struct Mount {
    alive: Arc<AtomicBool>,
}

impl Mount {
    pub fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }

    /// Mark the instance destroyed. Returns false if it already was.
    pub fn unmount(&self) -> bool {
        self.alive.swap(false, Ordering::AcqRel)
    }
}

impl Default for Mount {
    fn default() -> Self {
        Self::new()
    }
}

/// Receives a notification after every state change of a logic handle.
///
/// The revision increases by one per change; the presentational layer
/// re-renders from a fresh view when it sees a new one.
pub trait ChangeObserver: Send + Sync {
    fn on_change(&self, revision: u64);
}

impl<F> ChangeObserver for F
where
    F: Fn(u64) + Send + Sync,
{
    fn on_change(&self, revision: u64) {
        self(revision)
    }
}

/// Lock state, recovering it if a previous holder panicked.
pub(crate) fn lock<T>(state: &Mutex<T>) -> MutexGuard<'_, T> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
