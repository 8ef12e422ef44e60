//! Search cancellation.
//!
//! Every search runs against a [`StopFlag`]. The engine facade keeps one flag
//! per "generation" of the game in a [`SearchGeneration`]; resetting the game
//! stops the old flag and installs a fresh one, so searches started before the
//! reset wind down without touching the new game.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

/// A thread-safe stop flag for controlling search termination.
#[derive(Clone, Debug)]
pub struct StopFlag(Arc<AtomicBool>);

impl StopFlag {
    /// Create a new stop flag (initially not stopped).
    #[must_use]
    pub fn new() -> Self {
        StopFlag(Arc::new(AtomicBool::new(false)))
    }

    /// Create a stop flag that is already set.
    #[must_use]
    pub fn stopped() -> Self {
        StopFlag(Arc::new(AtomicBool::new(true)))
    }

    #[inline]
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    #[inline]
    pub fn stop(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Whether both handles control the same flag.
    #[must_use]
    pub fn same_as(&self, other: &StopFlag) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for StopFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// The stop flag of the current game generation.
#[derive(Debug, Default)]
pub struct SearchGeneration {
    current: Mutex<StopFlag>,
}

impl SearchGeneration {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle for a search that should end when this generation ends.
    #[must_use]
    pub fn flag(&self) -> StopFlag {
        self.current.lock().clone()
    }

    /// Stop every search of the current generation and start a new one.
    pub fn advance(&self) {
        let mut current = self.current.lock();
        current.stop();
        *current = StopFlag::new();
    }
}
