#![forbid(unsafe_code)]

use crate::error::Error;
use parking_lot::RwLock;
use std::sync::Arc;
use telemetry::SystemSnapshot;

/// The session's current snapshot. Ticks swap in a new value; readers keep
/// whatever `Arc` they loaded and never observe a partial update.
#[derive(Debug, Clone)]
pub struct SharedSnapshot(Arc<RwLock<Arc<SystemSnapshot>>>);

impl SharedSnapshot {
    pub fn new(snapshot: SystemSnapshot) -> Self {
        Self(Arc::new(RwLock::new(Arc::new(snapshot))))
    }

    pub fn load(&self) -> Arc<SystemSnapshot> {
        self.0.read().clone()
    }

    /// Replace the snapshot with the transition's output, if any.
    /// Returns whether a new snapshot was installed.
    pub(crate) fn update<F>(&self, transition: F) -> Result<bool, Error>
    where
        F: FnOnce(&SystemSnapshot) -> Result<Option<SystemSnapshot>, Error>,
    {
        let mut current = self.0.write();
        match transition(&current)? {
            Some(next) => {
                *current = Arc::new(next);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
