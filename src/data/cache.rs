use crate::data::DataError;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};
use tracing::{error, info};

/// A loaded dataset plus the moment it was loaded.
#[derive(Debug)]
pub struct Loaded<T> {
    pub value: T,
    pub loaded_at: DateTime<Utc>,
}

/// Load-once, process-scoped cache slot.
///
/// The first caller runs the loader while holding the slot, so concurrent
/// callers wait for that result instead of fetching again. A failed load
/// leaves the slot empty and the next call retries.
pub struct LoadOnce<T> {
    name: &'static str,
    slot: Mutex<Option<Arc<Loaded<T>>>>,
}

impl<T> LoadOnce<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            slot: Mutex::new(None),
        }
    }

    pub fn get_or_load<F>(&self, load: F) -> Result<Arc<Loaded<T>>, DataError>
    where
        F: FnOnce() -> Result<T, DataError>,
    {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| self.poisoned())?;

        if let Some(hit) = slot.as_ref() {
            return Ok(Arc::clone(hit));
        }

        let loaded = Arc::new(Loaded {
            value: load()?,
            loaded_at: Utc::now(),
        });
        *slot = Some(Arc::clone(&loaded));

        Ok(loaded)
    }

    fn poisoned(&self) -> DataError {
        error!(cache = self.name, "cache lock poisoned");
        DataError::Poisoned(self.name)
    }

    /// Drop the cached value. Returns whether anything was cached.
    pub fn invalidate(&self) -> Result<bool, DataError> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| self.poisoned())?;

        let had_value = slot.take().is_some();
        if had_value {
            info!(cache = self.name, "🧹 cache invalidated");
        }
        Ok(had_value)
    }
}
