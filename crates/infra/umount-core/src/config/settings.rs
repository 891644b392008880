//! Process-wide default settings.
//!
//! The defaults are held as an immutable snapshot. Readers take a cheap
//! `Arc` clone at call time; writers swap in a whole new snapshot, so a call
//! already in flight keeps the settings it started with.

use super::types::Settings;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

fn slot() -> &'static RwLock<Arc<Settings>> {
    static DEFAULTS: OnceLock<RwLock<Arc<Settings>>> = OnceLock::new();
    DEFAULTS.get_or_init(|| RwLock::new(Arc::new(Settings::default())))
}

/// Snapshot of the current defaults.
pub fn current() -> Arc<Settings> {
    let guard = slot().read().unwrap_or_else(PoisonError::into_inner);
    Arc::clone(&*guard)
}

/// Install `settings` as the new defaults, returning the previous snapshot.
pub fn replace(settings: Settings) -> Arc<Settings> {
    let mut guard = slot().write().unwrap_or_else(PoisonError::into_inner);
    std::mem::replace(&mut *guard, Arc::new(settings))
}

/// Derive new defaults from the current snapshot.
pub fn update<F>(f: F) -> Arc<Settings>
where
    F: FnOnce(&Settings) -> Settings,
{
    let mut guard = slot().write().unwrap_or_else(PoisonError::into_inner);
    let next = Arc::new(f(&guard));
    *guard = Arc::clone(&next);
    next
}

/// Restore the built-in defaults.
pub fn reset() -> Arc<Settings> {
    replace(Settings::default())
}
