use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use crate::catalog::store::AlbumStore;

/// Shared application state injected into all route handlers via axum::extract::State.
/// Arc provides cheap clone; the RwLock serializes appends against reads.
/// Guards must be dropped before any .await.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<AlbumStore>>,
}

impl AppState {
    pub fn new(store: AlbumStore) -> Self {
        AppState {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// The store is append-only, so a panic while holding the lock cannot
    /// leave a half-written record behind; poisoning is ignored.
    pub fn read_store(&self) -> RwLockReadGuard<'_, AlbumStore> {
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn write_store(&self) -> RwLockWriteGuard<'_, AlbumStore> {
        self.store.write().unwrap_or_else(PoisonError::into_inner)
    }
}
