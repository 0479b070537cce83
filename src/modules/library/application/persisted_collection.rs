use serde::{de::DeserializeOwned, Serialize};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::modules::library::domain::{KeyValueStorage, StoreObserver};
use crate::shared::errors::AppError;
use crate::shared::utils::LogContext;

struct CollectionState<T> {
    value: T,
    dirty: bool,
}

/// A JSON-serialised value kept in memory and mirrored to one storage key.
///
/// Loading and saving never fail: problems are handed to the observer and the
/// in-memory value stays authoritative.
pub(crate) struct PersistedCollection<T> {
    key: &'static str,
    storage: Arc<dyn KeyValueStorage>,
    observer: Arc<dyn StoreObserver>,
    state: Mutex<CollectionState<T>>,
}

impl<T> PersistedCollection<T>
where
    T: Serialize + DeserializeOwned + Default + Clone,
{
    pub(crate) fn load(
        key: &'static str,
        storage: Arc<dyn KeyValueStorage>,
        observer: Arc<dyn StoreObserver>,
    ) -> Self {
        let value = Self::read(key, storage.as_ref(), observer.as_ref());
        Self {
            key,
            storage,
            observer,
            state: Mutex::new(CollectionState {
                value,
                dirty: false,
            }),
        }
    }

    fn read(key: &str, storage: &dyn KeyValueStorage, observer: &dyn StoreObserver) -> T {
        let raw = match storage.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return T::default(),
            Err(e) => {
                observer.load_failed(key, &e);
                return T::default();
            }
        };

        match serde_json::from_str::<T>(&raw) {
            Ok(value) => {
                LogContext::storage_operation("load", key, raw.len());
                value
            }
            Err(e) => {
                observer.load_failed(key, &AppError::from(e));
                T::default()
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, CollectionState<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn get(&self) -> T {
        self.lock().value.clone()
    }

    pub(crate) fn read_with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.lock().value)
    }

    /// Apply `f`, then attempt to persist the new value
    pub(crate) fn update(&self, f: impl FnOnce(T) -> T) -> T {
        let mut state = self.lock();
        let current = std::mem::take(&mut state.value);
        state.value = f(current);
        state.dirty = true;
        self.save_locked(&mut state);
        state.value.clone()
    }

    /// Retry persisting a value whose last save failed
    pub(crate) fn flush(&self) -> bool {
        let mut state = self.lock();
        if state.dirty {
            self.save_locked(&mut state);
        }
        !state.dirty
    }

    pub(crate) fn is_dirty(&self) -> bool {
        self.lock().dirty
    }

    fn save_locked(&self, state: &mut CollectionState<T>) {
        let result = serde_json::to_string(&state.value)
            .map_err(AppError::from)
            .and_then(|json| self.storage.set(self.key, &json).map(|()| json.len()));

        match result {
            Ok(bytes) => {
                state.dirty = false;
                LogContext::storage_operation("save", self.key, bytes);
            }
            Err(e) => self.observer.save_failed(self.key, &e),
        }
    }
}
