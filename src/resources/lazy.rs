//! Deferred, memoized loading shared by every TAXII entity.
//!
//! An entity owns one [`Lazy`] slot per independently fetchable facet (an
//! API root has two: its information and its collections list). Accessors go
//! through [`Lazy::get_or_try_load`], which runs the fetch only while the slot
//! is empty.
//!
//! # Invariants
//!
//! - A filled slot stays filled until [`Lazy::clear`] is called
//! - A failed load leaves the slot empty, so the next access fetches again
//! - Loads are serialized by a separate lock: concurrent first access from
//!   several threads issues a single request
//! - [`Lazy::is_loaded`] and [`Lazy::clear`] never wait for an in-flight load
//! - A `clear` that lands while a load is in flight wins: that load's result
//!   is returned to its caller but not cached

use crate::error::Result;
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;

struct Slot<T> {
    value: Option<Arc<T>>,
    generation: u64,
}

/// A slot that is filled on first access and emptied by `clear`.
pub(crate) struct Lazy<T> {
    slot: RwLock<Slot<T>>,
    loading: Mutex<()>,
}

impl<T> Lazy<T> {
    fn with_value(value: Option<Arc<T>>) -> Self {
        Self {
            slot: RwLock::new(Slot {
                value,
                generation: 0,
            }),
            loading: Mutex::new(()),
        }
    }

    /// An empty slot; the first access will load it.
    pub(crate) fn empty() -> Self {
        Self::with_value(None)
    }

    /// A slot that already holds a value.
    pub(crate) fn loaded(value: T) -> Self {
        Self::with_value(Some(Arc::new(value)))
    }

    pub(crate) fn is_loaded(&self) -> bool {
        self.slot.read().value.is_some()
    }

    /// Drop the cached value without fetching.
    pub(crate) fn clear(&self) {
        let mut slot = self.slot.write();
        slot.value = None;
        slot.generation = slot.generation.wrapping_add(1);
    }

    fn cached(&self) -> Option<Arc<T>> {
        self.slot.read().value.clone()
    }

    /// Return the cached value, running `load` first if the slot is empty.
    ///
    /// Only one load runs at a time; callers arriving during a load wait for
    /// it and then reuse its value.
    pub(crate) fn get_or_try_load<F>(&self, load: F) -> Result<Arc<T>>
    where
        F: FnOnce() -> Result<T>,
    {
        if let Some(value) = self.cached() {
            return Ok(value);
        }

        let _loading = self.loading.lock();
        if let Some(value) = self.cached() {
            return Ok(value);
        }

        let generation = self.slot.read().generation;
        let value = Arc::new(load()?);

        let mut slot = self.slot.write();
        if slot.generation == generation {
            slot.value = Some(Arc::clone(&value));
        }
        Ok(value)
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Lazy<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(value) = self.slot.try_read().and_then(|slot| slot.value.clone()) {
            return f.debug_tuple("Loaded").field(&value).finish();
        }
        if self.loading.is_locked() {
            f.write_str("Loading")
        } else {
            f.write_str("Unloaded")
        }
    }
}

/// Behavior shared by every lazily-loaded TAXII entity.
///
/// Metadata accessors on an entity call [`ensure_loaded`](Self::ensure_loaded)
/// implicitly; the trait exposes the same contract for callers that want to
/// prefetch, inspect or invalidate an entity generically.
pub trait LazyResource {
    /// Canonical, slash-terminated URL of the entity.
    fn url(&self) -> &str;

    /// Whether the entity's metadata has been fetched.
    fn is_loaded(&self) -> bool;

    /// Fetch the metadata now unless it is already cached.
    fn ensure_loaded(&self) -> Result<()>;

    /// Discard cached metadata. The next access fetches again.
    fn refresh(&self);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TaxiiError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::mpsc;
    use std::thread;

    #[test]
    fn test_loads_once() {
        let lazy = Lazy::empty();
        let calls = AtomicUsize::new(0);
        let load = || {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok("value".to_string())
        };

        assert!(!lazy.is_loaded());
        assert_eq!(*lazy.get_or_try_load(load).unwrap(), "value");
        assert!(lazy.is_loaded());
        assert_eq!(*lazy.get_or_try_load(load).unwrap(), "value");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_clear_forces_reload() {
        let lazy = Lazy::loaded(1u32);
        assert!(lazy.is_loaded());

        lazy.clear();
        assert!(!lazy.is_loaded());

        assert_eq!(*lazy.get_or_try_load(|| Ok(2)).unwrap(), 2);
    }

    #[test]
    fn test_failed_load_stays_empty() {
        let lazy: Lazy<u32> = Lazy::empty();
        let err = lazy
            .get_or_try_load(|| Err(TaxiiError::Http("connection refused".into())))
            .unwrap_err();
        assert!(err.is_request_error());
        assert!(!lazy.is_loaded());

        assert_eq!(*lazy.get_or_try_load(|| Ok(7)).unwrap(), 7);
    }

    #[test]
    fn test_concurrent_first_access() {
        let lazy = Arc::new(Lazy::empty());
        let calls = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let lazy = Arc::clone(&lazy);
                let calls = Arc::clone(&calls);
                thread::spawn(move || {
                    *lazy
                        .get_or_try_load(|| {
                            calls.fetch_add(1, Ordering::SeqCst);
                            thread::sleep(std::time::Duration::from_millis(10));
                            Ok(42u32)
                        })
                        .unwrap()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 42);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_state_readable_during_load() {
        let lazy: Arc<Lazy<u32>> = Arc::new(Lazy::empty());
        let (started_tx, started_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel::<()>();

        let loader = {
            let lazy = Arc::clone(&lazy);
            thread::spawn(move || {
                *lazy
                    .get_or_try_load(|| {
                        started_tx.send(()).unwrap();
                        release_rx.recv().unwrap();
                        Ok(5)
                    })
                    .unwrap()
            })
        };

        started_rx.recv().unwrap();
        assert!(!lazy.is_loaded());
        assert_eq!(format!("{:?}", lazy), "Loading");
        release_tx.send(()).unwrap();

        assert_eq!(loader.join().unwrap(), 5);
        assert!(lazy.is_loaded());
    }

    #[test]
    fn test_clear_during_load_is_not_overwritten() {
        let lazy: Arc<Lazy<u32>> = Arc::new(Lazy::empty());
        let (started_tx, started_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel::<()>();

        let loader = {
            let lazy = Arc::clone(&lazy);
            thread::spawn(move || {
                *lazy
                    .get_or_try_load(|| {
                        started_tx.send(()).unwrap();
                        release_rx.recv().unwrap();
                        Ok(1)
                    })
                    .unwrap()
            })
        };

        started_rx.recv().unwrap();
        lazy.clear();
        release_tx.send(()).unwrap();

        assert_eq!(loader.join().unwrap(), 1);
        assert!(!lazy.is_loaded());
        assert_eq!(*lazy.get_or_try_load(|| Ok(2)).unwrap(), 2);
    }

    #[test]
    fn test_debug() {
        let lazy: Lazy<u32> = Lazy::empty();
        assert_eq!(format!("{:?}", lazy), "Unloaded");
        let lazy = Lazy::loaded(3u32);
        assert_eq!(format!("{:?}", lazy), "Loaded(3)");
    }
}
