//! Key-to-destination registry.
//!
//! [`NavRouter`] maps [`DestinationKey`]s to destination factories. Factories
//! are registered once during setup and invoked on every `resolve`; nothing
//! the router produces is cached.

use crate::error::{DuplicateKeySnafu, KeyNotFoundSnafu};
use crate::key::DestinationKey;
use crate::router::traits::{Navigator, Registrar};
use parking_lot::RwLock;
use snafu::prelude::*;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Shared, thread-safe destination factory.
pub type Factory<D> = Arc<dyn Fn() -> D + Send + Sync>;

/// A registry of destination factories keyed by [`DestinationKey`].
///
/// The router is a handle: clones share the same registry, so one instance
/// can be built at startup and passed to every component that registers or
/// resolves destinations.
///
/// # Example
/// ```ignore
/// use rat_nav::{DestinationKey, NavRouter};
///
/// let router = NavRouter::new();
/// let key = DestinationKey::new("ViewA")?;
/// router.register(key.clone(), || "view a".to_string())?;
/// assert_eq!(router.resolve(&key)?, "view a");
/// assert!(router.register(key, || "other".to_string()).is_err());
/// ```
pub struct NavRouter<D> {
    destinations: Arc<RwLock<HashMap<DestinationKey, Factory<D>>>>,
}

impl<D> NavRouter<D> {
    /// Create a router with an empty registry.
    pub fn new() -> Self {
        Self {
            destinations: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register `factory` under `key`.
    ///
    /// Returns [`Error::DuplicateKey`](crate::Error::DuplicateKey) if the key
    /// is already registered. The existing factory is kept.
    pub fn register<K, F>(&self, key: K, factory: F) -> crate::Result<()>
    where
        K: Into<DestinationKey>,
        F: Fn() -> D + Send + Sync + 'static,
    {
        let mut destinations = self.destinations.write();
        match destinations.entry(key.into()) {
            Entry::Occupied(entry) => DuplicateKeySnafu {
                key: entry.key().clone(),
            }
            .fail(),
            Entry::Vacant(entry) => {
                entry.insert(Arc::new(factory));
                Ok(())
            }
        }
    }

    /// Invoke the factory registered under `key` and return what it builds.
    ///
    /// The lock is released before the factory runs, so factories may call
    /// back into the router.
    pub fn resolve(&self, key: &str) -> crate::Result<D> {
        let factory = self.destinations.read().get(key).cloned();
        let factory = factory.context(KeyNotFoundSnafu { key })?;
        Ok(factory())
    }

    /// Remove the entry for `key`, returning whether one existed.
    pub fn unregister(&self, key: &str) -> bool {
        self.destinations.write().remove(key).is_some()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.destinations.read().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.destinations.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.read().is_empty()
    }

    /// Snapshot of the registered keys, sorted.
    pub fn keys(&self) -> Vec<DestinationKey> {
        let mut keys: Vec<_> = self.destinations.read().keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Check that every key in `required` is registered.
    ///
    /// Meant for startup validation: the first missing key is reported as
    /// [`Error::KeyNotFound`](crate::Error::KeyNotFound).
    pub fn ensure_registered<I>(&self, required: I) -> crate::Result<()>
    where
        I: IntoIterator,
        I::Item: Into<DestinationKey>,
    {
        let destinations = self.destinations.read();
        for key in required {
            let key = key.into();
            ensure!(
                destinations.contains_key(&key),
                KeyNotFoundSnafu { key: key.as_str() }
            );
        }
        Ok(())
    }
}

impl<D> Navigator<D> for NavRouter<D> {
    fn resolve(&self, key: &str) -> crate::Result<D> {
        NavRouter::resolve(self, key)
    }
}

impl<D> Registrar<D> for NavRouter<D> {
    fn register<K, F>(&self, key: K, factory: F) -> crate::Result<()>
    where
        K: Into<DestinationKey>,
        F: Fn() -> D + Send + Sync + 'static,
    {
        NavRouter::register(self, key, factory)
    }

    fn unregister(&self, key: &str) -> bool {
        NavRouter::unregister(self, key)
    }
}

impl<D> Clone for NavRouter<D> {
    fn clone(&self) -> Self {
        Self {
            destinations: Arc::clone(&self.destinations),
        }
    }
}

impl<D> Default for NavRouter<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> fmt::Debug for NavRouter<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavRouter")
            .field("keys", &self.keys())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::sync::Barrier;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn key(s: &str) -> DestinationKey {
        DestinationKey::new(s).unwrap()
    }

    #[test]
    fn test_register_then_resolve() {
        let router = NavRouter::new();
        router.register(key("ViewA"), || "view a".to_string()).unwrap();

        assert_eq!(router.resolve("ViewA").unwrap(), "view a");
        assert_eq!(router.len(), 1);
    }

    #[test]
    fn test_duplicate_registration_keeps_original() {
        let router = NavRouter::new();
        router.register(key("ViewA"), || 1).unwrap();

        let err = router.register(key("ViewA"), || 2).unwrap_err();
        assert_eq!(err, Error::DuplicateKey { key: key("ViewA") });
        assert_eq!(err.to_string(), "destination already registered: ViewA");

        assert_eq!(router.resolve("ViewA").unwrap(), 1);
        assert_eq!(router.len(), 1);
    }

    #[test]
    fn test_resolve_unknown_on_empty_router() {
        let router = NavRouter::<()>::new();
        let err = router.resolve("Unknown").unwrap_err();

        assert_eq!(err, Error::KeyNotFound { key: "Unknown".to_string() });
        assert_eq!(err.key(), "Unknown");
        assert!(router.is_empty());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let router = NavRouter::new();
        router.register(key("ViewA"), || ()).unwrap();

        assert!(router.resolve("viewa").is_err());
        assert!(router.resolve("ViewA ").is_err());
        assert!(router.resolve("").is_err());
    }

    #[test]
    fn test_unregister_removes_only_target() {
        let router = NavRouter::new();
        router.register(key("A"), || 'a').unwrap();
        router.register(key("B"), || 'b').unwrap();

        assert!(router.unregister("A"));
        assert_eq!(router.resolve("A"), Err(Error::KeyNotFound { key: "A".to_string() }));
        assert_eq!(router.resolve("B").unwrap(), 'b');
    }

    #[test]
    fn test_unregister_absent_key_is_noop() {
        let router = NavRouter::new();
        router.register(key("A"), || ()).unwrap();

        assert!(!router.unregister("Missing"));
        assert_eq!(router.len(), 1);
    }

    #[test]
    fn test_unregistered_key_can_be_registered_again() {
        let router = NavRouter::new();
        router.register(key("A"), || 1).unwrap();
        assert!(router.unregister("A"));
        router.register(key("A"), || 2).unwrap();

        assert_eq!(router.resolve("A").unwrap(), 2);
    }

    #[test]
    fn test_resolve_invokes_factory_every_time() {
        let calls = Arc::new(AtomicUsize::new(0));
        let router = NavRouter::new();
        let counter = Arc::clone(&calls);
        router
            .register(key("Counter"), move || counter.fetch_add(1, Ordering::SeqCst))
            .unwrap();

        assert_eq!(router.resolve("Counter").unwrap(), 0);
        assert_eq!(router.resolve("Counter").unwrap(), 1);
        assert_eq!(router.resolve("Counter").unwrap(), 2);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_failed_lookup_does_not_invoke_other_factories() {
        let calls = Arc::new(AtomicUsize::new(0));
        let router = NavRouter::new();
        let counter = Arc::clone(&calls);
        router
            .register(key("A"), move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .unwrap();

        assert!(router.resolve("B").is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_factory_may_call_back_into_router() {
        let router = NavRouter::new();
        router.register(key("Inner"), || "inner".to_string()).unwrap();

        let handle = router.clone();
        router
            .register(key("Outer"), move || {
                let inner = handle.resolve("Inner").unwrap_or_default();
                format!("outer({inner})")
            })
            .unwrap();

        assert_eq!(router.resolve("Outer").unwrap(), "outer(inner)");
    }

    #[test]
    fn test_clones_share_registry() {
        let router = NavRouter::new();
        let other = router.clone();
        other.register(key("Shared"), || 7).unwrap();

        assert!(router.contains("Shared"));
        assert_eq!(router.resolve("Shared").unwrap(), 7);
    }

    #[test]
    fn test_keys_are_sorted() {
        let router = NavRouter::new();
        for name in ["Sheet", "Animated", "Router"] {
            router.register(key(name), || ()).unwrap();
        }

        assert_eq!(router.keys(), vec![key("Animated"), key("Router"), key("Sheet")]);
        assert_eq!(
            format!("{router:?}"),
            concat!(
                "NavRouter { keys: [DestinationKey(\"Animated\"), ",
                "DestinationKey(\"Router\"), DestinationKey(\"Sheet\")] }"
            )
        );
    }

    #[test]
    fn test_ensure_registered_reports_first_missing() {
        let router = NavRouter::new();
        router.register(key("A"), || ()).unwrap();
        router.register(key("C"), || ()).unwrap();

        assert!(router.ensure_registered([key("A"), key("C")]).is_ok());
        assert!(router.ensure_registered(Vec::<DestinationKey>::new()).is_ok());
        assert_eq!(
            router.ensure_registered([key("A"), key("B"), key("D")]),
            Err(Error::KeyNotFound { key: "B".to_string() })
        );
    }

    #[test]
    fn test_trait_objects() {
        let router = NavRouter::new();
        Registrar::register(&router, key("A"), || 1u8).unwrap();

        let navigator: Arc<dyn Navigator<u8> + Send + Sync> = Arc::new(router.clone());
        assert_eq!(navigator.resolve("A").unwrap(), 1);
        assert!(Registrar::unregister(&router, "A"));
        assert!(navigator.resolve("A").is_err());
    }

    #[test]
    fn test_concurrent_registration_of_distinct_keys() {
        let router = NavRouter::new();
        let barrier = Arc::new(Barrier::new(2));

        let handles: Vec<_> = ["A", "B"]
            .into_iter()
            .map(|name| {
                let router = router.clone();
                let barrier = Arc::clone(&barrier);
                std::thread::spawn(move || {
                    barrier.wait();
                    router.register(key(name), move || name)
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap().unwrap();
        }

        assert_eq!(router.len(), 2);
        assert_eq!(router.resolve("A").unwrap(), "A");
        assert_eq!(router.resolve("B").unwrap(), "B");
    }

    #[test]
    fn test_concurrent_duplicate_registration_has_one_winner() {
        let router = NavRouter::new();
        let barrier = Arc::new(Barrier::new(8));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let router = router.clone();
                let barrier = Arc::clone(&barrier);
                std::thread::spawn(move || {
                    barrier.wait();
                    router.register(key("Contended"), move || i)
                })
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .filter(|result| result.is_ok())
            .count();

        assert_eq!(successes, 1);
        assert_eq!(router.len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_resolve_while_registering() {
        let router = NavRouter::new();
        router.register(key("Stable"), || 0usize).unwrap();

        let mut tasks = Vec::new();
        for i in 0..32usize {
            let router = router.clone();
            tasks.push(tokio::spawn(async move {
                router.register(key(&format!("key-{i}")), move || i + 1).unwrap();
                router.resolve("Stable").unwrap()
            }));
        }

        for task in tasks {
            assert_eq!(task.await.unwrap(), 0);
        }

        assert_eq!(router.len(), 33);
        for i in 0..32usize {
            assert_eq!(router.resolve(&format!("key-{i}")).unwrap(), i + 1);
        }
    }
}
