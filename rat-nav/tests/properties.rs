//! Registry properties checked over generated key sets.

use proptest::prelude::*;
use rat_nav::{DestinationKey, Error, NavRouter};
use std::collections::BTreeSet;

fn key_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9_/-]{0,15}"
}

fn key(s: &str) -> DestinationKey {
    DestinationKey::new(s).unwrap()
}

proptest! {
    #[test]
    fn prop_fresh_keys_resolve_to_their_factory(
        keys in prop::collection::btree_set(key_strategy(), 1..32)
    ) {
        let router = NavRouter::new();
        for name in &keys {
            let produced = name.clone();
            prop_assert!(router.register(key(name), move || produced.clone()).is_ok());
        }

        prop_assert_eq!(router.len(), keys.len());
        for name in &keys {
            prop_assert_eq!(&router.resolve(name).unwrap(), name);
        }
    }

    #[test]
    fn prop_second_registration_never_overwrites(name in key_strategy()) {
        let router = NavRouter::new();
        router.register(key(&name), || "original").unwrap();

        let err = router.register(key(&name), || "replacement").unwrap_err();
        prop_assert_eq!(err, Error::DuplicateKey { key: key(&name) });
        prop_assert_eq!(router.resolve(&name).unwrap(), "original");
    }

    #[test]
    fn prop_unregistered_keys_are_not_found(
        registered in prop::collection::btree_set(key_strategy(), 0..16),
        probe in key_strategy(),
    ) {
        prop_assume!(!registered.contains(&probe));

        let router = NavRouter::new();
        for name in &registered {
            router.register(key(name), || ()).unwrap();
        }

        prop_assert_eq!(router.resolve(&probe), Err(Error::KeyNotFound { key: probe.clone() }));
        prop_assert!(!router.unregister(&probe));
        prop_assert_eq!(router.len(), registered.len());
    }

    #[test]
    fn prop_unregister_removes_exactly_one(
        keys in prop::collection::btree_set(key_strategy(), 1..16),
        pick in any::<prop::sample::Index>(),
    ) {
        let keys: Vec<String> = keys.into_iter().collect();
        let removed = pick.get(&keys).clone();

        let router = NavRouter::new();
        for name in &keys {
            router.register(key(name), || ()).unwrap();
        }

        prop_assert!(router.unregister(&removed));
        prop_assert!(router.resolve(&removed).is_err());

        let remaining: BTreeSet<_> = router.keys().into_iter().map(|k| k.to_string()).collect();
        let expected: BTreeSet<_> = keys.iter().filter(|k| **k != removed).cloned().collect();
        prop_assert_eq!(remaining, expected);
    }
}
