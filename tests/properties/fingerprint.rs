//! Property tests for debug fingerprint folding.

use std::collections::BTreeMap;

use proptest::prelude::*;

use deploy_assets::domain::entities::{AssetSpec, Manifest};
use deploy_assets::domain::services::{debug_fingerprint, FileStamp};

fn relative_path() -> impl Strategy<Value = String> {
    let segment = proptest::string::string_regex("[a-z0-9_-]{1,8}").unwrap();
    proptest::collection::vec(segment, 1..=3).prop_map(|segments| segments.join("/"))
}

fn stamp() -> impl Strategy<Value = FileStamp> {
    (0u128..1_000_000_000_000, 0u64..100_000).prop_map(|(modified_nanos, len)| FileStamp {
        modified_nanos,
        len,
    })
}

fn tree() -> impl Strategy<Value = BTreeMap<String, FileStamp>> {
    proptest::collection::btree_map(relative_path(), stamp(), 1..16)
}

fn manifest() -> Manifest {
    Manifest::new().with("vendor.css", AssetSpec::Copy)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Folding is deterministic.
    #[test]
    fn property_same_snapshot_same_fingerprint(files in tree()) {
        let a = debug_fingerprint(&manifest(), None, &files);
        let b = debug_fingerprint(&manifest(), None, &files.clone());
        prop_assert_eq!(a, b);
    }

    /// PROPERTY: Touching any single file changes the fingerprint.
    #[test]
    fn property_any_mtime_change_is_detected(
        files in tree(),
        pick in any::<prop::sample::Index>(),
        delta in 1u128..1_000_000,
    ) {
        let base = debug_fingerprint(&manifest(), None, &files);

        let key = pick.get(&files.keys().cloned().collect::<Vec<_>>()).clone();
        let mut touched = files.clone();
        if let Some(stamp) = touched.get_mut(&key) {
            stamp.modified_nanos += delta;
        }

        prop_assert_ne!(base, debug_fingerprint(&manifest(), None, &touched));
    }

    /// PROPERTY: Removing any file changes the fingerprint.
    #[test]
    fn property_any_removal_is_detected(
        files in tree(),
        pick in any::<prop::sample::Index>(),
    ) {
        let base = debug_fingerprint(&manifest(), None, &files);

        let key = pick.get(&files.keys().cloned().collect::<Vec<_>>()).clone();
        let mut fewer = files.clone();
        fewer.remove(&key);

        prop_assert_ne!(base, debug_fingerprint(&manifest(), None, &fewer));
    }

    /// PROPERTY: The local source root is folded in.
    #[test]
    fn property_local_root_is_detected(
        files in tree(),
        root in "/[a-z]{1,12}(/[a-z]{1,8}){0,3}",
    ) {
        prop_assert_ne!(
            debug_fingerprint(&manifest(), None, &files),
            debug_fingerprint(&manifest(), Some(&root), &files)
        );
    }
}
