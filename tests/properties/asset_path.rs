//! Property tests for manifest destination validation.

use std::path::Component;

use proptest::prelude::*;

use deploy_assets::domain::value_objects::AssetPath;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Validation never panics on arbitrary input.
    #[test]
    fn property_validation_never_panics(s in "(?s).{0,128}") {
        let _ = AssetPath::new(&s);
    }

    /// PROPERTY: Accepted destinations stay inside the output root.
    #[test]
    fn property_accepted_paths_are_contained(s in "[a-z./]{0,32}") {
        if let Ok(path) = AssetPath::new(&s) {
            prop_assert!(!path.as_path().is_absolute());
            prop_assert!(!path
                .as_path()
                .components()
                .any(|c| matches!(c, Component::ParentDir | Component::RootDir)));
        }
    }

    /// PROPERTY: Any `..` segment is rejected.
    #[test]
    fn property_traversal_is_rejected(
        prefix in "[a-z]{1,8}(/[a-z]{1,8}){0,2}",
        suffix in "[a-z]{1,8}",
    ) {
        let candidate = format!("{}/../{}", prefix, suffix);
        prop_assert!(AssetPath::new(&candidate).is_err());
    }
}
