//! Property tests for source map path rewriting.

use std::path::{Path, PathBuf};

use proptest::prelude::*;

use deploy_assets::domain::services::{replace_paths, SourceUris};

fn lowercase_key() -> impl Strategy<Value = String> {
    proptest::string::string_regex("/[a-c/]{1,6}").unwrap()
}

fn uppercase_value() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Z]{1,6}").unwrap()
}

fn relative_segments() -> impl Strategy<Value = Vec<String>> {
    let segment = proptest::string::string_regex("[A-Za-z0-9._-]{1,10}")
        .unwrap()
        .prop_filter("no dot segments", |s| s != "." && s != "..");
    proptest::collection::vec(segment, 1..=4)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Replacement never panics, whatever the text.
    #[test]
    fn property_replace_never_panics(
        text in "(?s).{0,128}",
        key in "(?s).{0,8}",
        value in "(?s).{0,8}",
    ) {
        let _ = replace_paths(&text, &[(key, value)]);
    }

    /// PROPERTY: Text without any key comes back unchanged.
    #[test]
    fn property_text_without_keys_is_untouched(
        text in "[A-Z0-9 ]{0,64}",
        keys in proptest::collection::vec((lowercase_key(), uppercase_value()), 0..4),
    ) {
        prop_assert_eq!(replace_paths(&text, &keys), text);
    }

    /// PROPERTY: After one pass no key survives when values can't form keys.
    #[test]
    fn property_no_key_survives(
        text in "[a-c/X]{0,64}",
        keys in proptest::collection::vec((lowercase_key(), uppercase_value()), 1..4),
    ) {
        let out = replace_paths(&text, &keys);
        for (key, _) in &keys {
            prop_assert!(!out.contains(key.as_str()), "{:?} still contains {:?}", out, key);
        }
    }

    /// PROPERTY: Paths under the source root map to URIs under the URI root.
    #[test]
    fn property_uri_for_path_under_root(segments in relative_segments()) {
        let uris = SourceUris::new("/build/src", "/home/dev/project");
        let relative: PathBuf = segments.iter().collect();

        let uri = uris.uri_for(&Path::new("/build/src").join(&relative));

        prop_assert_eq!(
            uri,
            Some(format!("file:///home/dev/project/{}", segments.join("/")))
        );
    }

    /// PROPERTY: Paths outside the source root are never mapped.
    #[test]
    fn property_paths_outside_root_are_ignored(segments in relative_segments()) {
        let uris = SourceUris::new("/build/src", "/home/dev/project");
        let relative: PathBuf = segments.iter().collect();

        prop_assert_eq!(uris.uri_for(&Path::new("/build/other").join(relative)), None);
    }
}
