//! Scenario: Production Release
//!
//! Journey: CI builds the assets for a release.
//!
//! Success Criteria:
//! - No source maps and no debug-only entries are shipped
//! - Every production build compiles from scratch
//! - The stored fingerprint is a content hash of the sources

use std::fs;

use crate::common::*;
use crate::{assert_built, assert_not_built, assert_output_not_contains, assert_success};

/// SCENARIO: release build followed by a repeat release build
#[test]
fn scenario_production_build_ships_no_maps() {
    let env = TestEnv::builder().full_project().build();

    let result = env.run(&["build", "--production"]);
    assert_success!(result);
    assert_output_not_contains!(result, "up to date");

    assert_built!(env, "www/assets/app.css");
    assert_built!(env, "www/assets/css/theme.css");
    assert_built!(env, "www/assets/app.js");
    assert_built!(env, "www/assets/bundle.js");
    assert_not_built!(env, "www/assets/debug.js");

    let maps: Vec<String> = list_all_files(&env.project_path("www/assets"))
        .into_iter()
        .filter(|f| f.ends_with(".map"))
        .collect();
    assert!(maps.is_empty(), "production must not emit maps: {:?}", maps);

    let first_hash = env.stored_hash().expect("production build stores a hash");

    // Step 2: production always rebuilds, and the content hash is stable
    let result = env.run(&["build", "--production"]);
    assert_success!(result);
    assert_eq!(env.npx_calls().len(), 8);
    assert_eq!(env.stored_hash(), Some(first_hash));
}

/// SCENARIO: a debug build after a release build does not trust the release hash
#[test]
fn scenario_debug_after_production_rebuilds() {
    let env = TestEnv::builder().build();
    assert_success!(env.run(&["build", "--production"]));
    let production_hash = env.stored_hash();

    let result = env.run(&["build"]);

    assert_success!(result);
    assert_output_not_contains!(result, "up to date");
    assert_built!(env, "www/assets/app.css.map");
    assert_ne!(env.stored_hash(), production_hash);
}

/// SCENARIO: the production hash only depends on file contents
#[test]
fn scenario_production_hash_ignores_mtime() {
    let env = TestEnv::builder().build();
    assert_success!(env.run(&["build", "--production"]));
    let before = env.stored_hash();

    let path = env.project_path("assets/app.less");
    let content = fs::read(&path).unwrap();
    fs::remove_file(&path).unwrap();
    fs::write(&path, content).unwrap();

    assert_success!(env.run(&["build", "--production"]));
    assert_eq!(env.stored_hash(), before);
}
