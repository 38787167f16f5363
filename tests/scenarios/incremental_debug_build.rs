//! Scenario: Edit-Rebuild Cycle
//!
//! Journey: A developer keeps running `deploy-assets build` while editing.
//!
//! Steps:
//! 1. First build compiles every entry and stores a fingerprint
//! 2. Building again without changes does nothing
//! 3. Editing a source triggers a full rebuild with a new fingerprint
//!
//! Success Criteria:
//! - Compilers run only when something changed
//! - Outputs always reflect the current sources

use crate::common::*;
use crate::{assert_built, assert_not_built, assert_output_contains, assert_success};

/// SCENARIO: build, no-op build, edit, rebuild
#[test]
fn scenario_edit_rebuild_cycle() {
    let env = TestEnv::builder().full_project().build();

    // Step 1: first build compiles everything
    let result = env.run(&["build"]);
    assert_success!(result);

    assert_built!(env, "www/assets/vendor.css");
    assert_built!(env, "www/assets/app.css");
    assert_built!(env, "www/assets/app.css.map");
    assert_built!(env, "www/assets/css/theme.css");
    assert_built!(env, "www/assets/css/theme.css.map");
    assert_built!(env, "www/assets/app.js");
    assert_built!(env, "www/assets/app.js.map");
    assert_built!(env, "www/assets/bundle.js");
    assert_built!(env, "www/assets/bundle.js.map");
    assert_built!(env, "www/assets/debug.js");

    assert_eq!(env.read("www/assets/vendor.css"), VENDOR_CSS);
    assert_eq!(
        env.read("www/assets/app.js"),
        format!("{}{}", LIB_JS, MAIN_JS),
        "uglifyjs sources are concatenated in manifest order"
    );
    assert_eq!(
        env.npx_calls(),
        vec!["lessc", "node-sass", "uglifyjs", "rollup", "uglifyjs"],
        "entries are dispatched in manifest order"
    );

    let first_hash = env.stored_hash().expect("fingerprint stored after build");

    // Step 2: nothing changed, nothing runs
    let result = env.run(&["build"]);
    assert_success!(result);
    assert_output_contains!(result, "up to date");
    assert_eq!(env.npx_calls().len(), 5, "no compiler may run on a no-op build");
    assert_eq!(env.stored_hash().as_deref(), Some(first_hash.as_str()));

    // Step 3: edit a source
    env.write(
        "assets/app.less",
        "@color: #000;\nbody { color: @color; font-weight: bold; }\n",
    );
    let result = env.run(&["build"]);
    assert_success!(result);

    assert!(env.read("www/assets/app.css").contains("font-weight"));
    assert_eq!(env.npx_calls().len(), 10, "every entry is rebuilt");
    let second_hash = env.stored_hash().expect("fingerprint stored after rebuild");
    assert_ne!(first_hash, second_hash);

    assert_built!(env, "temp/assets.lock");
}

/// SCENARIO: files left in the destination by hand disappear on rebuild
#[test]
fn scenario_destination_is_recreated() {
    let env = TestEnv::builder().build();
    env.write("www/assets/stale.css", "old");

    let result = env.run(&["build"]);
    assert_success!(result);

    assert_not_built!(env, "www/assets/stale.css");
    assert_built!(env, "www/assets/app.css");
}

/// SCENARIO: adding a file to the source tree invalidates the fingerprint
#[test]
fn scenario_new_source_file_triggers_rebuild() {
    let env = TestEnv::builder().build();
    assert_success!(env.run(&["build"]));
    let before = env.stored_hash();

    env.write("assets/partials/mixins.less", ".rounded { border-radius: 2px; }\n");
    let result = env.run(&["build"]);

    assert_success!(result);
    assert_eq!(env.npx_calls().len(), 2);
    assert_ne!(env.stored_hash(), before);
}

/// SCENARIO: editing the manifest alone forces a rebuild
#[test]
fn scenario_manifest_change_triggers_rebuild() {
    let env = TestEnv::builder().build();
    assert_success!(env.run(&["build"]));

    env.write(
        "deploy-assets.toml",
        &format!("{}\"app.less\" = \"copy\"\n", BASIC_CONFIG),
    );
    let result = env.run(&["build"]);

    assert_success!(result);
    assert_eq!(env.read("www/assets/app.less"), APP_LESS);
}

/// SCENARIO: --destination overrides the configured output directory
#[test]
fn scenario_destination_flag() {
    let env = TestEnv::builder().build();

    let result = env.run(&["build", "--destination", "public/build"]);

    assert_success!(result);
    assert_built!(env, "public/build/app.css");
    assert_not_built!(env, "www/assets");
}
