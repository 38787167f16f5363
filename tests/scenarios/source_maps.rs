//! Scenario: Source Maps Point At The Developer's Checkout
//!
//! Journey: Assets are built inside a VM or container, but the developer
//! opens the maps in an editor on the host.
//!
//! Success Criteria:
//! - Map sources are `file:///` URIs under the configured local directory
//! - Without a local directory they point at the build host's real path
//! - Switching the local directory forces a rebuild

use crate::common::*;
use crate::{assert_output_contains, assert_output_not_contains, assert_success};

const LOCAL_DIR: &str = "/home/dev/site/assets";

fn map_sources(env: &TestEnv, map: &str) -> Vec<String> {
    let value: serde_json::Value = serde_json::from_str(&env.read(map)).unwrap();
    value["sources"]
        .as_array()
        .expect("sources array")
        .iter()
        .map(|s| s.as_str().unwrap_or_default().to_string())
        .collect()
}

/// SCENARIO: every map type is rewritten to the local checkout
#[test]
fn scenario_maps_use_local_source_dir() {
    let env = TestEnv::builder().full_project().build();

    let result = env.run_with_env(
        &["build"],
        &[("DEPLOY_ASSETS_LOCAL_SOURCE_DIR", "/home/dev/site/assets/")],
    );
    assert_success!(result);

    assert_eq!(
        map_sources(&env, "www/assets/app.css.map"),
        vec![format!("file://{}/app.less", LOCAL_DIR)]
    );
    assert_eq!(
        map_sources(&env, "www/assets/css/theme.css.map"),
        vec![format!("file://{}/theme.scss", LOCAL_DIR)]
    );
    assert_eq!(
        map_sources(&env, "www/assets/bundle.js.map"),
        vec![format!("file://{}/entry.js", LOCAL_DIR)]
    );
    assert_eq!(
        map_sources(&env, "www/assets/app.js.map"),
        vec![
            format!("file://{}/lib.js", LOCAL_DIR),
            format!("file://{}/main.js", LOCAL_DIR),
        ]
    );
}

/// SCENARIO: no local directory configured
#[test]
fn scenario_maps_default_to_real_source_path() {
    let env = TestEnv::builder().build();

    assert_success!(env.run(&["build"]));

    let real = env.project_path("assets").canonicalize().unwrap();
    let expected = format!(
        "file:///{}/app.less",
        real.display().to_string().trim_start_matches('/')
    );
    assert_eq!(map_sources(&env, "www/assets/app.css.map"), vec![expected]);
}

/// SCENARIO: the local directory is part of the fingerprint
#[test]
fn scenario_local_dir_change_rebuilds() {
    let env = TestEnv::builder().build();
    let first = [("DEPLOY_ASSETS_LOCAL_SOURCE_DIR", "/home/a/assets")];
    let second = [("DEPLOY_ASSETS_LOCAL_SOURCE_DIR", "/home/b/assets")];

    assert_success!(env.run_with_env(&["build"], &first));

    let result = env.run_with_env(&["build"], &first);
    assert_success!(result);
    assert_output_contains!(result, "up to date");

    let result = env.run_with_env(&["build"], &second);
    assert_success!(result);
    assert_output_not_contains!(result, "up to date");
    assert_eq!(
        map_sources(&env, "www/assets/app.css.map"),
        vec!["file:///home/b/assets/app.less".to_string()]
    );
}
