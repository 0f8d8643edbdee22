use agal_tokens::t_cli::get_feature_flags;
use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

#[test]
fn test_version_feature_flags() {
    let mut cmd = Command::cargo_bin("agal-tokens").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        // Check that the output starts with "agal-tokens " and contains a JSON array.
        .stdout(contains("agal-tokens "))
        .stdout(contains("["))
        .stdout(contains("]"))
        .stdout(if cfg!(feature = "color") {
            contains("\"color\"").and(contains("\"!color\"").not()).boxed()
        } else {
            contains("\"!color\"").boxed()
        });
}

#[cfg(feature = "color")]
#[test]
fn test_feature_flags_color_enabled() {
    let flags = get_feature_flags();
    assert!(
        flags.contains(&"color") && !flags.contains(&"!color"),
        "Expected 'color' in feature flags when color is enabled, got {:?}",
        flags
    );
}

#[cfg(not(feature = "color"))]
#[test]
fn test_feature_flags_color_disabled() {
    let flags = get_feature_flags();
    assert!(
        flags.contains(&"!color") && !flags.contains(&"color"),
        "Expected '!color' in feature flags when color is disabled, got {:?}",
        flags
    );
}
