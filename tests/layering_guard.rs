//! Layering guardrails for the pure core crate.
//!
//! `snippets_core` must stay dependency-free (no IO, no logging, no third-party crates). This test scans
//! its `Cargo.toml` and fails if a `[dependencies]` table lists anything.

#[test]
fn core_crate_has_no_dependencies() {
    let manifest = include_str!("../crates/snippets_core/Cargo.toml");
    let mut in_dependencies = false;

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        panic!("`snippets_core` must not declare dependencies, found: {line}");
    }
}

#[test]
fn root_crate_depends_on_core() {
    let manifest = include_str!("../Cargo.toml");
    assert!(
        manifest
            .lines()
            .any(|line| line.trim_start().starts_with("snippets_core = { path = \"crates/snippets_core\" }")),
        "root crate must depend on snippets_core by path"
    );
}
