//! Runs the shared JSON conformance suite against this implementation.

#![cfg(feature = "serde")]

use tidbytes::suite::{load, run_suite};

static BASIC: &str = include_str!("suite/basic.json");

#[test]
fn basic_suite_passes() {
    let suite = load(BASIC).expect("suite JSON must parse");
    assert_eq!(suite.version, "1.0.0");

    let failures = run_suite(&suite);
    assert!(
        failures.is_empty(),
        "{} conformance failures:\n{}",
        failures.len(),
        failures.join("\n")
    );
}
