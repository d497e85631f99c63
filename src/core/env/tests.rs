// filter-env-rs: environment variable filtering
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the environment module.

use super::{Env, ReadEnv, SystemEnv, current_env};

#[test]
fn test_env_basic_operations() {
    let mut env = Env::new();
    env.set("FOO", "bar");

    assert_eq!(env.get("FOO"), Some("bar"));
    assert_eq!(env.get("foo"), None, "lookups are case-sensitive");
    assert_eq!(env.get("NOTEXIST"), None);
    assert_eq!(env.len(), 1);
}

#[test]
fn test_env_keeps_insertion_order() {
    let mut env = Env::from_pairs([("ZETA", "1"), ("ALPHA", "2"), ("MID", "3")]);
    env.set("ALPHA", "replaced");

    let keys: Vec<_> = env.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["ZETA", "ALPHA", "MID"]);
    assert_eq!(env.get("ALPHA"), Some("replaced"));
}

#[test]
fn test_env_remove() {
    let mut env = Env::from_pairs([("A", "1"), ("B", "2")]);
    env.remove("A").remove("MISSING");

    assert_eq!(env.get("A"), None);
    assert_eq!(env.len(), 1);
    assert!(!env.is_empty());
}

#[test]
fn test_env_copy_on_write() {
    let mut env1 = Env::new();
    env1.set("KEY1", "value1");

    let mut env2 = env1.clone();
    assert!(env1.is_shared());

    env2.set("KEY2", "value2");

    assert!(!env1.is_shared());
    assert_eq!(env1.get("KEY2"), None);
    assert_eq!(env2.get("KEY1"), Some("value1"));
    assert_eq!(env2.get("KEY2"), Some("value2"));
}

#[test]
fn test_env_to_value() {
    let env: Env = [("B", "2"), ("A", "1")].into_iter().collect();
    let value = env.to_value();

    insta::assert_snapshot!(value.to_string(), @r#"{"B":"2","A":"1"}"#);
}

#[test]
fn test_current_env() {
    // PATH is present on every platform CI runs on
    let env = current_env();
    assert!(
        env.get("PATH").is_some() || env.get("Path").is_some(),
        "PATH should exist in current environment"
    );
}

#[test]
fn test_snapshot_sources() {
    let fixed = Env::from_pairs([("ONLY", "here")]);
    assert_eq!(fixed.snapshot(), fixed);

    let live = SystemEnv.snapshot();
    assert!(!live.is_empty());
}
