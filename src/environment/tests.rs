// filter-env-rs: environment variable filtering
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use serde_json::{Value, json};

use super::{filter, filter_environment, filter_environment_from};
use crate::core::env::{Env, current_env};
use crate::error::FilterError;
use crate::filter::{FilterOptions, KeyFormat, KeyTransform, Validator};

fn fixture() -> Env {
    Env::from_pairs([
        ("TEST_STRING_VALUE", "TestString"),
        ("TEST_NUMBER_VALUE", "123.45"),
        ("TEST_INTEGER_VALUE", "123"),
        ("TEST_OBJECT_VALUE", "{\"alpha\":\"a\"}"),
        ("BAD_OBJECT_VALUE", "{\"alpha\": \"a\","),
        ("HOME", "/home/test"),
    ])
}

#[test]
fn test_filters_injected_snapshot() {
    let filtered = filter_environment_from(
        &fixture(),
        &Validator::pattern("/^test_/i").unwrap(),
        &FilterOptions::default(),
    )
    .unwrap();

    assert_eq!(
        Value::from(filtered),
        json!({
            "TEST_STRING_VALUE": "TestString",
            "TEST_NUMBER_VALUE": "123.45",
            "TEST_INTEGER_VALUE": "123",
            "TEST_OBJECT_VALUE": "{\"alpha\":\"a\"}",
        })
    );
}

#[test]
fn test_injected_snapshot_with_all_options() {
    let options = FilterOptions::builder()
        .with_json(true)
        .with_freeze(true)
        .with_format(KeyFormat::transforms([
            KeyTransform::StripPrefix("TEST_".to_string()),
            KeyTransform::CamelCase,
        ]))
        .build();
    let filtered =
        filter_environment_from(&fixture(), &Validator::pattern("^TEST_").unwrap(), &options)
            .unwrap();

    assert!(filtered.is_frozen());
    assert!(filtered.is_value_frozen("objectValue"));
    assert_eq!(filtered.get("integerValue"), Some(&json!(123)));
    assert_eq!(filtered.get("numberValue"), Some(&json!(123.45)));
}

#[test]
fn test_malformed_variable_aborts() {
    let options = FilterOptions::builder().with_json(true).build();
    let err = filter_environment_from(&fixture(), &Validator::pattern("^BAD_").unwrap(), &options)
        .unwrap_err();
    assert!(matches!(err, FilterError::Syntax(_)));
}

#[test]
fn test_live_environment_matches_snapshot() {
    let validator = Validator::predicate(|key| key == "PATH" || key == "Path");
    let live = filter_environment(&validator, &FilterOptions::default()).unwrap();
    let expected = current_env()
        .iter()
        .find(|(k, _)| *k == "PATH" || *k == "Path")
        .map(|(_, v)| json!(v));

    assert_eq!(live.iter().next().map(|(_, v)| v.clone()), expected);
}

#[test]
fn test_reexported_filter_handles_arbitrary_mappings() {
    let source = json!({ "A_FOO": "x", "B_BAR": "y" });
    let validator = Validator::pattern("^A_").unwrap();
    let options = FilterOptions::default();

    let reexported = filter(&source, &validator, &options).unwrap();
    let core = crate::filter::filter(&source, &validator, &options).unwrap();

    assert_eq!(reexported, core);
    assert!(matches!(
        filter(&json!("x"), &validator, &options),
        Err(FilterError::InvalidEnvironment)
    ));
}
