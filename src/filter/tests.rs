// filter-env-rs: environment variable filtering
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use serde_json::{Value, json};

use super::json::parse_value;
use super::{FilterOptions, KeyFormat, KeyTransform, Validator, filter};
use crate::error::FilterError;

fn source() -> Value {
    json!({
        "TEST_STRING_VALUE": "TestString",
        "TEST_NUMBER_VALUE": "123.45",
        "TEST_INTEGER_VALUE": 123,
        "TEST_ARRAY_VALUE": "[\"alpha\",\"bravo\",\"charlie\"]",
        "TEST_OBJECT_VALUE": "{\"alpha\":\"a\",\"bravo\":{\"charlie\":\"c\",\"delta\":\"d\"},\"echo\":\"e\"}",
        "TEST_EMPTY_VALUE": "",
        "BAD_OBJECT_VALUE": "{\"alpha\": \"a\",",
        "BAD_ARRAY_VALUE": "[\"alpha\",",
    })
}

fn starts_with_test() -> Validator {
    Validator::predicate(|key| key.starts_with("TEST"))
}

fn json_options() -> FilterOptions {
    FilterOptions::builder().with_json(true).build()
}

fn parsed_expected() -> Value {
    json!({
        "TEST_STRING_VALUE": "TestString",
        "TEST_NUMBER_VALUE": 123.45,
        "TEST_INTEGER_VALUE": 123,
        "TEST_ARRAY_VALUE": ["alpha", "bravo", "charlie"],
        "TEST_OBJECT_VALUE": { "alpha": "a", "bravo": { "charlie": "c", "delta": "d" }, "echo": "e" },
        "TEST_EMPTY_VALUE": "",
    })
}

// --- source and validator checks ---

#[test]
fn test_rejects_non_mapping_sources() {
    let validator = starts_with_test();
    for value in [json!(true), json!(false), json!(""), json!("test"), json!(123), Value::Null] {
        let err = filter(&value, &validator, &FilterOptions::default()).unwrap_err();
        assert!(
            matches!(err, FilterError::InvalidEnvironment),
            "{value} should be rejected, got {err:?}"
        );
        assert_eq!(err.to_string(), "Invalid environment");
    }
}

#[test]
fn test_rejects_unusable_patterns() {
    for pattern in ["", "   ", "(unclosed", "//", "/abc/q", "/abc/ii", "[z-a]"] {
        let err = Validator::pattern(pattern).unwrap_err();
        assert!(
            matches!(err, FilterError::InvalidValidator),
            "{pattern:?} should be rejected"
        );
        assert_eq!(err.to_string(), "Invalid validation function");
    }
}

#[test]
fn test_accepts_empty_mapping() {
    let filtered = filter(&json!({}), &starts_with_test(), &json_options()).unwrap();
    assert!(filtered.is_empty());
}

// --- selection ---

#[test]
fn test_predicate_selects_keys() {
    let filtered = filter(&source(), &starts_with_test(), &FilterOptions::default()).unwrap();
    let expected = json!({
        "TEST_STRING_VALUE": "TestString",
        "TEST_NUMBER_VALUE": "123.45",
        "TEST_INTEGER_VALUE": 123,
        "TEST_ARRAY_VALUE": "[\"alpha\",\"bravo\",\"charlie\"]",
        "TEST_OBJECT_VALUE": "{\"alpha\":\"a\",\"bravo\":{\"charlie\":\"c\",\"delta\":\"d\"},\"echo\":\"e\"}",
        "TEST_EMPTY_VALUE": "",
    });
    assert_eq!(Value::from(filtered), expected);
}

#[test]
fn test_pattern_matches_predicate() {
    let by_predicate = filter(&source(), &starts_with_test(), &FilterOptions::default()).unwrap();
    let by_pattern = filter(
        &source(),
        &Validator::pattern("/^test_/i").unwrap(),
        &FilterOptions::default(),
    )
    .unwrap();

    assert_eq!(by_pattern, by_predicate);
}

#[test]
fn test_simple_prefix_selection() {
    let source = json!({ "A_FOO": "x", "B_BAR": "y" });
    let expected = json!({ "A_FOO": "x" });

    let by_predicate = filter(
        &source,
        &Validator::predicate(|key| key.starts_with("A_")),
        &FilterOptions::default(),
    )
    .unwrap();
    let by_pattern = filter(
        &source,
        &Validator::pattern("/^a_/i").unwrap(),
        &FilterOptions::default(),
    )
    .unwrap();

    assert_eq!(Value::from(by_predicate), expected);
    assert_eq!(Value::from(by_pattern), expected);
}

#[test]
fn test_result_follows_source_order() {
    let source = json!({ "Z_LAST": "1", "A_FIRST": "2", "M_MID": "3" });
    let filtered = filter(
        &source,
        &Validator::pattern("_").unwrap(),
        &FilterOptions::default(),
    )
    .unwrap();

    let keys: Vec<_> = filtered.keys().collect();
    assert_eq!(keys, ["Z_LAST", "A_FIRST", "M_MID"]);
}

#[test]
fn test_array_source_uses_indices() {
    let source = json!(["zero", "one", "two"]);
    let filtered = filter(
        &source,
        &Validator::predicate(|key| key != "1"),
        &FilterOptions::default(),
    )
    .unwrap();

    assert_eq!(Value::from(filtered), json!({ "0": "zero", "2": "two" }));
}

#[test]
fn test_source_is_not_modified() {
    let original = source();
    let copy = original.clone();
    let _ = filter(&original, &starts_with_test(), &json_options()).unwrap();
    assert_eq!(original, copy);
}

// --- json ---

#[test]
fn test_json_option_parses_values() {
    let filtered = filter(&source(), &starts_with_test(), &json_options()).unwrap();
    assert_eq!(Value::from(filtered), parsed_expected());
}

#[test]
fn test_malformed_structures_abort() {
    for pattern in ["^BAD_OBJECT_", "^BAD_ARRAY_"] {
        let validator = Validator::pattern(pattern).unwrap();
        let err = filter(&source(), &validator, &json_options()).unwrap_err();
        match err {
            FilterError::Syntax(e) => assert!(e.is_eof(), "{pattern}: {e}"),
            other => panic!("{pattern}: expected a syntax error, got {other:?}"),
        }
    }
}

#[test]
fn test_malformed_structure_without_json_is_kept() {
    let validator = Validator::pattern("^BAD_").unwrap();
    let filtered = filter(&source(), &validator, &FilterOptions::default()).unwrap();
    assert_eq!(filtered.len(), 2);
}

#[test]
fn test_parse_value_rules() {
    assert_eq!(parse_value(&json!("{\"a\":1}")).unwrap(), Some(json!({ "a": 1 })));
    assert_eq!(parse_value(&json!("true")).unwrap(), Some(json!(true)));
    assert_eq!(parse_value(&json!("null")).unwrap(), Some(Value::Null));
    assert_eq!(parse_value(&json!("\"quoted\"")).unwrap(), Some(json!("quoted")));
    assert_eq!(
        parse_value(&json!("not json but plain text")).unwrap(),
        Some(json!("not json but plain text"))
    );
    assert_eq!(parse_value(&json!("")).unwrap(), Some(json!("")));
    assert_eq!(parse_value(&json!("   ")).unwrap(), Some(json!("   ")));
    assert_eq!(parse_value(&json!(42)).unwrap(), Some(json!(42)));

    assert_eq!(parse_value(&Value::Null).unwrap(), None);
    assert_eq!(parse_value(&json!(false)).unwrap(), None);
    assert_eq!(parse_value(&json!(["a"])).unwrap(), None);
    assert_eq!(parse_value(&json!({ "a": 1 })).unwrap(), None);

    assert!(parse_value(&json!("  { incomplete")).is_err());
    assert!(parse_value(&json!("[ partial")).is_err());
}

#[test]
fn test_parsed_object_reparses_identically() {
    let source = json!({ "CFG": "{\"a\":1}" });
    let filtered = filter(&source, &Validator::pattern("CFG").unwrap(), &json_options()).unwrap();
    let value = filtered.get("CFG").unwrap();

    assert_eq!(value, &json!({ "a": 1 }));
    let reparsed = parse_value(&Value::String(value.to_string())).unwrap();
    assert_eq!(reparsed.as_ref(), Some(value));
}

#[test]
fn test_values_without_json_form_are_omitted() {
    let source = json!({ "K_NULL": null, "K_BOOL": true, "K_TEXT": "text" });
    let filtered = filter(&source, &Validator::pattern("^K_").unwrap(), &json_options()).unwrap();

    assert!(!filtered.contains_key("K_NULL"));
    assert!(!filtered.contains_key("K_BOOL"));
    assert_eq!(filtered.get("K_TEXT"), Some(&json!("text")));
}

#[test]
fn test_deeply_nested_values_parse() {
    let deep = format!("{}{}", "[".repeat(200), "]".repeat(200));
    let source = json!({ "A_DEEP": deep });
    let filtered = filter(&source, &Validator::pattern("^A_").unwrap(), &json_options()).unwrap();

    let mut depth = 0;
    let mut value = filtered.get("A_DEEP").unwrap();
    while let Some(inner) = value.as_array() {
        depth += 1;
        match inner.first() {
            Some(next) => value = next,
            None => break,
        }
    }
    assert_eq!(depth, 200);

    let unclosed = json!({ "A_DEEP": "[".repeat(200) });
    let result = filter(&unclosed, &Validator::pattern("^A_").unwrap(), &json_options());
    assert!(matches!(result, Err(FilterError::Syntax(ref e)) if e.is_eof()));
}

#[test]
fn test_out_of_range_numbers_stay_raw() {
    assert_eq!(parse_value(&json!("1e400")).unwrap(), Some(json!("1e400")));
    assert_eq!(parse_value(&json!("1e3")).unwrap(), Some(json!(1000.0)));
}

// --- formatting ---

#[test]
fn test_format_renames_keys() {
    let format = KeyFormat::transforms([
        KeyTransform::StripPrefix("TEST_".to_string()),
        KeyTransform::CamelCase,
    ]);
    let options = FilterOptions::builder()
        .with_json(true)
        .with_format(format)
        .build();
    let filtered = filter(&source(), &starts_with_test(), &options).unwrap();

    let expected = json!({
        "stringValue": "TestString",
        "numberValue": 123.45,
        "integerValue": 123,
        "arrayValue": ["alpha", "bravo", "charlie"],
        "objectValue": { "alpha": "a", "bravo": { "charlie": "c", "delta": "d" }, "echo": "e" },
        "emptyValue": "",
    });
    assert_eq!(Value::from(filtered), expected);
}

#[test]
fn test_first_formatted_key_wins() {
    let options = FilterOptions::builder()
        .with_json(true)
        .with_format(KeyFormat::custom(|key| key.replacen("INTEGER", "NUMBER", 1)))
        .build();
    let filtered = filter(&source(), &starts_with_test(), &options).unwrap();

    assert_eq!(filtered.get("TEST_NUMBER_VALUE"), Some(&json!(123.45)));
    assert!(!filtered.contains_key("TEST_INTEGER_VALUE"));
    assert_eq!(filtered.len(), 5);
}

#[test]
fn test_colliding_names_keep_one_entry() {
    let source = json!({ "TEST_A": "1", "TEST_B": "2" });
    let options = FilterOptions::builder()
        .with_format(KeyFormat::custom(|_| "same".to_string()))
        .build();
    let filtered = filter(&source, &starts_with_test(), &options).unwrap();

    assert_eq!(Value::from(filtered), json!({ "same": "1" }));
}

#[test]
fn test_empty_formatted_name_is_skipped() {
    let source = json!({ "APP_": "gone", "APP_NAME": "kept" });
    let options = FilterOptions::builder()
        .with_format(KeyFormat::transforms([KeyTransform::StripPrefix("APP_".to_string())]))
        .build();
    let filtered = filter(&source, &Validator::pattern("^APP_").unwrap(), &options).unwrap();

    assert_eq!(Value::from(filtered), json!({ "NAME": "kept" }));
}

#[test]
fn test_key_transforms() {
    let cases = [
        ("camel_case", "APP_DATABASE_URL", "appDatabaseUrl"),
        ("camel_case", "alreadyCamel", "alreadyCamel"),
        ("camel_case", "__LEADING__", "leading"),
        ("lowercase", "APP_NAME", "app_name"),
        ("uppercase", "app_name", "APP_NAME"),
        ("strip_prefix:APP_", "APP_NAME", "NAME"),
        ("strip_prefix:APP_", "OTHER", "OTHER"),
        ("strip_suffix:_URL", "DB_URL", "DB"),
        ("replace:INTEGER=NUMBER", "INTEGER_INTEGER", "NUMBER_INTEGER"),
    ];
    for (spec, key, expected) in cases {
        let transform: KeyTransform = spec.parse().unwrap();
        assert_eq!(transform.apply(key), expected, "{spec} on {key}");
        assert_eq!(transform.to_string().parse::<KeyTransform>().unwrap(), transform);
    }
}

#[test]
fn test_unknown_format_specs_fall_back_to_identity() {
    assert!(KeyFormat::from_specs(["camel_case", "shout"]).is_identity());
    assert!(KeyFormat::from_specs(["replace:=x"]).is_identity());
    assert!(KeyFormat::from_specs(Vec::<String>::new()).is_identity());
    assert!(!KeyFormat::from_specs(["camel_case"]).is_identity());
}

// --- freeze ---

#[test]
fn test_freeze_locks_result_and_objects() {
    let options = FilterOptions::builder()
        .with_json(true)
        .with_freeze(true)
        .build();
    let mut filtered = filter(&source(), &starts_with_test(), &options).unwrap();

    assert_eq!(Value::from(filtered.clone()), parsed_expected());
    assert!(filtered.is_frozen());
    assert!(filtered.is_value_frozen("TEST_OBJECT_VALUE"));
    assert!(!filtered.is_value_frozen("TEST_ARRAY_VALUE"));

    assert!(matches!(
        filtered.insert("NEW", json!(1)),
        Err(FilterError::Frozen { .. })
    ));
    assert!(matches!(
        filtered.remove("TEST_STRING_VALUE"),
        Err(FilterError::Frozen { .. })
    ));
    assert!(matches!(
        filtered.value_mut("TEST_OBJECT_VALUE"),
        Err(FilterError::Frozen { .. })
    ));
    assert!(matches!(
        filtered.value_mut("TEST_STRING_VALUE"),
        Err(FilterError::Frozen { .. })
    ));

    // shallow: arrays inside a frozen result stay mutable
    if let Some(Value::Array(items)) = filtered.value_mut("TEST_ARRAY_VALUE").unwrap() {
        items.push(json!("delta"));
    }
    assert_eq!(filtered.get("TEST_ARRAY_VALUE").unwrap().as_array().unwrap().len(), 4);
    assert_eq!(filtered.len(), 6);
}

#[test]
fn test_unfrozen_result_is_mutable() {
    let mut filtered = filter(&source(), &starts_with_test(), &json_options()).unwrap();

    assert!(!filtered.is_frozen());
    assert!(!filtered.is_value_frozen("TEST_OBJECT_VALUE"));
    assert_eq!(filtered.insert("EXTRA", json!(1)).unwrap(), None);
    assert_eq!(filtered.remove("EXTRA").unwrap(), Some(json!(1)));

    if let Some(Value::Object(map)) = filtered.value_mut("TEST_OBJECT_VALUE").unwrap() {
        map.insert("foxtrot".to_string(), json!("f"));
    }
    assert_eq!(filtered.get("TEST_OBJECT_VALUE").unwrap()["foxtrot"], json!("f"));
}

#[test]
fn test_validator_debug_shows_pattern() {
    let validator = Validator::pattern("^APP_").unwrap();
    insta::assert_snapshot!(format!("{validator:?}"), @r#"Validator("/^APP_/")"#);
    insta::assert_snapshot!(format!("{:?}", starts_with_test()), @r#"Validator("<predicate>")"#);
}

#[test]
fn test_literal_flags() {
    assert!(Validator::pattern("/^a.b$/s").unwrap().test("a\nb"));
    assert!(!Validator::pattern("/^a.b$/").unwrap().test("a\nb"));
    assert!(Validator::pattern("/^APP_ NAME$/x").unwrap().test("APP_NAME"));
    assert!(Validator::pattern("/^app/gi").unwrap().test("APP_PORT"));
    assert!(Validator::pattern("^/opt/").unwrap().test("/opt/bin"));
}
