use serde_json::{Map, Value};

/// Computes the subset of `updated` worth submitting: fields that are on the
/// allow-list (when one is given), are not empty strings, and differ from the
/// corresponding field in `original`.
///
/// Passing `None` for `original` treats every baseline value as absent, so any
/// non-empty field counts as changed. Never fails and never mutates its
/// arguments.
pub fn changed_fields(
    original: Option<&Map<String, Value>>,
    updated: &Map<String, Value>,
    allowed_fields: Option<&[&str]>,
) -> Map<String, Value> {
    let mut changes = Map::new();

    for (key, value) in updated {
        if let Some(allowed) = allowed_fields {
            if !allowed.contains(&key.as_str()) {
                continue;
            }
        }
        // Blank inputs are "nothing entered", not an update to empty.
        if matches!(value, Value::String(s) if s.is_empty()) {
            continue;
        }
        if original.and_then(|baseline| baseline.get(key)) == Some(value) {
            continue;
        }
        changes.insert(key.clone(), value.clone());
    }

    changes
}

#[cfg(test)]
mod changed_fields_tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> Map<String, Value> {
        value
            .as_object()
            .expect("test fixture must be a JSON object")
            .clone()
    }

    #[test]
    fn test_reports_only_values_that_differ() {
        let original = obj(json!({"name": "A", "age": 30}));
        let updated = obj(json!({"name": "B", "age": 30}));

        let result = changed_fields(Some(&original), &updated, None);

        assert_eq!(result, obj(json!({"name": "B"})));
    }

    #[test]
    fn test_excludes_empty_strings() {
        let original = obj(json!({"name": "A"}));
        let updated = obj(json!({"name": "", "age": 5}));

        let result = changed_fields(Some(&original), &updated, Some(&["name", "age"]));

        assert_eq!(result, obj(json!({"age": 5})));
    }

    #[test]
    fn test_missing_original_treats_baseline_as_absent() {
        let updated = obj(json!({"a": 1, "b": 2}));

        let result = changed_fields(None, &updated, Some(&["a"]));

        assert_eq!(result, obj(json!({"a": 1})));
    }

    #[test]
    fn test_keys_absent_from_original_are_included() {
        let original = obj(json!({"x": 1}));
        let updated = obj(json!({"x": 1, "y": 2}));

        let result = changed_fields(Some(&original), &updated, None);

        assert_eq!(result, obj(json!({"y": 2})));
    }

    #[test]
    fn test_allow_list_restricts_result_to_listed_keys() {
        let original = obj(json!({"name": "A", "phone": "1"}));
        let updated = obj(json!({"name": "B", "phone": "2", "extra": true}));

        let result = changed_fields(Some(&original), &updated, Some(&["name"]));

        assert_eq!(result, obj(json!({"name": "B"})));
    }

    #[test]
    fn test_empty_updated_yields_empty_result() {
        let original = obj(json!({"name": "A"}));
        let updated = Map::new();

        assert!(changed_fields(Some(&original), &updated, None).is_empty());
        assert!(changed_fields(None, &updated, Some(&["name"])).is_empty());
    }

    #[test]
    fn test_identical_records_yield_empty_result() {
        let record = obj(json!({"name": "A", "age": 30, "active": true}));

        assert!(changed_fields(Some(&record), &record, None).is_empty());
    }

    #[test]
    fn test_type_mismatch_counts_as_change() {
        let original = obj(json!({"vehicle_year": "1998"}));
        let updated = obj(json!({"vehicle_year": 1998}));

        let result = changed_fields(Some(&original), &updated, None);

        assert_eq!(result, obj(json!({"vehicle_year": 1998})));
    }

    #[test]
    fn test_empty_string_rule_only_applies_to_strings() {
        let original = obj(json!({"count": 1, "flag": true}));
        let updated = obj(json!({"count": 0, "flag": null}));

        let result = changed_fields(Some(&original), &updated, None);

        assert_eq!(result, obj(json!({"count": 0, "flag": null})));
    }

    #[test]
    fn test_diff_is_idempotent() {
        let original = obj(json!({"name": "A", "age": 30, "city": "Lanús"}));
        let updated = obj(json!({"name": "B", "age": 31, "city": "Lanús"}));

        let once = changed_fields(Some(&original), &updated, None);
        let twice = changed_fields(Some(&original), &once, None);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_result_values_always_come_from_updated() {
        let original = obj(json!({"name": "A", "email": "a@x.com", "age": 30}));
        let updated = obj(json!({"name": "B", "email": "", "age": 31, "new": "z"}));

        let result = changed_fields(Some(&original), &updated, None);

        for (key, value) in &result {
            assert_eq!(Some(value), updated.get(key));
            assert_ne!(value, &json!(""));
            assert_ne!(Some(value), original.get(key));
        }
        assert_eq!(result.len(), 3);
    }
}
