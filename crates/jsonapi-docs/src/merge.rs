//! Deep merge of JSON values.

use serde_json::Value;

/// Merge `overlay` into `target`.
///
/// Objects merge key by key, recursively. Any other pair is resolved in
/// favour of `overlay`, so arrays and scalars are replaced, not combined.
pub fn deep_merge(target: &mut Value, overlay: &Value) {
    match (target, overlay) {
        (Value::Object(target), Value::Object(overlay)) => {
            for (key, value) in overlay {
                match target.get_mut(key) {
                    Some(existing) => deep_merge(existing, value),
                    None => {
                        target.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (target, overlay) => *target = overlay.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_overlay_wins_on_conflict() {
        let mut target = json!({"a": {"b": 1, "c": 2}});
        deep_merge(&mut target, &json!({"a": {"b": 10}}));
        assert_eq!(target, json!({"a": {"b": 10, "c": 2}}));
    }

    #[test]
    fn test_non_conflicting_keys_are_kept() {
        let mut target = json!({"a": 1});
        deep_merge(&mut target, &json!({"b": {"c": true}}));
        assert_eq!(target, json!({"a": 1, "b": {"c": true}}));
    }

    #[test]
    fn test_arrays_are_replaced() {
        let mut target = json!({"required": ["title", "body"]});
        deep_merge(&mut target, &json!({"required": ["slug"]}));
        assert_eq!(target, json!({"required": ["slug"]}));
    }

    #[test]
    fn test_scalar_replaces_object_and_back() {
        let mut target = json!({"a": {"b": 1}});
        deep_merge(&mut target, &json!({"a": "flat"}));
        assert_eq!(target, json!({"a": "flat"}));

        deep_merge(&mut target, &json!({"a": {"c": 2}}));
        assert_eq!(target, json!({"a": {"c": 2}}));
    }

    #[test]
    fn test_empty_overlay_is_noop() {
        let mut target = json!({"a": [1, 2]});
        deep_merge(&mut target, &json!({}));
        assert_eq!(target, json!({"a": [1, 2]}));
    }
}
