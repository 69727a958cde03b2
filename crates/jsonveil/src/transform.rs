use jsonveil_hash::{hash_scalar, hash_text};
use serde_json::{Map, Value};

use crate::policy::RedactionPolicy;

/// Recursively obfuscate a JSON value tree according to `policy`.
///
/// Pure and total: it never fails, never mutates its input, and produces a
/// new tree with the same container shape (object key count and insertion
/// order, array lengths) as the input.
///
/// At every node:
/// - **Objects**: each key is hashed when the policy says so, each value is
///   either passed through verbatim (value-excluded keys protect their whole
///   subtree — no recursion) or transformed. If hashing two distinct keys
///   ever collided, the later pair would overwrite the earlier one; that is
///   accepted behavior, not guarded against.
/// - **Arrays**: every element is transformed. Exclusion only applies to
///   named object keys, never to array elements.
/// - **Scalars** (string, number, boolean): replaced by the hash of their
///   canonical text.
/// - **Null**: passed through unchanged.
pub fn transform(value: &Value, policy: &RedactionPolicy) -> Value {
    match *value {
        Value::Object(ref entries) => {
            let mut output = Map::with_capacity(entries.len());
            for (key, entry) in entries {
                let output_key = if policy.should_obfuscate_key(key) {
                    hash_text(key)
                }
                else {
                    key.clone()
                };
                let output_value = if policy.is_value_excluded(key) {
                    entry.clone()
                }
                else {
                    transform(entry, policy)
                };
                output.insert(output_key, output_value);
            }
            Value::Object(output)
        },
        Value::Array(ref elements) => Value::Array(
            elements
                .iter()
                .map(|element| transform(element, policy))
                .collect(),
        ),
        Value::String(_) | Value::Number(_) | Value::Bool(_) => {
            // hash_scalar is Some for exactly these three variants.
            hash_scalar(value).map_or_else(|| value.clone(), Value::String)
        },
        Value::Null => Value::Null,
    }
}
