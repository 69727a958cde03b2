use serde_json::Value;

/// Canonical textual form of a JSON scalar prior to hashing.
///
/// Strings contribute their exact contents with no JSON quoting, numbers use
/// `serde_json::Number`'s `Display` output (integers verbatim, floats as the
/// shortest round-trippable decimal), and booleans render lowercase as
/// `true`/`false`. Null and containers have no textual form and yield `None`.
///
/// This is the stringification the whole tool is keyed on: digests are only
/// comparable between documents processed with the same canonical form.
///
/// # Arguments
/// * `value` - The JSON value to stringify
///
/// # Returns
/// The canonical text for scalars, or `None` for null, arrays and objects.
pub fn scalar_text(value: &Value) -> Option<String> {
    match *value {
        Value::String(ref text) => Some(text.clone()),
        Value::Number(ref number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
