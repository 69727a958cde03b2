use std::collections::HashSet;

/// Immutable redaction policy for one obfuscation run.
///
/// The two key sets are independent: a key may be value-excluded,
/// name-excluded, both, or neither. The policy is built once from the CLI
/// arguments and dropped at the end of the run.
#[derive(Debug, Clone, Default)]
pub struct RedactionPolicy {
    /// Keys whose values pass through unchanged, entire subtree included.
    exclude_value_keys:       HashSet<String>,
    /// When true, object key names are replaced by their hash unless exempted.
    obfuscate_keys:           bool,
    /// Keys exempt from key-name hashing. Only consulted when
    /// `obfuscate_keys` is true.
    exclude_object_name_keys: HashSet<String>,
}

impl RedactionPolicy {
    /// Build a policy from the raw key lists collected on the command line.
    pub fn new<I, J>(exclude_value_keys: I, obfuscate_keys: bool, exclude_object_name_keys: J) -> Self
    where
        I: IntoIterator<Item = String>,
        J: IntoIterator<Item = String>,
    {
        Self {
            exclude_value_keys: exclude_value_keys.into_iter().collect(),
            obfuscate_keys,
            exclude_object_name_keys: exclude_object_name_keys.into_iter().collect(),
        }
    }

    /// Whether the value under `key` (and its entire subtree) is protected
    /// from hashing.
    pub fn is_value_excluded(&self, key: &str) -> bool {
        self.exclude_value_keys.contains(key)
    }

    /// Whether the key name itself must be replaced by its hash.
    pub fn should_obfuscate_key(&self, key: &str) -> bool {
        self.obfuscate_keys && !self.exclude_object_name_keys.contains(key)
    }
}
