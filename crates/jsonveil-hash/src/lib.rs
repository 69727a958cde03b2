//! # jsonveil-hash
//!
//! Deterministic scalar fingerprinting for the jsonveil obfuscation tool.
//! This crate provides the hashing primitive and the canonical textual
//! representation of JSON scalars that is fed into it.
//!
//! ## Design Principles
//!
//! - **Modular Architecture**: The hash trait is separated from its implementation, allowing easy
//!   algorithm switching and testing.
//! - **Determinism First**: No salt, no per-run randomness. The same input text always produces
//!   the same digest, which is what allows re-identification by hash comparison across documents.
//! - **Sealed Trait**: Prevents external implementations that might not preserve the determinism
//!   contract the transform relies upon.
//!
//! ## Security
//!
//! The digest is 128-bit MD5 rendered as 32 lowercase hex characters. MD5 is
//! used purely as a fast deterministic fingerprint; it is **not** a security
//! primitive. Obfuscated documents are not encrypted, and low-entropy values
//! remain trivially guessable by hashing candidate inputs.
//!
//! ## Usage
//!
//! ```rust
//! use jsonveil_hash::{hash_scalar, hash_text};
//!
//! assert_eq!(hash_text("25"), "8e296a067a37563370ded05f5a3bf3ec");
//!
//! let scalar = serde_json::json!(25);
//! assert_eq!(
//!     hash_scalar(&scalar).as_deref(),
//!     Some("8e296a067a37563370ded05f5a3bf3ec")
//! );
//! ```

pub mod hash;
pub mod hash_trait;
pub mod scalar;

pub use hash::Md5Hasher;
pub use hash_trait::HashFunction;
pub use scalar::scalar_text;
use serde_json::Value;

/// Computes the digest of the given text using the default algorithm.
pub fn hash_text(text: &str) -> String {
    Md5Hasher::hash_text(text)
}

/// Computes the digest of a JSON scalar using the default algorithm.
///
/// Returns `None` when the value is not a hashable scalar (null, arrays and
/// objects have no textual form here; containers are walked by the caller).
pub fn hash_scalar(value: &Value) -> Option<String> {
    scalar_text(value).map(|text| Md5Hasher::hash_text(&text))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_hash_text_determinism() {
        let digest = hash_text("hello");
        assert_eq!(digest.len(), 32);
        assert_eq!(digest, hash_text("hello"));
    }

    #[test]
    fn test_hash_scalar_covers_all_scalar_kinds() {
        assert!(hash_scalar(&json!("Alice")).is_some());
        assert!(hash_scalar(&json!(42)).is_some());
        assert!(hash_scalar(&json!(2.5)).is_some());
        assert!(hash_scalar(&json!(true)).is_some());
    }

    #[test]
    fn test_hash_scalar_rejects_non_scalars() {
        assert_eq!(hash_scalar(&Value::Null), None);
        assert_eq!(hash_scalar(&json!([1, 2])), None);
        assert_eq!(hash_scalar(&json!({"a": 1})), None);
    }

    #[test]
    fn test_hash_scalar_matches_text_form() {
        assert_eq!(hash_scalar(&json!(25)), Some(hash_text("25")));
        assert_eq!(hash_scalar(&json!("25")), Some(hash_text("25")));
        assert_eq!(hash_scalar(&json!(true)), Some(hash_text("true")));
    }
}
