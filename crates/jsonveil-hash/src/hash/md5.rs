use md5::{Digest, Md5};

use crate::hash_trait::HashFunction;

/// MD5 hash implementation.
/// Produces a 128-bit digest rendered as a 32-character lowercase hex string.
///
/// Design choice: MD5 is the fingerprint the obfuscation format is defined
/// around. It is fast, universally available for cross-checking, and its
/// known cryptographic weaknesses are irrelevant here because the digest is
/// an obfuscation marker, not an integrity or authentication primitive.
pub struct Md5Hasher;

impl HashFunction for Md5Hasher {
    fn hash_text(text: &str) -> String {
        let mut hasher = Md5::new();
        hasher.update(text.as_bytes());
        hex::encode(hasher.finalize())
    }
}

impl crate::hash_trait::private::Sealed for Md5Hasher {}
