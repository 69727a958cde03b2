/// Core trait for hash functions used in jsonveil-hash.
/// This trait abstracts the digest operation to allow easy switching between
/// different hash algorithms while maintaining a consistent interface.
///
/// Design choice: Trait-based design enables compile-time algorithm selection
/// and allows for future extensions (e.g., SHA-256, BLAKE3) without changing
/// the API. The trait is sealed to prevent external implementations that
/// might not preserve the determinism contract the transform relies upon.
pub trait HashFunction: private::Sealed {
    /// Computes the digest of the given text.
    ///
    /// The input is the canonical textual form of a JSON scalar (see
    /// [`crate::scalar::scalar_text`]); the digest is computed over its
    /// UTF-8 bytes. Same input always yields the same output.
    ///
    /// # Arguments
    /// * `text` - The text to hash
    ///
    /// # Returns
    /// A lowercase hex-encoded string representing the hash digest
    fn hash_text(text: &str) -> String;
}

// Sealing the trait to prevent external implementations
pub(crate) mod private {
    pub trait Sealed {}
}
