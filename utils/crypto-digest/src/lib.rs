#![cfg_attr(not(feature = "std"), no_std)]

pub use generic_array;

use generic_array::{ArrayLength, GenericArray};
use generic_array::typenum::Unsigned;

/// The Digest trait specifies an interface common to digest functions.
///
/// `finalize` consumes the instance, so a finished computation can never be
/// fed more input by accident. Use `finalize_reset` to keep the instance
/// around for the next message.
pub trait Digest: Default {
    /// Output size in bytes.
    type N: ArrayLength<u8>;

    /// Create new digest instance
    fn new() -> Self {
        Default::default()
    }

    /// Digest input data. This method can be called repeatedly
    /// for use with streaming messages.
    fn update(&mut self, input: &[u8]);

    /// Convenience function that digests a string.
    fn update_str(&mut self, input: &str) {
        self.update(input.as_bytes());
    }

    /// Retrieve the digest result. This method consumes digest instance
    fn finalize(self) -> GenericArray<u8, Self::N>;

    /// Put the instance back into its freshly constructed state.
    fn reset(&mut self);

    /// Retrieve the digest result and reset the instance for the next message.
    fn finalize_reset(&mut self) -> GenericArray<u8, Self::N> {
        core::mem::take(self).finalize()
    }

    /// One-shot digest of `data`.
    fn digest(data: &[u8]) -> GenericArray<u8, Self::N> {
        let mut d = Self::new();
        d.update(data);
        d.finalize()
    }

    /// Retrieve the digest result as a lowercase hex string.
    #[cfg(feature = "std")]
    fn finalize_str(self) -> String {
        to_hex(&self.finalize())
    }

    /// Get the block size in bytes.
    fn block_size(&self) -> usize;

    /// Get the output size in bytes.
    fn output_bytes(&self) -> usize { Self::N::to_usize() }

    /// Get the output size in bits.
    fn output_bits(&self) -> usize { Self::N::to_usize() * 8 }
}

/// Render `bytes` as lowercase hex, high nibble first.
#[cfg(feature = "std")]
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}
