//! An implementation of the RIPEMD-160 cryptographic hash.
//!
//! First create a `Ripemd160` object using the `Ripemd160` constructor,
//! then feed it input using the `update` or `update_str` methods, which
//! may be called any number of times.
//!
//! After the entire input has been fed to the hash read the result using
//! `finalize`, which consumes the object, or `finalize_reset`, which hands
//! back the digest and leaves the object ready for the next message.
//!
//! ```
//! use ripemd160::{Digest, Ripemd160};
//!
//! let mut sh = Ripemd160::new();
//! sh.update(b"message ");
//! sh.update(b"digest");
//! assert_eq!(
//!     sh.finalize_str(),
//!     "5d0689ef49d2fae572b881b123a85ffa21595f36"
//! );
//! assert_eq!(ripemd160::hash(b"abc"), "8eb208f7e05d987a9b044a8e98c6b087f15a0bfc");
//! ```
//!
//! The length counter is 64 bits wide and the padding encodes the message
//! length in bits, so messages must stay below 2^61 bytes.

#![cfg_attr(not(feature = "std"), no_std)]

pub use crypto_digest::Digest;
#[cfg(feature = "std")]
pub use crypto_digest::to_hex;

use crypto_bytes::{read_u32v_le, rotate_left, store_byte, write_u64_le};
use crypto_digest::generic_array::GenericArray;
use crypto_digest::generic_array::typenum::U20;
use crypto_fixed_buffer::{BLOCK_LEN, FixedBuffer, FixedBuffer64, StandardPadding};

mod consts;
use consts::{DIGEST_BUF_LEN, H0, K_LEFT, K_RIGHT, R_LEFT, R_RIGHT, ROUNDS,
             S_LEFT, S_RIGHT, WORK_BUF_LEN};

/// Structure representing the state of a Ripemd160 computation
#[derive(Clone)]
pub struct Ripemd160 {
    h: [u32; DIGEST_BUF_LEN],
    length: u64,
    buffer: FixedBuffer64,
}

/// Boolean function of the given group of 16 steps. The right line walks
/// the groups in reverse.
#[inline]
fn f(group: usize, x: u32, y: u32, z: u32) -> u32 {
    match group {
        0 => x ^ y ^ z,
        1 => (x & y) | (!x & z),
        2 => (x | !y) ^ z,
        3 => (x & z) | (y & !z),
        _ => x ^ (y | !z),
    }
}

#[inline]
fn step(line: &mut [u32; DIGEST_BUF_LEN], f: u32, x: u32, k: u32, s: u32) {
    let [a, b, c, d, e] = *line;
    let t = rotate_left(a.wrapping_add(f).wrapping_add(x).wrapping_add(k), s)
        .wrapping_add(e);
    *line = [e, t, b, rotate_left(c, 10), d];
}

fn process_msg_block(data: &[u8], h: &mut [u32; DIGEST_BUF_LEN]) {
    let mut x = [0u32; WORK_BUF_LEN];
    read_u32v_le(&mut x, data);

    let mut left = *h;
    let mut right = *h;

    for j in 0..ROUNDS {
        let group = j / 16;

        let fl = f(group, left[1], left[2], left[3]);
        step(&mut left, fl, x[R_LEFT[j]], K_LEFT[group], S_LEFT[j]);

        let fr = f(4 - group, right[1], right[2], right[3]);
        step(&mut right, fr, x[R_RIGHT[j]], K_RIGHT[group], S_RIGHT[j]);
    }

    // Combine results
    let t = h[1].wrapping_add(left[2]).wrapping_add(right[3]);
    h[1] = h[2].wrapping_add(left[3]).wrapping_add(right[4]);
    h[2] = h[3].wrapping_add(left[4]).wrapping_add(right[0]);
    h[3] = h[4].wrapping_add(left[0]).wrapping_add(right[1]);
    h[4] = h[0].wrapping_add(left[1]).wrapping_add(right[2]);
    h[0] = t;
}

impl Ripemd160 {
    /// Construct a `Ripemd160` object
    pub fn new() -> Ripemd160 {
        Ripemd160 {
            h: H0,
            length: 0,
            buffer: FixedBuffer64::new(),
        }
    }
}

impl Default for Ripemd160 {
    fn default() -> Self { Self::new() }
}

impl Digest for Ripemd160 {
    type N = U20;

    /// Adds the input `msg` to the hash. This method can be called repeatedly
    /// for use with streaming messages.
    fn update(&mut self, msg: &[u8]) {
        self.length = self.length.wrapping_add(msg.len() as u64);
        let st_h = &mut self.h;
        self.buffer.input(msg, |d: &[u8]| {
            process_msg_block(d, &mut *st_h);
        });
    }

    /// Pads the message, runs the last block(s) and returns the digest.
    fn finalize(mut self) -> GenericArray<u8, U20> {
        let length_bits = self.length << 3;

        let st_h = &mut self.h;
        self.buffer.standard_padding(8, |d: &[u8]| {
            process_msg_block(d, &mut *st_h)
        });
        write_u64_le(self.buffer.next(8), length_bits);
        process_msg_block(self.buffer.full_buffer(), st_h);

        let mut out = GenericArray::<u8, U20>::default();
        for (i, byte) in out.iter_mut().enumerate() {
            *byte = store_byte(self.h[i / 4], i % 4);
        }
        out
    }

    /// Resets the hash to its original state also clearing the buffer.
    fn reset(&mut self) {
        self.h = H0;
        self.length = 0;
        self.buffer.reset();
    }

    /// Returns the block size the hash operates on in bytes
    fn block_size(&self) -> usize { BLOCK_LEN }
}

/// Hash `data` with a fresh hasher and return the lowercase hex digest.
#[cfg(feature = "std")]
pub fn hash(data: &[u8]) -> String {
    to_hex(&Ripemd160::digest(data))
}

#[cfg(test)]
mod tests;
