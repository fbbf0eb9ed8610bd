//! Word-level helpers shared by the hash implementations.
//!
//! Everything here is little-endian: byte 0 of a word is its least
//! significant byte.

#![no_std]

use byteorder::{ByteOrder, LittleEndian};

/// Read a little-endian `u32` from the first four bytes of `src`.
#[inline]
pub fn load_word_le(src: &[u8]) -> u32 {
    LittleEndian::read_u32(src)
}

/// Read a vector of little-endian `u32`s. `src` must hold exactly
/// `4 * dst.len()` bytes.
#[inline]
pub fn read_u32v_le(dst: &mut [u32], src: &[u8]) {
    LittleEndian::read_u32_into(src, dst);
}

/// Write a `u32` into a four byte buffer, least significant byte first.
#[inline]
pub fn write_u32_le(dst: &mut [u8], val: u32) {
    LittleEndian::write_u32(dst, val);
}

/// Write a `u64` into an eight byte buffer, least significant byte first.
#[inline]
pub fn write_u64_le(dst: &mut [u8], val: u64) {
    LittleEndian::write_u64(dst, val);
}

/// Extract byte `index` of `word`, where index 0 is the least significant.
#[inline]
pub fn store_byte(word: u32, index: usize) -> u8 {
    debug_assert!(index < 4);
    (word >> (index * 8)) as u8
}

/// Circular left shift. Schedule tables only ever ask for 1..=31.
#[inline]
pub fn rotate_left(x: u32, n: u32) -> u32 {
    debug_assert!(n > 0 && n < 32);
    x.rotate_left(n)
}
