#![no_std]

/// Size in bytes of the blocks consumed by 512-bit block hashes.
pub const BLOCK_LEN: usize = 64;

/// A `FixedBuffer`, likes its name implies, is a fixed size buffer. When the
/// buffer becomes full, it must be processed. The input() method takes care of
/// processing and then clearing the buffer automatically. However, other
/// methods do not and require the caller to process the buffer. Any method that
/// modifies the buffer directly or provides the caller with bytes that can be
/// modified results in those bytes being marked as used by the buffer.
pub trait FixedBuffer {
    /// Input a vector of bytes. If the buffer becomes full, process it with the
    /// provided function and then clear the buffer.
    fn input<F: FnMut(&[u8])>(&mut self, input: &[u8], func: F);

    /// Reset the buffer.
    fn reset(&mut self);

    /// Zero the buffer up until the specified index. The buffer position
    /// currently must not be greater than that index.
    fn zero_until(&mut self, idx: usize);

    /// Get a slice of the buffer of the specified size. There must be at least
    /// that many bytes remaining in the buffer.
    fn next(&mut self, len: usize) -> &mut [u8];

    /// Get the current buffer. The buffer must already be full. This clears the
    /// buffer as well.
    fn full_buffer(&mut self) -> &[u8];

    /// Get the current position of the buffer.
    fn position(&self) -> usize;

    /// Get the number of bytes remaining in the buffer until it is full.
    fn remaining(&self) -> usize;

    /// Get the size of the buffer
    fn size(&self) -> usize;
}

/// A fixed size buffer of 64 bytes holding the tail of a message that has
/// not yet filled a whole block.
#[derive(Clone, Copy)]
pub struct FixedBuffer64 {
    buffer: [u8; BLOCK_LEN],
    buffer_idx: usize,
}

impl FixedBuffer64 {
    /// Create a new buffer
    pub fn new() -> FixedBuffer64 {
        FixedBuffer64 {
            buffer: [0u8; BLOCK_LEN],
            buffer_idx: 0,
        }
    }
}

impl Default for FixedBuffer64 {
    fn default() -> Self { Self::new() }
}

impl FixedBuffer for FixedBuffer64 {
    fn input<F: FnMut(&[u8])>(&mut self, input: &[u8], mut func: F) {
        let mut i = 0;

        // Top up a partially filled buffer first; if that is all the input
        // there is, we are done.
        if self.buffer_idx != 0 {
            let buffer_remaining = BLOCK_LEN - self.buffer_idx;
            if input.len() >= buffer_remaining {
                self.buffer[self.buffer_idx..]
                    .copy_from_slice(&input[..buffer_remaining]);
                self.buffer_idx = 0;
                func(&self.buffer);
                i += buffer_remaining;
            } else {
                self.buffer[self.buffer_idx..][..input.len()]
                    .copy_from_slice(input);
                self.buffer_idx += input.len();
                return;
            }
        }

        // Whole blocks are processed straight from the input.
        while input.len() - i >= BLOCK_LEN {
            func(&input[i..i + BLOCK_LEN]);
            i += BLOCK_LEN;
        }

        // Less than a block is left and the buffer is empty.
        let input_remaining = input.len() - i;
        self.buffer[..input_remaining].copy_from_slice(&input[i..]);
        self.buffer_idx += input_remaining;
    }

    fn reset(&mut self) {
        self.buffer_idx = 0;
    }

    fn zero_until(&mut self, idx: usize) {
        assert!(idx >= self.buffer_idx);
        self.buffer[self.buffer_idx..idx].fill(0);
        self.buffer_idx = idx;
    }

    fn next(&mut self, len: usize) -> &mut [u8] {
        self.buffer_idx += len;
        &mut self.buffer[self.buffer_idx - len..self.buffer_idx]
    }

    fn full_buffer(&mut self) -> &[u8] {
        assert!(self.buffer_idx == BLOCK_LEN);
        self.buffer_idx = 0;
        &self.buffer[..]
    }

    fn position(&self) -> usize { self.buffer_idx }

    fn remaining(&self) -> usize { BLOCK_LEN - self.buffer_idx }

    fn size(&self) -> usize { BLOCK_LEN }
}

/// The `StandardPadding` trait adds a method useful for various hash algorithms
/// to a `FixedBuffer` struct.
pub trait StandardPadding {
    /// Add standard padding to the buffer. The buffer must not be full when
    /// this method is called and is guaranteed to have exactly rem remaining
    /// bytes when it returns. If there are not at least rem bytes available,
    /// the buffer will be zero padded, processed, cleared, and then filled with
    /// zeros again until only rem bytes are remaining.
    fn standard_padding<F: FnMut(&[u8])>(&mut self, rem: usize, func: F);
}

impl<T: FixedBuffer> StandardPadding for T {
    fn standard_padding<F: FnMut(&[u8])>(&mut self, rem: usize, mut func: F) {
        let size = self.size();

        self.next(1)[0] = 0x80;

        if self.remaining() < rem {
            self.zero_until(size);
            func(self.full_buffer());
        }

        self.zero_until(size - rem);
    }
}
