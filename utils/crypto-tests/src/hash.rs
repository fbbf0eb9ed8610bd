use crypto_digest::Digest;
use crypto_digest::generic_array::GenericArray;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct Test {
    pub name: &'static str,
    pub input: &'static [u8],
    pub output: &'static [u8],
}

/// Load `data/<name>.input` and `data/<name>.output` pairs relative to the
/// invoking source file.
#[macro_export]
macro_rules! new_tests {
    ( $( $name:expr ),*  ) => {
        [$(
            $crate::hash::Test {
                name: $name,
                input: include_bytes!(concat!("data/", $name, ".input")),
                output: include_bytes!(concat!("data/", $name, ".output")),
            },
        )*]
    };
}

pub fn main_test<D: Digest>(tests: &[Test]) {
    // Test that it works when accepting the message all at once
    for t in tests.iter() {
        let mut sh = D::new();
        sh.update(t.input);

        let out = sh.finalize();

        assert_eq!(out[..], t.output[..], "{}", t.name);
    }

    // Test that it works when accepting the message in pieces
    for t in tests.iter() {
        let mut sh = D::new();
        let len = t.input.len();
        let mut left = len;
        while left > 0 {
            let take = (left + 1) / 2;
            sh.update(&t.input[len - left..take + len - left]);
            left = left - take;
        }

        let out = sh.finalize();

        assert_eq!(out[..], t.output[..], "{} (halving pieces)", t.name);
    }

    // And one byte at a time
    for t in tests.iter() {
        let mut sh = D::new();
        for b in t.input.chunks(1) {
            sh.update(b);
        }

        let out = sh.finalize();

        assert_eq!(out[..], t.output[..], "{} (single bytes)", t.name);
    }
}

pub fn one_million_a<D: Digest>(expected: &[u8]) {
    let mut sh = D::new();
    for _ in 0..50000 {
        sh.update(&[b'a'; 10]);
    }
    sh.update(&[b'a'; 500000]);
    let out = sh.finalize();
    assert_eq!(out[..], expected[..]);
}

/// Feed 1,000,000 'a's into the digest with random input sizes between zero
/// and two blocks and check that the result is correct.
pub fn one_million_random<D: Digest>(blocksize: usize, expected: &[u8]) {
    let total_size = 1000000;
    let buffer = vec![b'a'; blocksize * 2];
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut count = 0;

    let mut sh = D::new();
    while count < total_size {
        let next = rng.gen_range(0..=2 * blocksize);
        let size = next.min(total_size - count);
        sh.update(&buffer[..size]);
        count += size;
    }

    let out = sh.finalize();
    assert_eq!(out[..], expected[..]);
}

/// Digest `input` split into chunks of random size, zero-length chunks
/// included.
pub fn random_chunks<D: Digest>(input: &[u8], max_chunk: usize, seed: u64)
    -> GenericArray<u8, D::N>
{
    let mut rng = StdRng::seed_from_u64(seed);
    let mut sh = D::new();
    let mut rest = input;
    while !rest.is_empty() {
        let take = rng.gen_range(0..=max_chunk).min(rest.len());
        let (head, tail) = rest.split_at(take);
        sh.update(head);
        rest = tail;
    }
    sh.finalize()
}
