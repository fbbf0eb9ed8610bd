use super::{hash, process_msg_block, Digest, Ripemd160};
use super::consts::H0;
use crypto_tests::hash::{main_test, one_million_a, one_million_random, random_chunks};
use crypto_tests::new_tests;
use hex_literal::hex;
use proptest::collection::vec;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn ripemd160_main() {
    // Published RIPEMD-160 test suite
    let tests = new_tests!("test1", "test2", "test3", "test4",
                           "test5", "test6", "test7", "test8");
    main_test::<Ripemd160>(&tests);
}

#[test]
fn ripemd160_block_boundaries() {
    let tests = new_tests!("len55", "len56", "len57", "len63",
                           "len64", "len65", "len119", "len120");
    main_test::<Ripemd160>(&tests);
}

#[test]
fn ripemd160_1million_a() {
    let output = include_bytes!("data/one_million_a.output");
    one_million_a::<Ripemd160>(output);
}

#[test]
fn ripemd160_1million_random() {
    let output = include_bytes!("data/one_million_a.output");
    one_million_random::<Ripemd160>(64, output);
}

#[test]
fn hex_digests() {
    assert_eq!(hash(b""), "9c1185a5c5e9fc54612808977ee8f548b2258d31");
    assert_eq!(hash(b"abc"), "8eb208f7e05d987a9b044a8e98c6b087f15a0bfc");
    assert_eq!(hash(b"message digest"), "5d0689ef49d2fae572b881b123a85ffa21595f36");
    assert_eq!(
        hash(b"The quick brown fox jumps over the lazy dog"),
        "37f332f68db77bd9d7edd4969571ad671cf9dd3b"
    );

    let mut sh = Ripemd160::new();
    sh.update_str("The quick brown fox jumps over the lazy cog");
    assert_eq!(sh.finalize_str(), "132072df690933835eb8b6ad0b77e7b6f14acad7");
}

#[test]
fn single_block_compression() {
    // "abc" padded by hand: marker, zeros, 24 bits of length
    let mut block = [0u8; 64];
    block[..3].copy_from_slice(b"abc");
    block[3] = 0x80;
    block[56] = 24;

    let mut h = H0;
    process_msg_block(&block, &mut h);
    assert_eq!(h, [0xf708b28e, 0x7a985de0, 0x8e4a049b, 0x87b0c698, 0xfc0b5af1]);
}

#[test]
fn output_sizes() {
    let sh = Ripemd160::new();
    assert_eq!(sh.output_bytes(), 20);
    assert_eq!(sh.output_bits(), 160);
    assert_eq!(sh.block_size(), 64);
}

#[test]
fn every_two_way_split() {
    let input: Vec<u8> = (0..130u32).map(|i| (i * 13 + 5) as u8).collect();
    let expected = Ripemd160::digest(&input);
    for cut in 0..=input.len() {
        let mut sh = Ripemd160::new();
        sh.update(&input[..cut]);
        sh.update(&input[cut..]);
        assert_eq!(sh.finalize(), expected, "split at {}", cut);
    }
}

#[test]
fn random_splits() {
    let mut rng = StdRng::seed_from_u64(160);
    for seed in 0..32 {
        let len = rng.gen_range(0..600);
        let input: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
        let expected = Ripemd160::digest(&input);
        assert_eq!(random_chunks::<Ripemd160>(&input, 150, seed), expected);
    }
}

proptest! {
    #[test]
    fn chunking_does_not_change_digest(
        data in vec(any::<u8>(), 0..400),
        cuts in vec(0usize..400, 0..6),
    ) {
        let mut cuts = cuts;
        cuts.iter_mut().for_each(|c| *c = *c % (data.len() + 1));
        cuts.sort_unstable();

        let mut sh = Ripemd160::new();
        let mut start = 0;
        for &cut in cuts.iter() {
            sh.update(&data[start..cut]);
            start = cut;
        }
        sh.update(&data[start..]);

        prop_assert_eq!(sh.finalize(), Ripemd160::digest(&data));
    }
}

#[test]
fn independent_instances_agree() {
    let input = b"deterministic input spanning more than a single block of data, \
                  so at least one compression runs during update";
    let mut a = Ripemd160::new();
    let mut b = Ripemd160::new();
    a.update(input);
    b.update(&input[..17]);
    b.update(&input[17..]);
    assert_eq!(a.finalize(), b.finalize());
}

#[test]
fn reset_restores_initial_state() {
    let mut sh = Ripemd160::new();
    sh.update(&[0x42; 100]);
    sh.reset();
    sh.update(b"abc");
    assert_eq!(sh.finalize()[..], hex!("8eb208f7e05d987a9b044a8e98c6b087f15a0bfc")[..]);
}

#[test]
fn finalize_reset_starts_over() {
    let mut sh = Ripemd160::new();
    sh.update(b"abc");
    let first = sh.finalize_reset();
    sh.update(b"abc");
    let second = sh.finalize_reset();
    assert_eq!(first, second);
    assert_eq!(sh.finalize()[..], hex!("9c1185a5c5e9fc54612808977ee8f548b2258d31")[..]);
}

#[test]
fn clone_forks_the_computation() {
    let mut sh = Ripemd160::new();
    sh.update(b"message ");
    let mut fork = sh.clone();
    sh.update(b"digest");
    fork.update(b"digest");
    assert_eq!(sh.finalize(), fork.finalize());
}

#[test]
fn hash_calls_do_not_leak_state() {
    let a = hash(b"first message");
    let b = hash(b"second message");
    assert_eq!(hash(b"first message"), a);
    assert_eq!(hash(b"second message"), b);
    assert_ne!(a, b);

    // What an instance reused without reset would have chained onto.
    let mut chained = Ripemd160::new();
    chained.update(b"first message");
    chained.update(b"second message");
    assert_ne!(super::to_hex(&chained.finalize()), b);
}

#[test]
fn single_bit_flips_avalanche() {
    let mut rng = StdRng::seed_from_u64(0xa11);
    let trials = 256;
    let mut total = 0u32;
    for _ in 0..trials {
        let mut input = [0u8; 128];
        rng.fill(&mut input[..]);
        let before = Ripemd160::digest(&input);
        let bit = rng.gen_range(0..input.len() * 8);
        input[bit / 8] ^= 1 << (bit % 8);
        let after = Ripemd160::digest(&input);
        total += before.iter()
            .zip(after.iter())
            .map(|(x, y)| (x ^ y).count_ones())
            .sum::<u32>();
    }
    let mean = total as f64 / trials as f64;
    assert!(mean > 75.0 && mean < 85.0, "mean flipped bits {}", mean);
}
