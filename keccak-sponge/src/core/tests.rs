use alloc::vec::Vec;

use super::sponge::{
    Phase,
    Sponge,
};
use crate::{
    Error,
    ErrorKind,
};

const SHAKE128_RATE: usize = 1344;

fn shake128(data: &[u8], out_len: usize) -> Vec<u8> {
    let mut s = Sponge::new(SHAKE128_RATE).unwrap();
    s.absorb(data).unwrap();
    s.absorb_bits(0x0f, 4).unwrap();
    let mut out = vec![0; out_len];
    s.squeeze(&mut out);
    out
}

#[test]
fn rejects_invalid_rates() {
    for &rate in &[0, 63, 100, 1600, 1664, 1601] {
        let e = Sponge::new(rate).unwrap_err();
        assert_eq!(e, Error::InvalidRate(rate));
        assert_eq!(e.kind(), ErrorKind::Configuration);
    }
    for &rate in &[64, 576, 1088, 1344, 1536] {
        let s = Sponge::new(rate).unwrap();
        assert_eq!(s.rate(), rate);
        assert_eq!(s.capacity(), 1600 - rate);
    }
}

#[test]
fn full_block_triggers_one_permutation() {
    let mut s = Sponge::new(SHAKE128_RATE).unwrap();
    let rate = s.rate_bytes();
    s.absorb(vec![7u8; rate]).unwrap();
    assert_eq!(s.permutations(), 1);
    assert_eq!(s.bytes_in_queue(), 0);

    let mut s = Sponge::new(SHAKE128_RATE).unwrap();
    s.absorb(vec![7u8; rate + 1]).unwrap();
    assert_eq!(s.permutations(), 1);
    assert_eq!(s.bytes_in_queue(), 1);

    let mut s = Sponge::new(SHAKE128_RATE).unwrap();
    s.absorb(vec![7u8; rate - 1]).unwrap();
    assert_eq!(s.permutations(), 0);
    s.absorb_byte(7).unwrap();
    assert_eq!(s.permutations(), 1);
    assert_eq!(s.bytes_in_queue(), 0);
}

#[test]
fn absorb_is_chunking_invariant() {
    let data: Vec<u8> = (0..700u32).map(|i| (i * 31 + 7) as u8).collect();
    let expected = shake128(&data, 64);
    for split in (0..=data.len()).step_by(13).chain(Some(data.len())) {
        let mut s = Sponge::new(SHAKE128_RATE).unwrap();
        s.absorb(&data[..split]).unwrap();
        s.absorb(&data[split..]).unwrap();
        s.absorb_bits(0x0f, 4).unwrap();
        let mut out = [0u8; 64];
        s.squeeze(&mut out);
        assert_eq!(&out[..], &expected[..], "split at {}", split);
    }
}

fn squeeze_in_pieces(n: usize, piece: usize) {
    let expected = shake128(b"squeeze", n);
    let mut s = Sponge::new(SHAKE128_RATE).unwrap();
    s.absorb(b"squeeze").unwrap();
    s.absorb_bits(0x0f, 4).unwrap();
    let mut out = vec![0u8; n];
    for chunk in out.chunks_mut(piece) {
        s.squeeze(chunk);
    }
    assert_eq!(out, expected, "{} bytes in pieces of {}", n, piece);
}

#[test]
fn squeeze_with_size_boundary_cases() {
    let rate = Sponge::new(SHAKE128_RATE).unwrap().rate_bytes();
    for &n in &[1, rate - 1, rate, rate + 1, rate * 2 - 1, rate * 2, rate * 2 + 1, rate * 5] {
        for &piece in &[1, 7, rate - 1, rate, rate + 1] {
            squeeze_in_pieces(n, piece);
        }
    }
}

#[test]
fn empty_squeeze_still_switches_phase() {
    let mut s = Sponge::new(SHAKE128_RATE).unwrap();
    s.squeeze(&mut [0u8; 0]);
    assert_eq!(s.phase(), Phase::Squeezing);
    assert_eq!(s.permutations(), 1);
}

#[test]
fn absorb_after_squeeze_fails() {
    let mut s = Sponge::new(SHAKE128_RATE).unwrap();
    s.absorb(b"abc").unwrap();
    let mut out = [0u8; 8];
    s.squeeze(&mut out);
    let e = s.absorb(b"d").unwrap_err();
    assert_eq!(e, Error::AbsorbWhileSqueezing);
    assert_eq!(e.kind(), ErrorKind::Protocol);
    assert_eq!(s.absorb_bits(1, 1).unwrap_err(), Error::AbsorbWhileSqueezing);
}

#[test]
fn absorb_after_bits_fails() {
    let mut s = Sponge::new(SHAKE128_RATE).unwrap();
    s.absorb_bits(0x02, 2).unwrap();
    assert_eq!(s.bits_in_queue(), 2);
    assert_eq!(s.absorb(b"x").unwrap_err(), Error::OddLengthQueue);
    assert_eq!(s.absorb_bits(1, 1).unwrap_err(), Error::OddLengthQueue);
}

#[test]
fn absorb_bits_range_is_checked() {
    let mut s = Sponge::new(SHAKE128_RATE).unwrap();
    assert_eq!(s.absorb_bits(0, 0).unwrap_err(), Error::InvalidPartialBits(0));
    assert_eq!(s.absorb_bits(0, 8).unwrap_err(), Error::InvalidPartialBits(8));
    assert_eq!(s.bits_in_queue(), 0);
}

#[test]
fn squeeze_bits_must_be_byte_aligned() {
    let mut s = Sponge::new(SHAKE128_RATE).unwrap();
    let mut out = [0u8; 4];
    let e = s.squeeze_bits(&mut out, 12).unwrap_err();
    assert_eq!(e, Error::OutputNotByteAligned(12));
    assert_eq!(e.kind(), ErrorKind::Length);
    assert_eq!(s.squeeze_bits(&mut out, 40).unwrap_err(), Error::OutputBufferTooShort(5, 4));
    // A rejected request leaves the sponge untouched.
    assert_eq!(s.phase(), Phase::Absorbing);
    s.squeeze_bits(&mut out, 16).unwrap();
    assert_eq!(s.phase(), Phase::Squeezing);
}

#[test]
fn padding_fills_last_bit_of_block() {
    // rate - 1 message bits: the pad bit completes the block and the terminal bit lands in a fresh one.
    let mut s = Sponge::new(576).unwrap();
    let rate = s.rate_bytes();
    s.absorb(vec![0xa5u8; rate - 1]).unwrap();
    s.absorb_bits(0x7f, 7).unwrap();
    let mut out = [0u8; 32];
    s.squeeze(&mut out);
    assert_eq!(s.permutations(), 2);
    assert_ne!(out, [0u8; 32]);
}

#[test]
fn reset_restores_fresh_state() {
    let fresh = shake128(b"", 32);
    let mut s = Sponge::new(SHAKE128_RATE).unwrap();
    s.absorb(vec![1u8; 500]).unwrap();
    let mut out = [0u8; 32];
    s.squeeze(&mut out);
    s.reset();
    assert_eq!(s.phase(), Phase::Absorbing);
    assert_eq!(s.bits_in_queue(), 0);
    assert_eq!(s.permutations(), 0);
    assert_eq!(s.rate(), SHAKE128_RATE);
    s.absorb_bits(0x0f, 4).unwrap();
    s.squeeze(&mut out);
    assert_eq!(&out[..], &fresh[..]);
}

#[test]
fn reset_with_absorbs_headers() {
    let mut a = Sponge::new(SHAKE128_RATE).unwrap();
    a.absorb(b"header").unwrap();
    a.absorb(b"body").unwrap();

    let mut b = Sponge::new(SHAKE128_RATE).unwrap();
    b.absorb(b"junk").unwrap();
    b.reset_with(&[&b"head"[..], &b"er"[..]]);
    b.absorb(b"body").unwrap();

    let (mut x, mut y) = ([0u8; 48], [0u8; 48]);
    a.squeeze(&mut x);
    b.squeeze(&mut y);
    assert_eq!(x, y);
}

#[test]
fn clone_is_independent() {
    let mut original = Sponge::new(SHAKE128_RATE).unwrap();
    original.absorb(b"shared prefix").unwrap();
    let mut copy = original.clone();

    copy.absorb(b" and more").unwrap();
    let mut junk = [0u8; 16];
    copy.squeeze(&mut junk);

    assert_eq!(original.phase(), Phase::Absorbing);
    assert_eq!(original.bytes_in_queue(), 13);
    let mut restored = Sponge::new(SHAKE128_RATE).unwrap();
    restored.reset_from(&original);
    let (mut x, mut y) = ([0u8; 16], [0u8; 16]);
    original.squeeze(&mut x);
    restored.squeeze(&mut y);
    assert_eq!(x, y);
    assert_ne!(x, junk);
}

#[test]
fn shake128_empty_vector() {
    assert_eq!(
        hex::encode(shake128(b"", 32)),
        "7f9c2ba4e88f827d616045507605853ed73b8093f6efbc88eb1a6eacfa66ef26"
    );
}
