//! Keccak-f[1600] permutation.

use zeroize::Zeroize;

/// Number of 64-bit lanes in the permutation state.
pub const LANES: usize = 25;

/// Width of the permutation in bits.
pub const WIDTH: usize = 1600;

const ROUNDS: usize = 24;

/// Iota round constants.
const RC: [u64; ROUNDS] = [
    0x0000_0000_0000_0001,
    0x0000_0000_0000_8082,
    0x8000_0000_0000_808a,
    0x8000_0000_8000_8000,
    0x0000_0000_0000_808b,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8009,
    0x0000_0000_0000_008a,
    0x0000_0000_0000_0088,
    0x0000_0000_8000_8009,
    0x0000_0000_8000_000a,
    0x0000_0000_8000_808b,
    0x8000_0000_0000_008b,
    0x8000_0000_0000_8089,
    0x8000_0000_0000_8003,
    0x8000_0000_0000_8002,
    0x8000_0000_0000_0080,
    0x0000_0000_0000_800a,
    0x8000_0000_8000_000a,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8080,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8008,
];

/// Rho rotation offsets, indexed by `x + 5 * y`.
const RHO: [u32; LANES] = [
    0, 1, 62, 28, 27, //
    36, 44, 6, 55, 20, //
    3, 10, 43, 25, 39, //
    41, 45, 15, 21, 8, //
    18, 2, 61, 56, 14,
];

#[inline(always)]
fn theta(a: &mut [u64; LANES]) {
    let mut c = [0u64; 5];
    for (x, cx) in c.iter_mut().enumerate() {
        *cx = a[x] ^ a[x + 5] ^ a[x + 10] ^ a[x + 15] ^ a[x + 20];
    }
    for x in 0..5 {
        let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
        for y in 0..5 {
            a[x + 5 * y] ^= d;
        }
    }
}

/// Rho and pi fused: lane (x, y) is rotated and moved to (y, 2x + 3y).
#[inline(always)]
fn rho_pi(a: &[u64; LANES], b: &mut [u64; LANES]) {
    for x in 0..5 {
        for y in 0..5 {
            b[y + 5 * ((2 * x + 3 * y) % 5)] = a[x + 5 * y].rotate_left(RHO[x + 5 * y]);
        }
    }
}

#[inline(always)]
fn chi(b: &[u64; LANES], a: &mut [u64; LANES]) {
    for y in 0..5 {
        let row = 5 * y;
        for x in 0..5 {
            a[row + x] = b[row + x] ^ (!b[row + (x + 1) % 5] & b[row + (x + 2) % 5]);
        }
    }
}

#[inline(always)]
fn iota(a: &mut [u64; LANES], round: usize) {
    a[0] ^= RC[round];
}

/// Apply the 24-round Keccak-f[1600] permutation to `state` in place.
pub fn keccak_f1600(state: &mut [u64; LANES]) {
    let mut b = [0u64; LANES];
    for round in 0..ROUNDS {
        theta(state);
        rho_pi(state, &mut b);
        chi(&b, state);
        iota(state, round);
    }
    b.zeroize();
}

/// A pseudo-random permutation implementing `Keccak-F[1600]`
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct KeccakF1600 {
    /// Inner state for transformation
    state: [u64; LANES],
}

impl KeccakF1600 {
    /// Use `Keccak-F[1600]` permutation on inner state
    pub fn transform(&mut self) {
        keccak_f1600(&mut self.state);
    }

    pub fn lanes(&self) -> &[u64; LANES] {
        &self.state
    }

    /// XOR little-endian lanes read from `block` into the leading lanes of the state.
    /// `block` must hold a whole number of lanes.
    pub(crate) fn xor_block(&mut self, block: &[u8]) {
        debug_assert_eq!(block.len() % 8, 0);
        for (lane, chunk) in self.state.iter_mut().zip(block.chunks_exact(8)) {
            *lane ^= read_lane(chunk);
        }
    }

    /// XOR the low `bits` bits of the lane read from `bytes` into lane `index`.
    pub(crate) fn xor_partial_lane(&mut self, index: usize, bytes: &[u8], bits: usize) {
        debug_assert!(bits < 64);
        let mut padded = [0u8; 8];
        padded[..bytes.len()].copy_from_slice(bytes);
        let mask = (1u64 << bits) - 1;
        self.state[index] ^= u64::from_le_bytes(padded) & mask;
    }

    pub(crate) fn xor_lane(&mut self, index: usize, value: u64) {
        self.state[index] ^= value;
    }

    /// Write the leading lanes of the state into `out` as little-endian bytes.
    pub(crate) fn extract(&self, out: &mut [u8]) {
        for (chunk, lane) in out.chunks_exact_mut(8).zip(self.state.iter()) {
            chunk.copy_from_slice(&lane.to_le_bytes());
        }
    }
}

impl Zeroize for KeccakF1600 {
    fn zeroize(&mut self) {
        self.state.zeroize();
    }
}

fn read_lane(chunk: &[u8]) -> u64 {
    let mut lane = [0u8; 8];
    lane.copy_from_slice(chunk);
    u64::from_le_bytes(lane)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, RngCore, SeedableRng};

    use super::*;

    #[test]
    fn zero_state_first_lanes() {
        // Keccak team's KeccakF-1600 intermediate values, first permutation of the all-zero state.
        let mut state = [0u64; LANES];
        keccak_f1600(&mut state);
        assert_eq!(state[0], 0xF1258F7940E1DDE7);
        assert_eq!(state[1], 0x84D5CCF933C0478A);
        assert_eq!(state[24], 0xEAF1FF7B5CECA249);
    }

    #[test]
    fn matches_reference_permutation() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..64 {
            let mut ours = [0u64; LANES];
            for lane in ours.iter_mut() {
                *lane = rng.next_u64();
            }
            let mut reference = ours;
            keccak_f1600(&mut ours);
            keccak::f1600(&mut reference);
            assert_eq!(ours, reference);
        }
    }

    #[test]
    fn lanes_are_little_endian() {
        let mut f = KeccakF1600::default();
        f.xor_block(&[1, 0, 0, 0, 0, 0, 0, 0x80, 2, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(f.lanes()[0], 0x8000_0000_0000_0001);
        assert_eq!(f.lanes()[1], 2);

        let mut out = [0u8; 16];
        f.extract(&mut out);
        assert_eq!(out, [1, 0, 0, 0, 0, 0, 0, 0x80, 2, 0, 0, 0, 0, 0, 0, 0]);
    }
}
