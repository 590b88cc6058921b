use core::fmt;

use zeroize::Zeroize;

use super::keccak::{
    KeccakF1600,
    WIDTH,
};
use crate::error::{
    Error::{
        AbsorbWhileSqueezing,
        InvalidPartialBits,
        InvalidRate,
        OddLengthQueue,
        OutputBufferTooShort,
        OutputNotByteAligned,
    },
    Result,
};

/// Largest rate accepted by [`Sponge::new`], in bytes.
const MAX_RATE_BYTES: usize = (WIDTH - 64) / 8;

/// Sponge lifecycle phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Absorbing,
    Squeezing,
}

/// Keccak sponge with a runtime-configured rate.
///
/// Input is buffered in a queue of `rate / 8` bytes and XORed into the state one full block at a time.
/// The first squeeze applies multi-rate padding and switches the sponge to the squeezing phase; from then
/// on absorbing fails until [`Sponge::reset`].
#[derive(Clone)]
pub struct Sponge {
    /// Keccak permutation together with its internal state.
    s: KeccakF1600,

    /// Partial input block while absorbing, last extracted output block while squeezing.
    queue: [u8; MAX_RATE_BYTES],

    /// Rate in bits.
    rate: usize,

    /// Bits pending in `queue` while absorbing.
    bits_in_queue: usize,

    /// Bits of `queue` not yet handed out while squeezing.
    bits_available: usize,

    phase: Phase,

    /// Permutations applied since construction or the last reset.
    permutations: u64,
}

impl Sponge {
    /// Create a sponge exchanging `rate` bits per permutation.
    ///
    /// The rate must be a positive multiple of 64 below 1600.
    pub fn new(rate: usize) -> Result<Self> {
        try_or!(rate > 0 && rate < WIDTH && rate % 64 == 0, InvalidRate(rate))?;
        Ok(Self {
            s: KeccakF1600::default(),
            queue: [0; MAX_RATE_BYTES],
            rate,
            bits_in_queue: 0,
            bits_available: 0,
            phase: Phase::Absorbing,
            permutations: 0,
        })
    }

    pub fn rate(&self) -> usize {
        self.rate
    }

    /// Block size in bytes.
    pub fn rate_bytes(&self) -> usize {
        self.rate >> 3
    }

    pub fn capacity(&self) -> usize {
        WIDTH - self.rate
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_squeezing(&self) -> bool {
        self.phase == Phase::Squeezing
    }

    /// Bits waiting in the absorb queue.
    pub fn bits_in_queue(&self) -> usize {
        self.bits_in_queue
    }

    /// Whole bytes waiting in the absorb queue.
    pub fn bytes_in_queue(&self) -> usize {
        self.bits_in_queue >> 3
    }

    pub fn permutations(&self) -> u64 {
        self.permutations
    }

    fn check_absorbing(&self) -> Result<()> {
        try_or!(self.bits_in_queue % 8 == 0, OddLengthQueue)?;
        try_or!(self.phase == Phase::Absorbing, AbsorbWhileSqueezing)
    }

    fn transform(&mut self) {
        self.s.transform();
        self.permutations += 1;
    }

    fn absorb_block(&mut self, block: &[u8]) {
        self.s.xor_block(block);
        self.transform();
    }

    fn absorb_queue(&mut self) {
        let n = self.rate_bytes();
        self.s.xor_block(&self.queue[..n]);
        self.transform();
    }

    fn extract(&mut self) {
        let n = self.rate_bytes();
        self.s.extract(&mut self.queue[..n]);
        self.bits_available = self.rate;
    }

    /// Absorb a slice into the sponge.
    pub fn absorb<T>(&mut self, xr: T) -> Result<()>
    where
        T: AsRef<[u8]>,
    {
        self.check_absorbing()?;
        self.absorb_unchecked(xr.as_ref());
        Ok(())
    }

    pub fn absorb_byte(&mut self, x: u8) -> Result<()> {
        self.absorb([x])
    }

    fn absorb_unchecked(&mut self, mut x: &[u8]) {
        let rate_bytes = self.rate_bytes();
        let mut pos = self.bits_in_queue >> 3;
        while !x.is_empty() {
            if pos == 0 && x.len() >= rate_bytes {
                // Whole blocks bypass the queue.
                let (block, rest) = x.split_at(rate_bytes);
                self.absorb_block(block);
                x = rest;
            } else {
                let n = core::cmp::min(rate_bytes - pos, x.len());
                self.queue[pos..pos + n].copy_from_slice(&x[..n]);
                pos += n;
                x = &x[n..];
                if pos == rate_bytes {
                    self.absorb_queue();
                    pos = 0;
                }
            }
        }
        self.bits_in_queue = pos << 3;
    }

    /// Absorb the low `bits` bits of `x`, least significant bit first.
    ///
    /// The queue is left unaligned, so this may only be used for the final bits of the input, right before
    /// squeezing. Any further absorb fails with [`OddLengthQueue`].
    pub fn absorb_bits(&mut self, x: u8, bits: usize) -> Result<()> {
        try_or!((1..=7).contains(&bits), InvalidPartialBits(bits))?;
        self.check_absorbing()?;
        let mask = (1u8 << bits) - 1;
        self.queue[self.bits_in_queue >> 3] = x & mask;
        self.bits_in_queue += bits;
        Ok(())
    }

    /// Apply pad10*1 after the queued bits and switch to the squeezing phase.
    fn pad_and_switch(&mut self) {
        debug_assert!(self.bits_in_queue < self.rate);

        self.queue[self.bits_in_queue >> 3] |= 1 << (self.bits_in_queue & 7);
        self.bits_in_queue += 1;
        if self.bits_in_queue == self.rate {
            self.absorb_queue();
            self.bits_in_queue = 0;
        }

        let full = self.bits_in_queue >> 6;
        let partial = self.bits_in_queue & 63;
        self.s.xor_block(&self.queue[..full * 8]);
        if partial > 0 {
            let off = full * 8;
            let end = core::cmp::min(off + 8, self.rate_bytes());
            self.s.xor_partial_lane(full, &self.queue[off..end], partial);
        }
        self.s.xor_lane((self.rate - 1) >> 6, 1 << 63);

        self.transform();
        self.extract();
        self.bits_in_queue = 0;
        self.phase = Phase::Squeezing;
    }

    /// Fill `out` with sponge output, padding the input first if the sponge is still absorbing.
    ///
    /// Consecutive calls continue the same output stream.
    pub fn squeeze<T>(&mut self, mut yr: T)
    where
        T: AsMut<[u8]>,
    {
        if self.phase == Phase::Absorbing {
            self.pad_and_switch();
        }

        let rate_bytes = self.rate_bytes();
        let mut y = yr.as_mut();
        while !y.is_empty() {
            if self.bits_available == 0 {
                self.transform();
                self.extract();
            }
            let available = self.bits_available >> 3;
            let n = core::cmp::min(available, y.len());
            let start = rate_bytes - available;
            y[..n].copy_from_slice(&self.queue[start..start + n]);
            self.bits_available -= n << 3;
            y = &mut y[n..];
        }
    }

    /// Squeeze `output_len_bits` bits into the front of `out`.
    ///
    /// Only whole bytes can be squeezed.
    pub fn squeeze_bits(&mut self, out: &mut [u8], output_len_bits: usize) -> Result<()> {
        try_or!(output_len_bits % 8 == 0, OutputNotByteAligned(output_len_bits))?;
        let n = output_len_bits >> 3;
        try_or!(out.len() >= n, OutputBufferTooShort(n, out.len()))?;
        self.squeeze(&mut out[..n]);
        Ok(())
    }

    /// Return to the freshly constructed state, keeping the rate.
    pub fn reset(&mut self) {
        self.s.zeroize();
        self.queue.zeroize();
        self.bits_in_queue = 0;
        self.bits_available = 0;
        self.phase = Phase::Absorbing;
        self.permutations = 0;
    }

    /// Reset, then absorb fixed construction headers such as a cSHAKE prefix.
    pub fn reset_with(&mut self, parts: &[&[u8]]) {
        self.reset();
        for part in parts {
            self.absorb_unchecked(part);
        }
    }

    /// Overwrite this sponge with a deep copy of `other`.
    pub fn reset_from(&mut self, other: &Self) {
        self.clone_from(other);
    }
}

impl Drop for Sponge {
    fn drop(&mut self) {
        self.s.zeroize();
        self.queue.zeroize();
    }
}

impl fmt::Debug for Sponge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pending = match self.phase {
            Phase::Absorbing => &self.queue[..(self.bits_in_queue + 7) >> 3],
            Phase::Squeezing => &self.queue[self.rate_bytes() - (self.bits_available >> 3)..self.rate_bytes()],
        };
        write!(
            f,
            "Sponge {{ rate: {}, phase: {:?}, queue: [{}] }}",
            self.rate,
            self.phase,
            hex::encode(pending)
        )
    }
}
