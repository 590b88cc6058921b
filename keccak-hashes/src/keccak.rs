use keccak_sponge::{
    try_or,
    Error::InvalidBitLength,
    Result,
};

use crate::{
    domain::DomainSuffix,
    fixed::FixedCore,
    traits::{
        Digest,
        Memoable,
    },
};

/// Output sizes accepted by [`KeccakDigest`].
pub const KECCAK_BIT_LENGTHS: [usize; 6] = [128, 224, 256, 288, 384, 512];

/// Pre-standard Keccak: pad10*1 with no domain suffix, as used for Ethereum's Keccak-256.
#[derive(Clone, Debug)]
pub struct KeccakDigest {
    bits: usize,
    core: FixedCore,
}

impl KeccakDigest {
    pub const DEFAULT_BITS: usize = 288;

    pub fn new(bits: usize) -> Result<Self> {
        try_or!(KECCAK_BIT_LENGTHS.contains(&bits), InvalidBitLength("Keccak", bits))?;
        Ok(Self {
            bits,
            core: FixedCore::new(bits, DomainSuffix::NONE)?,
        })
    }

    pub fn bits(&self) -> usize {
        self.bits
    }

    /// Finalize a message whose last `partial_bits` bits (0 to 7) are the low bits of `partial_byte`.
    pub fn do_final_with_bits(&mut self, out: &mut [u8], partial_byte: u8, partial_bits: usize) -> Result<usize> {
        self.core.do_final_with_bits(out, partial_byte, partial_bits)
    }
}

impl Digest for KeccakDigest {
    fn algorithm_name(&self) -> &'static str {
        match self.bits {
            128 => "Keccak-128",
            224 => "Keccak-224",
            256 => "Keccak-256",
            288 => "Keccak-288",
            384 => "Keccak-384",
            _ => "Keccak-512",
        }
    }

    fn digest_size(&self) -> usize {
        self.core.digest_size()
    }

    fn byte_length(&self) -> usize {
        self.core.byte_length()
    }

    fn update(&mut self, input: &[u8]) -> Result<()> {
        self.core.update(input)
    }

    fn do_final(&mut self, out: &mut [u8]) -> Result<usize> {
        self.core.do_final_with_bits(out, 0, 0)
    }

    fn reset(&mut self) {
        self.core.reset();
    }
}

impl Memoable for KeccakDigest {}
