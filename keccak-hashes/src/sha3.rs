use keccak_sponge::{
    err,
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

/// FIPS 202 SHA-3 output sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sha3Size {
    S224,
    S256,
    S384,
    S512,
}

impl Sha3Size {
    pub fn from_bits(bits: usize) -> Result<Self> {
        match bits {
            224 => Ok(Sha3Size::S224),
            256 => Ok(Sha3Size::S256),
            384 => Ok(Sha3Size::S384),
            512 => Ok(Sha3Size::S512),
            _ => err!(InvalidBitLength("SHA-3", bits)),
        }
    }

    pub fn bits(self) -> usize {
        match self {
            Sha3Size::S224 => 224,
            Sha3Size::S256 => 256,
            Sha3Size::S384 => 384,
            Sha3Size::S512 => 512,
        }
    }
}

/// SHA3-224/256/384/512.
#[derive(Clone, Debug)]
pub struct Sha3Digest {
    size: Sha3Size,
    core: FixedCore,
}

impl Sha3Digest {
    pub fn new(size: Sha3Size) -> Result<Self> {
        Ok(Self {
            size,
            core: FixedCore::new(size.bits(), DomainSuffix::SHA3)?,
        })
    }

    pub fn from_bits(bits: usize) -> Result<Self> {
        Self::new(Sha3Size::from_bits(bits)?)
    }

    pub fn size(&self) -> Sha3Size {
        self.size
    }

    /// Finalize a message whose last `partial_bits` bits (0 to 7) are the low bits of `partial_byte`.
    pub fn do_final_with_bits(&mut self, out: &mut [u8], partial_byte: u8, partial_bits: usize) -> Result<usize> {
        self.core.do_final_with_bits(out, partial_byte, partial_bits)
    }
}

impl Digest for Sha3Digest {
    fn algorithm_name(&self) -> &'static str {
        match self.size {
            Sha3Size::S224 => "SHA3-224",
            Sha3Size::S256 => "SHA3-256",
            Sha3Size::S384 => "SHA3-384",
            Sha3Size::S512 => "SHA3-512",
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

impl Memoable for Sha3Digest {}
