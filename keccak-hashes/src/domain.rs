//! Domain separation suffixes appended after the message and before sponge padding.

use keccak_sponge::{
    try_or,
    Error::InvalidPartialBits,
    Result,
    Sponge,
};

/// Suffix bits appended to the message, least significant bit first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DomainSuffix {
    bits: u8,
    count: usize,
}

impl DomainSuffix {
    /// Legacy Keccak: pad10*1 only.
    pub const NONE: Self = Self { bits: 0, count: 0 };
    /// SHA3-d: `01`.
    pub const SHA3: Self = Self { bits: 0x02, count: 2 };
    /// SHAKE: `1111`.
    pub const SHAKE: Self = Self { bits: 0x0f, count: 4 };
    /// cSHAKE with a non-empty function name or customization: `00`.
    pub const CSHAKE: Self = Self { bits: 0x00, count: 2 };

    pub fn bits(self) -> u8 {
        self.bits
    }

    /// Number of suffix bits.
    pub fn bit_count(self) -> usize {
        self.count
    }

    /// Absorb the low `partial_bits` bits of `partial_byte` followed by the suffix.
    ///
    /// At most one whole byte and one sub-byte chunk are absorbed, so the sponge is left ready to squeeze.
    pub fn absorb(self, sponge: &mut Sponge, partial_byte: u8, partial_bits: usize) -> Result<()> {
        try_or!(partial_bits < 8, InvalidPartialBits(partial_bits))?;
        let mask = (1u32 << partial_bits) - 1;
        let mut value = (u32::from(partial_byte) & mask) | (u32::from(self.bits) << partial_bits);
        let mut count = partial_bits + self.count;
        if count >= 8 {
            sponge.absorb_byte(value as u8)?;
            value >>= 8;
            count -= 8;
        }
        if count > 0 {
            sponge.absorb_bits(value as u8, count)?;
        }
        Ok(())
    }
}
