use keccak_sponge::{
    Result,
    Sponge,
    WIDTH,
};

use crate::{
    domain::DomainSuffix,
    traits::ensure_output,
};

/// Sponge bound to a fixed output size, shared by SHA-3 and legacy Keccak.
#[derive(Clone, Debug)]
pub(crate) struct FixedCore {
    sponge: Sponge,
    output_bits: usize,
    suffix: DomainSuffix,
}

impl FixedCore {
    /// Rate is `1600 - 2 * output_bits`.
    pub(crate) fn new(output_bits: usize, suffix: DomainSuffix) -> Result<Self> {
        Ok(Self {
            sponge: Sponge::new(WIDTH - 2 * output_bits)?,
            output_bits,
            suffix,
        })
    }

    pub(crate) fn digest_size(&self) -> usize {
        self.output_bits / 8
    }

    pub(crate) fn byte_length(&self) -> usize {
        self.sponge.rate_bytes()
    }

    pub(crate) fn update(&mut self, input: &[u8]) -> Result<()> {
        self.sponge.absorb(input)
    }

    pub(crate) fn reset(&mut self) {
        self.sponge.reset();
    }

    pub(crate) fn do_final_with_bits(&mut self, out: &mut [u8], partial_byte: u8, partial_bits: usize) -> Result<usize> {
        let n = self.digest_size();
        ensure_output(out, n)?;
        self.suffix.absorb(&mut self.sponge, partial_byte, partial_bits)?;
        self.sponge.squeeze(&mut out[..n]);
        self.sponge.reset();
        Ok(n)
    }
}
