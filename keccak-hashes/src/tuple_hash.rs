use keccak_sponge::{
    encoding::{
        bit_length,
        left_encode,
        right_encode,
    },
    Result,
};

use crate::{
    cshake::CShakeDigest,
    shake::SecurityLevel,
    traits::{
        ensure_output,
        Digest,
        Memoable,
        Xof,
    },
};

const FUNCTION_NAME: &[u8] = b"TupleHash";

/// TupleHash128 / TupleHash256 over cSHAKE.
///
/// Every `update` call is one tuple element, absorbed as `encode_string(element)`, so `["ab", "c"]` and
/// `["a", "bc"]` hash differently.
#[derive(Clone, Debug)]
pub struct TupleHash {
    cshake: CShakeDigest,
    output_len: usize,
    first_output: bool,
}

impl TupleHash {
    pub fn new(level: SecurityLevel, customization: &[u8]) -> Result<Self> {
        Self::with_output_size(level, customization, level.digest_size())
    }

    pub fn from_bits(bits: usize, customization: &[u8]) -> Result<Self> {
        Self::new(SecurityLevel::from_bits("TupleHash", bits)?, customization)
    }

    /// `output_len` bytes are produced by [`Digest::do_final`].
    pub fn with_output_size(level: SecurityLevel, customization: &[u8], output_len: usize) -> Result<Self> {
        Ok(Self {
            cshake: CShakeDigest::new(level, FUNCTION_NAME, customization)?,
            output_len,
            first_output: true,
        })
    }

    pub fn level(&self) -> SecurityLevel {
        self.cshake.level()
    }

    /// Absorb every element of `tuple` in order.
    pub fn update_tuple(&mut self, tuple: &[&[u8]]) -> Result<()> {
        for element in tuple {
            self.update(element)?;
        }
        Ok(())
    }

    fn wrap_up(&mut self, output_bits: u64) -> Result<()> {
        self.cshake.update(right_encode(output_bits).as_slice())?;
        self.first_output = false;
        Ok(())
    }
}

impl Digest for TupleHash {
    fn algorithm_name(&self) -> &'static str {
        match self.cshake.level() {
            SecurityLevel::L128 => "TupleHash128",
            SecurityLevel::L256 => "TupleHash256",
        }
    }

    fn digest_size(&self) -> usize {
        self.output_len
    }

    fn byte_length(&self) -> usize {
        self.cshake.byte_length()
    }

    fn update(&mut self, element: &[u8]) -> Result<()> {
        self.cshake.update(left_encode(bit_length(element)).as_slice())?;
        self.cshake.update(element)
    }

    fn do_final(&mut self, out: &mut [u8]) -> Result<usize> {
        let n = self.output_len;
        ensure_output(out, n)?;
        if self.first_output {
            self.wrap_up(n as u64 * 8)?;
        }
        self.cshake.do_final_xof(&mut out[..n])?;
        self.reset();
        Ok(n)
    }

    fn reset(&mut self) {
        self.cshake.reset();
        self.first_output = true;
    }
}

impl Xof for TupleHash {
    fn do_output(&mut self, out: &mut [u8]) -> Result<usize> {
        if self.first_output {
            self.wrap_up(0)?;
        }
        self.cshake.do_output(out)
    }

    fn do_final_xof(&mut self, out: &mut [u8]) -> Result<usize> {
        if self.first_output {
            self.wrap_up(out.len() as u64 * 8)?;
        }
        let n = self.cshake.do_output(out)?;
        self.reset();
        Ok(n)
    }
}

impl Memoable for TupleHash {}
