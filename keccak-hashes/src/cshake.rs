use alloc::vec::Vec;

use keccak_sponge::{
    encoding::{
        bytepad,
        encode_string,
    },
    Result,
};

use crate::{
    domain::DomainSuffix,
    shake::{
        SecurityLevel,
        ShakeDigest,
    },
    traits::{
        Digest,
        Memoable,
        Xof,
    },
};

/// cSHAKE128 / cSHAKE256: SHAKE with a function name `N` and customization string `S`.
///
/// The prefix `bytepad(encode_string(N) || encode_string(S), rate / 8)` is computed once and absorbed again
/// after every reset. With both strings empty no prefix is used and the output equals plain SHAKE.
#[derive(Clone, Debug)]
pub struct CShakeDigest {
    shake: ShakeDigest,
    prefix: Vec<u8>,
}

impl CShakeDigest {
    pub fn new(level: SecurityLevel, function_name: &[u8], customization: &[u8]) -> Result<Self> {
        if function_name.is_empty() && customization.is_empty() {
            return Ok(Self {
                shake: ShakeDigest::new(level)?,
                prefix: Vec::new(),
            });
        }

        let mut shake = ShakeDigest::with_suffix(level, DomainSuffix::CSHAKE)?;
        let mut encoded = encode_string(function_name);
        encoded.extend_from_slice(&encode_string(customization));
        let prefix = bytepad(&encoded, shake.byte_length());
        shake.sponge_mut().absorb(&prefix)?;
        Ok(Self { shake, prefix })
    }

    /// `bits` must be 128 or 256.
    pub fn from_bits(bits: usize, function_name: &[u8], customization: &[u8]) -> Result<Self> {
        Self::new(SecurityLevel::from_bits("cSHAKE", bits)?, function_name, customization)
    }

    pub fn level(&self) -> SecurityLevel {
        self.shake.level()
    }

    /// Encoded `N`/`S` prefix, empty for plain SHAKE.
    pub fn prefix(&self) -> &[u8] {
        &self.prefix
    }

    /// Permutations applied since the last reset, prefix included.
    pub fn permutations(&self) -> u64 {
        self.shake.sponge().permutations()
    }

    /// Reset, then absorb `header` right after the prefix.
    pub(crate) fn reset_with_header(&mut self, header: &[u8]) {
        self.shake.sponge_mut().reset_with(&[self.prefix.as_slice(), header]);
    }
}

impl Digest for CShakeDigest {
    fn algorithm_name(&self) -> &'static str {
        match self.shake.level() {
            SecurityLevel::L128 => "CSHAKE128",
            SecurityLevel::L256 => "CSHAKE256",
        }
    }

    fn digest_size(&self) -> usize {
        self.shake.digest_size()
    }

    fn byte_length(&self) -> usize {
        self.shake.byte_length()
    }

    fn update(&mut self, input: &[u8]) -> Result<()> {
        self.shake.update(input)
    }

    fn do_final(&mut self, out: &mut [u8]) -> Result<usize> {
        let n = self.shake.do_final(out)?;
        self.reset();
        Ok(n)
    }

    fn reset(&mut self) {
        self.shake.sponge_mut().reset_with(&[self.prefix.as_slice()]);
    }
}

impl Xof for CShakeDigest {
    fn do_output(&mut self, out: &mut [u8]) -> Result<usize> {
        self.shake.do_output(out)
    }

    fn do_final_xof(&mut self, out: &mut [u8]) -> Result<usize> {
        let n = self.shake.do_output(out)?;
        self.reset();
        Ok(n)
    }
}

impl Memoable for CShakeDigest {}
