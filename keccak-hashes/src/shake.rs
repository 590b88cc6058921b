use keccak_sponge::{
    err,
    Error::InvalidBitLength,
    Result,
    Sponge,
    WIDTH,
};

use crate::{
    domain::DomainSuffix,
    traits::{
        ensure_output,
        Digest,
        Memoable,
        Xof,
    },
};

/// Security strength of the SHAKE family and the constructions built on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SecurityLevel {
    L128,
    L256,
}

impl SecurityLevel {
    pub fn from_bits(family: &'static str, bits: usize) -> Result<Self> {
        match bits {
            128 => Ok(SecurityLevel::L128),
            256 => Ok(SecurityLevel::L256),
            _ => err!(InvalidBitLength(family, bits)),
        }
    }

    pub fn bits(self) -> usize {
        match self {
            SecurityLevel::L128 => 128,
            SecurityLevel::L256 => 256,
        }
    }

    /// Sponge rate in bits: 1344 or 1088.
    pub fn rate(self) -> usize {
        WIDTH - 2 * self.bits()
    }

    /// Default output size in bytes, twice the security strength.
    pub fn digest_size(self) -> usize {
        2 * self.bits() / 8
    }
}

/// SHAKE128 / SHAKE256 extendable-output function.
#[derive(Clone, Debug)]
pub struct ShakeDigest {
    sponge: Sponge,
    level: SecurityLevel,
    suffix: DomainSuffix,
}

impl ShakeDigest {
    pub fn new(level: SecurityLevel) -> Result<Self> {
        Self::with_suffix(level, DomainSuffix::SHAKE)
    }

    /// `bits` must be 128 or 256.
    pub fn from_bits(bits: usize) -> Result<Self> {
        Self::new(SecurityLevel::from_bits("SHAKE", bits)?)
    }

    pub(crate) fn with_suffix(level: SecurityLevel, suffix: DomainSuffix) -> Result<Self> {
        Ok(Self {
            sponge: Sponge::new(level.rate())?,
            level,
            suffix,
        })
    }

    pub fn level(&self) -> SecurityLevel {
        self.level
    }

    pub(crate) fn sponge(&self) -> &Sponge {
        &self.sponge
    }

    pub(crate) fn sponge_mut(&mut self) -> &mut Sponge {
        &mut self.sponge
    }
}

impl Digest for ShakeDigest {
    fn algorithm_name(&self) -> &'static str {
        match self.level {
            SecurityLevel::L128 => "SHAKE128",
            SecurityLevel::L256 => "SHAKE256",
        }
    }

    fn digest_size(&self) -> usize {
        self.level.digest_size()
    }

    fn byte_length(&self) -> usize {
        self.sponge.rate_bytes()
    }

    fn update(&mut self, input: &[u8]) -> Result<()> {
        self.sponge.absorb(input)
    }

    fn do_final(&mut self, out: &mut [u8]) -> Result<usize> {
        let n = self.digest_size();
        ensure_output(out, n)?;
        self.do_final_xof(&mut out[..n])
    }

    fn reset(&mut self) {
        self.sponge.reset();
    }
}

impl Xof for ShakeDigest {
    fn do_output(&mut self, out: &mut [u8]) -> Result<usize> {
        if !self.sponge.is_squeezing() {
            self.suffix.absorb(&mut self.sponge, 0, 0)?;
        }
        self.sponge.squeeze(&mut *out);
        Ok(out.len())
    }

    fn do_final_xof(&mut self, out: &mut [u8]) -> Result<usize> {
        let n = self.do_output(out)?;
        self.reset();
        Ok(n)
    }
}

impl Memoable for ShakeDigest {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_parameters() {
        assert_eq!(SecurityLevel::L128.rate(), 1344);
        assert_eq!(SecurityLevel::L256.rate(), 1088);
        assert_eq!(SecurityLevel::L128.digest_size(), 32);
        assert_eq!(SecurityLevel::L256.digest_size(), 64);
        assert_eq!(
            SecurityLevel::from_bits("SHAKE", 512).unwrap_err(),
            keccak_sponge::Error::InvalidBitLength("SHAKE", 512)
        );
    }

    #[test]
    fn output_stream_is_continuous() {
        let mut whole = [0u8; 300];
        let mut h = ShakeDigest::new(SecurityLevel::L256).unwrap();
        h.update(b"stream").unwrap();
        h.do_final_xof(&mut whole).unwrap();

        let mut h = ShakeDigest::new(SecurityLevel::L256).unwrap();
        h.update(b"stream").unwrap();
        let mut pieces = [0u8; 300];
        let (a, rest) = pieces.split_at_mut(17);
        let (b, c) = rest.split_at_mut(136);
        h.do_output(a).unwrap();
        h.do_output(b).unwrap();
        h.do_output(c).unwrap();
        assert_eq!(&whole[..], &pieces[..]);
        assert_eq!(h.update(b"late").unwrap_err(), keccak_sponge::Error::AbsorbWhileSqueezing);
    }

    #[test]
    fn do_final_resets() {
        let mut h = ShakeDigest::new(SecurityLevel::L128).unwrap();
        let mut first = [0u8; 32];
        h.update(b"abc").unwrap();
        h.do_final(&mut first).unwrap();
        let mut second = [0u8; 32];
        h.update(b"abc").unwrap();
        h.do_final(&mut second).unwrap();
        assert_eq!(first, second);
    }
}
