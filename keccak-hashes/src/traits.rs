use alloc::vec::Vec;

use keccak_sponge::{
    try_or,
    Error::OutputBufferTooShort,
    Result,
};

/// Common contract of every hash in this crate.
///
/// `do_final` writes the default-size digest and leaves the engine reset and ready for a new message.
pub trait Digest {
    /// Algorithm name, e.g. `SHA3-256` or `TupleHash128`.
    fn algorithm_name(&self) -> &'static str;

    /// Size in bytes of the output produced by [`Digest::do_final`].
    fn digest_size(&self) -> usize;

    /// Internal block size in bytes, the sponge rate.
    fn byte_length(&self) -> usize;

    fn update_byte(&mut self, input: u8) -> Result<()> {
        self.update(&[input])
    }

    fn update(&mut self, input: &[u8]) -> Result<()>;

    /// Write `digest_size()` bytes to the front of `out`, reset, and return the number of bytes written.
    fn do_final(&mut self, out: &mut [u8]) -> Result<usize>;

    fn reset(&mut self);

    /// [`Digest::do_final`] into a freshly allocated buffer.
    fn finalize_vec(&mut self) -> Result<Vec<u8>> {
        let mut out = vec![0; self.digest_size()];
        self.do_final(&mut out)?;
        Ok(out)
    }
}

/// Extendable-output function.
pub trait Xof: Digest {
    /// Squeeze `out.len()` bytes without resetting. Following calls continue the output stream, and
    /// further updates fail until the engine is reset.
    fn do_output(&mut self, out: &mut [u8]) -> Result<usize>;

    /// Squeeze exactly `out.len()` bytes, then reset.
    fn do_final_xof(&mut self, out: &mut [u8]) -> Result<usize>;
}

/// Snapshot and restore of a hash state.
pub trait Memoable: Clone {
    /// Independent deep copy; later operations on either side do not affect the other.
    fn copy(&self) -> Self {
        self.clone()
    }

    /// Replace this state with a deep copy of `other`.
    fn reset_from(&mut self, other: &Self) {
        self.clone_from(other);
    }
}

pub(crate) fn ensure_output(out: &[u8], n: usize) -> Result<()> {
    try_or!(out.len() >= n, OutputBufferTooShort(n, out.len()))
}
