use alloc::vec::Vec;

use zeroize::Zeroize;

use keccak_sponge::{
    encoding::{
        left_encode,
        right_encode,
    },
    try_or,
    Error::{
        AbsorbWhileSqueezing,
        InvalidBlockSize,
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

const FUNCTION_NAME: &[u8] = b"ParallelHash";

/// ParallelHash128 / ParallelHash256.
///
/// The message is cut into blocks of `block_size` bytes; each block is compressed with plain SHAKE to
/// twice the security strength and the results are absorbed by an outer `cSHAKE("ParallelHash", S)`.
#[derive(Clone, Debug)]
pub struct ParallelHash {
    outer: CShakeDigest,
    compressor: CShakeDigest,
    block_size: usize,
    buffer: Vec<u8>,
    /// Compressed block, `2 * security bits / 8` bytes.
    compressed: Vec<u8>,
    blocks: u64,
    output_len: usize,
    first_output: bool,
}

impl ParallelHash {
    pub fn new(level: SecurityLevel, customization: &[u8], block_size: usize) -> Result<Self> {
        Self::with_output_size(level, customization, block_size, level.digest_size())
    }

    pub fn from_bits(bits: usize, customization: &[u8], block_size: usize) -> Result<Self> {
        Self::new(SecurityLevel::from_bits("ParallelHash", bits)?, customization, block_size)
    }

    /// `output_len` bytes are produced by [`Digest::do_final`].
    pub fn with_output_size(
        level: SecurityLevel,
        customization: &[u8],
        block_size: usize,
        output_len: usize,
    ) -> Result<Self> {
        try_or!(block_size > 0, InvalidBlockSize)?;
        let mut hash = Self {
            outer: CShakeDigest::new(level, FUNCTION_NAME, customization)?,
            compressor: CShakeDigest::new(level, &[], &[])?,
            block_size,
            // `block_size` is caller-controlled; grow past one rate on demand.
            buffer: Vec::with_capacity(core::cmp::min(block_size, level.rate() / 8)),
            compressed: vec![0; level.digest_size()],
            blocks: 0,
            output_len,
            first_output: true,
        };
        hash.reset();
        Ok(hash)
    }

    pub fn level(&self) -> SecurityLevel {
        self.outer.level()
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Blocks compressed since the last reset.
    pub fn blocks(&self) -> u64 {
        self.blocks
    }

    fn compress_buffer(&mut self) -> Result<()> {
        compress(&mut self.compressor, &mut self.compressed, &mut self.outer, &self.buffer)?;
        self.blocks += 1;
        self.buffer.zeroize();
        Ok(())
    }

    #[cfg(not(feature = "parallel"))]
    fn compress_blocks(&mut self, data: &[u8]) -> Result<()> {
        for block in data.chunks_exact(self.block_size) {
            compress(&mut self.compressor, &mut self.compressed, &mut self.outer, block)?;
            self.blocks += 1;
        }
        Ok(())
    }

    #[cfg(feature = "parallel")]
    fn compress_blocks(&mut self, data: &[u8]) -> Result<()> {
        use rayon::prelude::*;

        let width = self.compressed.len();
        let compressor = &self.compressor;
        let digests = data
            .par_chunks_exact(self.block_size)
            .map(|block| {
                let mut inner = compressor.clone();
                let mut digest = vec![0; width];
                inner.update(block)?;
                inner.do_final_xof(&mut digest)?;
                Ok(digest)
            })
            .collect::<Result<Vec<Vec<u8>>>>()?;
        for digest in digests {
            self.outer.update(&digest)?;
            self.blocks += 1;
        }
        Ok(())
    }

    fn wrap_up(&mut self, output_bits: u64) -> Result<()> {
        if !self.buffer.is_empty() {
            self.compress_buffer()?;
        }
        self.outer.update(right_encode(self.blocks).as_slice())?;
        self.outer.update(right_encode(output_bits).as_slice())?;
        self.first_output = false;
        Ok(())
    }
}

/// Compress one block with a fresh `compressor` and feed the result to `outer`.
fn compress(compressor: &mut CShakeDigest, scratch: &mut [u8], outer: &mut CShakeDigest, block: &[u8]) -> Result<()> {
    compressor.update(block)?;
    compressor.do_final_xof(scratch)?;
    outer.update(scratch)
}

impl Digest for ParallelHash {
    fn algorithm_name(&self) -> &'static str {
        match self.outer.level() {
            SecurityLevel::L128 => "ParallelHash128",
            SecurityLevel::L256 => "ParallelHash256",
        }
    }

    fn digest_size(&self) -> usize {
        self.output_len
    }

    fn byte_length(&self) -> usize {
        self.outer.byte_length()
    }

    fn update(&mut self, input: &[u8]) -> Result<()> {
        try_or!(self.first_output, AbsorbWhileSqueezing)?;

        let mut x = input;
        if !self.buffer.is_empty() {
            let n = core::cmp::min(self.block_size - self.buffer.len(), x.len());
            self.buffer.extend_from_slice(&x[..n]);
            x = &x[n..];
            if self.buffer.len() == self.block_size {
                self.compress_buffer()?;
            }
        }

        let whole = x.len() - x.len() % self.block_size;
        self.compress_blocks(&x[..whole])?;
        self.buffer.extend_from_slice(&x[whole..]);
        Ok(())
    }

    fn do_final(&mut self, out: &mut [u8]) -> Result<usize> {
        let n = self.output_len;
        ensure_output(out, n)?;
        if self.first_output {
            self.wrap_up(n as u64 * 8)?;
        }
        self.outer.do_final_xof(&mut out[..n])?;
        self.reset();
        Ok(n)
    }

    fn reset(&mut self) {
        self.outer.reset_with_header(left_encode(self.block_size as u64).as_slice());
        self.compressor.reset();
        self.buffer.zeroize();
        self.compressed.zeroize();
        self.compressed.resize(self.outer.digest_size(), 0);
        self.blocks = 0;
        self.first_output = true;
    }
}

impl Xof for ParallelHash {
    fn do_output(&mut self, out: &mut [u8]) -> Result<usize> {
        if self.first_output {
            self.wrap_up(0)?;
        }
        self.outer.do_output(out)
    }

    fn do_final_xof(&mut self, out: &mut [u8]) -> Result<usize> {
        if self.first_output {
            self.wrap_up(out.len() as u64 * 8)?;
        }
        let n = self.outer.do_output(out)?;
        self.reset();
        Ok(n)
    }
}

impl Memoable for ParallelHash {}
