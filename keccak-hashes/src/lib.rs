//! SHA-3, legacy Keccak, SHAKE, cSHAKE, TupleHash and ParallelHash built on [`keccak_sponge::Sponge`].
//!
//! Every construction implements [`Digest`]; the extendable-output ones also implement [`Xof`].
//!
//! ```
//! use keccak_hashes::{
//!     Digest,
//!     SecurityLevel,
//!     TupleHash,
//!     Xof,
//! };
//!
//! let mut h = TupleHash::new(SecurityLevel::L128, b"")?;
//! h.update(&[0x00, 0x01, 0x02])?;
//! h.update(&[0x10, 0x11, 0x12, 0x13, 0x14, 0x15])?;
//! let mut out = [0u8; 32];
//! h.do_final_xof(&mut out)?;
//! assert_eq!(out[..4], [0xc5, 0xd8, 0x78, 0x6c]);
//! # Ok::<(), keccak_hashes::Error>(())
//! ```

#![no_std]

// Prefixes, ParallelHash buffers and `finalize_vec` allocate
#[macro_use]
extern crate alloc;

pub use keccak_sponge::{
    Error,
    ErrorKind,
    Result,
};

mod traits;
pub use traits::{
    Digest,
    Memoable,
    Xof,
};

mod domain;
pub use domain::DomainSuffix;

mod fixed;

mod cshake;
mod keccak;
mod parallel_hash;
mod sha3;
mod shake;
mod tuple_hash;
pub use crate::{
    cshake::CShakeDigest,
    keccak::{
        KeccakDigest,
        KECCAK_BIT_LENGTHS,
    },
    parallel_hash::ParallelHash,
    sha3::{
        Sha3Digest,
        Sha3Size,
    },
    shake::{
        SecurityLevel,
        ShakeDigest,
    },
    tuple_hash::TupleHash,
};

pub mod interop;
