//! Keccak-f[1600] permutation, a rate-configurable sponge engine and the NIST SP 800-185 encodings the
//! derived constructions are built from.
//!
//! ```
//! use keccak_sponge::Sponge;
//!
//! // SHAKE128: rate 1344, domain suffix 0b1111
//! let mut sponge = Sponge::new(1344)?;
//! sponge.absorb(b"")?;
//! sponge.absorb_bits(0x0f, 4)?;
//! let mut out = [0u8; 32];
//! sponge.squeeze(&mut out);
//! assert_eq!(out[..4], [0x7f, 0x9c, 0x2b, 0xa4]);
//! # Ok::<(), keccak_sponge::Error>(())
//! ```

#![no_std]

// The sponge only needs heap allocation for encoded construction prefixes
#[cfg_attr(test, macro_use)]
extern crate alloc;

// `std` is only needed to print error locations
#[cfg(feature = "std")]
extern crate std;

// Reexport macro at the same level as `no_std`.
#[cfg(feature = "std")]
#[doc(hidden)]
pub use std::println;

#[macro_use]
mod error;
pub use error::{
    Error,
    ErrorKind,
    Result,
    LOCATION_LOG,
};

mod core;
pub mod encoding;

pub use crate::core::{
    keccak::{
        keccak_f1600,
        KeccakF1600,
        LANES,
        WIDTH,
    },
    sponge::{
        Phase,
        Sponge,
    },
};
