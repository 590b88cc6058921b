//! Sponge Errors

// 3rd-party
use thiserror_no_std::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[cfg(not(feature = "err-location-log"))]
pub const LOCATION_LOG: bool = false;

#[cfg(feature = "err-location-log")]
pub const LOCATION_LOG: bool = true;

/// Broad class of a sponge [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An invalid parameter was supplied at construction.
    Configuration,
    /// Absorb/squeeze calls were issued in an order the sponge does not allow.
    Protocol,
    /// An output length or output buffer does not fit the request.
    Length,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
/// Error type of the keccak sponge crate.
pub enum Error {
    //////////
    // Configuration
    //////////
    #[error("invalid rate value {0}: must be a positive multiple of 64 below 1600")]
    InvalidRate(usize),

    #[error("{0} does not support a bit length of {1}")]
    InvalidBitLength(&'static str, usize),

    #[error("block size must be greater than zero")]
    InvalidBlockSize,

    //////////
    // Protocol
    //////////
    #[error("partial bits must be in the range 1 to 7, found {0}")]
    InvalidPartialBits(usize),

    #[error("attempt to absorb while squeezing")]
    AbsorbWhileSqueezing,

    #[error("attempt to absorb with odd length queue")]
    OddLengthQueue,

    //////////
    // Length
    //////////
    #[error("output length of {0} bits is not a multiple of 8")]
    OutputNotByteAligned(usize),

    #[error("output buffer too short (expected: {0}, found: {1})")]
    OutputBufferTooShort(usize, usize),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidRate(_) | Error::InvalidBitLength(..) | Error::InvalidBlockSize => ErrorKind::Configuration,
            Error::InvalidPartialBits(_) | Error::AbsorbWhileSqueezing | Error::OddLengthQueue => ErrorKind::Protocol,
            Error::OutputNotByteAligned(_) | Error::OutputBufferTooShort(..) => ErrorKind::Length,
        }
    }
}

#[cfg(all(feature = "std", feature = "err-location-log"))]
#[doc(hidden)]
#[macro_export]
macro_rules! location_log {
    () => {
        $crate::println!("\n!!! Error occurred @ {}, {}", file!(), line!())
    };
}

#[cfg(not(all(feature = "std", feature = "err-location-log")))]
#[doc(hidden)]
#[macro_export]
macro_rules! location_log {
    () => {};
}

/// Return `Ok(())` when `$cond` holds, otherwise the given error.
#[macro_export]
macro_rules! try_or {
    ($cond:expr, $err:expr) => {{
        if $cond {
            Ok(())
        } else {
            if $crate::LOCATION_LOG {
                $crate::location_log!();
            }
            Err($err)
        }
    }};
}

#[macro_export]
macro_rules! err {
    ($err:expr) => {{
        if $crate::LOCATION_LOG {
            $crate::location_log!();
        }
        Err($err)
    }};
}
