//! RustCrypto `digest` 0.9 implementations.
//!
//! Fixed-size hashes implement [`Update`], [`FixedOutputDirty`] and [`Reset`], so they pick up
//! `digest::Digest` from the blanket impl. SHAKE wrappers implement [`ExtendableOutputDirty`] with a reader
//! that keeps squeezing a snapshot of the finalized state.

use digest::{
    BlockInput,
    ExtendableOutputDirty,
    FixedOutputDirty,
    Reset,
    Update,
    XofReader,
};
use generic_array::{
    typenum::{
        U104,
        U136,
        U144,
        U168,
        U28,
        U32,
        U48,
        U64,
        U72,
    },
    GenericArray,
};

use keccak_sponge::Result;

use crate::{
    keccak::KeccakDigest,
    sha3::{
        Sha3Digest,
        Sha3Size,
    },
    shake::{
        SecurityLevel,
        ShakeDigest,
    },
    traits::{
        Digest as _,
        Xof as _,
    },
};

/// Unwrap results the wrappers cannot produce: parameters are constants and the engine is only squeezed by
/// finalization, which resets it.
fn infallible<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => unreachable!("keccak engine rejected an interop call: {}", e),
    }
}

macro_rules! impl_fixed_digest {
    ($name:ident, $engine:ty, $init:expr, $block:ty, $output:ty, $doc:literal) => {
        #[doc = $doc]
        #[allow(non_camel_case_types)]
        #[derive(Clone, Debug)]
        pub struct $name {
            engine: $engine,
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    engine: infallible($init),
                }
            }
        }

        impl BlockInput for $name {
            type BlockSize = $block;
        }

        impl Update for $name {
            fn update(&mut self, data: impl AsRef<[u8]>) {
                // `engine` only squeezes inside `do_final`, which resets it, or through a cloned reader,
                // so it is always absorbing here and `AbsorbWhileSqueezing` cannot occur.
                infallible(self.engine.update(data.as_ref()))
            }
        }

        impl FixedOutputDirty for $name {
            type OutputSize = $output;

            fn finalize_into_dirty(&mut self, out: &mut GenericArray<u8, Self::OutputSize>) {
                infallible(self.engine.do_final(out));
            }
        }

        impl Reset for $name {
            fn reset(&mut self) {
                self.engine.reset();
            }
        }
    };
}

impl_fixed_digest!(Sha3_224, Sha3Digest, Sha3Digest::new(Sha3Size::S224), U144, U28, "SHA3-224");
impl_fixed_digest!(Sha3_256, Sha3Digest, Sha3Digest::new(Sha3Size::S256), U136, U32, "SHA3-256");
impl_fixed_digest!(Sha3_384, Sha3Digest, Sha3Digest::new(Sha3Size::S384), U104, U48, "SHA3-384");
impl_fixed_digest!(Sha3_512, Sha3Digest, Sha3Digest::new(Sha3Size::S512), U72, U64, "SHA3-512");
impl_fixed_digest!(Keccak224, KeccakDigest, KeccakDigest::new(224), U144, U28, "Keccak-224");
impl_fixed_digest!(Keccak256, KeccakDigest, KeccakDigest::new(256), U136, U32, "Keccak-256");
impl_fixed_digest!(Keccak384, KeccakDigest, KeccakDigest::new(384), U104, U48, "Keccak-384");
impl_fixed_digest!(Keccak512, KeccakDigest, KeccakDigest::new(512), U72, U64, "Keccak-512");

/// Output stream of a finalized SHAKE wrapper.
#[derive(Clone, Debug)]
pub struct ShakeReader {
    engine: ShakeDigest,
}

impl XofReader for ShakeReader {
    fn read(&mut self, buffer: &mut [u8]) {
        infallible(self.engine.do_output(buffer));
    }
}

macro_rules! impl_shake {
    ($name:ident, $level:expr, $block:ty, $doc:literal) => {
        #[doc = $doc]
        #[derive(Clone, Debug)]
        pub struct $name {
            engine: ShakeDigest,
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    engine: infallible(ShakeDigest::new($level)),
                }
            }
        }

        impl BlockInput for $name {
            type BlockSize = $block;
        }

        impl Update for $name {
            fn update(&mut self, data: impl AsRef<[u8]>) {
                // `engine` only squeezes inside `do_final`, which resets it, or through a cloned reader,
                // so it is always absorbing here and `AbsorbWhileSqueezing` cannot occur.
                infallible(self.engine.update(data.as_ref()))
            }
        }

        impl ExtendableOutputDirty for $name {
            type Reader = ShakeReader;

            fn finalize_xof_dirty(&mut self) -> ShakeReader {
                ShakeReader {
                    engine: self.engine.clone(),
                }
            }
        }

        impl Reset for $name {
            fn reset(&mut self) {
                self.engine.reset();
            }
        }
    };
}

impl_shake!(Shake128, SecurityLevel::L128, U168, "SHAKE128");
impl_shake!(Shake256, SecurityLevel::L256, U136, "SHAKE256");
