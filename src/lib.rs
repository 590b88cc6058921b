/// Keccak-f[1600] permutation, sponge engine and SP 800-185 encodings.
pub use keccak_sponge;
/// SHA-3, Keccak, SHAKE, cSHAKE, TupleHash and ParallelHash.
pub use keccak_hashes;

pub use keccak_hashes::{
    Digest,
    Error,
    ErrorKind,
    Memoable,
    Result,
    Xof,
};
