/// Keccak-f[1600] permutation.
pub(crate) mod keccak;

/// Sponge engine over the permutation.
pub(crate) mod sponge;

#[cfg(test)]
mod tests;
