//! NIST SP 800-185 integer and string encodings.

use alloc::vec::Vec;
use core::fmt;

/// An integer encoded as its big-endian magnitude plus one byte holding the magnitude's length.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Encoded {
    buf: [u8; 9],
    len: usize,
}

impl Encoded {
    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}

impl AsRef<[u8]> for Encoded {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl fmt::Debug for Encoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Encoded({})", hex::encode(self.as_slice()))
    }
}

/// Returns the number of bytes needed to encode `x`, at least one.
fn num_bytes(x: u64) -> usize {
    let mut d = 0;
    let mut n = x;
    while n > 0 {
        n >>= 8;
        d += 1;
    }
    core::cmp::max(d, 1)
}

fn magnitude(x: u64, n: usize, out: &mut [u8]) {
    for (i, b) in out[..n].iter_mut().enumerate() {
        *b = (x >> ((n - 1 - i) << 3)) as u8;
    }
}

/// `left_encode(x)`: length byte first, then the big-endian magnitude.
pub fn left_encode(x: u64) -> Encoded {
    let n = num_bytes(x);
    let mut buf = [0u8; 9];
    buf[0] = n as u8;
    magnitude(x, n, &mut buf[1..]);
    Encoded { buf, len: n + 1 }
}

/// `right_encode(x)`: the big-endian magnitude, then its length byte.
pub fn right_encode(x: u64) -> Encoded {
    let n = num_bytes(x);
    let mut buf = [0u8; 9];
    magnitude(x, n, &mut buf);
    buf[n] = n as u8;
    Encoded { buf, len: n + 1 }
}

/// Length of `data` in bits.
pub fn bit_length(data: &[u8]) -> u64 {
    (data.len() as u64) << 3
}

/// `encode_string(s)`: `left_encode(bitlen(s)) || s`.
pub fn encode_string(s: &[u8]) -> Vec<u8> {
    let prefix = left_encode(bit_length(s));
    let mut out = Vec::with_capacity(prefix.as_slice().len() + s.len());
    out.extend_from_slice(prefix.as_slice());
    out.extend_from_slice(s);
    out
}

/// `bytepad(x, w)`: `left_encode(w) || x`, zero padded to a multiple of `w` bytes.
///
/// `w` must be positive.
pub fn bytepad(x: &[u8], w: usize) -> Vec<u8> {
    debug_assert!(w > 0);
    let prefix = left_encode(w as u64);
    let mut out = Vec::with_capacity(prefix.as_slice().len() + x.len() + w);
    out.extend_from_slice(prefix.as_slice());
    out.extend_from_slice(x);
    let rem = out.len() % w;
    if rem != 0 {
        out.resize(out.len() + w - rem, 0);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_encode_examples() {
        assert_eq!(left_encode(0).as_slice(), &[0x01, 0x00]);
        assert_eq!(left_encode(168).as_slice(), &[0x01, 0xa8]);
        assert_eq!(left_encode(256).as_slice(), &[0x02, 0x01, 0x00]);
        assert_eq!(
            left_encode(u64::MAX).as_slice(),
            &[0x08, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]
        );
    }

    #[test]
    fn right_encode_examples() {
        assert_eq!(right_encode(0).as_slice(), &[0x00, 0x01]);
        assert_eq!(right_encode(256).as_slice(), &[0x01, 0x00, 0x02]);
        assert_eq!(right_encode(0x0102_0304).as_slice(), &[0x01, 0x02, 0x03, 0x04, 0x04]);
    }

    #[test]
    fn encode_string_prefixes_bit_length() {
        assert_eq!(encode_string(b""), vec![0x01, 0x00]);
        assert_eq!(encode_string(b"ab"), vec![0x01, 0x10, b'a', b'b']);
        let long = vec![0x5a; 32];
        let encoded = encode_string(&long);
        assert_eq!(&encoded[..3], &[0x02, 0x01, 0x00]);
        assert_eq!(&encoded[3..], &long[..]);
    }

    #[test]
    fn bytepad_pads_to_width() {
        let padded = bytepad(&[0xaa, 0xbb], 8);
        assert_eq!(padded, vec![0x01, 0x08, 0xaa, 0xbb, 0, 0, 0, 0]);

        // Already aligned input gets no extra block.
        let aligned = bytepad(&[0u8; 6], 8);
        assert_eq!(aligned.len(), 8);

        let rate = bytepad(&encode_string(b"TupleHash"), 168);
        assert_eq!(rate.len(), 168);
        assert_eq!(&rate[..4], &[0x01, 0xa8, 0x01, 0x48]);
    }
}
