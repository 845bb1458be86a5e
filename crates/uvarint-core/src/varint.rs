// crates/uvarint-core/src/varint.rs
//
// Unsigned varint (multiformats unsigned-varint / protobuf base-128):
//   7 data bits per byte, least-significant group first,
//   0x80 set on every byte except the last.

use crate::error::{rejected, Result, VarintError};
use crate::uint::Uint;

const DATA_MASK: u8 = 0x7F;
const CONTINUATION: u8 = 0x80;

/// Encode `value` into a fresh buffer.
pub fn encode<T: Uint>(value: T) -> Vec<u8> {
    let mut out = Vec::with_capacity(encoded_len(value));
    encode_into(value, &mut out);
    out
}

/// Append the encoding of `value` to `out`, returning the number of bytes written.
pub fn encode_into<T: Uint>(value: T, out: &mut Vec<u8>) -> usize {
    let mut v = value.to_u128();
    if v == 0 {
        out.push(0x00);
        return 1;
    }

    let start = out.len();
    while v != 0 {
        let mut byte = (v as u8) & DATA_MASK;
        v >>= 7;
        if v != 0 {
            byte |= CONTINUATION;
        }
        out.push(byte);
    }
    out.len() - start
}

/// Length of the minimal encoding of `value`.
pub fn encoded_len<T: Uint>(value: T) -> usize {
    let v = value.to_u128();
    if v == 0 {
        return 1;
    }
    let bits = u128::BITS - v.leading_zeros();
    bits.div_ceil(7) as usize
}

/// Encode a signed value, rejecting negatives.
pub fn try_encode(value: i128) -> Result<Vec<u8>> {
    let v = u128::try_from(value).map_err(|_| VarintError::InvalidInput { value })?;
    Ok(encode(v))
}

/// Decode the varint at the start of `bytes`.
///
/// Returns the value and the number of bytes consumed. Bytes after the
/// terminating byte are left alone. Redundant high-order zero groups are
/// accepted; use [`decode_canonical`] to reject them.
pub fn decode<T: Uint>(bytes: &[u8]) -> Result<(T, usize)> {
    let mut acc: u128 = 0;
    let mut shift: u32 = 0;
    // Bits lost past u128 only matter once the varint terminates.
    let mut overflowed = false;

    for (i, &b) in bytes.iter().enumerate() {
        let low = (b & DATA_MASK) as u128;
        if low != 0 {
            if shift >= u128::BITS || ((low << shift) >> shift) != low {
                overflowed = true;
            } else {
                acc |= low << shift;
            }
        }

        if b & CONTINUATION == 0 {
            let value = T::from_u128(acc)
                .filter(|_| !overflowed)
                .ok_or_else(|| rejected(VarintError::Overflow { bits: T::BITS }))?;
            return Ok((value, i + 1));
        }
        shift = shift.saturating_add(7);
    }

    Err(rejected(VarintError::TruncatedInput {
        consumed: bytes.len(),
    }))
}

/// Like [`decode`], but only accepts the minimal encoding of the value.
pub fn decode_canonical<T: Uint>(bytes: &[u8]) -> Result<(T, usize)> {
    let (value, consumed) = decode(bytes)?;
    if consumed > 1 && bytes[consumed - 1] == 0x00 {
        return Err(rejected(VarintError::NonCanonicalEncoding { len: consumed }));
    }
    Ok((value, consumed))
}

/// True if `bytes` is exactly one minimal varint, nothing more.
pub fn is_canonical(bytes: &[u8]) -> bool {
    let Some((&last, rest)) = bytes.split_last() else {
        return false;
    };
    last & CONTINUATION == 0
        && rest.iter().all(|&b| b & CONTINUATION != 0)
        && (rest.is_empty() || last != 0x00)
}

/// Decode one varint from the front of `input` and advance past it.
///
/// `input` is unchanged on error.
pub fn read<T: Uint>(input: &mut &[u8]) -> Result<T> {
    let rest = *input;
    let (value, consumed) = decode(rest)?;
    *input = &rest[consumed..];
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_single_byte() {
        assert_eq!(encode(0u64), vec![0x00]);
        assert_eq!(encoded_len(0u8), 1);
        assert_eq!(decode::<u64>(&[0x00]).unwrap(), (0, 1));
    }

    #[test]
    fn encode_into_appends() {
        let mut out = vec![0xAA];
        assert_eq!(encode_into(300u32, &mut out), 2);
        assert_eq!(out, vec![0xAA, 0xAC, 0x02]);
    }

    #[test]
    fn try_encode_rejects_negative() {
        assert_eq!(try_encode(-1), Err(VarintError::InvalidInput { value: -1 }));
        assert_eq!(try_encode(300).unwrap(), vec![0xAC, 0x02]);
    }

    #[test]
    fn decode_stops_at_terminator() {
        assert_eq!(decode::<u32>(&[0xAC, 0x02, 0xFF, 0xFF]).unwrap(), (300, 2));
    }

    #[test]
    fn truncated_reports_bytes_seen() {
        assert_eq!(
            decode::<u64>(&[]),
            Err(VarintError::TruncatedInput { consumed: 0 })
        );
        assert_eq!(
            decode::<u64>(&[0x80, 0x80]),
            Err(VarintError::TruncatedInput { consumed: 2 })
        );
    }

    #[test]
    fn canonical_forms() {
        assert!(is_canonical(&[0x00]));
        assert!(is_canonical(&[0xAC, 0x02]));
        assert!(!is_canonical(&[]));
        assert!(!is_canonical(&[0x80, 0x00]));
        assert!(!is_canonical(&[0xFF, 0x80, 0x00]));
        assert!(!is_canonical(&[0x01, 0x02]));
        assert!(!is_canonical(&[0x80]));
    }

    #[test]
    fn read_leaves_input_on_error() {
        let buf = [0x80u8];
        let mut input: &[u8] = &buf;
        assert!(read::<u32>(&mut input).is_err());
        assert_eq!(input.len(), 1);
    }
}
