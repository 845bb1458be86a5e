//! `uvarint-core`: the unsigned-varint wire format.
//!
//! Little-endian base-128 groups, 7 data bits per byte, high bit set on every
//! byte but the last. Interoperable with multiformats unsigned-varint and
//! protobuf varints.
//!
//! ```
//! let bytes = uvarint_core::encode(300u32);
//! assert_eq!(bytes, [0xAC, 0x02]);
//! assert_eq!(uvarint_core::decode::<u32>(&bytes).unwrap(), (300, 2));
//! ```

pub mod error;
pub mod uint;
pub mod varint;

pub use crate::error::{Result, VarintError};
pub use crate::uint::Uint;
pub use crate::varint::{
    decode, decode_canonical, encode, encode_into, encoded_len, is_canonical, read, try_encode,
};
