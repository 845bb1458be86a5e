// crates/uvarint-core/src/uint.rs
//
// Native unsigned widths the codec reads and writes. Every width widens
// losslessly into u128, which is where the bit-packing actually happens.

mod sealed {
    pub trait Sealed {}
}

pub trait Uint: Copy + sealed::Sealed {
    /// Width of the type in bits.
    const BITS: u32;

    /// Longest minimal encoding of this type: ceil(BITS / 7).
    const MAX_ENCODED_LEN: usize;

    fn to_u128(self) -> u128;

    /// Narrow back from u128, `None` if the value does not fit.
    fn from_u128(v: u128) -> Option<Self>;
}

macro_rules! impl_uint {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl Uint for $t {
                const BITS: u32 = <$t>::BITS;
                const MAX_ENCODED_LEN: usize = (<$t>::BITS as usize + 6) / 7;

                #[inline]
                fn to_u128(self) -> u128 {
                    self as u128
                }

                #[inline]
                fn from_u128(v: u128) -> Option<Self> {
                    <$t>::try_from(v).ok()
                }
            }
        )*
    };
}

impl_uint!(u8, u16, u32, u64, u128, usize);
