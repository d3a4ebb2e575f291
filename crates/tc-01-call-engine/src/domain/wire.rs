//! # Wire Codec
//!
//! Fixed-size, little-endian, tightly packed encoding. Every type that
//! crosses the wire knows its exact size at compile time, so a payload can
//! never vary in length for a given operation.

use super::errors::DecodeError;
use bytes::{Buf, BufMut, BytesMut};

/// A value with a fixed, packed binary layout.
pub trait Wire: Sized {
    /// Exact encoded size in bytes.
    const SIZE: usize;

    /// Append the encoding to `out`.
    fn encode(&self, out: &mut BytesMut);

    /// Read one value from the front of `buf`, advancing it.
    fn decode(buf: &mut &[u8]) -> Result<Self, DecodeError>;

    /// Encode into a fresh buffer of exactly [`Wire::SIZE`] bytes.
    fn to_bytes(&self) -> Vec<u8> {
        let mut out = BytesMut::with_capacity(Self::SIZE);
        self.encode(&mut out);
        debug_assert_eq!(out.len(), Self::SIZE);
        out.to_vec()
    }

    /// Decode from a buffer that must be exactly [`Wire::SIZE`] bytes long.
    fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        if bytes.len() != Self::SIZE {
            return Err(DecodeError::SizeMismatch {
                expected: Self::SIZE,
                actual: bytes.len(),
            });
        }
        let mut cursor = bytes;
        Self::decode(&mut cursor)
    }
}

/// Fail with [`DecodeError::Truncated`] unless `buf` holds `needed` bytes.
pub fn ensure_remaining(buf: &[u8], needed: usize) -> Result<(), DecodeError> {
    if buf.len() < needed {
        return Err(DecodeError::Truncated {
            needed,
            remaining: buf.len(),
        });
    }
    Ok(())
}

macro_rules! wire_int {
    ($($ty:ty => $put:ident, $get:ident;)*) => {
        $(
            impl Wire for $ty {
                const SIZE: usize = std::mem::size_of::<$ty>();

                fn encode(&self, out: &mut BytesMut) {
                    out.$put(*self);
                }

                fn decode(buf: &mut &[u8]) -> Result<Self, DecodeError> {
                    ensure_remaining(buf, Self::SIZE)?;
                    Ok(buf.$get())
                }
            }
        )*
    };
}

wire_int! {
    u8 => put_u8, get_u8;
    i8 => put_i8, get_i8;
    u16 => put_u16_le, get_u16_le;
    i16 => put_i16_le, get_i16_le;
    u32 => put_u32_le, get_u32_le;
    i32 => put_i32_le, get_i32_le;
    u64 => put_u64_le, get_u64_le;
    i64 => put_i64_le, get_i64_le;
}

impl Wire for bool {
    const SIZE: usize = 1;

    fn encode(&self, out: &mut BytesMut) {
        out.put_u8(u8::from(*self));
    }

    fn decode(buf: &mut &[u8]) -> Result<Self, DecodeError> {
        ensure_remaining(buf, 1)?;
        match buf.get_u8() {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(DecodeError::InvalidField(format!(
                "bool byte must be 0 or 1, got {}",
                other
            ))),
        }
    }
}

/// Placeholder input for functions that take no arguments.
impl Wire for () {
    const SIZE: usize = 0;

    fn encode(&self, _out: &mut BytesMut) {}

    fn decode(_buf: &mut &[u8]) -> Result<Self, DecodeError> {
        Ok(())
    }
}

impl<T: Wire, const N: usize> Wire for [T; N] {
    const SIZE: usize = T::SIZE * N;

    fn encode(&self, out: &mut BytesMut) {
        for item in self {
            item.encode(out);
        }
    }

    fn decode(buf: &mut &[u8]) -> Result<Self, DecodeError> {
        ensure_remaining(buf, Self::SIZE)?;
        let items = (0..N)
            .map(|_| T::decode(buf))
            .collect::<Result<Vec<T>, DecodeError>>()?;
        items.try_into().map_err(|v: Vec<T>| DecodeError::Truncated {
            needed: N,
            remaining: v.len(),
        })
    }
}

/// Declare a struct whose [`Wire`] encoding is its fields in order, packed.
///
/// ```rust,ignore
/// wire_struct! {
///     /// Procedure 6 input.
///     #[derive(Clone, Debug, PartialEq, Eq)]
///     pub struct ListInMarketInput {
///         pub price: u64,
///         pub item_id: u32,
///     }
/// }
/// assert_eq!(ListInMarketInput::SIZE, 12);
/// ```
#[macro_export]
macro_rules! wire_struct {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $fvis:vis $field:ident : $ty:ty
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$fmeta])*
                $fvis $field: $ty,
            )+
        }

        impl $crate::Wire for $name {
            const SIZE: usize = 0 $( + <$ty as $crate::Wire>::SIZE )+;

            fn encode(&self, out: &mut $crate::bytes::BytesMut) {
                $( $crate::Wire::encode(&self.$field, out); )+
            }

            fn decode(
                buf: &mut &[u8],
            ) -> ::core::result::Result<Self, $crate::DecodeError> {
                ::core::result::Result::Ok(Self {
                    $( $field: <$ty as $crate::Wire>::decode(buf)?, )+
                })
            }
        }
    };
}
