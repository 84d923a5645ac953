//! Raw little-endian codecs for [`B`], enforcing the canonical-range
//! invariant on decode.

use super::B;
use crate::error::{Error, Result};
use crate::montgomery::P;

impl B {
    /// The canonical value as 8 little-endian bytes.
    #[inline]
    pub fn raw_bytes(&self) -> [u8; 8] {
        self.value().to_le_bytes()
    }

    /// Decodes 8 little-endian bytes, rejecting any pattern whose value is
    /// `>= p`.
    #[inline]
    pub fn from_raw_bytes(bytes: [u8; 8]) -> Result<B> {
        let v = u64::from_le_bytes(bytes);
        if v >= P {
            Err(Error::NotCanonical)
        } else {
            Ok(B::from_value(v))
        }
    }

    /// The canonical value as four little-endian 16-bit limbs.
    #[inline]
    pub fn raw_u16s(&self) -> [u16; 4] {
        let v = self.value();
        [
            v as u16,
            (v >> 16) as u16,
            (v >> 32) as u16,
            (v >> 48) as u16,
        ]
    }

    /// Decodes four little-endian 16-bit limbs, with the same range
    /// discipline as [`B::from_raw_bytes`].
    #[inline]
    pub fn from_raw_u16s(limbs: [u16; 4]) -> Result<B> {
        let v = (limbs[0] as u64)
            | ((limbs[1] as u64) << 16)
            | ((limbs[2] as u64) << 32)
            | ((limbs[3] as u64) << 48);
        if v >= P {
            Err(Error::NotCanonical)
        } else {
            Ok(B::from_value(v))
        }
    }
}
