//! Decimal/hex text parsing and canonical display for [`B`].

use core::fmt;
use core::str::FromStr;

use super::B;
use crate::error::{Error, Result};
use crate::montgomery::P;

impl B {
    /// Parses a decimal literal: optional leading `+`/`-`, ASCII digits,
    /// surrounding whitespace stripped. `-k` denotes `p - k mod p`. Rejects
    /// empty input, non-digit characters, magnitudes spanning more than 126
    /// bits, and magnitudes `>= p`.
    pub fn parse_decimal(s: &str) -> Result<B> {
        let s = s.trim();
        let (negative, digits) = match s.as_bytes().first() {
            Some(b'+') => (false, &s[1..]),
            Some(b'-') => (true, &s[1..]),
            _ => (false, s),
        };
        if digits.is_empty() {
            return Err(Error::InvalidDigit);
        }

        let mut magnitude: u128 = 0;
        for ch in digits.chars() {
            let d = ch.to_digit(10).ok_or(Error::InvalidDigit)? as u128;
            magnitude = magnitude
                .checked_mul(10)
                .and_then(|m| m.checked_add(d))
                .ok_or(Error::ParseOverflow)?;
        }

        // Bit-length overflow: more than 126 bits of precision.
        if magnitude >> 126 != 0 {
            return Err(Error::ParseOverflow);
        }
        // Out-of-canonical-range: |v| >= p.
        if magnitude >= P as u128 {
            return Err(Error::NotCanonical);
        }

        let magnitude = magnitude as u64;
        if negative {
            Ok(B::ZERO.sub(&B::from_value(magnitude)))
        } else {
            Ok(B::from_value(magnitude))
        }
    }

    /// Parses a hexadecimal literal with an optional `0x`/`0X` prefix,
    /// case-insensitive digits. Rejects empty input, non-hex-digit
    /// characters, and magnitudes spanning more than 127 bits; the parsed
    /// 128-bit magnitude is then reduced modulo `p`.
    pub fn parse_hex(s: &str) -> Result<B> {
        let s = s.trim();
        let digits = if s.len() >= 2 && s.as_bytes()[0] == b'0' && (s.as_bytes()[1] | 0x20) == b'x'
        {
            &s[2..]
        } else {
            s
        };
        if digits.is_empty() {
            return Err(Error::InvalidHexChar);
        }

        let mut magnitude: u128 = 0;
        for ch in digits.chars() {
            let d = ch.to_digit(16).ok_or(Error::InvalidHexChar)? as u128;
            if magnitude >> 124 != 0 {
                return Err(Error::ParseOverflow);
            }
            magnitude = (magnitude << 4) | d;
        }
        if magnitude >> 127 != 0 {
            return Err(Error::ParseOverflow);
        }

        Ok(B::from(magnitude))
    }
}

impl FromStr for B {
    type Err = Error;

    fn from_str(s: &str) -> Result<B> {
        let t = s.trim();
        let looks_hex = t.len() >= 2 && t.as_bytes()[0] == b'0' && (t.as_bytes()[1] | 0x20) == b'x';
        if looks_hex {
            B::parse_hex(t)
        } else {
            B::parse_decimal(t)
        }
    }
}

impl fmt::Display for B {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.value();
        if v <= 256 {
            write!(f, "{v}")
        } else if v >= P - 256 {
            write!(f, "-{}", P - v)
        } else {
            write!(f, "{v:020}")
        }
    }
}
