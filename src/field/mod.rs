//! The Goldilocks base field, `B`, stored in Montgomery form.
//!
//! sage: p = 2^64 - 2^32 + 1
//! sage: GF(p).is_prime_field()
//! True

mod codec;
mod parse;
mod roots;

use crate::error::{Error, Result};
use crate::montgomery::{mod_reduce, monty_reduce, P};

/// An element of the Goldilocks field, `GF(p)` with `p = 2^64 - 2^32 + 1`.
///
/// Internally this holds `m = a * 2^64 mod p` for the represented value
/// `a`; every public constructor and arithmetic operation maintains the
/// invariant `m < p`.
#[derive(Clone, Copy)]
pub struct B(u64);

/// `2^128 mod p`, the factor that converts a canonical value into Montgomery
/// form when multiplied through `monty_reduce`.
const R2: u64 = 0xFFFF_FFFE_0000_0001;

impl B {
    /// The additive identity.
    pub const ZERO: B = B(0);

    /// The multiplicative identity, i.e. `1` in Montgomery form (`R mod p`).
    pub const ONE: B = B::from_value_const(1);

    /// `p - 1`, the largest canonical value.
    pub const MAX: B = B::from_value_const(P - 1);

    /// `-2^-1 mod p`, in canonical form `0x7FFFFFFF80000000`.
    ///
    /// Carried over from the field's prime-constant data model; no public
    /// operation in this crate currently consumes it, but it is part of the
    /// field's fixed constant set (alongside `p`, `p - 1`, and `R2`).
    pub const MINUS_TWO_INV: B = B::from_value_const(0x7FFF_FFFF_8000_0000);

    /// Converts a non-negative integer into its Montgomery-form field
    /// element, reducing modulo `p` if the value is not already canonical.
    #[inline]
    pub const fn from_value(v: u64) -> B {
        B::from_value_const(v)
    }

    #[inline]
    const fn from_value_const(v: u64) -> B {
        let v = if v >= P { v - P } else { v };
        B(monty_reduce((v as u128) * (R2 as u128)))
    }

    /// Accepts `v` only if it is already a canonical value (`v < p`).
    #[inline]
    pub fn try_from_canonical(v: u64) -> Result<B> {
        if v >= P {
            Err(Error::NotCanonical)
        } else {
            Ok(B::from_value(v))
        }
    }

    /// The unique canonical representative of `self` in `[0, p)`.
    #[inline]
    pub const fn value(&self) -> u64 {
        monty_reduce(self.0 as u128)
    }

    #[inline]
    pub(crate) const fn from_montgomery(m: u64) -> B {
        B(m)
    }

    #[inline]
    pub(crate) const fn montgomery_repr(&self) -> u64 {
        self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// `self + rhs`, computed directly on the Montgomery residues (addition
    /// commutes with the Montgomery encoding since it is linear).
    #[inline]
    pub fn add(&self, rhs: &B) -> B {
        const EPSILON: u64 = (1 << 32) - 1;
        // a + b = a - (p - b), with a wraparound correction on borrow.
        let (x, borrow) = self.0.overflowing_sub(P - rhs.0);
        B(x.wrapping_sub(EPSILON.wrapping_mul(borrow as u64)))
    }

    /// `self - rhs`.
    #[inline]
    pub fn sub(&self, rhs: &B) -> B {
        const EPSILON: u64 = (1 << 32) - 1;
        let (x, borrow) = self.0.overflowing_sub(rhs.0);
        B(x.wrapping_sub(EPSILON.wrapping_mul(borrow as u64)))
    }

    /// `-self`.
    #[inline]
    pub fn neg(&self) -> B {
        B::ZERO.sub(self)
    }

    /// `self * rhs`.
    #[inline]
    pub fn mul(&self, rhs: &B) -> B {
        B(monty_reduce((self.0 as u128) * (rhs.0 as u128)))
    }

    /// `self * self`.
    #[inline]
    pub fn square(&self) -> B {
        self.mul(self)
    }

    /// The multiplicative inverse of `self`, via the fixed addition chain
    /// for the exponent `p - 2`. Fails on the zero element.
    ///
    /// `p - 2` in binary is a run of 31 ones, a zero, then 32 ones; the
    /// chain below builds up `t2, t3, t6, t12, t24, t31` by repeated
    /// squaring-and-multiplying, then squares 32 more times before a final
    /// multiply, reproducing exactly that bit pattern without a general
    /// `mod_pow`.
    pub fn inverse(&self) -> Result<B> {
        if self.is_zero() {
            return Err(Error::InverseOfZero);
        }
        Ok(self.inverse_unchecked())
    }

    /// Identical to [`B::inverse`] except it returns `ZERO` on zero input
    /// instead of failing.
    pub fn inverse_or_zero(&self) -> B {
        if self.is_zero() {
            B::ZERO
        } else {
            self.inverse_unchecked()
        }
    }

    fn inverse_unchecked(&self) -> B {
        fn exp_acc(base: B, tail: B, squarings: u32) -> B {
            let mut acc = base;
            for _ in 0..squarings {
                acc = acc.square();
            }
            acc.mul(&tail)
        }

        // base^11
        let t2 = self.square().mul(self);
        // base^111
        let t3 = t2.square().mul(self);
        // base^111111 (6 ones)
        let t6 = exp_acc(t3, t3, 3);
        // base^111111111111 (12 ones)
        let t12 = exp_acc(t6, t6, 6);
        // base^111111111111111111111111 (24 ones)
        let t24 = exp_acc(t12, t12, 12);
        // base^1111111111111111111111111111111 (31 ones)
        let t30 = exp_acc(t24, t6, 6);
        let t31 = t30.square().mul(self);
        // 31 ones, a zero, then 32 ones
        let t63 = exp_acc(t31, t31, 32);
        t63.square().mul(self)
    }

    /// `self / rhs`. Fails if `rhs` is zero.
    pub fn div(&self, rhs: &B) -> Result<B> {
        Ok(self.mul(&rhs.inverse()?))
    }

    /// Left-to-right square-and-multiply exponentiation, with `0^0 = 1` by
    /// convention.
    pub fn mod_pow_u64(&self, e: u64) -> B {
        if e == 0 {
            return B::ONE;
        }
        let bit_length = 64 - e.leading_zeros();
        let mut acc = B::ONE;
        for i in 0..bit_length {
            acc = acc.square();
            if (e >> (bit_length - 1 - i)) & 1 != 0 {
                acc = acc.mul(self);
            }
        }
        acc
    }

    /// [`B::mod_pow_u64`] with a zero-extended 32-bit exponent.
    #[inline]
    pub fn mod_pow_u32(&self, e: u32) -> B {
        self.mod_pow_u64(e as u64)
    }

    /// The fixed multiplicative generator of the field, `7`. Its order is
    /// `p - 1`.
    pub const fn generator() -> B {
        B::from_value_const(7)
    }

    /// Looks up a primitive `n`-th root of unity, for `n = 2^k`, `0 <= k <=
    /// 32`. `n = 0` and `n = 1` both map to `1`.
    pub fn primitive_root_of_unity(n: u64) -> Result<B> {
        roots::primitive_root_of_unity(n)
    }

    /// Returns `[1, g, g^2, ..., g^(ord-1)]` where `g = self`, stopping when
    /// the running product returns to `1` or `max` elements have been
    /// produced (whichever comes first).
    pub fn cyclic_group_elements(&self, max: Option<usize>) -> Vec<B> {
        if self.is_zero() {
            return vec![B::ZERO];
        }
        let mut out = vec![B::ONE];
        if *self == B::ONE {
            return out;
        }
        let mut acc = *self;
        loop {
            if let Some(cap) = max {
                if out.len() >= cap {
                    break;
                }
            }
            out.push(acc);
            if acc == B::ONE {
                break;
            }
            acc = acc.mul(self);
        }
        out
    }

    /// Inverts every element of `seq` using Montgomery's batch-inversion
    /// trick: one field inversion plus `3n` multiplications instead of `n`
    /// inversions. Fails if any element is zero.
    pub fn batch_inversion(seq: &[B]) -> Result<Vec<B>> {
        if seq.is_empty() {
            return Ok(Vec::new());
        }
        if seq.iter().any(B::is_zero) {
            return Err(Error::InverseOfZero);
        }

        // Forward pass: partial products seq[0], seq[0]*seq[1], ...
        let mut partials = Vec::with_capacity(seq.len());
        let mut acc = B::ONE;
        for x in seq {
            acc = acc.mul(x);
            partials.push(acc);
        }

        let mut inv_acc = acc.inverse_unchecked();

        // Backward pass: recover each inverse from the running product.
        let mut out = vec![B::ZERO; seq.len()];
        for i in (0..seq.len()).rev() {
            let prev_partial = if i == 0 { B::ONE } else { partials[i - 1] };
            out[i] = inv_acc.mul(&prev_partial);
            inv_acc = inv_acc.mul(&seq[i]);
        }
        Ok(out)
    }
}

impl PartialEq for B {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl Eq for B {}

impl core::fmt::Debug for B {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "B({})", self.value())
    }
}

impl core::hash::Hash for B {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.value().hash(state);
    }
}

impl Default for B {
    fn default() -> Self {
        B::ZERO
    }
}

impl core::ops::Add for B {
    type Output = B;
    #[inline]
    fn add(self, rhs: B) -> B {
        B::add(&self, &rhs)
    }
}

impl core::ops::Sub for B {
    type Output = B;
    #[inline]
    fn sub(self, rhs: B) -> B {
        B::sub(&self, &rhs)
    }
}

impl core::ops::Mul for B {
    type Output = B;
    #[inline]
    fn mul(self, rhs: B) -> B {
        B::mul(&self, &rhs)
    }
}

impl core::ops::Neg for B {
    type Output = B;
    #[inline]
    fn neg(self) -> B {
        B::neg(&self)
    }
}

impl core::ops::AddAssign for B {
    #[inline]
    fn add_assign(&mut self, rhs: B) {
        *self = *self + rhs;
    }
}

impl core::ops::SubAssign for B {
    #[inline]
    fn sub_assign(&mut self, rhs: B) {
        *self = *self - rhs;
    }
}

impl core::ops::MulAssign for B {
    #[inline]
    fn mul_assign(&mut self, rhs: B) {
        *self = *self * rhs;
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for B {
                #[inline]
                fn from(v: $t) -> B {
                    B::from_value(v as u64)
                }
            }
        )*
    };
}
impl_from_unsigned!(u8, u16, u32, u64);

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for B {
                #[inline]
                fn from(v: $t) -> B {
                    if v < 0 {
                        // -k represents p - k mod p.
                        let k = (v as i64).unsigned_abs();
                        B::ZERO.sub(&B::from_value(k))
                    } else {
                        B::from_value(v as u64)
                    }
                }
            }
        )*
    };
}
impl_from_signed!(i8, i16, i32, i64);

impl From<u128> for B {
    #[inline]
    fn from(v: u128) -> B {
        B::from_value(mod_reduce(v))
    }
}

impl From<i128> for B {
    #[inline]
    fn from(v: i128) -> B {
        if v < 0 {
            let k = v.unsigned_abs();
            B::ZERO.sub(&B::from(k))
        } else {
            B::from(v as u128)
        }
    }
}

macro_rules! impl_try_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl TryFrom<B> for $t {
                type Error = Error;
                fn try_from(b: B) -> Result<$t> {
                    let v = b.value();
                    <$t>::try_from(v).map_err(|_| Error::OutOfRange)
                }
            }
        )*
    };
}
impl_try_from_unsigned!(u8, u16, u32, u64);

macro_rules! impl_try_from_signed {
    ($($t:ty),*) => {
        $(
            impl TryFrom<B> for $t {
                type Error = Error;
                fn try_from(b: B) -> Result<$t> {
                    let v = b.value();
                    if v > P / 2 {
                        // Interpret as a negative residue: -(p - v).
                        let magnitude = P - v;
                        let signed = i128::from(magnitude).checked_neg().ok_or(Error::OutOfRange)?;
                        <$t>::try_from(signed).map_err(|_| Error::OutOfRange)
                    } else {
                        <$t>::try_from(v).map_err(|_| Error::OutOfRange)
                    }
                }
            }
        )*
    };
}
impl_try_from_signed!(i8, i16, i32, i64);
