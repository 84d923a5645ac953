//! The cubic extension field `X = B[x] / (x^3 - x + 1)`.

use crate::error::{Error, Result};
use crate::field::B;

/// An element `c0 + c1*x + c2*x^2` of the cubic extension of the Goldilocks
/// field by the irreducible polynomial `x^3 - x + 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct X {
    pub c0: B,
    pub c1: B,
    pub c2: B,
}

impl X {
    pub const ZERO: X = X::new(B::ZERO, B::ZERO, B::ZERO);
    pub const ONE: X = X::new(B::ONE, B::ZERO, B::ZERO);

    #[inline]
    pub const fn new(c0: B, c1: B, c2: B) -> X {
        X { c0, c1, c2 }
    }

    /// Embeds a base-field element as the constant extension element `(b, 0, 0)`.
    #[inline]
    pub const fn new_const(b: B) -> X {
        X::new(b, B::ZERO, B::ZERO)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero() && self.c2.is_zero()
    }

    #[inline]
    pub fn add(&self, rhs: &X) -> X {
        X::new(self.c0 + rhs.c0, self.c1 + rhs.c1, self.c2 + rhs.c2)
    }

    #[inline]
    pub fn sub(&self, rhs: &X) -> X {
        X::new(self.c0 - rhs.c0, self.c1 - rhs.c1, self.c2 - rhs.c2)
    }

    #[inline]
    pub fn neg(&self) -> X {
        X::new(-self.c0, -self.c1, -self.c2)
    }

    /// Polynomial multiplication reduced modulo `x^3 - x + 1`: multiplying
    /// out to degree 4 and folding `x^3 -> x - 1`, `x^4 -> x^2 - x`.
    ///
    /// With `a = self.c2, b = self.c1, c = self.c0` and `d = rhs.c2, e =
    /// rhs.c1, f = rhs.c0`:
    ///   r0 = cf - ae - bd
    ///   r1 = bf + ce - ad + ae + bd
    ///   r2 = af + be + cd + ad
    pub fn mul(&self, rhs: &X) -> X {
        let (a, b, c) = (self.c2, self.c1, self.c0);
        let (d, e, f) = (rhs.c2, rhs.c1, rhs.c0);

        let r0 = c * f - a * e - b * d;
        let r1 = b * f + c * e - a * d + a * e + b * d;
        let r2 = a * f + b * e + c * d + a * d;

        X::new(r0, r1, r2)
    }

    /// Multiplies by a base-field scalar, coefficient-wise.
    #[inline]
    pub fn mul_base(&self, scalar: &B) -> X {
        X::new(self.c0 * *scalar, self.c1 * *scalar, self.c2 * *scalar)
    }

    /// Inverts via the adjugate of the "multiply by `t`" linear map on the
    /// basis `{1, x, x^2}`.
    ///
    /// For `t = c0 + c1*x + c2*x^2`, multiplication by `t` sends `1, x, x^2`
    /// to (after folding `x^3 -> x - 1`, `x^4 -> x^2 - x`):
    ///   t*1   = c0 + c1*x + c2*x^2
    ///   t*x   = -c2 + (c0+c2)*x + c1*x^2
    ///   t*x^2 = -c1 + (c1-c2)*x + (c0+c2)*x^2
    /// i.e. the matrix (columns are the images above, in the `1,x,x^2` basis)
    ///   M = [ c0,    -c2,    -c1    ]
    ///       [ c1,    c0+c2,  c1-c2  ]
    ///       [ c2,    c1,     c0+c2  ]
    /// `t` is invertible iff `N = det(M)` is nonzero, and `t^-1` is the
    /// coordinate vector solving `M * t^-1 = (1,0,0)`, i.e. the first column
    /// of `adj(M)` divided by `N`. Expanding the cofactors of row 0 gives
    ///   d0 = (c0+c2)^2 - c1^2 + c1*c2
    ///   d1 = -(c0*c1 + c2^2)
    ///   d2 = c1^2 - c0*c2 - c2^2
    ///   N  = c0*d0 - c2*d1 - c1*d2
    /// and `t^-1 = (d0, d1, d2) * N^-1`.
    pub fn inverse(&self) -> Result<X> {
        if self.is_zero() {
            return Err(Error::InverseOfZero);
        }

        let (c0, c1, c2) = (self.c0, self.c1, self.c2);

        let d0 = (c0 + c2) * (c0 + c2) - c1 * c1 + c1 * c2;
        let d1 = -(c0 * c1 + c2 * c2);
        let d2 = c1 * c1 - c0 * c2 - c2 * c2;

        let n = c0 * d0 - c2 * d1 - c1 * d2;
        let n_inv = n.inverse().map_err(|_| Error::InverseOfZero)?;

        Ok(X::new(d0, d1, d2).mul_base(&n_inv))
    }

    pub fn div(&self, rhs: &X) -> Result<X> {
        Ok(self.mul(&rhs.inverse()?))
    }

    /// Left-to-right square-and-multiply exponentiation, `0^0 = ONE`.
    pub fn mod_pow_u64(&self, e: u64) -> X {
        if e == 0 {
            return X::ONE;
        }
        let bit_length = 64 - e.leading_zeros();
        let mut acc = X::ONE;
        for i in 0..bit_length {
            acc = acc.mul(&acc);
            if (e >> (bit_length - 1 - i)) & 1 != 0 {
                acc = acc.mul(self);
            }
        }
        acc
    }

    /// Lifts `B`'s primitive `n`-th root of unity into `X` via [`X::new_const`].
    pub fn primitive_root_of_unity(n: u64) -> Result<X> {
        Ok(X::new_const(B::primitive_root_of_unity(n)?))
    }

    /// Powers of `self`, starting at `ONE`, stopping when the running
    /// product returns to `ONE` or `max` elements have been produced.
    pub fn cyclic_group_elements(&self, max: Option<usize>) -> Vec<X> {
        if self.is_zero() {
            return vec![X::ZERO];
        }
        let mut out = vec![X::ONE];
        if *self == X::ONE {
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
            if acc == X::ONE {
                break;
            }
            acc = acc.mul(self);
        }
        out
    }

    /// Projects back to `B`; fails unless `c1 == c2 == 0`.
    pub fn unlift(&self) -> Result<B> {
        if self.c1.is_zero() && self.c2.is_zero() {
            Ok(self.c0)
        } else {
            Err(Error::InvalidUnlift)
        }
    }
}

impl B {
    /// Embeds `self` as the extension element `(self, 0, 0)`.
    #[inline]
    pub const fn lift(&self) -> X {
        X::new_const(*self)
    }
}

impl core::ops::Add for X {
    type Output = X;
    #[inline]
    fn add(self, rhs: X) -> X {
        X::add(&self, &rhs)
    }
}

impl core::ops::Sub for X {
    type Output = X;
    #[inline]
    fn sub(self, rhs: X) -> X {
        X::sub(&self, &rhs)
    }
}

impl core::ops::Mul for X {
    type Output = X;
    #[inline]
    fn mul(self, rhs: X) -> X {
        X::mul(&self, &rhs)
    }
}

impl core::ops::Neg for X {
    type Output = X;
    #[inline]
    fn neg(self) -> X {
        X::neg(&self)
    }
}

impl core::ops::AddAssign for X {
    #[inline]
    fn add_assign(&mut self, rhs: X) {
        *self = *self + rhs;
    }
}

impl core::ops::SubAssign for X {
    #[inline]
    fn sub_assign(&mut self, rhs: X) {
        *self = *self - rhs;
    }
}

impl core::ops::MulAssign for X {
    #[inline]
    fn mul_assign(&mut self, rhs: X) {
        *self = *self * rhs;
    }
}

impl Default for X {
    fn default() -> Self {
        X::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(n: u64) -> X {
        X::new(B::from_value(n), B::from_value(n + 1), B::from_value(n + 2))
    }

    #[test]
    fn field_axioms() {
        let a = sample(3);
        let b = sample(101);
        let c = sample(9001);
        assert_eq!(a + b, b + a);
        assert_eq!(a * b, b * a);
        assert_eq!((a + b) + c, a + (b + c));
        assert_eq!((a * b) * c, a * (b * c));
        assert_eq!(a * (b + c), a * b + a * c);
        assert_eq!(a + X::ZERO, a);
        assert_eq!(a * X::ONE, a);
    }

    #[test]
    fn inverse_roundtrip() {
        for n in [1u64, 2, 7, 123456, u64::MAX >> 3] {
            let t = sample(n);
            let inv = t.inverse().unwrap();
            assert_eq!(t * inv, X::ONE, "n = {n}");
        }
    }

    #[test]
    fn inverse_regression_one_plus_x() {
        // t = 1 + x; the norm-based formula once transcribed directly from
        // spec.md §4.3 (d0=c0^2-c1c2 etc., N=d0^2+d1^2+d2^2) produced
        // (1/2, 1/2, 0) here, whose product with t is not ONE.
        let t = X::new(B::ONE, B::ONE, B::ZERO);
        let inv = t.inverse().unwrap();
        assert_eq!(t * inv, X::ONE);
    }

    #[test]
    fn inverse_of_zero_fails() {
        assert!(X::ZERO.inverse().is_err());
    }

    #[test]
    fn lift_unlift_roundtrip() {
        let b = B::from_value(42);
        let lifted = b.lift();
        assert_eq!(lifted, X::new_const(b));
        assert_eq!(lifted.unlift().unwrap(), b);

        let non_liftable = sample(1);
        assert!(non_liftable.unlift().is_err());
    }

    #[test]
    fn lift_preserves_operations() {
        let a = B::from_value(11);
        let b = B::from_value(22);
        assert_eq!((a + b).lift(), a.lift() + b.lift());
        assert_eq!((a * b).lift(), a.lift() * b.lift());
    }

    #[test]
    fn primitive_root_lift() {
        let root_b = B::primitive_root_of_unity(8).unwrap();
        let root_x = X::primitive_root_of_unity(8).unwrap();
        assert_eq!(root_x, X::new_const(root_b));
        assert_eq!(root_x.mod_pow_u64(8), X::ONE);
    }

    #[test]
    fn cyclic_group_edge_cases() {
        assert_eq!(X::ZERO.cyclic_group_elements(None), vec![X::ZERO]);
        assert_eq!(X::ONE.cyclic_group_elements(None), vec![X::ONE]);
    }
}
