//! The Montgomery reduction kernel underlying every base-field operation.
//!
//! Exploits the Goldilocks prime's shape `p = φ² − φ + 1` with `φ = 2^32` to
//! reduce a 128-bit product to a 64-bit residue using only 64-bit
//! add/sub/shift and a handful of overflow checks — no division, no
//! assembly.

/// `φ − 1 = 2^32 − 1`, i.e. the low 32 bits of `u32::MAX` extended to `u64`.
pub(crate) const EPSILON: u64 = (1 << 32) - 1;

pub(crate) const P: u64 = 0xFFFF_FFFF_0000_0001;

/// Computes `x · 2^-64 mod p` for `x < p · 2^64`.
///
/// This is the Montgomery reduction used by every base-field
/// multiplication and by conversion into Montgomery form. It follows the
/// shape described for this prime: split `x` into high/low 64-bit halves,
/// fold the low half against its own high 32 bits, subtract that from the
/// high half, and correct for the borrow with a single multiple of
/// `2^32 − 1`. Every step is expressed as wrapping arithmetic plus an
/// overflow/borrow flag so that the result does not depend on a data
/// dependent branch over the modulus.
#[inline]
pub(crate) const fn monty_reduce(x: u128) -> u64 {
    let x_lo = x as u64;
    let x_hi = (x >> 64) as u64;

    let (a, e) = x_lo.overflowing_add(x_lo << 32);
    let b = a.wrapping_sub(a >> 32).wrapping_sub(e as u64);

    let (r, c) = x_hi.overflowing_sub(b);
    r.wrapping_sub(EPSILON.wrapping_mul(c as u64))
}

/// Computes `x mod p` directly (not in Montgomery form), for an arbitrary
/// 128-bit `x`. Used only when converting from untrusted wide integers,
/// where the input is not known to already be a Montgomery residue.
///
/// Splits `x` into its low 64 bits and the two 32-bit halves of its high
/// 64 bits, folds them together the same way `monty_reduce` does, and then
/// performs the one conditional subtraction needed to land in `[0, p)`.
#[inline]
pub(crate) const fn mod_reduce(x: u128) -> u64 {
    let x_lo = x as u64;
    let x_hi = (x >> 64) as u64;
    let x_hi_hi = x_hi >> 32;
    let x_hi_lo = x_hi & EPSILON;

    let (t0, borrow) = x_lo.overflowing_sub(x_hi_hi);
    let t0 = t0.wrapping_sub(EPSILON.wrapping_mul(borrow as u64));

    let t1 = x_hi_lo.wrapping_mul(EPSILON);

    let (t2, overflow) = t0.overflowing_add(t1);
    let t2 = t2.wrapping_add(EPSILON.wrapping_mul(overflow as u64));

    if t2 >= P {
        t2 - P
    } else {
        t2
    }
}
