//! The Number-Theoretic Transform engine: in-place, power-of-two-length
//! Cooley-Tukey butterflies over [`B`] or [`X`] sequences, with a
//! bit-reversal-free pair of variants for callers that compose transforms
//! back to back.

use crate::error::{Error, Result};
use crate::extension::X;
use crate::field::B;

/// The operations the butterfly network needs from an element type: field
/// addition/subtraction among themselves, and multiplication by a
/// base-field twiddle. `B` multiplies by itself; `X` multiplies by a scalar
/// coefficient-wise.
pub trait NttElement: Copy {
    fn ntt_add(&self, rhs: &Self) -> Self;
    fn ntt_sub(&self, rhs: &Self) -> Self;
    fn mul_by_base(&self, scalar: &B) -> Self;
}

impl NttElement for B {
    #[inline]
    fn ntt_add(&self, rhs: &Self) -> Self {
        self.add(rhs)
    }
    #[inline]
    fn ntt_sub(&self, rhs: &Self) -> Self {
        self.sub(rhs)
    }
    #[inline]
    fn mul_by_base(&self, scalar: &B) -> Self {
        self.mul(scalar)
    }
}

impl NttElement for X {
    #[inline]
    fn ntt_add(&self, rhs: &Self) -> Self {
        X::add(self, rhs)
    }
    #[inline]
    fn ntt_sub(&self, rhs: &Self) -> Self {
        X::sub(self, rhs)
    }
    #[inline]
    fn mul_by_base(&self, scalar: &B) -> Self {
        X::mul_base(self, scalar)
    }
}

#[inline]
fn check_length(n: usize) -> Result<()> {
    if !n.is_power_of_two() || n as u64 > (1u64 << 32) {
        return Err(Error::InvalidLength);
    }
    Ok(())
}

#[inline]
fn bit_reverse(mut x: u32, bits: u32) -> u32 {
    let mut r = 0u32;
    for _ in 0..bits {
        r = (r << 1) | (x & 1);
        x >>= 1;
    }
    r
}

fn bitreverse_order_unchecked<T: Copy>(seq: &mut [T], bits: u32) {
    let n = seq.len();
    for i in 0..n {
        let j = bit_reverse(i as u32, bits) as usize;
        if j > i {
            seq.swap(i, j);
        }
    }
}

/// In-place reordering where the element at index `i` moves to index
/// `bitreverse(i, log2(n))`. A no-op for `n <= 1`.
pub fn bitreverse_order<T: Copy>(seq: &mut [T]) -> Result<()> {
    let n = seq.len();
    if n <= 1 {
        return Ok(());
    }
    check_length(n)?;
    bitreverse_order_unchecked(seq, n.trailing_zeros());
    Ok(())
}

/// The decimation-in-time butterfly stages alone, assuming `seq` is already
/// in bit-reversed order: stage `s` (0-indexed) uses `w_m = omega^(n /
/// 2m)` for `m = 2^s`, and for each half-block of size `2m` at offset `k`
/// applies `(x[k+j], x[k+j+m]) <- (x[k+j] + w*x[k+j+m], x[k+j] -
/// w*x[k+j+m])` with `w` iterating `w * w_m`.
fn merge_stages<T: NttElement>(seq: &mut [T], omega: B, log_n: u32) {
    let n = seq.len();
    let mut m: usize = 1;
    for _ in 0..log_n {
        let w_m = omega.mod_pow_u64((n / (2 * m)) as u64);
        let two_m = 2 * m;
        let mut k = 0;
        while k < n {
            let mut w = B::ONE;
            for j in 0..m {
                let t = seq[k + j + m].mul_by_base(&w);
                let u = seq[k + j];
                seq[k + j] = u.ntt_add(&t);
                seq[k + j + m] = u.ntt_sub(&t);
                w = w.mul(&w_m);
            }
            k += two_m;
        }
        m = two_m;
    }
}

/// Unchecked forward transform: the caller supplies `omega` and `log2(n)`
/// directly, with no validation or table lookup. Used when the twiddle is
/// already inverted or otherwise precomputed by the caller.
pub fn forward_with_root<T: NttElement>(seq: &mut [T], omega: B, log_n: u32) {
    if seq.len() <= 1 {
        return;
    }
    bitreverse_order_unchecked(seq, log_n);
    merge_stages(seq, omega, log_n);
}

/// Checked forward transform. Fails with [`Error::InvalidLength`] unless
/// `seq.len()` is `0` or a power of two at most `2^32`.
pub fn forward<T: NttElement>(seq: &mut [T]) -> Result<()> {
    let n = seq.len();
    if n == 0 {
        return Ok(());
    }
    check_length(n)?;
    let omega = B::primitive_root_of_unity(n as u64)?;
    forward_with_root(seq, omega, n.trailing_zeros());
    Ok(())
}

/// Checked inverse transform: identical to [`forward`] with `omega`
/// replaced by its inverse, followed by scaling every element by `n^-1`.
pub fn inverse<T: NttElement>(seq: &mut [T]) -> Result<()> {
    let n = seq.len();
    if n == 0 {
        return Ok(());
    }
    check_length(n)?;
    let omega = B::primitive_root_of_unity(n as u64)?;
    let omega_inv = omega.inverse()?;
    forward_with_root(seq, omega_inv, n.trailing_zeros());
    unscale(seq)
}

/// No-swap forward transform: a decimation-in-frequency butterfly network
/// that consumes `seq` in natural order and leaves it in bit-reversed
/// order, without any permutation pass. Composing this with
/// [`bitreverse_order`] reproduces [`forward`].
pub fn forward_noswap<T: NttElement>(seq: &mut [T]) -> Result<()> {
    let n = seq.len();
    if n == 0 {
        return Ok(());
    }
    check_length(n)?;
    if n == 1 {
        return Ok(());
    }
    let omega = B::primitive_root_of_unity(n as u64)?;
    let log_n = n.trailing_zeros();

    let mut m = n;
    for _ in 0..log_n {
        let m2 = m / 2;
        let w_m = omega.mod_pow_u64((n / m) as u64);
        let mut k = 0;
        while k < n {
            let mut w = B::ONE;
            for j in 0..m2 {
                let u = seq[k + j];
                let v = seq[k + j + m2];
                seq[k + j] = u.ntt_add(&v);
                seq[k + j + m2] = u.ntt_sub(&v).mul_by_base(&w);
                w = w.mul(&w_m);
            }
            k += m;
        }
        m = m2;
    }
    Ok(())
}

/// No-swap inverse transform: assumes `seq` arrives in bit-reversed order
/// (the output format of [`forward_noswap`]) and runs the
/// decimation-in-time merge stages directly, with no permutation and no
/// unscaling. Callers must follow up with [`unscale`] for semantic
/// equivalence with [`inverse`].
pub fn inverse_noswap<T: NttElement>(seq: &mut [T]) -> Result<()> {
    let n = seq.len();
    if n == 0 {
        return Ok(());
    }
    check_length(n)?;
    if n == 1 {
        return Ok(());
    }
    let omega = B::primitive_root_of_unity(n as u64)?;
    let omega_inv = omega.inverse()?;
    merge_stages(seq, omega_inv, n.trailing_zeros());
    Ok(())
}

/// Scales every element of a sequence by `n^-1`, where `n = seq.len()`.
/// Empty input yields empty output.
pub fn unscale<T: NttElement>(seq: &mut [T]) -> Result<()> {
    let n = seq.len();
    if n == 0 {
        return Ok(());
    }
    check_length(n)?;
    let n_inv = B::from_value(n as u64).inverse()?;
    for el in seq.iter_mut() {
        *el = el.mul_by_base(&n_inv);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_n4_fixture() {
        let mut seq = vec![B::from_value(1), B::from_value(4), B::ZERO, B::ZERO];
        let original = seq.clone();
        forward(&mut seq).unwrap();
        let expected: Vec<B> = [
            5u64,
            1125899906842625,
            18446744069414584318,
            18445618169507741698,
        ]
        .into_iter()
        .map(B::from_value)
        .collect();
        assert_eq!(seq, expected);

        inverse(&mut seq).unwrap();
        assert_eq!(seq, original);
    }

    #[test]
    fn forward_n4_maximal_element_fixture() {
        let mut seq = vec![B::MAX, B::ZERO, B::ZERO, B::ZERO];
        let original = seq.clone();
        forward(&mut seq).unwrap();
        assert_eq!(seq, vec![B::MAX; 4]);

        inverse(&mut seq).unwrap();
        assert_eq!(seq, original);
    }

    #[test]
    fn forward_n32_block_structure_roundtrips() {
        let block = [1u64, 4, 0, 0, 0, 0, 0, 0];
        let mut seq: Vec<B> = block
            .iter()
            .cycle()
            .take(32)
            .copied()
            .map(B::from_value)
            .collect();
        let original = seq.clone();
        forward(&mut seq).unwrap();
        inverse(&mut seq).unwrap();
        assert_eq!(seq, original);
    }

    #[test]
    fn x_forward_n4_constant_one_fixture() {
        let mut seq = vec![X::ONE, X::ZERO, X::ZERO, X::ZERO];
        forward(&mut seq).unwrap();
        assert_eq!(seq, vec![X::ONE; 4]);
    }

    #[test]
    fn rejects_non_power_of_two_length() {
        let mut seq = vec![B::ONE; 3];
        assert!(matches!(forward(&mut seq), Err(Error::InvalidLength)));
        assert!(matches!(inverse(&mut seq), Err(Error::InvalidLength)));
        assert!(matches!(
            forward_noswap(&mut seq),
            Err(Error::InvalidLength)
        ));
        assert!(matches!(
            inverse_noswap(&mut seq),
            Err(Error::InvalidLength)
        ));
        assert!(matches!(bitreverse_order(&mut seq), Err(Error::InvalidLength)));
    }

    #[test]
    fn empty_sequence_is_a_no_op() {
        let mut seq: Vec<B> = Vec::new();
        assert!(forward(&mut seq).is_ok());
        assert!(inverse(&mut seq).is_ok());
        assert!(unscale(&mut seq).is_ok());
    }

    #[test]
    fn noswap_decomposition_matches_forward() {
        for n in [1usize, 2, 4, 8, 16, 64] {
            let input: Vec<B> = (0..n as u64).map(B::from_value).collect();

            let mut via_noswap = input.clone();
            forward_noswap(&mut via_noswap).unwrap();
            bitreverse_order(&mut via_noswap).unwrap();

            let mut via_forward = input.clone();
            forward(&mut via_forward).unwrap();

            assert_eq!(via_noswap, via_forward, "n = {n}");
        }
    }

    #[test]
    fn noswap_decomposition_matches_inverse() {
        for n in [1usize, 2, 4, 8, 16, 64] {
            let input: Vec<B> = (0..n as u64).map(|v| B::from_value(v + 1)).collect();

            let mut via_noswap = input.clone();
            bitreverse_order(&mut via_noswap).unwrap();
            inverse_noswap(&mut via_noswap).unwrap();
            unscale(&mut via_noswap).unwrap();

            let mut via_inverse = input.clone();
            inverse(&mut via_inverse).unwrap();

            assert_eq!(via_noswap, via_inverse, "n = {n}");
        }
    }

    #[test]
    fn round_trip_is_identity_for_random_lengths() {
        for n in [1usize, 2, 4, 16, 128] {
            let input: Vec<B> = (0..n as u64).map(|v| B::from_value(v * 7 + 3)).collect();
            let mut seq = input.clone();
            forward(&mut seq).unwrap();
            inverse(&mut seq).unwrap();
            assert_eq!(seq, input, "n = {n}");
        }
    }

    #[test]
    fn forward_is_order_preserving_across_element_type() {
        let input: Vec<B> = (0..8u64).map(|v| B::from_value(v * 13 + 1)).collect();

        let mut b_seq = input.clone();
        forward(&mut b_seq).unwrap();

        let mut x_seq: Vec<X> = input.iter().map(B::lift).collect();
        forward(&mut x_seq).unwrap();

        let lifted_b: Vec<X> = b_seq.iter().map(B::lift).collect();
        assert_eq!(x_seq, lifted_b);
    }
}
