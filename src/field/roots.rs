//! The primitive-root-of-unity table: an immutable lookup from `n = 2^k`
//! to a Montgomery-form `B` that is a primitive `n`-th root of unity.
//!
//! Rather than hard-coding all 33 entries (error-prone to transcribe), the
//! table is derived from the single published generator of the order-2^32
//! subgroup by repeated squaring: if `g` has order `2^32`, then `g^2` has
//! order `2^31`, `g^4` has order `2^30`, and so on down to `g^(2^32) = 1`.
//! Built once behind a `OnceLock` and never mutated afterward, per the
//! field's "no global mutable caches" contract — this needs no extra
//! dependency beyond the standard library.

use std::sync::OnceLock;

use super::B;
use crate::error::{Error, Result};

const TWO_ADICITY: u32 = 32;

/// sage: k = (p - 1) / 2^32
/// sage: GF(p).primitive_element()^k
/// 1753635133440165772
const ORDER_2_32_GENERATOR: u64 = 1_753_635_133_440_165_772;

static TABLE: OnceLock<[B; (TWO_ADICITY + 1) as usize]> = OnceLock::new();

fn table() -> &'static [B; (TWO_ADICITY + 1) as usize] {
    TABLE.get_or_init(|| {
        let mut t = [B::ONE; (TWO_ADICITY + 1) as usize];
        t[TWO_ADICITY as usize] = B::from_value(ORDER_2_32_GENERATOR);
        let mut k = TWO_ADICITY as usize;
        while k > 0 {
            t[k - 1] = t[k].square();
            k -= 1;
        }
        t
    })
}

pub(crate) fn primitive_root_of_unity(n: u64) -> Result<B> {
    if n == 0 || n == 1 {
        return Ok(B::ONE);
    }
    if !n.is_power_of_two() {
        return Err(Error::NoRootOfUnity);
    }
    let k = n.trailing_zeros();
    if k > TWO_ADICITY {
        return Err(Error::NoRootOfUnity);
    }
    Ok(table()[k as usize])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_entry_for_2_32() {
        let root = primitive_root_of_unity(1u64 << 32).unwrap();
        assert_eq!(root.value(), ORDER_2_32_GENERATOR);
    }

    #[test]
    fn rejects_non_power_of_two_and_out_of_domain() {
        assert!(primitive_root_of_unity(3).is_err());
        assert!(primitive_root_of_unity(1u64 << 33).is_err());
    }

    #[test]
    fn n_zero_and_one_map_to_one() {
        assert_eq!(primitive_root_of_unity(0).unwrap(), B::ONE);
        assert_eq!(primitive_root_of_unity(1).unwrap(), B::ONE);
    }

    #[test]
    fn roots_satisfy_order_identity() {
        for k in 1..=TWO_ADICITY {
            let n = 1u64 << k;
            let root = primitive_root_of_unity(n).unwrap();
            assert_eq!(root.mod_pow_u64(n), B::ONE, "omega^n == 1 for n=2^{k}");
            assert_ne!(
                root.mod_pow_u64(n / 2),
                B::ONE,
                "omega^(n/2) != 1 for n=2^{k}"
            );
        }
    }
}
