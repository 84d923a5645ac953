//! A numerics core for STARK-style proof systems built on the Goldilocks
//! prime field, `p = 2^64 - 2^32 + 1`.
//!
//! Three tightly coupled pieces, leaves first:
//!
//! - [`montgomery`] — the branchless Montgomery reduction kernel that every
//!   base-field operation is built on.
//! - [`field`] — [`field::B`], the base field element, stored in Montgomery
//!   form.
//! - [`extension`] — [`extension::X`], the cubic extension of `B` by
//!   `x^3 - x + 1`.
//! - [`ntt`] — an in-place, power-of-two Number-Theoretic Transform engine
//!   generic over either field's elements.
//!
//! All arithmetic is synchronous and allocation-free beyond caller-owned
//! sequences; there is no shared mutable state besides the read-only
//! primitive-root-of-unity table built once behind a `OnceLock`.

pub mod error;
pub mod extension;
pub mod field;
mod montgomery;
pub mod ntt;

pub use error::{Error, Result};
pub use extension::X;
pub use field::B;
