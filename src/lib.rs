//! Constant-time group operations for the NIST P-224, P-256, P-384 and
//! P-521 elliptic curves.
//!
//! Points are held in projective coordinates and combined with complete
//! addition formulas, so every operation is branch-free with respect to
//! its operands. Scalars are opaque big-endian byte strings; scalar
//! multiplication runs in time dependent only on the scalar's length,
//! and fixed-base multiplication uses lazily-built per-curve generator
//! tables.
//!
//! Point compression is supported on the curves whose field prime is
//! congruent to 3 mod 4 (P-256, P-384 and P-521).
//!
//! ```
//! use nistec::p256::ProjectivePoint;
//!
//! let g = ProjectivePoint::GENERATOR;
//! let two_g = ProjectivePoint::from_bytes(&g.double().to_bytes())?;
//! assert_eq!(two_g, g.add(&g));
//! # Ok::<(), nistec::Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

pub mod p224;
pub mod p256;
pub mod p384;
pub mod p521;

mod error;
mod field;
mod lookup_table;
mod macros;
mod point_arithmetic;
mod projective;

pub use crate::{
    error::{Error, Result},
    field::{Field, MontyFieldElement, MontyFieldParams},
    lookup_table::{BasepointTables, LookupTable},
    projective::ProjectivePoint,
};

use core::fmt::Debug;
use subtle::CtOption;

/// Parameters of a short Weierstrass curve y^2 = x^3 - 3x + b over a
/// prime field.
pub trait PrimeCurveParams:
    'static + Copy + Clone + Debug + Default + Eq + PartialEq + Send + Sync
{
    /// Base field element type.
    type FieldElement: Field;

    /// Coefficient b of the curve equation. The a coefficient is fixed
    /// to -3 for this family of curves.
    const EQUATION_B: Self::FieldElement;

    /// Affine coordinates of the curve's base point.
    const GENERATOR: (Self::FieldElement, Self::FieldElement);

    /// Square root in the base field, used for point decompression.
    ///
    /// Returns `None` when the curve carries no square root routine
    /// (its prime is not congruent to 3 mod 4); otherwise the
    /// constant-time result, whose flag is cleared for nonsquare
    /// inputs.
    fn sqrt(x: &Self::FieldElement) -> Option<CtOption<Self::FieldElement>>;

    /// The curve's cached generator tables, two 4-bit windows per
    /// scalar byte.
    fn generator_tables() -> &'static [LookupTable<Self>];
}
