//! NIST P-224 (a.k.a. secp224r1) curve parameters.
//!
//! The 224-bit field is carried on [`U256`], the smallest backing
//! integer width supporting Montgomery parameters; the high limb of
//! the modulus is zero padding.
//!
//! P-224's field prime is congruent to 1 mod 4, so the exponentiation
//! square root shared by the other curves does not apply and the curve
//! provides no square root routine. Compressed point encodings are
//! rejected with [`Error::UnsupportedCompression`][`crate::Error`].

use bigint::U256;
use subtle::CtOption;

use crate::{
    BasepointTables, LookupTable, MontyFieldElement, PrimeCurveParams,
    macros::monty_field_params,
};

/// NIST P-224 elliptic curve.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NistP224;

monty_field_params!(
    name: FieldParams,
    modulus: "00000000ffffffffffffffffffffffffffffffff000000000000000000000001",
    uint: U256,
    byte_size: 28,
    doc: "P-224 base field modulus"
);

/// P-224 base field element.
pub type FieldElement = MontyFieldElement<FieldParams, { U256::LIMBS }>;

/// P-224 point in projective coordinates.
pub type ProjectivePoint = crate::ProjectivePoint<NistP224>;

static BASEPOINT_TABLES: BasepointTables<NistP224, 56> = BasepointTables::new();

impl PrimeCurveParams for NistP224 {
    type FieldElement = FieldElement;

    const EQUATION_B: FieldElement =
        FieldElement::from_hex_vartime("00000000b4050a850c04b3abf54132565044b0b7d7bfd8ba270b39432355ffb4");

    const GENERATOR: (FieldElement, FieldElement) = (
        FieldElement::from_hex_vartime("00000000b70e0cbd6bb4bf7f321390b94a03c1d356c21122343280d6115c1d21"),
        FieldElement::from_hex_vartime("00000000bd376388b5f723fb4c22dfe6cd4375a05a07476444d5819985007e34"),
    );

    fn sqrt(_: &FieldElement) -> Option<CtOption<FieldElement>> {
        None
    }

    fn generator_tables() -> &'static [LookupTable<NistP224>] {
        &*BASEPOINT_TABLES
    }
}
