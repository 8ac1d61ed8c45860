//! NIST P-521 (a.k.a. secp521r1) curve parameters.
//!
//! The 521-bit field is carried on [`U576`], the smallest backing
//! integer width that fits it; the high bits of the modulus are zero
//! padding.

use bigint::U576;
use subtle::{ConstantTimeEq, CtOption};

use crate::{
    BasepointTables, LookupTable, MontyFieldElement, PrimeCurveParams, field::Field,
    macros::monty_field_params,
};

/// NIST P-521 elliptic curve.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NistP521;

monty_field_params!(
    name: FieldParams,
    modulus: "00000000000001ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
    uint: U576,
    byte_size: 66,
    doc: "P-521 base field modulus"
);

/// P-521 base field element.
pub type FieldElement = MontyFieldElement<FieldParams, { U576::LIMBS }>;

/// P-521 point in projective coordinates.
pub type ProjectivePoint = crate::ProjectivePoint<NistP521>;

static BASEPOINT_TABLES: BasepointTables<NistP521, 132> = BasepointTables::new();

impl PrimeCurveParams for NistP521 {
    type FieldElement = FieldElement;

    const EQUATION_B: FieldElement = FieldElement::from_hex_vartime(
        "0000000000000051953eb9618e1c9a1f929a21a0b68540eea2da725b99b315f3b8b489918ef109e156193951ec7e937b1652c0bd3bb1bf073573df883d2c34f1ef451fd46b503f00",
    );

    const GENERATOR: (FieldElement, FieldElement) = (
        FieldElement::from_hex_vartime(
            "00000000000000c6858e06b70404e9cd9e3ecb662395b4429c648139053fb521f828af606b4d3dbaa14b5e77efe75928fe1dc127a2ffa8de3348b3c1856a429bf97e7e31c2e5bd66",
        ),
        FieldElement::from_hex_vartime(
            "000000000000011839296a789a3bc0045c8a5fb42c7d1bd998f54449579b446817afbd17273e662c97ee72995ef42640c550b9013fad0761353c7086a272c24088be94769fd16650",
        ),
    );

    fn sqrt(x: &FieldElement) -> Option<CtOption<FieldElement>> {
        // p + 1 = 2^521, so the square root candidate is 519 squarings.
        let candidate = x.sqn(519);
        Some(CtOption::new(candidate, candidate.square().ct_eq(x)))
    }

    fn generator_tables() -> &'static [LookupTable<NistP521>] {
        &*BASEPOINT_TABLES
    }
}
