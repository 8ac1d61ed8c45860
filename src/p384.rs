//! NIST P-384 (a.k.a. secp384r1) curve parameters.

use bigint::U384;
use subtle::{ConstantTimeEq, CtOption};

use crate::{
    BasepointTables, LookupTable, MontyFieldElement, PrimeCurveParams, field::Field,
    macros::monty_field_params,
};

/// NIST P-384 elliptic curve.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NistP384;

monty_field_params!(
    name: FieldParams,
    modulus: "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffff0000000000000000ffffffff",
    uint: U384,
    byte_size: 48,
    doc: "P-384 base field modulus"
);

/// P-384 base field element.
pub type FieldElement = MontyFieldElement<FieldParams, { U384::LIMBS }>;

/// P-384 point in projective coordinates.
pub type ProjectivePoint = crate::ProjectivePoint<NistP384>;

static BASEPOINT_TABLES: BasepointTables<NistP384, 96> = BasepointTables::new();

impl PrimeCurveParams for NistP384 {
    type FieldElement = FieldElement;

    const EQUATION_B: FieldElement = FieldElement::from_hex_vartime(
        "b3312fa7e23ee7e4988e056be3f82d19181d9c6efe8141120314088f5013875ac656398d8a2ed19d2a85c8edd3ec2aef",
    );

    const GENERATOR: (FieldElement, FieldElement) = (
        FieldElement::from_hex_vartime(
            "aa87ca22be8b05378eb1c71ef320ad746e1d3b628ba79b9859f741e082542a385502f25dbf55296c3a545e3872760ab7",
        ),
        FieldElement::from_hex_vartime(
            "3617de4a96262c6f5d9e98bf9292dc29f8f41dbd289a147ce9da3113b5f0b8c00a60b1ce1d7e819d7a431d7c90ea0e5f",
        ),
    );

    fn sqrt(x: &FieldElement) -> Option<CtOption<FieldElement>> {
        let candidate = sqrt_candidate(x);
        Some(CtOption::new(candidate, candidate.square().ct_eq(x)))
    }

    fn generator_tables() -> &'static [LookupTable<NistP384>] {
        &*BASEPOINT_TABLES
    }
}

/// Square root candidate x^((p + 1) / 4); p = 3 mod 4, so this is a
/// root whenever x is square. Fixed addition chain over the public
/// exponent.
fn sqrt_candidate(x: &FieldElement) -> FieldElement {
    let t11 = *x * x.square();
    let t111 = *x * t11.square();
    let t111111 = t111 * t111.sqn(3);
    let t1111110 = t111111.square();
    let t1111111 = *x * t1111110;
    let x12 = t1111110.sqn(5) * t111111;
    let x24 = x12.sqn(12) * x12;
    let x31 = x24.sqn(7) * t1111111;
    let x32 = *x * x31.square();
    let x63 = x31 * x32.sqn(31);
    let x126 = x63 * x63.sqn(63);
    let x252 = x126 * x126.sqn(126);
    let x255 = t111 * x252.sqn(3);
    ((x32 * x255.sqn(33)).sqn(64) * *x).sqn(30)
}
