//! NIST P-256 (a.k.a. secp256r1, prime256v1) curve parameters.

use bigint::U256;
use subtle::{ConstantTimeEq, CtOption};

use crate::{
    BasepointTables, LookupTable, MontyFieldElement, PrimeCurveParams, field::Field,
    macros::monty_field_params,
};

/// NIST P-256 elliptic curve.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NistP256;

monty_field_params!(
    name: FieldParams,
    modulus: "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
    uint: U256,
    byte_size: 32,
    doc: "P-256 base field modulus"
);

/// P-256 base field element.
pub type FieldElement = MontyFieldElement<FieldParams, { U256::LIMBS }>;

/// P-256 point in projective coordinates.
pub type ProjectivePoint = crate::ProjectivePoint<NistP256>;

static BASEPOINT_TABLES: BasepointTables<NistP256, 64> = BasepointTables::new();

impl PrimeCurveParams for NistP256 {
    type FieldElement = FieldElement;

    const EQUATION_B: FieldElement =
        FieldElement::from_hex_vartime("5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b");

    const GENERATOR: (FieldElement, FieldElement) = (
        FieldElement::from_hex_vartime("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"),
        FieldElement::from_hex_vartime("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"),
    );

    fn sqrt(x: &FieldElement) -> Option<CtOption<FieldElement>> {
        let candidate = sqrt_candidate(x);
        Some(CtOption::new(candidate, candidate.square().ct_eq(x)))
    }

    fn generator_tables() -> &'static [LookupTable<NistP256>] {
        &*BASEPOINT_TABLES
    }
}

/// Square root candidate x^((p + 1) / 4); p = 3 mod 4, so this is a
/// root whenever x is square. Fixed addition chain over the public
/// exponent.
fn sqrt_candidate(x: &FieldElement) -> FieldElement {
    let t11 = *x * x.square();
    let t1111 = t11 * t11.sqn(2);
    let t11111111 = t1111 * t1111.sqn(4);
    let x16 = t11111111.sqn(8) * t11111111;
    let x32 = x16.sqn(16) * x16;
    ((x32.sqn(32) * *x).sqn(96) * *x).sqn(94)
}

#[cfg(test)]
mod tests {
    use super::{FieldElement, NistP256, ProjectivePoint};
    use crate::{Field, PrimeCurveParams};
    use hex_literal::hex;

    #[test]
    fn generator_is_on_curve() {
        let (x, y) = NistP256::GENERATOR;
        assert_eq!(y.square(), ProjectivePoint::polynomial(x));
    }

    #[test]
    fn sqrt_of_known_square() {
        let nine = FieldElement::from_u64(9);
        let root = NistP256::sqrt(&nine).unwrap().unwrap();
        assert_eq!(root.square(), nine);
    }

    #[test]
    fn sqrt_of_nonresidue_fails() {
        let three = FieldElement::from_u64(3);
        assert!(bool::from(NistP256::sqrt(&three).unwrap().is_none()));
    }

    #[test]
    fn field_element_encoding() {
        let bytes = hex!("5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b");
        assert_eq!(NistP256::EQUATION_B.to_bytes(), bytes);
    }
}
