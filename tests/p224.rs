//! P-224 projective point tests.

use hex_literal::hex;
use nistec::p224::ProjectivePoint;
use nistec::{Error, LookupTable};
use proptest::prelude::*;

/// Uncompressed SEC1 encoding of the base point.
const GENERATOR_BYTES: [u8; 57] = hex!(
    "04b70e0cbd6bb4bf7f321390b94a03c1d356c21122343280d6115c1d21"
    "bd376388b5f723fb4c22dfe6cd4375a05a07476444d5819985007e34"
);

/// Affine coordinates of 2G.
const TWO_G_X: [u8; 28] = hex!("706a46dc76dcb76798e60e6d89474788d16dc18032d268fd1a704fa6");
const TWO_G_Y: [u8; 28] = hex!("1c2b76a7bc25e7702a704fa986892849fca629487acf3709d2e4e8bb");

/// Group order n, big-endian.
const ORDER: [u8; 28] = hex!("ffffffffffffffffffffffffffff16a2e0b8f03e13dd29455c5c2a3d");

/// k = 0x0102...1c and the affine coordinates of kG.
const KAT_SCALAR: [u8; 28] = hex!("0102030405060708090a0b0c0d0e0f101112131415161718191a1b1c");
const KAT_X: [u8; 28] = hex!("627b7c0b3a2fb7a478ac5670e9973194a5fda0bc0791b07506a73ddd");
const KAT_Y: [u8; 28] = hex!("99113b3fdea71bbff9921330d9ce980155eebd620c46be927c214543");

#[test]
fn generator_round_trip() {
    let g = ProjectivePoint::GENERATOR;
    assert_eq!(g.to_bytes(), GENERATOR_BYTES);
    assert_eq!(ProjectivePoint::from_bytes(&GENERATOR_BYTES).unwrap(), g);
}

#[test]
fn identity_round_trip() {
    let id = ProjectivePoint::IDENTITY;
    assert_eq!(id.to_bytes(), [0x00]);
    assert_eq!(ProjectivePoint::from_bytes(&[0x00]).unwrap(), id);
    assert!(id.x_bytes().is_err());
}

#[test]
fn doubling_known_answer() {
    let two_g = ProjectivePoint::GENERATOR.double();
    assert_eq!(two_g.x_bytes().unwrap(), TWO_G_X);
    assert_eq!(&two_g.to_bytes()[29..], &TWO_G_Y[..]);
}

#[test]
fn group_laws() {
    let g = ProjectivePoint::GENERATOR;
    let id = ProjectivePoint::IDENTITY;

    assert_eq!(g + id, g);
    assert_eq!(g - g, id);
    assert_eq!(id.double(), id);

    let two_g = g.double();
    assert_eq!(g + two_g, two_g + g);
    assert_eq!(two_g, g.add(&g));
}

#[test]
fn mul_by_group_order() {
    let g = ProjectivePoint::GENERATOR;
    assert_eq!(g.mul(&ORDER), ProjectivePoint::IDENTITY);

    let mut order_minus_one = ORDER;
    order_minus_one[27] -= 1;
    assert_eq!(g.mul(&order_minus_one), -g);
}

#[test]
fn mul_known_answer() {
    let variable = ProjectivePoint::GENERATOR.mul(&KAT_SCALAR);
    assert_eq!(variable.x_bytes().unwrap(), KAT_X);
    assert_eq!(&variable.to_bytes()[29..], &KAT_Y[..]);

    let fixed = ProjectivePoint::mul_by_generator(&KAT_SCALAR).unwrap();
    assert_eq!(fixed, variable);
}

#[test]
fn mul_by_generator_rejects_bad_length() {
    assert_eq!(
        ProjectivePoint::mul_by_generator(&[0x01; 32]),
        Err(Error::InvalidScalarLength)
    );
}

#[test]
fn compression_is_unsupported() {
    // Valid x-coordinates, but the curve has no square root routine.
    for tag in [0x02, 0x03] {
        let mut encoding = [0u8; 29];
        encoding[0] = tag;
        encoding[1..].copy_from_slice(&TWO_G_X);
        assert_eq!(
            ProjectivePoint::from_bytes(&encoding),
            Err(Error::UnsupportedCompression)
        );
    }
}

#[test]
fn rejects_malformed_encodings() {
    assert_eq!(ProjectivePoint::from_bytes(&[]), Err(Error::InvalidEncoding));
    assert_eq!(
        ProjectivePoint::from_bytes(&GENERATOR_BYTES[..56]),
        Err(Error::InvalidEncoding)
    );
    // P-256 sized input fed to a P-224 decoder.
    assert_eq!(
        ProjectivePoint::from_bytes(&[0x04; 65]),
        Err(Error::InvalidEncoding)
    );
}

#[test]
fn rejects_off_curve_point() {
    let mut encoding = GENERATOR_BYTES;
    encoding[56] ^= 0x01;
    assert_eq!(
        ProjectivePoint::from_bytes(&encoding),
        Err(Error::NotOnCurve)
    );
}

#[test]
fn lookup_table_select() {
    let g = ProjectivePoint::GENERATOR;
    let table = LookupTable::new(&g);

    assert_eq!(table.select(0), ProjectivePoint::IDENTITY);
    assert_eq!(table.select(1), g);
    assert_eq!(table.select(15), g.mul(&[0x0f]));
}

proptest! {
    #[test]
    fn fixed_base_matches_variable_base(scalar in any::<[u8; 28]>()) {
        let fixed = ProjectivePoint::mul_by_generator(&scalar).unwrap();
        let variable = ProjectivePoint::GENERATOR.mul(&scalar);
        prop_assert_eq!(fixed, variable);
    }
}
