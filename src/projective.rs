//! Projective curve points and scalar multiplication.

use core::iter::Sum;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use crate::{
    Error, PrimeCurveParams, Result, field::Field, lookup_table::LookupTable, point_arithmetic,
};

/// Point on a short Weierstrass curve in projective coordinates.
///
/// The affine point is (x/z, y/z); the identity is any point with
/// z = 0, canonically (0 : 1 : 0).
#[derive(Clone, Copy, Debug)]
pub struct ProjectivePoint<C: PrimeCurveParams> {
    pub(crate) x: C::FieldElement,
    pub(crate) y: C::FieldElement,
    pub(crate) z: C::FieldElement,
}

impl<C: PrimeCurveParams> ProjectivePoint<C> {
    /// Additive identity of the group a.k.a. the point at infinity.
    pub const IDENTITY: Self = Self {
        x: <C::FieldElement as Field>::ZERO,
        y: <C::FieldElement as Field>::ONE,
        z: <C::FieldElement as Field>::ZERO,
    };

    /// Base point of the curve.
    pub const GENERATOR: Self = Self {
        x: C::GENERATOR.0,
        y: C::GENERATOR.1,
        z: <C::FieldElement as Field>::ONE,
    };

    /// Is this the point at infinity?
    pub fn is_identity(&self) -> Choice {
        self.z.is_zero()
    }

    /// Add this point to another. Complete: valid for all inputs.
    pub fn add(&self, rhs: &Self) -> Self {
        point_arithmetic::add(self, rhs)
    }

    /// Double this point. Complete: valid for all inputs.
    pub fn double(&self) -> Self {
        point_arithmetic::double(self)
    }

    /// Decode a point from its SEC1 encoding.
    ///
    /// Accepts `[0x00]` (the identity), `0x04 || x || y` (uncompressed)
    /// and `0x02/0x03 || x` (compressed). Coordinates must be canonical
    /// field elements and the resulting point must be on the curve.
    /// Validity of the encoding is treated as public information.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        match bytes {
            [0x00] => Ok(Self::IDENTITY),
            [0x04, coords @ ..] if coords.len() == 2 * C::FieldElement::BYTE_SIZE => {
                let (xb, yb) = coords.split_at(C::FieldElement::BYTE_SIZE);
                let x = Option::<C::FieldElement>::from(C::FieldElement::from_slice(xb))
                    .ok_or(Error::InvalidEncoding)?;
                let y = Option::<C::FieldElement>::from(C::FieldElement::from_slice(yb))
                    .ok_or(Error::InvalidEncoding)?;

                if y.square().ct_eq(&Self::polynomial(x)).into() {
                    Ok(Self {
                        x,
                        y,
                        z: <C::FieldElement as Field>::ONE,
                    })
                } else {
                    Err(Error::NotOnCurve)
                }
            }
            [tag @ (0x02 | 0x03), xb @ ..] if xb.len() == C::FieldElement::BYTE_SIZE => {
                let x = Option::<C::FieldElement>::from(C::FieldElement::from_slice(xb))
                    .ok_or(Error::InvalidEncoding)?;

                let y2 = Self::polynomial(x);
                let sqrt = C::sqrt(&y2).ok_or(Error::UnsupportedCompression)?;
                let y = Option::<C::FieldElement>::from(sqrt)
                    .ok_or(Error::InvalidCompressedPoint)?;

                // Pick the root whose parity matches the tag.
                let flip = y.is_odd() ^ Choice::from(*tag & 1);
                let y = C::FieldElement::conditional_select(&y, &(-y), flip);

                Ok(Self {
                    x,
                    y,
                    z: <C::FieldElement as Field>::ONE,
                })
            }
            _ => Err(Error::InvalidEncoding),
        }
    }

    /// Uncompressed SEC1 encoding, or `[0x00]` for the identity.
    pub fn to_bytes(&self) -> Vec<u8> {
        if self.is_identity().into() {
            return vec![0x00];
        }

        let (x, y) = self.to_affine_coordinates();
        let mut out = Vec::with_capacity(1 + 2 * C::FieldElement::BYTE_SIZE);
        out.push(0x04);
        out.extend_from_slice(&x.to_bytes());
        out.extend_from_slice(&y.to_bytes());
        out
    }

    /// Compressed SEC1 encoding, or `[0x00]` for the identity.
    pub fn to_bytes_compressed(&self) -> Vec<u8> {
        if self.is_identity().into() {
            return vec![0x00];
        }

        let (x, y) = self.to_affine_coordinates();
        let mut out = Vec::with_capacity(1 + C::FieldElement::BYTE_SIZE);
        out.push(0x02 | y.is_odd().unwrap_u8());
        out.extend_from_slice(&x.to_bytes());
        out
    }

    /// Canonical encoding of the affine x-coordinate.
    pub fn x_bytes(&self) -> Result<Vec<u8>> {
        if self.is_identity().into() {
            return Err(Error::PointAtInfinity);
        }

        let (x, _) = self.to_affine_coordinates();
        Ok(x.to_bytes())
    }

    /// Multiply by a scalar given as big-endian bytes, in constant time
    /// for a given scalar length. Scalars are reduced implicitly by the
    /// group structure; an empty slice yields the identity.
    pub fn mul(&self, scalar: &[u8]) -> Self {
        let table = LookupTable::new(self);
        let mut acc = Self::IDENTITY;
        let mut first_window = true;

        for byte in scalar {
            for window in [byte >> 4, byte & 0x0f] {
                // No point doubling an accumulator that is still the
                // identity; the loop position is public.
                if !first_window {
                    acc = acc.double().double().double().double();
                }
                first_window = false;

                acc += table.select(window);
            }
        }

        acc
    }

    /// Multiply the generator by a scalar given as big-endian bytes, in
    /// constant time.
    ///
    /// The scalar must be exactly the field element size; with one
    /// precomputed table per window this needs no accumulator
    /// doublings at all.
    pub fn mul_by_generator(scalar: &[u8]) -> Result<Self> {
        if scalar.len() != C::FieldElement::BYTE_SIZE {
            return Err(Error::InvalidScalarLength);
        }

        let tables = C::generator_tables();
        let mut acc = Self::IDENTITY;
        let mut table_idx = tables.len();

        // Most significant window first, so tables are consumed from
        // the highest power of 16 down.
        for byte in scalar {
            for window in [byte >> 4, byte & 0x0f] {
                table_idx -= 1;
                acc += tables[table_idx].select(window);
            }
        }

        Ok(acc)
    }

    /// Right-hand side of the curve equation: x^3 - 3x + b.
    pub(crate) fn polynomial(x: C::FieldElement) -> C::FieldElement {
        x.square() * x - (x.double() + x) + C::EQUATION_B
    }

    /// Affine coordinates, mapping the identity to (0, 0).
    fn to_affine_coordinates(&self) -> (C::FieldElement, C::FieldElement) {
        let zinv = self
            .z
            .invert()
            .unwrap_or(<C::FieldElement as Field>::ZERO);
        (self.x * zinv, self.y * zinv)
    }
}

impl<C: PrimeCurveParams> ConditionallySelectable for ProjectivePoint<C> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: C::FieldElement::conditional_select(&a.x, &b.x, choice),
            y: C::FieldElement::conditional_select(&a.y, &b.y, choice),
            z: C::FieldElement::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl<C: PrimeCurveParams> ConstantTimeEq for ProjectivePoint<C> {
    fn ct_eq(&self, other: &Self) -> Choice {
        // Cross-multiplied comparison avoids inversions and holds for
        // every projective representation, identity included.
        (self.x * other.z).ct_eq(&(other.x * self.z))
            & (self.y * other.z).ct_eq(&(other.y * self.z))
    }
}

impl<C: PrimeCurveParams> Default for ProjectivePoint<C> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<C: PrimeCurveParams> zeroize::DefaultIsZeroes for ProjectivePoint<C> {}

impl<C: PrimeCurveParams> Eq for ProjectivePoint<C> {}

impl<C: PrimeCurveParams> PartialEq for ProjectivePoint<C> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C: PrimeCurveParams> Add for ProjectivePoint<C> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        ProjectivePoint::add(&self, &other)
    }
}

impl<C: PrimeCurveParams> Add<&ProjectivePoint<C>> for ProjectivePoint<C> {
    type Output = Self;

    fn add(self, other: &Self) -> Self {
        ProjectivePoint::add(&self, other)
    }
}

impl<C: PrimeCurveParams> AddAssign for ProjectivePoint<C> {
    fn add_assign(&mut self, rhs: Self) {
        *self = ProjectivePoint::add(self, &rhs);
    }
}

impl<C: PrimeCurveParams> AddAssign<&ProjectivePoint<C>> for ProjectivePoint<C> {
    fn add_assign(&mut self, rhs: &Self) {
        *self = ProjectivePoint::add(self, rhs);
    }
}

impl<C: PrimeCurveParams> Sub for ProjectivePoint<C> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        ProjectivePoint::add(&self, &-other)
    }
}

impl<C: PrimeCurveParams> Sub<&ProjectivePoint<C>> for ProjectivePoint<C> {
    type Output = Self;

    fn sub(self, other: &Self) -> Self {
        ProjectivePoint::add(&self, &-*other)
    }
}

impl<C: PrimeCurveParams> SubAssign for ProjectivePoint<C> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = ProjectivePoint::add(self, &-rhs);
    }
}

impl<C: PrimeCurveParams> Neg for ProjectivePoint<C> {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: self.x,
            y: -self.y,
            z: self.z,
        }
    }
}

impl<C: PrimeCurveParams> Neg for &ProjectivePoint<C> {
    type Output = ProjectivePoint<C>;

    fn neg(self) -> ProjectivePoint<C> {
        -*self
    }
}

impl<C: PrimeCurveParams> Sum for ProjectivePoint<C> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::IDENTITY, |acc, p| acc + p)
    }
}

impl<'a, C: PrimeCurveParams> Sum<&'a ProjectivePoint<C>> for ProjectivePoint<C> {
    fn sum<I: Iterator<Item = &'a ProjectivePoint<C>>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
