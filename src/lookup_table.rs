//! Constant-time lookup tables for windowed scalar multiplication.

use core::ops::Deref;
use std::sync::LazyLock;

use subtle::{ConditionallySelectable, ConstantTimeEq};

use crate::{PrimeCurveParams, projective::ProjectivePoint};

/// Precomputed multiples 1P..=15P of a point, selectable in constant
/// time by a 4-bit window value.
#[derive(Clone, Copy, Debug)]
pub struct LookupTable<C: PrimeCurveParams> {
    points: [ProjectivePoint<C>; 15],
}

impl<C: PrimeCurveParams> LookupTable<C> {
    /// Build the table for a point. Costs 7 doublings and 7 additions.
    pub fn new(point: &ProjectivePoint<C>) -> Self {
        let mut points = [ProjectivePoint::IDENTITY; 15];
        points[0] = *point;

        for i in (1..15).step_by(2) {
            points[i] = points[i / 2].double();
            points[i + 1] = points[i].add(point);
        }

        Self { points }
    }

    /// Select `n`P in constant time. `n` = 0 yields the identity.
    ///
    /// Panics if `n` > 15; window values larger than a nibble mean the
    /// caller's scalar decomposition is broken.
    pub fn select(&self, n: u8) -> ProjectivePoint<C> {
        assert!(n < 16, "lookup table index out of range: {n}");

        let mut result = ProjectivePoint::IDENTITY;

        for (i, point) in self.points.iter().enumerate() {
            result.conditional_assign(point, (i as u8 + 1).ct_eq(&n));
        }

        result
    }
}

/// Generator tables for fixed-base scalar multiplication: one
/// [`LookupTable`] per 4-bit window, table `i` holding multiples of
/// 16^i * G.
///
/// Building the tables costs hundreds of point operations, so they are
/// computed on first use and cached for the life of the process.
pub struct BasepointTables<C: PrimeCurveParams, const N: usize> {
    tables: LazyLock<[LookupTable<C>; N]>,
}

impl<C: PrimeCurveParams, const N: usize> BasepointTables<C, N> {
    /// Create an empty cache; the tables are built on first deref.
    pub const fn new() -> Self {
        Self {
            tables: LazyLock::new(Self::build),
        }
    }

    fn build() -> [LookupTable<C>; N] {
        let mut tables = [LookupTable {
            points: [ProjectivePoint::IDENTITY; 15],
        }; N];

        let mut base = ProjectivePoint::<C>::GENERATOR;
        for table in tables.iter_mut() {
            *table = LookupTable::new(&base);
            for _ in 0..4 {
                base = base.double();
            }
        }

        tables
    }
}

impl<C: PrimeCurveParams, const N: usize> Deref for BasepointTables<C, N> {
    type Target = [LookupTable<C>; N];

    fn deref(&self) -> &Self::Target {
        &self.tables
    }
}
