//! Error types.

use core::fmt;

/// Result type with the `nistec` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Point decoding and scalar multiplication errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Encoded point has an unrecognized prefix byte or a length that
    /// matches no SEC1 form for the curve.
    InvalidEncoding,

    /// Uncompressed coordinates do not satisfy the curve equation.
    NotOnCurve,

    /// Compressed x-coordinate has no square root, i.e. no point with
    /// that x-coordinate exists on the curve.
    InvalidCompressedPoint,

    /// Scalar length does not match the curve's field element size.
    InvalidScalarLength,

    /// The point at infinity has no affine x-coordinate.
    PointAtInfinity,

    /// The curve has no compressed-point support (its field prime is
    /// not congruent to 3 mod 4).
    UnsupportedCompression,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::InvalidEncoding => "invalid point encoding",
            Error::NotOnCurve => "point not on curve",
            Error::InvalidCompressedPoint => "invalid compressed point encoding",
            Error::InvalidScalarLength => "invalid scalar length",
            Error::PointAtInfinity => "point at infinity has no affine coordinates",
            Error::UnsupportedCompression => "curve does not support point compression",
        })
    }
}

impl std::error::Error for Error {}
