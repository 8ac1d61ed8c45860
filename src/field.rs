//! Prime field arithmetic using `crypto-bigint`'s [`MontyForm`]
//! Montgomery form representation.
//!
//! Curve implementations consume field elements through the [`Field`]
//! trait; [`MontyFieldElement`] provides it generically for any odd
//! modulus described by a [`MontyFieldParams`] impl.

use core::fmt::{self, Debug};
use core::ops::{Add, Mul, Neg, Sub};

use bigint::{
    ArrayEncoding, ByteArray, Uint, ctutils,
    modular::{ConstMontyForm as MontyForm, ConstMontyParams},
};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

/// Field element operations required by the point arithmetic and codec
/// layers.
///
/// All methods run in constant time with respect to the element's value;
/// the only value-dependent outputs are the `Choice`/`CtOption` flags.
pub trait Field:
    'static
    + Copy
    + Clone
    + Debug
    + Default
    + Eq
    + PartialEq
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + ConditionallySelectable
    + ConstantTimeEq
{
    /// Additive identity.
    const ZERO: Self;

    /// Multiplicative identity.
    const ONE: Self;

    /// Size of the canonical big-endian encoding in bytes.
    const BYTE_SIZE: usize;

    /// Decode from canonical big-endian bytes.
    ///
    /// The flag is cleared when `bytes` is not exactly
    /// [`Self::BYTE_SIZE`] long or encodes a value not less than the
    /// modulus.
    fn from_slice(bytes: &[u8]) -> CtOption<Self>;

    /// Canonical big-endian encoding, exactly [`Self::BYTE_SIZE`] bytes.
    fn to_bytes(&self) -> Vec<u8>;

    /// Double this element.
    fn double(&self) -> Self;

    /// Square this element.
    fn square(&self) -> Self;

    /// Compute field inversion: `1 / self`.
    ///
    /// The flag is cleared for zero, in which case the wrapped value is
    /// unspecified.
    fn invert(&self) -> CtOption<Self>;

    /// Returns `self^(2^n)`, i.e. `n` repeated squarings.
    ///
    /// `n` is branched upon and should NOT be secret.
    fn sqn(&self, n: usize) -> Self {
        let mut x = *self;
        for _ in 0..n {
            x = x.square();
        }
        x
    }

    /// Determine if this field element is zero.
    fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::ZERO)
    }

    /// Determine if this field element is odd: `self mod 2 == 1`.
    fn is_odd(&self) -> Choice;
}

/// Extension trait for defining the serialized size of a modulus beyond
/// the parameters provided by [`ConstMontyParams`].
pub trait MontyFieldParams<const LIMBS: usize>: ConstMontyParams<LIMBS> {
    /// Size of a field element when serialized as bytes. May be smaller
    /// than the backing integer for moduli padded out to a limb
    /// boundary.
    const BYTE_SIZE: usize;
}

/// Field element type which uses an internal Montgomery form
/// representation.
#[derive(Clone, Copy)]
pub struct MontyFieldElement<MOD, const LIMBS: usize>
where
    MOD: MontyFieldParams<LIMBS>,
{
    inner: MontyForm<MOD, LIMBS>,
}

impl<MOD, const LIMBS: usize> MontyFieldElement<MOD, LIMBS>
where
    MOD: MontyFieldParams<LIMBS>,
{
    /// Zero element (additive identity).
    pub const ZERO: Self = Self {
        inner: MontyForm::ZERO,
    };

    /// Multiplicative identity.
    pub const ONE: Self = Self {
        inner: MontyForm::ONE,
    };

    /// Decode a field element from big-endian hex-encoded bytes.
    ///
    /// This is primarily intended for defining constants using hex
    /// literals.
    ///
    /// # Panics
    ///
    /// - When hex is malformed
    /// - When input is the wrong length
    /// - If input overflows the modulus
    pub const fn from_hex_vartime(hex: &str) -> Self {
        let uint = Uint::from_be_hex(hex);

        assert!(
            uint.cmp_vartime(MOD::PARAMS.modulus().as_ref()).is_lt(),
            "hex encoded field element overflows modulus"
        );

        Self::from_uint_reduced(&uint)
    }

    /// Convert [`Uint`] into [`MontyFieldElement`], converting it into
    /// Montgomery form and reducing it modulo `p`.
    #[inline]
    pub const fn from_uint_reduced(uint: &Uint<LIMBS>) -> Self {
        Self {
            inner: MontyForm::new(uint),
        }
    }

    /// Convert a `u64` into a [`MontyFieldElement`].
    ///
    /// # Panics
    ///
    /// If the modulus is 64-bits or smaller.
    #[inline]
    pub const fn from_u64(w: u64) -> Self {
        if MOD::PARAMS.modulus().as_ref().bits() <= 64 {
            panic!("modulus is too small to ensure all u64s are in range");
        }

        Self::from_uint_reduced(&Uint::from_u64(w))
    }

    /// Add elements.
    #[inline]
    pub const fn add(&self, rhs: &Self) -> Self {
        Self {
            inner: MontyForm::add(&self.inner, &rhs.inner),
        }
    }

    /// Subtract elements.
    #[inline]
    pub const fn sub(&self, rhs: &Self) -> Self {
        Self {
            inner: MontyForm::sub(&self.inner, &rhs.inner),
        }
    }

    /// Multiply elements.
    #[inline]
    pub const fn multiply(&self, rhs: &Self) -> Self {
        Self {
            inner: MontyForm::mul(&self.inner, &rhs.inner),
        }
    }

    /// Negate element.
    #[inline]
    pub const fn neg(&self) -> Self {
        Self {
            inner: MontyForm::neg(&self.inner),
        }
    }

    /// Translate out of the Montgomery domain, returning a [`Uint`] in
    /// canonical form.
    #[inline]
    const fn to_canonical(self) -> Uint<LIMBS> {
        self.inner.retrieve()
    }
}

impl<MOD, const LIMBS: usize> Field for MontyFieldElement<MOD, LIMBS>
where
    MOD: MontyFieldParams<LIMBS>,
    Uint<LIMBS>: ArrayEncoding,
{
    const ZERO: Self = Self::ZERO;
    const ONE: Self = Self::ONE;
    const BYTE_SIZE: usize = MOD::BYTE_SIZE;

    fn from_slice(bytes: &[u8]) -> CtOption<Self> {
        if bytes.len() != MOD::BYTE_SIZE {
            return CtOption::new(Self::ZERO, Choice::from(0));
        }

        let mut byte_array = ByteArray::<Uint<LIMBS>>::default();
        let offset = byte_array.len() - MOD::BYTE_SIZE;
        byte_array[offset..].copy_from_slice(bytes);
        let uint = Uint::from_be_byte_array(byte_array);

        let is_some = ctutils::CtLt::ct_lt(&uint, MOD::PARAMS.modulus());
        CtOption::new(Self::from_uint_reduced(&uint), is_some.into())
    }

    fn to_bytes(&self) -> Vec<u8> {
        let padded = self.to_canonical().to_be_byte_array();
        padded[padded.len() - MOD::BYTE_SIZE..].to_vec()
    }

    fn double(&self) -> Self {
        self.add(self)
    }

    fn square(&self) -> Self {
        self.multiply(self)
    }

    fn invert(&self) -> CtOption<Self> {
        CtOption::from(self.inner.invert()).map(|inner| Self { inner })
    }

    fn is_odd(&self) -> Choice {
        self.to_canonical().is_odd().into()
    }
}

//
// Arithmetic trait impls
//

/// Emit a `core::ops` trait wrapper for an inherent method.
macro_rules! monty_field_op {
    ($op:tt, $func:ident, $inner_func:ident) => {
        impl<MOD, const LIMBS: usize> $op for MontyFieldElement<MOD, LIMBS>
        where
            MOD: MontyFieldParams<LIMBS>,
        {
            type Output = MontyFieldElement<MOD, LIMBS>;

            #[inline]
            fn $func(self, rhs: MontyFieldElement<MOD, LIMBS>) -> MontyFieldElement<MOD, LIMBS> {
                <MontyFieldElement<MOD, LIMBS>>::$inner_func(&self, &rhs)
            }
        }

        impl<MOD, const LIMBS: usize> $op<&Self> for MontyFieldElement<MOD, LIMBS>
        where
            MOD: MontyFieldParams<LIMBS>,
        {
            type Output = MontyFieldElement<MOD, LIMBS>;

            #[inline]
            fn $func(self, rhs: &MontyFieldElement<MOD, LIMBS>) -> MontyFieldElement<MOD, LIMBS> {
                <MontyFieldElement<MOD, LIMBS>>::$inner_func(&self, rhs)
            }
        }
    };
}

monty_field_op!(Add, add, add);
monty_field_op!(Sub, sub, sub);
monty_field_op!(Mul, mul, multiply);

impl<MOD, const LIMBS: usize> Neg for MontyFieldElement<MOD, LIMBS>
where
    MOD: MontyFieldParams<LIMBS>,
{
    type Output = MontyFieldElement<MOD, LIMBS>;

    #[inline]
    fn neg(self) -> MontyFieldElement<MOD, LIMBS> {
        <MontyFieldElement<MOD, LIMBS>>::neg(&self)
    }
}

//
// `subtle` trait impls
//

impl<MOD, const LIMBS: usize> ConditionallySelectable for MontyFieldElement<MOD, LIMBS>
where
    MOD: MontyFieldParams<LIMBS>,
{
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            inner: MontyForm::conditional_select(&a.inner, &b.inner, choice),
        }
    }
}

impl<MOD, const LIMBS: usize> ConstantTimeEq for MontyFieldElement<MOD, LIMBS>
where
    MOD: MontyFieldParams<LIMBS>,
{
    fn ct_eq(&self, other: &Self) -> Choice {
        self.inner.ct_eq(&other.inner)
    }
}

//
// Miscellaneous trait impls
//

impl<MOD, const LIMBS: usize> Default for MontyFieldElement<MOD, LIMBS>
where
    MOD: MontyFieldParams<LIMBS>,
{
    fn default() -> Self {
        Self::ZERO
    }
}

impl<MOD: MontyFieldParams<LIMBS>, const LIMBS: usize> Eq for MontyFieldElement<MOD, LIMBS> {}

impl<MOD: MontyFieldParams<LIMBS>, const LIMBS: usize> PartialEq for MontyFieldElement<MOD, LIMBS> {
    fn eq(&self, rhs: &Self) -> bool {
        self.inner.ct_eq(&rhs.inner).into()
    }
}

impl<MOD, const LIMBS: usize> Debug for MontyFieldElement<MOD, LIMBS>
where
    MOD: MontyFieldParams<LIMBS>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MontyFieldElement(0x{:X})", self.to_canonical())
    }
}

impl<MOD, const LIMBS: usize> zeroize::DefaultIsZeroes for MontyFieldElement<MOD, LIMBS> where
    MOD: MontyFieldParams<LIMBS>
{
}
