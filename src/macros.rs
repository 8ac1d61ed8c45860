//! Internal macros for defining per-curve field parameters.

/// Define a [`MontyFieldParams`][`crate::field::MontyFieldParams`] type
/// for the given modulus.
///
/// The modulus hex string must be padded to the full width of the
/// backing integer.
macro_rules! monty_field_params {
    (
        name: $name:ident,
        modulus: $modulus:expr,
        uint: $uint:ty,
        byte_size: $byte_size:expr,
        doc: $doc:expr$(,)?
    ) => {
        bigint::const_monty_params!($name, $uint, $modulus, $doc);

        impl $crate::field::MontyFieldParams<{ <$uint>::LIMBS }> for $name {
            const BYTE_SIZE: usize = $byte_size;
        }
    };
}

pub(crate) use monty_field_params;
