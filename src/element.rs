//! Native element types a [`Scalar`] can be converted into.
//!
//! Every conversion out of a scalar goes through [`Element`], which knows how
//! to take each stored representation (`i64`, `f64`, `Complex64`) into the
//! target type without silently losing information. The trait is sealed: the
//! set of supported targets is closed, and asking for any other type is a
//! compile error.

use half::{bf16, f16};
use num_complex::{Complex32, Complex64};
use num_traits::NumCast;

use crate::{
    error::{ScalarError, ScalarResult},
    number_representations::posit::posit16_2::Posit16_2,
    scalar::Scalar,
    scalar_type::ScalarType,
};

mod private {
    pub trait Sealed {}
}

pub trait Element: Copy + Into<Scalar> + private::Sealed {
    /// The type identifier reported in conversion errors.
    const SCALAR_TYPE: ScalarType;

    fn checked_from_i64(value: i64, from: &'static str) -> ScalarResult<Self>;

    fn checked_from_f64(value: f64, from: &'static str) -> ScalarResult<Self>;

    /// Real targets accept a complex value only when its imaginary part is
    /// exactly zero.
    fn checked_from_complex(value: Complex64, from: &'static str) -> ScalarResult<Self> {
        if value.im != 0.0 {
            return Err(ScalarError::loss(value, from, Self::SCALAR_TYPE.name()));
        }
        Self::checked_from_f64(value.re, from)
    }

    fn into_scalar(self) -> Scalar {
        self.into()
    }
}

/// The integral part of `value`, or the error an integer target reports for it.
fn whole_number(value: f64, from: &'static str, to: ScalarType) -> ScalarResult<f64> {
    if value.is_nan() || (value.is_finite() && value.fract() != 0.0) {
        Err(ScalarError::loss(value, from, to.name()))
    } else if value.is_infinite() {
        Err(ScalarError::overflow(value, from, to.name()))
    } else {
        Ok(value)
    }
}

/// Finite values above `max` overflow; infinities and NaN pass through.
fn check_float_range(value: f64, max: f64, from: &'static str, to: ScalarType) -> ScalarResult<f64> {
    if value.is_finite() && value.abs() > max {
        Err(ScalarError::overflow(value, from, to.name()))
    } else {
        Ok(value)
    }
}

macro_rules! impl_integer_element {
    ($($ty:ty => $scalar_type:ident),* $(,)?) => {$(
        impl private::Sealed for $ty {}

        impl Element for $ty {
            const SCALAR_TYPE: ScalarType = ScalarType::$scalar_type;

            fn checked_from_i64(value: i64, from: &'static str) -> ScalarResult<Self> {
                <$ty>::try_from(value)
                    .map_err(|_| ScalarError::overflow(value, from, Self::SCALAR_TYPE.name()))
            }

            fn checked_from_f64(value: f64, from: &'static str) -> ScalarResult<Self> {
                let whole = whole_number(value, from, Self::SCALAR_TYPE)?;
                <$ty as NumCast>::from(whole)
                    .ok_or_else(|| ScalarError::overflow(value, from, Self::SCALAR_TYPE.name()))
            }
        }
    )*};
}

impl_integer_element!(
    u8 => Byte,
    i8 => Char,
    i16 => Short,
    i32 => Int,
    i64 => Long,
);

impl private::Sealed for f64 {}

impl Element for f64 {
    const SCALAR_TYPE: ScalarType = ScalarType::Double;

    fn checked_from_i64(value: i64, _from: &'static str) -> ScalarResult<Self> {
        Ok(value as f64)
    }

    fn checked_from_f64(value: f64, _from: &'static str) -> ScalarResult<Self> {
        Ok(value)
    }
}

impl private::Sealed for f32 {}

impl Element for f32 {
    const SCALAR_TYPE: ScalarType = ScalarType::Float;

    fn checked_from_i64(value: i64, _from: &'static str) -> ScalarResult<Self> {
        Ok(value as f32)
    }

    fn checked_from_f64(value: f64, from: &'static str) -> ScalarResult<Self> {
        check_float_range(value, f32::MAX as f64, from, Self::SCALAR_TYPE).map(|v| v as f32)
    }
}

macro_rules! impl_half_element {
    ($($ty:ty => $scalar_type:ident),* $(,)?) => {$(
        impl private::Sealed for $ty {}

        impl Element for $ty {
            const SCALAR_TYPE: ScalarType = ScalarType::$scalar_type;

            fn checked_from_i64(value: i64, from: &'static str) -> ScalarResult<Self> {
                Self::checked_from_f64(value as f64, from)
            }

            fn checked_from_f64(value: f64, from: &'static str) -> ScalarResult<Self> {
                check_float_range(value, <$ty>::MAX.to_f64(), from, Self::SCALAR_TYPE)
                    .map(<$ty>::from_f64)
            }
        }
    )*};
}

impl_half_element!(f16 => Half, bf16 => BFloat16);

impl private::Sealed for bool {}

impl Element for bool {
    const SCALAR_TYPE: ScalarType = ScalarType::Bool;

    fn checked_from_i64(value: i64, from: &'static str) -> ScalarResult<Self> {
        match value {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(ScalarError::overflow(value, from, Self::SCALAR_TYPE.name())),
        }
    }

    fn checked_from_f64(value: f64, from: &'static str) -> ScalarResult<Self> {
        let whole = whole_number(value, from, Self::SCALAR_TYPE)?;
        if whole == 0.0 {
            Ok(false)
        } else if whole == 1.0 {
            Ok(true)
        } else {
            Err(ScalarError::overflow(value, from, Self::SCALAR_TYPE.name()))
        }
    }
}

impl private::Sealed for Posit16_2 {}

impl Element for Posit16_2 {
    const SCALAR_TYPE: ScalarType = ScalarType::Posit16es2;

    fn checked_from_i64(value: i64, from: &'static str) -> ScalarResult<Self> {
        Self::checked_from_f64(value as f64, from)
    }

    /// Posits have no infinity, so only NaN passes through (as NaR).
    fn checked_from_f64(value: f64, from: &'static str) -> ScalarResult<Self> {
        if value.is_infinite() {
            return Err(ScalarError::overflow(value, from, Self::SCALAR_TYPE.name()));
        }
        check_float_range(value, Posit16_2::MAXPOS.to_f64(), from, Self::SCALAR_TYPE)
            .map(Posit16_2::from_f64)
    }
}

impl private::Sealed for Complex64 {}

impl Element for Complex64 {
    const SCALAR_TYPE: ScalarType = ScalarType::ComplexDouble;

    fn checked_from_i64(value: i64, _from: &'static str) -> ScalarResult<Self> {
        Ok(Complex64::new(value as f64, 0.0))
    }

    fn checked_from_f64(value: f64, _from: &'static str) -> ScalarResult<Self> {
        Ok(Complex64::new(value, 0.0))
    }

    fn checked_from_complex(value: Complex64, _from: &'static str) -> ScalarResult<Self> {
        Ok(value)
    }
}

impl private::Sealed for Complex32 {}

impl Element for Complex32 {
    const SCALAR_TYPE: ScalarType = ScalarType::ComplexFloat;

    fn checked_from_i64(value: i64, _from: &'static str) -> ScalarResult<Self> {
        Ok(Complex32::new(value as f32, 0.0))
    }

    fn checked_from_f64(value: f64, from: &'static str) -> ScalarResult<Self> {
        Self::checked_from_complex(Complex64::new(value, 0.0), from)
    }

    fn checked_from_complex(value: Complex64, from: &'static str) -> ScalarResult<Self> {
        let max = f32::MAX as f64;
        let to = Self::SCALAR_TYPE;
        if check_float_range(value.re, max, from, to).is_err()
            || check_float_range(value.im, max, from, to).is_err()
        {
            return Err(ScalarError::overflow(value, from, to.name()));
        }
        Ok(Complex32::new(value.re as f32, value.im as f32))
    }
}
