//! The tagged universal scalar.
//!
//! A [`Scalar`] holds exactly one value of one of five kinds and remembers
//! which. Booleans are a kind of their own: a `Bool` scalar is never integral
//! unless asked for explicitly, never equals a numeric value, and cannot be
//! negated.

use std::{fmt, ops::Neg};

use half::{bf16, f16};
use log::{debug, trace};
use num_complex::{Complex32, Complex64};

use crate::{
    element::Element,
    error::{ScalarError, ScalarResult},
    number_representations::{core::PositMath, posit::posit16_2::Posit16_2},
    scalar_type::ScalarType,
};

/// Which representation a [`Scalar`] holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Bool,
    Int,
    Float,
    Complex,
    Posit,
}

impl ScalarKind {
    pub const fn name(self) -> &'static str {
        match self {
            ScalarKind::Bool => "Bool",
            ScalarKind::Int => "Int",
            ScalarKind::Float => "Float",
            ScalarKind::Complex => "Complex",
            ScalarKind::Posit => "Posit",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single numeric value of any supported kind.
///
/// `PartialEq` is structural (same kind, same payload). Use
/// [`Scalar::equal`] to compare against a native value by mathematical value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Complex(Complex64),
    Posit(Posit16_2),
}

impl Default for Scalar {
    fn default() -> Self {
        Scalar::Int(0)
    }
}

/// A non-complex value as seen by the equality rules.
#[derive(Clone, Copy)]
enum Real {
    Int(i128),
    /// Only for `u128` values above `i128::MAX`.
    Huge(u128),
    Float(f64),
}

impl Real {
    fn same_value(self, other: Real) -> bool {
        // -2^127 is an i128, 2^127 is not; 2^128 is not a u128.
        const LOW: f64 = (1u128 << 127) as f64;
        const HIGH: f64 = 2.0 * LOW;
        match (self, other) {
            (Real::Int(a), Real::Int(b)) => a == b,
            (Real::Huge(a), Real::Huge(b)) => a == b,
            (Real::Float(a), Real::Float(b)) => a == b,
            (Real::Int(_), Real::Huge(_)) | (Real::Huge(_), Real::Int(_)) => false,
            (Real::Int(i), Real::Float(d)) | (Real::Float(d), Real::Int(i)) => {
                d.fract() == 0.0 && (-LOW..LOW).contains(&d) && d as i128 == i
            }
            (Real::Huge(n), Real::Float(d)) | (Real::Float(d), Real::Huge(n)) => {
                d.fract() == 0.0 && (LOW..HIGH).contains(&d) && d as u128 == n
            }
        }
    }
}

mod private {
    pub trait Sealed {}
}

/// Native values a [`Scalar`] can be compared against with [`Scalar::equal`].
///
/// Covers everything with a `From` impl into `Scalar` plus the integer types
/// too wide for the `Int` slot, which are compared without narrowing.
pub trait Comparable: Copy + private::Sealed {
    fn equals_scalar(self, scalar: &Scalar) -> bool;
}

macro_rules! impl_comparable_via_from {
    ($($ty:ty),* $(,)?) => {$(
        impl private::Sealed for $ty {}

        impl Comparable for $ty {
            fn equals_scalar(self, scalar: &Scalar) -> bool {
                scalar.equal_scalar(self.into())
            }
        }
    )*};
}

impl_comparable_via_from!(
    bool, i8, i16, i32, i64, u8, u16, u32, f32, f64, f16, bf16, Complex32, Complex64, Posit16_2,
    Scalar,
);

macro_rules! impl_comparable_for_wide_int {
    ($($ty:ty),*) => {$(
        impl private::Sealed for $ty {}

        impl Comparable for $ty {
            fn equals_scalar(self, scalar: &Scalar) -> bool {
                let value = i128::try_from(self).map_or(Real::Huge(self as u128), Real::Int);
                scalar.real_part().is_some_and(|r| r.same_value(value))
            }
        }
    )*};
}

impl_comparable_for_wide_int!(u64, usize, isize, i128, u128);

impl Scalar {
    pub fn kind(&self) -> ScalarKind {
        match self {
            Scalar::Bool(_) => ScalarKind::Bool,
            Scalar::Int(_) => ScalarKind::Int,
            Scalar::Float(_) => ScalarKind::Float,
            Scalar::Complex(_) => ScalarKind::Complex,
            Scalar::Posit(_) => ScalarKind::Posit,
        }
    }

    /// Convert to `T`, failing instead of truncating, wrapping or dropping an
    /// imaginary part.
    pub fn to<T: Element>(&self) -> ScalarResult<T> {
        let from = self.kind().name();
        let converted = match *self {
            Scalar::Bool(b) => T::checked_from_i64(i64::from(b), from),
            Scalar::Int(i) => T::checked_from_i64(i, from),
            Scalar::Float(d) => T::checked_from_f64(d, from),
            Scalar::Complex(z) => T::checked_from_complex(z, from),
            Scalar::Posit(p) => T::checked_from_f64(p.to_double(), from),
        };
        if let Err(err) = &converted {
            trace!("refusing to convert {self} to {}: {err}", T::SCALAR_TYPE);
        }
        converted
    }

    pub fn is_floating_point(&self) -> bool {
        matches!(self, Scalar::Float(_))
    }

    #[deprecated(note = "use `is_integral(include_bool)` to say whether booleans count")]
    pub fn is_int(&self) -> bool {
        self.is_integral(false)
    }

    pub fn is_integral(&self, include_bool: bool) -> bool {
        match self {
            Scalar::Int(_) => true,
            Scalar::Bool(_) => include_bool,
            _ => false,
        }
    }

    pub fn is_complex(&self) -> bool {
        matches!(self, Scalar::Complex(_))
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, Scalar::Bool(_))
    }

    pub fn is_posit(&self) -> bool {
        matches!(self, Scalar::Posit(_))
    }

    pub fn scalar_type(&self) -> ScalarType {
        match self {
            Scalar::Complex(_) => ScalarType::ComplexDouble,
            Scalar::Float(_) => ScalarType::Double,
            Scalar::Int(_) => ScalarType::Long,
            Scalar::Bool(_) => ScalarType::Bool,
            Scalar::Posit(_) => ScalarType::Posit16es2,
        }
    }

    /// Compare against a native value without crossing the boolean boundary.
    ///
    /// A boolean only ever equals a `Bool` scalar holding the same bit, and a
    /// `Bool` scalar never equals a number, even 0 or 1. Everything else is
    /// compared by exact mathematical value; a complex value equals a real
    /// one only when its imaginary part is zero. Two posits compare by bit
    /// pattern like `Posit16_2`'s own `==`, so NaR equals NaR, but NaR never
    /// equals any other kind (NaN included).
    pub fn equal<T: Comparable>(&self, num: T) -> bool {
        num.equals_scalar(self)
    }

    fn equal_scalar(&self, other: Scalar) -> bool {
        match (*self, other) {
            (Scalar::Bool(a), Scalar::Bool(b)) => a == b,
            (Scalar::Bool(_), _) | (_, Scalar::Bool(_)) => false,
            (Scalar::Complex(a), Scalar::Complex(b)) => a == b,
            (Scalar::Posit(a), Scalar::Posit(b)) => a == b,
            (a, b) => match (a.real_part(), b.real_part()) {
                (Some(x), Some(y)) => x.same_value(y),
                _ => false,
            },
        }
    }

    fn real_part(&self) -> Option<Real> {
        match *self {
            Scalar::Int(i) => Some(Real::Int(i.into())),
            Scalar::Float(d) => Some(Real::Float(d)),
            Scalar::Posit(p) => Some(Real::Float(p.to_double())),
            Scalar::Complex(z) if z.im == 0.0 => Some(Real::Float(z.re)),
            Scalar::Complex(_) | Scalar::Bool(_) => None,
        }
    }

    /// `-self`, keeping the kind. Integers wrap like native negation.
    pub fn negate(&self) -> ScalarResult<Scalar> {
        match *self {
            Scalar::Bool(_) => {
                debug!("rejecting negation of boolean scalar {self}");
                Err(ScalarError::UnsupportedOperation {
                    op: "negation",
                    kind: self.kind().name(),
                })
            }
            Scalar::Int(i) => Ok(Scalar::Int(i.wrapping_neg())),
            Scalar::Float(d) => Ok(Scalar::Float(-d)),
            Scalar::Complex(z) => Ok(Scalar::Complex(-z)),
            Scalar::Posit(p) => Ok(Scalar::Posit(-p)),
        }
    }

    /// Complex conjugate; the identity for every other kind.
    pub fn conj(&self) -> Scalar {
        match *self {
            Scalar::Complex(z) => Scalar::Complex(z.conj()),
            other => other,
        }
    }

    /// Natural logarithm.
    ///
    /// Booleans and integers are widened to `f64` and give a `Float`; a posit
    /// stays a posit. Zero follows the kind's own convention: `-inf` for
    /// doubles, NaR for posits.
    pub fn log(&self) -> Scalar {
        match *self {
            Scalar::Complex(z) => Scalar::Complex(z.ln()),
            Scalar::Float(d) => Scalar::Float(d.ln()),
            Scalar::Bool(b) => Scalar::Float(f64::from(u8::from(b)).ln()),
            Scalar::Int(i) => Scalar::Float((i as f64).ln()),
            Scalar::Posit(p) => Scalar::Posit(PositMath::log(p)),
        }
    }
}

macro_rules! define_accessors {
    ($($name:ident => $ty:ty),* $(,)?) => {
        impl Scalar {
            $(
                pub fn $name(&self) -> ScalarResult<$ty> {
                    self.to::<$ty>()
                }
            )*
        }
    };
}

define_accessors!(
    to_u8 => u8,
    to_i8 => i8,
    to_i16 => i16,
    to_i32 => i32,
    to_i64 => i64,
    to_f16 => f16,
    to_bf16 => bf16,
    to_f32 => f32,
    to_f64 => f64,
    to_complex32 => Complex32,
    to_complex64 => Complex64,
    to_bool => bool,
    to_posit16_2 => Posit16_2,
);

impl Neg for Scalar {
    type Output = ScalarResult<Scalar>;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Int(i) => write!(f, "{i}"),
            Scalar::Float(d) => write!(f, "{d}"),
            Scalar::Complex(z) => write!(f, "{z}"),
            Scalar::Posit(p) => write!(f, "{p}"),
        }
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

macro_rules! impl_from_for_scalar {
    ($variant:ident: $($ty:ty),*) => {$(
        impl From<$ty> for Scalar {
            fn from(value: $ty) -> Self {
                Scalar::$variant(value.into())
            }
        }
    )*};
}

impl_from_for_scalar!(Int: i8, i16, i32, i64, u8, u16, u32);
impl_from_for_scalar!(Float: f32, f64, f16, bf16);

impl From<Complex64> for Scalar {
    fn from(value: Complex64) -> Self {
        Scalar::Complex(value)
    }
}

impl From<Complex32> for Scalar {
    fn from(value: Complex32) -> Self {
        Scalar::Complex(Complex64::new(value.re.into(), value.im.into()))
    }
}

impl From<Posit16_2> for Scalar {
    fn from(value: Posit16_2) -> Self {
        Scalar::Posit(value)
    }
}

/// Integer types wider than the `Int` slot go through a checked conversion.
macro_rules! impl_try_from_for_scalar {
    ($($ty:ty),*) => {$(
        impl TryFrom<$ty> for Scalar {
            type Error = ScalarError;

            fn try_from(value: $ty) -> ScalarResult<Self> {
                i64::try_from(value).map(Scalar::Int).map_err(|_| {
                    ScalarError::overflow(value, stringify!($ty), ScalarType::Long.name())
                })
            }
        }
    )*};
}

impl_try_from_for_scalar!(u64, usize, isize, i128, u128);
