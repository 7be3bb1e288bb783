use std::{
    fmt::{Debug, Display},
    ops::Neg,
};

use ndarray::{LinalgScalar, ScalarOperand};
use num_traits::{Num, NumCast};

/// Math operations a floating-point-like kind must supply so generic numeric
/// code can treat it the same way it treats `f32` and `f64`.
pub trait PositMath: Sized {
    fn floor(self) -> Self;
    fn ceil(self) -> Self;
    fn trunc(self) -> Self;
    /// Round to the nearest integer, ties to even.
    fn nearbyint(self) -> Self;

    fn exp(self) -> Self;
    fn expm1(self) -> Self;
    /// Natural logarithm.
    fn log(self) -> Self;
    fn log10(self) -> Self;
    fn log1p(self) -> Self;
    fn log2(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn tanh(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    fn erf(self) -> Self;
    fn erfc(self) -> Self;
    fn lgamma(self) -> Self;

    fn sqrt(self) -> Self;
    fn rsqrt(self) -> Self;
    fn abs(self) -> Self;
    fn powf(self, exponent: f64) -> Self;
    fn pow(self, exponent: Self) -> Self;
    fn fmod(self, divisor: Self) -> Self;
    /// The next representable value after `self` in the direction of `toward`.
    fn nextafter(self, toward: Self) -> Self;

    fn to_double(self) -> f64;
    fn from_double(value: f64) -> Self;
}

/// A compact-float kind usable anywhere the crate's generic numeric code runs,
/// including as an `ndarray` element.
pub trait CompactFloat:
    PositMath
    + LinalgScalar
    + ScalarOperand
    + Num
    + NumCast
    + Neg<Output = Self>
    + PartialOrd
    + Display
    + Debug
{
}

macro_rules! impl_posit_math_for_float {
    ($ty:ty, $erf:path, $erfc:path, $lgamma:path, $rint:path, $fmod:path, $nextafter:path) => {
        impl PositMath for $ty {
            fn floor(self) -> Self {
                <$ty>::floor(self)
            }
            fn ceil(self) -> Self {
                <$ty>::ceil(self)
            }
            fn trunc(self) -> Self {
                <$ty>::trunc(self)
            }
            fn nearbyint(self) -> Self {
                $rint(self)
            }
            fn exp(self) -> Self {
                <$ty>::exp(self)
            }
            fn expm1(self) -> Self {
                <$ty>::exp_m1(self)
            }
            fn log(self) -> Self {
                <$ty>::ln(self)
            }
            fn log10(self) -> Self {
                <$ty>::log10(self)
            }
            fn log1p(self) -> Self {
                <$ty>::ln_1p(self)
            }
            fn log2(self) -> Self {
                <$ty>::log2(self)
            }
            fn sin(self) -> Self {
                <$ty>::sin(self)
            }
            fn cos(self) -> Self {
                <$ty>::cos(self)
            }
            fn tan(self) -> Self {
                <$ty>::tan(self)
            }
            fn tanh(self) -> Self {
                <$ty>::tanh(self)
            }
            fn asin(self) -> Self {
                <$ty>::asin(self)
            }
            fn acos(self) -> Self {
                <$ty>::acos(self)
            }
            fn atan(self) -> Self {
                <$ty>::atan(self)
            }
            fn erf(self) -> Self {
                $erf(self)
            }
            fn erfc(self) -> Self {
                $erfc(self)
            }
            fn lgamma(self) -> Self {
                $lgamma(self)
            }
            fn sqrt(self) -> Self {
                <$ty>::sqrt(self)
            }
            fn rsqrt(self) -> Self {
                1.0 / <$ty>::sqrt(self)
            }
            fn abs(self) -> Self {
                <$ty>::abs(self)
            }
            fn powf(self, exponent: f64) -> Self {
                <$ty>::powf(self, exponent as $ty)
            }
            fn pow(self, exponent: Self) -> Self {
                <$ty>::powf(self, exponent)
            }
            fn fmod(self, divisor: Self) -> Self {
                $fmod(self, divisor)
            }
            fn nextafter(self, toward: Self) -> Self {
                $nextafter(self, toward)
            }
            fn to_double(self) -> f64 {
                self as f64
            }
            fn from_double(value: f64) -> Self {
                value as $ty
            }
        }

        impl CompactFloat for $ty {}
    };
}

impl_posit_math_for_float!(
    f32,
    libm::erff,
    libm::erfcf,
    libm::lgammaf,
    libm::rintf,
    libm::fmodf,
    libm::nextafterf
);
impl_posit_math_for_float!(
    f64,
    libm::erf,
    libm::erfc,
    libm::lgamma,
    libm::rint,
    libm::fmod,
    libm::nextafter
);
