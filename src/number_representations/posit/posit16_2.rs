use std::{
    cmp::Ordering,
    fmt,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, Sub, SubAssign},
};

use ndarray::ScalarOperand;
use num_traits::{FromPrimitive, Num, NumCast, One, ToPrimitive, Zero};

use crate::number_representations::{
    core::{CompactFloat, PositMath},
    posit::core::{DecodedPosit16, Posit},
};

/// A 16-bit posit with two exponent bits (`posit<16,2>`).
///
/// Arithmetic is carried out in `f64` and rounded once back to 16 bits. Every
/// posit<16,2> value is exact in `f64` and products/quotients of 12-bit
/// significands round correctly from there, so the result matches a native
/// posit unit.
#[derive(Debug, Clone, Copy, Default, Hash)]
pub struct Posit16_2 {
    bits: u16,
}

impl Posit<16, 2> for Posit16_2 {}

impl Posit16_2 {
    pub const ZERO: Self = Posit16_2 { bits: 0 };
    pub const NAR: Self = Posit16_2 {
        bits: 1 << (Self::N - 1),
    };
    pub const ONE: Self = Posit16_2 { bits: 0x4000 };
    /// `2^56`
    pub const MAXPOS: Self = Posit16_2 { bits: 0x7FFF };
    /// `2^-56`
    pub const MINPOS: Self = Posit16_2 { bits: 0x0001 };

    pub const fn from_bits(bits: u16) -> Self {
        Posit16_2 { bits }
    }

    pub const fn to_bits(self) -> u16 {
        self.bits
    }

    pub fn is_nar(self) -> bool {
        self.bits == Self::NAR.bits
    }

    pub fn is_zero(self) -> bool {
        self.bits == Self::ZERO.bits
    }

    pub fn is_negative(self) -> bool {
        (self.bits as i16) < 0 && !self.is_nar()
    }

    /// `None` for zero and NaR.
    pub(crate) fn decode(self) -> Option<DecodedPosit16> {
        if self.is_zero() || self.is_nar() {
            return None;
        }

        let sign = self.bits >> 15 == 1;
        let abs_bits = if sign {
            self.bits.wrapping_neg()
        } else {
            self.bits
        };

        // Regime, exponent and fraction left-aligned with the sign dropped.
        let body = (abs_bits as u32) << 17;
        let regime_bit = body >> 31;
        let run = if regime_bit == 1 {
            body.leading_ones()
        } else {
            body.leading_zeros()
        }
        .min(15);

        let k = if regime_bit == 1 {
            run as i32 - 1
        } else {
            -(run as i32)
        };
        // The terminating bit is absent when the regime fills the word.
        let regime_len = (run + 1).min(15);

        let es = Self::ES as u32;
        let rest = body << regime_len;
        // Exponent bits cut off by the regime read as zero.
        let es_val = (rest >> (32 - es)) as i32;
        let frac_len = (15 - regime_len).saturating_sub(es);
        let frac_bits = if frac_len > 0 {
            (rest << es) >> (32 - frac_len)
        } else {
            0
        };

        Some(DecodedPosit16 {
            sign,
            scale: k * Self::USEED.ilog2() as i32 + es_val,
            mantissa: (1 << frac_len) | frac_bits,
            frac_len,
        })
    }

    /// Round `value` to the nearest posit, ties to even.
    ///
    /// Non-zero values never round to zero or NaR: magnitudes beyond the
    /// representable range saturate to `minpos` / `maxpos`.
    pub fn from_f64(value: f64) -> Self {
        if value == 0.0 {
            return Self::ZERO;
        }
        if !value.is_finite() {
            return Self::NAR;
        }

        let sign = value.is_sign_negative();
        let magnitude = value.abs();
        let max_scale = Self::MAX_SCALE;

        let body: u32 = if magnitude >= 2f64.powi(max_scale) {
            Self::MAXPOS.bits as u32
        } else if magnitude <= 2f64.powi(-max_scale) {
            Self::MINPOS.bits as u32
        } else {
            // Within (2^-56, 2^56) the input is a normal f64.
            let input_bits = magnitude.to_bits();
            let exp = ((input_bits >> 52) & 0x7FF) as i32 - 1023;
            let frac = input_bits & ((1u64 << 52) - 1);

            let es = Self::ES as u32;
            // Each regime step scales by useed.
            let useed_log2 = Self::USEED.ilog2() as i32;
            let k = exp.div_euclid(useed_log2);
            let es_val = exp.rem_euclid(useed_log2) as u128;

            let (regime, regime_len) = if k >= 0 {
                (((1u128 << (k + 1)) - 1) << 1, k as u32 + 2)
            } else {
                (1u128, (-k) as u32 + 1)
            };

            // Unbounded posit body: regime | exponent | 52 fraction bits.
            let tail_len = es + 52;
            let full = (regime << tail_len) | (es_val << 52) | frac as u128;
            let shift = regime_len + tail_len - 15;

            let mut body = (full >> shift) as u32;
            let guard = (full >> (shift - 1)) & 1 == 1;
            let sticky = full & ((1u128 << (shift - 1)) - 1) != 0;
            if guard && (sticky || body & 1 == 1) {
                body += 1;
            }
            body
        };

        let bits = body as u16;
        Self::from_bits(if sign { bits.wrapping_neg() } else { bits })
    }

    pub fn to_f64(self) -> f64 {
        match self.decode() {
            Some(decoded) => decoded.to_f64(),
            None if self.is_nar() => f64::NAN,
            None => 0.0,
        }
    }

    fn lift(self, f: impl FnOnce(f64) -> f64) -> Self {
        Self::from_f64(f(self.to_f64()))
    }

    fn lift2(self, rhs: Self, f: impl FnOnce(f64, f64) -> f64) -> Self {
        Self::from_f64(f(self.to_f64(), rhs.to_f64()))
    }
}

impl From<f64> for Posit16_2 {
    fn from(value: f64) -> Self {
        Self::from_f64(value)
    }
}

impl From<f32> for Posit16_2 {
    fn from(value: f32) -> Self {
        Self::from_f64(value as f64)
    }
}

impl From<Posit16_2> for f64 {
    fn from(p: Posit16_2) -> Self {
        p.to_f64()
    }
}

impl From<Posit16_2> for f32 {
    fn from(p: Posit16_2) -> Self {
        // Posit<16,2> values fit f32 exactly.
        p.to_f64() as f32
    }
}

impl Add for Posit16_2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.lift2(rhs, |a, b| a + b)
    }
}

impl Sub for Posit16_2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl Mul for Posit16_2 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.lift2(rhs, |a, b| a * b)
    }
}

impl Div for Posit16_2 {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        // x / 0 is NaN or infinite in f64, both of which map to NaR.
        self.lift2(rhs, |a, b| a / b)
    }
}

impl Rem for Posit16_2 {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self::Output {
        self.lift2(rhs, |a, b| a % b)
    }
}

impl Neg for Posit16_2 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        // Zero and NaR are their own two's complement.
        Self::from_bits(self.bits.wrapping_neg())
    }
}

impl AddAssign for Posit16_2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Posit16_2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Posit16_2 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for Posit16_2 {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl PartialEq for Posit16_2 {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl Eq for Posit16_2 {}

impl PartialOrd for Posit16_2 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Posits order as two's complement integers; NaR sorts below every real.
impl Ord for Posit16_2 {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.bits as i16).cmp(&(other.bits as i16))
    }
}

impl fmt::Display for Posit16_2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nar() {
            f.write_str("NaR")
        } else {
            write!(f, "{}", Posit16_2::to_f64(*self))
        }
    }
}

impl Zero for Posit16_2 {
    fn zero() -> Self {
        Posit16_2::ZERO
    }
    fn is_zero(&self) -> bool {
        self.bits == Posit16_2::ZERO.bits
    }
}

impl One for Posit16_2 {
    fn one() -> Self {
        Posit16_2::ONE
    }
}

impl Num for Posit16_2 {
    type FromStrRadixErr = <f64 as Num>::FromStrRadixErr;
    fn from_str_radix(s: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        f64::from_str_radix(s, radix).map(Posit16_2::from_f64)
    }
}

impl NumCast for Posit16_2 {
    fn from<T: ToPrimitive>(n: T) -> Option<Self> {
        n.to_f64().map(Posit16_2::from_f64)
    }
}

impl ToPrimitive for Posit16_2 {
    fn to_i64(&self) -> Option<i64> {
        Posit16_2::to_f64(*self).to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        Posit16_2::to_f64(*self).to_u64()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(Posit16_2::to_f64(*self))
    }
}

impl FromPrimitive for Posit16_2 {
    fn from_i64(n: i64) -> Option<Self> {
        Some(Posit16_2::from_f64(n as f64))
    }

    fn from_u64(n: u64) -> Option<Self> {
        Some(Posit16_2::from_f64(n as f64))
    }

    fn from_f64(n: f64) -> Option<Self> {
        Some(Posit16_2::from_f64(n))
    }
}

impl ScalarOperand for Posit16_2 {}

impl PositMath for Posit16_2 {
    fn floor(self) -> Self {
        self.lift(f64::floor)
    }
    fn ceil(self) -> Self {
        self.lift(f64::ceil)
    }
    fn trunc(self) -> Self {
        self.lift(f64::trunc)
    }
    fn nearbyint(self) -> Self {
        self.lift(libm::rint)
    }
    fn exp(self) -> Self {
        self.lift(f64::exp)
    }
    fn expm1(self) -> Self {
        self.lift(f64::exp_m1)
    }
    fn log(self) -> Self {
        // ln(0) = -inf and ln(x < 0) = NaN both land on NaR.
        self.lift(f64::ln)
    }
    fn log10(self) -> Self {
        self.lift(f64::log10)
    }
    fn log1p(self) -> Self {
        self.lift(f64::ln_1p)
    }
    fn log2(self) -> Self {
        self.lift(f64::log2)
    }
    fn sin(self) -> Self {
        self.lift(f64::sin)
    }
    fn cos(self) -> Self {
        self.lift(f64::cos)
    }
    fn tan(self) -> Self {
        self.lift(f64::tan)
    }
    fn tanh(self) -> Self {
        self.lift(f64::tanh)
    }
    fn asin(self) -> Self {
        self.lift(f64::asin)
    }
    fn acos(self) -> Self {
        self.lift(f64::acos)
    }
    fn atan(self) -> Self {
        self.lift(f64::atan)
    }
    fn erf(self) -> Self {
        self.lift(libm::erf)
    }
    fn erfc(self) -> Self {
        self.lift(libm::erfc)
    }
    fn lgamma(self) -> Self {
        self.lift(libm::lgamma)
    }
    fn sqrt(self) -> Self {
        self.lift(f64::sqrt)
    }
    fn rsqrt(self) -> Self {
        self.lift(|x| 1.0 / x.sqrt())
    }
    fn abs(self) -> Self {
        if self.is_negative() { -self } else { self }
    }
    fn powf(self, exponent: f64) -> Self {
        self.lift(|x| x.powf(exponent))
    }
    fn pow(self, exponent: Self) -> Self {
        self.lift2(exponent, f64::powf)
    }
    fn fmod(self, divisor: Self) -> Self {
        self % divisor
    }
    fn nextafter(self, toward: Self) -> Self {
        if self.is_nar() || toward.is_nar() {
            return Self::NAR;
        }
        match self.cmp(&toward) {
            Ordering::Less => Self::from_bits(self.bits.wrapping_add(1)),
            Ordering::Greater => Self::from_bits(self.bits.wrapping_sub(1)),
            Ordering::Equal => toward,
        }
    }
    fn to_double(self) -> f64 {
        self.to_f64()
    }
    fn from_double(value: f64) -> Self {
        Self::from_f64(value)
    }
}

impl CompactFloat for Posit16_2 {}
