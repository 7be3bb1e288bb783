use std::{fmt, str::FromStr};

use crate::error::{ScalarError, ScalarResult};

/// Element types a [`Scalar`](crate::Scalar) can report itself as or be
/// converted into. The discriminant is the stable raw code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum ScalarType {
    Byte = 0,
    Char = 1,
    Short = 2,
    Int = 3,
    Long = 4,
    Half = 5,
    Float = 6,
    Double = 7,
    ComplexFloat = 8,
    ComplexDouble = 9,
    Bool = 10,
    BFloat16 = 11,
    Posit16es2 = 12,
}

impl ScalarType {
    /// Every type, indexed by raw code.
    pub const ALL: [ScalarType; 13] = [
        ScalarType::Byte,
        ScalarType::Char,
        ScalarType::Short,
        ScalarType::Int,
        ScalarType::Long,
        ScalarType::Half,
        ScalarType::Float,
        ScalarType::Double,
        ScalarType::ComplexFloat,
        ScalarType::ComplexDouble,
        ScalarType::Bool,
        ScalarType::BFloat16,
        ScalarType::Posit16es2,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ScalarType::Byte => "Byte",
            ScalarType::Char => "Char",
            ScalarType::Short => "Short",
            ScalarType::Int => "Int",
            ScalarType::Long => "Long",
            ScalarType::Half => "Half",
            ScalarType::Float => "Float",
            ScalarType::Double => "Double",
            ScalarType::ComplexFloat => "ComplexFloat",
            ScalarType::ComplexDouble => "ComplexDouble",
            ScalarType::Bool => "Bool",
            ScalarType::BFloat16 => "BFloat16",
            ScalarType::Posit16es2 => "Posit16es2",
        }
    }

    pub const fn code(self) -> i8 {
        self as i8
    }

    pub fn is_complex(self) -> bool {
        matches!(self, ScalarType::ComplexFloat | ScalarType::ComplexDouble)
    }

    /// IEEE-style floats only; posits are reported by [`ScalarType::is_posit`].
    pub fn is_floating_point(self) -> bool {
        matches!(
            self,
            ScalarType::Half | ScalarType::Float | ScalarType::Double | ScalarType::BFloat16
        )
    }

    pub fn is_integral(self, include_bool: bool) -> bool {
        match self {
            ScalarType::Byte
            | ScalarType::Char
            | ScalarType::Short
            | ScalarType::Int
            | ScalarType::Long => true,
            ScalarType::Bool => include_bool,
            _ => false,
        }
    }

    pub fn is_posit(self) -> bool {
        self == ScalarType::Posit16es2
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<i8> for ScalarType {
    type Error = ScalarError;

    fn try_from(code: i8) -> ScalarResult<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
            .ok_or_else(|| ScalarError::UnknownKind(format!("code {code}")))
    }
}

impl FromStr for ScalarType {
    type Err = ScalarError;

    fn from_str(s: &str) -> ScalarResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|ty| ty.name() == s)
            .ok_or_else(|| ScalarError::UnknownKind(s.to_string()))
    }
}
