//! A copyable, stack-allocated scalar that can hold a boolean, a 64-bit
//! integer, a double, a double-precision complex number or a 16-bit posit,
//! and converts between them only when no information is lost.
//!
//! ```
//! use poly_scalar::{Scalar, ScalarError};
//!
//! let s = Scalar::from(300);
//! assert_eq!(s.to_i64(), Ok(300));
//! assert!(matches!(s.to_u8(), Err(ScalarError::ConversionOverflow { .. })));
//! assert!(!Scalar::from(true).equal(1));
//! ```

pub mod element;
pub mod error;
pub mod number_representations;
pub mod scalar;
pub mod scalar_type;

pub use element::Element;
pub use error::{ScalarError, ScalarResult};
pub use number_representations::{
    core::{CompactFloat, PositMath},
    posit::posit16_2::Posit16_2,
};
pub use scalar::{Comparable, Scalar, ScalarKind};
pub use scalar_type::ScalarType;

pub use half::{bf16, f16};
pub use num_complex::{Complex32, Complex64};
