use poly_scalar::{
    Complex32, Complex64, Element, Posit16_2, Scalar, ScalarError, ScalarType, bf16, f16,
};

fn assert_overflow<T: Element + std::fmt::Debug>(result: Result<T, ScalarError>, from: &str) {
    match result {
        Err(ScalarError::ConversionOverflow { from: f, to, .. }) => {
            assert_eq!(f, from);
            assert_eq!(to, T::SCALAR_TYPE.name());
        }
        other => panic!("expected overflow into {}, got {:?}", T::SCALAR_TYPE, other),
    }
}

fn assert_loss<T: Element + std::fmt::Debug>(result: Result<T, ScalarError>) {
    assert!(
        matches!(result, Err(ScalarError::ConversionLoss { .. })),
        "expected loss into {}, got {:?}",
        T::SCALAR_TYPE,
        result
    );
}

#[test]
fn test_int_accessors() {
    let s = Scalar::from(200);
    assert_eq!(s.to_u8(), Ok(200));
    assert_eq!(s.to_i16(), Ok(200));
    assert_eq!(s.to_f32(), Ok(200.0));
    assert_eq!(s.to_f16(), Ok(f16::from_f32(200.0)));
    assert_eq!(s.to_complex64(), Ok(Complex64::new(200.0, 0.0)));
    assert_eq!(s.to_posit16_2(), Ok(Posit16_2::from_f64(200.0)));
    assert_overflow(s.to_i8(), "Int");
    assert_overflow(s.to_bool(), "Int");
    assert_overflow(Scalar::from(-1).to_u8(), "Int");
    assert_overflow(Scalar::from(70_000).to_f16(), "Int");
}

#[test]
fn test_float_accessors() {
    let s = Scalar::from(2.5);
    assert_eq!(s.to_f64(), Ok(2.5));
    assert_eq!(s.to_f32(), Ok(2.5));
    assert_eq!(s.to_bf16(), Ok(bf16::from_f32(2.5)));
    assert_eq!(s.to_complex32(), Ok(Complex32::new(2.5, 0.0)));
    assert_loss(s.to_i64());
    assert_loss(s.to_bool());

    assert_eq!(Scalar::from(-4.0).to_i8(), Ok(-4));
    assert_overflow(Scalar::from(1e300).to_f32(), "Float");
    assert_overflow(Scalar::from(1e300).to_i64(), "Float");
    assert_overflow(Scalar::from(f64::INFINITY).to_i32(), "Float");
    assert_loss(Scalar::from(f64::NAN).to_i32());
    assert_eq!(Scalar::from(f64::INFINITY).to_f32(), Ok(f32::INFINITY));
}

#[test]
fn test_complex_accessors() {
    let real = Scalar::from(Complex64::new(3.0, 0.0));
    assert_eq!(real.to_i32(), Ok(3));
    assert_eq!(real.to_f64(), Ok(3.0));

    let z = Scalar::from(Complex64::new(3.0, 4.0));
    assert_loss(z.to_f64());
    assert_loss(z.to_i64());
    assert_loss(z.to_posit16_2());
    assert_eq!(z.to_complex32(), Ok(Complex32::new(3.0, 4.0)));
    assert_overflow(
        Scalar::from(Complex64::new(1e300, 0.0)).to_complex32(),
        "Complex",
    );
}

#[test]
fn test_bool_accessors() {
    let t = Scalar::from(true);
    assert_eq!(t.to_bool(), Ok(true));
    assert_eq!(t.to_i64(), Ok(1));
    assert_eq!(t.to_f64(), Ok(1.0));
    assert_eq!(Scalar::from(false).to_u8(), Ok(0));
    assert_eq!(Scalar::from(1).to_bool(), Ok(true));
    assert_eq!(Scalar::from(0.0).to_bool(), Ok(false));
}

#[test]
fn test_posit_accessors_widen_through_double() {
    let p = Scalar::from(Posit16_2::from_f64(12.0));
    assert_eq!(p.to_i32(), Ok(12));
    assert_eq!(p.to_f64(), Ok(12.0));
    assert_eq!(p.to_posit16_2(), Ok(Posit16_2::from_f64(12.0)));

    let frac = Scalar::from(Posit16_2::from_f64(0.75));
    assert_loss(frac.to_i16());
    assert_eq!(frac.to_f32(), Ok(0.75));

    assert_overflow(Scalar::from(Posit16_2::MAXPOS).to_i32(), "Posit");
    assert_eq!(Scalar::from(Posit16_2::MAXPOS).to_i64(), Ok(1i64 << 56));
    assert_loss(Scalar::from(Posit16_2::NAR).to_i64());
    assert!(Scalar::from(Posit16_2::NAR).to_f64().unwrap().is_nan());
}

#[test]
fn test_posit_target_overflow() {
    assert_overflow(Scalar::from(1e20).to_posit16_2(), "Float");
    assert_overflow(Scalar::from(i64::MAX).to_posit16_2(), "Int");
    assert_eq!(
        Scalar::from(f64::NAN).to_posit16_2(),
        Ok(Posit16_2::NAR)
    );
}

#[test]
fn test_infinities_do_not_fit_a_posit() {
    assert_overflow(Scalar::from(f64::INFINITY).to_posit16_2(), "Float");
    assert_overflow(Scalar::from(f64::NEG_INFINITY).to_posit16_2(), "Float");
    assert_overflow(
        Scalar::from(Complex64::new(f64::INFINITY, 0.0)).to_posit16_2(),
        "Complex",
    );
    // NaR widens to NaN, which maps back to NaR.
    assert_eq!(
        Scalar::from(Posit16_2::NAR).to_posit16_2(),
        Ok(Posit16_2::NAR)
    );
}

#[test]
fn test_generic_to_matches_named_accessors() {
    let s = Scalar::from(42u8);
    assert_eq!(s.to::<i16>(), s.to_i16());
    assert_eq!(s.to::<f16>(), s.to_f16());
    assert_eq!(s.to::<Complex64>(), s.to_complex64());
    assert_eq!(s.to::<Posit16_2>(), s.to_posit16_2());
}

#[test]
fn test_error_names_value_and_types() {
    let err = Scalar::from(1_000_000).to_i16().unwrap_err();
    let message = err.to_string();
    assert!(message.contains("1000000"), "{message}");
    assert!(message.contains(ScalarType::Short.name()), "{message}");
    assert!(message.contains("Int"), "{message}");
}

#[test]
fn test_element_into_scalar_matches_from() {
    assert_eq!(true.into_scalar(), Scalar::Bool(true));
    assert_eq!(5i8.into_scalar(), Scalar::Int(5));
    assert_eq!(f16::from_f32(1.5).into_scalar(), Scalar::Float(1.5));
    assert_eq!(
        Complex32::new(0.5, 0.25).into_scalar(),
        Scalar::Complex(Complex64::new(0.5, 0.25))
    );
    assert_eq!(Posit16_2::ONE.into_scalar(), Scalar::Posit(Posit16_2::ONE));
}
