pub trait Posit<const N: usize, const ES: usize> {
    const N: usize = N;
    const ES: usize = ES;
    const USEED: usize = 1 << (1 << ES);
    /// `log2(maxpos)`; the smallest positive posit is `2^-MAX_SCALE`.
    const MAX_SCALE: i32 = ((N as i32) - 2) * (1 << ES);
}

/// A non-zero, non-NaR posit split into its fields.
///
/// The value is `(-1)^sign * mantissa / 2^frac_len * 2^scale`, where
/// `mantissa` carries the hidden leading one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DecodedPosit16 {
    pub sign: bool,
    pub scale: i32,
    pub mantissa: u32,
    pub frac_len: u32,
}

impl DecodedPosit16 {
    pub fn to_f64(self) -> f64 {
        // 12 significant bits and |scale| <= 56, so every step is exact.
        let magnitude =
            self.mantissa as f64 / (1u32 << self.frac_len) as f64 * 2f64.powi(self.scale);
        if self.sign { -magnitude } else { magnitude }
    }
}
