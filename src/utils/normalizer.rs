use num::Num;

/// Converts a value in the range 0.0 - 1.0 into `N`
/// Integer targets are scaled to 0 - MAX, float targets are kept as is.
pub trait IntoNormalizer<N>
where N: Num
{
    fn into_normalized(self) -> N;
}

impl IntoNormalizer<u8> for f64 {
    #[inline]
    fn into_normalized(self) -> u8 {
        (self * u8::MAX as f64) as u8
    }
}

impl IntoNormalizer<u16> for f64 {
    #[inline]
    fn into_normalized(self) -> u16 {
        (self * u16::MAX as f64) as u16
    }
}

impl IntoNormalizer<u32> for f64 {
    #[inline]
    fn into_normalized(self) -> u32 {
        (self * u32::MAX as f64) as u32
    }
}

impl IntoNormalizer<f32> for f64 {
    #[inline]
    fn into_normalized(self) -> f32 {
        self as f32
    }
}

impl IntoNormalizer<f64> for f64 {
    #[inline]
    fn into_normalized(self) -> f64 {
        self
    }
}
