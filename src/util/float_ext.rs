pub trait FloatExt: Sized {
    /// `self == other` within machine epsilon
    fn eq(self, other: Self) -> bool;

    /// `self` lies within `margin` of `other` relative to `other`'s magnitude
    fn almost_eq(self, other: Self, margin: Self) -> bool;
}

macro_rules! impl_float_ext {
    ( $ty:ty ) => {
        impl FloatExt for $ty {
            fn eq(self, other: Self) -> bool {
                (self - other).abs() < <$ty>::EPSILON
            }

            fn almost_eq(self, other: Self, margin: Self) -> bool {
                (self - other).abs() <= margin * other.abs().max(1.0)
            }
        }
    };
}

impl_float_ext!(f32);
impl_float_ext!(f64);
