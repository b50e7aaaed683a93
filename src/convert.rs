//! `From` conversions and optional `num-traits` interop, grounded in `LongNum(long double)`
//! and the integer/float user-defined literals of `examples/original_source/src/longnum.cpp`.

use crate::number::{Number, DEFAULT_PRECISION};

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Number {
                #[inline]
                fn from(value: $t) -> Number {
                    Number::from_i64(value as i64)
                }
            }
        )*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Number {
                #[inline]
                fn from(value: $t) -> Number {
                    Number::from_i64(value as i64)
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32);

impl From<f32> for Number {
    #[inline]
    fn from(value: f32) -> Number {
        Number::from_f64(value as f64)
    }
}

impl From<f64> for Number {
    #[inline]
    fn from(value: f64) -> Number {
        Number::from_f64(value)
    }
}

#[cfg(feature = "num-traits")]
mod num_traits_impls {
    use super::{Number, DEFAULT_PRECISION};
    use num_traits::{One, Zero};

    impl Zero for Number {
        #[inline]
        fn zero() -> Number {
            Number::zero_with_precision(DEFAULT_PRECISION)
        }

        #[inline]
        fn is_zero(&self) -> bool {
            Number::is_zero(self)
        }
    }

    impl One for Number {
        #[inline]
        fn one() -> Number {
            Number::from_i64_with_precision(1, DEFAULT_PRECISION)
        }
    }
}
