/// Conversion between a flag set's native bits and the `i64` the engine works in.
///
/// Narrow types reject out-of-range values; 64-bit types reinterpret the sign bit
/// so every bit pattern round-trips.
pub trait RawBits: Copy {
    fn to_raw(self) -> i64;
    fn from_raw(raw: i64) -> Option<Self>;
}

macro_rules! impl_narrow {
    ($($ty:ty),* $(,)?) => {$(
        impl RawBits for $ty {
            #[inline]
            fn to_raw(self) -> i64 {
                i64::from(self)
            }

            #[inline]
            fn from_raw(raw: i64) -> Option<Self> {
                Self::try_from(raw).ok()
            }
        }
    )*};
}

macro_rules! impl_wide {
    ($($ty:ty),* $(,)?) => {$(
        impl RawBits for $ty {
            #[inline]
            fn to_raw(self) -> i64 {
                self as i64
            }

            #[inline]
            fn from_raw(raw: i64) -> Option<Self> {
                Some(raw as Self)
            }
        }
    )*};
}

impl_narrow!(i8, i16, i32, i64, u8, u16, u32);
impl_wide!(u64, isize, usize);

#[cfg(test)]
mod tests {
    use super::RawBits;

    #[test]
    fn narrow_types_reject_out_of_range() {
        assert_eq!(u8::from_raw(255), Some(255));
        assert_eq!(u8::from_raw(256), None);
        assert_eq!(u8::from_raw(-1), None);
        assert_eq!(i8::from_raw(-1), Some(-1));
    }

    #[test]
    fn wide_types_round_trip_the_sign_bit() {
        let high = 1_u64 << 63;
        assert!(high.to_raw() < 0);
        assert_eq!(u64::from_raw(high.to_raw()), Some(high));
    }
}
