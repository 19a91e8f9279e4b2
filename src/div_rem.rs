use num_traits::{NumCast, PrimInt};

pub(crate) trait RemFloor: Sized {
    fn rem_floor(&self, other: Self) -> Self;
}

impl<T: PrimInt> RemFloor for T {
    // Shifting by one toward zero before the truncating remainder keeps MIN from overflowing.
    fn rem_floor(&self, other: Self) -> Self {
        let zero = Self::zero();
        let one = Self::one();
        if *self > zero && other < zero {
            (*self - one) % other + other + one
        } else if *self < zero && other > zero {
            (*self + one) % other + other - one
        } else {
            *self % other
        }
    }
}

/// Whether `value` is a multiple of `divisor`.
///
/// A divisor that can't be represented in `T` is larger than any nonzero `T`, so only zero is
/// divisible by it.
pub(crate) fn is_divisible_by<T: PrimInt>(value: T, divisor: u16) -> bool {
    match <T as NumCast>::from(divisor) {
        Some(divisor) => value.rem_floor(divisor).is_zero(),
        None => value.is_zero(),
    }
}
