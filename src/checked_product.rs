//! Utility for calculating the product of iterators while checking for overflow.
//!
//! [`CheckedProduct`] is implemented for any iterator over a type with [`CheckedMul`] and [`One`]
//! from `num-traits`, mirroring what `checked_sum` offers for addition.

use num_traits::{CheckedMul, One};

/// Iterator extension trait for calculating the product of numbers with overflow checking.
pub trait CheckedProduct<T> {
    /// Multiplies numbers in an iterator, checking for overflow.
    /// Returns `None` if overflow occurred.
    fn checked_product(self) -> Option<T>;
}

impl<T, I> CheckedProduct<T> for I
where
    T: CheckedMul + One,
    I: Iterator<Item = T>,
{
    fn checked_product(mut self) -> Option<T> {
        self.try_fold(T::one(), |acc, value| acc.checked_mul(&value))
    }
}

#[cfg(test)]
mod tests {
    use crate::checked_product::CheckedProduct;

    #[test]
    fn test_checked_product_of_box_sides() {
        let sides = [2u32, 3, 4];
        assert_eq!(sides.into_iter().checked_product(), Some(24));
    }

    #[test]
    fn test_checked_product_empty_iterator() {
        let values: Vec<u64> = vec![];
        assert_eq!(values.into_iter().checked_product(), Some(1));
    }

    #[test]
    fn test_checked_product_signed() {
        let totals = [-2i64, 3, -4];
        assert_eq!(totals.into_iter().checked_product(), Some(24));
    }

    #[test]
    fn test_checked_product_overflow() {
        let values = [200u8, 2];
        assert_eq!(values.into_iter().checked_product(), None);

        let values = [u64::MAX, 2];
        assert_eq!(values.into_iter().checked_product(), None);
    }
}
