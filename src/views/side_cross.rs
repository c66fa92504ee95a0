//! Side-cross ordering.
//!
//! Given an ascending sequence `[a0, a1, ..., a(n-1)]`, the side-cross order
//! is `a0, a(n-1), a1, a(n-2), ...`, alternately taking from the front and
//! the back of the unconsumed range until the two ends meet.
//!
//! The order is always rebuilt in full from the ascending view after a
//! structural change. The rebuild is O(n).

use smallvec::SmallVec;

use super::INLINE_CAPACITY;

/// Builds the side-cross order of an ascending slice.
pub(crate) fn side_cross_order<T: Copy>(ascending: &[T]) -> SmallVec<[T; INLINE_CAPACITY]> {
    let mut order = SmallVec::with_capacity(ascending.len());
    let mut front = 0;
    let mut back = ascending.len();

    while front < back {
        order.push(ascending[front]);
        front += 1;
        if front < back {
            back -= 1;
            order.push(ascending[back]);
        }
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&[], &[])]
    #[case(&[5], &[5])]
    #[case(&[1, 2], &[1, 2])]
    #[case(&[1, 2, 3], &[1, 3, 2])]
    #[case(&[2, 3, 4, 7, 9], &[2, 9, 3, 7, 4])]
    #[case(&[2, 4, 7, 9], &[2, 9, 4, 7])]
    #[case(&[1, 2, 3, 4, 5, 6], &[1, 6, 2, 5, 3, 4])]
    fn test_side_cross_order(#[case] ascending: &[i64], #[case] expected: &[i64]) {
        assert_eq!(side_cross_order(ascending).as_slice(), expected);
    }

    #[rstest]
    fn test_side_cross_order_is_permutation_beyond_inline_capacity() {
        let ascending: Vec<i64> = (0..100).collect();
        let order = side_cross_order(&ascending);

        assert_eq!(order.len(), ascending.len());
        let mut sorted = order.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, ascending);
        assert_eq!(&order[..4], &[0, 99, 1, 98]);
        assert_eq!(&order[98..], &[49, 50]);
    }
}
