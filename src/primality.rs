//! Primality predicate used to build the prime view.

/// Returns `true` if the magnitude of `number` is prime.
///
/// The sign is ignored, so `-7` is prime. Values whose magnitude is at most
/// one (`0`, `1`, `-1`) are not prime. The test is trial division by every
/// integer from 2 up to and including the integer square root of the
/// magnitude.
///
/// # Examples
///
/// ```rust
/// use viewset::primality::is_prime;
///
/// assert!(is_prime(2));
/// assert!(is_prime(-7));
/// assert!(!is_prime(1));
/// assert!(!is_prime(9));
/// ```
#[must_use]
pub fn is_prime(number: i64) -> bool {
    // unsigned_abs keeps i64::MIN representable
    let magnitude = number.unsigned_abs();
    if magnitude <= 1 {
        return false;
    }
    (2..=magnitude.isqrt()).all(|divisor| magnitude % divisor != 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(-1)]
    #[case(4)]
    #[case(9)]
    #[case(25)]
    #[case(-49)]
    #[case(1_000_000)]
    fn test_not_prime(#[case] number: i64) {
        assert!(!is_prime(number));
    }

    #[rstest]
    #[case(2)]
    #[case(3)]
    #[case(5)]
    #[case(7)]
    #[case(-7)]
    #[case(-2)]
    #[case(97)]
    #[case(7919)]
    fn test_prime(#[case] number: i64) {
        assert!(is_prime(number));
    }

    #[rstest]
    fn test_extreme_values_do_not_overflow() {
        // 2^63 is even
        assert!(!is_prime(i64::MIN));
        // 2^63 - 1 = 7^2 * 73 * 127 * 337 * 92737 * 649657
        assert!(!is_prime(i64::MAX));
    }

    #[rstest]
    fn test_square_of_prime_is_caught_at_the_root() {
        assert!(!is_prime(121));
        assert!(!is_prime(169));
    }
}
