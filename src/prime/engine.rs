//! Deterministic trial-division primality test.

/// Decide whether `n` is prime.
///
/// Uses 6k±1 wheel factorization: after ruling out multiples of 2 and 3,
/// every remaining prime candidate has the form 6k-1 or 6k+1, so the loop
/// steps `i` by 6 and tests `i` and `i + 2`. Runs in O(√n) divisions.
///
/// Total over all `i64` values; anything below 2 is not prime.
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    let mut i: i64 = 5;
    // checked_mul keeps the bound test from overflowing near i64::MAX
    while i.checked_mul(i).is_some_and(|sq| sq <= n) {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }

    true
}

/// Human-readable verdict for `n` given its primality.
pub fn describe(n: i64, is_prime: bool) -> String {
    if is_prime {
        format!("{} is a prime number", n)
    } else {
        format!("{} is not a prime number", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reference check: divisor search over 2..=√n.
    fn is_prime_naive(n: i64) -> bool {
        if n < 2 {
            return false;
        }
        let mut d = 2;
        while d * d <= n {
            if n % d == 0 {
                return false;
            }
            d += 1;
        }
        true
    }

    #[test]
    fn test_non_positive_and_one_are_not_prime() {
        assert!(!is_prime(i64::MIN));
        assert!(!is_prime(-17));
        assert!(!is_prime(-1));
        assert!(!is_prime(0));
        assert!(!is_prime(1));
    }

    #[test]
    fn test_two_and_three_are_prime() {
        assert!(is_prime(2));
        assert!(is_prime(3));
    }

    #[test]
    fn test_wheel_agrees_with_naive_search() {
        for n in -10..=2000 {
            assert_eq!(is_prime(n), is_prime_naive(n), "disagreement at n = {}", n);
        }
    }

    #[test]
    fn test_known_primes() {
        for n in [5, 7, 11, 13, 97, 7919, 104_729, 1_000_000_007] {
            assert!(is_prime(n), "{} should be prime", n);
        }
    }

    #[test]
    fn test_known_composites() {
        // 25 and 49 exercise the i and i+2 wheel branches
        for n in [4, 6, 8, 9, 25, 49, 100, 7917, 1_000_000_006] {
            assert!(!is_prime(n), "{} should not be prime", n);
        }
    }

    #[test]
    fn test_square_of_large_prime() {
        // p² has exactly one divisor pair, right at the i*i <= n boundary
        let p: i64 = 104_729;
        assert!(!is_prime(p * p));
    }

    #[test]
    fn test_describe_messages() {
        assert_eq!(describe(7, true), "7 is a prime number");
        assert_eq!(describe(8, false), "8 is not a prime number");
        assert_eq!(describe(-5, false), "-5 is not a prime number");
    }
}
