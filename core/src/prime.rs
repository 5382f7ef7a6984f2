use num_traits::PrimInt;

use crate::{config::PrimalityTest, constants::SMALLEST_PRIME};

/// Returns `true` if `n` is prime.
///
/// Trial division by 2, 3 and then `6k ± 1` candidates up to `⌊√n⌋`. Any integer is
/// accepted; everything below 2 (including negative values) is not prime.
pub fn is_prime<T: PrimInt>(n: T) -> bool {
    let two = T::one() + T::one();
    let three = two + T::one();

    if n < two {
        return false;
    }
    if n <= three {
        return true;
    }
    if n % two == T::zero() || n % three == T::zero() {
        return false;
    }

    let six = three + three;
    let mut d = three + two;
    // `d <= n / d` rather than `d * d <= n`, the square may overflow `T`.
    while d <= n / d {
        if n % d == T::zero() || n % (d + two) == T::zero() {
            return false;
        }
        d = d + six;
    }
    true
}

/// Returns `true` if no integer in `[2, n - 1]` divides `n`.
///
/// Linear in `n`; agrees with [`is_prime`] on every input.
pub fn is_prime_exhaustive<T: PrimInt>(n: T) -> bool {
    let two = T::one() + T::one();
    if n < two {
        return false;
    }

    let mut d = two;
    while d < n {
        if n % d == T::zero() {
            return false;
        }
        d = d + T::one();
    }
    true
}

pub fn is_prime_with<T: PrimInt>(n: T, test: PrimalityTest) -> bool {
    match test {
        PrimalityTest::TrialDivision => is_prime(n),
        PrimalityTest::Exhaustive => is_prime_exhaustive(n),
    }
}

/// Primes in `2..=limit`, ascending.
pub fn primes_up_to(limit: u64) -> impl Iterator<Item = u64> {
    (u64::from(SMALLEST_PRIME)..=limit).filter(|&n| is_prime(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values() {
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(is_prime(17));
        assert!(!is_prime(0));
        assert!(!is_prime(-5));
        assert!(!is_prime(25));
        assert!(!is_prime(49));
    }

    #[test]
    fn strategies_agree() {
        for n in -50i64..=3000 {
            assert_eq!(is_prime(n), is_prime_exhaustive(n), "{n}");
        }
        for n in u8::MIN..=u8::MAX {
            assert_eq!(is_prime(n), is_prime_exhaustive(n), "{n}");
        }
        for n in i8::MIN..=i8::MAX {
            assert_eq!(is_prime(n), is_prime_exhaustive(n), "{n}");
        }
    }

    #[test]
    fn near_type_bounds() {
        assert!(is_prime(i8::MAX));
        assert!(!is_prime(u8::MAX));
        assert!(!is_prime(i16::MAX));
        assert!(!is_prime(u16::MAX));
        assert!(is_prime(65_521u16));
        assert!(is_prime(i32::MAX));
        assert!(is_prime(4_294_967_291u32));
        assert!(!is_prime(u32::MAX));
        assert!(!is_prime(i64::MIN));
        assert!(!is_prime(i128::MIN));
    }

    #[test]
    fn large_values() {
        assert!(is_prime(1_000_000_007u64));
        assert!(is_prime(999_999_999_989i64));
        assert!(!is_prime(999_999_999_991i64));
        // 2^64 + 1 = 274177 * 67280421310721
        assert!(!is_prime((1u128 << 64) + 1));
    }

    #[test]
    fn dispatch() {
        assert!(is_prime_with(97u32, PrimalityTest::TrialDivision));
        assert!(is_prime_with(97u32, PrimalityTest::Exhaustive));
        assert!(!is_prime_with(91u32, PrimalityTest::Exhaustive));
    }

    #[test]
    fn enumerate() {
        let primes: Vec<u64> = primes_up_to(30).collect();
        assert_eq!(primes, [2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);

        assert_eq!(primes_up_to(1).count(), 0);
        assert_eq!(primes_up_to(2).collect::<Vec<_>>(), [2]);
        assert_eq!(primes_up_to(10_000).count(), 1229);
    }
}
