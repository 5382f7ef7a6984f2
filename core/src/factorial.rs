use num_bigint::BigUint;
use num_traits::{FromPrimitive, One, PrimInt, Unsigned};

use crate::{config::Width, ArithmeticError, Result, LOG_TARGET};

/// Ranges at most this long are multiplied sequentially.
const SPLIT_THRESHOLD: u64 = 32;

/// Computes `n!` with arbitrary precision.
///
/// Fails with [`ArithmeticError::InvalidArgument`] for negative `n`.
pub fn factorial(n: i64) -> Result<BigUint> {
    let k = non_negative(n)?;

    let _span = tracing::debug_span!(target: LOG_TARGET, "factorial", %n).entered();

    if k < 2 {
        return Ok(BigUint::one());
    }
    Ok(product(2, k))
}

/// Computes `n!` in the fixed-width unsigned type `T`.
///
/// Fails with [`ArithmeticError::Overflow`] as soon as a partial product no longer fits.
pub fn checked_factorial<T>(n: i64) -> Result<T>
where
    T: PrimInt + Unsigned + FromPrimitive,
{
    let k = non_negative(n)?;
    let bits = T::zero().count_zeros();

    (2..=k).try_fold(T::one(), |acc, i| {
        T::from_u64(i)
            .and_then(|i| acc.checked_mul(&i))
            .ok_or_else(|| {
                tracing::trace!(target: LOG_TARGET, %n, bits, "factorial overflow at {i}");
                ArithmeticError::Overflow { n, bits }
            })
    })
}

/// Computes `n!` in the representation selected by `width`, widened to [`BigUint`].
pub fn factorial_in(n: i64, width: Width) -> Result<BigUint> {
    match width {
        Width::U32 => checked_factorial::<u32>(n).map(BigUint::from),
        Width::U64 => checked_factorial::<u64>(n).map(BigUint::from),
        Width::U128 => checked_factorial::<u128>(n).map(BigUint::from),
        Width::Big => factorial(n),
    }
}

fn non_negative(n: i64) -> Result<u64> {
    u64::try_from(n).map_err(|_| ArithmeticError::InvalidArgument(n))
}

// Balanced product of `lo..=hi`, requires `lo <= hi`.
fn product(lo: u64, hi: u64) -> BigUint {
    if hi - lo < SPLIT_THRESHOLD {
        return (lo..=hi).fold(BigUint::one(), |acc, i| acc * i);
    }
    let mid = lo + (hi - lo) / 2;
    product(lo, mid) * product(mid + 1, hi)
}
