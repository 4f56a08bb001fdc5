use crate::{error::RuntimeError, interpreter::core::EvalResult};

/// Returns the greatest common divisor of `|a|` and `|b|`.
///
/// `gcd(0, 0)` is `0`.
///
/// ## Example
/// ```
/// use ratmat::util::num::gcd;
///
/// assert_eq!(gcd(12, -18), 6);
/// assert_eq!(gcd(0, 7), 7);
/// assert_eq!(gcd(0, 0), 0);
/// ```
#[allow(clippy::cast_possible_wrap)]
#[must_use]
pub const fn gcd(a: i128, b: i128) -> i128 {
    let mut a = a.unsigned_abs();
    let mut b = b.unsigned_abs();

    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }

    // Both inputs come from `i64` values, so the result always fits.
    a as i128
}

/// Narrows an `i128` intermediate back to `i64`.
///
/// ## Errors
/// Returns `RuntimeError::Overflow` if the value is outside the `i64` range.
///
/// ## Example
/// ```
/// use ratmat::{error::RuntimeError, util::num::i128_to_i64_checked};
///
/// assert_eq!(i128_to_i64_checked(42).unwrap(), 42);
/// assert!(matches!(i128_to_i64_checked(i128::from(i64::MAX) + 1),
///                  Err(RuntimeError::Overflow)));
/// ```
pub fn i128_to_i64_checked(value: i128) -> EvalResult<i64> {
    i64::try_from(value).map_err(|_| RuntimeError::Overflow)
}

/// Converts an exact fraction to the nearest `f64`.
///
/// Used only when a rational is widened to a complex number; precision loss
/// for magnitudes above `2^53` is accepted there.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn ratio_to_f64(numerator: i64, denominator: i64) -> f64 {
    numerator as f64 / denominator as f64
}

/// Returns `10^exponent` if it fits in an `i64`.
///
/// ## Example
/// ```
/// use ratmat::util::num::checked_pow10;
///
/// assert_eq!(checked_pow10(3), Some(1000));
/// assert_eq!(checked_pow10(19), None);
/// ```
#[must_use]
pub fn checked_pow10(exponent: usize) -> Option<i64> {
    u32::try_from(exponent).ok()
                           .and_then(|exp| 10i64.checked_pow(exp))
}

/// Accumulates a run of ASCII decimal digits into an `i64`.
///
/// Returns `Ok(None)` on overflow and `Err(index)` with the byte offset of the
/// first character that is not a decimal digit. An empty string is `0`.
///
/// ## Example
/// ```
/// use ratmat::util::num::accumulate_digits;
///
/// assert_eq!(accumulate_digits("325"), Ok(Some(325)));
/// assert_eq!(accumulate_digits(""), Ok(Some(0)));
/// assert_eq!(accumulate_digits("99999999999999999999"), Ok(None));
/// assert_eq!(accumulate_digits("1x"), Err(1));
/// ```
pub fn accumulate_digits(digits: &str) -> Result<Option<i64>, usize> {
    let mut total = Some(0i64);

    for (index, byte) in digits.bytes().enumerate() {
        if !byte.is_ascii_digit() {
            return Err(index);
        }
        total = total.and_then(|n| n.checked_mul(10))
                     .and_then(|n| n.checked_add(i64::from(byte - b'0')));
    }

    Ok(total)
}
