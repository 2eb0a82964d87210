use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Largest integer magnitude exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_INT: i64 = 9_007_199_254_740_991;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `RuntimeError::LiteralTooLarge` if the value exceeds
/// [`MAX_SAFE_INT`] in absolute value.
///
/// ## Example
/// ```
/// use embex::util::num::{MAX_SAFE_INT, i64_to_f64_checked};
///
/// assert_eq!(i64_to_f64_checked(42).unwrap(), 42.0);
/// assert!(i64_to_f64_checked(MAX_SAFE_INT + 1).is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked(value: i64) -> EvalResult<f64> {
    if value.checked_abs().is_none_or(|abs| abs > MAX_SAFE_INT) {
        return Err(RuntimeError::LiteralTooLarge);
    }
    Ok(value as f64)
}

/// Safely converts an `f64` to `i64` if the value is finite, within range,
/// and not fractional.
///
/// ## Errors
/// Returns `RuntimeError::TypeError` for non-finite or fractional values
/// and `RuntimeError::LiteralTooLarge` for values outside the `i64` range.
///
/// ## Example
/// ```
/// use embex::util::num::f64_to_i64_checked;
///
/// assert_eq!(f64_to_i64_checked(1000.0).unwrap(), 1000);
/// assert!(f64_to_i64_checked(1.5).is_err());
/// assert!(f64_to_i64_checked(1e20).is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_checked(value: f64) -> EvalResult<i64> {
    if !value.is_finite() {
        return Err(RuntimeError::TypeError { details: format!("cannot convert non-finite value {value} to an integer"), });
    }
    if value < i64::MIN as f64 || value > i64::MAX as f64 {
        return Err(RuntimeError::LiteralTooLarge);
    }
    if value.fract() != 0.0 {
        return Err(RuntimeError::TypeError { details: format!("value {value} is fractional where an integer is required"), });
    }
    Ok(value as i64)
}
