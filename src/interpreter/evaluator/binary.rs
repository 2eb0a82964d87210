use std::cmp::Ordering;

use num_bigint::BigInt;
use num_traits::{Pow, ToPrimitive, Zero};

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    ops::OpTag,
    util::num::i64_to_f64_checked,
};

/// Applies the native fallback of a binary operation.
///
/// Natives implement the host numeric model: checked `i64` arithmetic with
/// promotion to `f64` on mixed integer/real operands and to `BigInt` on
/// mixed integer/big operands, string concatenation for `+`, shifts and
/// bitwise logic on integers, truthiness selection for `&&`/`||`, loose and
/// strict equality, and orderings on numbers and strings.
///
/// # Errors
/// - `TypeError` when the operand classes support no native semantics.
/// - `DivisionByZero` for integer `/` and `%` with a zero divisor.
/// - `Overflow` when checked integer arithmetic overflows.
/// - `LiteralTooLarge` when promotion to `f64` would lose integer
///   precision.
pub(crate) fn native_binary(op: OpTag, left: &Value, right: &Value) -> EvalResult<Value> {
    match op {
        OpTag::Add | OpTag::Sub | OpTag::Mul | OpTag::Div | OpTag::Rem | OpTag::Pow => {
            arithmetic(op, left, right)
        },

        OpTag::Shl | OpTag::Shr | OpTag::UShr => shift(op, left, right),

        OpTag::BitAnd | OpTag::BitXor | OpTag::BitOr => bitwise(op, left, right),

        OpTag::And => Ok(if left.is_truthy() { right.clone() } else { left.clone() }),
        OpTag::Or => Ok(if left.is_truthy() { left.clone() } else { right.clone() }),

        OpTag::Equal => Ok(Value::Bool(left.loosely_equal(right))),
        OpTag::NotEqual => Ok(Value::Bool(!left.loosely_equal(right))),
        OpTag::StrictEqual => Ok(Value::Bool(left.strictly_equal(right))),
        OpTag::StrictNotEqual => Ok(Value::Bool(!left.strictly_equal(right))),

        OpTag::Less | OpTag::Greater | OpTag::LessEqual | OpTag::GreaterEqual => {
            ordering(op, left, right)
        },

        _ => unreachable!("non-binary tag {op:?} dispatched as binary"),
    }
}

/// Routes `+ - * / % **` by operand classes.
fn arithmetic(op: OpTag, left: &Value, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Str(a), Value::Str(b)) if op == OpTag::Add => Ok(Value::Str(format!("{a}{b}"))),

        (Value::Integer(a), Value::Integer(b)) => integer_arithmetic(op, *a, *b),

        (Value::Big(_) | Value::Integer(_), Value::Big(_) | Value::Integer(_)) => {
            big_arithmetic(op, to_big(left), to_big(right))
        },

        (Value::Integer(_) | Value::Real(_), Value::Integer(_) | Value::Real(_)) => {
            real_arithmetic(op, as_real(left)?, as_real(right)?)
        },

        _ => Err(type_error(op, left, right)),
    }
}

fn integer_arithmetic(op: OpTag, a: i64, b: i64) -> EvalResult<Value> {
    let result = match op {
        OpTag::Add => a.checked_add(b),
        OpTag::Sub => a.checked_sub(b),
        OpTag::Mul => a.checked_mul(b),
        OpTag::Div => {
            if b == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            a.checked_div(b)
        },
        OpTag::Rem => {
            if b == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            a.checked_rem(b)
        },
        OpTag::Pow => {
            if b < 0 {
                // A negative exponent leaves the integers.
                return real_arithmetic(op, i64_to_f64_checked(a)?, i64_to_f64_checked(b)?);
            }
            let exp = u32::try_from(b).map_err(|_| RuntimeError::Overflow)?;
            a.checked_pow(exp)
        },
        _ => unreachable!("{op:?} is not arithmetic"),
    };
    result.map(Value::Integer).ok_or(RuntimeError::Overflow)
}

fn real_arithmetic(op: OpTag, a: f64, b: f64) -> EvalResult<Value> {
    let result = match op {
        OpTag::Add => a + b,
        OpTag::Sub => a - b,
        OpTag::Mul => a * b,
        OpTag::Div => a / b,
        OpTag::Rem => a % b,
        OpTag::Pow => a.powf(b),
        _ => unreachable!("{op:?} is not arithmetic"),
    };
    Ok(Value::Real(result))
}

fn big_arithmetic(op: OpTag, a: BigInt, b: BigInt) -> EvalResult<Value> {
    let result = match op {
        OpTag::Add => a + b,
        OpTag::Sub => a - b,
        OpTag::Mul => a * b,
        OpTag::Div => {
            if b.is_zero() {
                return Err(RuntimeError::DivisionByZero);
            }
            a / b
        },
        OpTag::Rem => {
            if b.is_zero() {
                return Err(RuntimeError::DivisionByZero);
            }
            a % b
        },
        OpTag::Pow => {
            let exp = b.to_u32().ok_or(RuntimeError::Overflow)?;
            a.pow(exp)
        },
        _ => unreachable!("{op:?} is not arithmetic"),
    };
    Ok(Value::Big(result))
}

/// Shift operations on integers; `>>>` reinterprets the operand as `u64`.
fn shift(op: OpTag, left: &Value, right: &Value) -> EvalResult<Value> {
    let (Value::Integer(a), Value::Integer(b)) = (left, right) else {
        return Err(type_error(op, left, right));
    };

    let amount = u32::try_from(*b).ok().filter(|amount| *amount < 64).ok_or_else(|| {
        RuntimeError::InvalidArgument { details: format!("shift amount {b} is out of range") }
    })?;

    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    let result = match op {
        OpTag::Shl => a.checked_shl(amount).ok_or(RuntimeError::Overflow)?,
        OpTag::Shr => a >> amount,
        OpTag::UShr => ((*a as u64) >> amount) as i64,
        _ => unreachable!("{op:?} is not a shift"),
    };
    Ok(Value::Integer(result))
}

/// Bitwise `& ^ |` on integers.
fn bitwise(op: OpTag, left: &Value, right: &Value) -> EvalResult<Value> {
    let (Value::Integer(a), Value::Integer(b)) = (left, right) else {
        return Err(type_error(op, left, right));
    };

    let result = match op {
        OpTag::BitAnd => a & b,
        OpTag::BitXor => a ^ b,
        OpTag::BitOr => a | b,
        _ => unreachable!("{op:?} is not bitwise"),
    };
    Ok(Value::Integer(result))
}

/// Orderings on numbers and strings. Incomparable numbers (`NaN` operands)
/// order as false, like the host float model.
fn ordering(op: OpTag, left: &Value, right: &Value) -> EvalResult<Value> {
    let Some(cmp) = compare(left, right)? else {
        return Ok(Value::Bool(false));
    };

    let result = match op {
        OpTag::Less => cmp == Ordering::Less,
        OpTag::Greater => cmp == Ordering::Greater,
        OpTag::LessEqual => cmp != Ordering::Greater,
        OpTag::GreaterEqual => cmp != Ordering::Less,
        _ => unreachable!("{op:?} is not an ordering"),
    };
    Ok(Value::Bool(result))
}

fn compare(left: &Value, right: &Value) -> EvalResult<Option<Ordering>> {
    match (left, right) {
        (Value::Str(a), Value::Str(b)) => Ok(Some(a.cmp(b))),

        (Value::Integer(a), Value::Integer(b)) => Ok(Some(a.cmp(b))),

        (Value::Big(_) | Value::Integer(_), Value::Big(_) | Value::Integer(_)) => {
            Ok(Some(to_big(left).cmp(&to_big(right))))
        },

        (Value::Integer(_) | Value::Real(_), Value::Integer(_) | Value::Real(_)) => {
            Ok(as_real(left)?.partial_cmp(&as_real(right)?))
        },

        _ => Err(RuntimeError::TypeError { details: format!("cannot compare {} and {}",
                                                            left.class().name(),
                                                            right.class().name()), }),
    }
}

/// Promotes an integer or big-integer operand to `BigInt`.
fn to_big(value: &Value) -> BigInt {
    match value {
        Value::Big(b) => b.clone(),
        Value::Integer(n) => BigInt::from(*n),
        _ => unreachable!("only integer operands promote to big integers"),
    }
}

/// Converts an integer or real operand to `f64`, refusing lossy integers.
fn as_real(value: &Value) -> EvalResult<f64> {
    match value {
        Value::Real(r) => Ok(*r),
        Value::Integer(n) => i64_to_f64_checked(*n),
        _ => unreachable!("only numeric operands promote to reals"),
    }
}

fn type_error(op: OpTag, left: &Value, right: &Value) -> RuntimeError {
    RuntimeError::TypeError { details: format!("cannot apply {op} to {} and {}",
                                               left.class().name(),
                                               right.class().name()), }
}
