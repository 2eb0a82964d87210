use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    ops::OpTag,
};

/// Applies the native fallback of a unary operation.
///
/// - `!x` negates truthiness and yields a boolean.
/// - `~x` is bitwise NOT on integers and big integers.
/// - `-x` is checked numeric negation.
/// - `+x` passes numeric values through unchanged.
///
/// # Errors
/// - `TypeError` when the operand's class does not support the operation.
/// - `Overflow` when negating `i64::MIN`.
pub(crate) fn native_unary(op: OpTag, value: &Value) -> EvalResult<Value> {
    match op {
        OpTag::Not => Ok(Value::Bool(!value.is_truthy())),

        OpTag::BitNot => match value {
            Value::Integer(n) => Ok(Value::Integer(!n)),
            Value::Big(b) => Ok(Value::Big(!b.clone())),
            other => Err(type_error(op, other)),
        },

        OpTag::Neg => match value {
            Value::Integer(n) => n.checked_neg()
                                  .map(Value::Integer)
                                  .ok_or(RuntimeError::Overflow),
            Value::Real(r) => Ok(Value::Real(-r)),
            Value::Big(b) => Ok(Value::Big(-b.clone())),
            other => Err(type_error(op, other)),
        },

        OpTag::Pos => match value {
            Value::Integer(_) | Value::Real(_) | Value::Big(_) => Ok(value.clone()),
            other => Err(type_error(op, other)),
        },

        _ => unreachable!("non-unary tag {op:?} dispatched as unary"),
    }
}

fn type_error(op: OpTag, value: &Value) -> RuntimeError {
    RuntimeError::TypeError { details: format!("cannot apply unary {op} to {}",
                                               value.class().name()), }
}
