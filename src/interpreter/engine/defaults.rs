use std::{cmp::Ordering, collections::HashMap, f64::consts};

use num_traits::{Signed, ToPrimitive};

use crate::{
    error::RuntimeError,
    interpreter::{
        engine::core::Engine,
        evaluator::{binary, subscript::{SliceBounds, slice_sequence}},
        value::{class::Class, core::Value, function::NativeFunction},
    },
    ops::OpTag,
    util::num::i64_to_f64_checked,
};

/// Installs the default configuration on an engine: logical constants,
/// numeric constants and functions, the `Math` namespace, and the built-in
/// overloads of the container classes.
pub(crate) fn install(engine: &mut Engine) {
    engine.bind("true", true);
    engine.bind("false", false);
    engine.bind("null", Value::Null);

    engine.bind("PI", consts::PI);
    engine.bind("E", consts::E);
    engine.bind("TAU", consts::TAU);

    let functions = [abs_function(),
                     extremum("min", Ordering::Less),
                     extremum("max", Ordering::Greater),
                     rounding("floor", f64::floor),
                     rounding("ceil", f64::ceil),
                     rounding("round", f64::round),
                     sqrt_function(),
                     pow_function()];

    let mut math: HashMap<String, Value> = HashMap::new();
    math.insert("PI".to_string(), Value::Real(consts::PI));
    math.insert("E".to_string(), Value::Real(consts::E));
    math.insert("TAU".to_string(), Value::Real(consts::TAU));
    for function in functions {
        math.insert(function.name().to_string(), Value::Function(function.clone()));
        engine.bind(function.name().to_string(), function);
    }
    engine.bind("Math", math);

    install_overloads(engine);
}

/// Installs the built-in overload defaults: sequence concatenation,
/// negative-wrap indexing and slicing for arrays, repetition for strings,
/// union and difference for sets.
fn install_overloads(engine: &mut Engine) {
    let overloads = engine.overloads_mut();

    overloads.insert(&Class::Array, OpTag::Add, array_concat());
    overloads.insert(&Class::Array, OpTag::Index, array_at());
    overloads.insert(&Class::Array, OpTag::Slice, array_slice());
    overloads.insert(&Class::Str, OpTag::Mul, str_repeat());
    overloads.insert(&Class::Set, OpTag::Add, set_union());
    overloads.insert(&Class::Set, OpTag::Sub, set_difference());
}

/// Concatenation of two arrays (`[1, 2] + [3, 4]`).
fn array_concat() -> NativeFunction {
    NativeFunction::new("array.concat", |args| {
        let [Value::Array(left), right] = args else {
            return Err(receiver_error("array.concat", "array", args));
        };
        let Value::Array(right) = right else {
            return Err(RuntimeError::TypeError { details: format!("cannot concatenate array and {}",
                                                                  right.class().name()), });
        };
        Ok(Value::from(left.iter().chain(right.iter()).cloned().collect::<Vec<_>>()))
    })
}

/// Array indexing with negative wrap: `arr[-1]` is the last element.
fn array_at() -> NativeFunction {
    NativeFunction::new("array.at", |args| {
        let [Value::Array(items), index] = args else {
            return Err(receiver_error("array.at", "array", args));
        };

        let requested = index.as_index()?;
        #[allow(clippy::cast_possible_wrap)]
        let wrapped = if requested < 0 { requested + items.len() as i64 } else { requested };

        usize::try_from(wrapped).ok()
                                .and_then(|i| items.get(i).cloned())
                                .ok_or(RuntimeError::IndexOutOfBounds { len:   items.len(),
                                                                        found: requested, })
    })
}

/// Python-style single-dimension array slicing.
fn array_slice() -> NativeFunction {
    NativeFunction::new("array.slice", |args| {
        let [Value::Array(items), dims @ ..] = args else {
            return Err(receiver_error("array.slice", "array", args));
        };

        let bounds = dims.iter()
                         .map(SliceBounds::decode)
                         .collect::<Option<Vec<_>>>()
                         .ok_or_else(|| {
                             RuntimeError::InvalidArgument { details: "malformed slice dimension".to_string() }
                         })?;

        slice_sequence(items, &bounds)
    })
}

/// String repetition (`'ha' * 3`). Dispatching through the right operand
/// makes `3 * 'hey'` land here too.
fn str_repeat() -> NativeFunction {
    NativeFunction::new("str.repeat", |args| {
        let [Value::Str(text), count] = args else {
            return Err(receiver_error("str.repeat", "string", args));
        };

        let n = count.as_index()?;
        let n = usize::try_from(n).map_err(|_| {
                                      RuntimeError::InvalidArgument { details: format!("repeat count cannot be negative, got {n}") }
                                  })?;
        Ok(Value::Str(text.repeat(n)))
    })
}

/// Set union (`a + b`).
fn set_union() -> NativeFunction {
    NativeFunction::new("set.union", |args| {
        let [Value::Set(left), right] = args else {
            return Err(receiver_error("set.union", "set", args));
        };
        let Value::Set(right) = right else {
            return Err(RuntimeError::TypeError { details: format!("cannot unite set and {}",
                                                                  right.class().name()), });
        };
        Ok(Value::from(left.union(right).cloned().collect::<std::collections::HashSet<_>>()))
    })
}

/// Set difference (`a - b`, the elements of `a` not in `b`).
fn set_difference() -> NativeFunction {
    NativeFunction::new("set.difference", |args| {
        let [Value::Set(left), right] = args else {
            return Err(receiver_error("set.difference", "set", args));
        };
        let Value::Set(right) = right else {
            return Err(RuntimeError::TypeError { details: format!("cannot subtract {} from set",
                                                                  right.class().name()), });
        };
        Ok(Value::from(left.difference(right).cloned().collect::<std::collections::HashSet<_>>()))
    })
}

/// Absolute value, preserving the numeric class.
fn abs_function() -> NativeFunction {
    NativeFunction::new("abs", |args| {
        let [value] = args else {
            return Err(arity_error("abs", 1, args.len()));
        };
        match value {
            Value::Integer(n) => n.checked_abs().map(Value::Integer).ok_or(RuntimeError::Overflow),
            Value::Real(r) => Ok(Value::Real(r.abs())),
            Value::Big(b) => Ok(Value::Big(b.abs())),
            other => Err(numeric_error("abs", other)),
        }
    })
}

/// Variadic `min`/`max`, returning the original operand.
fn extremum(name: &'static str, prefer: Ordering) -> NativeFunction {
    NativeFunction::new(name, move |args| {
        let (first, rest) = args.split_first().ok_or_else(|| {
                                                  RuntimeError::InvalidArgument { details: format!("{name} expects at least one argument") }
                                              })?;

        let mut best = first;
        let mut best_key = as_number(name, best)?;
        for candidate in rest {
            let key = as_number(name, candidate)?;
            if key.partial_cmp(&best_key) == Some(prefer) {
                best = candidate;
                best_key = key;
            }
        }
        Ok(best.clone())
    })
}

/// `floor`, `ceil` and `round`; integers pass through unchanged.
fn rounding(name: &'static str, round: fn(f64) -> f64) -> NativeFunction {
    NativeFunction::new(name, move |args| {
        match args {
            [Value::Integer(n)] => Ok(Value::Integer(*n)),
            [Value::Real(r)] => Ok(Value::Real(round(*r))),
            [other] => Err(numeric_error(name, other)),
            _ => Err(arity_error(name, 1, args.len())),
        }
    })
}

fn sqrt_function() -> NativeFunction {
    NativeFunction::new("sqrt", |args| {
        let [value] = args else {
            return Err(arity_error("sqrt", 1, args.len()));
        };
        Ok(Value::Real(as_number("sqrt", value)?.sqrt()))
    })
}

/// `pow(a, b)`, with the same semantics as the `**` operator.
fn pow_function() -> NativeFunction {
    NativeFunction::new("pow", |args| {
        let [base, exponent] = args else {
            return Err(arity_error("pow", 2, args.len()));
        };
        binary::native_binary(OpTag::Pow, base, exponent)
    })
}

fn as_number(name: &str, value: &Value) -> Result<f64, RuntimeError> {
    match value {
        Value::Integer(n) => i64_to_f64_checked(*n),
        Value::Real(r) => Ok(*r),
        Value::Big(b) => b.to_f64().ok_or(RuntimeError::LiteralTooLarge),
        other => Err(numeric_error(name, other)),
    }
}

fn numeric_error(name: &str, value: &Value) -> RuntimeError {
    RuntimeError::TypeError { details: format!("{name} expects a number, found {}",
                                               value.class().name()), }
}

fn arity_error(name: &str, expected: usize, got: usize) -> RuntimeError {
    RuntimeError::InvalidArgument { details: format!("{name} expects {expected} argument(s), got {got}"), }
}

fn receiver_error(name: &str, class: &str, args: &[Value]) -> RuntimeError {
    let found = args.first().map_or_else(|| "nothing".to_string(),
                                         |value| value.class().name().to_string());
    RuntimeError::InvalidArgument { details: format!("{name} expects a {class} receiver, found {found}"), }
}
