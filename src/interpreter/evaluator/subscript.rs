use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// The evaluated bounds of one slice dimension.
///
/// When a `[:]` overload is invoked, each dimension travels as one encoded
/// argument (see [`SliceBounds::encode`]); overload implementations use
/// [`SliceBounds::decode`] to get back to this shape.
#[derive(Debug, Clone, PartialEq)]
pub struct SliceBounds {
    /// The evaluated start bound, if written.
    pub start: Option<Value>,
    /// The evaluated end bound, if written.
    pub end:   Option<Value>,
    /// The evaluated step, if written.
    pub step:  Option<Value>,
}

impl SliceBounds {
    /// Encodes the dimension as the three-element array handed to `[:]`
    /// overloads, with `null` marking absent bounds.
    #[must_use]
    pub fn encode(&self) -> Value {
        Value::from(vec![self.start.clone().unwrap_or(Value::Null),
                         self.end.clone().unwrap_or(Value::Null),
                         self.step.clone().unwrap_or(Value::Null)])
    }

    /// Decodes a dimension argument received by a `[:]` overload.
    ///
    /// Returns `None` when the value is not a three-element array.
    #[must_use]
    pub fn decode(value: &Value) -> Option<Self> {
        let Value::Array(parts) = value else {
            return None;
        };
        let [start, end, step] = parts.as_slice() else {
            return None;
        };

        let slot = |part: &Value| match part {
            Value::Null => None,
            present => Some(present.clone()),
        };
        Some(Self { start: slot(start),
                    end:   slot(end),
                    step:  slot(step), })
    }
}

/// Native host indexing, used when the target's class has no `[i]`
/// overload: arrays by zero-based position, strings by character position,
/// maps by string key.
pub(crate) fn native_index(target: &Value, index: &Value) -> EvalResult<Value> {
    match target {
        Value::Array(items) => {
            let found = index.as_index()?;
            usize::try_from(found).ok()
                                  .and_then(|i| items.get(i).cloned())
                                  .ok_or(RuntimeError::IndexOutOfBounds { len: items.len(),
                                                                          found })
        },

        Value::Str(s) => {
            let found = index.as_index()?;
            usize::try_from(found).ok()
                                  .and_then(|i| s.chars().nth(i))
                                  .map(|c| Value::Str(c.to_string()))
                                  .ok_or(RuntimeError::IndexOutOfBounds { len: s.chars().count(),
                                                                          found })
        },

        Value::Map(map) => match index {
            Value::Str(key) => map.get(key)
                                  .cloned()
                                  .ok_or_else(|| RuntimeError::UnknownProperty { name: key.clone(),
                                                                                 on:   "map".to_string(), }),
            other => Err(RuntimeError::TypeError { details: format!("map keys are strings, found {}",
                                                                    other.class().name()), }),
        },

        other => Err(RuntimeError::TypeError { details: format!("cannot index a {}",
                                                                other.class().name()), }),
    }
}

/// Native slicing, used when the target's class has no `[:]` overload.
///
/// Only the degenerate form survives: exactly one dimension with only a
/// start bound, which collapses to an index access. Everything else fails.
pub(crate) fn native_slice(target: &Value, bounds: &[SliceBounds]) -> EvalResult<Value> {
    if let [SliceBounds { start: Some(start),
                          end: None,
                          step: None, }] = bounds
    {
        return native_index(target, start);
    }

    Err(RuntimeError::SliceNotSupported { class: target.class().name().to_string() })
}

/// Python-style single-dimension sequence slicing; the semantics behind the
/// default `[:]` overload of arrays.
///
/// The step defaults to 1 and must not be zero. With a positive step the
/// bounds default to `0..len`; with a negative step they default to
/// `len-1..-1` (an exclusive lower sentinel, so `arr[5::-1]` includes index
/// 0). Negative bounds wrap once by the length, then clamp to the
/// enumerable range.
pub(crate) fn slice_sequence(items: &[Value], bounds: &[SliceBounds]) -> EvalResult<Value> {
    let [dim] = bounds else {
        return Err(RuntimeError::InvalidArgument { details: format!("array slicing is one-dimensional, got {} dimensions",
                                                                    bounds.len()), });
    };

    #[allow(clippy::cast_possible_wrap)]
    let len = items.len() as i64;
    let step = match &dim.step {
        Some(value) => value.as_index()?,
        None => 1,
    };
    if step == 0 {
        return Err(RuntimeError::SliceStepZero);
    }

    let wrap = |bound: i64| if bound < 0 { bound + len } else { bound };
    let start = dim.start.as_ref().map(Value::as_index).transpose()?.map(wrap);
    let end = dim.end.as_ref().map(Value::as_index).transpose()?.map(wrap);

    let mut out = Vec::new();
    #[allow(clippy::cast_sign_loss)]
    if step > 0 {
        let start = start.unwrap_or(0).max(0);
        let end = end.unwrap_or(len).min(len);
        let mut i = start;
        while i < end {
            out.push(items[i as usize].clone());
            i += step;
        }
    } else {
        let start = start.unwrap_or(len - 1).min(len - 1);
        let end = end.unwrap_or(-1).max(-1);
        let mut i = start;
        while i > end {
            out.push(items[i as usize].clone());
            i += step;
        }
    }

    Ok(Value::from(out))
}
