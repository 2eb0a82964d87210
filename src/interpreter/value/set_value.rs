use std::{
    collections::HashSet,
    fmt::Display,
    hash::{Hash, Hasher},
    rc::Rc,
};

use num_bigint::BigInt;
use ordered_float::OrderedFloat;

use crate::{error::RuntimeError, interpreter::value::core::Value};

/// Enum representing values allowed in sets.
///
/// Set elements need a hash identity, so reals are wrapped in
/// `OrderedFloat` and values without one (functions, maps, instances,
/// null) are rejected at conversion time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SetValue {
    /// A boolean such as `true`.
    Bool(bool),
    /// An integer such as `-4` or `42`.
    Integer(i64),
    /// An arbitrary-precision integer such as `123n`.
    Big(BigInt),
    /// A real such as `3.141592653589793`.
    Real(OrderedFloat<f64>),
    /// A string such as `'hey'`.
    Str(String),
    /// An array such as `[1, 2, 2]`.
    Array(Vec<SetValue>),
    /// A nested set.
    Set(HashSet<SetValue>),
}

impl TryFrom<&Value> for SetValue {
    type Error = RuntimeError;

    fn try_from(v: &Value) -> Result<Self, RuntimeError> {
        match v {
            Value::Bool(b) => Ok(Self::Bool(*b)),
            Value::Integer(i) => Ok(Self::Integer(*i)),
            Value::Big(b) => Ok(Self::Big(b.clone())),
            Value::Real(r) => Ok(Self::Real(OrderedFloat(*r))),
            Value::Str(s) => Ok(Self::Str(s.clone())),
            Value::Array(arr) => Ok(Self::Array(arr.iter()
                                                   .map(Self::try_from)
                                                   .collect::<Result<_, _>>()?)),
            Value::Set(set) => Ok(Self::Set(set.iter().cloned().collect())),
            other => Err(RuntimeError::NotHashable { class: other.class().name().to_string() }),
        }
    }
}

impl From<SetValue> for Value {
    fn from(s: SetValue) -> Self {
        match s {
            SetValue::Bool(b) => Self::Bool(b),
            SetValue::Integer(i) => Self::Integer(i),
            SetValue::Big(b) => Self::Big(b),
            SetValue::Real(r) => Self::Real(r.into_inner()),
            SetValue::Str(s) => Self::Str(s),
            SetValue::Array(arr) => Self::Array(Rc::new(arr.into_iter().map(Self::from).collect())),
            SetValue::Set(set) => Self::Set(Rc::new(set.into_iter().collect())),
        }
    }
}

impl Hash for SetValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        use SetValue::{Array, Big, Bool, Integer, Real, Set, Str};
        match self {
            Bool(b) => {
                state.write_u8(0);
                b.hash(state);
            },
            Integer(i) => {
                state.write_u8(1);
                i.hash(state);
            },
            Big(b) => {
                state.write_u8(2);
                b.hash(state);
            },
            Real(r) => {
                state.write_u8(3);
                r.hash(state);
            },
            Str(s) => {
                state.write_u8(4);
                s.hash(state);
            },
            Array(arr) => {
                state.write_u8(5);
                arr.hash(state);
            },
            Set(set) => {
                state.write_u8(6);
                let mut hashes: Vec<u64> =
                    set.iter()
                       .map(|item| {
                           let mut hasher = std::collections::hash_map::DefaultHasher::new();
                           item.hash(&mut hasher);
                           hasher.finish()
                       })
                       .collect();

                hashes.sort_unstable();

                let mut combined_hash: u64 = 0;
                for h in hashes {
                    combined_hash = combined_hash.wrapping_add(h);
                }
                combined_hash.hash(state);
            },
        }
    }
}

impl Display for SetValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value: Value = self.clone().into();
        write!(f, "{value}")
    }
}
