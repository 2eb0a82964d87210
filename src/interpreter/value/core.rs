use std::{
    collections::{HashMap, HashSet},
    rc::Rc,
};

use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};
use ordered_float::OrderedFloat;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        tokenizer::ConstantValue,
        value::{class::{Class, Instance}, function::NativeFunction, set_value::SetValue},
    },
    util::num::f64_to_i64_checked,
};

/// A host value as seen by the engine.
///
/// Values flow through the pipeline opaquely: embedded values are passed
/// through verbatim, and operators only dispatch on them. This enum models
/// every type that can appear as an operand, a binding, an argument, or a
/// result.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A 64-bit floating-point number.
    Real(f64),
    /// An arbitrary-precision integer.
    Big(BigInt),
    /// A boolean.
    Bool(bool),
    /// A string.
    Str(String),
    /// An ordered sequence of values.
    Array(Rc<Vec<Self>>),
    /// A set of unique values.
    Set(Rc<HashSet<SetValue>>),
    /// A property bag with string keys.
    Map(Rc<HashMap<String, Self>>),
    /// A callable host function.
    Function(NativeFunction),
    /// An instance of a user-declared class.
    Instance(Rc<Instance>),
    /// The absent value. Encodes unspecified slice bounds when slice
    /// overloads are invoked, and is bound as `null` by the defaults.
    Null,
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<BigInt> for Value {
    fn from(v: BigInt) -> Self {
        Self::Big(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(v))
    }
}

impl From<HashSet<SetValue>> for Value {
    fn from(v: HashSet<SetValue>) -> Self {
        Self::Set(Rc::new(v))
    }
}

impl From<HashMap<String, Self>> for Value {
    fn from(v: HashMap<String, Self>) -> Self {
        Self::Map(Rc::new(v))
    }
}

impl From<NativeFunction> for Value {
    fn from(v: NativeFunction) -> Self {
        Self::Function(v)
    }
}

impl From<Instance> for Value {
    fn from(v: Instance) -> Self {
        Self::Instance(Rc::new(v))
    }
}

impl Value {
    /// The runtime class of this value, the starting point of overload
    /// resolution.
    #[must_use]
    pub fn class(&self) -> Class {
        match self {
            Self::Integer(_) => Class::Integer,
            Self::Real(_) => Class::Real,
            Self::Big(_) => Class::Big,
            Self::Bool(_) => Class::Bool,
            Self::Str(_) => Class::Str,
            Self::Array(_) => Class::Array,
            Self::Set(_) => Class::Set,
            Self::Map(_) => Class::Map,
            Self::Function(_) => Class::Function,
            Self::Instance(instance) => Class::Defined(instance.class().clone()),
            Self::Null => Class::Null,
        }
    }

    /// Truthiness as used by `!`, `&&` and `||`.
    ///
    /// `false`, `0`, `0.0`, `NaN`, `0n`, the empty string and `null` are
    /// falsy; every other value is truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Integer(n) => *n != 0,
            Self::Real(r) => *r != 0.0 && !r.is_nan(),
            Self::Big(b) => !b.is_zero(),
            Self::Str(s) => !s.is_empty(),
            Self::Null => false,
            _ => true,
        }
    }

    /// Loose equality (`==`): numbers compare across integer, real and
    /// big-integer classes; everything else compares structurally.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn loosely_equal(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Real(b)) | (Self::Real(b), Self::Integer(a)) => {
                *a as f64 == *b
            },
            (Self::Integer(a), Self::Big(b)) | (Self::Big(b), Self::Integer(a)) => {
                *b == BigInt::from(*a)
            },
            (Self::Real(a), Self::Big(b)) | (Self::Big(b), Self::Real(a)) => {
                b.to_f64().is_some_and(|bf| bf == *a)
            },
            _ => self == other,
        }
    }

    /// Strict equality (`===`): same runtime class, then structural
    /// equality.
    #[must_use]
    pub fn strictly_equal(&self, other: &Self) -> bool {
        self.class().key() == other.class().key() && self == other
    }

    /// Converts the value to an `i64` subscript or slice bound.
    ///
    /// Accepts integers, big integers in `i64` range, and integral reals.
    pub fn as_index(&self) -> EvalResult<i64> {
        match self {
            Self::Integer(n) => Ok(*n),
            Self::Big(b) => b.to_i64().ok_or(RuntimeError::LiteralTooLarge),
            Self::Real(r) => f64_to_i64_checked(*r),
            other => {
                Err(RuntimeError::TypeError { details: format!("expected an integer index, found {}",
                                                               other.class().name()), })
            },
        }
    }

    /// Host property access, as used by `object.name`.
    ///
    /// Maps expose their keys, instances their fields; arrays and strings
    /// expose `length`, sets expose `size`.
    pub fn get_property(&self, name: &str) -> EvalResult<Self> {
        #[allow(clippy::cast_possible_wrap)]
        let found = match self {
            Self::Map(map) => map.get(name).cloned(),
            Self::Instance(instance) => instance.field(name).cloned(),
            Self::Array(items) if name == "length" => Some(Self::Integer(items.len() as i64)),
            Self::Str(s) if name == "length" => Some(Self::Integer(s.chars().count() as i64)),
            Self::Set(set) if name == "size" => Some(Self::Integer(set.len() as i64)),
            _ => None,
        };
        found.ok_or_else(|| RuntimeError::UnknownProperty { name: name.to_string(),
                                                            on:   self.class()
                                                                      .name()
                                                                      .to_string(), })
    }

    /// Returns `true` if the value is [`Array`](Self::Array).
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Function`](Self::Function).
    #[must_use]
    pub const fn is_function(&self) -> bool {
        matches!(self, Self::Function(..))
    }
}

impl From<&ConstantValue> for Value {
    fn from(constant: &ConstantValue) -> Self {
        match constant {
            ConstantValue::Integer(n) => Self::Integer(*n),
            ConstantValue::Real(r) => Self::Real(*r),
            ConstantValue::Big(b) => Self::Big(b.clone()),
            ConstantValue::Str(s) => Self::Str(s.clone()),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r}"),
            Self::Big(b) => write!(f, "{b}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Null => write!(f, "null"),
            Self::Function(func) => write!(f, "{func:?}"),
            Self::Instance(instance) => write!(f, "<{} instance>", instance.class().name()),
            Self::Array(items) => {
                write!(f, "[")?;
                for (index, value) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{value}")?;
                }
                write!(f, "]")
            },
            Self::Map(map) => {
                let mut keys: Vec<&String> = map.keys().collect();
                keys.sort();

                write!(f, "{{")?;
                for (index, key) in keys.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {}", map[*key])?;
                }
                write!(f, "}}")
            },
            Self::Set(set) => {
                fn print_key(val: &SetValue)
                             -> (u8, Option<i64>, Option<OrderedFloat<f64>>, String) {
                    match val {
                        SetValue::Bool(b) => (0, Some(i64::from(*b)), None, String::new()),
                        SetValue::Integer(n) => (1, Some(*n), None, String::new()),
                        SetValue::Big(b) => (2, None, None, b.to_string()),
                        SetValue::Real(r) => (3, None, Some(*r), String::new()),
                        SetValue::Str(s) => (4, None, None, s.clone()),
                        SetValue::Array(_) => (5, None, None, format!("{val}")),
                        SetValue::Set(_) => (6, None, None, format!("{val}")),
                    }
                }

                let mut elems: Vec<&SetValue> = set.iter().collect();
                elems.sort_by(|a, b| print_key(a).cmp(&print_key(b)));

                write!(f, "{{")?;
                for (index, value) in elems.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{value}")?;
                }
                write!(f, "}}")
            },
        }
    }
}
