use std::{collections::HashMap, rc::Rc};

use crate::{
    interpreter::value::{core::Value, function::NativeFunction},
    ops::OpTag,
};

/// The runtime class of a value.
///
/// Every built-in value variant has a fixed class representative; values of
/// user-declared classes carry a shared [`ClassDef`]. Classes are the outer
/// key of the overload machinery: overload resolution walks a value's class
/// and then its parent chain.
#[derive(Debug, Clone)]
pub enum Class {
    /// Class of `Value::Integer`.
    Integer,
    /// Class of `Value::Real`.
    Real,
    /// Class of `Value::Big`.
    Big,
    /// Class of `Value::Bool`.
    Bool,
    /// Class of `Value::Str`.
    Str,
    /// Class of `Value::Array`.
    Array,
    /// Class of `Value::Set`.
    Set,
    /// Class of `Value::Map`.
    Map,
    /// Class of `Value::Function`.
    Function,
    /// Class of `Value::Null`.
    Null,
    /// A user-declared class.
    Defined(Rc<ClassDef>),
}

impl Class {
    /// The class name used in diagnostics.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Integer => "integer",
            Self::Real => "real",
            Self::Big => "big integer",
            Self::Bool => "boolean",
            Self::Str => "string",
            Self::Array => "array",
            Self::Set => "set",
            Self::Map => "map",
            Self::Function => "function",
            Self::Null => "null",
            Self::Defined(def) => def.name(),
        }
    }

    /// The hashable identity of this class, used as the overload table key.
    #[must_use]
    pub fn key(&self) -> ClassKey {
        match self {
            Self::Integer => ClassKey::Integer,
            Self::Real => ClassKey::Real,
            Self::Big => ClassKey::Big,
            Self::Bool => ClassKey::Bool,
            Self::Str => ClassKey::Str,
            Self::Array => ClassKey::Array,
            Self::Set => ClassKey::Set,
            Self::Map => ClassKey::Map,
            Self::Function => ClassKey::Function,
            Self::Null => ClassKey::Null,
            Self::Defined(def) => ClassKey::Defined(Rc::as_ptr(def)),
        }
    }

    /// The parent class in the inheritance walk, or `None` at the root.
    ///
    /// Built-in classes have no parent; user classes chain through the
    /// parent configured at declaration time. The chain is finite by
    /// construction, so overload resolution always terminates.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        match self {
            Self::Defined(def) => def.parent().map(|p| Self::Defined(p.clone())),
            _ => None,
        }
    }

    /// An operator this class declares on itself, if any.
    ///
    /// Only user classes can declare operators; built-in behavior is
    /// installed through engine-local registration instead.
    #[must_use]
    pub fn declared(&self, tag: OpTag) -> Option<NativeFunction> {
        match self {
            Self::Defined(def) => def.operator(tag).cloned(),
            _ => None,
        }
    }
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

/// Hashable class identity: a unit key per built-in class, pointer identity
/// for user-declared classes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum ClassKey {
    Integer,
    Real,
    Big,
    Bool,
    Str,
    Array,
    Set,
    Map,
    Function,
    Null,
    Defined(*const ClassDef),
}

/// A user-declared class: a name, an optional parent, and the operators the
/// class declares on itself.
///
/// Self-declared operators are visible to every engine without touching any
/// engine instance; engine-local registration can still add to or shadow
/// them per engine.
///
/// # Example
/// ```
/// use embex::{ClassDef, Engine, Instance, NativeFunction, OpTag, Value};
///
/// let answer = ClassDef::new("answer")
///     .with_operator(OpTag::Mul, NativeFunction::new("answer.mul", |args| {
///         match args {
///             [_, Value::Integer(n)] => Ok(Value::Integer(42 * n)),
///             _ => Ok(Value::Null),
///         }
///     }))
///     .build();
///
/// let engine = Engine::new();
/// let value = Value::from(Instance::new(&answer, [("ignored", Value::Null)]));
/// let result = engine.evaluate_template(&["", " * 2"], &[value]).unwrap();
/// assert_eq!(result, Value::Integer(84));
/// ```
#[derive(Debug, Clone)]
pub struct ClassDef {
    name:      String,
    parent:    Option<Rc<ClassDef>>,
    operators: HashMap<OpTag, NativeFunction>,
}

impl ClassDef {
    /// Starts a class declaration.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name:      name.into(),
               parent:    None,
               operators: HashMap::new(), }
    }

    /// Sets the parent class; overload resolution falls back to it.
    #[must_use]
    pub fn with_parent(mut self, parent: &Rc<Self>) -> Self {
        self.parent = Some(parent.clone());
        self
    }

    /// Declares an operator on the class itself.
    #[must_use]
    pub fn with_operator(mut self, tag: OpTag, func: NativeFunction) -> Self {
        self.operators.insert(tag, func);
        self
    }

    /// Finishes the declaration. The returned shared definition is the
    /// class's identity: instances and overload registrations refer to it.
    #[must_use]
    pub fn build(self) -> Rc<Self> {
        Rc::new(self)
    }

    /// The class name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The parent class, if one was configured.
    #[must_use]
    pub const fn parent(&self) -> Option<&Rc<Self>> {
        self.parent.as_ref()
    }

    /// A self-declared operator implementation, if present.
    #[must_use]
    pub fn operator(&self, tag: OpTag) -> Option<&NativeFunction> {
        self.operators.get(&tag)
    }

    /// The [`Class`] this definition stands for.
    #[must_use]
    pub fn class(self: &Rc<Self>) -> Class {
        Class::Defined(self.clone())
    }
}

/// An instance of a user-declared class: the shared definition plus named
/// fields.
#[derive(Debug, Clone)]
pub struct Instance {
    class:  Rc<ClassDef>,
    fields: HashMap<String, Value>,
}

impl Instance {
    /// Creates an instance of `class` with the given fields.
    pub fn new<N, V>(class: &Rc<ClassDef>, fields: impl IntoIterator<Item = (N, V)>) -> Self
        where N: Into<String>,
              V: Into<Value>
    {
        Self { class:  class.clone(),
               fields: fields.into_iter().map(|(n, v)| (n.into(), v.into())).collect(), }
    }

    /// The class this instance belongs to.
    #[must_use]
    pub const fn class(&self) -> &Rc<ClassDef> {
        &self.class
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

impl PartialEq for Instance {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.class, &other.class) && self.fields == other.fields
    }
}
