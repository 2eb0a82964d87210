use std::rc::Rc;

use crate::interpreter::{evaluator::core::EvalResult, value::core::Value};

/// The shape shared by every callable the engine dispatches to: builtin
/// functions, registered overloads, and class-declared operators.
///
/// Overloads receive their receiver as the first element of the argument
/// slice.
pub type NativeFn = Rc<dyn Fn(&[Value]) -> EvalResult<Value>>;

/// A named host function usable as a value, a binding, or an overload.
///
/// Cloning is cheap; two clones compare equal because they share the same
/// underlying function.
#[derive(Clone)]
pub struct NativeFunction {
    name: Rc<str>,
    func: NativeFn,
}

impl NativeFunction {
    /// Wraps a host closure under the given name.
    ///
    /// # Example
    /// ```
    /// use embex::{NativeFunction, Value};
    ///
    /// let double = NativeFunction::new("double", |args| {
    ///     match args {
    ///         [Value::Integer(n)] => Ok(Value::Integer(n * 2)),
    ///         _ => Ok(Value::Null),
    ///     }
    /// });
    /// assert_eq!(double.invoke(&[Value::Integer(21)]).unwrap(), Value::Integer(42));
    /// ```
    pub fn new(name: impl Into<Rc<str>>,
               func: impl Fn(&[Value]) -> EvalResult<Value> + 'static)
               -> Self {
        Self { name: name.into(),
               func: Rc::new(func), }
    }

    /// The function's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invokes the function with the given arguments.
    ///
    /// For overloads, `args[0]` is the receiver.
    pub fn invoke(&self, args: &[Value]) -> EvalResult<Value> {
        (self.func)(args)
    }
}

impl std::fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<function {}>", self.name)
    }
}

impl PartialEq for NativeFunction {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.func), Rc::as_ptr(&other.func))
    }
}
