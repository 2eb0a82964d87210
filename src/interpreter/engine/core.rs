use std::{cell::RefCell, collections::HashMap};

use crate::{
    ast::Expr,
    error::{Error, RuntimeError},
    interpreter::{
        engine::{defaults, registry::OverloadTable},
        parser,
        tokenizer,
        value::{class::Class, core::Value, function::NativeFunction},
    },
    ops::{self, OpTag},
};

/// An expression engine instance: a binding table, an overload table, and
/// the pipeline methods that consume them.
///
/// Engines are independent of each other; bindings and overloads added to
/// one are never visible to another. [`Engine::new`] starts empty,
/// [`Engine::with_defaults`] installs the default bindings and the built-in
/// overloads for arrays, strings and sets.
///
/// # Example
/// ```
/// use embex::{Engine, Value};
///
/// let mut engine = Engine::with_defaults();
/// engine.bind("x", 10);
///
/// assert_eq!(engine.evaluate("x * 2 + 1").unwrap(), Value::Integer(21));
/// ```
#[derive(Debug, Default)]
pub struct Engine {
    bindings:  HashMap<String, Value>,
    overloads: OverloadTable,
}

impl Engine {
    /// Creates an engine with no bindings and no overloads.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine preloaded with the default bindings (`true`,
    /// `false`, `null`, numeric constants and functions, the `Math`
    /// namespace) and the built-in overloads of the container classes.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        defaults::install(&mut engine);
        engine
    }

    /// Tokenizes, parses and evaluates a plain source string.
    ///
    /// Equivalent to [`Engine::evaluate_template`] with an empty value
    /// list.
    ///
    /// # Errors
    /// Any [`Error`] from the pipeline, unchanged.
    pub fn evaluate(&self, source: &str) -> Result<Value, Error> {
        self.evaluate_template(&[source], &[])
    }

    /// Tokenizes, parses and evaluates template fragments interleaved with
    /// embedded host values.
    ///
    /// # Errors
    /// Any [`Error`] from the pipeline, unchanged.
    ///
    /// # Example
    /// ```
    /// use embex::{Engine, Value};
    ///
    /// let engine = Engine::with_defaults();
    /// let list = Value::from(vec![Value::Integer(1), Value::Integer(2)]);
    ///
    /// let result = engine.evaluate_template(&["", "[0] + 40"], &[list]).unwrap();
    /// assert_eq!(result, Value::Integer(41));
    /// ```
    pub fn evaluate_template(&self, fragments: &[&str], values: &[Value]) -> Result<Value, Error> {
        let tokens = tokenizer::tokenize_template(fragments, values)?;
        let expr = parser::core::parse(&tokens)?;
        Ok(self.eval(&expr)?)
    }

    /// Parses a plain source string without evaluating it.
    ///
    /// # Errors
    /// Any tokenizing or parsing [`Error`].
    pub fn parse(&self, source: &str) -> Result<Expr, Error> {
        let tokens = tokenizer::tokenize(source)?;
        Ok(parser::core::parse(&tokens)?)
    }

    /// Binds `name` to `value`. Binding an existing name replaces its
    /// value.
    pub fn bind(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.bindings.insert(name.into(), value.into());
    }

    /// Binds every pair of an iterable: a map of name to value, a vector
    /// of pairs, or anything else that yields them.
    pub fn bind_all<N, V>(&mut self, pairs: impl IntoIterator<Item = (N, V)>)
        where N: Into<String>,
              V: Into<Value>
    {
        for (name, value) in pairs {
            self.bind(name, value);
        }
    }

    /// Removes the named bindings. Unknown names are ignored.
    pub fn unbind_all<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) {
        for name in names {
            self.bindings.remove(name);
        }
    }

    /// Looks up a binding by name.
    #[must_use]
    pub fn binding(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Registers an overload: `func` implements `operation` for operands
    /// of `class` in this engine.
    ///
    /// The operation is named by its stable string surface (`"+"`, `"-x"`,
    /// `"[i]"`, `"[:]"`, ...). The function receives the receiver as its
    /// first argument; for a binary operation dispatched through the right
    /// operand, the operands arrive swapped.
    ///
    /// # Errors
    /// `UnknownOperation` when `operation` names no operation.
    ///
    /// # Example
    /// ```
    /// use embex::{Class, Engine, NativeFunction, Value};
    ///
    /// let mut engine = Engine::new();
    /// engine.overload(&Class::Str, "*", NativeFunction::new("str.repeat", |args| {
    ///           match args {
    ///               [Value::Str(s), Value::Integer(n)] => Ok(Value::Str(s.repeat(*n as usize))),
    ///               _ => Ok(Value::Null),
    ///           }
    ///       }))
    ///       .unwrap();
    ///
    /// assert_eq!(engine.evaluate("'ha' * 3").unwrap(), Value::Str("hahaha".to_string()));
    /// ```
    pub fn overload(&mut self,
                    class: &Class,
                    operation: &str,
                    func: NativeFunction)
                    -> Result<(), RuntimeError> {
        let info = ops::by_name(operation).ok_or_else(|| {
                                              RuntimeError::UnknownOperation { name: operation.to_string() }
                                          })?;
        self.overloads.insert(class, info.tag, func);
        Ok(())
    }

    /// Registers several overloads for one class in a single call.
    ///
    /// # Errors
    /// `UnknownOperation` on the first name that fails to resolve;
    /// registrations before it are kept.
    pub fn overload_all<'a>(&mut self,
                            class: &Class,
                            operations: impl IntoIterator<Item = (&'a str, NativeFunction)>)
                            -> Result<(), RuntimeError> {
        for (operation, func) in operations {
            self.overload(class, operation, func)?;
        }
        Ok(())
    }

    /// Resolves the overload for `tag` on operands of `class`, walking the
    /// parent chain.
    #[must_use]
    pub fn overload_for_class(&self, class: &Class, tag: OpTag) -> Option<NativeFunction> {
        self.overloads.resolve(class, tag)
    }

    /// Resolves the overload for `tag` on a concrete value.
    #[must_use]
    pub fn overload_for_value(&self, value: &Value, tag: OpTag) -> Option<NativeFunction> {
        self.overload_for_class(&value.class(), tag)
    }

    pub(crate) fn overloads_mut(&mut self) -> &mut OverloadTable {
        &mut self.overloads
    }
}

thread_local! {
    static DEFAULT_ENGINE: RefCell<Option<Engine>> = const { RefCell::new(None) };
}

/// Runs `f` against the process-wide default engine, constructing it with
/// the default configuration on first use.
///
/// The default engine is per thread; the engine's values are not shareable
/// across threads, so each thread owns an independent instance.
///
/// # Panics
/// Panics when called re-entrantly from inside `f` (the engine is borrowed
/// for the duration of the call).
pub fn with_default_engine<R>(f: impl FnOnce(&mut Engine) -> R) -> R {
    DEFAULT_ENGINE.with(|slot| {
                      let mut slot = slot.borrow_mut();
                      let engine = slot.get_or_insert_with(Engine::with_defaults);
                      f(engine)
                  })
}

/// Discards the default engine, including every binding and overload added
/// to it. The next use constructs a fresh one. User-created engines are
/// unaffected.
pub fn reset_default_engine() {
    DEFAULT_ENGINE.with(|slot| *slot.borrow_mut() = None);
}
