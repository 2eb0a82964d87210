use crate::{
    ast::{Expr, SliceDim},
    error::RuntimeError,
    interpreter::{
        engine::core::Engine,
        evaluator::{binary, subscript::{self, SliceBounds}, unary},
        tokenizer::Token,
        value::core::Value,
    },
    ops::OpTag,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

impl Engine {
    /// Evaluates an expression tree against this engine's bindings and
    /// overloads.
    ///
    /// This is the main entry point for tree evaluation; the string and
    /// template entry points feed it after tokenizing and parsing. The
    /// evaluator dispatches on the node variant: values, identifiers, unary
    /// and binary operations, property access, invocation, indexing and
    /// slicing.
    ///
    /// Operands, arguments and slice bounds are always evaluated strictly
    /// left to right; this is observable through side effects in embedded
    /// functions.
    ///
    /// # Errors
    /// Any [`RuntimeError`] raised by lookup, dispatch, an overload, or a
    /// native fallback.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Value { token } => Ok(Self::eval_value(token)),
            Expr::Identifier { name } => self.eval_identifier(name),
            Expr::Unary { op, operand } => self.eval_unary(*op, operand),
            Expr::Binary { left, op, right } => self.eval_binary(left, *op, right),
            Expr::AccessProperty { object, property } => self.eval(object)?.get_property(property),
            Expr::Invoke { callee, arguments } => self.eval_invoke(callee, arguments),
            Expr::Indexing { target, index } => self.eval_indexing(target, index),
            Expr::Slicing { target, dimensions } => self.eval_slicing(target, dimensions),
        }
    }

    /// Extracts the value of a `Value` node: the embedded host value
    /// verbatim, or the constant's decoded value.
    fn eval_value(token: &Token) -> Value {
        match token {
            Token::Embedded(value) => value.clone(),
            Token::Constant(constant) => Value::from(&constant.value),
            _ => unreachable!("value nodes hold embedded or constant tokens"),
        }
    }

    /// Resolves an identifier against the binding table.
    fn eval_identifier(&self, name: &str) -> EvalResult<Value> {
        self.binding(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UnknownIdentifier { name: name.to_string() })
    }

    /// Evaluates a unary operation: the operand's class is consulted for an
    /// overload, the operation's native fallback applies otherwise.
    fn eval_unary(&self, op: OpTag, operand: &Expr) -> EvalResult<Value> {
        let value = self.eval(operand)?;

        if let Some(overload) = self.overload_for_value(&value, op) {
            return overload.invoke(&[value]);
        }

        unary::native_unary(op, &value)
    }

    /// Evaluates a binary operation.
    ///
    /// Both operands are evaluated, left then right. Dispatch prefers an
    /// overload on the left operand's class, invoked as `f(left, right)`;
    /// then an overload on the right operand's class with the operands
    /// swapped, `f(right, left)`, which lets symmetric operators like
    /// `3 * 'hey'` reach the string's `*`; the native fallback runs when
    /// neither class has an overload. Exactly one of the three is invoked.
    fn eval_binary(&self, left: &Expr, op: OpTag, right: &Expr) -> EvalResult<Value> {
        let lhs = self.eval(left)?;
        let rhs = self.eval(right)?;

        if let Some(overload) = self.overload_for_value(&lhs, op) {
            return overload.invoke(&[lhs, rhs]);
        }

        if let Some(overload) = self.overload_for_value(&rhs, op) {
            return overload.invoke(&[rhs, lhs]);
        }

        binary::native_binary(op, &lhs, &rhs)
    }

    /// Evaluates an invocation: callee first, then all arguments in order.
    fn eval_invoke(&self, callee: &Expr, arguments: &[Expr]) -> EvalResult<Value> {
        let callee = self.eval(callee)?;

        let mut args = Vec::with_capacity(arguments.len());
        for argument in arguments {
            args.push(self.eval(argument)?);
        }

        match callee {
            Value::Function(func) => func.invoke(&args),
            other => Err(RuntimeError::NotCallable { found: other.class().name().to_string() }),
        }
    }

    /// Evaluates an indexing subscript: the `[i]` overload on the target's
    /// class wins, native host indexing applies otherwise.
    fn eval_indexing(&self, target: &Expr, index: &Expr) -> EvalResult<Value> {
        let target = self.eval(target)?;
        let index = self.eval(index)?;

        if let Some(overload) = self.overload_for_value(&target, OpTag::Index) {
            return overload.invoke(&[target, index]);
        }

        subscript::native_index(&target, &index)
    }

    /// Evaluates a slicing subscript.
    ///
    /// Every dimension's bounds are evaluated eagerly, left to right. A
    /// `[:]` overload on the target's class receives the target and one
    /// encoded dimension per argument; without one, only the degenerate
    /// single start-only dimension is accepted (as an index access).
    fn eval_slicing(&self, target: &Expr, dimensions: &[SliceDim]) -> EvalResult<Value> {
        let target = self.eval(target)?;

        let mut bounds = Vec::with_capacity(dimensions.len());
        for dimension in dimensions {
            bounds.push(SliceBounds { start: self.eval_bound(dimension.start.as_ref())?,
                                      end:   self.eval_bound(dimension.end.as_ref())?,
                                      step:  self.eval_bound(dimension.step.as_ref())?, });
        }

        if let Some(overload) = self.overload_for_value(&target, OpTag::Slice) {
            let mut args = Vec::with_capacity(bounds.len() + 1);
            args.push(target);
            args.extend(bounds.iter().map(SliceBounds::encode));
            return overload.invoke(&args);
        }

        subscript::native_slice(&target, &bounds)
    }

    fn eval_bound(&self, bound: Option<&Expr>) -> EvalResult<Option<Value>> {
        bound.map(|expr| self.eval(expr)).transpose()
    }
}
