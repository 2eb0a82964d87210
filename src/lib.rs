//! # embex
//!
//! embex is a small expression engine for template fragments. It parses and
//! evaluates arithmetic, logical, indexing, slicing, property and
//! invocation expressions in which literal source text is interleaved with
//! embedded host values. Identifiers resolve against a binding table, and
//! every operator can be overloaded per runtime class of the operand.
//!
//! ```
//! use embex::{Engine, Value};
//!
//! let engine = Engine::with_defaults();
//!
//! assert_eq!(engine.evaluate("2 + 3 * 4").unwrap(), Value::Integer(14));
//!
//! let items = Value::from(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]);
//! let reversed = engine.evaluate_template(&["", "[::-1]"], &[items]).unwrap();
//! assert_eq!(reversed,
//!            Value::from(vec![Value::Integer(3), Value::Integer(2), Value::Integer(1)]));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the slice dimension record that
/// represent the syntactic structure of an expression as a tree. The tree
/// is built by the parser and walked by the evaluator.
///
/// # Responsibilities
/// - Defines expression node types for all supported constructs.
/// - Carries the originating tokens of value nodes unchanged.
pub mod ast;
/// Provides unified error types for the whole pipeline.
///
/// This module defines all errors that can be raised while tokenizing,
/// parsing, or evaluating, plus the top-level error that the entry points
/// surface. Tokenizer errors carry rendered source excerpts.
///
/// # Responsibilities
/// - Defines one error enum per pipeline stage.
/// - Renders positions and excerpts for tokenizer diagnostics.
/// - Wraps the stage errors into a single public error type.
pub mod error;
/// Orchestrates the pipeline from fragments to result values.
///
/// This module ties together tokenizing, parsing, evaluation, the value
/// model, and the engine that owns bindings and overloads. It exposes the
/// public API for evaluating expressions.
///
/// # Responsibilities
/// - Coordinates the tokenizer, parser and evaluator.
/// - Manages engine state: bindings, overloads, defaults.
/// - Provides the template and plain-string entry points.
pub mod interpreter;
/// The operation data model.
///
/// Declares the stable operation tags, the operation descriptors with
/// their precedence and associativity, and name-based lookup for the
/// overload registration surface.
pub mod ops;
/// General utilities for safe numeric conversion.
///
/// Provides checked conversions between `i64` and `f64` used by numeric
/// promotion and subscript decoding.
pub mod util;

pub use crate::{
    error::Error,
    interpreter::{
        engine::core::{Engine, reset_default_engine, with_default_engine},
        evaluator::subscript::SliceBounds,
        value::{
            class::{Class, ClassDef, Instance},
            core::Value,
            function::NativeFunction,
        },
    },
    ops::OpTag,
};

/// Evaluates a plain source string on the process-wide default engine.
///
/// The default engine is constructed with the default configuration on
/// first use and lives until [`reset_default_engine`] discards it.
///
/// # Errors
/// Returns any pipeline [`Error`] unchanged.
///
/// # Examples
/// ```
/// use embex::{Value, evaluate};
///
/// assert_eq!(evaluate("2 ** 3 ** 2").unwrap(), Value::Integer(512));
/// assert!(evaluate("unknown_name").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<Value, Error> {
    with_default_engine(|engine| engine.evaluate(source))
}

/// Evaluates template fragments with embedded host values on the
/// process-wide default engine.
///
/// # Errors
/// Returns any pipeline [`Error`] unchanged.
///
/// # Examples
/// ```
/// use embex::{Value, evaluate_template};
///
/// let result = evaluate_template(&["'ha' * ", ""], &[Value::Integer(3)]).unwrap();
/// assert_eq!(result, Value::Str("hahaha".to_string()));
/// ```
pub fn evaluate_template(fragments: &[&str], values: &[Value]) -> Result<Value, Error> {
    with_default_engine(|engine| engine.evaluate_template(fragments, values))
}
