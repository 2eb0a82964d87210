/// The engine module owns bindings, overloads, and the pipeline entry
/// points.
///
/// An engine instance combines a binding table, an overload table, and the
/// `evaluate` methods that run the tokenizer, parser and evaluator against
/// them. A process-wide default engine is constructed lazily and can be
/// reset.
///
/// # Responsibilities
/// - Exposes the string and template entry points.
/// - Manages bindings (upsert, bulk, unbind) and overload registration.
/// - Installs the default bindings and built-in overloads.
pub mod engine;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the expression tree, resolves identifiers
/// against the binding table, and dispatches operators through the
/// overload registry with native fallbacks for primitive operands.
///
/// # Responsibilities
/// - Evaluates AST nodes with strict left-to-right operand order.
/// - Dispatches unary, binary, indexing and slicing operations.
/// - Reports runtime errors such as unknown identifiers or type errors.
pub mod evaluator;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the tokenizer using
/// precedence climbing and constructs an AST that represents expressions,
/// property accesses, invocations, and subscripts.
///
/// # Responsibilities
/// - Converts tokens into structured expression nodes.
/// - Applies the precedence and associativity fixed by the operation table.
/// - Disambiguates indexing from multi-dimensional slicing.
pub mod parser;
/// The tokenizer module scans template fragments into tokens.
///
/// The tokenizer reads raw fragment text, expands unicode escapes, and
/// produces a stream of tokens; host values interpolated between fragments
/// are spliced in as embedded tokens. This is the first stage of the
/// pipeline.
///
/// # Responsibilities
/// - Converts fragment text into tokens by longest-match scanning.
/// - Decodes numeric, big-integer and string constants.
/// - Reports unknown code points with rendered source excerpts.
pub mod tokenizer;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the host value enum and its supporting types:
/// hashable set elements, callable functions, and the class machinery used
/// by overload resolution.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements truthiness, equality, property access and display.
/// - Models runtime classes, user class declarations, and instances.
pub mod value;
