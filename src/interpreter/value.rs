/// Runtime classes, user class declarations, and instances.
///
/// Defines the `Class` identity used as the overload table key, the
/// `ClassDef` builder for user classes with parents and self-declared
/// operators, and the `Instance` value carrying named fields.
pub mod class;

/// The host value enum and its core behavior.
///
/// Defines `Value` with all supported variants, conversions from host
/// types, truthiness, loose and strict equality, host property access, and
/// display formatting.
pub mod core;

/// Callable host functions.
///
/// Defines `NativeFunction`, the named closure wrapper used for bound
/// functions, registered overloads, and class-declared operators.
pub mod function;

/// Set value representation.
///
/// Defines the `SetValue` type used for the elements of a `Value::Set`.
/// Set elements need a hash identity, so reals are wrapped and unhashable
/// values are rejected at conversion time.
pub mod set_value;
