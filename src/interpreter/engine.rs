/// The engine type, its binding and overload APIs, and the default-engine
/// singleton.
pub mod core;

/// Default bindings and built-in overloads.
///
/// Installs logical constants, numeric constants and functions, the `Math`
/// namespace, and the container-class overload defaults.
pub mod defaults;

/// The overload table and its resolution walk.
pub mod registry;
