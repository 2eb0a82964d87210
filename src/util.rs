/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between integer and
/// floating-point types without risking silent data loss or rounding
/// errors. Use these helpers whenever `i64` and `f64` meet in a way that
/// must preserve exactness.
pub mod num;
