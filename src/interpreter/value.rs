/// Runtime value representation.
///
/// Defines the `Value` enum produced by the evaluator, its type tags, and the
/// interned `TRUE`, `FALSE` and `NULL` constants.
pub mod core;
