/// Core evaluation logic.
///
/// Walks the syntax tree and maps each supported node to a runtime value.
pub mod core;
