/// Integer literal conversion helpers.
///
/// This module turns the text of an integer literal token into an `i64`,
/// detecting the base from the literal's prefix. Conversion never panics:
/// malformed or out-of-range literals produce `None` so that the parser can
/// record an error and carry on.
pub mod num;
