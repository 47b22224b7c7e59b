/// Converts the text of an integer literal into an `i64`.
///
/// The base is taken from the literal's prefix:
/// - `0x` / `0X`: hexadecimal
/// - `0o` / `0O`: octal
/// - `0b` / `0B`: binary
/// - a leading `0` followed by more digits: octal
/// - anything else: decimal
///
/// Underscores may separate digits, and may also follow a base prefix
/// (including the leading `0` of an octal literal). They may not lead a
/// decimal literal, end a literal, or appear twice in a row.
///
/// ## Parameters
/// - `literal`: The literal text, without a sign.
///
/// ## Returns
/// - `Some(i64)`: The converted value.
/// - `None`: If the text is not a valid literal in its base, or the value does
///   not fit in an `i64`.
///
/// ## Example
/// ```
/// use maron::util::num::parse_integer_literal;
///
/// assert_eq!(parse_integer_literal("42"), Some(42));
/// assert_eq!(parse_integer_literal("0x1f"), Some(31));
/// assert_eq!(parse_integer_literal("010"), Some(8));
/// assert_eq!(parse_integer_literal("1_000"), Some(1000));
/// assert_eq!(parse_integer_literal("0x_1f"), Some(31));
/// assert_eq!(parse_integer_literal("0_7"), Some(7));
///
/// assert_eq!(parse_integer_literal("09"), None);
/// assert_eq!(parse_integer_literal("99999999999999999999"), None);
/// assert_eq!(parse_integer_literal("1__0"), None);
/// assert_eq!(parse_integer_literal("1_"), None);
/// assert_eq!(parse_integer_literal("_1"), None);
/// ```
#[must_use]
pub fn parse_integer_literal(literal: &str) -> Option<i64> {
    let (digits, radix, prefixed) = split_radix(literal);

    // `from_str_radix` accepts a leading sign, literals never carry one.
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return None;
    }
    if !separators_ok(digits, prefixed) {
        return None;
    }

    if digits.contains('_') {
        let digits: String = digits.chars().filter(|&c| c != '_').collect();
        i64::from_str_radix(&digits, radix).ok()
    } else {
        i64::from_str_radix(digits, radix).ok()
    }
}

/// Splits a literal into its digits and the radix named by its prefix.
///
/// The flag reports whether a prefix was stripped.
fn split_radix(literal: &str) -> (&str, u32, bool) {
    let bytes = literal.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return (literal, 10, false);
    }

    match bytes[1] {
        b'x' | b'X' => (&literal[2..], 16, true),
        b'o' | b'O' => (&literal[2..], 8, true),
        b'b' | b'B' => (&literal[2..], 2, true),
        _ => (&literal[1..], 8, true),
    }
}

/// Checks that every `_` sits between two digits, or right after a prefix.
fn separators_ok(digits: &str, prefixed: bool) -> bool {
    if digits.ends_with('_') || digits.contains("__") {
        return false;
    }

    prefixed || !digits.starts_with('_')
}
