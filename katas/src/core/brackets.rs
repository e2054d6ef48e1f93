//! Multi-kind bracket balance checking.

/// Bracket pairs recognised by [`is_brackets_balanced`], as `(opener, closer)`.
pub const BRACKET_PAIRS: [(char, char); 4] = [('(', ')'), ('[', ']'), ('{', '}'), ('<', '>')];

/// Return true if every bracket in `input` is closed in strictly nested order.
///
/// A closer only matches the most recently opened, still-open bracket of any
/// kind. Characters outside [`BRACKET_PAIRS`] are ignored.
pub fn is_brackets_balanced(input: &str) -> bool {
    let mut expected: Vec<char> = Vec::new();

    for ch in input.chars() {
        if let Some(closer) = closer_for(ch) {
            expected.push(closer);
        } else if is_closer(ch) && expected.pop() != Some(ch) {
            return false;
        }
    }

    expected.is_empty()
}

/// Closer that balances the opener `ch`, or `None` if `ch` is not an opener.
pub(crate) fn closer_for(ch: char) -> Option<char> {
    BRACKET_PAIRS
        .iter()
        .find(|(open, _)| *open == ch)
        .map(|(_, close)| *close)
}

fn is_closer(ch: char) -> bool {
    BRACKET_PAIRS.iter().any(|(_, close)| *close == ch)
}
