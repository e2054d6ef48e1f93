//! String exercises: reversal, first unique character, interval notation.

use std::collections::HashMap;

/// Reverse `input` by Unicode scalar value.
pub fn reverse_string(input: &str) -> String {
    input.chars().rev().collect()
}

/// First character that occurs exactly once in `input`.
pub fn first_single_char(input: &str) -> Option<char> {
    let mut counts: HashMap<char, usize> = HashMap::new();
    for ch in input.chars() {
        *counts.entry(ch).or_default() += 1;
    }
    input.chars().find(|ch| counts.get(ch) == Some(&1))
}

/// Format an interval between `a` and `b`, smaller bound first.
///
/// `[`/`]` mark included endpoints and `(`/`)` excluded ones.
pub fn interval_string(a: f64, b: f64, start_included: bool, end_included: bool) -> String {
    let open = if start_included { '[' } else { '(' };
    let close = if end_included { ']' } else { ')' };
    format!("{open}{}, {}{close}", a.min(b), a.max(b))
}
