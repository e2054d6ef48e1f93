//! Property checks across the exercise functions.
//!
//! Inputs are enumerated deterministically rather than sampled, so every run
//! covers the same cases.

use katas::core::brackets::is_brackets_balanced;
use katas::core::digits::{digit_sum, digital_root, reverse_integer};
use katas::core::luhn::{is_credit_card_number, is_luhn_valid};
use katas::core::paths::common_directory_path;
use katas::core::tictactoe::{Cell, Mark, Position, evaluate_position};
use katas::test_support::{mirror_brackets, position};

/// All opener-only strings up to `max_len` over the four bracket kinds.
fn opener_strings(max_len: usize) -> Vec<String> {
    let mut all = vec![String::new()];
    let mut frontier = vec![String::new()];
    for _ in 0..max_len {
        let mut next = Vec::new();
        for prefix in &frontier {
            for opener in ['(', '[', '{', '<'] {
                let mut extended = prefix.clone();
                extended.push(opener);
                next.push(extended);
            }
        }
        all.extend(next.iter().cloned());
        frontier = next;
    }
    all
}

#[test]
fn openers_followed_by_mirror_are_balanced() {
    for openers in opener_strings(5) {
        let closed = format!("{openers}{}", mirror_brackets(&openers));
        assert!(is_brackets_balanced(&closed), "{closed}");
    }
}

#[test]
fn openers_alone_are_unbalanced() {
    for openers in opener_strings(4).into_iter().skip(1) {
        assert!(!is_brackets_balanced(&openers), "{openers}");
    }
}

#[test]
fn dropping_the_last_closer_unbalances() {
    for openers in opener_strings(4).into_iter().skip(1) {
        let mut mirrored = mirror_brackets(&openers);
        mirrored.pop();
        let truncated = format!("{openers}{mirrored}");
        assert!(!is_brackets_balanced(&truncated), "{truncated}");
    }
}

#[test]
fn digital_root_is_a_single_digit_fixed_point() {
    for n in (0..20_000).chain([165_536, 999_999_999_999, u64::MAX]) {
        let root = digital_root(n);
        assert!(root <= 9, "{n} -> {root}");
        assert_eq!(root, digital_root(digit_sum(n)), "{n}");
    }
}

#[test]
fn digital_root_matches_mod_nine() {
    for n in 1..5_000u64 {
        let expected = if n % 9 == 0 { 9 } else { n % 9 };
        assert_eq!(digital_root(n), expected, "{n}");
    }
}

#[test]
fn luhn_numeric_and_string_forms_agree() {
    for ccn in (79_927_398_700..79_927_398_800).chain([4_571_234_567_890_111]) {
        assert_eq!(
            is_luhn_valid(&ccn.to_string()),
            Ok(is_credit_card_number(ccn)),
            "{ccn}"
        );
    }
}

#[test]
fn exactly_one_check_digit_is_valid() {
    for payload in [7_992_739_871u64, 401_288_888_888_188, 37_828_224_631_000] {
        let valid = (0..10)
            .filter(|check| is_credit_card_number(payload * 10 + check))
            .count();
        assert_eq!(valid, 1, "{payload}");
    }
}

#[test]
fn reversing_twice_restores_numbers_without_trailing_zeros() {
    for n in (1..10_000u64).filter(|n| n % 10 != 0) {
        let reversed = reverse_integer(n).expect("fits");
        assert_eq!(reverse_integer(reversed), Some(n));
    }
}

#[test]
fn single_path_yields_dirname() {
    for (path, dirname) in [
        ("/web/images/image1.png", "/web/images"),
        ("/etc/hosts", "/etc"),
        ("src/core/mod.rs", "src/core"),
    ] {
        assert_eq!(common_directory_path(&[path]), format!("{dirname}/"));
    }
}

#[test]
fn common_directory_is_a_prefix_of_every_path() {
    let paths = [
        "/usr/local/bin/cargo",
        "/usr/local/bin/rustc",
        "/usr/local/share/doc/index.html",
    ];
    let common = common_directory_path(&paths);
    assert_eq!(common, "/usr/local/");
    assert!(paths.iter().all(|path| path.starts_with(&common)));
}

#[test]
fn every_line_wins_for_either_mark() {
    const LINES: [[(usize, usize); 3]; 8] = [
        [(0, 0), (0, 1), (0, 2)],
        [(1, 0), (1, 1), (1, 2)],
        [(2, 0), (2, 1), (2, 2)],
        [(0, 0), (1, 0), (2, 0)],
        [(0, 1), (1, 1), (2, 1)],
        [(0, 2), (1, 2), (2, 2)],
        [(0, 0), (1, 1), (2, 2)],
        [(2, 0), (1, 1), (0, 2)],
    ];
    for mark in [Mark::X, Mark::O] {
        for line in LINES {
            let mut cells = [[Cell::Empty; 3]; 3];
            for (row, column) in line {
                cells[row][column] = Cell::from(mark);
            }
            assert_eq!(
                evaluate_position(&Position::new(cells)),
                Some(mark),
                "{line:?}"
            );
        }
    }
}

#[test]
fn evaluation_is_deterministic() {
    let board = position("0X0/.X./X0X");
    let first = evaluate_position(&board);
    for _ in 0..10 {
        assert_eq!(evaluate_position(&board), first);
    }
}
