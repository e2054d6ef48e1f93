//! Request dispatch: parse composite arguments, run one exercise, wrap the
//! result as an [`Answer`].

use anyhow::{Context, Result};
use clap::Subcommand;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::answer::Answer;
use crate::core::brackets::is_brackets_balanced;
use crate::core::digits::{digital_root, reverse_integer};
use crate::core::geometry::{
    Circle, Point, Rect, is_inside_circle, is_triangle, rectangles_overlap,
};
use crate::core::luhn::is_luhn_valid;
use crate::core::matrix::{Matrix, matrix_product};
use crate::core::numeric::{factorial, fizz_buzz, sum_between};
use crate::core::paths::common_directory_path;
use crate::core::radix::to_nary_string;
use crate::core::text::{first_single_char, interval_string, reverse_string};
use crate::core::tictactoe::{Position, evaluate_position};
use crate::error::KataError;

/// One exercise invocation.
#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Request {
    /// Print Fizz, Buzz, FizzBuzz, or the number itself.
    FizzBuzz { num: u64 },
    /// Factorial of N (fails above 20!).
    Factorial { n: u64 },
    /// Sum of the integers from FROM to TO, inclusive.
    SumBetween {
        #[arg(allow_negative_numbers = true)]
        from: i64,
        #[arg(allow_negative_numbers = true)]
        to: i64,
    },
    /// Can a triangle be built from sides A, B, C?
    Triangle { a: f64, b: f64, c: f64 },
    /// Do two rectangles overlap? Each is JSON: `{"top":0,"left":0,"width":10,"height":10}`.
    Overlap { first: String, second: String },
    /// Is a point strictly inside a circle? `{"center":{"x":0,"y":0},"radius":10}` `{"x":1,"y":1}`.
    InsideCircle { circle: String, point: String },
    /// First character that occurs exactly once.
    FirstSingle { text: String },
    /// Interval notation between A and B, smaller bound first.
    Interval {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
        /// Exclude the lower bound.
        #[arg(long)]
        exclude_start: bool,
        /// Exclude the upper bound.
        #[arg(long)]
        exclude_end: bool,
    },
    /// Reverse a string.
    Reverse { text: String },
    /// Reverse the digits of an integer.
    ReverseInt { num: u64 },
    /// Validate a credit card number with the Luhn checksum.
    Luhn { ccn: String },
    /// Repeatedly sum digits until one digit remains.
    DigitalRoot { num: u64 },
    /// Are the brackets ()[]{}<> balanced?
    Brackets { text: String },
    /// Represent NUM in base RADIX (2-36).
    Radix {
        #[arg(allow_negative_numbers = true)]
        num: i64,
        radix: u32,
    },
    /// Longest common directory of the given paths.
    CommonDir {
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Multiply two matrices given as JSON arrays of rows: `[[1,2],[3,4]]`.
    Matrix { left: String, right: String },
    /// Winner of a tic-tac-toe position, e.g. `X.O/.XO/..X`.
    TicTacToe { position: String },
}

impl Request {
    /// Subcommand name, used to label JSON answers and log events.
    pub fn name(&self) -> &'static str {
        match self {
            Request::FizzBuzz { .. } => "fizz-buzz",
            Request::Factorial { .. } => "factorial",
            Request::SumBetween { .. } => "sum-between",
            Request::Triangle { .. } => "triangle",
            Request::Overlap { .. } => "overlap",
            Request::InsideCircle { .. } => "inside-circle",
            Request::FirstSingle { .. } => "first-single",
            Request::Interval { .. } => "interval",
            Request::Reverse { .. } => "reverse",
            Request::ReverseInt { .. } => "reverse-int",
            Request::Luhn { .. } => "luhn",
            Request::DigitalRoot { .. } => "digital-root",
            Request::Brackets { .. } => "brackets",
            Request::Radix { .. } => "radix",
            Request::CommonDir { .. } => "common-dir",
            Request::Matrix { .. } => "matrix",
            Request::TicTacToe { .. } => "tic-tac-toe",
        }
    }
}

/// Run the exercise named by `request`.
pub fn solve(request: &Request) -> Result<Answer> {
    let kata = request.name();
    debug!(kata, "solving");

    let answer = match request {
        Request::FizzBuzz { num } => Answer::FizzBuzz(fizz_buzz(*num)),
        Request::Factorial { n } => factorial(*n)
            .map(Answer::Unsigned)
            .ok_or(KataError::Overflow {
                operation: "factorial",
            })
            .with_context(|| format!("factorial of {n}"))?,
        Request::SumBetween { from, to } => sum_between(*from, *to)
            .map(Answer::Signed)
            .ok_or(KataError::Overflow {
                operation: "range sum",
            })
            .with_context(|| format!("sum from {from} to {to}"))?,
        Request::Triangle { a, b, c } => Answer::Bool(is_triangle(*a, *b, *c)),
        Request::Overlap { first, second } => {
            let first: Rect = parse_json(first, "first rectangle")?;
            let second: Rect = parse_json(second, "second rectangle")?;
            Answer::Bool(rectangles_overlap(&first, &second))
        }
        Request::InsideCircle { circle, point } => {
            let circle: Circle = parse_json(circle, "circle")?;
            let point: Point = parse_json(point, "point")?;
            Answer::Bool(is_inside_circle(&circle, &point))
        }
        Request::FirstSingle { text } => {
            first_single_char(text).map_or(Answer::Absent, |ch| Answer::Text(ch.to_string()))
        }
        Request::Interval {
            a,
            b,
            exclude_start,
            exclude_end,
        } => Answer::Text(interval_string(*a, *b, !exclude_start, !exclude_end)),
        Request::Reverse { text } => Answer::Text(reverse_string(text)),
        Request::ReverseInt { num } => reverse_integer(*num)
            .map(Answer::Unsigned)
            .ok_or(KataError::Overflow {
                operation: "integer reversal",
            })
            .with_context(|| format!("reverse digits of {num}"))?,
        Request::Luhn { ccn } => {
            Answer::Bool(is_luhn_valid(ccn).with_context(|| format!("card number '{ccn}'"))?)
        }
        Request::DigitalRoot { num } => Answer::Unsigned(digital_root(*num)),
        Request::Brackets { text } => Answer::Bool(is_brackets_balanced(text)),
        Request::Radix { num, radix } => Answer::Text(
            to_nary_string(*num, *radix).with_context(|| format!("convert {num} to base {radix}"))?,
        ),
        Request::CommonDir { paths } => Answer::Directory(common_directory_path(paths)),
        Request::Matrix { left, right } => {
            let left: Matrix = parse_json(left, "left matrix")?;
            let right: Matrix = parse_json(right, "right matrix")?;
            Answer::Matrix(matrix_product(&left, &right).context("multiply matrices")?)
        }
        Request::TicTacToe { position } => {
            let parsed: Position = position
                .parse()
                .with_context(|| format!("parse position '{position}'"))?;
            debug!(position = %parsed, "parsed position");
            Answer::Winner(evaluate_position(&parsed))
        }
    };

    debug!(kata, negative = answer.is_negative(), "solved");
    Ok(answer)
}

fn parse_json<T: DeserializeOwned>(raw: &str, what: &str) -> Result<T> {
    serde_json::from_str(raw).with_context(|| format!("parse {what} json '{raw}'"))
}
