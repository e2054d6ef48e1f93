//! Exercise answers and their plain-text / JSON rendering.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::matrix::Matrix;
use crate::core::numeric::FizzBuzz;
use crate::core::tictactoe::Mark;
use crate::exit_codes;

/// How answers are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

/// Value produced by a single exercise.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Answer {
    Bool(bool),
    Signed(i64),
    Unsigned(u64),
    Text(String),
    /// Common directory path; empty when the paths share no directory.
    Directory(String),
    FizzBuzz(FizzBuzz),
    /// Exercise found nothing (e.g. no unique character).
    Absent,
    Winner(Option<Mark>),
    Matrix(Matrix),
}

impl Answer {
    /// True for the designed "negative" outcomes: `false`, an empty common
    /// directory, an absent value, or no winner.
    pub fn is_negative(&self) -> bool {
        match self {
            Answer::Bool(value) => !value,
            Answer::Directory(path) => path.is_empty(),
            Answer::Absent | Answer::Winner(None) => true,
            _ => false,
        }
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_negative() {
            exit_codes::NEGATIVE
        } else {
            exit_codes::OK
        }
    }

    /// Plain-text form. Matrices print one row per line, values separated by
    /// single spaces.
    pub fn to_plain(&self) -> String {
        match self {
            Answer::Bool(value) => value.to_string(),
            Answer::Signed(value) => value.to_string(),
            Answer::Unsigned(value) => value.to_string(),
            Answer::Text(text) | Answer::Directory(text) => text.clone(),
            Answer::FizzBuzz(value) => value.to_string(),
            Answer::Absent | Answer::Winner(None) => "none".to_string(),
            Answer::Winner(Some(mark)) => mark.to_string(),
            Answer::Matrix(rows) => rows
                .iter()
                .map(|row| {
                    row.iter()
                        .map(|value| value.to_string())
                        .collect::<Vec<_>>()
                        .join(" ")
                })
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

#[derive(Serialize)]
struct JsonAnswer<'a> {
    kata: &'a str,
    answer: &'a Answer,
}

/// Render `answer` for stdout, without a trailing newline.
pub fn render(kata: &str, answer: &Answer, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Plain => Ok(answer.to_plain()),
        OutputFormat::Json => serde_json::to_string(&JsonAnswer { kata, answer })
            .with_context(|| format!("serialize {kata} answer")),
    }
}
