//! Conditions-and-loops exercises on the command line.
//!
//! Each exercise is a subcommand; the answer goes to stdout and the exit code
//! reports its polarity (see [`katas::exit_codes`]).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use katas::answer::{OutputFormat, render};
use katas::exit_codes;
use katas::io::config::{CONFIG_FILE, load_config};
use katas::io::init::{InitOptions, init_config};
use katas::logging;
use katas::solve::{Request, solve};
use tracing::debug;

#[derive(Parser)]
#[command(name = "katas", version, about = "Conditions-and-loops exercises")]
struct Cli {
    /// Config file to read.
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Answer format; overrides `output` from the config file.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a default `katas.toml` into the current directory.
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
    #[command(flatten)]
    Kata(Request),
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version are reported through the same path.
            let code = if err.use_stderr() {
                exit_codes::INVALID
            } else {
                exit_codes::OK
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Command::Init { force } => {
            logging::init("warn");
            cmd_init(force)
        }
        Command::Kata(request) => cmd_kata(&cli.config, cli.format, &request),
    }
}

fn cmd_init(force: bool) -> Result<i32> {
    let root = std::env::current_dir().context("resolve current directory")?;
    let path = init_config(&root, &InitOptions { force })?;
    println!("{}", path.display());
    Ok(exit_codes::OK)
}

fn cmd_kata(config_path: &Path, format: Option<OutputFormat>, request: &Request) -> Result<i32> {
    let cfg = load_config(config_path)
        .with_context(|| format!("load config {}", config_path.display()))?;
    logging::init(&cfg.log_filter);
    debug!(
        path = %config_path.display(),
        found = config_path.exists(),
        "config loaded"
    );
    let format = format.unwrap_or(cfg.output);
    debug!(kata = request.name(), ?format, "running kata");

    let answer = solve(request)?;
    println!("{}", render(request.name(), &answer, format)?);
    Ok(answer.exit_code())
}
