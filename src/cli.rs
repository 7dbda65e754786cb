// src/cli.rs
use std::{env, path::PathBuf};

use ::log::LevelFilter;

use crate::config::options::PipelineOptions;
use crate::core::dates::today_utc;
use crate::error::{PipelineError, Result};
use crate::progress::{LogProgress, Progress};

pub const HELP: &str = include_str!("cli_help.txt");

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Run(PipelineOptions),
    Help,
    Version,
}

pub fn run() -> Result<()> {
    match parse_args(env::args().skip(1))? {
        Command::Help => print!("{HELP}"),
        Command::Version => println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        Command::Run(opts) => {
            crate::logging::init(opts.log_level);
            if opts.list_categories {
                for name in crate::runner::list_categories(&opts)? {
                    println!("{name}");
                }
                return Ok(());
            }
            let mut progress = LogProgress::default();
            let sink: &mut dyn Progress = &mut progress;
            crate::runner::run(&opts, today_utc(), Some(sink))?;
        }
    }
    Ok(())
}

fn usage(msg: String) -> PipelineError {
    PipelineError::Usage(format!("{msg} (see --help)"))
}

fn path_value(flag: &str, v: Option<String>) -> Result<PathBuf> {
    v.map(PathBuf::from).ok_or_else(|| usage(format!("Missing value for {flag}")))
}

pub fn parse_args<I>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = PipelineOptions::default();
    let mut input: Option<PathBuf> = None;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "--charts" => opts.charts = Some(path_value(&a, args.next())?),
            "--gz" => opts.compressed = Some(path_value(&a, args.next())?),
            "--taxonomy" => opts.taxonomy = Some(path_value(&a, args.next())?),
            "--list-categories" => opts.list_categories = true,
            "-v" | "--verbose" => opts.log_level = LevelFilter::Debug,
            "-q" | "--quiet" => opts.log_level = LevelFilter::Warn,
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(usage(format!("Unknown arg: {flag}")));
            }
            _ => {
                if input.is_some() {
                    return Err(usage(format!("Unexpected extra input: {a}")));
                }
                input = Some(PathBuf::from(a.as_str()));
            }
        }
    }

    if let Some(p) = input {
        opts.input = p;
    }
    Ok(Command::Run(opts))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    fn opts(args: &[&str]) -> PipelineOptions {
        match parse(args).unwrap() {
            Command::Run(o) => o,
            other => panic!("expected run, got {other:?}"),
        }
    }

    #[test]
    fn positional_input_and_overrides() {
        let o = opts(&["data/jobs.json", "--charts", "out/c.json", "--gz", "out/j.gz", "-v"]);
        assert_eq!(o.input, PathBuf::from("data/jobs.json"));
        assert_eq!(o.charts, Some(PathBuf::from("out/c.json")));
        assert_eq!(o.compressed, Some(PathBuf::from("out/j.gz")));
        assert_eq!(o.log_level, LevelFilter::Debug);
    }

    #[test]
    fn defaults_without_args() {
        let o = opts(&[]);
        assert_eq!(o, PipelineOptions::default());
        assert!(o.input.ends_with("jobs.json"));
    }

    #[test]
    fn flags_and_errors() {
        assert!(opts(&["--list-categories", "-q"]).list_categories);
        assert_eq!(parse(&["-h"]).unwrap(), Command::Help);
        assert_eq!(parse(&["--version"]).unwrap(), Command::Version);
        assert!(matches!(parse(&["--charts"]), Err(PipelineError::Usage(_))));
        assert!(matches!(parse(&["--bogus"]), Err(PipelineError::Usage(_))));
        assert!(matches!(parse(&["a.json", "b.json"]), Err(PipelineError::Usage(_))));
    }
}
