// src/bin/cli.rs
use job_charts::cli;

fn main() {
    if let Err(e) = color_eyre::install() {
        eprintln!("Error: {e}");
    }
    if let Err(e) = cli::run() {
        let report = color_eyre::eyre::Report::new(e);
        eprintln!("Error: {report:?}");
        std::process::exit(1);
    }
}
