//! impress-isbn CLI
//!
//! Normalize, validate and convert ISBNs given on the command line, or
//! extract them from text on stdin.

use std::io::{self, Read};
use std::process::ExitCode;

use clap::Parser;
use impress_isbn::{extract_isbns, Isbn, IsbnReport};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "impress-isbn")]
#[command(about = "Normalize, validate, and convert ISBN-10/ISBN-13 identifiers", long_about = None)]
struct Args {
    /// ISBNs to check (dashes and spaces allowed)
    #[arg(value_name = "ISBN")]
    isbns: Vec<String>,

    /// Read text from stdin and report every valid ISBN found in it
    #[arg(short, long)]
    extract: bool,

    /// Print one JSON report per line
    #[arg(short, long)]
    json: bool,

    /// Fail with a diagnostic if any argument is not a valid ISBN
    #[arg(short, long)]
    strict: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut isbns: Vec<Isbn> = args.isbns.iter().cloned().map(Isbn::new).collect();

    if args.extract {
        let mut text = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut text) {
            eprintln!("Error: failed to read stdin: {e}");
            return ExitCode::FAILURE;
        }
        isbns.extend(extract_isbns(&text));
    }

    let mut failed = false;
    for isbn in &isbns {
        if args.strict {
            if let Err(e) = Isbn::parse(isbn.raw()) {
                eprintln!("{}: {e}", isbn.raw());
                failed = true;
                continue;
            }
        }
        print_report(&isbn.report(), args.json);
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn print_report(report: &IsbnReport, json: bool) {
    if !json {
        println!("{}", report.summary());
        return;
    }
    match serde_json::to_string(report) {
        Ok(line) => println!("{line}"),
        Err(e) => tracing::error!("failed to serialize report for {}: {e}", report.input),
    }
}
