use std::{fs::read_to_string, path::Path, process::ExitCode, time::Instant};

use clap::Parser;
use langcheck::{
    config::Options,
    errors::errors::Error,
    init_tracing, render_error,
    session::{ErrorMode, Session},
};

/// An error kept for the summary printed in `--record-errors` mode.
struct Recorded {
    content: String,
    error: Error,
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

fn main() -> ExitCode {
    init_tracing();
    let options = Options::parse();

    let mode = if options.record_errors {
        ErrorMode::Record
    } else {
        ErrorMode::Report
    };

    let start = Instant::now();
    let mut recorded = vec![];
    let mut failed = 0;

    for path in &options.files {
        let name = file_name(path);
        let content = match read_to_string(path) {
            Ok(content) => content,
            Err(error) => {
                eprintln!("Error: could not read `{}`: {}", path.display(), error);
                failed += 1;
                match mode {
                    ErrorMode::Report => return ExitCode::FAILURE,
                    ErrorMode::Record => continue,
                }
            }
        };

        let file_start = Instant::now();
        let mut session = Session::new(mode);
        match session.check(&content, &name) {
            Ok(unit) => {
                tracing::info!(file = %name, elapsed = ?file_start.elapsed(), "checked");
                if options.dump_types {
                    println!("{}:", name);
                    for stmt in &unit.statements {
                        println!("  {}", stmt.summary());
                    }
                }
            }
            Err(_) => {
                failed += 1;
                if mode == ErrorMode::Report {
                    return ExitCode::FAILURE;
                }
                recorded.extend(session.take_errors().into_iter().map(|error| Recorded {
                    content: content.clone(),
                    error,
                }));
            }
        }
    }

    for entry in &recorded {
        eprint!("{}", render_error(&entry.error, &entry.content));
    }
    if mode == ErrorMode::Record {
        eprintln!(
            "{} of {} files failed to check",
            failed,
            options.files.len()
        );
    }
    tracing::info!(elapsed = ?start.elapsed(), "total");

    if failed > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
