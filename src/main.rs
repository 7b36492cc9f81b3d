use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use mimeprobe::domain::services::identify_unknown;
use mimeprobe::infrastructure::{persistence, signatures};
use mimeprobe::prefix_scan::PrefixScanner;
use mimeprobe::presentation::cli::{Cli, Report};
use mimeprobe::{BufferedSource, FileType, Identifier, IdentifyOptions, OutputFormat};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(cli.log_level())
        .with_target(false)
        .init();

    let options = cli.options();
    let results = if cli.quick {
        quick_scan(&cli.paths, options.threads)
    } else {
        identify(&cli.paths, &options)?
    };

    let mut stdout = io::stdout().lock();
    let mut failed = false;

    for (index, (path, result)) in cli.paths.iter().zip(results).enumerate() {
        let file_type = match result {
            Ok(file_type) => file_type,
            Err(e) => {
                failed = true;
                eprintln!("Error identifying {}: {e:#}", path.display());
                continue;
            }
        };

        let report = Report::new(path, &file_type);
        match options.format {
            OutputFormat::Json => writeln!(stdout, "{}", report.to_json()?)?,
            OutputFormat::Text => {
                if index > 0 {
                    writeln!(stdout)?;
                }
                write!(stdout, "{}", report.to_text())?;
            }
        }
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn identify(paths: &[PathBuf], options: &IdentifyOptions) -> Result<Vec<Result<FileType>>> {
    let table = match &options.rules {
        Some(path) => Arc::new(
            persistence::load_table(path)
                .with_context(|| format!("Failed to load rule table {}", path.display()))?,
        ),
        None => signatures::builtin_table(),
    };

    let identifier = Identifier::with_options(table, options);
    Ok(identifier
        .identify_paths(paths)
        .into_iter()
        .map(|result| result.map_err(anyhow::Error::from))
        .collect())
}

fn quick_scan(paths: &[PathBuf], workers: usize) -> Vec<Result<FileType>> {
    let scanner = PrefixScanner::builtin().with_workers(workers);
    let reach = scanner.reach() as u64;

    paths
        .iter()
        .map(|path| {
            let mut prefix = Vec::new();
            File::open(path)
                .and_then(|file| file.take(reach).read_to_end(&mut prefix))
                .with_context(|| format!("Failed to read {}", path.display()))?;

            Ok(match scanner.scan(&prefix) {
                Some(signature) => {
                    let extension = if signature.extension.is_empty() {
                        String::new()
                    } else {
                        format!(".{}", signature.extension)
                    };
                    FileType::new(signature.description, signature.mime, extension)
                }
                None => identify_unknown(&mut BufferedSource::new(prefix.as_slice())),
            })
        })
        .collect()
}
