//! CLI arguments using clap

use crate::application::dto::{IdentifyOptions, OutputFormat};
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

/// mimeprobe - File type identification
///
/// Identifies files by name and content using shared-mime-info style rules.
#[derive(Parser, Debug)]
#[command(name = "mimeprobe")]
#[command(version)]
#[command(about = "Identify file types from content and name", long_about = None)]
pub struct Cli {
    /// Files to identify
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print one JSON object per file
    #[arg(long)]
    pub json: bool,

    /// Identify by content only
    #[arg(long)]
    pub no_filename: bool,

    /// Load rules from a JSON table instead of the built-in set
    #[arg(long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Use the fixed-offset prefix scanner instead of the rule engine
    #[arg(long, conflicts_with = "rules")]
    pub quick: bool,

    /// Worker threads (0 = one per core)
    #[arg(short = 'j', long, default_value_t = 0)]
    pub threads: usize,
}

impl Cli {
    /// Identification options selected on the command line
    pub fn options(&self) -> IdentifyOptions {
        let mut options = IdentifyOptions::new()
            .with_threads(self.threads)
            .with_format(if self.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            });

        if self.no_filename {
            options = options.content_only();
        }
        if let Some(rules) = &self.rules {
            options = options.with_rules(rules);
        }
        options
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}
