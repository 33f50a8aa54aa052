use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored tables and bars on stdout
    Terminal,
    /// Machine-readable report
    Json,
    /// Pipe-table report
    Markdown,
}

#[derive(Parser, Debug)]
#[command(name = "jobmap")]
#[command(about = "Job postings dataset cleaner and descriptive analyzer", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Clean a postings CSV, derive features, report, and export
    Analyze {
        /// Input CSV of job postings
        #[arg(default_value = "job_postings.csv")]
        input: PathBuf,

        /// Where to write the enriched CSV
        #[arg(short, long, default_value = "job_postings_cleaned.csv")]
        output: PathBuf,

        /// Report format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Write the report to a file instead of stdout (json/markdown only)
        #[arg(long = "report-output")]
        report_output: Option<PathBuf>,

        /// Entry count for ranked reports (defaults to configuration)
        #[arg(long = "top", visible_alias = "head")]
        top: Option<usize>,

        /// Process rows sequentially
        #[arg(long = "no-parallel")]
        no_parallel: bool,

        /// Number of worker threads (0 = all cores)
        #[arg(long, default_value = "0")]
        jobs: usize,
    },
}
