use anyhow::Result;
use clap::Parser;
use jobmap::cli::{Cli, Commands};
use jobmap::commands::analyze::{handle_analyze, AnalyzeConfig};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze {
            input,
            output,
            format,
            report_output,
            top,
            no_parallel,
            jobs,
        } => handle_analyze(AnalyzeConfig {
            input,
            output,
            format,
            report_output,
            top,
            parallel: !no_parallel,
            jobs,
        }),
    }
}
