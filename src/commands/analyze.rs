use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use rayon::prelude::*;

use crate::cli;
use crate::config;
use crate::core::{AnalysisResults, Emotion, ExperienceLevel, SentimentCounts};
use crate::io::{
    self,
    output::{JsonWriter, MarkdownWriter, OutputFormat, OutputWriter, TerminalWriter},
};
use crate::pipeline::{self, cleaner, reports, ExperienceMatcher};

pub struct AnalyzeConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: cli::OutputFormat,
    pub report_output: Option<PathBuf>,
    pub top: Option<usize>,
    pub parallel: bool,
    pub jobs: usize,
}

/// Everything derived from one posting's free-text columns
struct RowDerivation {
    country: String,
    level: ExperienceLevel,
    skills: String,
    sentiment: SentimentCounts,
}

fn derive_row(
    description: &str,
    location: &str,
    matcher: &ExperienceMatcher,
    vocabulary: &[String],
) -> RowDerivation {
    RowDerivation {
        country: pipeline::extract_country(location),
        level: matcher.classify(description),
        skills: pipeline::extract_skills(description, vocabulary),
        sentiment: pipeline::score(description),
    }
}

/// Run the full pipeline: load, clean, derive, report, export.
pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    if config.parallel && config.jobs > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(config.jobs)
            .build_global()
            .context("configuring worker thread pool")?;
    }

    let vocab = config::get_config();
    let matcher = ExperienceMatcher::from_config(vocab);

    let table = io::load_csv(&config.input)?;
    let rows_loaded = table.len();

    let (mut table, clean_summary) = cleaner::clean(table)?;

    let description_idx = table.require_column("job_description")?;
    let location_idx = table.require_column("location")?;

    // Per-row derivations are pure; rayon's ordered collect keeps output
    // rows aligned with input order.
    let derivations: Vec<RowDerivation> = {
        let inputs: Vec<(&str, &str)> = table
            .rows()
            .iter()
            .map(|row| (row[description_idx].as_str(), row[location_idx].as_str()))
            .collect();

        if config.parallel {
            inputs
                .par_iter()
                .progress_with(derivation_progress(inputs.len()))
                .map(|(desc, loc)| derive_row(desc, loc, &matcher, &vocab.skills))
                .collect()
        } else {
            inputs
                .iter()
                .map(|(desc, loc)| derive_row(desc, loc, &matcher, &vocab.skills))
                .collect()
        }
    };

    let countries: Vec<String> = derivations.iter().map(|d| d.country.clone()).collect();
    let levels: Vec<ExperienceLevel> = derivations.iter().map(|d| d.level).collect();
    let skills: Vec<String> = derivations.iter().map(|d| d.skills.clone()).collect();
    let sentiments: Vec<SentimentCounts> = derivations.iter().map(|d| d.sentiment).collect();

    let dates: Vec<Option<chrono::NaiveDate>> = match table.column_index("posted_date") {
        Some(idx) => table
            .column(idx)
            .map(cleaner::parse_posted_date)
            .collect(),
        None => Vec::new(),
    };

    let top_n = config.top.unwrap_or(vocab.top_n);
    let results = AnalysisResults {
        input_path: config.input.clone(),
        timestamp: Utc::now(),
        rows_loaded,
        duplicates_removed: clean_summary.duplicates_removed,
        top_countries: reports::top_countries(&countries, top_n),
        experience_distribution: reports::experience_distribution(&levels),
        top_skills: reports::top_skills(&skills, top_n),
        sentiment_totals: reports::sentiment_totals(&sentiments),
        daily_counts: reports::daily_counts(&dates),
    };

    table.push_column("country", countries)?;
    table.push_column(
        "experience_level",
        levels.iter().map(|l| l.to_string()).collect(),
    )?;
    table.push_column("skills", skills)?;
    for emotion in Emotion::ALL {
        table.push_column(
            emotion.column_name(),
            sentiments.iter().map(|s| s[emotion].to_string()).collect(),
        )?;
    }

    let mut writer = build_report_writer(&config)?;
    writer.write_results(&results)?;

    io::export_csv(&table, &config.output)?;
    Ok(())
}

fn derivation_progress(rows: usize) -> ProgressBar {
    let bar = ProgressBar::new(rows as u64);
    bar.set_style(
        ProgressStyle::with_template("{msg} [{bar:40}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar.set_message("Scoring postings");
    bar
}

fn build_report_writer(config: &AnalyzeConfig) -> Result<Box<dyn OutputWriter>> {
    match (&config.report_output, config.format) {
        (Some(path), cli::OutputFormat::Json) => {
            let file = File::create(path)
                .with_context(|| format!("creating report file {}", path.display()))?;
            Ok(Box::new(JsonWriter::new(file)))
        }
        (Some(path), cli::OutputFormat::Markdown) => {
            let file = File::create(path)
                .with_context(|| format!("creating report file {}", path.display()))?;
            Ok(Box::new(MarkdownWriter::new(file)))
        }
        (Some(_), cli::OutputFormat::Terminal) => {
            log::warn!("--report-output ignored for terminal format; writing to stdout");
            Ok(Box::new(TerminalWriter::new()))
        }
        (None, format) => Ok(io::create_writer(match format {
            cli::OutputFormat::Terminal => OutputFormat::Terminal,
            cli::OutputFormat::Json => OutputFormat::Json,
            cli::OutputFormat::Markdown => OutputFormat::Markdown,
        })),
    }
}
