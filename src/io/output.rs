use crate::core::{AnalysisResults, Emotion};
use colored::*;
use comfy_table::presets::UTF8_FULL;
use std::io::Write;

#[derive(Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_results(&mut self, results: &AnalysisResults) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_results(&mut self, results: &AnalysisResults) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(results)?;
        self.writer.write_all(json.as_bytes())?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_results(&mut self, results: &AnalysisResults) -> anyhow::Result<()> {
        self.write_header(results)?;
        self.write_summary(results)?;
        self.write_top_countries(results)?;
        self.write_experience(results)?;
        self.write_top_skills(results)?;
        self.write_sentiment(results)?;
        self.write_daily_counts(results)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, results: &AnalysisResults) -> anyhow::Result<()> {
        writeln!(self.writer, "# Jobmap Analysis Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            results.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer, "Input: {}", results.input_path.display())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, results: &AnalysisResults) -> anyhow::Result<()> {
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| Postings loaded | {} |", results.rows_loaded)?;
        writeln!(
            self.writer,
            "| Duplicates removed | {} |",
            results.duplicates_removed
        )?;
        writeln!(
            self.writer,
            "| Postings analyzed | {} |",
            results.rows_loaded - results.duplicates_removed
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_top_countries(&mut self, results: &AnalysisResults) -> anyhow::Result<()> {
        if results.top_countries.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Top Countries")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Country | Postings |")?;
        writeln!(self.writer, "|---------|----------|")?;
        for entry in &results.top_countries {
            writeln!(self.writer, "| {} | {} |", entry.country, entry.count)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_experience(&mut self, results: &AnalysisResults) -> anyhow::Result<()> {
        writeln!(self.writer, "## Experience Levels")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Level | Postings |")?;
        writeln!(self.writer, "|-------|----------|")?;
        for entry in &results.experience_distribution {
            writeln!(self.writer, "| {} | {} |", entry.level, entry.count)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_top_skills(&mut self, results: &AnalysisResults) -> anyhow::Result<()> {
        if results.top_skills.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Top Skills")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Skill | Mentions |")?;
        writeln!(self.writer, "|-------|----------|")?;
        for entry in &results.top_skills {
            writeln!(self.writer, "| {} | {} |", entry.skill, entry.count)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_sentiment(&mut self, results: &AnalysisResults) -> anyhow::Result<()> {
        writeln!(self.writer, "## Sentiment Totals")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Category | Count |")?;
        writeln!(self.writer, "|----------|-------|")?;
        for emotion in Emotion::ALL {
            writeln!(
                self.writer,
                "| {} | {} |",
                emotion,
                results.sentiment_totals[emotion]
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_daily_counts(&mut self, results: &AnalysisResults) -> anyhow::Result<()> {
        if results.daily_counts.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Daily Postings")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Date | Postings |")?;
        writeln!(self.writer, "|------|----------|")?;
        for entry in &results.daily_counts {
            writeln!(self.writer, "| {} | {} |", entry.date, entry.count)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter;

impl Default for TerminalWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalWriter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputWriter for TerminalWriter {
    fn write_results(&mut self, results: &AnalysisResults) -> anyhow::Result<()> {
        print_header(results);
        print_summary(results);
        print_top_countries(results);
        print_experience(results);
        print_top_skills(results);
        print_sentiment(results);
        print_daily_counts(results);
        Ok(())
    }
}

fn print_header(results: &AnalysisResults) {
    println!("{}", "Jobmap Analysis Report".bold().blue());
    println!("{}", "======================".blue());
    println!("Input: {}", results.input_path.display());
    println!();
}

fn print_summary(results: &AnalysisResults) {
    println!("{}", "Summary:".bold());
    println!("  Postings loaded: {}", results.rows_loaded);
    println!("  Duplicates removed: {}", results.duplicates_removed);
    println!(
        "  Postings analyzed: {}",
        results.rows_loaded - results.duplicates_removed
    );
    println!();
}

fn print_top_countries(results: &AnalysisResults) {
    if results.top_countries.is_empty() {
        return;
    }

    println!(
        "{} (top {}):",
        "Countries by posting count".bold(),
        results.top_countries.len()
    );

    let mut table = comfy_table::Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Country", "Postings"]);
    for entry in &results.top_countries {
        table.add_row(vec![entry.country.clone(), entry.count.to_string()]);
    }
    println!("{table}");
    println!();
}

fn print_experience(results: &AnalysisResults) {
    println!("{}", "Experience levels:".bold());
    let max = results
        .experience_distribution
        .iter()
        .map(|e| e.count)
        .max()
        .unwrap_or(0);
    for entry in &results.experience_distribution {
        println!(
            "  {:<12} {:>6}  {}",
            entry.level.to_string(),
            entry.count,
            bar(entry.count, max).cyan()
        );
    }
    println!();
}

fn print_top_skills(results: &AnalysisResults) {
    if results.top_skills.is_empty() {
        return;
    }

    println!("{} (top {}):", "Skills".bold(), results.top_skills.len());
    let max = results.top_skills.iter().map(|e| e.count).max().unwrap_or(0);
    for entry in &results.top_skills {
        println!(
            "  {:<18} {:>6}  {}",
            entry.skill,
            entry.count,
            bar(entry.count, max).green()
        );
    }
    println!();
}

fn print_sentiment(results: &AnalysisResults) {
    println!("{}", "Sentiment totals:".bold());
    let max = Emotion::ALL
        .iter()
        .map(|e| results.sentiment_totals[*e] as usize)
        .max()
        .unwrap_or(0);
    for emotion in Emotion::ALL {
        let count = results.sentiment_totals[emotion] as usize;
        println!(
            "  {:<14} {:>6}  {}",
            emotion.to_string(),
            count,
            bar(count, max).yellow()
        );
    }
    println!();
}

fn print_daily_counts(results: &AnalysisResults) {
    if results.daily_counts.is_empty() {
        return;
    }

    println!("{}", "Daily postings:".bold());
    let max = results.daily_counts.iter().map(|e| e.count).max().unwrap_or(0);
    for entry in &results.daily_counts {
        println!("  {} {:>6}  {}", entry.date, entry.count, bar(entry.count, max));
    }
    println!();
}

/// Scale a count to a fixed-width character bar; non-zero counts always
/// render at least one tick.
fn bar(count: usize, max: usize) -> String {
    const WIDTH: usize = 30;
    if max == 0 || count == 0 {
        return String::new();
    }
    let ticks = (count * WIDTH).div_ceil(max).max(1);
    "#".repeat(ticks.min(WIDTH))
}

pub fn create_writer(format: OutputFormat) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(std::io::stdout())),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(std::io::stdout())),
        OutputFormat::Terminal => Box::new(TerminalWriter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_scales_to_width() {
        assert_eq!(bar(10, 10).len(), 30);
        assert_eq!(bar(0, 10), "");
        assert!(!bar(1, 1000).is_empty());
    }
}
