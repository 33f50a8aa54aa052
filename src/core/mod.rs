pub mod errors;
pub mod types;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use errors::{Error, Result};
pub use types::{Emotion, ExperienceLevel, SentimentCounts, Table};

/// Everything the report writers consume, produced once the pipeline has run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalysisResults {
    pub input_path: PathBuf,
    pub timestamp: DateTime<Utc>,
    pub rows_loaded: usize,
    pub duplicates_removed: usize,
    pub top_countries: Vec<CountryCount>,
    pub experience_distribution: Vec<ExperienceCount>,
    pub top_skills: Vec<SkillCount>,
    pub sentiment_totals: SentimentCounts,
    /// Time-ordered daily posting counts; empty when the input has no
    /// `posted_date` column.
    pub daily_counts: Vec<DailyCount>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryCount {
    pub country: String,
    pub count: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceCount {
    pub level: ExperienceLevel,
    pub count: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCount {
    pub skill: String,
    pub count: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: usize,
}
