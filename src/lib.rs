// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod pipeline;

// Re-export commonly used types
pub use crate::core::{
    AnalysisResults, CountryCount, DailyCount, Emotion, Error, ExperienceCount, ExperienceLevel,
    Result, SentimentCounts, SkillCount, Table,
};

pub use crate::io::{create_writer, export_csv, load_csv, OutputFormat, OutputWriter};

pub use crate::pipeline::{
    clean, extract_country, extract_skills, score, CleanSummary, ExperienceMatcher,
    LOCATION_SENTINEL,
};
