//! Common type definitions used across the codebase

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::ops::{Index, IndexMut};

use crate::core::errors::{Error, Result};

/// In-memory table of string cells with a header row.
///
/// The table is deliberately untyped so that columns jobmap does not know
/// about pass through the pipeline and the exporter byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut [String] {
        &mut self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a row. The cell count must match the header count.
    pub fn push_row(&mut self, row: Vec<String>) -> Result<()> {
        if row.len() != self.headers.len() {
            return Err(Error::Table(format!(
                "row has {} cells, expected {}",
                row.len(),
                self.headers.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    /// Index of a column by name, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Index of a column the pipeline cannot run without.
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| Error::missing_column(name, &self.headers))
    }

    pub fn cell(&self, row: usize, col: usize) -> &str {
        &self.rows[row][col]
    }

    pub fn set_cell(&mut self, row: usize, col: usize, value: String) {
        self.rows[row][col] = value;
    }

    /// All values of one column, in row order.
    pub fn column(&self, col: usize) -> impl Iterator<Item = &str> {
        self.rows.iter().map(move |row| row[col].as_str())
    }

    /// Append a derived column. Values must cover every row.
    pub fn push_column(&mut self, name: impl Into<String>, values: Vec<String>) -> Result<()> {
        if values.len() != self.rows.len() {
            return Err(Error::Table(format!(
                "column has {} values, expected {}",
                values.len(),
                self.rows.len()
            )));
        }
        self.headers.push(name.into());
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.push(value);
        }
        Ok(())
    }

    /// Remove exact-duplicate rows, keeping the first occurrence.
    /// Returns the number of rows removed.
    pub fn dedup_rows(&mut self) -> usize {
        let before = self.rows.len();
        let mut seen = HashSet::new();
        self.rows.retain(|row| seen.insert(row.clone()));
        before - self.rows.len()
    }
}

/// Coarse seniority bucket derived from description text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
    Unspecified,
}

impl ExperienceLevel {
    /// All buckets in reporting order
    pub const ALL: [ExperienceLevel; 4] = [
        ExperienceLevel::Entry,
        ExperienceLevel::Mid,
        ExperienceLevel::Senior,
        ExperienceLevel::Unspecified,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "Entry",
            ExperienceLevel::Mid => "Mid",
            ExperienceLevel::Senior => "Senior",
            ExperienceLevel::Unspecified => "Unspecified",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed taxonomy scored by lexicon matching: eight emotions plus two
/// polarity categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Anger,
    Anticipation,
    Disgust,
    Fear,
    Joy,
    Sadness,
    Surprise,
    Trust,
    Negative,
    Positive,
}

impl Emotion {
    /// All categories in the fixed column/reporting order
    pub const ALL: [Emotion; 10] = [
        Emotion::Anger,
        Emotion::Anticipation,
        Emotion::Disgust,
        Emotion::Fear,
        Emotion::Joy,
        Emotion::Sadness,
        Emotion::Surprise,
        Emotion::Trust,
        Emotion::Negative,
        Emotion::Positive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Anger => "anger",
            Emotion::Anticipation => "anticipation",
            Emotion::Disgust => "disgust",
            Emotion::Fear => "fear",
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
            Emotion::Surprise => "surprise",
            Emotion::Trust => "trust",
            Emotion::Negative => "negative",
            Emotion::Positive => "positive",
        }
    }

    /// Name of the derived table column for this category
    pub fn column_name(&self) -> String {
        format!("sentiment_{}", self.as_str())
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-record (or aggregated) counts, one slot per `Emotion`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentCounts([u32; 10]);

impl SentimentCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, emotion: Emotion) {
        self[emotion] += 1;
    }

    /// Element-wise sum, used when aggregating across rows
    pub fn merge(&mut self, other: &SentimentCounts) {
        for (slot, value) in self.0.iter_mut().zip(other.0.iter()) {
            *slot += value;
        }
    }

    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }
}

impl Index<Emotion> for SentimentCounts {
    type Output = u32;

    fn index(&self, emotion: Emotion) -> &u32 {
        &self.0[emotion as usize]
    }
}

impl IndexMut<Emotion> for SentimentCounts {
    fn index_mut(&mut self, emotion: Emotion) -> &mut u32 {
        &mut self.0[emotion as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_column_rejects_length_mismatch() {
        let mut table = Table::new(vec!["a".to_string()]);
        table.push_row(vec!["1".to_string()]).unwrap();
        let err = table.push_column("b", vec![]).unwrap_err();
        assert!(matches!(err, Error::Table(_)));
    }

    #[test]
    fn dedup_keeps_first_occurrence() {
        let mut table = Table::new(vec!["a".to_string(), "b".to_string()]);
        table
            .push_row(vec!["x".to_string(), "1".to_string()])
            .unwrap();
        table
            .push_row(vec!["y".to_string(), "2".to_string()])
            .unwrap();
        table
            .push_row(vec!["x".to_string(), "1".to_string()])
            .unwrap();

        let removed = table.dedup_rows();

        assert_eq!(removed, 1);
        assert_eq!(table.len(), 2);
        assert_eq!(table.cell(0, 0), "x");
        assert_eq!(table.cell(1, 0), "y");
    }

    #[test]
    fn sentiment_counts_index_by_emotion() {
        let mut counts = SentimentCounts::new();
        counts.increment(Emotion::Joy);
        counts.increment(Emotion::Joy);
        counts.increment(Emotion::Negative);

        assert_eq!(counts[Emotion::Joy], 2);
        assert_eq!(counts[Emotion::Negative], 1);
        assert_eq!(counts[Emotion::Anger], 0);
        assert_eq!(counts.total(), 3);
    }
}
