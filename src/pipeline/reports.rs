//! Grouped-count reports over the enriched table.
//!
//! Each report is an independent pure function over one derived column.
//! Top-N rankings sort by descending count with ties kept in first-encounter
//! order (stable sort over entries collected in row order).

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use crate::core::{
    CountryCount, DailyCount, ExperienceCount, ExperienceLevel, SentimentCounts, SkillCount,
};

/// Top `n` countries by posting count, descending
pub fn top_countries(countries: &[String], n: usize) -> Vec<CountryCount> {
    let mut order: Vec<CountryCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for country in countries {
        match index.get(country.as_str()) {
            Some(&i) => order[i].count += 1,
            None => {
                index.insert(country.as_str(), order.len());
                order.push(CountryCount {
                    country: country.clone(),
                    count: 1,
                });
            }
        }
    }

    order.sort_by(|a, b| b.count.cmp(&a.count));
    order.truncate(n);
    order
}

/// Posting count per experience bucket; all four buckets are always present,
/// zeros included.
pub fn experience_distribution(levels: &[ExperienceLevel]) -> Vec<ExperienceCount> {
    ExperienceLevel::ALL
        .iter()
        .map(|&level| ExperienceCount {
            level,
            count: levels.iter().filter(|&&l| l == level).count(),
        })
        .collect()
}

/// Time-ordered daily posting counts; rows without a parsed date are skipped
pub fn daily_counts(dates: &[Option<NaiveDate>]) -> Vec<DailyCount> {
    let mut by_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for date in dates.iter().flatten() {
        *by_day.entry(*date).or_default() += 1;
    }
    by_day
        .into_iter()
        .map(|(date, count)| DailyCount { date, count })
        .collect()
}

/// Explode the comma-joined skills cells and rank the top `n` terms
pub fn top_skills(skills_cells: &[String], n: usize) -> Vec<SkillCount> {
    let mut order: Vec<SkillCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for cell in skills_cells {
        for term in cell.split(", ").filter(|t| !t.is_empty()) {
            match index.get(term) {
                Some(&i) => order[i].count += 1,
                None => {
                    index.insert(term.to_string(), order.len());
                    order.push(SkillCount {
                        skill: term.to_string(),
                        count: 1,
                    });
                }
            }
        }
    }

    order.sort_by(|a, b| b.count.cmp(&a.count));
    order.truncate(n);
    order
}

/// Element-wise sum of per-row sentiment counts
pub fn sentiment_totals(rows: &[SentimentCounts]) -> SentimentCounts {
    let mut totals = SentimentCounts::new();
    for row in rows {
        totals.merge(row);
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Emotion;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn top_countries_sorted_descending_with_stable_ties() {
        let countries = strings(&["USA", "India", "USA", "Norway", "India", "USA", "Norway"]);
        let top = top_countries(&countries, 10);

        assert_eq!(top[0].country, "USA");
        assert_eq!(top[0].count, 3);
        // India and Norway tie at 2; India was seen first
        assert_eq!(top[1].country, "India");
        assert_eq!(top[2].country, "Norway");
    }

    #[test]
    fn top_countries_caps_at_n() {
        let countries: Vec<String> = (0..25).map(|i| format!("C{i}")).collect();
        assert_eq!(top_countries(&countries, 10).len(), 10);
    }

    #[test]
    fn experience_distribution_reports_all_buckets() {
        let levels = vec![ExperienceLevel::Senior, ExperienceLevel::Senior];
        let dist = experience_distribution(&levels);

        assert_eq!(dist.len(), 4);
        assert_eq!(dist[0].level, ExperienceLevel::Entry);
        assert_eq!(dist[0].count, 0);
        assert_eq!(dist[2].level, ExperienceLevel::Senior);
        assert_eq!(dist[2].count, 2);
    }

    #[test]
    fn daily_counts_are_time_ordered() {
        let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day);
        let dates = vec![d(2024, 3, 2), None, d(2024, 3, 1), d(2024, 3, 2)];
        let series = daily_counts(&dates);

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].date, d(2024, 3, 1).unwrap());
        assert_eq!(series[0].count, 1);
        assert_eq!(series[1].count, 2);
    }

    #[test]
    fn top_skills_explodes_joined_cells() {
        let cells = strings(&["python, sql", "python", "", "sql, docker", "python"]);
        let top = top_skills(&cells, 10);

        assert_eq!(top[0].skill, "python");
        assert_eq!(top[0].count, 3);
        assert_eq!(top[1].skill, "sql");
        assert_eq!(top[1].count, 2);
        assert_eq!(top[2].skill, "docker");
    }

    #[test]
    fn sentiment_totals_sum_rows() {
        let mut a = SentimentCounts::new();
        a.increment(Emotion::Joy);
        let mut b = SentimentCounts::new();
        b.increment(Emotion::Joy);
        b.increment(Emotion::Fear);

        let totals = sentiment_totals(&[a, b]);
        assert_eq!(totals[Emotion::Joy], 2);
        assert_eq!(totals[Emotion::Fear], 1);
    }
}
