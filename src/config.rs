//! Static vocabulary configuration.
//!
//! The skill vocabulary and experience phrase sets default to the values the
//! classifier was tuned against. A `jobmap.toml` in the working directory (or
//! an ancestor) overrides them; the sentiment lexicon is compiled in and not
//! configurable.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::core::Error;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobmapConfig {
    /// Keyword phrases checked against descriptions, in reporting order
    #[serde(default = "default_skills")]
    pub skills: Vec<String>,

    /// Entry-level phrases, checked first
    #[serde(default = "default_entry_phrases")]
    pub entry_phrases: Vec<String>,

    /// Mid-level phrases, checked second
    #[serde(default = "default_mid_phrases")]
    pub mid_phrases: Vec<String>,

    /// Senior-level phrases, checked last
    #[serde(default = "default_senior_phrases")]
    pub senior_phrases: Vec<String>,

    /// Entry count for the top-countries and top-skills reports
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

impl Default for JobmapConfig {
    fn default() -> Self {
        Self {
            skills: default_skills(),
            entry_phrases: default_entry_phrases(),
            mid_phrases: default_mid_phrases(),
            senior_phrases: default_senior_phrases(),
            top_n: default_top_n(),
        }
    }
}

fn default_skills() -> Vec<String> {
    [
        "python",
        "java",
        "sql",
        "aws",
        "excel",
        "machine learning",
        "docker",
        "kubernetes",
        "linux",
        "git",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_entry_phrases() -> Vec<String> {
    ["0-1 year", "entry level", "fresher"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_mid_phrases() -> Vec<String> {
    ["2-5 years", "mid level"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_senior_phrases() -> Vec<String> {
    ["6+ years", "senior"].iter().map(|s| s.to_string()).collect()
}

fn default_top_n() -> usize {
    10
}

static CONFIG: OnceLock<JobmapConfig> = OnceLock::new();

const CONFIG_FILE: &str = "jobmap.toml";
const MAX_TRAVERSAL_DEPTH: usize = 10;

fn parse_config(contents: &str) -> Result<JobmapConfig, Error> {
    toml::from_str::<JobmapConfig>(contents)
        .map_err(|e| Error::Configuration(format!("failed to parse {}: {}", CONFIG_FILE, e)))
}

fn try_load_config_from_path(config_path: &Path) -> Option<JobmapConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("Failed to read {}: {}", config_path.display(), e);
            }
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            eprintln!("Warning: {}. Using defaults.", e);
            None
        }
    }
}

fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Load configuration from `jobmap.toml` in the directory hierarchy,
/// falling back to the built-in defaults.
pub fn load_config() -> JobmapConfig {
    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!("Failed to get current directory: {}. Using default config.", e);
            return JobmapConfig::default();
        }
    };

    directory_ancestors(current, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_default()
}

/// Get the cached configuration
pub fn get_config() -> &'static JobmapConfig {
    CONFIG.get_or_init(load_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_spec_vocabulary() {
        let config = JobmapConfig::default();
        assert_eq!(config.skills.len(), 10);
        assert_eq!(config.skills[0], "python");
        assert_eq!(config.skills[9], "git");
        assert_eq!(config.top_n, 10);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config = parse_config("top_n = 5\n").unwrap();
        assert_eq!(config.top_n, 5);
        assert_eq!(config.entry_phrases, vec!["0-1 year", "entry level", "fresher"]);
    }

    #[test]
    fn bad_toml_is_a_configuration_error() {
        let err = parse_config("skills = 3\n").unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
        assert!(err.to_string().contains("jobmap.toml"));
    }
}
