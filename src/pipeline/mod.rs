pub mod cleaner;
pub mod features;
mod lexicon;
pub mod reports;
pub mod sentiment;

pub use cleaner::{clean, CleanSummary, LOCATION_SENTINEL};
pub use features::{extract_country, extract_skills, ExperienceMatcher};
pub use sentiment::score;
