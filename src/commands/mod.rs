pub mod analyze;

pub use analyze::{handle_analyze, AnalyzeConfig};
