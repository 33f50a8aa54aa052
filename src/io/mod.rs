pub mod exporter;
pub mod loader;
pub mod output;

pub use exporter::export_csv;
pub use loader::load_csv;
pub use output::{create_writer, OutputFormat, OutputWriter};
