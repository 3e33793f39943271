//! CSV sources and sinks around the engine.
//!
//! The engine itself never touches files; these helpers load the taxonomy and
//! company records and write classified records back out.

pub mod reader;
pub mod writer;

pub use self::reader::{read_companies, read_companies_from, read_taxonomy, read_taxonomy_from};
pub use self::writer::{RESULT_HEADERS, write_results, write_results_to};
