pub mod types;

pub use types::{AnalysisReport, Annotation, Severity};
