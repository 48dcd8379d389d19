mod time;
mod types;

pub use types::{AnalysisTime, ModelName, ReportKey};
