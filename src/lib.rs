// Declare all modules that are part of this library
pub mod config;
pub mod error;
pub mod types {
    pub mod report;
    pub mod text;
}
pub mod parsing;
pub mod analysis;
pub mod pipeline;
pub mod export;

pub use config::Config;
pub use error::{AnalysisError, Result};
pub use pipeline::{run_analysis, Pipeline};
pub use types::report::AnalysisResult;
pub use types::text::Gospel;
