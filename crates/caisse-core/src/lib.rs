pub mod aggregate;
pub mod clean;
pub mod enrich;
pub mod error;
pub mod normalize;
pub mod outliers;
pub mod pipeline;
pub mod report;
pub mod stats;
pub mod timestamps;

pub use error::{PipelineError, Result};
pub use pipeline::{analyze_bytes, analyze_file, Analysis};
