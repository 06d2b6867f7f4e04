//! Codebase analysis: regex pattern extraction, aggregation, and
//! naming-style classification.

mod classify;
mod languages;
mod record;

pub use classify::{classify, NamingStyle};
pub use record::{
    Analysis, NamingReport, PatternReport, QualityMetrics, RankedImports, Report,
    MAX_NAMES_PER_BUCKET, MAX_RANKED_IMPORTS,
};
