//! Pipeline configuration.

/// Options recognised by the analytics pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Number of leading records left out of the rollup's average mileage.
    /// The first refills have no usable prior odometer baseline.
    pub skip_first: usize,
}

impl AnalysisConfig {
    pub const DEFAULT_SKIP_FIRST: usize = 2;

    pub fn new(skip_first: usize) -> Self {
        Self { skip_first }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SKIP_FIRST)
    }
}
