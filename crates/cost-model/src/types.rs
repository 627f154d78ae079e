pub use quote_types::{CostParameters, CostResult, GeometryBatch, GeometryRecord, MoldBlock};

/// Errors from cost estimation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EstimateError {
    #[error("no geometry available: upload an STL file first")]
    NoGeometryAvailable,

    #[error("record index {index} out of range for batch of {len}")]
    RecordOutOfRange { index: usize, len: usize },
}
