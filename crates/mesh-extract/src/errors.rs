/// Errors while decoding an STL byte payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("truncated payload: expected at least {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    #[error("header declares {count} triangles, limit is {limit}")]
    TooManyTriangles { count: u32, limit: u32 },

    #[error("malformed {layout} STL: {reason}")]
    Malformed { layout: &'static str, reason: String },

    #[error("ASCII STL is disabled by the decoder settings")]
    AsciiDisabled,
}

/// Errors from extracting a geometry record out of one uploaded file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    #[error("unsupported format for {file_name}: only STL is supported")]
    UnsupportedFormat { file_name: String },

    #[error("invalid geometry in {file_name}: {reason}")]
    InvalidGeometry { file_name: String, reason: String },
}

impl ExtractError {
    /// The (lower-cased) name of the file that failed.
    pub fn file_name(&self) -> &str {
        match self {
            ExtractError::UnsupportedFormat { file_name }
            | ExtractError::InvalidGeometry { file_name, .. } => file_name,
        }
    }

    pub(crate) fn invalid(file_name: &str, reason: impl Into<String>) -> Self {
        ExtractError::InvalidGeometry {
            file_name: file_name.to_string(),
            reason: reason.into(),
        }
    }
}
