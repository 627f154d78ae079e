use base64::Engine as _;
use tracing::{info, warn};

use cost_model::EstimateError;
use mesh_extract::{ExtractConfig, ExtractError};
use quote_types::{CostParameters, CostResult, GeometryBatch};

use crate::messages::{ErrorKind, UploadFailure, UploadedFile};

/// Message shown to users who calculate before uploading.
pub const NO_GEOMETRY_MESSAGE: &str = "No STL uploaded yet";

/// Per-session state owned by the host.
///
/// Holds the batch from the most recent upload. Uploading replaces the batch;
/// calculating only reads it. Not shared: a concurrent host keeps one session
/// per user or serializes access itself.
pub struct QuoteSession {
    /// Geometry from the most recent upload.
    pub batch: GeometryBatch,
    /// Decoder settings applied to every upload.
    pub config: ExtractConfig,
}

impl QuoteSession {
    /// Create a session with an empty batch and default decoder settings.
    pub fn new() -> Self {
        Self::with_config(ExtractConfig::default())
    }

    pub fn with_config(config: ExtractConfig) -> Self {
        Self {
            batch: GeometryBatch::new(),
            config,
        }
    }

    /// Replace the batch with the geometry of `files`.
    ///
    /// The old batch is dropped before the first file is looked at. Each file
    /// is extracted independently; failures are returned and the remaining
    /// files are still processed.
    pub fn upload(&mut self, files: &[UploadedFile]) -> Vec<BridgeError> {
        self.batch = GeometryBatch::new();
        let mut failures = Vec::new();

        for file in files {
            match self.upload_one(file) {
                Ok(()) => {}
                Err(e) => {
                    warn!(file_name = %file.file_name, error = %e, "upload rejected");
                    failures.push(e);
                }
            }
        }

        info!(
            batch_id = %self.batch.batch_id,
            files = files.len(),
            accepted = self.batch.len(),
            rejected = failures.len(),
            "upload processed"
        );
        failures
    }

    fn upload_one(&mut self, file: &UploadedFile) -> Result<(), BridgeError> {
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(&file.data)
            .map_err(|e| BridgeError::BadPayload {
                file_name: file.file_name.to_lowercase(),
                reason: e.to_string(),
            })?;
        let record = mesh_extract::extract_with_config(&bytes, &file.file_name, &self.config)?;
        self.batch.push(record);
        Ok(())
    }

    /// Price a record of the current batch (the first one when `index` is `None`).
    pub fn calculate(
        &self,
        params: &CostParameters,
        index: Option<usize>,
    ) -> Result<CostResult, BridgeError> {
        let result = match index {
            Some(i) => cost_model::estimate_at(&self.batch, i, params)?,
            None => cost_model::estimate_batch(&self.batch, params)?,
        };
        Ok(result)
    }
}

impl Default for QuoteSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors from the bridge layer.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BridgeError {
    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Estimate(#[from] EstimateError),

    #[error("could not decode upload {file_name}: {reason}")]
    BadPayload { file_name: String, reason: String },

    #[error("malformed message: {reason}")]
    BadMessage { reason: String },
}

impl BridgeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BridgeError::Extract(ExtractError::UnsupportedFormat { .. }) => {
                ErrorKind::UnsupportedFormat
            }
            BridgeError::Extract(ExtractError::InvalidGeometry { .. }) => ErrorKind::InvalidGeometry,
            BridgeError::Estimate(EstimateError::NoGeometryAvailable) => {
                ErrorKind::NoGeometryAvailable
            }
            BridgeError::Estimate(EstimateError::RecordOutOfRange { .. }) => {
                ErrorKind::RecordOutOfRange
            }
            BridgeError::BadPayload { .. } => ErrorKind::BadPayload,
            BridgeError::BadMessage { .. } => ErrorKind::BadMessage,
        }
    }

    /// The offending file, for per-file errors.
    pub fn file_name(&self) -> Option<&str> {
        match self {
            BridgeError::Extract(e) => Some(e.file_name()),
            BridgeError::BadPayload { file_name, .. } => Some(file_name),
            BridgeError::Estimate(_) | BridgeError::BadMessage { .. } => None,
        }
    }

    /// Text for the host to show the user.
    pub fn user_message(&self) -> String {
        match self {
            BridgeError::Estimate(EstimateError::NoGeometryAvailable) => {
                NO_GEOMETRY_MESSAGE.to_string()
            }
            other => other.to_string(),
        }
    }
}

impl From<&BridgeError> for UploadFailure {
    fn from(e: &BridgeError) -> Self {
        UploadFailure {
            file_name: e.file_name().unwrap_or_default().to_string(),
            kind: e.kind(),
            message: e.user_message(),
        }
    }
}
