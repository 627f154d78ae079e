use base64::Engine as _;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use quote_types::{CostParameters, CostResult, GeometryBatch, GeometryRecord};

/// One file in an upload, with its bytes base64-encoded (standard alphabet).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedFile {
    pub file_name: String,
    pub data: String,
}

impl UploadedFile {
    /// Wrap raw file bytes for transfer.
    pub fn from_bytes(file_name: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            file_name: file_name.into(),
            data: base64::engine::general_purpose::STANDARD.encode(bytes),
        }
    }
}

/// Messages from the host (HTTP layer, web worker, CLI) to the quote session.
/// Serialized as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HostToQuote {
    /// Replace the current batch with the geometry of these files.
    Upload { files: Vec<UploadedFile> },
    /// Price a record of the current batch.
    Calculate {
        params: CostParameters,
        /// Record to price. Absent means the first record of the batch.
        #[serde(default)]
        record_index: Option<usize>,
    },
    /// Return the current batch without changing it.
    GetBatch,
}

/// Messages from the quote session back to the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum QuoteToHost {
    /// An upload finished. `records` is the new batch; files that failed
    /// are listed in `failures` and do not appear in `records`.
    Uploaded {
        batch_id: Uuid,
        records: Vec<GeometryRecord>,
        failures: Vec<UploadFailure>,
    },

    /// Cost figures for one record.
    Calculated {
        batch_id: Uuid,
        file_name: String,
        result: CostResult,
    },

    /// Snapshot of the current batch.
    Batch { batch: GeometryBatch },

    /// The request could not be served.
    Error {
        kind: ErrorKind,
        message: String,
        file_name: Option<String>,
    },
}

/// A file that was rejected during an upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadFailure {
    pub file_name: String,
    pub kind: ErrorKind,
    pub message: String,
}

/// Machine-readable error category for the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    UnsupportedFormat,
    InvalidGeometry,
    NoGeometryAvailable,
    RecordOutOfRange,
    BadPayload,
    BadMessage,
}
