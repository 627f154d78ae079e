//! QuoteBuilder: fluent API for scripting upload/calculate sessions in tests.
//!
//! Wraps `quote_bridge::dispatch()` so tests exercise the real message path.
//! Files are written to STL bytes by the harness writers, then base64-encoded
//! exactly as a host would send them.

use mesh_extract::{ExtractConfig, Triangle};
use quote_bridge::messages::*;
use quote_bridge::QuoteSession;
use quote_types::{CostParameters, CostResult, GeometryBatch, GeometryRecord};
use uuid::Uuid;

use crate::helpers::*;
use crate::stl;

/// Files queued for the next upload.
#[derive(Default)]
struct PendingUpload {
    files: Vec<UploadedFile>,
}

/// A fluent builder for driving a quote session in tests.
pub struct QuoteBuilder {
    pub session: QuoteSession,
    pending: PendingUpload,
    last_failures: Vec<UploadFailure>,
    history: Vec<(String, String)>,
}

impl QuoteBuilder {
    /// Session with default decoder settings.
    pub fn new() -> Self {
        Self::with_config(ExtractConfig::default())
    }

    pub fn with_config(config: ExtractConfig) -> Self {
        Self {
            session: QuoteSession::with_config(config),
            pending: PendingUpload::default(),
            last_failures: Vec::new(),
            history: Vec::new(),
        }
    }

    // ── Staging files ───────────────────────────────────────────────────

    /// Stage raw bytes under `file_name`.
    pub fn add_raw(&mut self, file_name: &str, bytes: &[u8]) -> &mut Self {
        self.pending
            .files
            .push(UploadedFile::from_bytes(file_name, bytes));
        self
    }

    /// Stage triangles as a binary STL.
    pub fn add_triangles(&mut self, file_name: &str, triangles: &[Triangle]) -> &mut Self {
        let bytes = stl::write_binary_stl(triangles, file_name);
        self.add_raw(file_name, &bytes)
    }

    /// Stage triangles as an ASCII STL.
    pub fn add_ascii(&mut self, file_name: &str, triangles: &[Triangle]) -> &mut Self {
        let text = stl::write_ascii_stl(triangles, file_name);
        self.add_raw(file_name, text.as_bytes())
    }

    /// Stage a closed box spanning `[0, size]` on each axis.
    pub fn add_box(&mut self, file_name: &str, size: [f32; 3]) -> &mut Self {
        self.add_triangles(file_name, &box_triangles([0.0; 3], size))
    }

    /// Stage a payload whose base64 text is not decodable.
    pub fn add_garbled(&mut self, file_name: &str) -> &mut Self {
        self.pending.files.push(UploadedFile {
            file_name: file_name.to_string(),
            data: "###not base64###".to_string(),
        });
        self
    }

    // ── Messages ────────────────────────────────────────────────────────

    /// Send the staged files as one upload. Returns the new batch id.
    ///
    /// Per-file rejections do not fail the call; read them from
    /// [`QuoteBuilder::failures`].
    pub fn upload(&mut self) -> Result<Uuid, HarnessError> {
        let files = std::mem::take(&mut self.pending).files;
        let response = quote_bridge::dispatch(&mut self.session, HostToQuote::Upload { files });

        match response {
            QuoteToHost::Uploaded {
                batch_id, failures, ..
            } => {
                let outcome = if failures.is_empty() {
                    "Uploaded".to_string()
                } else {
                    format!("Uploaded({} rejected)", failures.len())
                };
                self.history.push(("Upload".into(), outcome));
                self.last_failures = failures;
                Ok(batch_id)
            }
            other => Err(self.unexpected("Upload", other)),
        }
    }

    /// Price the first record of the batch.
    pub fn calculate(&mut self, params: CostParameters) -> Result<CostResult, HarnessError> {
        self.calculate_record(params, None)
    }

    /// Price the record at `index`.
    pub fn calculate_at(
        &mut self,
        params: CostParameters,
        index: usize,
    ) -> Result<CostResult, HarnessError> {
        self.calculate_record(params, Some(index))
    }

    /// Send a calculate request and return the raw response.
    pub fn calculate_raw(
        &mut self,
        params: CostParameters,
        record_index: Option<usize>,
    ) -> QuoteToHost {
        let response = quote_bridge::dispatch(
            &mut self.session,
            HostToQuote::Calculate {
                params,
                record_index,
            },
        );
        self.history
            .push(("Calculate".into(), response_tag(&response).into()));
        response
    }

    fn calculate_record(
        &mut self,
        params: CostParameters,
        record_index: Option<usize>,
    ) -> Result<CostResult, HarnessError> {
        match self.calculate_raw(params, record_index) {
            QuoteToHost::Calculated { result, .. } => Ok(result),
            QuoteToHost::Error { message, .. } => Err(HarnessError::DispatchError { message }),
            other => Err(self.unexpected("Calculate", other)),
        }
    }

    /// Fetch the batch through the message path.
    pub fn fetch_batch(&mut self) -> Result<GeometryBatch, HarnessError> {
        match quote_bridge::dispatch(&mut self.session, HostToQuote::GetBatch) {
            QuoteToHost::Batch { batch } => {
                self.history.push(("GetBatch".into(), "Batch".into()));
                Ok(batch)
            }
            other => Err(self.unexpected("GetBatch", other)),
        }
    }

    // ── Queries ─────────────────────────────────────────────────────────

    /// The session's current batch.
    pub fn batch(&self) -> &GeometryBatch {
        &self.session.batch
    }

    /// Record by (lower-cased) file name.
    pub fn record(&self, name: &str) -> Result<&GeometryRecord, HarnessError> {
        let key = name.to_lowercase();
        self.session
            .batch
            .iter()
            .find(|r| r.file_name == key)
            .ok_or_else(|| HarnessError::FileNotFound {
                name: name.to_string(),
            })
    }

    /// Rejections from the last upload.
    pub fn failures(&self) -> &[UploadFailure] {
        &self.last_failures
    }

    /// Get the dispatch history log: (request, response) tags.
    pub fn history(&self) -> &[(String, String)] {
        &self.history
    }

    // ── Inline assertions ───────────────────────────────────────────────

    pub fn assert_record_count(&self, expected: usize) -> Result<&Self, HarnessError> {
        let actual = self.session.batch.len();
        if actual == expected {
            Ok(self)
        } else {
            Err(HarnessError::AssertionFailed {
                detail: format!(
                    "expected {} records, got {} ({:?})",
                    expected,
                    actual,
                    self.session
                        .batch
                        .iter()
                        .map(|r| r.file_name.as_str())
                        .collect::<Vec<_>>(),
                ),
            })
        }
    }

    /// Assert the last upload rejected `name` with `kind`.
    pub fn assert_rejected(&self, name: &str, kind: ErrorKind) -> Result<&Self, HarnessError> {
        let key = name.to_lowercase();
        match self.last_failures.iter().find(|f| f.file_name == key) {
            Some(f) if f.kind == kind => Ok(self),
            Some(f) => Err(HarnessError::AssertionFailed {
                detail: format!("{} rejected as {:?}, expected {:?}", name, f.kind, kind),
            }),
            None => Err(HarnessError::AssertionFailed {
                detail: format!("{} was not rejected (failures: {:?})", name, self.last_failures),
            }),
        }
    }

    fn unexpected(&self, request: &str, response: QuoteToHost) -> HarnessError {
        let detail = match response {
            QuoteToHost::Error { kind, message, .. } => format!("{:?}: {}", kind, message),
            other => response_tag(&other).to_string(),
        };
        HarnessError::UnexpectedResponse {
            request: request.to_string(),
            detail,
        }
    }
}

impl Default for QuoteBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn response_tag(response: &QuoteToHost) -> &'static str {
    match response {
        QuoteToHost::Uploaded { .. } => "Uploaded",
        QuoteToHost::Calculated { .. } => "Calculated",
        QuoteToHost::Batch { .. } => "Batch",
        QuoteToHost::Error { .. } => "Error",
    }
}
