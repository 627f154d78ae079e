//! Plain-text and JSON session reports for test diagnostics.

use std::fmt;

use serde::Serialize;
use uuid::Uuid;

use crate::helpers::HarnessError;
use crate::workflow::QuoteBuilder;

/// Snapshot of a quote session.
#[derive(Debug, Clone, Serialize)]
pub struct QuoteReport {
    pub batch_id: Uuid,
    pub records: Vec<RecordEntry>,
    pub failures: Vec<FailureEntry>,
    pub history: Vec<(String, String)>,
}

/// One accepted file.
#[derive(Debug, Clone, Serialize)]
pub struct RecordEntry {
    pub index: usize,
    pub file_name: String,
    pub extents: [f64; 3],
    pub volume: f64,
    pub surface_area: f64,
}

/// One rejected file from the last upload.
#[derive(Debug, Clone, Serialize)]
pub struct FailureEntry {
    pub file_name: String,
    pub kind: String,
    pub message: String,
}

impl QuoteReport {
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str("=== Quote Session Report ===\n\n");
        out.push_str(&format!(
            "Batch {} ({} records, {} rejected):\n",
            self.batch_id,
            self.records.len(),
            self.failures.len(),
        ));

        for r in &self.records {
            out.push_str(&format!(
                "  [{}] {}  {:.3} x {:.3} x {:.3}  V={:.3}  A={:.3}\n",
                r.index, r.file_name, r.extents[0], r.extents[1], r.extents[2], r.volume,
                r.surface_area,
            ));
        }

        if !self.failures.is_empty() {
            out.push_str("\nRejected:\n");
            for f in &self.failures {
                out.push_str(&format!("  {} [{}] {}\n", f.file_name, f.kind, f.message));
            }
        }

        if !self.history.is_empty() {
            out.push_str("\nHistory:\n");
            for (req, resp) in &self.history {
                out.push_str(&format!("  {} -> {}\n", req, resp));
            }
        }
        out
    }

    pub fn to_json(&self) -> Result<String, HarnessError> {
        serde_json::to_string_pretty(self).map_err(|e| HarnessError::DispatchError {
            message: format!("report serialization: {}", e),
        })
    }
}

impl fmt::Display for QuoteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl QuoteBuilder {
    /// Build a report of the current session state.
    pub fn report(&self) -> QuoteReport {
        let batch = self.batch();
        QuoteReport {
            batch_id: batch.batch_id,
            records: batch
                .iter()
                .enumerate()
                .map(|(index, r)| RecordEntry {
                    index,
                    file_name: r.file_name.clone(),
                    extents: r.bounding_box.as_array(),
                    volume: r.volume,
                    surface_area: r.surface_area,
                })
                .collect(),
            failures: self
                .failures()
                .iter()
                .map(|f| FailureEntry {
                    file_name: f.file_name.clone(),
                    kind: format!("{:?}", f.kind),
                    message: f.message.clone(),
                })
                .collect(),
            history: self.history().to_vec(),
        }
    }
}
