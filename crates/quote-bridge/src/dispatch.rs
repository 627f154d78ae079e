use crate::messages::{HostToQuote, QuoteToHost, UploadFailure};
use crate::session_state::{BridgeError, QuoteSession};

/// Dispatch a host message to the session and return a response.
///
/// Never fails: every error becomes a `QuoteToHost::Error` the host can
/// render for the user.
pub fn dispatch(session: &mut QuoteSession, msg: HostToQuote) -> QuoteToHost {
    match handle_message(session, msg) {
        Ok(response) => response,
        Err(e) => error_response(&e),
    }
}

/// Parse a JSON `HostToQuote`, dispatch it, and serialize the response.
pub fn process_json(session: &mut QuoteSession, json_input: &str) -> String {
    let response = match serde_json::from_str::<HostToQuote>(json_input) {
        Ok(msg) => dispatch(session, msg),
        Err(e) => error_response(&BridgeError::BadMessage {
            reason: e.to_string(),
        }),
    };

    serde_json::to_string(&response).unwrap_or_else(|e| {
        format!(
            r#"{{"type":"Error","kind":"BadMessage","message":"Serialization failed: {}","file_name":null}}"#,
            e
        )
    })
}

fn handle_message(
    session: &mut QuoteSession,
    msg: HostToQuote,
) -> Result<QuoteToHost, BridgeError> {
    match msg {
        HostToQuote::Upload { files } => {
            let failures = session.upload(&files);
            Ok(QuoteToHost::Uploaded {
                batch_id: session.batch.batch_id,
                records: session.batch.records.clone(),
                failures: failures.iter().map(UploadFailure::from).collect(),
            })
        }

        HostToQuote::Calculate {
            params,
            record_index,
        } => {
            let result = session.calculate(&params, record_index)?;
            let file_name = session
                .batch
                .get(record_index.unwrap_or(0))
                .map(|r| r.file_name.clone())
                .unwrap_or_default();
            Ok(QuoteToHost::Calculated {
                batch_id: session.batch.batch_id,
                file_name,
                result,
            })
        }

        HostToQuote::GetBatch => Ok(QuoteToHost::Batch {
            batch: session.batch.clone(),
        }),
    }
}

fn error_response(e: &BridgeError) -> QuoteToHost {
    QuoteToHost::Error {
        kind: e.kind(),
        message: e.user_message(),
        file_name: e.file_name().map(str::to_string),
    }
}
