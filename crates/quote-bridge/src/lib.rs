//! Host-side glue for the mold quote engine.
//!
//! The host (HTTP handler, web worker, test) owns a [`QuoteSession`] and
//! feeds it [`HostToQuote`] messages through [`dispatch`] or, for JSON
//! transports, [`process_json`].

pub mod dispatch;
pub mod messages;
pub mod session_state;

#[cfg(target_arch = "wasm32")]
pub mod wasm_api;

pub use dispatch::{dispatch, process_json};
pub use messages::{ErrorKind, HostToQuote, QuoteToHost, UploadFailure, UploadedFile};
pub use session_state::{BridgeError, QuoteSession, NO_GEOMETRY_MESSAGE};
