//! WASM entry points for the browser host.
//!
//! This module is only compiled for the `wasm32` target. It provides the
//! `#[wasm_bindgen]` functions that JavaScript calls.

use wasm_bindgen::prelude::*;

use crate::dispatch;
use crate::session_state::QuoteSession;

// One session per module instance; single-threaded in the browser.
thread_local! {
    static SESSION: std::cell::RefCell<Option<QuoteSession>> = const { std::cell::RefCell::new(None) };
}

/// Install the panic hook and start a fresh session.
///
/// Calling it again discards the current batch.
#[wasm_bindgen]
pub fn init() {
    console_error_panic_hook::set_once();

    SESSION.with(|cell| {
        *cell.borrow_mut() = Some(QuoteSession::new());
    });
}

/// Process a JSON `HostToQuote` message and return a JSON `QuoteToHost`.
///
/// Starts a session on first use if `init` was never called.
#[wasm_bindgen]
pub fn process_message(json_input: &str) -> String {
    SESSION.with(|cell| {
        let mut slot = cell.borrow_mut();
        let session = slot.get_or_insert_with(QuoteSession::new);
        dispatch::process_json(session, json_input)
    })
}

/// Current batch as JSON, or an empty string before the first message.
#[wasm_bindgen]
pub fn get_batch_json() -> String {
    SESSION.with(|cell| {
        cell.borrow()
            .as_ref()
            .and_then(|s| serde_json::to_string(&s.batch).ok())
            .unwrap_or_default()
    })
}
