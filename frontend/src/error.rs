use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures of the browser bindings the page relies on.
#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window object")]
    NoWindow,
    #[error("failed to {action} '{event}' listener: {reason}")]
    Listener {
        action: &'static str,
        event: &'static str,
        reason: String,
    },
}

impl DomError {
    pub fn listener(action: &'static str, event: &'static str, err: JsValue) -> Self {
        DomError::Listener {
            action,
            event,
            reason: format!("{:?}", err),
        }
    }
}
