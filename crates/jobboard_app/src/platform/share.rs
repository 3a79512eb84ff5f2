use std::io;
use std::sync::Arc;

use jobboard_client::{KeyValueStore, StoreError};
use jobboard_core::SharePayload;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShareError {
    #[error("sharing is not supported on this platform")]
    Unsupported,
}

/// Platform share sheet.
pub trait ShareTarget {
    fn share(&self, payload: &SharePayload) -> Result<(), ShareError>;
}

/// Terminals have no share sheet; every share falls back to the clipboard.
pub struct NoShareTarget;

impl ShareTarget for NoShareTarget {
    fn share(&self, _payload: &SharePayload) -> Result<(), ShareError> {
        Err(ShareError::Unsupported)
    }
}

pub trait Clipboard {
    fn copy(&self, text: &str) -> Result<(), StoreError>;
}

/// Clipboard stand-in for headless terminals: the copied text is kept as a
/// JSON string under [`StoreClipboard::KEY`] in the local store.
pub struct StoreClipboard {
    store: Arc<dyn KeyValueStore>,
}

impl StoreClipboard {
    pub const KEY: &'static str = "clipboard";

    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

impl Clipboard for StoreClipboard {
    fn copy(&self, text: &str) -> Result<(), StoreError> {
        let encoded = serde_json::to_string(text).map_err(io::Error::from)?;
        self.store.set(Self::KEY, &encoded)
    }
}
