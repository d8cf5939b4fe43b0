//! `localStorage`-backed best-score persistence.
//!
//! Failures here are never fatal: the engine treats an unreadable slot
//! as an absent record and a failed write as a lost-durability event,
//! so the running session keeps working either way.

use globeguesser_game::BestScoreStore;
use thiserror::Error;

use crate::dom;

/// `localStorage` key holding the all-time best score.
const BEST_SCORE_KEY: &str = "globeguesser.best_score";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("localStorage unavailable: {0}")]
    Unavailable(String),
    #[error("localStorage read failed: {0}")]
    ReadFailed(String),
    #[error("localStorage write failed: {0}")]
    WriteFailed(String),
}

/// Best-score slot in the browser's `localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalBestScoreStore;

impl LocalBestScoreStore {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Decode a stored payload. Anything but a bare non-negative integer
/// reads as absent so a fresh record can still be written over it.
fn parse_record(raw: &str) -> Option<u32> {
    serde_json::from_str::<u32>(raw).ok()
}

impl BestScoreStore for LocalBestScoreStore {
    type Error = StorageError;

    fn load(&self) -> Result<Option<u32>, StorageError> {
        let storage = dom::local_storage().map_err(|err| {
            let err = StorageError::Unavailable(dom::js_error_message(&err));
            log::warn!("best score not loaded: {err}");
            err
        })?;
        let raw = storage.get_item(BEST_SCORE_KEY).map_err(|err| {
            let err = StorageError::ReadFailed(dom::js_error_message(&err));
            log::warn!("best score not loaded: {err}");
            err
        })?;
        Ok(raw.as_deref().and_then(parse_record))
    }

    fn save(&self, value: u32) -> Result<(), StorageError> {
        let storage = dom::local_storage().map_err(|err| {
            let err = StorageError::Unavailable(dom::js_error_message(&err));
            log::warn!("best score not persisted: {err}");
            err
        })?;
        storage.set_item(BEST_SCORE_KEY, &value.to_string()).map_err(|err| {
            let err = StorageError::WriteFailed(dom::js_error_message(&err));
            log::warn!("best score not persisted: {err}");
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::parse_record;

    #[test]
    fn valid_integers_parse() {
        assert_eq!(parse_record("0"), Some(0));
        assert_eq!(parse_record("8450"), Some(8450));
        assert_eq!(parse_record("15000"), Some(15_000));
    }

    #[test]
    fn corrupt_payloads_read_as_absent() {
        for raw in ["", "abc", "-5", "12.5", "null", "{\"v\":1}", "1e3"] {
            assert_eq!(parse_record(raw), None, "accepted {raw:?}");
        }
    }
}
