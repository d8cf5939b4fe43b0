//! Best-score persistence boundary.

use std::cell::Cell;
use std::convert::Infallible;
use std::rc::Rc;

/// Single-slot persistence for the all-time best score.
///
/// Implementations overwrite unconditionally on `save`; the
/// only-if-greater policy lives in the session's finish transition.
/// Platform-specific implementations should provide this.
pub trait BestScoreStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read the persisted record, `None` when nothing valid is stored.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage cannot be read; callers
    /// treat that the same as an absent record.
    fn load(&self) -> Result<Option<u32>, Self::Error>;

    /// Overwrite the persisted record.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage cannot be written.
    fn save(&self, value: u32) -> Result<(), Self::Error>;
}

/// In-memory store for native runs and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryBestScoreStore {
    slot: Rc<Cell<Option<u32>>>,
}

impl MemoryBestScoreStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with an existing record.
    #[must_use]
    pub fn with_record(value: u32) -> Self {
        let store = Self::default();
        store.slot.set(Some(value));
        store
    }
}

impl BestScoreStore for MemoryBestScoreStore {
    type Error = Infallible;

    fn load(&self) -> Result<Option<u32>, Self::Error> {
        Ok(self.slot.get())
    }

    fn save(&self, value: u32) -> Result<(), Self::Error> {
        self.slot.set(Some(value));
        Ok(())
    }
}
