//! GlobeGuesser Game Engine
//!
//! Platform-agnostic core for the location-guessing quiz. This crate
//! provides the round catalog, geodesic scoring, the round progression
//! state machine, result-view fitting, and the best-score persistence
//! boundary, without UI or platform-specific dependencies.

pub mod catalog;
pub mod fit;
pub mod geo;
pub mod score;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use catalog::{CatalogError, Round, RoundCatalog};
pub use fit::{
    CenterZoom, DeferredFit, FIT_TIERS, FitTier, ResultView, ViewportPlan, tier_for_distance,
};
pub use geo::{EARTH_RADIUS_KM, GeoBounds, GeoPoint, distance_km, normalize_lng};
pub use score::{MAX_ROUND_POINTS, POINTS_LOST_PER_KM, points_for_distance};
pub use session::{
    AdvanceOutcome, GamePhase, GameSession, GuessAttempt, SessionError, TransitionError,
};
pub use store::{BestScoreStore, MemoryBestScoreStore};

/// Engine facade binding a round catalog to a best-score store.
///
/// The store is only touched at the session edges: once when a session
/// is created and once when a finished run sets a new record. A store
/// that fails degrades the session to a zero record and non-durable
/// saves rather than surfacing an error.
pub struct GameEngine<S>
where
    S: BestScoreStore,
{
    catalog: RoundCatalog,
    store: S,
}

impl<S> GameEngine<S>
where
    S: BestScoreStore,
{
    /// Create an engine over the provided catalog and store.
    pub const fn new(catalog: RoundCatalog, store: S) -> Self {
        Self { catalog, store }
    }

    /// Start a fresh session seeded with the persisted best score, or
    /// zero when nothing valid is stored or the store is unreadable.
    #[must_use]
    pub fn new_session(&self) -> GameSession {
        let best = self.store.load().ok().flatten().unwrap_or(0);
        GameSession::new(self.catalog.clone(), best)
    }

    /// Drive [`GameSession::advance`], persisting a freshly-set record.
    /// A store write failure is absorbed; the in-session record stands
    /// either way.
    ///
    /// # Errors
    ///
    /// Returns the session's own rejection when called outside the
    /// result view.
    pub fn advance(&self, session: &mut GameSession) -> Result<AdvanceOutcome, SessionError> {
        let outcome = session.advance()?;
        if let AdvanceOutcome::Finished {
            new_best: Some(best),
        } = outcome
        {
            let _ = self.store.save(best);
        }
        Ok(outcome)
    }

    #[must_use]
    pub const fn catalog(&self) -> &RoundCatalog {
        &self.catalog
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("storage offline")]
    struct Offline;

    /// Store whose reads and writes always fail.
    struct BrokenStore;

    impl BestScoreStore for BrokenStore {
        type Error = Offline;

        fn load(&self) -> Result<Option<u32>, Self::Error> {
            Err(Offline)
        }

        fn save(&self, _value: u32) -> Result<(), Self::Error> {
            Err(Offline)
        }
    }

    fn play_round(session: &mut GameSession, guess: GeoPoint) {
        session.pick(guess).unwrap();
        session.request_confirm().unwrap();
        session.confirm().unwrap();
    }

    #[test]
    fn new_session_seeds_best_from_store() {
        let engine = GameEngine::new(
            RoundCatalog::standard(),
            MemoryBestScoreStore::with_record(7777),
        );
        assert_eq!(engine.new_session().best_score(), 7777);
    }

    #[test]
    fn unreadable_store_defaults_to_zero() {
        let engine = GameEngine::new(RoundCatalog::standard(), BrokenStore);
        assert_eq!(engine.new_session().best_score(), 0);
    }

    #[test]
    fn finishing_persists_new_record() {
        let store = MemoryBestScoreStore::with_record(100);
        let engine = GameEngine::new(RoundCatalog::standard(), store.clone());
        let mut session = engine.new_session();

        for round in engine.catalog().iter().cloned().collect::<Vec<_>>() {
            play_round(&mut session, round.location);
            let _ = engine.advance(&mut session).unwrap();
        }

        assert_eq!(session.phase(), GamePhase::Finished);
        assert_eq!(session.total_score(), 15_000);
        assert_eq!(store.load().unwrap(), Some(15_000));
    }

    #[test]
    fn unbeaten_record_is_not_rewritten() {
        let store = MemoryBestScoreStore::with_record(20_000);
        let engine = GameEngine::new(RoundCatalog::standard(), store.clone());
        let mut session = engine.new_session();

        for _ in 0..engine.catalog().len() {
            play_round(&mut session, GeoPoint::new(0.0, 0.0));
            let _ = engine.advance(&mut session).unwrap();
        }

        assert_eq!(store.load().unwrap(), Some(20_000));
        assert_eq!(session.best_score(), 20_000);
    }

    #[test]
    fn save_failure_keeps_session_record() {
        let engine = GameEngine::new(RoundCatalog::standard(), BrokenStore);
        let mut session = engine.new_session();

        for round in engine.catalog().iter().cloned().collect::<Vec<_>>() {
            play_round(&mut session, round.location);
            let _ = engine.advance(&mut session).unwrap();
        }

        // The write was lost but the running session still shows it.
        assert_eq!(session.best_score(), 15_000);
    }
}
