use globeguesser_game::{
    AdvanceOutcome, BestScoreStore, EARTH_RADIUS_KM, GameEngine, GamePhase, GameSession, GeoPoint,
    MemoryBestScoreStore, ResultView, Round, RoundCatalog, ViewportPlan, distance_km,
    points_for_distance, tier_for_distance,
};

/// Latitude offset north of the equator that is `km` away by
/// great-circle distance (exact for pure-latitude displacement).
fn lat_degrees_for_km(km: f64) -> f64 {
    (km / EARTH_RADIUS_KM).to_degrees()
}

fn fixture_catalog() -> RoundCatalog {
    RoundCatalog::new(vec![
        Round::new("about:alpha", GeoPoint::new(0.0, 0.0), "Alpha"),
        Round::new("about:beta", GeoPoint::new(20.0, 30.0), "Beta"),
        Round::new("about:gamma", GeoPoint::new(-45.0, 100.0), "Gamma"),
    ])
}

fn play_round(session: &mut GameSession, guess: GeoPoint) -> u32 {
    session.pick(guess).unwrap();
    session.request_confirm().unwrap();
    session.confirm().unwrap().points
}

#[test]
fn exact_guess_scores_full_marks() {
    // Scenario A: guess == correct location.
    let mut session = GameSession::new(fixture_catalog(), 0);
    let points = play_round(&mut session, GeoPoint::new(0.0, 0.0));
    assert_eq!(points, 5000);
    let attempt = session.last_attempt().unwrap();
    assert_eq!(attempt.distance_km, 0.0);
}

#[test]
fn eight_thousand_km_guess_floors_at_zero() {
    // Scenario B: a wildly wrong guess must not go negative.
    let mut session = GameSession::new(fixture_catalog(), 0);
    let guess = GeoPoint::new(lat_degrees_for_km(8000.0), 0.0);
    let measured = distance_km(guess, GeoPoint::new(0.0, 0.0));
    assert!((measured - 8000.0).abs() < 1e-6);

    let points = play_round(&mut session, guess);
    assert_eq!(points, 0);
    assert_eq!(session.total_score(), 0);
}

#[test]
fn three_round_session_accumulates_and_persists_best() {
    // Scenario C: per-round points [5000, 3000, 0] against a prior
    // best of 6000.
    let store = MemoryBestScoreStore::with_record(6000);
    let engine = GameEngine::new(fixture_catalog(), store.clone());
    let mut session = engine.new_session();
    assert_eq!(session.best_score(), 6000);

    // Round 1: dead on.
    assert_eq!(play_round(&mut session, GeoPoint::new(0.0, 0.0)), 5000);
    assert_eq!(
        engine.advance(&mut session).unwrap(),
        AdvanceOutcome::NextRound(1)
    );

    // Round 2: 80 km north of the answer -> 5000 - 25 * 80 = 3000.
    let answer = GeoPoint::new(20.0, 30.0);
    let off_by_80 = GeoPoint::new(answer.lat + lat_degrees_for_km(80.0), answer.lng);
    assert_eq!(play_round(&mut session, off_by_80), 3000);
    assert_eq!(
        engine.advance(&mut session).unwrap(),
        AdvanceOutcome::NextRound(2)
    );

    // Round 3: the other side of the planet.
    assert_eq!(play_round(&mut session, GeoPoint::new(45.0, -80.0)), 0);
    assert_eq!(
        engine.advance(&mut session).unwrap(),
        AdvanceOutcome::Finished {
            new_best: Some(8000)
        }
    );

    assert_eq!(session.phase(), GamePhase::Finished);
    assert_eq!(session.total_score(), 8000);
    assert_eq!(session.best_score(), 8000);
    assert_eq!(store.load().unwrap(), Some(8000));
}

#[test]
fn cancelled_confirmation_still_submits_original_point() {
    // Scenario D: cancel then confirm uses the originally picked point.
    let mut session = GameSession::new(fixture_catalog(), 0);
    let picked = GeoPoint::new(1.5, 2.5);
    session.pick(picked).unwrap();
    session.request_confirm().unwrap();
    session.cancel_confirm().unwrap();
    session.request_confirm().unwrap();
    let attempt = session.confirm().unwrap();
    assert_eq!(attempt.guess, picked);
}

#[test]
fn view_fit_tiers_follow_the_distance_table() {
    // Scenario E: 0.5 km and 6000 km pick the extreme tiers.
    let near = tier_for_distance(0.5);
    assert_eq!(near.max_zoom, 16);
    assert!((near.padding - 1.5).abs() < f64::EPSILON);

    let far = tier_for_distance(6000.0);
    assert_eq!(far.max_zoom, 4);
    assert!((far.padding - 0.2).abs() < f64::EPSILON);
}

#[test]
fn result_view_tier_matches_scored_distance() {
    let guess = GeoPoint::new(0.0, 0.0);
    let target = GeoPoint::new(lat_degrees_for_km(0.6), 0.0);
    let view = ResultView::compute(guess, target);
    let ViewportPlan::FitBounds { max_zoom, .. } = view.viewport else {
        panic!("expected a bounds fit for distinct points");
    };
    assert_eq!(max_zoom, 16);
    assert_eq!(points_for_distance(view.distance_km), 4985);
}

#[test]
fn restart_mid_session_keeps_the_record() {
    let store = MemoryBestScoreStore::with_record(9000);
    let engine = GameEngine::new(fixture_catalog(), store);
    let mut session = engine.new_session();

    play_round(&mut session, GeoPoint::new(0.0, 0.0));
    engine.advance(&mut session).unwrap();
    play_round(&mut session, GeoPoint::new(20.0, 30.0));

    session.restart();
    assert_eq!(session.phase(), GamePhase::Picking);
    assert_eq!(session.current_index(), 0);
    assert_eq!(session.total_score(), 0);
    assert!(session.attempts().is_empty());
    assert_eq!(session.best_score(), 9000);
}

#[test]
fn full_run_rejects_out_of_phase_actions_along_the_way() {
    let engine = GameEngine::new(fixture_catalog(), MemoryBestScoreStore::new());
    let mut session = engine.new_session();

    assert!(session.confirm().is_err());
    assert!(session.cancel_confirm().is_err());
    assert!(engine.advance(&mut session).is_err());

    session.pick(GeoPoint::new(5.0, 5.0)).unwrap();
    session.request_confirm().unwrap();
    assert!(session.pick(GeoPoint::new(6.0, 6.0)).is_err());
    assert!(session.request_confirm().is_err());

    session.confirm().unwrap();
    assert!(session.request_confirm().is_err());
    assert!(session.cancel_confirm().is_err());

    engine.advance(&mut session).unwrap();
    assert_eq!(session.phase(), GamePhase::Picking);
    assert_eq!(session.attempts().len(), 1);
}

#[test]
fn finished_session_only_restarts() {
    let engine = GameEngine::new(fixture_catalog(), MemoryBestScoreStore::new());
    let mut session = engine.new_session();
    for _ in 0..engine.catalog().len() {
        play_round(&mut session, GeoPoint::new(0.0, 0.0));
        engine.advance(&mut session).unwrap();
    }
    assert_eq!(session.phase(), GamePhase::Finished);
    assert!(session.pick(GeoPoint::new(0.0, 0.0)).is_err());
    assert!(session.request_confirm().is_err());
    assert!(session.confirm().is_err());
    assert!(engine.advance(&mut session).is_err());

    session.restart();
    assert_eq!(session.phase(), GamePhase::Picking);
}
