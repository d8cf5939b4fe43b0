//! Root component wiring the session state machine to the panes and
//! overlays.

use globeguesser_game::{DeferredFit, GameEngine, GamePhase, GeoPoint, ResultView, RoundCatalog};
use yew::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::guess_map::GuessMap;
use crate::components::panorama::Panorama;
use crate::components::result_dialog::ResultDialog;
use crate::components::summary::Summary;
use crate::storage::LocalBestScoreStore;

#[function_component(App)]
pub fn app() -> Html {
    let engine =
        use_mut_ref(|| GameEngine::new(RoundCatalog::standard(), LocalBestScoreStore::new()));
    let session = use_state(|| engine.borrow().new_session());
    let expanded = use_state(|| false);
    let fit = use_mut_ref(DeferredFit::new);

    let on_pick = {
        let session = session.clone();
        Callback::from(move |point: GeoPoint| {
            let mut next = (*session).clone();
            if next.pick(point).is_ok() {
                session.set(next);
            }
        })
    };

    let on_guess = {
        let session = session.clone();
        Callback::from(move |_| {
            let mut next = (*session).clone();
            if next.request_confirm().is_ok() {
                session.set(next);
            }
        })
    };

    let on_cancel = {
        let session = session.clone();
        Callback::from(move |()| {
            let mut next = (*session).clone();
            if next.cancel_confirm().is_ok() {
                session.set(next);
            }
        })
    };

    let on_confirm = {
        let session = session.clone();
        let fit = fit.clone();
        Callback::from(move |()| {
            let mut next = (*session).clone();
            match next.confirm() {
                Ok(attempt) => {
                    fit.borrow_mut()
                        .present(ResultView::compute(attempt.guess, attempt.target));
                    session.set(next);
                }
                Err(err) => log::debug!("confirm rejected: {err}"),
            }
        })
    };

    let on_next = {
        let session = session.clone();
        let engine = engine.clone();
        Callback::from(move |()| {
            let mut next = (*session).clone();
            match engine.borrow().advance(&mut next) {
                Ok(_) => session.set(next),
                Err(err) => log::debug!("advance rejected: {err}"),
            }
        })
    };

    let on_restart = {
        let session = session.clone();
        Callback::from(move |()| {
            let mut next = (*session).clone();
            next.restart();
            session.set(next);
        })
    };

    let on_toggle_expand = {
        let expanded = expanded.clone();
        Callback::from(move |_| expanded.set(!*expanded))
    };

    let phase = session.phase();
    let body = if phase == GamePhase::Finished {
        html! {
            <Summary
                attempts={session.attempts().to_vec()}
                total_score={session.total_score()}
                max_score={session.catalog().max_score()}
                on_restart={on_restart}
            />
        }
    } else {
        match session.current_round() {
            Ok(round) => {
                let can_guess = phase == GamePhase::Picking && session.pending_guess().is_some();
                html! {
                    <div class="game-area">
                        <Panorama src={round.panorama_url.clone()} />
                        <div class="input-area">
                            <div class="map-holder">
                                <GuessMap
                                    on_pick={on_pick}
                                    pending={session.pending_guess()}
                                    accepting={phase == GamePhase::Picking}
                                    expanded={*expanded}
                                />
                                <button class="expand-toggle" onclick={on_toggle_expand}>
                                    { if *expanded { "Shrink" } else { "Expand" } }
                                </button>
                            </div>
                            <button class="primary guess-btn" disabled={!can_guess} onclick={on_guess}>
                                { "Make your guess" }
                            </button>
                        </div>
                    </div>
                }
            }
            // Unreachable while the session invariants hold; surfaced
            // rather than swallowed.
            Err(err) => html! { <p class="error">{ format!("round lookup failed: {err}") }</p> },
        }
    };

    let confirm_overlay = (phase == GamePhase::Confirming)
        .then(|| session.pending_guess())
        .flatten()
        .map(|guess| {
            html! { <ConfirmDialog guess={guess} on_confirm={on_confirm} on_cancel={on_cancel} /> }
        });

    let result_overlay = (phase == GamePhase::ShowingResult)
        .then(|| session.last_attempt().cloned())
        .flatten()
        .map(|attempt| {
            let label = session
                .catalog()
                .get(attempt.round_index)
                .map(|round| round.label.clone())
                .unwrap_or_default();
            html! {
                <ResultDialog
                    attempt={attempt}
                    label={label}
                    fit={fit.clone()}
                    on_next={on_next.clone()}
                />
            }
        });

    let round_indicator = (phase != GamePhase::Finished).then(|| {
        html! {
            <span class="round-indicator">
                { format!("Round {} of {}", session.current_index() + 1, session.catalog().len()) }
            </span>
        }
    });

    html! {
        <div class="container">
            <header class="title-bar">
                <h1>{ "GlobeGuesser" }</h1>
                { round_indicator }
            </header>
            { body }
            { confirm_overlay }
            { result_overlay }
            <footer class="score-area">
                { format!(
                    "Score: {} / Best score: {}",
                    session.total_score(),
                    session.best_score()
                ) }
            </footer>
        </div>
    }
}
