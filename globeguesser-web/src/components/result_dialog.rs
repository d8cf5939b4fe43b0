//! Round result overlay: both markers, the connecting segment, and a
//! viewport fitted to how far off the guess landed.

use std::cell::RefCell;
use std::rc::Rc;

use globeguesser_game::{DeferredFit, GuessAttempt, ResultView};
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::components::format_km;
use crate::leaflet;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub attempt: GuessAttempt,
    /// Label of the round the attempt belongs to.
    pub label: AttrValue,
    /// Handoff staged by the confirm transition; consumed once the
    /// result map is live.
    pub fit: Rc<RefCell<DeferredFit>>,
    pub on_next: Callback<()>,
}

#[function_component(ResultDialog)]
pub fn result_dialog(p: &Props) -> Html {
    let container = use_node_ref();

    {
        let container = container.clone();
        let fit = p.fit.clone();
        use_effect_with(p.attempt.clone(), move |attempt| {
            // A remount after the handoff was spent recomputes the same
            // view from the recorded attempt.
            let view = fit
                .borrow_mut()
                .mounted()
                .unwrap_or_else(|| ResultView::compute(attempt.guess, attempt.target));
            let map = container.cast::<HtmlElement>().map(|element| {
                let map = leaflet::new_map(&element, &leaflet::map_options(1.0, 18.0));
                leaflet::add_base_tiles(&map);
                leaflet::place_marker(&map, view.guess, "Your guess");
                leaflet::place_marker(&map, view.target, "Actual location");
                leaflet::draw_path(&map, view.path);
                leaflet::apply_viewport(&map, &view.viewport);
                map
            });
            move || {
                fit.borrow_mut().clear();
                if let Some(map) = map {
                    map.remove();
                }
            }
        });
    }

    let next = {
        let cb = p.on_next.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <div class="modal">
            <div class="modal-content">
                <div class="modal-map" ref={container}></div>
                <div class="modal-side">
                    <h2>{ "Result" }</h2>
                    <p class="result-facts">
                        { "Answer: " }{ p.label.clone() }<br />
                        { "Distance: " }
                        <span class="distance">{ format_km(p.attempt.distance_km) }</span><br />
                        { "Points this round: " }
                        <span class="points">{ p.attempt.points }</span>
                    </p>
                    <button class="primary" onclick={next}>{ "Next" }</button>
                </div>
            </div>
        </div>
    }
}
