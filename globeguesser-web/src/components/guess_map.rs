//! Interactive world map the player drops a guess on.

use globeguesser_game::GeoPoint;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::leaflet;

/// Resting view of the guessing map.
const HOME_CENTER: GeoPoint = GeoPoint::new(20.0, 0.0);

#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_pick: Callback<GeoPoint>,
    /// Marker position, when the player has one staged.
    pub pending: Option<GeoPoint>,
    /// Clicks are forwarded only while this is set, so stray input
    /// during a confirmation or result overlay is dropped at the source.
    pub accepting: bool,
    /// Expanded panes start a zoom step closer.
    pub expanded: bool,
}

#[function_component(GuessMap)]
pub fn guess_map(props: &Props) -> Html {
    let container = use_node_ref();
    let map_slot = use_mut_ref(|| None::<leaflet::Map>);
    let marker_slot = use_mut_ref(|| None::<leaflet::Marker>);
    let accepting = use_mut_ref(|| true);
    *accepting.borrow_mut() = props.accepting;

    // The pane is rebuilt from scratch when the expand toggle flips,
    // matching a keyed remount.
    {
        let container = container.clone();
        let map_slot = map_slot.clone();
        let marker_slot = marker_slot.clone();
        let accepting = accepting.clone();
        let on_pick = props.on_pick.clone();
        let pending = props.pending;
        use_effect_with(props.expanded, move |expanded| {
            let zoom = if *expanded { 2.0 } else { 1.0 };
            let map = container.cast::<HtmlElement>().map(|element| {
                let map = leaflet::new_map(&element, &leaflet::map_options(1.0, 10.0));
                map.set_view(&leaflet::lat_lng(HOME_CENTER), zoom);
                leaflet::add_base_tiles(&map);

                let picker = {
                    let accepting = accepting.clone();
                    Closure::<dyn FnMut(leaflet::MapMouseEvent)>::new(
                        move |event: leaflet::MapMouseEvent| {
                            if *accepting.borrow() {
                                let at = event.latlng();
                                on_pick.emit(GeoPoint::new(at.lat(), at.lng()));
                            }
                        },
                    )
                };
                map.on("click", picker.as_ref().unchecked_ref());
                // The handler lives as long as the page; the map pane is
                // only ever rebuilt a handful of times.
                picker.forget();

                if let Some(point) = pending {
                    *marker_slot.borrow_mut() =
                        Some(leaflet::place_marker(&map, point, "Your guess"));
                }
                map
            });
            *map_slot.borrow_mut() = map;

            move || {
                *marker_slot.borrow_mut() = None;
                if let Some(map) = map_slot.borrow_mut().take() {
                    map.remove();
                }
            }
        });
    }

    // Keep the staged-guess marker in step with the session.
    {
        let map_slot = map_slot.clone();
        let marker_slot = marker_slot.clone();
        use_effect_with(props.pending, move |pending| {
            match pending {
                Some(point) => {
                    let latlng = leaflet::lat_lng(*point);
                    let mut slot = marker_slot.borrow_mut();
                    if let Some(marker) = slot.as_ref() {
                        marker.set_lat_lng(&latlng);
                    } else if let Some(map) = map_slot.borrow().as_ref() {
                        let marker = leaflet::new_marker(&latlng, &JsValue::NULL);
                        marker.add_to(map);
                        *slot = Some(marker);
                    }
                }
                None => {
                    if let Some(marker) = marker_slot.borrow_mut().take() {
                        marker.remove();
                    }
                }
            }
            || ()
        });
    }

    let pane_class = if props.expanded {
        "guess-map expanded"
    } else {
        "guess-map"
    };
    html! {
        <div class={pane_class} ref={container}></div>
    }
}
