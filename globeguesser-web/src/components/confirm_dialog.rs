//! Confirmation overlay: a preview of the staged guess plus the final
//! go/no-go buttons.

use globeguesser_game::GeoPoint;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::leaflet;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub guess: GeoPoint,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(ConfirmDialog)]
pub fn confirm_dialog(p: &Props) -> Html {
    let container = use_node_ref();

    {
        let container = container.clone();
        use_effect_with(p.guess, move |guess| {
            let map = container.cast::<HtmlElement>().map(|element| {
                let map = leaflet::new_map(&element, &leaflet::map_options(1.0, 10.0));
                map.set_view(&leaflet::lat_lng(*guess), 2.0);
                leaflet::add_base_tiles(&map);
                leaflet::place_marker(&map, *guess, "Your guess");
                map
            });
            move || {
                if let Some(map) = map {
                    map.remove();
                }
            }
        });
    }

    let confirm = {
        let cb = p.on_confirm.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let cancel = {
        let cb = p.on_cancel.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <div class="modal">
            <div class="modal-content">
                <div class="modal-map" ref={container}></div>
                <div class="modal-side">
                    <h2>{ "Confirm" }</h2>
                    <p>{ "Lock in this location?" }</p>
                    <div class="modal-actions">
                        <button class="primary" onclick={confirm}>{ "Confirm" }</button>
                        <button onclick={cancel}>{ "Cancel" }</button>
                    </div>
                </div>
            </div>
        </div>
    }
}
