use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Opaque embed reference; handed to the viewer untouched.
    pub src: AttrValue,
}

/// Panorama pane for the current round.
#[function_component(Panorama)]
pub fn panorama(p: &Props) -> Html {
    html! {
        <div class="panorama-pane">
            <iframe
                src={p.src.clone()}
                allow="accelerometer; gyroscope"
                allowfullscreen={true}
                title="Street View"
            />
        </div>
    }
}
