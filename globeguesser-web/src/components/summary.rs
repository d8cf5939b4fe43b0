//! End-of-session screen: per-round breakdown, the final total, and a
//! restart control.

use globeguesser_game::GuessAttempt;
use yew::prelude::*;

use crate::components::summary_line;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub attempts: Vec<GuessAttempt>,
    pub total_score: u32,
    pub max_score: u32,
    pub on_restart: Callback<()>,
}

#[function_component(Summary)]
pub fn summary(p: &Props) -> Html {
    let restart = {
        let cb = p.on_restart.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <div class="result-area">
            <h2>{ format!("Finished! Score: {} / {}", p.total_score, p.max_score) }</h2>
            <ul>
                {
                    p.attempts
                        .iter()
                        .map(|attempt| {
                            html! { <li key={attempt.round_index}>{ summary_line(attempt) }</li> }
                        })
                        .collect::<Html>()
                }
            </ul>
            <button class="primary" onclick={restart}>{ "Restart" }</button>
        </div>
    }
}
