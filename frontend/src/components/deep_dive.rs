use yew::prelude::*;

use crate::config::DeepDive as DeepDiveCopy;

#[derive(Properties, PartialEq, Clone)]
pub struct DeepDiveProps {
    pub copy: DeepDiveCopy,
    pub accent: String,
}

#[function_component]
pub fn DeepDive(props: &DeepDiveProps) -> Html {
    let copy = &props.copy;
    let accent = format!("color: {};", props.accent);
    html! {
        <section id={copy.section_id.clone()} class="section">
            <div class="section-inner">
                <div class="deep-dive">
                    <h2 class="deep-dive-title">
                        {&copy.heading}{" "}<span style={accent.clone()}>{&copy.heading_accent}</span>
                    </h2>
                    <p class="deep-dive-summary">{&copy.summary}</p>
                    <div class="deep-dive-columns">
                        { for copy.columns.iter().map(|column| html! {
                            <div>
                                <h4 style={accent.clone()}>{&column.heading}</h4>
                                <p>{&column.body}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
