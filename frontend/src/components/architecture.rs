use yew::prelude::*;

use crate::config::{architecture_card_id, asset_url, ArchitectureSection};
use crate::view_state::theme::Palette;

#[derive(Properties, PartialEq, Clone)]
pub struct ArchitectureProps {
    pub section: ArchitectureSection,
    pub palette: Palette,
    pub revealed: Vec<bool>,
    pub on_select: Callback<String>,
}

#[function_component]
pub fn Architecture(props: &ArchitectureProps) -> Html {
    let palette = &props.palette;
    html! {
        <section class="section">
            <div class="section-inner">
                <h2 class="section-title">{&props.section.title}</h2>
                <div class="architecture-grid">
                    { for props.section.cards.iter().enumerate().map(|(i, card)| {
                        let revealed = props.revealed.get(i).copied().unwrap_or(false);
                        let body = match &card.image {
                            Some(image) => {
                                let on_select = props.on_select.clone();
                                let image_id = image.clone();
                                html! {
                                    <img
                                        class="architecture-shot enlargeable"
                                        src={asset_url(image)}
                                        alt={card.title.clone()}
                                        onclick={Callback::from(move |_: MouseEvent| on_select.emit(image_id.clone()))}
                                    />
                                }
                            }
                            None => html! { <div class="placeholder">{"[ Image Placeholder ]"}</div> },
                        };
                        html! {
                            <div
                                id={architecture_card_id(i)}
                                class={classes!("architecture-card", "reveal-scale", revealed.then_some("revealed"))}
                                style={format!("background: {}; border: 1px solid {};", palette.panel, palette.border)}
                            >
                                {body}
                                <h3>{&card.title}</h3>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}
