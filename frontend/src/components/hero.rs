use yew::prelude::*;

use crate::config::{Brand, HeroCopy};
use crate::view_state::progress::HeroTransform;

#[derive(Properties, PartialEq, Clone)]
pub struct HeroProps {
    pub brand: Brand,
    pub copy: HeroCopy,
    pub transform: HeroTransform,
    pub accent: String,
}

/// Full-viewport intro panel; shrinks and fades as the page scrolls.
#[function_component]
pub fn Hero(props: &HeroProps) -> Html {
    let accent = &props.accent;
    html! {
        <section class="hero" style={props.transform.style()}>
            <div class="hero-badge" style={format!("border-color: {accent}; color: {accent};")}>
                {&props.copy.badge}
            </div>
            <h1 class="hero-title">
                {&props.brand.name}{" "}
                <span class="accent" style={format!("color: {accent};")}>{&props.brand.accent}</span>
            </h1>
            <p class="hero-blurb">{&props.copy.blurb}</p>
            <div class="hero-arrow">
                <i class="fa-solid fa-arrow-down"></i>
            </div>
        </section>
    }
}
