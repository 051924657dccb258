use yew::prelude::*;

use crate::config::{Brand, NavLink};
use crate::view_state::nav::NavStyle;
use crate::view_state::theme::Palette;

#[derive(Properties, PartialEq, Clone)]
pub struct NavBarProps {
    pub brand: Brand,
    pub links: Vec<NavLink>,
    pub visible: bool,
    pub palette: Palette,
}

#[function_component]
pub fn NavBar(props: &NavBarProps) -> Html {
    let palette = &props.palette;
    let style = NavStyle::for_visibility(props.visible);
    html! {
        <nav
            class="site-nav"
            style={format!(
                "transform: {}; pointer-events: {}; background: {}; border-bottom: 1px solid {};",
                style.transform, style.pointer_events, palette.nav_background, palette.border
            )}
        >
            <div class="nav-inner">
                <a href="#" class="nav-brand" style={format!("color: {};", palette.text)}>
                    {&props.brand.name}{" "}
                    <span class="accent" style={format!("color: {};", palette.accent)}>{&props.brand.accent}</span>
                </a>
                <div class="nav-links">
                    { for props.links.iter().map(|link| html! {
                        <a href={link.target.clone()} style={format!("color: {};", palette.text)}>{&link.label}</a>
                    }) }
                </div>
            </div>
        </nav>
    }
}
