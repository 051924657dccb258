use yew::prelude::*;

use crate::config::{Brand, Footer as FooterCopy};

#[derive(Properties, PartialEq, Clone)]
pub struct FooterProps {
    pub brand: Brand,
    pub copy: FooterCopy,
    pub border: String,
}

#[function_component]
pub fn Footer(props: &FooterProps) -> Html {
    html! {
        <footer class="site-footer" style={format!("border-top: 1px solid {};", props.border)}>
            <div class="footer-brand">{format!("{} {}", props.brand.name, props.brand.accent)}</div>
            <div class="footer-legal">{&props.copy.legal}</div>
        </footer>
    }
}
