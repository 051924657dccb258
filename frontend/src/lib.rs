//! Landing site for Project Aether, the Geek Squad NASA HUNCH entry.
//!
//! The page itself is a handful of Yew components; the scroll effects are
//! driven by the DOM-free state machine in [`view_state`].

pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod utils;
pub mod view_state;

use yew::prelude::*;

use crate::config::SiteContent;
use crate::pages::landing::Landing;

#[function_component]
pub fn App() -> Html {
    let content = use_memo(|_| SiteContent::bundled().map(std::rc::Rc::new), ());

    match &*content {
        Ok(content) => html! { <Landing content={content.clone()} /> },
        Err(e) => {
            log::error!("Failed to load site content: {}", e);
            html! {
                <div class="content-error">
                    <p>{"This page could not be displayed."}</p>
                </div>
            }
        }
    }
}
