use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::asset_url;
use crate::view_state::lightbox::{ImageId, LightboxState};

/// Matches the `lightbox-fade` CSS animation.
const FADE_OUT_MS: u32 = 250;

#[derive(Properties, PartialEq, Clone)]
pub struct LightboxProps {
    pub state: LightboxState,
    pub on_dismiss: Callback<()>,
}

/// Overlay for an enlarged image. The last image stays mounted for the
/// length of the fade-out after the state closes.
#[function_component]
pub fn Lightbox(props: &LightboxProps) -> Html {
    let shown = use_state(|| props.state.current().cloned());
    let closing = use_state(|| false);

    {
        let shown = shown.clone();
        let closing = closing.clone();
        use_effect_with_deps(
            move |state: &LightboxState| {
                let mut pending: Option<Timeout> = None;
                match state.current() {
                    Some(id) => {
                        shown.set(Some(id.clone()));
                        closing.set(false);
                    }
                    None => {
                        closing.set(true);
                        pending = Some(Timeout::new(FADE_OUT_MS, move || {
                            shown.set(None);
                            closing.set(false);
                        }));
                    }
                }
                move || drop(pending)
            },
            props.state.clone(),
        );
    }

    let Some(image): Option<ImageId> = (*shown).clone() else {
        return html! {};
    };

    let on_backdrop = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };
    let on_close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_dismiss.emit(());
        })
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class={classes!("lightbox", (*closing).then_some("closing"))} onclick={on_backdrop}>
            <button class="lightbox-close" onclick={on_close}>
                <i class="fa-solid fa-xmark"></i>
            </button>
            <img
                class="lightbox-image"
                src={asset_url(image.as_str())}
                alt={image.to_string()}
                onclick={keep_open}
            />
        </div>
    }
}
