use yew::prelude::*;

use crate::config::{asset_url, gallery_shot_id, Gallery as GalleryCopy};
use crate::view_state::theme::Palette;

#[derive(Properties, PartialEq, Clone)]
pub struct GalleryProps {
    pub gallery: GalleryCopy,
    pub palette: Palette,
    pub revealed: Vec<bool>,
    pub on_select: Callback<String>,
}

/// Thumbnails of the interface; clicking one opens it in the lightbox.
#[function_component]
pub fn Gallery(props: &GalleryProps) -> Html {
    html! {
        <section class="section">
            <div class="section-inner">
                <h2 class="section-title">{&props.gallery.title}</h2>
                <div class="gallery-grid">
                    { for props.gallery.shots.iter().enumerate().map(|(i, shot)| {
                        let on_select = props.on_select.clone();
                        let image = shot.image.clone();
                        let revealed = props.revealed.get(i).copied().unwrap_or(false);
                        html! {
                            <figure
                                id={gallery_shot_id(i)}
                                class={classes!("gallery-shot", "reveal-rise", revealed.then_some("revealed"))}
                                style={format!("background: {}; border: 1px solid {};", props.palette.surface, props.palette.border)}
                            >
                                <img
                                    class="enlargeable"
                                    src={asset_url(&shot.image)}
                                    alt={shot.caption.clone()}
                                    onclick={Callback::from(move |_: MouseEvent| on_select.emit(image.clone()))}
                                />
                                <figcaption style={format!("color: {};", props.palette.muted)}>{&shot.caption}</figcaption>
                            </figure>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}
