use std::rc::Rc;

use yew::prelude::*;

use crate::components::architecture::Architecture;
use crate::components::crew::Crew;
use crate::components::deep_dive::DeepDive;
use crate::components::footer::Footer;
use crate::components::gallery::Gallery;
use crate::components::hero::Hero;
use crate::components::lightbox::Lightbox;
use crate::components::nav_bar::NavBar;
use crate::config::{architecture_card_id, crew_card_id, gallery_shot_id, SiteContent};
use crate::utils::browser::{measure_sections, BrowserBridge};
use crate::view_state::signal::Signal;
use crate::view_state::{ViewFrame, ViewStateController};

const LANDING_CSS: &str = r#"
    .landing-page {
        font-family: Inter, sans-serif;
        min-height: 100vh;
        overflow-x: hidden;
        transition: background-color 0.8s cubic-bezier(0.4, 0, 0.2, 1), color 0.8s cubic-bezier(0.4, 0, 0.2, 1);
    }
    .site-nav {
        position: fixed;
        top: 0;
        left: 0;
        width: 100%;
        z-index: 1000;
        padding: 3rem 0;
        backdrop-filter: blur(20px);
        display: flex;
        justify-content: center;
        transition: transform 0.5s cubic-bezier(0.16, 1, 0.3, 1), background-color 0.8s ease-in-out;
    }
    .nav-inner, .section-inner {
        width: 100%;
        max-width: 1400px;
        padding: 0 7%;
    }
    .nav-inner {
        display: flex;
        justify-content: space-between;
        align-items: center;
    }
    .nav-brand {
        font-size: 1.4rem;
        font-weight: 900;
        letter-spacing: 0.3em;
        text-decoration: none;
    }
    .nav-links {
        display: flex;
        gap: 4rem;
    }
    .nav-links a {
        font-size: 0.85rem;
        font-weight: 600;
        letter-spacing: 0.25em;
        text-decoration: none;
    }
    .nav-brand, .nav-links a, .accent, .section-subtitle, .member-role, .member-bio, .deep-dive h4, .deep-dive-title span {
        transition: color 0.8s ease-in-out;
    }
    .hero {
        height: 100vh;
        display: flex;
        flex-direction: column;
        justify-content: center;
        align-items: center;
        text-align: center;
        padding: 0 20px;
        will-change: transform, opacity;
    }
    .hero-badge {
        border: 1px solid;
        padding: 8px 16px;
        border-radius: 20px;
        font-size: 0.75rem;
        font-weight: 600;
        margin-bottom: 2rem;
        letter-spacing: 0.1em;
        transition: all 0.8s ease;
    }
    .hero-title {
        font-size: clamp(3.5rem, 12vw, 7rem);
        font-weight: 800;
        letter-spacing: -0.05em;
        margin: 0;
        line-height: 0.9;
    }
    .hero-blurb {
        opacity: 0.8;
        max-width: 600px;
        font-size: 1.2rem;
        margin-top: 1.5rem;
        line-height: 1.5;
    }
    .hero-arrow {
        margin-top: 4rem;
        opacity: 0.5;
        font-size: 30px;
        animation: bob 2s ease-in-out infinite;
    }
    @keyframes bob {
        0%, 100% { transform: translateY(0); }
        50% { transform: translateY(10px); }
    }
    .section {
        padding: 120px 0;
        display: flex;
        justify-content: center;
    }
    .section-title {
        font-size: 3rem;
        font-weight: 700;
        margin: 0 0 4rem 0;
        letter-spacing: -0.02em;
    }
    .section-heading {
        margin-bottom: 4rem;
    }
    .section-heading .section-title {
        margin: 0;
    }
    .section-subtitle {
        font-weight: 500;
        margin-top: 10px;
    }
    .architecture-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(400px, 1fr));
        gap: 3rem;
    }
    .architecture-card {
        height: 400px;
        border-radius: 40px;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        overflow: hidden;
        transition: background 0.8s ease, border 0.8s ease, opacity 0.6s ease, transform 0.6s ease;
    }
    .architecture-shot {
        max-width: 80%;
        max-height: 70%;
        border-radius: 20px;
        object-fit: cover;
    }
    .placeholder {
        opacity: 0.2;
        font-size: 0.8rem;
        font-weight: 700;
        text-transform: uppercase;
    }
    .architecture-card h3 {
        margin-top: 20px;
        opacity: 0.8;
    }
    .enlargeable {
        cursor: zoom-in;
    }
    .crew-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
        gap: 2rem;
    }
    .crew-card {
        padding: 2rem;
        border-radius: 28px;
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
        transition: all 0.8s cubic-bezier(0.4, 0, 0.2, 1);
    }
    .crew-card.revealed:hover {
        transform: translateY(-10px);
        border-color: var(--hover-border) !important;
    }
    .portrait {
        width: 100%;
        aspect-ratio: 1 / 1;
        border-radius: 18px;
        overflow: hidden;
        position: relative;
        display: flex;
        align-items: center;
        justify-content: center;
        transition: background-color 0.8s ease;
    }
    .portrait-img {
        position: absolute;
        top: 0;
        left: 0;
        width: 100%;
        height: 100%;
        object-fit: cover;
        opacity: 0;
        transform: scale(1.1);
        transition: opacity 0.6s ease-out, transform 0.6s ease-out;
    }
    .portrait-img.shown {
        opacity: 1;
        transform: scale(1);
    }
    .portrait-icon {
        font-size: 48px;
        opacity: 0.2;
    }
    .role-icon {
        width: fit-content;
        padding: 12px;
        border-radius: 12px;
        margin-bottom: 1.5rem;
        font-size: 24px;
        transition: all 0.8s ease;
    }
    .member-name {
        margin: 0;
        font-size: 1.5rem;
        font-weight: 600;
    }
    .member-role {
        font-size: 0.9rem;
        font-weight: 500;
        margin: 8px 0 16px 0;
        text-transform: uppercase;
        letter-spacing: 0.05em;
    }
    .member-bio {
        font-size: 1rem;
        line-height: 1.6;
        margin: 0;
    }
    .deep-dive {
        max-width: 900px;
    }
    .deep-dive-title {
        font-size: 3.5rem;
        font-weight: 800;
        margin-bottom: 2rem;
    }
    .deep-dive-summary {
        font-size: 1.2rem;
        opacity: 0.8;
        line-height: 1.8;
        margin-bottom: 3rem;
    }
    .deep-dive-columns {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 4rem;
    }
    .deep-dive-columns h4 {
        margin-bottom: 1rem;
    }
    .deep-dive-columns p {
        font-size: 0.9rem;
        opacity: 0.7;
    }
    .gallery-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
        gap: 2rem;
    }
    .gallery-shot {
        margin: 0;
        padding: 1rem;
        border-radius: 24px;
        transition: background 0.8s ease, border 0.8s ease, opacity 0.6s ease, transform 0.6s ease;
    }
    .gallery-shot img {
        width: 100%;
        border-radius: 16px;
        display: block;
    }
    .gallery-shot figcaption {
        margin-top: 0.75rem;
        font-size: 0.85rem;
    }
    .reveal-rise {
        opacity: 0;
        transform: translateY(30px);
    }
    .reveal-scale {
        opacity: 0;
        transform: scale(0.9);
    }
    .reveal-rise.revealed, .reveal-scale.revealed {
        opacity: 1;
        transform: none;
    }
    .lightbox {
        position: fixed;
        inset: 0;
        z-index: 2147483647;
        background: rgba(0, 0, 0, 0.85);
        display: flex;
        align-items: center;
        justify-content: center;
        cursor: zoom-out;
        animation: lightbox-fade 0.25s ease forwards;
    }
    .lightbox.closing {
        animation: lightbox-fade 0.25s ease reverse forwards;
    }
    @keyframes lightbox-fade {
        from { opacity: 0; }
        to { opacity: 1; }
    }
    .lightbox-image {
        max-width: 92vw;
        max-height: 92vh;
        object-fit: contain;
        border-radius: 12px;
        cursor: default;
    }
    .lightbox-close {
        position: absolute;
        top: 2rem;
        right: 2rem;
        background: none;
        border: none;
        color: #ECEFF4;
        font-size: 2rem;
        cursor: pointer;
    }
    .site-footer {
        padding: 80px 7%;
        text-align: center;
        transition: border 0.8s ease;
    }
    .footer-brand {
        font-size: 1.2rem;
        font-weight: 700;
        margin-bottom: 1rem;
    }
    .footer-legal {
        opacity: 0.4;
        font-size: 0.8rem;
    }
    @media (max-width: 768px) {
        .nav-links {
            gap: 1.5rem;
        }
        .architecture-grid, .crew-grid {
            grid-template-columns: 1fr;
        }
        .deep-dive-columns {
            grid-template-columns: 1fr;
            gap: 2rem;
        }
        .deep-dive-title {
            font-size: 2.5rem;
        }
    }
"#;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub content: Rc<SiteContent>,
}

fn reveal_flags(frame: &ViewFrame, count: usize, id_for: fn(usize) -> String) -> Vec<bool> {
    (0..count).map(|i| frame.is_revealed(&id_for(i))).collect()
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let content = props.content.clone();
    let controller = use_mut_ref(|| {
        ViewStateController::new(&content.view, content.theme_triggers())
    });
    let frame = use_state(|| controller.borrow().frame());

    // Bridge window scroll/resize into the controller for the page's lifetime
    {
        let controller = controller.clone();
        let frame = frame.clone();
        let tracked = content.tracked_ids();
        use_effect_with_deps(
            move |_| {
                let signal = Signal::new();
                let subscription = ViewStateController::attach(
                    controller,
                    &signal,
                    move || measure_sections(&tracked),
                    move |next| frame.set(next),
                );
                let bridge = match BrowserBridge::attach(signal) {
                    Ok(bridge) => Some(bridge),
                    Err(e) => {
                        log::error!("Scroll effects disabled: {}", e);
                        None
                    }
                };
                move || {
                    drop(bridge);
                    drop(subscription);
                }
            },
            (),
        );
    }

    let on_select = {
        let controller = controller.clone();
        let frame = frame.clone();
        Callback::from(move |image: String| {
            let result = controller.borrow_mut().select_image(&image);
            match result {
                Ok(next) => frame.set(next),
                Err(e) => log::warn!("Ignoring lightbox request: {}", e),
            }
        })
    };
    let on_dismiss = {
        let controller = controller.clone();
        let frame = frame.clone();
        Callback::from(move |_: ()| {
            let next = controller.borrow_mut().dismiss_lightbox();
            if let Some(next) = next {
                frame.set(next);
            }
        })
    };

    let palette = frame.palette(&content.themes).clone();
    let light = frame.theme.is_light();
    let gallery = match &content.gallery {
        Some(gallery) => html! {
            <Gallery
                gallery={gallery.clone()}
                palette={palette.clone()}
                revealed={reveal_flags(&frame, gallery.shots.len(), gallery_shot_id)}
                on_select={on_select.clone()}
            />
        },
        None => html! {},
    };

    html! {
        <div
            class="landing-page"
            data-theme={frame.theme.as_str()}
            style={format!("background-color: {}; color: {};", palette.background, palette.text)}
        >
            <head>
                <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css" integrity="sha512-SnH5WK+bZxgPHs44uWIX+LLJAJ9/2PkPKZ5QiAj6Ta86w+fsb2TkcmfRyVX3pBnMFcV7oQPJkl9QevSCWr3W6A==" crossorigin="anonymous" referrerpolicy="no-referrer" />
            </head>
            <style>{LANDING_CSS}</style>
            <NavBar
                brand={content.brand.clone()}
                links={content.nav_links.clone()}
                visible={frame.nav_visible}
                palette={palette.clone()}
            />
            <Hero
                brand={content.brand.clone()}
                copy={content.hero.clone()}
                transform={frame.hero}
                accent={palette.accent.clone()}
            />
            <Architecture
                section={content.architecture.clone()}
                palette={palette.clone()}
                revealed={reveal_flags(&frame, content.architecture.cards.len(), architecture_card_id)}
                on_select={on_select.clone()}
            />
            <Crew
                section={content.crew.clone()}
                palette={palette.clone()}
                light={light}
                revealed={reveal_flags(&frame, content.crew.members.len(), crew_card_id)}
            />
            <DeepDive copy={content.deep_dive.clone()} accent={palette.accent.clone()} />
            {gallery}
            <Footer brand={content.brand.clone()} copy={content.footer.clone()} border={palette.border.clone()} />
            <Lightbox state={frame.lightbox.clone()} on_dismiss={on_dismiss} />
        </div>
    }
}
