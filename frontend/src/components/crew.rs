use yew::prelude::*;

use crate::config::{asset_url, crew_card_id, CrewSection, TeamMember};
use crate::view_state::theme::Palette;

#[derive(Properties, PartialEq, Clone)]
pub struct TeamMemberCardProps {
    pub id: String,
    pub member: TeamMember,
    pub palette: Palette,
    pub light: bool,
    pub revealed: bool,
}

/// Portrait shows only in light mode; dark mode shows the role icon.
#[function_component]
pub fn TeamMemberCard(props: &TeamMemberCardProps) -> Html {
    let palette = &props.palette;
    let member = &props.member;
    let shadow = if props.light { "0 20px 40px rgba(0,0,0,0.05)" } else { "none" };
    html! {
        <div
            id={props.id.clone()}
            class={classes!("crew-card", "reveal-rise", props.revealed.then_some("revealed"))}
            style={format!(
                "background: {}; border: 1px solid {}; box-shadow: {}; --hover-border: {};",
                palette.surface, palette.border, shadow, palette.accent
            )}
        >
            <div class="portrait" style={format!("background-color: {};", palette.inset)}>
                <img
                    class={classes!("portrait-img", props.light.then_some("shown"))}
                    src={asset_url(&member.portrait)}
                    alt={member.name.clone()}
                />
                if !props.light {
                    <i class={classes!("portrait-icon", member.icon.class())} style={format!("color: {};", palette.accent)}></i>
                }
            </div>
            <div>
                <div class="role-icon" style={format!("color: {}; background: {};", palette.accent, palette.inset)}>
                    <i class={member.icon.class()}></i>
                </div>
                <h3 class="member-name">{&member.name}</h3>
                <p class="member-role" style={format!("color: {};", palette.accent)}>{&member.role}</p>
                <p class="member-bio" style={format!("color: {};", palette.muted)}>{&member.bio}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct CrewProps {
    pub section: CrewSection,
    pub palette: Palette,
    pub light: bool,
    pub revealed: Vec<bool>,
}

/// The crew section doubles as the light-mode trigger.
#[function_component]
pub fn Crew(props: &CrewProps) -> Html {
    html! {
        <section id={props.section.section_id.clone()} class="section">
            <div class="section-inner">
                <div class="section-heading">
                    <h2 class="section-title">{&props.section.title}</h2>
                    <p class="section-subtitle" style={format!("color: {};", props.palette.accent)}>
                        {&props.section.subtitle}
                    </p>
                </div>
                <div class="crew-grid">
                    { for props.section.members.iter().enumerate().map(|(i, member)| html! {
                        <TeamMemberCard
                            id={crew_card_id(i)}
                            member={member.clone()}
                            palette={props.palette.clone()}
                            light={props.light}
                            revealed={props.revealed.get(i).copied().unwrap_or(false)}
                        />
                    }) }
                </div>
            </div>
        </section>
    }
}
