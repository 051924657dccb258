use serde::Deserialize;

use crate::error::ContentError;
use crate::view_state::theme::ThemeSet;
use crate::view_state::ViewTuning;

const BUNDLED_CONTENT: &str = include_str!("../content/site.json");

/// Prefix for image paths, set at build time for hosts that serve assets
/// from a sub-path or CDN.
pub fn get_asset_base() -> &'static str {
    option_env!("AETHER_ASSET_BASE").unwrap_or("")
}

pub fn asset_url(path: &str) -> String {
    let base = get_asset_base().trim_end_matches('/');
    if base.is_empty() || path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Brand {
    pub name: String,
    pub accent: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HeroCopy {
    pub badge: String,
    pub blurb: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ArchitectureCard {
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ArchitectureSection {
    pub title: String,
    pub cards: Vec<ArchitectureCard>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconKind {
    Layout,
    Database,
    Cpu,
}

impl IconKind {
    pub fn class(self) -> &'static str {
        match self {
            Self::Layout => "fa-solid fa-table-columns",
            Self::Database => "fa-solid fa-database",
            Self::Cpu => "fa-solid fa-microchip",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub icon: IconKind,
    pub portrait: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CrewSection {
    pub section_id: String,
    pub title: String,
    pub subtitle: String,
    pub members: Vec<TeamMember>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeepDiveColumn {
    pub heading: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeepDive {
    pub section_id: String,
    pub heading: String,
    pub heading_accent: String,
    pub summary: String,
    pub columns: Vec<DeepDiveColumn>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Screenshot {
    pub image: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Gallery {
    pub title: String,
    pub shots: Vec<Screenshot>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Footer {
    pub legal: String,
}

/// All copy, imagery and palettes for one rendition of the landing page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteContent {
    pub brand: Brand,
    pub nav_links: Vec<NavLink>,
    pub hero: HeroCopy,
    pub architecture: ArchitectureSection,
    pub crew: CrewSection,
    pub deep_dive: DeepDive,
    #[serde(default)]
    pub gallery: Option<Gallery>,
    pub footer: Footer,
    #[serde(default)]
    pub themes: ThemeSet,
    #[serde(default)]
    pub view: ViewTuning,
}

impl SiteContent {
    pub fn bundled() -> Result<Self, ContentError> {
        Self::from_json(BUNDLED_CONTENT)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let content: Self = serde_json::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.brand.name.trim().is_empty() {
            return Err(ContentError::Invalid("brand name is empty".into()));
        }
        if self.crew.section_id.trim().is_empty() {
            return Err(ContentError::Invalid("crew section id is empty".into()));
        }
        if self.crew.members.is_empty() {
            return Err(ContentError::Invalid("crew has no members".into()));
        }
        if let Some(member) = self.crew.members.iter().find(|m| m.portrait.trim().is_empty()) {
            return Err(ContentError::Invalid(format!("{} has no portrait", member.name)));
        }
        if self.images().any(|image| image.trim().is_empty()) {
            return Err(ContentError::Invalid("empty image reference".into()));
        }
        let view = &self.view;
        for (name, value) in [
            ("nav_threshold", view.nav_threshold),
            ("hero_min_scale", view.hero_min_scale),
            ("hero_range_end", view.hero_range_end),
        ] {
            if !value.is_finite() {
                return Err(ContentError::Invalid(format!("{name} must be finite")));
            }
        }
        if view.hero_range_end <= 0.0 {
            return Err(ContentError::Invalid("hero range must be positive".into()));
        }
        Ok(())
    }

    /// Every image that can be opened in the lightbox.
    pub fn images(&self) -> impl Iterator<Item = &str> {
        let cards = self.architecture.cards.iter().filter_map(|c| c.image.as_deref());
        let shots = self
            .gallery
            .iter()
            .flat_map(|g| g.shots.iter().map(|s| s.image.as_str()));
        cards.chain(shots)
    }

    /// Sections that switch the page to the light palette while centred in
    /// the viewport.
    pub fn theme_triggers(&self) -> Vec<String> {
        vec![self.crew.section_id.clone()]
    }

    /// Element ids whose geometry is sampled on every scroll, in document
    /// order.
    pub fn tracked_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = (0..self.architecture.cards.len())
            .map(architecture_card_id)
            .collect();
        ids.push(self.crew.section_id.clone());
        ids.extend((0..self.crew.members.len()).map(crew_card_id));
        if let Some(gallery) = &self.gallery {
            ids.extend((0..gallery.shots.len()).map(gallery_shot_id));
        }
        ids
    }
}

pub fn architecture_card_id(index: usize) -> String {
    format!("architecture-{index}")
}

pub fn crew_card_id(index: usize) -> String {
    format!("crew-{index}")
}

pub fn gallery_shot_id(index: usize) -> String {
    format!("shot-{index}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_content_loads() {
        let content = SiteContent::bundled().unwrap();
        assert_eq!(content.brand.name, "GEEK");
        assert_eq!(content.crew.members.len(), 3);
        assert_eq!(content.crew.section_id, "about");
        assert_eq!(content.view, ViewTuning::default());
        assert_eq!(content.themes, ThemeSet::nord());
    }

    #[test]
    fn tracked_ids_follow_document_order() {
        let content = SiteContent::bundled().unwrap();
        let ids = content.tracked_ids();
        let crew = ids.iter().position(|id| id == "about").unwrap();
        assert!(ids[..crew].iter().all(|id| id.starts_with("architecture-")));
        assert_eq!(ids[crew + 1], "crew-0");
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(SiteContent::from_json("{"), Err(ContentError::Parse(_))));
    }

    #[test]
    fn rejects_empty_crew() {
        let mut value: serde_json::Value = serde_json::from_str(BUNDLED_CONTENT).unwrap();
        value["crew"]["members"] = serde_json::json!([]);
        let err = SiteContent::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, ContentError::Invalid(_)));
    }

    #[test]
    fn rejects_blank_image() {
        let mut value: serde_json::Value = serde_json::from_str(BUNDLED_CONTENT).unwrap();
        value["architecture"]["cards"][0]["image"] = serde_json::json!("");
        assert!(SiteContent::from_json(&value.to_string()).is_err());
    }

    #[test]
    fn rejects_non_finite_tuning() {
        let base = SiteContent::bundled().unwrap();
        let tunings = [
            ViewTuning { nav_threshold: f64::NAN, ..ViewTuning::default() },
            ViewTuning { nav_threshold: f64::INFINITY, ..ViewTuning::default() },
            ViewTuning { hero_min_scale: f64::NAN, ..ViewTuning::default() },
            ViewTuning { hero_min_scale: f64::NEG_INFINITY, ..ViewTuning::default() },
            ViewTuning { hero_range_end: f64::INFINITY, ..ViewTuning::default() },
            ViewTuning { hero_range_end: f64::NAN, ..ViewTuning::default() },
            ViewTuning { hero_range_end: 0.0, ..ViewTuning::default() },
        ];
        for view in tunings {
            let content = SiteContent { view: view.clone(), ..base.clone() };
            assert!(
                matches!(content.validate(), Err(ContentError::Invalid(_))),
                "accepted {view:?}"
            );
        }
    }

    #[test]
    #[allow(overflowing_literals)]
    fn overflowing_tuning_from_json_is_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(BUNDLED_CONTENT).unwrap();
        value["view"] = serde_json::json!({ "nav_threshold": 1e400 });
        assert!(SiteContent::from_json(&value.to_string()).is_err());
    }

    #[test]
    fn deep_dive_copy_and_placeholders_are_bundled() {
        let content = SiteContent::bundled().unwrap();
        let software = content
            .deep_dive
            .columns
            .iter()
            .find(|c| c.heading == "SOFTWARE")
            .unwrap();
        assert_eq!(software.body, "A React-based frontend designed for extreme conditions.");
        assert!(content.architecture.cards.iter().all(|c| c.image.is_none()));
    }

    #[test]
    fn asset_url_passes_through_without_base() {
        if get_asset_base().is_empty() {
            assert_eq!(asset_url("maxPortrait.png"), "maxPortrait.png");
        }
        assert_eq!(asset_url("https://cdn.example/x.png"), "https://cdn.example/x.png");
    }
}
