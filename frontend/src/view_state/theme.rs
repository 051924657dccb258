use serde::Deserialize;

/// Which of the two fixed palettes is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// The crew section sitting on the viewport's centre line switches the
    /// page to light mode.
    pub fn from_proximity(in_view: bool) -> Self {
        if in_view {
            Self::Light
        } else {
            Self::Dark
        }
    }

    pub fn is_light(self) -> bool {
        self == Self::Light
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

/// Colours for one theme. `background`, `text` and `accent` drive the page;
/// the rest are the secondary tones cards and chrome switch along with it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Palette {
    pub background: String,
    pub text: String,
    pub accent: String,
    pub surface: String,
    pub inset: String,
    pub muted: String,
    pub border: String,
    pub nav_background: String,
    pub panel: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ThemeSet {
    pub dark: Palette,
    pub light: Palette,
}

impl ThemeSet {
    pub fn select(&self, mode: ThemeMode) -> &Palette {
        match mode {
            ThemeMode::Dark => &self.dark,
            ThemeMode::Light => &self.light,
        }
    }

    /// Nord-based palettes.
    pub fn nord() -> Self {
        Self {
            dark: Palette {
                background: "#2E3440".into(),
                text: "#ECEFF4".into(),
                accent: "#88C0D0".into(),
                surface: "#3B4252".into(),
                inset: "#242933".into(),
                muted: "#D8DEE9".into(),
                border: "rgba(255,255,255,0.05)".into(),
                nav_background: "rgba(46, 52, 64, 0.2)".into(),
                panel: "linear-gradient(135deg, #3B4252 0%, #242933 100%)".into(),
            },
            light: Palette {
                background: "#E5E9F0".into(),
                text: "#2E3440".into(),
                accent: "#5E81AC".into(),
                surface: "#FFFFFF".into(),
                inset: "#F8FAFC".into(),
                muted: "#4C566A".into(),
                border: "rgba(0,0,0,0.1)".into(),
                nav_background: "rgba(229, 233, 240, 0.8)".into(),
                panel: "#D8DEE9".into(),
            },
        }
    }
}

impl Default for ThemeSet {
    fn default() -> Self {
        Self::nord()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proximity_selects_palette() {
        let themes = ThemeSet::nord();
        let light = themes.select(ThemeMode::from_proximity(true));
        let dark = themes.select(ThemeMode::from_proximity(false));
        assert_eq!(light.background, "#E5E9F0");
        assert_eq!(light.accent, "#5E81AC");
        assert_eq!(dark.background, "#2E3440");
        assert_eq!(dark.text, "#ECEFF4");
    }

    #[test]
    fn mode_parses_from_lowercase() {
        let mode: ThemeMode = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(mode, ThemeMode::Light);
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
    }
}
