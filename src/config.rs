use log::{warn, Level};
use serde::Deserialize;

use crate::dom::page::{Page, PageElement};

/// Id of the optional `<script type="application/json">` block carrying overrides.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Navbar is "scrolled" once the page offset is strictly above this.
    pub scroll_threshold: f64,
    /// Viewports narrower than this use the mobile background pair.
    pub breakpoint: f64,
    pub reveal_threshold: f64,
    pub lazy_threshold: f64,
    /// CSS margin around the viewport used by both visibility observers.
    pub root_margin: String,
    pub selectors: Selectors,
    pub backgrounds: Backgrounds,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: 100.0,
            breakpoint: 768.0,
            reveal_threshold: 0.1,
            lazy_threshold: 0.1,
            root_margin: "0px".to_string(),
            selectors: Selectors::default(),
            backgrounds: Backgrounds::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub navbar: String,
    pub hamburger: String,
    pub nav_panel: String,
    pub nav_items: String,
    pub anchors: String,
    pub form_id: String,
    pub fields: FieldIds,
    pub reveal_cards: String,
    pub lazy_images: String,
    pub hero: String,
    pub about_image: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            navbar: ".navbar".to_string(),
            hamburger: ".hamburger".to_string(),
            nav_panel: ".nav-links".to_string(),
            nav_items: ".nav-links li".to_string(),
            anchors: "a[href^=\"#\"]".to_string(),
            form_id: "survey-request-form".to_string(),
            fields: FieldIds::default(),
            reveal_cards: ".process-card, .cert-card, .exp-item, .about-image".to_string(),
            lazy_images: ".lazy-image".to_string(),
            hero: ".hero".to_string(),
            about_image: ".image-placeholder".to_string(),
        }
    }
}

/// Element ids of the survey request inputs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldIds {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub vessel_type: String,
    pub message: String,
}

impl Default for FieldIds {
    fn default() -> Self {
        Self {
            name: "name".to_string(),
            email: "email".to_string(),
            phone: "phone".to_string(),
            vessel_type: "vessel-type".to_string(),
            message: "message".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BackgroundPair {
    pub hero: String,
    pub about: String,
}

impl Default for BackgroundPair {
    fn default() -> Self {
        Self {
            hero: "linear-gradient(rgba(0, 0, 0, 0.5), rgba(0, 0, 0, 0.5)), url('../images/Marina.jpeg')"
                .to_string(),
            about: "linear-gradient(rgba(0, 0, 0, 0.3), rgba(0, 0, 0, 0.3)), url('../images/BoatBackGround1.jpeg')"
                .to_string(),
        }
    }
}

// Both pairs point at the same assets until mobile-sized images exist.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Backgrounds {
    pub mobile: BackgroundPair,
    pub desktop: BackgroundPair,
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Reads overrides from the page, falling back to defaults when the block
    /// is absent or malformed.
    pub fn load<P: Page>(page: &P) -> Self {
        let Some(raw) = page
            .element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|element| element.text())
        else {
            return Self::default();
        };

        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring malformed #{}: {}", CONFIG_ELEMENT_ID, e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::fake::FakePage;

    #[test]
    fn defaults_match_site_markup() {
        let config = SiteConfig::default();
        assert_eq!(config.scroll_threshold, 100.0);
        assert_eq!(config.breakpoint, 768.0);
        assert_eq!(config.reveal_threshold, 0.1);
        assert_eq!(config.root_margin, "0px");
        assert_eq!(config.selectors.form_id, "survey-request-form");
        assert_eq!(config.selectors.fields.vessel_type, "vessel-type");
        assert_eq!(config.backgrounds.mobile, config.backgrounds.desktop);
    }

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let config = SiteConfig::from_json(
            r##"{ "scroll_threshold": 40, "root_margin": "50px", "selectors": { "navbar": "#top" } }"##,
        )
        .unwrap();
        assert_eq!(config.scroll_threshold, 40.0);
        assert_eq!(config.root_margin, "50px");
        assert_eq!(config.selectors.navbar, "#top");
        assert_eq!(config.selectors.hamburger, ".hamburger");
        assert_eq!(config.breakpoint, 768.0);
    }

    #[test]
    fn load_without_config_block_uses_defaults() {
        let page = FakePage::new();
        assert_eq!(SiteConfig::load(&page), SiteConfig::default());
    }

    #[test]
    fn load_reads_config_block() {
        let page = FakePage::new();
        page.element("script")
            .with_id(CONFIG_ELEMENT_ID)
            .with_text(r#"{ "breakpoint": 1024 }"#);
        assert_eq!(SiteConfig::load(&page).breakpoint, 1024.0);
    }

    #[test]
    fn load_with_malformed_block_falls_back() {
        let page = FakePage::new();
        page.element("script")
            .with_id(CONFIG_ELEMENT_ID)
            .with_text("{ not json");
        assert_eq!(SiteConfig::load(&page), SiteConfig::default());
    }
}
