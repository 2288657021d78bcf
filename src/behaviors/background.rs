use log::debug;
use wasm_bindgen::JsValue;

use crate::config::{BackgroundPair, SiteConfig};
use crate::dom::browser::BrowserPage;
use crate::dom::listener::Attached;
use crate::dom::page::{Page, PageElement};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Mobile,
    Desktop,
}

pub fn layout_for(width: f64, breakpoint: f64) -> Layout {
    if width < breakpoint {
        Layout::Mobile
    } else {
        Layout::Desktop
    }
}

/// Picks hero and about-image backgrounds for the current viewport width.
pub struct ResponsiveBackground<P> {
    page: P,
    breakpoint: f64,
    mobile: BackgroundPair,
    desktop: BackgroundPair,
    hero_selector: String,
    about_selector: String,
}

impl<P: Page> ResponsiveBackground<P> {
    pub fn new(page: P, config: &SiteConfig) -> Self {
        Self {
            page,
            breakpoint: config.breakpoint,
            mobile: config.backgrounds.mobile.clone(),
            desktop: config.backgrounds.desktop.clone(),
            hero_selector: config.selectors.hero.clone(),
            about_selector: config.selectors.about_image.clone(),
        }
    }

    /// Looks both targets up again on every call; either may be absent.
    pub fn apply(&self) -> Layout {
        let layout = layout_for(self.page.inner_width(), self.breakpoint);
        let pair = match layout {
            Layout::Mobile => &self.mobile,
            Layout::Desktop => &self.desktop,
        };

        if let Some(hero) = self.page.query(&self.hero_selector) {
            hero.set_style("background-image", &pair.hero);
        }
        if let Some(about) = self.page.query(&self.about_selector) {
            about.set_style("background-image", &pair.about);
        }
        debug!("Applied {:?} backgrounds", layout);
        layout
    }
}

pub fn attach(page: &BrowserPage, config: &SiteConfig) -> Result<Attached, JsValue> {
    let background = ResponsiveBackground::new(page.clone(), config);
    background.apply();

    let mut attached = Attached::default();
    attached.listen(page.window(), "resize", move |_| {
        background.apply();
    })?;
    Ok(attached)
}
