use std::rc::Rc;

use log::debug;
use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::dom::browser::BrowserPage;
use crate::dom::listener::Attached;
use crate::dom::page::{Page, PageElement};

/// Element id referenced by a same-page `href`, if it names one.
pub fn fragment_id(href: &str) -> Option<String> {
    let fragment = href.strip_prefix('#')?;
    let id = urlencoding::decode(fragment).ok()?;
    if id.is_empty() {
        None
    } else {
        Some(id.into_owned())
    }
}

/// Smooth-scrolls to in-page sections, leaving room for the fixed navbar.
pub struct AnchorScroller<P: Page> {
    page: P,
    navbar: P::Element,
}

impl<P: Page> AnchorScroller<P> {
    pub fn new(page: P, navbar: P::Element) -> Self {
        Self { page, navbar }
    }

    pub fn target_position(&self, href: &str) -> Option<f64> {
        let id = fragment_id(href)?;
        let section = self.page.element_by_id(&id)?;
        Some(section.offset_top() - self.navbar.offset_height())
    }

    /// Scrolls to the section `href` points at. Returns the scroll target, or
    /// `None` when there is nothing to scroll to.
    pub fn activate(&self, href: &str) -> Option<f64> {
        let top = self.target_position(href)?;
        debug!("Scrolling to {} for {}", top, href);
        self.page.scroll_to(top);
        Some(top)
    }
}

pub fn attach(page: &BrowserPage, navbar: Element, anchors: Vec<Element>) -> Result<Attached, JsValue> {
    let scroller = Rc::new(AnchorScroller::new(page.clone(), navbar));

    let mut attached = Attached::default();
    for anchor in anchors {
        let scroller = scroller.clone();
        let link = anchor.clone();
        attached.listen(&anchor, "click", move |e| {
            e.prevent_default();
            if let Some(href) = link.attribute("href") {
                scroller.activate(&href);
            }
        })?;
    }
    Ok(attached)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::fake::{FakeElement, FakePage};

    fn scroller(page: &FakePage, navbar_height: f64) -> AnchorScroller<FakePage> {
        let navbar: FakeElement = page.element("nav").with_offsets(0.0, navbar_height);
        AnchorScroller::new(page.clone(), navbar)
    }

    #[test]
    fn scrolls_to_section_minus_navbar_height() {
        let page = FakePage::new();
        page.element("section").with_id("services").with_offsets(1200.0, 0.0);
        let scroller = scroller(&page, 80.0);

        assert_eq!(scroller.activate("#services"), Some(1120.0));
        assert_eq!(page.scrolls(), vec![1120.0]);
        assert_eq!(page.scroll_y(), 1120.0);
    }

    #[test]
    fn bare_hash_and_missing_targets_do_not_scroll() {
        let page = FakePage::new();
        page.set_scroll_y(300.0);
        let scroller = scroller(&page, 80.0);

        assert_eq!(scroller.activate("#"), None);
        assert_eq!(scroller.activate("#nowhere"), None);
        assert_eq!(scroller.activate("/about#team"), None);
        assert!(page.scrolls().is_empty());
        assert_eq!(page.scroll_y(), 300.0);
    }

    #[test]
    fn fragment_ids_are_percent_decoded() {
        assert_eq!(fragment_id("#contact"), Some("contact".to_string()));
        assert_eq!(fragment_id("#hull%20survey"), Some("hull survey".to_string()));
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id("contact"), None);
    }

    #[test]
    fn target_near_top_can_go_negative() {
        let page = FakePage::new();
        page.element("header").with_id("home").with_offsets(0.0, 0.0);
        assert_eq!(scroller(&page, 72.0).target_position("#home"), Some(-72.0));
    }
}
