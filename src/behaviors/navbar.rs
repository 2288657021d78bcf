use log::debug;
use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::dom::browser::BrowserPage;
use crate::dom::listener::Attached;
use crate::dom::page::{Page, PageElement};

pub const SCROLLED_CLASS: &str = "scrolled";

/// Marks the navbar once the page has scrolled past a fixed offset.
pub struct ScrollStateToggler<E> {
    navbar: E,
    threshold: f64,
}

impl<E: PageElement> ScrollStateToggler<E> {
    pub fn new(navbar: E, threshold: f64) -> Self {
        Self { navbar, threshold }
    }

    /// Returns whether the navbar is in the scrolled state afterwards.
    pub fn update(&self, offset: f64) -> bool {
        let scrolled = offset > self.threshold;
        if scrolled == self.navbar.has_class(SCROLLED_CLASS) {
            return scrolled;
        }

        if scrolled {
            self.navbar.add_class(SCROLLED_CLASS);
        } else {
            self.navbar.remove_class(SCROLLED_CLASS);
        }
        debug!("Navbar scrolled: {}", scrolled);
        scrolled
    }
}

pub fn attach(page: &BrowserPage, navbar: Element, threshold: f64) -> Result<Attached, JsValue> {
    let toggler = ScrollStateToggler::new(navbar, threshold);
    // Initial check for pages restored mid-scroll
    toggler.update(page.scroll_y());

    let mut attached = Attached::default();
    let scroll_page = page.clone();
    attached.listen(page.window(), "scroll", move |_| {
        toggler.update(scroll_page.scroll_y());
    })?;
    Ok(attached)
}
