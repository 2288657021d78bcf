use log::debug;
use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::dom::listener::Attached;
use crate::dom::page::PageElement;

pub const ACTIVE_CLASS: &str = "active";

/// Hamburger control and the navigation panel it opens, kept in lockstep.
#[derive(Clone)]
pub struct MobileMenu<E> {
    hamburger: E,
    panel: E,
}

impl<E: PageElement> MobileMenu<E> {
    pub fn new(hamburger: E, panel: E) -> Self {
        Self { hamburger, panel }
    }

    pub fn is_open(&self) -> bool {
        self.hamburger.has_class(ACTIVE_CLASS)
    }

    /// Flips the menu and returns whether it is now open.
    pub fn toggle(&self) -> bool {
        let open = self.hamburger.toggle_class(ACTIVE_CLASS);
        if open {
            self.panel.add_class(ACTIVE_CLASS);
        } else {
            self.panel.remove_class(ACTIVE_CLASS);
        }
        debug!("Mobile menu open: {}", open);
        open
    }

    pub fn close(&self) {
        self.hamburger.remove_class(ACTIVE_CLASS);
        self.panel.remove_class(ACTIVE_CLASS);
    }
}

pub fn attach(menu: MobileMenu<Element>, nav_items: Vec<Element>) -> Result<Attached, JsValue> {
    let mut attached = Attached::default();

    let toggle_menu = menu.clone();
    let hamburger = menu.hamburger.clone();
    attached.listen(&hamburger, "click", move |_| {
        toggle_menu.toggle();
    })?;

    for item in &nav_items {
        let close_menu = menu.clone();
        attached.listen(item, "click", move |_| close_menu.close())?;
    }
    Ok(attached)
}
