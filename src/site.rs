use std::cell::RefCell;

use log::{error, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::PageTransitionEvent;

use crate::behaviors::mobile_menu::MobileMenu;
use crate::behaviors::{anchor_scroll, background, lazy_images, mobile_menu, navbar, reveal, survey_form};
use crate::config::{Selectors, SiteConfig};
use crate::dom::browser::BrowserPage;
use crate::dom::listener::Attached;
use crate::dom::page::Page;
use crate::error::SiteError;

thread_local! {
    static RUNNING: RefCell<Option<Site>> = RefCell::new(None);
}

fn required<P: Page>(page: &P, selector: &str) -> Result<P::Element, SiteError> {
    page.query(selector)
        .ok_or_else(|| SiteError::MissingElement(selector.to_string()))
}

/// Singletons every page must carry: navbar, hamburger and nav panel.
pub struct RequiredElements<E> {
    pub navbar: E,
    pub hamburger: E,
    pub nav_panel: E,
}

pub fn required_elements<P: Page>(
    page: &P,
    selectors: &Selectors,
) -> Result<RequiredElements<P::Element>, SiteError> {
    Ok(RequiredElements {
        navbar: required(page, &selectors.navbar)?,
        hamburger: required(page, &selectors.hamburger)?,
        nav_panel: required(page, &selectors.nav_panel)?,
    })
}

/// Every listener and observer the page scripts registered.
pub struct Site {
    attached: Vec<Attached>,
}

impl Site {
    pub fn start(page: &BrowserPage, config: &SiteConfig) -> Result<Self, JsValue> {
        let selectors = &config.selectors;
        let RequiredElements {
            navbar: navbar_element,
            hamburger,
            nav_panel,
        } = required_elements(page, selectors)?;

        let mut attached = vec![
            navbar::attach(page, navbar_element.clone(), config.scroll_threshold)?,
            mobile_menu::attach(
                MobileMenu::new(hamburger, nav_panel),
                page.query_all(&selectors.nav_items),
            )?,
            anchor_scroll::attach(page, navbar_element, page.query_all(&selectors.anchors))?,
        ];

        if let Some(form) = page.element_by_id(&selectors.form_id) {
            attached.push(survey_form::attach(page, form, selectors.fields.clone())?);
        }

        attached.push(reveal::attach(
            page,
            &selectors.reveal_cards,
            config.reveal_threshold,
            &config.root_margin,
        )?);
        attached.push(lazy_images::attach(
            page,
            &selectors.lazy_images,
            config.lazy_threshold,
            &config.root_margin,
        )?);
        attached.push(background::attach(page, config)?);

        let site = Self { attached };
        info!("Site behaviors attached ({} bindings)", site.bindings());
        Ok(site)
    }

    pub fn bindings(&self) -> usize {
        self.attached.iter().map(Attached::count).sum()
    }

    pub fn detach(self) {
        for attached in self.attached {
            attached.detach();
        }
    }
}

/// Holds `site` until `release` is called. Replaces and detaches any previous one.
fn keep(site: Site) {
    if let Some(previous) = RUNNING.with(|running| running.borrow_mut().replace(site)) {
        previous.detach();
    }
}

/// Detaches the running site, if any. Returns whether there was one.
fn release() -> bool {
    match RUNNING.with(|running| running.borrow_mut().take()) {
        Some(site) => {
            site.detach();
            info!("Site behaviors detached");
            true
        }
        None => false,
    }
}

fn boot(page: BrowserPage) {
    let config = SiteConfig::load(&page);
    let site = match Site::start(&page, &config) {
        Ok(site) => site,
        Err(e) => {
            error!("Site behaviors not started: {:?}", e);
            return;
        }
    };
    keep(site);

    // Pages kept in the back/forward cache stay attached for when they return
    let on_pagehide = Closure::wrap(Box::new(|e: web_sys::Event| {
        let persisted = e
            .dyn_ref::<PageTransitionEvent>()
            .map_or(false, |e| e.persisted());
        if !persisted {
            release();
        }
    }) as Box<dyn FnMut(web_sys::Event)>);
    if let Err(e) = page
        .window()
        .add_event_listener_with_callback("pagehide", on_pagehide.as_ref().unchecked_ref())
    {
        error!("Failed to listen for pagehide: {:?}", e);
    }
    on_pagehide.forget();
}

/// Starts the page scripts once the document has been parsed.
pub fn run_when_ready() {
    let Some(page) = BrowserPage::current() else {
        error!("No window or document available");
        return;
    };

    if page.document().ready_state() != "loading" {
        boot(page);
        return;
    }

    let document = page.document().clone();
    let on_ready = Closure::once_into_js(move || boot(page));
    if let Err(e) =
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
    {
        error!("Failed to wait for DOMContentLoaded: {:?}", e);
    }
}
