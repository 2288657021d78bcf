use log::warn;
use stylist::GlobalStyle;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement,
    ScrollBehavior, ScrollToOptions, Window,
};

use crate::components::acknowledgement::{
    Acknowledgement, AcknowledgementPanel, AcknowledgementProps, PANEL_CLASS,
};
use crate::dom::page::{Page, PageElement};

impl PageElement for Element {
    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        let _ = self.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.class_list().remove_1(class);
    }

    fn toggle_class(&self, class: &str) -> bool {
        self.class_list().toggle(class).unwrap_or(false)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        let _ = Element::set_attribute(self, name, value);
    }

    fn set_style(&self, property: &str, value: &str) {
        if let Some(html) = self.dyn_ref::<HtmlElement>() {
            let _ = html.style().set_property(property, value);
        }
    }

    fn style(&self, property: &str) -> Option<String> {
        self.dyn_ref::<HtmlElement>()
            .and_then(|html| html.style().get_property_value(property).ok())
            .filter(|value| !value.is_empty())
    }

    fn offset_top(&self) -> f64 {
        self.dyn_ref::<HtmlElement>()
            .map_or(0.0, |html| html.offset_top() as f64)
    }

    fn offset_height(&self) -> f64 {
        self.dyn_ref::<HtmlElement>()
            .map_or(0.0, |html| html.offset_height() as f64)
    }

    fn value(&self) -> String {
        if let Some(input) = self.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(select) = self.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else if let Some(textarea) = self.dyn_ref::<HtmlTextAreaElement>() {
            textarea.value()
        } else {
            String::new()
        }
    }

    fn text(&self) -> Option<String> {
        self.text_content()
    }

    fn parent(&self) -> Option<Self> {
        self.parent_element()
    }
}

/// The live document.
#[derive(Clone)]
pub struct BrowserPage {
    window: Window,
    document: Document,
}

impl BrowserPage {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self::new(window, document))
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl Page for BrowserPage {
    type Element = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        let Ok(nodes) = self.document.query_selector_all(selector) else {
            warn!("Invalid selector {:?}", selector);
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn inner_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|width| width.as_f64())
            .unwrap_or(0.0)
    }

    fn scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn install_global_style(&self, css: &str) {
        // Identical sheets are deduplicated by stylist's registry.
        if let Err(e) = GlobalStyle::new(css) {
            warn!("Failed to install global style: {}", e);
        }
    }

    fn render_acknowledgement(
        &self,
        container: &Element,
        acknowledgement: &Acknowledgement,
    ) -> Option<Element> {
        let panel = self.document.create_element("div").ok()?;
        panel.set_class_name(PANEL_CLASS);
        container.append_child(&panel).ok()?;

        yew::Renderer::<AcknowledgementPanel>::with_root_and_props(
            panel.clone(),
            AcknowledgementProps {
                acknowledgement: acknowledgement.clone(),
            },
        )
        .render();

        Some(panel)
    }

    fn supports_intersection_observer(&self) -> bool {
        web_sys::js_sys::Reflect::has(&self.window, &JsValue::from_str("IntersectionObserver"))
            .unwrap_or(false)
    }
}
