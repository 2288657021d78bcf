//! In-memory page used by the unit tests.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use crate::components::acknowledgement::Acknowledgement;
use crate::dom::page::{Page, PageElement};

#[derive(Default)]
struct Node {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    offset_top: f64,
    offset_height: f64,
    value: String,
    text: Option<String>,
    parent: Weak<RefCell<Node>>,
    children: Vec<FakeElement>,
}

#[derive(Clone)]
pub struct FakeElement(Rc<RefCell<Node>>);

impl PartialEq for FakeElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for FakeElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let node = self.0.borrow();
        write!(f, "<{} id={:?} class={:?}>", node.tag, node.id, node.classes)
    }
}

impl FakeElement {
    fn new(tag: &str) -> Self {
        Self(Rc::new(RefCell::new(Node {
            tag: tag.to_string(),
            ..Node::default()
        })))
    }

    pub fn with_id(self, id: &str) -> Self {
        self.0.borrow_mut().id = Some(id.to_string());
        self
    }

    pub fn with_class(self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn with_text(self, text: &str) -> Self {
        self.0.borrow_mut().text = Some(text.to_string());
        self
    }

    pub fn with_value(self, value: &str) -> Self {
        self.0.borrow_mut().value = value.to_string();
        self
    }

    pub fn with_offsets(self, top: f64, height: f64) -> Self {
        {
            let mut node = self.0.borrow_mut();
            node.offset_top = top;
            node.offset_height = height;
        }
        self
    }

    pub fn child_of(self, parent: &FakeElement) -> Self {
        self.0.borrow_mut().parent = Rc::downgrade(&parent.0);
        parent.0.borrow_mut().children.push(self.clone());
        self
    }

    pub fn children(&self) -> Vec<FakeElement> {
        self.0.borrow().children.clone()
    }

    pub fn classes(&self) -> Vec<String> {
        self.0.borrow().classes.clone()
    }

    fn matches(&self, selector: &str) -> bool {
        let node = self.0.borrow();
        if let Some(class) = selector.strip_prefix('.') {
            node.classes.iter().any(|c| c == class)
        } else if let Some(id) = selector.strip_prefix('#') {
            node.id.as_deref() == Some(id)
        } else {
            node.tag == selector
        }
    }
}

impl PageElement for FakeElement {
    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    fn add_class(&self, class: &str) {
        if !self.has_class(class) {
            self.0.borrow_mut().classes.push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.0.borrow_mut().classes.retain(|c| c != class);
    }

    fn toggle_class(&self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn set_style(&self, property: &str, value: &str) {
        self.0
            .borrow_mut()
            .styles
            .insert(property.to_string(), value.to_string());
    }

    fn style(&self, property: &str) -> Option<String> {
        self.0.borrow().styles.get(property).cloned()
    }

    fn offset_top(&self) -> f64 {
        self.0.borrow().offset_top
    }

    fn offset_height(&self) -> f64 {
        self.0.borrow().offset_height
    }

    fn value(&self) -> String {
        self.0.borrow().value.clone()
    }

    fn text(&self) -> Option<String> {
        self.0.borrow().text.clone()
    }

    fn parent(&self) -> Option<Self> {
        self.0.borrow().parent.upgrade().map(FakeElement)
    }
}

#[derive(Default)]
struct PageState {
    elements: Vec<FakeElement>,
    scroll_y: f64,
    inner_width: f64,
    scrolls: Vec<f64>,
    stylesheets: Vec<String>,
    acknowledgements: Vec<Acknowledgement>,
    without_observer: bool,
}

/// A flat document. Selectors understand `.class`, `#id`, bare tag names and
/// comma-separated lists of those.
#[derive(Clone, Default)]
pub struct FakePage(Rc<RefCell<PageState>>);

impl FakePage {
    pub fn new() -> Self {
        let page = Self::default();
        page.set_inner_width(1280.0);
        page
    }

    pub fn without_intersection_observer(self) -> Self {
        self.0.borrow_mut().without_observer = true;
        self
    }

    /// Creates an element and registers it with the page.
    pub fn element(&self, tag: &str) -> FakeElement {
        let element = FakeElement::new(tag);
        self.0.borrow_mut().elements.push(element.clone());
        element
    }

    pub fn set_scroll_y(&self, offset: f64) {
        self.0.borrow_mut().scroll_y = offset;
    }

    pub fn set_inner_width(&self, width: f64) {
        self.0.borrow_mut().inner_width = width;
    }

    pub fn scrolls(&self) -> Vec<f64> {
        self.0.borrow().scrolls.clone()
    }

    pub fn stylesheets(&self) -> Vec<String> {
        self.0.borrow().stylesheets.clone()
    }

    pub fn acknowledgements(&self) -> Vec<Acknowledgement> {
        self.0.borrow().acknowledgements.clone()
    }
}

impl Page for FakePage {
    type Element = FakeElement;

    fn element_by_id(&self, id: &str) -> Option<FakeElement> {
        self.0
            .borrow()
            .elements
            .iter()
            .find(|e| e.0.borrow().id.as_deref() == Some(id))
            .cloned()
    }

    fn query(&self, selector: &str) -> Option<FakeElement> {
        self.query_all(selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<FakeElement> {
        let parts: Vec<&str> = selector.split(',').map(str::trim).collect();
        self.0
            .borrow()
            .elements
            .iter()
            .filter(|e| parts.iter().any(|part| e.matches(part)))
            .cloned()
            .collect()
    }

    fn scroll_y(&self) -> f64 {
        self.0.borrow().scroll_y
    }

    fn inner_width(&self) -> f64 {
        self.0.borrow().inner_width
    }

    fn scroll_to(&self, top: f64) {
        let mut state = self.0.borrow_mut();
        state.scroll_y = top;
        state.scrolls.push(top);
    }

    fn install_global_style(&self, css: &str) {
        let mut state = self.0.borrow_mut();
        if !state.stylesheets.iter().any(|s| s == css) {
            state.stylesheets.push(css.to_string());
        }
    }

    fn render_acknowledgement(
        &self,
        container: &FakeElement,
        acknowledgement: &Acknowledgement,
    ) -> Option<FakeElement> {
        let panel = self
            .element("div")
            .with_class("success-message")
            .with_text(&acknowledgement.to_text())
            .child_of(container);
        self.0
            .borrow_mut()
            .acknowledgements
            .push(acknowledgement.clone());
        Some(panel)
    }

    fn supports_intersection_observer(&self) -> bool {
        !self.0.borrow().without_observer
    }
}
