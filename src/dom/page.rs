use crate::components::acknowledgement::Acknowledgement;

/// The slice of element behavior the site scripts rely on.
///
/// Implemented for `web_sys::Element` in the browser and for an in-memory
/// element in tests, so every behavior can run against a synthetic page.
pub trait PageElement: Clone + PartialEq {
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    /// Flips `class` and returns whether it is present afterwards.
    fn toggle_class(&self, class: &str) -> bool;
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);
    fn set_style(&self, property: &str, value: &str);
    fn style(&self, property: &str) -> Option<String>;
    fn offset_top(&self) -> f64;
    fn offset_height(&self) -> f64;
    /// Current value of a form control, empty for anything else.
    fn value(&self) -> String;
    fn text(&self) -> Option<String>;
    fn parent(&self) -> Option<Self>;
}

pub trait Page {
    type Element: PageElement;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
    fn query(&self, selector: &str) -> Option<Self::Element>;
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;

    fn scroll_y(&self) -> f64;
    fn inner_width(&self) -> f64;
    /// Animated scroll of the viewport to `top`.
    fn scroll_to(&self, top: f64);

    /// Installs document-wide style rules. Installing the same rules again is a no-op.
    fn install_global_style(&self, css: &str);

    /// Appends a rendered acknowledgement block to `container` and returns it.
    fn render_acknowledgement(
        &self,
        container: &Self::Element,
        acknowledgement: &Acknowledgement,
    ) -> Option<Self::Element>;

    fn supports_intersection_observer(&self) -> bool;
}
