use log::info;
use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::components::acknowledgement::{Acknowledgement, PANEL_STYLE};
use crate::config::FieldIds;
use crate::dom::browser::BrowserPage;
use crate::dom::listener::Attached;
use crate::dom::page::{Page, PageElement};

/// Field values captured at the moment of submission. Nothing is validated.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SurveyRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub vessel_type: String,
    pub message: String,
}

/// Replaces the survey form with a local acknowledgement. No request is sent.
pub struct SurveyForm<P: Page> {
    page: P,
    form: P::Element,
    fields: FieldIds,
}

impl<P: Page> SurveyForm<P> {
    pub fn new(page: P, form: P::Element, fields: FieldIds) -> Self {
        Self { page, form, fields }
    }

    fn field(&self, id: &str) -> String {
        self.page
            .element_by_id(id)
            .map(|input| input.value())
            .unwrap_or_default()
    }

    pub fn read(&self) -> SurveyRequest {
        SurveyRequest {
            name: self.field(&self.fields.name),
            email: self.field(&self.fields.email),
            phone: self.field(&self.fields.phone),
            vessel_type: self.field(&self.fields.vessel_type),
            message: self.field(&self.fields.message),
        }
    }

    /// Hides the form and mounts the acknowledgement next to it. Returns the
    /// new panel.
    pub fn submit(&self) -> Option<P::Element> {
        let acknowledgement = Acknowledgement::from(&self.read());

        self.form.set_style("display", "none");
        let container = self.form.parent()?;
        let panel = self.page.render_acknowledgement(&container, &acknowledgement)?;
        for (property, value) in PANEL_STYLE {
            panel.set_style(property, value);
        }
        info!("Survey request acknowledged locally");
        Some(panel)
    }
}

pub fn attach(page: &BrowserPage, form: Element, fields: FieldIds) -> Result<Attached, JsValue> {
    let survey = SurveyForm::new(page.clone(), form.clone(), fields);

    let mut attached = Attached::default();
    attached.listen(&form, "submit", move |e| {
        e.prevent_default();
        survey.submit();
    })?;
    Ok(attached)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::fake::{FakeElement, FakePage};

    fn page_with_form(vessel_type: &str, message: &str) -> (FakePage, FakeElement, FakeElement) {
        let page = FakePage::new();
        let container = page.element("div").with_class("form-container");
        let form = page
            .element("form")
            .with_id("survey-request-form")
            .child_of(&container);
        page.element("input").with_id("name").with_value("Jane").child_of(&form);
        page.element("input").with_id("email").with_value("jane@x.com").child_of(&form);
        page.element("input").with_id("phone").with_value("555-1234").child_of(&form);
        page.element("select").with_id("vessel-type").with_value(vessel_type).child_of(&form);
        page.element("textarea").with_id("message").with_value(message).child_of(&form);
        (page, container, form)
    }

    #[test]
    fn submit_replaces_form_with_acknowledgement() {
        let (page, container, form) = page_with_form("", "");
        let survey = SurveyForm::new(page.clone(), form.clone(), FieldIds::default());

        let panel = survey.submit().expect("panel is rendered");

        let text = panel.text().unwrap();
        for expected in ["Jane", "jane@x.com", "555-1234", "Not specified", "None"] {
            assert!(text.contains(expected), "missing {:?} in {:?}", expected, text);
        }
        assert_eq!(form.style("display").as_deref(), Some("none"));
        assert_eq!(container.children(), vec![form, panel.clone()]);
        assert!(panel.has_class("success-message"));
        assert_eq!(panel.style("background-color").as_deref(), Some("#e8f5e9"));
        assert_eq!(panel.style("padding").as_deref(), Some("20px"));
        assert_eq!(panel.style("border-radius").as_deref(), Some("8px"));
        assert_eq!(panel.style("border").as_deref(), Some("1px solid #a5d6a7"));
    }

    #[test]
    fn read_takes_current_values_without_validation() {
        let (page, _, form) = page_with_form("Trawler", "Pre-purchase survey");
        let survey = SurveyForm::new(page.clone(), form, FieldIds::default());

        assert_eq!(
            survey.read(),
            SurveyRequest {
                name: "Jane".to_string(),
                email: "jane@x.com".to_string(),
                phone: "555-1234".to_string(),
                vessel_type: "Trawler".to_string(),
                message: "Pre-purchase survey".to_string(),
            }
        );
    }

    #[test]
    fn missing_fields_read_as_empty() {
        let page = FakePage::new();
        let container = page.element("div");
        let form = page.element("form").child_of(&container);
        let survey = SurveyForm::new(page.clone(), form, FieldIds::default());

        assert_eq!(survey.read(), SurveyRequest::default());
        survey.submit();
        let acknowledgements = page.acknowledgements();
        assert_eq!(acknowledgements.len(), 1);
        assert_eq!(acknowledgements[0].heading, "Thank you, !");
    }

    #[test]
    fn detached_form_is_hidden_without_panel() {
        let page = FakePage::new();
        let form = page.element("form");
        let survey = SurveyForm::new(page.clone(), form.clone(), FieldIds::default());

        assert!(survey.submit().is_none());
        assert_eq!(form.style("display").as_deref(), Some("none"));
        assert!(page.acknowledgements().is_empty());
    }
}
