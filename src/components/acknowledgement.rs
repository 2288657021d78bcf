use yew::prelude::*;

use crate::behaviors::survey_form::SurveyRequest;

pub const PANEL_CLASS: &str = "success-message";

/// Inline look of the panel, applied after it is mounted.
pub const PANEL_STYLE: [(&str, &str); 4] = [
    ("background-color", "#e8f5e9"),
    ("padding", "20px"),
    ("border-radius", "8px"),
    ("border", "1px solid #a5d6a7"),
];

/// The text shown in place of the survey form once it is submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct Acknowledgement {
    pub heading: String,
    pub body: String,
    pub details: Vec<String>,
}

impl From<&SurveyRequest> for Acknowledgement {
    fn from(request: &SurveyRequest) -> Self {
        let vessel_type = or_fallback(&request.vessel_type, "Not specified");
        let message = or_fallback(&request.message, "None");

        Self {
            heading: format!("Thank you, {}!", request.name),
            body: format!(
                "Your survey request has been submitted successfully. We will contact you shortly at {} or {}.",
                request.email, request.phone
            ),
            details: vec![
                format!("Vessel Type: {}", vessel_type),
                format!("Message: {}", message),
            ],
        }
    }
}

fn or_fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

impl Acknowledgement {
    pub fn to_text(&self) -> String {
        let mut lines = vec![self.heading.clone(), self.body.clone(), "Details:".to_string()];
        lines.extend(self.details.iter().cloned());
        lines.join("\n")
    }
}

#[derive(Properties, PartialEq)]
pub struct AcknowledgementProps {
    pub acknowledgement: Acknowledgement,
}

#[function_component(AcknowledgementPanel)]
pub fn acknowledgement_panel(props: &AcknowledgementProps) -> Html {
    let Acknowledgement { heading, body, details } = &props.acknowledgement;

    html! {
        <>
            <h3>{ heading }</h3>
            <p>{ body }</p>
            <p>{"Details:"}</p>
            <ul>
                { for details.iter().map(|line| html! { <li>{ line }</li> }) }
            </ul>
        </>
    }
}
