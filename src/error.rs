use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error, PartialEq)]
pub enum SiteError {
    #[error("missing required element `{0}`")]
    MissingElement(String),
}

impl From<SiteError> for JsValue {
    fn from(e: SiteError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}
