// Errors raised while wiring the field into the host page

use std::fmt;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq)]
pub enum DotsError {
    NoWindow,
    NoDocument,
    MissingContainer(String),
    // A DOM call threw; holds the debug rendering of the thrown value
    Js(String),
}

impl fmt::Display for DotsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DotsError::NoWindow => write!(f, "no global `window` exists"),
            DotsError::NoDocument => write!(f, "window has no `document`"),
            DotsError::MissingContainer(id) => write!(f, "no element with id `{}`", id),
            DotsError::Js(msg) => write!(f, "javascript error: {}", msg),
        }
    }
}

impl std::error::Error for DotsError {}

impl From<JsValue> for DotsError {
    fn from(value: JsValue) -> Self {
        DotsError::Js(format!("{:?}", value))
    }
}

impl From<DotsError> for JsValue {
    fn from(err: DotsError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
