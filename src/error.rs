//! Setup errors
//!
//! Effects never fail once running; only wiring them to the page can.

use thiserror::Error;

/// Errors raised while attaching effects to the document
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FxError {
    /// No global `window`/`document` (not running in a page)
    #[error("no {0} available")]
    NoGlobal(&'static str),

    /// A required element is absent from the page
    #[error("missing element: {selector}")]
    MissingElement {
        /// Selector used for the lookup
        selector: String,
    },

    /// An element exists but is not of the expected kind
    #[error("element {selector} is not a {expected}")]
    WrongElementType {
        /// Selector used for the lookup
        selector: String,
        /// Expected DOM interface
        expected: &'static str,
    },

    /// A browser API call threw
    #[error("browser call failed: {0}")]
    Js(String),
}

impl FxError {
    pub fn missing(selector: impl Into<String>) -> Self {
        FxError::MissingElement {
            selector: selector.into(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for FxError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        FxError::Js(format!("{:?}", value))
    }
}

pub type FxResult<T> = Result<T, FxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_element_message() {
        let err = FxError::missing(".nav-toggle");
        assert_eq!(err.to_string(), "missing element: .nav-toggle");
    }

    #[test]
    fn test_wrong_type_message() {
        let err = FxError::WrongElementType {
            selector: "#bg-canvas".into(),
            expected: "HtmlCanvasElement",
        };
        assert_eq!(err.to_string(), "element #bg-canvas is not a HtmlCanvasElement");
    }
}
