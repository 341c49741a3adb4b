//! Element lookup and styling helpers

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::error::{FxError, FxResult};

pub fn window() -> FxResult<Window> {
    web_sys::window().ok_or(FxError::NoGlobal("window"))
}

pub fn document() -> FxResult<Document> {
    window()?.document().ok_or(FxError::NoGlobal("document"))
}

/// First element matching `selector`; absence is an error
pub fn query(document: &Document, selector: &str) -> FxResult<Element> {
    document
        .query_selector(selector)?
        .ok_or_else(|| FxError::missing(selector))
}

/// First element matching `selector`, if any
pub fn query_optional(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

/// Like [`query`], cast to `HtmlElement` so it can be styled
pub fn query_html(document: &Document, selector: &str) -> FxResult<HtmlElement> {
    into_html(query(document, selector)?, selector)
}

/// All elements matching `selector`, in document order
pub fn query_all(document: &Document, selector: &str) -> FxResult<Vec<Element>> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn into_html(element: Element, selector: &str) -> FxResult<HtmlElement> {
    element
        .dyn_into::<HtmlElement>()
        .map_err(|_| FxError::WrongElementType {
            selector: selector.to_string(),
            expected: "HtmlElement",
        })
}

/// Set an inline style property; an empty value clears it
pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let style = element.style();
    let result = if value.is_empty() {
        style.remove_property(property).map(|_| ())
    } else {
        style.set_property(property, value)
    };
    if let Err(e) = result {
        log::warn!("Failed to set {}: {:?}", property, e);
    }
}

/// Bounding box as (origin, size)
pub fn client_rect(element: &Element) -> (Vec2, Vec2) {
    let rect = element.get_bounding_client_rect();
    (
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
    )
}

pub fn viewport_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}
