//! Small DOM helpers
//!
//! Missing elements are logged and skipped rather than treated as fatal.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::motion::Rect;

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

pub fn by_id(document: &Document, id: &str) -> Option<Element> {
    let el = document.get_element_by_id(id);
    if el.is_none() {
        log::warn!("Missing element #{id}");
    }
    el
}

pub fn html_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    by_id(document, id)?.dyn_into::<HtmlElement>().ok()
}

/// Every element matching `selector` that is an `HtmlElement`
pub fn html_elements(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        log::warn!("Bad selector {selector}");
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn set_inner_html(document: &Document, id: &str, html: &str) {
    if let Some(el) = by_id(document, id) {
        el.set_inner_html(html);
    }
}

pub fn set_transform(el: &HtmlElement, transform: &str) {
    let _ = el.style().set_property("transform", transform);
}

pub fn set_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

pub fn set_hidden(document: &Document, id: &str, hidden: bool) {
    if let Some(el) = by_id(document, id) {
        let _ = if hidden {
            el.set_attribute("hidden", "")
        } else {
            el.remove_attribute("hidden")
        };
    }
}

pub fn bounding_rect(el: &Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    )
}

/// Window inner size in CSS pixels
pub fn viewport_size() -> (f32, f32) {
    let Some(window) = web_sys::window() else {
        return (0.0, 0.0);
    };
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (w as f32, h as f32)
}

/// Blocking browser alert
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
