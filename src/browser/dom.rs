//! Thin `web-sys` helpers. Lookups that may find nothing return `Option`;
//! only genuine JavaScript exceptions become errors.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

use crate::error::{Error, Result};
use crate::geom::Rect;

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(Error::NoWindow)
}

pub fn document(window: &Window) -> Result<Document> {
    window.document().ok_or(Error::NoDocument)
}

/// First element matching `selector`.
pub fn query(document: &Document, selector: &str) -> Result<Option<Element>> {
    Ok(document.query_selector(selector)?)
}

/// First descendant of `parent` matching `selector`.
pub fn query_within(parent: &Element, selector: &str) -> Result<Option<Element>> {
    Ok(parent.query_selector(selector)?)
}

/// Every element matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    let list = document.query_selector_all(selector)?;
    let mut elements = Vec::with_capacity(list.length() as usize);
    for index in 0..list.length() {
        if let Some(node) = list.get(index) {
            if let Ok(element) = node.dyn_into::<Element>() {
                elements.push(element);
            }
        }
    }
    Ok(elements)
}

/// Narrow to `HtmlElement` (SVG and MathML elements have no inline style API here).
pub fn as_html(element: Element) -> Option<HtmlElement> {
    element.dyn_into::<HtmlElement>().into_iter().next()
}

pub fn query_html(document: &Document, selector: &str) -> Result<Option<HtmlElement>> {
    Ok(query(document, selector)?.and_then(as_html))
}

/// Whether `element` matches any selector in `selectors`.
pub fn matches_any(element: &Element, selectors: &[String]) -> Result<bool> {
    for selector in selectors {
        if element.matches(selector)? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Add (`on`) or remove a class.
pub fn set_class(element: &Element, class: &str, on: bool) -> Result<()> {
    let list = element.class_list();
    if on {
        list.add_1(class)?;
    } else {
        list.remove_1(class)?;
    }
    Ok(())
}

/// Set an inline style property; an empty value clears it.
pub fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<()> {
    element.style().set_property(property, value)?;
    Ok(())
}

/// Viewport-relative vertical box.
pub fn rect(element: &Element) -> Rect {
    let r = element.get_bounding_client_rect();
    Rect::new(r.top(), r.bottom())
}

/// Convert a numeric window property (`innerWidth` etc.), treating non-numbers as zero.
pub fn number(value: &JsValue) -> f64 {
    value.as_f64().unwrap_or(0.0)
}

pub fn inner_width(window: &Window) -> Result<f64> {
    Ok(number(&window.inner_width()?))
}

pub fn inner_height(window: &Window) -> Result<f64> {
    Ok(number(&window.inner_height()?))
}

pub fn scroll_y(window: &Window) -> Result<f64> {
    Ok(window.scroll_y()?)
}

/// Whether the runtime offers `IntersectionObserver`.
pub fn has_intersection_observer(window: &Window) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}
