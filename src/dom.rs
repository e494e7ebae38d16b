use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlCanvasElement, HtmlDivElement, HtmlElement};

use crate::object;

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

pub const BUTTON_CLASS: &str = "astra-player-button";
pub const PANEL_CLASS: &str = "astra-player-panel";
pub const SLIDE_CLASS: &str = "astra-player-slide";
pub const CANVAS_CLASS: &str = "astra-player-canvas";

fn document() -> Result<Document, String> {
    web_sys::window()
        .ok_or("Failed to get window")?
        .document()
        .ok_or_else(|| "Failed to get document".to_string())
}

pub fn create_element(
    tag_name: &str,
    attributes: &[(&str, &str)],
    inner_text: Option<&str>,
) -> Result<HtmlElement, String> {
    let element = document()?
        .create_element(tag_name)
        .map_err(|_| format!("Failed to create element: {}", tag_name))?;

    for (name, value) in attributes {
        element
            .set_attribute(name, value)
            .map_err(|_| format!("Failed to set attribute: {}", name))?;
    }

    let element = element
        .dyn_into::<HtmlElement>()
        .map_err(|_| format!("Element '{}' is not an HTML element", tag_name))?;

    if let Some(text) = inner_text {
        element.set_inner_text(text);
    }

    Ok(element)
}

// 默认的标记 class 在前，调用方属性可以覆盖它
fn create_with_class(
    tag_name: &str,
    class_name: &str,
    attributes: &[(&str, &str)],
    inner_text: Option<&str>,
) -> Result<HtmlElement, String> {
    let mut merged = vec![("class", class_name)];
    merged.extend_from_slice(attributes);
    create_element(tag_name, &merged, inner_text)
}

pub fn create_button(
    attributes: &[(&str, &str)],
    inner_text: Option<&str>,
) -> Result<HtmlButtonElement, String> {
    create_with_class("button", BUTTON_CLASS, attributes, inner_text)?
        .dyn_into::<HtmlButtonElement>()
        .map_err(|_| "Failed to cast to HtmlButtonElement".to_string())
}

pub fn create_panel(
    attributes: &[(&str, &str)],
    inner_text: Option<&str>,
) -> Result<HtmlDivElement, String> {
    create_with_class("div", PANEL_CLASS, attributes, inner_text)?
        .dyn_into::<HtmlDivElement>()
        .map_err(|_| "Failed to cast to HtmlDivElement".to_string())
}

pub fn create_slide(
    attributes: &[(&str, &str)],
    inner_text: Option<&str>,
) -> Result<HtmlDivElement, String> {
    create_with_class("div", SLIDE_CLASS, attributes, inner_text)?
        .dyn_into::<HtmlDivElement>()
        .map_err(|_| "Failed to cast to HtmlDivElement".to_string())
}

pub fn create_canvas(
    attributes: &[(&str, &str)],
    inner_text: Option<&str>,
) -> Result<HtmlCanvasElement, String> {
    create_with_class("canvas", CANVAS_CLASS, attributes, inner_text)?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| "Failed to cast to HtmlCanvasElement".to_string())
}

/// Creates a namespaced SVG element. Returns the abstract `Element`; callers
/// cast to the concrete subtype they need.
pub fn create_svg(tag_name: &str, attributes: &[(&str, &str)]) -> Result<Element, String> {
    let element = document()?
        .create_element_ns(Some(SVG_NAMESPACE), tag_name)
        .map_err(|_| format!("Failed to create SVG element: {}", tag_name))?;

    for (name, value) in attributes {
        element
            .set_attribute(name, value)
            .map_err(|_| format!("Failed to set attribute: {}", name))?;
    }

    Ok(element)
}

pub fn remove_all_children(element: &Element) {
    while let Some(child) = element.first_child() {
        let _ = element.remove_child(&child);
    }
}

/// Sets `attr_name` to the second value when `flag` holds, the first
/// otherwise.
pub fn toggle_aria_label(element: &Element, flag: bool, attr_name: &str, values: [&str; 2]) {
    let mut values = values;
    if !flag {
        object::swap(&mut values);
    }
    let _ = element.set_attribute(attr_name, values[1]);
}

/// Removes one class and adds the other; `flag` flips which is which.
pub fn toggle_two_class(element: &Element, flag: bool, classes: [&str; 2]) {
    let mut classes = classes;
    if !flag {
        object::swap(&mut classes);
    }
    let [removed, added] = classes;
    remove_class(element, removed);
    add_class(element, added);
}

pub fn toggle_class(element: &Element, class_name: &str) {
    let _ = element.class_list().toggle(class_name);
}

pub fn add_class(element: &Element, class_name: &str) {
    let _ = element.class_list().add_1(class_name);
}

pub fn remove_class(element: &Element, class_name: &str) {
    let _ = element.class_list().remove_1(class_name);
}

pub fn has_class(element: &Element, class_name: &str) -> bool {
    element.class_list().contains(class_name)
}
