#![cfg(target_arch = "wasm32")]

use astra_shared::dom;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn create_button_round_trip() {
    let button = dom::create_button(&[("id", "x")], Some("Play")).unwrap();

    assert_eq!(button.tag_name(), "BUTTON");
    assert!(dom::has_class(&button, dom::BUTTON_CLASS));
    assert_eq!(button.get_attribute("id").as_deref(), Some("x"));
    assert_eq!(button.inner_text(), "Play");
}

#[wasm_bindgen_test]
fn marked_constructors_use_their_marker_class() {
    let panel = dom::create_panel(&[], None).unwrap();
    assert_eq!(panel.tag_name(), "DIV");
    assert!(dom::has_class(&panel, dom::PANEL_CLASS));

    let slide = dom::create_slide(&[], None).unwrap();
    assert_eq!(slide.tag_name(), "DIV");
    assert!(dom::has_class(&slide, dom::SLIDE_CLASS));

    let canvas = dom::create_canvas(&[], None).unwrap();
    assert_eq!(canvas.tag_name(), "CANVAS");
    assert!(dom::has_class(&canvas, dom::CANVAS_CLASS));
}

#[wasm_bindgen_test]
fn caller_attributes_override_the_marker_class() {
    let button = dom::create_button(&[("class", "custom")], None).unwrap();

    assert!(!dom::has_class(&button, dom::BUTTON_CLASS));
    assert!(dom::has_class(&button, "custom"));
}

#[wasm_bindgen_test]
fn create_svg_is_namespaced() {
    let circle = dom::create_svg("circle", &[("r", "8")]).unwrap();

    assert_eq!(
        circle.namespace_uri().as_deref(),
        Some("http://www.w3.org/2000/svg")
    );
    assert_eq!(circle.get_attribute("r").as_deref(), Some("8"));
}

#[wasm_bindgen_test]
fn class_helpers_toggle_membership() {
    let panel = dom::create_panel(&[], None).unwrap();

    dom::add_class(&panel, "visible");
    assert!(dom::has_class(&panel, "visible"));

    dom::remove_class(&panel, "visible");
    assert!(!dom::has_class(&panel, "visible"));

    dom::toggle_class(&panel, "visible");
    assert!(dom::has_class(&panel, "visible"));
    dom::toggle_class(&panel, "visible");
    assert!(!dom::has_class(&panel, "visible"));
}

#[wasm_bindgen_test]
fn toggle_two_class_flips_the_pair() {
    let button = dom::create_button(&[], None).unwrap();

    dom::toggle_two_class(&button, true, ["icon-play", "icon-pause"]);
    assert!(dom::has_class(&button, "icon-pause"));
    assert!(!dom::has_class(&button, "icon-play"));

    dom::toggle_two_class(&button, false, ["icon-play", "icon-pause"]);
    assert!(dom::has_class(&button, "icon-play"));
    assert!(!dom::has_class(&button, "icon-pause"));
}

#[wasm_bindgen_test]
fn toggle_aria_label_picks_by_flag() {
    let button = dom::create_button(&[], None).unwrap();

    dom::toggle_aria_label(&button, true, "aria-label", ["Play", "Pause"]);
    assert_eq!(button.get_attribute("aria-label").as_deref(), Some("Pause"));

    dom::toggle_aria_label(&button, false, "aria-label", ["Play", "Pause"]);
    assert_eq!(button.get_attribute("aria-label").as_deref(), Some("Play"));
}

#[wasm_bindgen_test]
fn remove_all_children_empties_the_element() {
    let panel = dom::create_panel(&[], None).unwrap();
    for _ in 0..3 {
        let child = dom::create_slide(&[], None).unwrap();
        panel.append_child(&child).unwrap();
    }
    assert_eq!(panel.child_nodes().length(), 3);

    dom::remove_all_children(&panel);
    assert_eq!(panel.child_nodes().length(), 0);

    // Emptying an already-empty element is fine.
    dom::remove_all_children(&panel);
}
