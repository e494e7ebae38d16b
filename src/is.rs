use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Object, Reflect};
use web_sys::HtmlElement;

pub fn is_array(value: &JsValue) -> bool {
    Array::is_array(value)
}

pub fn is_function(value: &JsValue) -> bool {
    value.is_function()
}

pub fn is_string(value: &JsValue) -> bool {
    value.is_string()
}

pub fn is_symbol(value: &JsValue) -> bool {
    value.is_symbol()
}

/// Non-null object, arrays included.
pub fn is_object(value: &JsValue) -> bool {
    value.is_object()
}

/// Object whose prototype is `Object.prototype` or null.
pub fn is_plain_object(value: &JsValue) -> bool {
    if !value.is_object() {
        return false;
    }

    let proto = Object::get_prototype_of(value);
    if proto.is_null() {
        return true;
    }

    proto == Object::get_prototype_of(&Object::new().into())
}

/// Object with callable `then` and `catch`.
pub fn is_promise(value: &JsValue) -> bool {
    if !value.is_object() {
        return false;
    }

    let then = Reflect::get(value, &JsValue::from_str("then"));
    let catch = Reflect::get(value, &JsValue::from_str("catch"));

    matches!((then, catch), (Ok(then), Ok(catch)) if then.is_function() && catch.is_function())
}

pub fn is_null_or_undefined(value: &JsValue) -> bool {
    value.is_null() || value.is_undefined()
}

pub fn is_not_null_or_undefined(value: &JsValue) -> bool {
    !is_null_or_undefined(value)
}

pub fn is_html_element(value: &JsValue) -> bool {
    value.dyn_ref::<HtmlElement>().is_some()
}
