use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Function;
use web_sys::{console, Event, EventTarget};

/// One active subscription tying a target, an event name and a listener to
/// the native `addEventListener` mechanism.
pub struct Binding {
    target: Option<EventTarget>,
    event_type: Option<String>,
    listener: Option<Function>,
}

impl Binding {
    /// Subscribes immediately on construction.
    pub fn new(target: &EventTarget, event_type: &str, listener: &Function) -> Result<Self, JsValue> {
        target.add_event_listener_with_callback(event_type, listener)?;

        Ok(Self {
            target: Some(target.clone()),
            event_type: Some(event_type.to_string()),
            listener: Some(listener.clone()),
        })
    }

    /// Unsubscribes from the native source and marks the binding inert.
    /// Calling this twice is safe; the native unsubscribe runs at most once.
    pub fn remove_event_listener(&mut self) {
        if self.target.is_none() || self.event_type.is_none() {
            return;
        }

        if let (Some(target), Some(event_type)) = (self.target.take(), self.event_type.as_ref()) {
            if let Some(listener) = self.listener.take() {
                let _ = target.remove_event_listener_with_callback(event_type, &listener);
            }
        }
    }

    fn is_active(&self) -> bool {
        self.target.is_some()
    }
}

/// Tracks bindings per event name across all targets, for once-semantics and
/// bulk release. Cloning yields another handle to the same binding map.
#[derive(Clone)]
pub struct EventManager {
    bindings: Rc<RefCell<HashMap<String, Vec<Binding>>>>,
}

impl Default for EventManager {
    fn default() -> Self {
        Self::new()
    }
}

impl EventManager {
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        Self {
            bindings: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    pub fn on(&self, target: &EventTarget, event_type: &str, listener: &Function) -> Result<(), JsValue> {
        let binding = Binding::new(target, event_type, listener)?;

        self.bindings
            .borrow_mut()
            .entry(event_type.to_string())
            .or_insert_with(Vec::new)
            .push(binding);

        Ok(())
    }

    /// Registers a wrapper that unregisters itself before invoking the
    /// original listener, so the listener fires at most once per triple.
    pub fn once(&self, target: &EventTarget, event_type: &str, listener: &Function) -> Result<(), JsValue> {
        let manager = self.clone();
        let once_target = target.clone();
        let once_type = event_type.to_string();
        let original = listener.clone();
        let own: Rc<RefCell<Option<Function>>> = Rc::new(RefCell::new(None));
        let own_ref = own.clone();

        let wrapper = Closure::once_into_js(move |event: Event| {
            if let Some(function) = own_ref.borrow().as_ref() {
                manager.off(&once_target, &once_type, Some(function));
            }
            let _ = original.call1(&JsValue::NULL, &event);
        });

        let function: Function = wrapper.unchecked_into();
        *own.borrow_mut() = Some(function.clone());

        self.on(target, event_type, &function)
    }

    /// Tears down every binding under `event_type` whose target matches, and
    /// whose listener matches when one is given, then drops exactly the
    /// torn-down entries. Unknown targets and listeners are a no-op.
    pub fn off(&self, target: &EventTarget, event_type: &str, listener: Option<&Function>) {
        let mut bindings = self.bindings.borrow_mut();

        if let Some(list) = bindings.get_mut(event_type) {
            for binding in list.iter_mut() {
                let target_matches = binding.target.as_ref() == Some(target);
                let listener_matches = match listener {
                    Some(listener) => binding.listener.as_ref() == Some(listener),
                    None => true,
                };

                if target_matches && listener_matches {
                    binding.remove_event_listener();
                }
            }
            list.retain(Binding::is_active);
        }
    }

    /// Tears down every tracked binding and resets the map to empty. The
    /// manager stays usable afterwards.
    pub fn release(&self) {
        let mut bindings = self.bindings.borrow_mut();
        let mut released = 0usize;

        for list in bindings.values_mut() {
            for binding in list.iter_mut() {
                binding.remove_event_listener();
                released += 1;
            }
        }
        bindings.clear();

        console::debug_1(&JsValue::from_str(&format!(
            "released {} event binding(s)",
            released
        )));
    }

    pub fn binding_count(&self, event_type: &str) -> usize {
        self.bindings
            .borrow()
            .get(event_type)
            .map_or(0, |list| list.len())
    }
}
