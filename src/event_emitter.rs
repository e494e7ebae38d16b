use std::cell::RefCell;
use std::collections::HashMap;
use std::hash::Hash;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Event schema for one emitter instantiation. The event value carries its
/// payload; `Kind` is the payload-free discriminant listeners key on.
pub trait EmitterEvent: 'static {
    type Kind: Copy + Eq + Hash + 'static;

    fn kind(&self) -> Self::Kind;
}

/// Handle to one registered listener, used for removal.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ListenerId(u64);

struct ListenerEntry<E: EmitterEvent> {
    id: ListenerId,
    callback: Rc<RefCell<dyn FnMut(&E)>>,
}

impl<E: EmitterEvent> Clone for ListenerEntry<E> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            callback: self.callback.clone(),
        }
    }
}

struct Inner<E: EmitterEvent> {
    listeners: HashMap<E::Kind, Vec<ListenerEntry<E>>>,
    next_id: u64,
}

impl<E: EmitterEvent> Inner<E> {
    fn reserve_id(&mut self) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        id
    }
}

/// Publish/subscribe dispatcher for the events of one schema `E`. Cloning
/// yields another handle to the same listener map.
pub struct EventEmitter<E: EmitterEvent> {
    inner: Rc<RefCell<Inner<E>>>,
}

impl<E: EmitterEvent> Clone for EventEmitter<E> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<E: EmitterEvent> Default for EventEmitter<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EmitterEvent> EventEmitter<E> {
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        Self {
            inner: Rc::new(RefCell::new(Inner {
                listeners: HashMap::new(),
                next_id: 0,
            })),
        }
    }

    pub fn on(&self, kind: E::Kind, listener: impl FnMut(&E) + 'static) -> ListenerId {
        self.add_listener(kind, listener)
    }

    pub fn add_listener(&self, kind: E::Kind, listener: impl FnMut(&E) + 'static) -> ListenerId {
        let id = self.inner.borrow_mut().reserve_id();
        self.push(kind, id, listener);
        id
    }

    /// Registers a listener that runs at most once, removing itself after the
    /// first delivery.
    pub fn once(&self, kind: E::Kind, listener: impl FnMut(&E) + 'static) -> ListenerId {
        let id = self.inner.borrow_mut().reserve_id();
        let emitter = self.clone();
        let mut slot = Some(listener);
        self.push(kind, id, move |event: &E| {
            if let Some(mut listener) = slot.take() {
                listener(event);
                emitter.remove_listener(kind, Some(id));
            }
        });
        id
    }

    fn push(&self, kind: E::Kind, id: ListenerId, listener: impl FnMut(&E) + 'static) {
        self.inner
            .borrow_mut()
            .listeners
            .entry(kind)
            .or_insert_with(Vec::new)
            .push(ListenerEntry {
                id,
                callback: Rc::new(RefCell::new(listener)),
            });
    }

    pub fn off(&self, kind: E::Kind, listener: Option<ListenerId>) -> &Self {
        self.remove_listener(kind, listener)
    }

    /// Removes the listener with the given id, or the whole sequence for
    /// `kind` when no id is given. An entry whose sequence becomes empty is
    /// dropped from the map.
    pub fn remove_listener(&self, kind: E::Kind, listener: Option<ListenerId>) -> &Self {
        let mut inner = self.inner.borrow_mut();
        match listener {
            None => {
                inner.listeners.remove(&kind);
            }
            Some(id) => {
                let now_empty = match inner.listeners.get_mut(&kind) {
                    Some(entries) => {
                        entries.retain(|entry| entry.id != id);
                        entries.is_empty()
                    }
                    None => false,
                };
                if now_empty {
                    inner.listeners.remove(&kind);
                }
            }
        }
        self
    }

    pub fn remove_all_listeners(&self) -> &Self {
        self.inner.borrow_mut().listeners.clear();
        self
    }

    /// Schedules delivery of `event` on the macrotask queue and returns
    /// immediately. The batch is the registration-order listener sequence as
    /// it stands right now; listeners run with `&event` on a later turn,
    /// never synchronously inside this call.
    pub fn emit(&self, event: E) -> &Self {
        let batch: Vec<ListenerEntry<E>> = self
            .inner
            .borrow()
            .listeners
            .get(&event.kind())
            .cloned()
            .unwrap_or_default();

        let deliver = Closure::once_into_js(move || {
            for entry in &batch {
                (&mut *entry.callback.borrow_mut())(&event);
            }
        });

        let window = web_sys::window().expect("no global `window` exists");
        window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                deliver.as_ref().unchecked_ref(),
                0,
            )
            .expect("failed to set timeout");

        self
    }

    pub fn listener_count(&self, kind: E::Kind) -> usize {
        self.inner
            .borrow()
            .listeners
            .get(&kind)
            .map_or(0, |entries| entries.len())
    }
}
