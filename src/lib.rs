//! Shared DOM and event utilities for the Astra web media player.

pub mod dom;
pub mod event_emitter;
pub mod event_manager;
pub mod is;
pub mod number;
pub mod object;

pub use event_emitter::{EmitterEvent, EventEmitter, ListenerId};
pub use event_manager::{Binding, EventManager};
