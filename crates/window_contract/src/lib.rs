//! Shared contract types between the shell window manager and window content crates.
//!
//! Content crates render the inside of a managed window and stay unaware of the
//! window store: the runtime hands each of them a [`WindowContentContext`] at mount
//! time and composes the chrome (frame, controls, stacking) around the returned view.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::View;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
/// Per-window mount context injected by the shell runtime.
pub struct WindowContentContext {
    /// Stable lowercase token for the owning window (also its DOM id).
    pub window_token: &'static str,
    /// Opaque registry-supplied payload; [`Value::Null`] when the registry
    /// seeded the window without one.
    pub payload: Value,
}

impl WindowContentContext {
    /// Creates a mount context from a window token and registry payload.
    pub fn new(window_token: &'static str, payload: Value) -> Self {
        Self {
            window_token,
            payload,
        }
    }

    /// Returns a string field from the payload object, if present.
    pub fn payload_str(&self, key: &str) -> Option<&str> {
        self.payload.get(key).and_then(Value::as_str)
    }
}

/// Static content mount function used by the runtime window registry.
pub type WindowContentFn = fn(WindowContentContext) -> View;

#[derive(Debug, Clone, Copy)]
/// Mountable window content descriptor registered per window kind.
pub struct WindowModule {
    mount_fn: WindowContentFn,
}

impl WindowModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: WindowContentFn) -> Self {
        Self { mount_fn }
    }

    /// Mounts the content view with a runtime-provided context.
    pub fn mount(self, context: WindowContentContext) -> View {
        (self.mount_fn)(context)
    }
}
