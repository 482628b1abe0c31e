//! Browser DOM layer for the weaver header block.
//!
//! Implements the core platform traits on top of `web-sys`. It assumes a
//! `wasm32-unknown-unknown` target environment.
//!
//! - `api`: host `api` bridge (style classes, i18n)
//! - `dom`: heading surface, settings controls and pasted elements
//!
//! This crate re-exports `weaver-header-core`, so consumers only need to
//! depend on `weaver-header-browser`.

pub use weaver_header_core;
pub use weaver_header_core::*;

pub mod api;
pub mod dom;

pub use api::{HostApi, HostStyles};
pub use dom::{DomControl, DomPastedElement, DomPlatform, DomSurface};

use gloo_events::EventListener;

/// Call `on_click` whenever the control is clicked.
///
/// The listener is removed when the returned handle is dropped.
pub fn on_control_click(control: &DomControl, mut on_click: impl FnMut() + 'static) -> EventListener {
    EventListener::new(control.element(), "click", move |_event| on_click())
}
