//! DOM implementation of the block platform traits.

use std::collections::HashMap;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use weaver_header_core::{
    BlockPlatform, HeadingLevel, HeadingSurface, IconRef, LevelDescriptor, PastedElement,
    PlatformError, SettingsControl, WRAPPER_CLASS,
};

use crate::api::HostApi;

fn js_error(context: &str, err: JsValue) -> PlatformError {
    PlatformError(format!("{context}: {err:?}"))
}

/// Platform that builds real DOM nodes in the current document.
#[derive(Debug, Clone)]
pub struct DomPlatform {
    document: Document,
    api: HostApi,
    icons: HashMap<String, String>,
}

impl DomPlatform {
    /// Platform for the window's document.
    pub fn new(api: HostApi) -> Result<Self, PlatformError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| PlatformError::from("no document available"))?;
        Ok(Self::with_document(document, api))
    }

    pub fn with_document(document: Document, api: HostApi) -> Self {
        Self {
            document,
            api,
            icons: HashMap::new(),
        }
    }

    /// Register icon markup for an [`IconRef`] key.
    ///
    /// Controls whose icon has no markup show the key as text.
    pub fn with_icon(mut self, key: impl Into<String>, markup: impl Into<String>) -> Self {
        self.icons.insert(key.into(), markup.into());
        self
    }

    pub fn api(&self) -> &HostApi {
        &self.api
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn create_html_element(&self, tag: &str) -> Result<HtmlElement, PlatformError> {
        self.document
            .create_element(tag)
            .map_err(|e| js_error("failed to create element", e))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| PlatformError::from("created element is not an HtmlElement"))
    }

    /// Empty container for the settings controls.
    pub fn create_holder(&self) -> Result<HtmlElement, PlatformError> {
        self.create_html_element("div")
    }
}

impl BlockPlatform for DomPlatform {
    type Surface = DomSurface;
    type Control = DomControl;

    /// The surface carries only the wrapper class; the host wraps blocks in
    /// its own `api.styles.block` container.
    fn create_surface(&self) -> Result<Self::Surface, PlatformError> {
        let element = self.create_html_element("div")?;
        element
            .class_list()
            .add_1(WRAPPER_CLASS)
            .map_err(|e| js_error("failed to set class", e))?;
        Ok(DomSurface { element })
    }

    fn create_control(
        &self,
        entry: &LevelDescriptor,
        active: bool,
    ) -> Result<Self::Control, PlatformError> {
        let element = self.create_html_element("span")?;
        let styles = self.api.styles();
        element
            .class_list()
            .add_1(&styles.settings_button)
            .map_err(|e| js_error("failed to set class", e))?;

        match self.icons.get(entry.icon.key()) {
            Some(markup) => element.set_inner_html(markup),
            None => element.set_text_content(Some(entry.icon.key())),
        }
        element
            .set_attribute("data-level", &entry.level.get().to_string())
            .map_err(|e| js_error("failed to set data-level", e))?;

        let mut control = DomControl {
            element,
            level: entry.level,
            icon: entry.icon.clone(),
            active_class: styles.settings_button_active.clone(),
        };
        control.set_active(active);
        Ok(control)
    }

    fn translate(&self, key: &str) -> String {
        self.api.translate(key)
    }
}

/// The block's contenteditable `<div>`.
#[derive(Debug, Clone)]
pub struct DomSurface {
    element: HtmlElement,
}

impl DomSurface {
    pub fn element(&self) -> &HtmlElement {
        &self.element
    }
}

impl From<HtmlElement> for DomSurface {
    fn from(element: HtmlElement) -> Self {
        Self { element }
    }
}

impl HeadingSurface for DomSurface {
    fn inner_html(&self) -> String {
        self.element.inner_html()
    }

    fn set_inner_html(&mut self, html: &str) {
        self.element.set_inner_html(html);
    }

    fn set_level_tag(&mut self, tag: &str) {
        if let Err(e) = self.element.set_attribute("data-header", tag) {
            tracing::warn!(tag, error = ?e, "failed to set data-header");
        }
    }

    fn set_editable(&mut self, editable: bool) {
        self.element
            .set_content_editable(if editable { "true" } else { "false" });
    }

    fn set_placeholder(&mut self, placeholder: &str) {
        if let Err(e) = self.element.set_attribute("data-placeholder", placeholder) {
            tracing::warn!(error = ?e, "failed to set data-placeholder");
        }
    }

    fn is_mounted(&self) -> bool {
        self.element.parent_node().is_some()
    }
}

/// A level selector `<span>`.
#[derive(Debug, Clone)]
pub struct DomControl {
    element: HtmlElement,
    level: HeadingLevel,
    icon: IconRef,
    active_class: String,
}

impl DomControl {
    pub fn element(&self) -> &HtmlElement {
        &self.element
    }

    pub fn level(&self) -> HeadingLevel {
        self.level
    }

    pub fn icon(&self) -> &IconRef {
        &self.icon
    }
}

impl SettingsControl for DomControl {
    fn set_active(&mut self, active: bool) {
        if let Err(e) = self
            .element
            .class_list()
            .toggle_with_force(&self.active_class, active)
        {
            tracing::warn!(level = %self.level, error = ?e, "failed to toggle active class");
        }
    }

    fn is_active(&self) -> bool {
        self.element.class_list().contains(&self.active_class)
    }
}

/// Pasted DOM element handed over by the host's paste event.
#[derive(Debug, Clone)]
pub struct DomPastedElement(pub Element);

impl PastedElement for DomPastedElement {
    fn tag_name(&self) -> String {
        self.0.tag_name()
    }

    fn inner_html(&self) -> String {
        self.0.inner_html()
    }
}
