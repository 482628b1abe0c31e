//! In-memory platform for hosts without a DOM and for tests.
//!
//! Surfaces and controls are plain structs recording what the block pushed
//! into them. A surface starts detached; call [`MemorySurface::mount`] to
//! emulate the host attaching it to its container.

use std::collections::HashMap;

use smol_str::SmolStr;

use crate::level::{HeadingLevel, IconRef, LevelDescriptor};
use crate::platform::{BlockPlatform, HeadingSurface, PastedElement, PlatformError, SettingsControl};
use crate::view::WRAPPER_CLASS;

/// Platform backed by plain structs, with a fixed translation table.
#[derive(Debug, Clone, Default)]
pub struct MemoryPlatform {
    translations: HashMap<String, String>,
}

impl MemoryPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a translation used by [`BlockPlatform::translate`].
    pub fn with_translation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.translations.insert(key.into(), value.into());
        self
    }
}

impl BlockPlatform for MemoryPlatform {
    type Surface = MemorySurface;
    type Control = MemoryControl;

    fn create_surface(&self) -> Result<Self::Surface, PlatformError> {
        Ok(MemorySurface {
            class: WRAPPER_CLASS.into(),
            ..MemorySurface::default()
        })
    }

    fn create_control(
        &self,
        entry: &LevelDescriptor,
        active: bool,
    ) -> Result<Self::Control, PlatformError> {
        Ok(MemoryControl {
            level: entry.level,
            icon: entry.icon.clone(),
            active,
        })
    }

    /// Unknown keys translate to themselves.
    fn translate(&self, key: &str) -> String {
        self.translations
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

/// Recorded state of a heading surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySurface {
    pub class: SmolStr,
    pub html: String,
    pub level_tag: SmolStr,
    pub editable: bool,
    pub placeholder: String,
    pub mounted: bool,
}

impl MemorySurface {
    pub fn mount(&mut self) {
        self.mounted = true;
    }

    pub fn detach(&mut self) {
        self.mounted = false;
    }

    /// Emulate the user typing into the surface.
    pub fn type_text(&mut self, html: impl Into<String>) {
        self.html = html.into();
    }
}

impl HeadingSurface for MemorySurface {
    fn inner_html(&self) -> String {
        self.html.clone()
    }

    fn set_inner_html(&mut self, html: &str) {
        self.html = html.to_string();
    }

    fn set_level_tag(&mut self, tag: &str) {
        self.level_tag = tag.into();
    }

    fn set_editable(&mut self, editable: bool) {
        self.editable = editable;
    }

    fn set_placeholder(&mut self, placeholder: &str) {
        self.placeholder = placeholder.to_string();
    }

    fn is_mounted(&self) -> bool {
        self.mounted
    }
}

/// Recorded state of a level selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryControl {
    pub level: HeadingLevel,
    pub icon: IconRef,
    pub active: bool,
}

impl SettingsControl for MemoryControl {
    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

/// A pasted element given by tag name and content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryElement {
    pub tag_name: String,
    pub inner_html: String,
}

impl MemoryElement {
    pub fn new(tag_name: impl Into<String>, inner_html: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            inner_html: inner_html.into(),
        }
    }
}

impl PastedElement for MemoryElement {
    fn tag_name(&self) -> String {
        self.tag_name.clone()
    }

    fn inner_html(&self) -> String {
        self.inner_html.clone()
    }
}
