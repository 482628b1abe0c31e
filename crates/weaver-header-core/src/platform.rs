//! Platform abstraction traits for the header block.
//!
//! These traits define the interface between the block logic and the host's
//! rendering layer (browser DOM, native UI, in-memory test doubles). The block
//! never touches a concrete element type; it only pushes [`ViewState`] into a
//! surface and toggles settings controls.

use crate::level::LevelDescriptor;
use crate::view::ViewState;

/// Error type for platform operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct PlatformError(pub String);

impl From<&str> for PlatformError {
    fn from(s: &str) -> Self {
        PlatformError(s.to_string())
    }
}

impl From<String> for PlatformError {
    fn from(s: String) -> Self {
        PlatformError(s)
    }
}

/// The editable element a heading renders into.
///
/// Content is markup (inline formatting from the host's inline layer is kept
/// verbatim). The level is carried as an attribute on a single container
/// element, so changing level never replaces the element.
pub trait HeadingSurface {
    /// Current content markup.
    fn inner_html(&self) -> String;

    /// Replace the content markup.
    fn set_inner_html(&mut self, html: &str);

    /// Set the level-identifying attribute (`H1`..`H6`).
    fn set_level_tag(&mut self, tag: &str);

    fn set_editable(&mut self, editable: bool);

    /// Set the hint shown while the heading is empty.
    fn set_placeholder(&mut self, placeholder: &str);

    /// Whether the host has attached the surface to a container.
    fn is_mounted(&self) -> bool;

    /// Push a complete view state into the surface.
    fn apply(&mut self, state: &ViewState) {
        self.set_inner_html(&state.html);
        self.set_level_tag(&state.level_tag);
        self.set_editable(state.editable);
        self.set_placeholder(&state.placeholder);
    }
}

/// A per-level selector in the block settings.
pub trait SettingsControl {
    fn set_active(&mut self, active: bool);

    fn is_active(&self) -> bool;
}

/// Factory and host services for one block instance.
pub trait BlockPlatform {
    type Surface: HeadingSurface;
    type Control: SettingsControl;

    /// Allocate an empty heading container.
    fn create_surface(&self) -> Result<Self::Surface, PlatformError>;

    /// Allocate a selector control for one catalog level.
    fn create_control(
        &self,
        entry: &LevelDescriptor,
        active: bool,
    ) -> Result<Self::Control, PlatformError>;

    /// Host i18n lookup.
    fn translate(&self, key: &str) -> String;
}

/// Foreign markup handed over by the host's paste handling.
pub trait PastedElement {
    /// Tag name as the host reports it, e.g. `H3`.
    fn tag_name(&self) -> String;

    fn inner_html(&self) -> String;
}

impl<T: PastedElement + ?Sized> PastedElement for &T {
    fn tag_name(&self) -> String {
        (**self).tag_name()
    }

    fn inner_html(&self) -> String {
        (**self).inner_html()
    }
}
