//! The header block: data model, view and host-facing contract.

use serde_json::Value;

use crate::config::EffectiveConfig;
use crate::data::{HeaderData, HeaderDataPatch, normalize};
use crate::error::HeaderError;
use crate::level::LevelDescriptor;
use crate::platform::{BlockPlatform, HeadingSurface};
use crate::settings::SettingsButton;
use crate::view::ViewState;

/// One heading block instance.
///
/// Holds the canonical `{text, level}` data and the surface derived from it.
/// While the surface is mounted the user edits its content directly, so reads
/// of [`HeaderBlock::data`] first pull the text back from the surface. The
/// level is only ever changed through this type.
pub struct HeaderBlock<P: BlockPlatform> {
    pub(crate) platform: P,
    pub(crate) config: EffectiveConfig,
    pub(crate) read_only: bool,
    pub(crate) data: HeaderData,
    pub(crate) element: P::Surface,
    pub(crate) settings_buttons: Vec<SettingsButton<P::Control>>,
}

impl<P: BlockPlatform> HeaderBlock<P> {
    /// Create a block from raw persisted data.
    ///
    /// `raw` may be any JSON value; it is normalized against `config`. The
    /// surface is allocated and filled immediately.
    pub fn new(
        raw: &Value,
        config: EffectiveConfig,
        read_only: bool,
        platform: P,
    ) -> Result<Self, HeaderError> {
        let data = normalize(raw, &config);
        let element = platform.create_surface()?;
        tracing::debug!(level = %data.level, read_only, "creating header block");

        let mut block = Self {
            platform,
            config,
            read_only,
            data,
            element,
            settings_buttons: Vec::new(),
        };
        block.get_tag()?;
        Ok(block)
    }

    /// The block's root surface. Always the same element.
    pub fn render(&self) -> &P::Surface {
        &self.element
    }

    pub fn render_mut(&mut self) -> &mut P::Surface {
        &mut self.element
    }

    pub fn config(&self) -> &EffectiveConfig {
        &self.config
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Catalog entry of the stored level.
    pub fn current_level(&self) -> Result<LevelDescriptor, HeaderError> {
        self.config.catalog().get(self.data.level)
    }

    /// All levels this block may switch between.
    pub fn levels(&self) -> &[LevelDescriptor] {
        self.config.catalog().levels()
    }

    /// The view the surface should currently show.
    pub fn view_state(&self) -> Result<ViewState, HeaderError> {
        let level = self.current_level()?;
        Ok(ViewState::build(
            &self.data,
            &level,
            &self.config,
            self.read_only,
            |key| self.platform.translate(key),
        ))
    }

    /// Rebuild the surface for the current level and data.
    ///
    /// Keeps the existing element; only its content and attributes change.
    pub fn get_tag(&mut self) -> Result<&P::Surface, HeaderError> {
        let state = self.view_state()?;
        self.element.apply(&state);
        Ok(&self.element)
    }

    /// Pull user edits from the surface into the data model.
    pub fn sync_from_view(&mut self) {
        let html = self.element.inner_html();
        if html != self.data.text {
            tracing::trace!(len = html.len(), "synced header text from surface");
            self.data.text = html;
        }
    }

    /// Read the block data, refreshed from the surface.
    pub fn data(&mut self) -> Result<HeaderData, HeaderError> {
        self.sync_from_view();
        self.data.level = self.current_level()?.level;
        Ok(self.data.clone())
    }

    /// Write block data.
    ///
    /// `raw` is normalized in full, so a field missing from `raw` is reset to
    /// its default. A present `level` on a mounted surface rebuilds it from
    /// the new data; otherwise only the level attribute is updated. A present
    /// `text` replaces the surface content.
    pub fn set_data(&mut self, raw: &Value) -> Result<(), HeaderError> {
        self.data = normalize(raw, &self.config);

        let fields = raw.as_object();
        let has_level = fields.is_some_and(|f| f.contains_key("level"));
        let has_text = fields.is_some_and(|f| f.contains_key("text"));

        // The level attribute always follows the model level.
        if has_level && self.element.is_mounted() {
            self.get_tag()?;
        } else {
            let tag = self.current_level()?.tag;
            self.element.set_level_tag(&tag);
        }

        if has_text {
            self.element.set_inner_html(&self.data.text);
        }

        Ok(())
    }

    /// Typed form of [`HeaderBlock::set_data`].
    pub fn apply_patch(&mut self, patch: HeaderDataPatch) -> Result<(), HeaderError> {
        self.set_data(&patch.into_value())
    }

    /// Extract data for persistence from a rendered surface.
    pub fn save<S: HeadingSurface + ?Sized>(&self, surface: &S) -> Result<HeaderData, HeaderError> {
        Ok(HeaderData {
            text: surface.inner_html(),
            level: self.current_level()?.level,
        })
    }

    /// False if the saved data should be dropped (blank text).
    pub fn validate(&self, data: &HeaderData) -> bool {
        data.is_valid()
    }

    /// Append another block's text to this one, keeping this block's level.
    pub fn merge(&mut self, incoming: &Value) -> Result<(), HeaderError> {
        let current = self.data()?;
        let appended = match incoming.get("text") {
            Some(_) => normalize(incoming, &self.config).text,
            None => String::new(),
        };
        self.apply_patch(HeaderDataPatch {
            text: Some(current.text + &appended),
            level: Some(current.level),
        })
    }
}
