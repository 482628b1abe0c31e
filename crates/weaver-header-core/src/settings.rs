//! Block settings: one selector per permitted level.

use crate::block::HeaderBlock;
use crate::data::HeaderDataPatch;
use crate::error::HeaderError;
use crate::level::{HeadingLevel, IconRef};
use crate::platform::{BlockPlatform, SettingsControl};

/// A rendered level selector, bound to the level it switches to.
#[derive(Debug)]
pub struct SettingsButton<C> {
    level: HeadingLevel,
    icon: IconRef,
    control: C,
}

impl<C: SettingsControl> SettingsButton<C> {
    pub fn level(&self) -> HeadingLevel {
        self.level
    }

    pub fn icon(&self) -> &IconRef {
        &self.icon
    }

    pub fn control(&self) -> &C {
        &self.control
    }

    pub fn is_active(&self) -> bool {
        self.control.is_active()
    }
}

impl<P: BlockPlatform> HeaderBlock<P> {
    /// Build the level selectors.
    ///
    /// A catalog with a single level yields no selectors. Otherwise there is
    /// one per catalog level, in catalog order, with the current level
    /// active. Rendering again replaces the retained selectors.
    pub fn render_settings(&mut self) -> Result<&[SettingsButton<P::Control>], HeaderError> {
        self.settings_buttons.clear();

        if self.config.catalog().len() <= 1 {
            return Ok(self.settings_buttons.as_slice());
        }

        let current = self.current_level()?.level;
        for entry in self.config.catalog() {
            let control = self.platform.create_control(entry, entry.level == current)?;
            self.settings_buttons.push(SettingsButton {
                level: entry.level,
                icon: entry.icon.clone(),
                control,
            });
        }

        Ok(self.settings_buttons.as_slice())
    }

    /// Selectors from the last [`HeaderBlock::render_settings`] call.
    pub fn settings_buttons(&self) -> &[SettingsButton<P::Control>] {
        &self.settings_buttons
    }

    /// Switch the heading level, keeping the current text.
    ///
    /// Selector highlight follows the level actually applied.
    pub fn set_level(&mut self, level: HeadingLevel) -> Result<(), HeaderError> {
        let text = self.data()?.text;
        self.apply_patch(HeaderDataPatch::level(level).with_text(text))?;

        let applied = self.data.level;
        if applied != level {
            tracing::debug!(requested = %level, %applied, "heading level not permitted");
        } else {
            tracing::debug!(%level, "heading level changed");
        }

        for button in &mut self.settings_buttons {
            button.control.set_active(button.level == applied);
        }
        Ok(())
    }
}
