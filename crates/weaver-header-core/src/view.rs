//! Derived view state for a heading.
//!
//! The surface is a function of block data plus in-place text edits. Level,
//! editability and placeholder are always pushed from state and never read
//! back from the surface.

use smol_str::SmolStr;

use crate::config::EffectiveConfig;
use crate::data::HeaderData;
use crate::level::LevelDescriptor;

/// CSS class of the heading container.
pub const WRAPPER_CLASS: &str = "ce-header";

/// Everything a surface shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub html: String,
    pub level_tag: SmolStr,
    pub editable: bool,
    pub placeholder: String,
}

impl ViewState {
    /// Build the view for `data` at the resolved `level`.
    ///
    /// `translate` is the host i18n lookup, applied to the configured
    /// placeholder key (an empty key when none is configured).
    pub fn build(
        data: &HeaderData,
        level: &LevelDescriptor,
        config: &EffectiveConfig,
        read_only: bool,
        translate: impl FnOnce(&str) -> String,
    ) -> Self {
        Self {
            html: data.text.clone(),
            level_tag: level.tag.clone(),
            editable: !read_only,
            placeholder: translate(config.placeholder().unwrap_or_default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HeaderConfig;
    use crate::level::HeadingLevel;

    #[test]
    fn test_build_view_state() {
        let config = HeaderConfig::default()
            .with_placeholder("Heading")
            .resolve()
            .unwrap();
        let data = HeaderData::new("Intro", HeadingLevel::H3);
        let state = ViewState::build(
            &data,
            &HeadingLevel::H3.into(),
            &config,
            false,
            |key| format!("t({key})"),
        );

        assert_eq!(state.html, "Intro");
        assert_eq!(state.level_tag, "H3");
        assert!(state.editable);
        assert_eq!(state.placeholder, "t(Heading)");
    }

    #[test]
    fn test_read_only_and_missing_placeholder() {
        let config = EffectiveConfig::default();
        let data = HeaderData::new("", HeadingLevel::H1);
        let state = ViewState::build(&data, &HeadingLevel::H1.into(), &config, true, |key| {
            key.to_string()
        });

        assert!(!state.editable);
        assert_eq!(state.placeholder, "");
    }
}
