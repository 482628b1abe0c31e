//! Absorbing pasted `H1`..`H6` markup into a header block.

use crate::block::HeaderBlock;
use crate::catalog::nearest_level;
use crate::config::EffectiveConfig;
use crate::data::HeaderDataPatch;
use crate::error::HeaderError;
use crate::level::HeadingLevel;
use crate::platform::{BlockPlatform, PastedElement};

/// Level for pasted markup with the given tag name.
///
/// Unknown tags take the default level. With a level restriction the
/// detected level is replaced by the nearest configured one, scanning the
/// restriction in its configured order; on equal distance the earlier entry
/// wins.
pub fn resolve_paste_level(tag_name: &str, config: &EffectiveConfig) -> HeadingLevel {
    let detected = HeadingLevel::from_tag(tag_name).unwrap_or(config.default_level());

    match config.levels() {
        Some(levels) => nearest_level(levels.iter().copied(), detected).unwrap_or(detected),
        None => detected,
    }
}

impl<P: BlockPlatform> HeaderBlock<P> {
    /// Replace this block's content with a pasted heading element.
    pub fn on_paste(&mut self, element: impl PastedElement) -> Result<(), HeaderError> {
        let tag_name = element.tag_name();
        let level = resolve_paste_level(&tag_name, &self.config);
        tracing::debug!(%tag_name, %level, "absorbing pasted heading");

        self.apply_patch(HeaderDataPatch::level(level).with_text(element.inner_html()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HeaderConfig;

    fn config(levels: &[i64]) -> EffectiveConfig {
        HeaderConfig::default()
            .with_levels(levels.iter().copied())
            .resolve()
            .unwrap()
    }

    #[test]
    fn test_unrestricted_keeps_detected_level() {
        let config = EffectiveConfig::default();
        assert_eq!(resolve_paste_level("H3", &config), HeadingLevel::H3);
        assert_eq!(resolve_paste_level("h6", &config), HeadingLevel::H6);
    }

    #[test]
    fn test_unknown_tag_uses_default() {
        let config = HeaderConfig::default().with_default_level(4).resolve().unwrap();
        assert_eq!(resolve_paste_level("P", &config), HeadingLevel::H4);
        assert_eq!(resolve_paste_level("DIV", &config), HeadingLevel::H4);
    }

    #[test]
    fn test_nearest_fallback() {
        assert_eq!(resolve_paste_level("H3", &config(&[1, 2])), HeadingLevel::H2);
        assert_eq!(resolve_paste_level("H3", &config(&[4, 5])), HeadingLevel::H4);
        assert_eq!(resolve_paste_level("H1", &config(&[6, 3])), HeadingLevel::H3);
    }

    #[test]
    fn test_tie_break_follows_configured_order() {
        assert_eq!(resolve_paste_level("H3", &config(&[4, 2])), HeadingLevel::H4);
        assert_eq!(resolve_paste_level("H3", &config(&[2, 4])), HeadingLevel::H2);
        assert_eq!(resolve_paste_level("H5", &config(&[6, 4, 1])), HeadingLevel::H6);
    }

    #[test]
    fn test_unknown_tag_with_restriction() {
        // Default 2 is not configured, so resolution moves it to 1 first.
        let config = config(&[5, 1]);
        assert_eq!(resolve_paste_level("BLOCKQUOTE", &config), HeadingLevel::H1);
    }
}
