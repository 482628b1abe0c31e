//! Tool configuration as passed by the host, and its resolved form.
//!
//! The host hands over a loosely-typed config object. [`EffectiveConfig::resolve`]
//! turns it into the immutable configuration every other component reads,
//! filling in the default level and validating the level restriction.

use serde::{Deserialize, Serialize};

use crate::catalog::{LevelCatalog, SubTool, get_sub_tools};
use crate::error::ConfigError;
use crate::level::HeadingLevel;

/// Header tool settings, as the host's tool config carries them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderConfig {
    /// Level for new or invalid blocks. Defaults to 2.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_level: Option<i64>,
    /// Restricts the levels a block may use.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub levels: Option<Vec<i64>>,
    /// i18n key for the empty-block placeholder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl HeaderConfig {
    /// Parse a config from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a config from an already-decoded JSON value. `null` means no config.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        if value.is_null() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_value(value)?)
    }

    pub fn with_levels(mut self, levels: impl IntoIterator<Item = i64>) -> Self {
        self.levels = Some(levels.into_iter().collect());
        self
    }

    pub fn with_default_level(mut self, level: i64) -> Self {
        self.default_level = Some(level);
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// The `levels` restriction with entries outside 1..=6 dropped, in
    /// configured order.
    pub fn heading_levels(&self) -> Option<Vec<HeadingLevel>> {
        self.levels.as_ref().map(|raw| {
            raw.iter()
                .filter_map(|&level| {
                    let parsed = HeadingLevel::from_i64(level);
                    if parsed.is_none() {
                        tracing::warn!(level, "ignoring heading level outside 1..=6 in `levels`");
                    }
                    parsed
                })
                .collect()
        })
    }

    /// Toolbox entries for this config.
    ///
    /// Unlike [`HeaderConfig::resolve`] this never fails: a restriction with
    /// no valid level yields no entries.
    pub fn sub_tools(&self) -> Vec<SubTool> {
        get_sub_tools(self.heading_levels().as_deref())
    }

    /// Resolve into an [`EffectiveConfig`].
    pub fn resolve(self) -> Result<EffectiveConfig, ConfigError> {
        EffectiveConfig::resolve(self)
    }
}

/// Resolved, immutable configuration shared by all parts of a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveConfig {
    default_level: HeadingLevel,
    levels: Option<Vec<HeadingLevel>>,
    catalog: LevelCatalog,
    placeholder: Option<String>,
}

impl EffectiveConfig {
    /// Resolve raw settings.
    ///
    /// - `levels` entries outside 1..=6 are dropped.
    /// - A restriction that leaves no level is rejected.
    /// - A default level outside the catalog is moved to the nearest catalog member.
    pub fn resolve(config: HeaderConfig) -> Result<Self, ConfigError> {
        let requested_default = config
            .default_level
            .unwrap_or_else(|| i64::from(HeadingLevel::DEFAULT.get()));
        let default_level = HeadingLevel::from_i64(requested_default)
            .ok_or(ConfigError::InvalidDefaultLevel(requested_default))?;

        let levels = config.heading_levels();

        let catalog = LevelCatalog::from_restriction(levels.as_deref());
        let default_level = if catalog.contains(default_level) {
            default_level
        } else {
            let nearest = catalog.nearest(default_level).ok_or(ConfigError::EmptyCatalog)?;
            tracing::warn!(
                requested = %default_level,
                using = %nearest,
                "default heading level is not among the configured levels"
            );
            nearest
        };

        Ok(Self {
            default_level,
            levels,
            catalog,
            placeholder: config.placeholder,
        })
    }

    pub fn default_level(&self) -> HeadingLevel {
        self.default_level
    }

    /// The level restriction in the order it was configured, if any.
    pub fn levels(&self) -> Option<&[HeadingLevel]> {
        self.levels.as_deref()
    }

    pub fn catalog(&self) -> &LevelCatalog {
        &self.catalog
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    /// Map any level onto the catalog: itself when permitted, otherwise the
    /// nearest permitted level.
    pub fn clamp_level(&self, level: HeadingLevel) -> HeadingLevel {
        if self.catalog.contains(level) {
            return level;
        }
        // Resolution guarantees a non-empty catalog.
        self.catalog.nearest(level).unwrap_or(self.default_level)
    }
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            default_level: HeadingLevel::DEFAULT,
            levels: None,
            catalog: LevelCatalog::full(),
            placeholder: None,
        }
    }
}

impl TryFrom<HeaderConfig> for EffectiveConfig {
    type Error = ConfigError;

    fn try_from(config: HeaderConfig) -> Result<Self, Self::Error> {
        Self::resolve(config)
    }
}
