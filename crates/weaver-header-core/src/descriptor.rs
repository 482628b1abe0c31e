//! Static tool metadata consumed by the host editor.
//!
//! Hosts query these once per tool type (toolbox entry, conversion, sanitizer
//! and paste registration). They serialize to the JSON shapes block editors
//! expect from a tool class.

use std::collections::BTreeMap;

use serde::Serialize;
use smol_str::SmolStr;

use crate::block::HeaderBlock;
use crate::level::{HeadingLevel, IconRef};
use crate::platform::BlockPlatform;

/// Toolbox entry: icon and title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toolbox {
    pub icon: IconRef,
    pub title: String,
}

/// Which data field is exported to / imported from other block types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionConfig {
    pub export: String,
    pub import: String,
}

/// Sanitizer rule for one data field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SanitizeRule {
    /// `false` keeps the field untouched.
    Flag(bool),
    /// Tag whitelist; an empty map applies the host's default rules.
    Rules(serde_json::Map<String, serde_json::Value>),
}

impl SanitizeRule {
    pub fn passthrough() -> Self {
        Self::Flag(false)
    }

    pub fn default_rules() -> Self {
        Self::Rules(serde_json::Map::new())
    }
}

/// Sanitizer rules per data field.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SanitizeConfig(pub BTreeMap<String, SanitizeRule>);

impl SanitizeConfig {
    pub fn with(mut self, field: impl Into<String>, rule: SanitizeRule) -> Self {
        self.0.insert(field.into(), rule);
        self
    }

    pub fn rule(&self, field: &str) -> Option<&SanitizeRule> {
        self.0.get(field)
    }
}

/// Tags the host should hand to the tool on paste.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasteConfig {
    pub tags: Vec<SmolStr>,
}

/// Everything a host needs to register a tool type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    pub toolbox: Toolbox,
    pub conversion_config: ConversionConfig,
    pub sanitize: SanitizeConfig,
    pub paste_config: PasteConfig,
    pub is_read_only_supported: bool,
}

/// Capability query implemented by every block tool type.
pub trait ToolCapabilities {
    fn toolbox() -> Toolbox;

    fn conversion_config() -> ConversionConfig;

    fn sanitize() -> SanitizeConfig;

    fn paste_config() -> PasteConfig;

    fn is_read_only_supported() -> bool {
        false
    }

    fn descriptor() -> ToolDescriptor {
        ToolDescriptor {
            toolbox: Self::toolbox(),
            conversion_config: Self::conversion_config(),
            sanitize: Self::sanitize(),
            paste_config: Self::paste_config(),
            is_read_only_supported: Self::is_read_only_supported(),
        }
    }
}

impl<P: BlockPlatform> ToolCapabilities for HeaderBlock<P> {
    fn toolbox() -> Toolbox {
        Toolbox {
            icon: IconRef::tool(),
            title: "Heading".into(),
        }
    }

    fn conversion_config() -> ConversionConfig {
        ConversionConfig {
            export: "text".into(),
            import: "text".into(),
        }
    }

    fn sanitize() -> SanitizeConfig {
        SanitizeConfig::default()
            .with("level", SanitizeRule::passthrough())
            .with("text", SanitizeRule::default_rules())
    }

    fn paste_config() -> PasteConfig {
        PasteConfig {
            tags: HeadingLevel::ALL.into_iter().map(HeadingLevel::tag).collect(),
        }
    }

    fn is_read_only_supported() -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryPlatform;

    type Header = HeaderBlock<MemoryPlatform>;

    #[test]
    fn test_header_descriptor_snapshot() {
        insta::assert_yaml_snapshot!(Header::descriptor(), @r###"
        toolbox:
          icon: heading
          title: Heading
        conversionConfig:
          export: text
          import: text
        sanitize:
          level: false
          text: {}
        pasteConfig:
          tags:
            - H1
            - H2
            - H3
            - H4
            - H5
            - H6
        isReadOnlySupported: true
        "###);
    }

    #[test]
    fn test_sanitize_rules() {
        let sanitize = Header::sanitize();
        assert_eq!(sanitize.rule("level"), Some(&SanitizeRule::Flag(false)));
        assert!(matches!(sanitize.rule("text"), Some(SanitizeRule::Rules(r)) if r.is_empty()));
        assert_eq!(
            serde_json::to_value(&sanitize).unwrap(),
            serde_json::json!({"level": false, "text": {}})
        );
    }
}
