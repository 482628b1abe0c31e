//! Block data: the persisted `{text, level}` shape and its normalization.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::EffectiveConfig;
use crate::level::HeadingLevel;

/// Persisted and exchanged header block data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderData {
    pub text: String,
    pub level: HeadingLevel,
}

impl HeaderData {
    pub fn new(text: impl Into<String>, level: HeadingLevel) -> Self {
        Self {
            text: text.into(),
            level,
        }
    }

    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert("text".into(), Value::String(self.text.clone()));
        map.insert("level".into(), Value::from(self.level.get()));
        Value::Object(map)
    }

    /// Block is worth keeping: its text is not blank.
    pub fn is_valid(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

/// A write through the block's data contract.
///
/// Fields left as `None` are absent from the write, which re-normalizes them
/// from defaults; callers echo the value they want to keep.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderDataPatch {
    pub text: Option<String>,
    pub level: Option<HeadingLevel>,
}

impl HeaderDataPatch {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            level: None,
        }
    }

    pub fn level(level: HeadingLevel) -> Self {
        Self {
            text: None,
            level: Some(level),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_level(mut self, level: HeadingLevel) -> Self {
        self.level = Some(level);
        self
    }

    pub fn into_value(self) -> Value {
        let mut map = Map::new();
        if let Some(text) = self.text {
            map.insert("text".into(), Value::String(text));
        }
        if let Some(level) = self.level {
            map.insert("level".into(), Value::from(level.get()));
        }
        Value::Object(map)
    }
}

impl From<HeaderData> for HeaderDataPatch {
    fn from(data: HeaderData) -> Self {
        Self {
            text: Some(data.text),
            level: Some(data.level),
        }
    }
}

/// Normalize raw block data against the active configuration.
///
/// Total: any JSON value yields valid data. Non-objects count as `{}`, a
/// missing or falsy `text` becomes `""`, and `level` is parsed like an integer
/// prefix. An unparseable or zero level falls back to the default level; a
/// level the catalog does not permit is moved to the nearest permitted one.
pub fn normalize(raw: &Value, config: &EffectiveConfig) -> HeaderData {
    let empty = Map::new();
    let fields = raw.as_object().unwrap_or(&empty);

    let text = match fields.get("text") {
        Some(value) if is_truthy(value) => js_string(value),
        _ => String::new(),
    };

    let level = match fields.get("level").and_then(parse_level) {
        Some(parsed) if parsed != 0 => {
            let in_domain = parsed.clamp(1, 6);
            let level = HeadingLevel::from_i64(in_domain).unwrap_or(config.default_level());
            let clamped = config.clamp_level(level);
            if i64::from(clamped.get()) != parsed {
                tracing::debug!(parsed, using = %clamped, "stored heading level not permitted");
            }
            clamped
        }
        _ => config.default_level(),
    };

    HeaderData { text, level }
}

/// Integer-prefix parse of a level value, as loosely-typed hosts store it.
///
/// Numbers are truncated; strings are parsed from their leading integer
/// (`" 3px"` is 3, `"0x4"` is 4); other values have no level.
fn parse_level(value: &Value) -> Option<i64> {
    parse_int_prefix(&js_string(value))
}

fn parse_int_prefix(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = match s.get(..2) {
        Some("0x") | Some("0X") => (16, &s[2..]),
        _ => (10, s),
    };

    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_digit(radix))
        .map(|(idx, _)| idx)
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    // Saturate absurdly long inputs; they end up clamped anyway.
    let magnitude = i64::from_str_radix(&digits[..end], radix).unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// String conversion matching what a loosely-typed host would render.
fn js_string(value: &Value) -> String {
    match value {
        Value::Null => "null".into(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => i.to_string(),
            (None, Some(f)) if f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => js_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".into(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::config::HeaderConfig;

    fn default_config() -> EffectiveConfig {
        EffectiveConfig::default()
    }

    #[test]
    fn test_normalize_plain_object() {
        let data = normalize(&json!({"text": "Title", "level": 3}), &default_config());
        assert_eq!(data, HeaderData::new("Title", HeadingLevel::H3));
    }

    #[test]
    fn test_normalize_non_object() {
        let config = default_config();
        for raw in [json!(null), json!("text"), json!(42), json!([1, 2]), json!(true)] {
            let data = normalize(&raw, &config);
            assert_eq!(data, HeaderData::new("", HeadingLevel::H2), "input {raw}");
        }
    }

    #[test]
    fn test_normalize_missing_fields() {
        let data = normalize(&json!({}), &default_config());
        assert_eq!(data, HeaderData::new("", HeadingLevel::H2));

        let config = HeaderConfig::default().with_default_level(4).resolve().unwrap();
        let data = normalize(&json!({"text": "x"}), &config);
        assert_eq!(data.level, HeadingLevel::H4);
    }

    #[test]
    fn test_normalize_level_parsing() {
        let config = default_config();
        let level = |raw: Value| normalize(&json!({ "level": raw }), &config).level.get();

        assert_eq!(level(json!("5")), 5);
        assert_eq!(level(json!(" 4px")), 4);
        assert_eq!(level(json!(3.9)), 3);
        assert_eq!(level(json!("0x3")), 3);
        assert_eq!(level(json!([6])), 6);
        // Unparseable or zero falls back to the default.
        assert_eq!(level(json!("abc")), 2);
        assert_eq!(level(json!(0)), 2);
        assert_eq!(level(json!(0.4)), 2);
        assert_eq!(level(json!(null)), 2);
        assert_eq!(level(json!(true)), 2);
        assert_eq!(level(json!({"n": 1})), 2);
    }

    #[test]
    fn test_normalize_clamps_into_catalog() {
        let config = HeaderConfig::default().with_levels([2, 3]).resolve().unwrap();
        let level = |raw: Value| normalize(&json!({ "level": raw }), &config).level.get();

        assert_eq!(level(json!(1)), 2);
        assert_eq!(level(json!(6)), 3);
        assert_eq!(level(json!(99)), 3);
        assert_eq!(level(json!(-4)), 2);
        assert_eq!(level(json!(3)), 3);
    }

    #[test]
    fn test_normalize_text_coercion() {
        let config = default_config();
        let text = |raw: Value| normalize(&json!({ "text": raw }), &config).text;

        assert_eq!(text(json!("<b>hi</b>")), "<b>hi</b>");
        assert_eq!(text(json!(12)), "12");
        assert_eq!(text(json!(true)), "true");
        assert_eq!(text(json!(false)), "");
        assert_eq!(text(json!(0)), "");
        assert_eq!(text(json!(null)), "");
        assert_eq!(text(json!("")), "");
    }

    #[test]
    fn test_normalize_idempotent() {
        let config = HeaderConfig::default().with_levels([1, 4]).resolve().unwrap();
        let inputs = [
            json!(null),
            json!({"text": "a", "level": "3"}),
            json!({"text": 7, "level": 9}),
            json!({"level": -1}),
            json!({"text": ["x", null, "y"], "level": "h2"}),
            json!("garbage"),
        ];
        for raw in inputs {
            let once = normalize(&raw, &config);
            let twice = normalize(&once.to_value(), &config);
            assert_eq!(once, twice, "input {raw}");
            assert!(config.catalog().contains(once.level));
        }
    }

    #[test]
    fn test_parse_int_prefix() {
        assert_eq!(parse_int_prefix("42"), Some(42));
        assert_eq!(parse_int_prefix("  -7abc"), Some(-7));
        assert_eq!(parse_int_prefix("+2"), Some(2));
        assert_eq!(parse_int_prefix("0xA"), Some(10));
        assert_eq!(parse_int_prefix("x1"), None);
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("-"), None);
        assert_eq!(parse_int_prefix("99999999999999999999999"), Some(i64::MAX));
    }

    #[test]
    fn test_patch_into_value() {
        let patch = HeaderDataPatch::level(HeadingLevel::H5);
        assert_eq!(patch.into_value(), json!({"level": 5}));

        let patch = HeaderDataPatch::text("hi").with_level(HeadingLevel::H1);
        assert_eq!(patch.into_value(), json!({"text": "hi", "level": 1}));

        let data = HeaderData::new("x", HeadingLevel::H3);
        assert_eq!(HeaderDataPatch::from(data.clone()).into_value(), data.to_value());
    }

    #[test]
    fn test_is_valid() {
        assert!(!HeaderData::new("   ", HeadingLevel::H2).is_valid());
        assert!(!HeaderData::new("", HeadingLevel::H2).is_valid());
        assert!(HeaderData::new("ok", HeadingLevel::H2).is_valid());
    }
}
