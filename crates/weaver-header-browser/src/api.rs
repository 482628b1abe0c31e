//! Bridge to the host editor's `api` object.
//!
//! The host passes `api` at construction. Only two parts are used: the
//! settings button classes under `api.styles` and the translator at
//! `api.i18n.t`. Both are read once and kept as plain values.

use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

/// Class names the host uses for settings controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostStyles {
    pub settings_button: String,
    pub settings_button_active: String,
}

impl Default for HostStyles {
    fn default() -> Self {
        Self {
            settings_button: "cdx-settings-button".into(),
            settings_button_active: "cdx-settings-button--active".into(),
        }
    }
}

/// The parts of the host `api` the header block talks to.
#[derive(Debug, Clone, Default)]
pub struct HostApi {
    styles: HostStyles,
    i18n: Option<(JsValue, Function)>,
}

impl HostApi {
    /// Read styles and the translator from a host `api` object.
    ///
    /// Missing pieces fall back to default class names and an identity
    /// translation.
    pub fn from_js(api: &JsValue) -> Self {
        let defaults = HostStyles::default();
        let styles = get(api, "styles");
        let class = |name: &str, fallback: String| {
            get(&styles, name).as_string().unwrap_or(fallback)
        };

        let styles = HostStyles {
            settings_button: class("settingsButton", defaults.settings_button),
            settings_button_active: class(
                "settingsButtonActive",
                defaults.settings_button_active,
            ),
        };

        let i18n = get(api, "i18n");
        let translator = get(&i18n, "t").dyn_into::<Function>().ok();
        if translator.is_none() {
            tracing::debug!("host api has no i18n.t, placeholders are untranslated");
        }

        Self {
            styles,
            i18n: translator.map(|t| (i18n, t)),
        }
    }

    pub fn with_styles(mut self, styles: HostStyles) -> Self {
        self.styles = styles;
        self
    }

    pub fn styles(&self) -> &HostStyles {
        &self.styles
    }

    /// Translate a key through `api.i18n.t`, falling back to the key itself.
    pub fn translate(&self, key: &str) -> String {
        let Some((this, t)) = &self.i18n else {
            return key.to_string();
        };
        match t.call1(this, &JsValue::from_str(key)) {
            Ok(value) => value.as_string().unwrap_or_else(|| key.to_string()),
            Err(e) => {
                tracing::warn!(key, error = ?e, "i18n.t failed");
                key.to_string()
            }
        }
    }
}

fn get(target: &JsValue, key: &str) -> JsValue {
    if !target.is_object() {
        return JsValue::UNDEFINED;
    }
    Reflect::get(target, &JsValue::from_str(key)).unwrap_or(JsValue::UNDEFINED)
}
