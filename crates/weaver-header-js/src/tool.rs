//! HeaderTool - the block tool class handed to the JavaScript host.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement};

use weaver_header_browser::{
    DomPastedElement, DomPlatform, DomSurface, EffectiveConfig, HeaderBlock, HeaderConfig,
    HeadingLevel, HostApi, ToolCapabilities, normalize, on_control_click,
};

use crate::types::JsHeaderData;

type Block = HeaderBlock<DomPlatform>;

/// A header block instance.
///
/// Constructed by the host with `{data, config, api, readOnly}`.
#[wasm_bindgen]
pub struct HeaderTool {
    block: Rc<RefCell<Block>>,
    listeners: Vec<EventListener>,
}

#[wasm_bindgen]
impl HeaderTool {
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<HeaderTool, JsError> {
        let config_json = config_value(&field(&options, "config"))?;
        let config = resolve_config(config_json.clone())?;
        let data = loose_value(&field(&options, "data"));
        let read_only = field(&options, "readOnly").as_bool().unwrap_or(false);

        let api = HostApi::from_js(&field(&options, "api"));
        let mut platform = DomPlatform::new(api)
            .map_err(|e| JsError::new(&format!("Failed to set up DOM platform: {}", e)))?;
        if let Some(icons) = config_json.get("icons").and_then(Value::as_object) {
            for (key, markup) in icons {
                if let Some(markup) = markup.as_str() {
                    platform = platform.with_icon(key.as_str(), markup);
                }
            }
        }

        let block = HeaderBlock::new(&data, config, read_only, platform)
            .map_err(|e| JsError::new(&format!("Failed to create header block: {}", e)))?;

        Ok(Self {
            block: Rc::new(RefCell::new(block)),
            listeners: Vec::new(),
        })
    }

    // === Host contract ===

    /// The block's root element. Always the same element.
    #[wasm_bindgen]
    pub fn render(&self) -> HtmlElement {
        self.block.borrow().render().element().clone()
    }

    /// Build the level selector panel.
    ///
    /// Returns an empty holder when only one level is configured.
    #[wasm_bindgen(js_name = renderSettings)]
    pub fn render_settings(&mut self) -> Result<HtmlElement, JsError> {
        self.listeners.clear();

        let mut block = self.block.borrow_mut();
        let holder = block
            .platform()
            .create_holder()
            .map_err(|e| JsError::new(&format!("Failed to create settings holder: {}", e)))?;

        let buttons = block
            .render_settings()
            .map_err(|e| JsError::new(&format!("Failed to render settings: {}", e)))?;

        for button in buttons {
            holder
                .append_child(button.control().element())
                .map_err(|e| JsError::new(&format!("Failed to append settings button: {:?}", e)))?;

            let weak = Rc::downgrade(&self.block);
            let level = button.level();
            self.listeners.push(on_control_click(button.control(), move || {
                let Some(block) = weak.upgrade() else {
                    return;
                };
                let Ok(mut block) = block.try_borrow_mut() else {
                    tracing::warn!(%level, "header block busy, ignoring level click");
                    return;
                };
                if let Err(e) = block.set_level(level) {
                    tracing::warn!(%level, error = %e, "failed to set heading level");
                }
            }));
        }

        Ok(holder)
    }

    /// Extract saved data from the rendered element.
    #[wasm_bindgen]
    pub fn save(&self, block_content: HtmlElement) -> Result<JsHeaderData, JsError> {
        let surface = DomSurface::from(block_content);
        let data = self
            .block
            .borrow()
            .save(&surface)
            .map_err(|e| JsError::new(&format!("Failed to save header: {}", e)))?;
        Ok(data.into())
    }

    /// False when the saved data has blank text.
    #[wasm_bindgen]
    pub fn validate(&self, saved: JsValue) -> bool {
        let block = self.block.borrow();
        let data = normalize(&loose_value(&saved), block.config());
        block.validate(&data)
    }

    /// Append another header's text to this block.
    #[wasm_bindgen]
    pub fn merge(&mut self, data: JsValue) -> Result<(), JsError> {
        self.block
            .borrow_mut()
            .merge(&loose_value(&data))
            .map_err(|e| JsError::new(&format!("Failed to merge header: {}", e)))
    }

    /// Absorb a pasted `H1`..`H6` element from a paste event.
    #[wasm_bindgen(js_name = onPaste)]
    pub fn on_paste(&mut self, event: JsValue) -> Result<(), JsError> {
        let element = field(&field(&event, "detail"), "data")
            .dyn_into::<Element>()
            .map_err(|_| JsError::new("Paste event carries no element"))?;

        self.block
            .borrow_mut()
            .on_paste(DomPastedElement(element))
            .map_err(|e| JsError::new(&format!("Failed to paste header: {}", e)))
    }

    /// Current data, with edits pulled from the element.
    #[wasm_bindgen(getter)]
    pub fn data(&self) -> Result<JsHeaderData, JsError> {
        let data = self
            .block
            .borrow_mut()
            .data()
            .map_err(|e| JsError::new(&format!("Failed to read header data: {}", e)))?;
        Ok(data.into())
    }

    #[wasm_bindgen(setter = data)]
    pub fn set_data(&self, data: JsValue) {
        if let Err(e) = self.block.borrow_mut().set_data(&loose_value(&data)) {
            tracing::warn!(error = %e, "failed to write header data");
        }
    }

    /// Switch to another heading level, keeping the text.
    #[wasm_bindgen(js_name = setLevel)]
    pub fn set_level(&mut self, level: u8) -> Result<(), JsError> {
        let level = HeadingLevel::new(level)
            .ok_or_else(|| JsError::new(&format!("Invalid heading level: {}", level)))?;
        self.block
            .borrow_mut()
            .set_level(level)
            .map_err(|e| JsError::new(&format!("Failed to set heading level: {}", e)))
    }

    // === Tool metadata ===

    #[wasm_bindgen(getter)]
    pub fn toolbox() -> Result<JsValue, JsError> {
        to_js(&Block::toolbox())
    }

    #[wasm_bindgen(getter, js_name = conversionConfig)]
    pub fn conversion_config() -> Result<JsValue, JsError> {
        to_js(&Block::conversion_config())
    }

    #[wasm_bindgen(getter)]
    pub fn sanitize() -> Result<JsValue, JsError> {
        to_js(&Block::sanitize())
    }

    #[wasm_bindgen(getter, js_name = pasteConfig)]
    pub fn paste_config() -> Result<JsValue, JsError> {
        to_js(&Block::paste_config())
    }

    #[wasm_bindgen(getter, js_name = isReadOnlySupported)]
    pub fn is_read_only_supported() -> bool {
        Block::is_read_only_supported()
    }

    /// Toolbox entries, one per configured level.
    ///
    /// A `levels` list with no valid level gives an empty array. Throws only
    /// when the config cannot be read at all.
    #[wasm_bindgen(js_name = getSubTools)]
    pub fn get_sub_tools(config: JsValue) -> Result<JsValue, JsError> {
        let config = HeaderConfig::from_value(config_value(&config)?)
            .map_err(|e| JsError::new(&format!("Invalid header config: {}", e)))?;
        to_js(&config.sub_tools())
    }
}

fn field(target: &JsValue, key: &str) -> JsValue {
    if !target.is_object() {
        return JsValue::UNDEFINED;
    }
    js_sys::Reflect::get(target, &JsValue::from_str(key)).unwrap_or(JsValue::UNDEFINED)
}

/// Block data from the host; anything unrepresentable becomes `null`
/// and is normalized to defaults.
fn loose_value(value: &JsValue) -> Value {
    serde_wasm_bindgen::from_value(value.clone()).unwrap_or(Value::Null)
}

fn config_value(value: &JsValue) -> Result<Value, JsError> {
    if value.is_undefined() || value.is_null() {
        return Ok(Value::Null);
    }
    serde_wasm_bindgen::from_value(value.clone())
        .map_err(|e| JsError::new(&format!("Invalid header config: {}", e)))
}

fn resolve_config(value: Value) -> Result<EffectiveConfig, JsError> {
    HeaderConfig::from_value(value)
        .and_then(HeaderConfig::resolve)
        .map_err(|e| JsError::new(&format!("Invalid header config: {}", e)))
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}
