//! DOM tests, run with `wasm-pack test --headless --firefox`.

use std::cell::Cell;
use std::rc::Rc;

use serde_json::json;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

use weaver_header_browser::{
    DomPastedElement, DomPlatform, HeaderBlock, HeaderConfig, HeadingLevel, HeadingSurface,
    HostApi, on_control_click,
};

wasm_bindgen_test_configure!(run_in_browser);

fn platform() -> DomPlatform {
    DomPlatform::new(HostApi::default()).unwrap()
}

fn block(raw: serde_json::Value, config: HeaderConfig) -> HeaderBlock<DomPlatform> {
    HeaderBlock::new(&raw, config.resolve().unwrap(), false, platform()).unwrap()
}

fn mount(block: &HeaderBlock<DomPlatform>) {
    let body = platform().document().body().unwrap();
    body.append_child(block.render().element()).unwrap();
}

#[wasm_bindgen_test]
fn surface_attributes() {
    let block = block(json!({"text": "Hi <b>there</b>", "level": 3}), HeaderConfig::default());
    let el = block.render().element();

    assert_eq!(el.class_name(), "ce-header");
    assert_eq!(el.tag_name(), "DIV");
    assert_eq!(el.inner_html(), "Hi <b>there</b>");
    assert_eq!(el.get_attribute("data-header").as_deref(), Some("H3"));
    assert_eq!(el.get_attribute("data-placeholder").as_deref(), Some(""));
    assert_eq!(el.content_editable(), "true");
    assert!(!block.render().is_mounted());
}

#[wasm_bindgen_test]
fn read_only_surface() {
    let config = HeaderConfig::default().resolve().unwrap();
    let block = HeaderBlock::new(&json!({"text": "x"}), config, true, platform()).unwrap();
    assert_eq!(block.render().element().content_editable(), "false");
}

#[wasm_bindgen_test]
fn data_reads_dom_edits() {
    let mut block = block(json!({"text": "a", "level": 2}), HeaderConfig::default());
    mount(&block);
    block.render().element().set_inner_html("typed");

    let data = block.data().unwrap();
    assert_eq!(data.text, "typed");
    assert_eq!(data.level, HeadingLevel::H2);
    block.render().element().remove();
}

#[wasm_bindgen_test]
fn settings_controls_and_click() {
    let mut block = block(json!({"text": "a", "level": 2}), HeaderConfig::default().with_levels([1, 2, 3]));
    let buttons = block.render_settings().unwrap();
    assert_eq!(buttons.len(), 3);

    let styles = HostApi::default().styles().clone();
    let active: Vec<String> = buttons
        .iter()
        .filter(|b| b.control().element().class_list().contains(&styles.settings_button_active))
        .filter_map(|b| b.control().element().get_attribute("data-level"))
        .collect();
    assert_eq!(active, vec!["2".to_string()]);

    let clicked = Rc::new(Cell::new(0));
    let counter = clicked.clone();
    let _listener = on_control_click(buttons[0].control(), move || counter.set(counter.get() + 1));
    buttons[0].control().element().click();
    assert_eq!(clicked.get(), 1);
}

#[wasm_bindgen_test]
fn paste_dom_element() {
    let document = platform().document().clone();
    let pasted = document.create_element("h4").unwrap();
    pasted.set_inner_html("From <i>clipboard</i>");

    let mut block = block(json!({}), HeaderConfig::default().with_levels([2, 3]));
    mount(&block);
    block.on_paste(DomPastedElement(pasted)).unwrap();

    let data = block.data().unwrap();
    assert_eq!(data.level, HeadingLevel::H3);
    assert_eq!(data.text, "From <i>clipboard</i>");
    assert_eq!(
        block.render().element().get_attribute("data-header").as_deref(),
        Some("H3")
    );
    block.render().element().remove();
}

#[wasm_bindgen_test]
fn host_api_translates() {
    let api = js_sys::eval(
        r#"({
            styles: { block: "b", settingsButton: "sb", settingsButtonActive: "sb-on" },
            i18n: { t: (key) => key === "Heading" ? "Überschrift" : key },
        })"#,
    )
    .unwrap();
    let api = HostApi::from_js(&api);

    assert_eq!(api.styles().settings_button, "sb");
    assert_eq!(api.styles().settings_button_active, "sb-on");
    assert_eq!(api.translate("Heading"), "Überschrift");
    assert_eq!(api.translate("other"), "other");
    assert_eq!(HostApi::from_js(&JsValue::UNDEFINED).translate("x"), "x");
}
