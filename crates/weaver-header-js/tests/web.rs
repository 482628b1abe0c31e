//! Binding tests, run with `wasm-pack test --headless --firefox`.

use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

use weaver_header_js::{HeaderTool, JsHeaderData};

wasm_bindgen_test_configure!(run_in_browser);

fn options(source: &str) -> JsValue {
    js_sys::eval(&format!("({source})")).unwrap()
}

#[wasm_bindgen_test]
fn construct_render_and_read() {
    let mut tool = HeaderTool::new(options(
        r#"{ data: { text: "Intro", level: "3" }, config: { levels: [2, 3] }, readOnly: false }"#,
    ))
    .unwrap();

    let el = tool.render();
    assert_eq!(el.get_attribute("data-header").as_deref(), Some("H3"));
    assert_eq!(
        tool.data().unwrap(),
        JsHeaderData {
            text: "Intro".into(),
            level: 3
        }
    );

    tool.set_level(2).unwrap();
    assert_eq!(tool.data().unwrap().level, 2);
    assert!(tool.set_level(9).is_err());
}

#[wasm_bindgen_test]
fn settings_holder() {
    let mut tool = HeaderTool::new(options(r#"{ data: {}, config: { levels: [1, 2, 3] } }"#)).unwrap();
    let holder = tool.render_settings().unwrap();
    assert_eq!(holder.child_element_count(), 3);

    let mut single = HeaderTool::new(options(r#"{ data: {}, config: { levels: [4] } }"#)).unwrap();
    assert_eq!(single.render_settings().unwrap().child_element_count(), 0);
}

#[wasm_bindgen_test]
fn rejects_empty_level_list() {
    assert!(HeaderTool::new(options(r#"{ data: {}, config: { levels: [] } }"#)).is_err());
}

#[wasm_bindgen_test]
fn validate_and_merge() {
    let mut tool = HeaderTool::new(options(r#"{ data: { text: "hello", level: 2 } }"#)).unwrap();
    assert!(!tool.validate(options(r#"{ text: "   ", level: 2 }"#)));
    assert!(tool.validate(options(r#"{ text: "ok", level: 2 }"#)));

    tool.merge(options(r#"{ text: " world", level: 5 }"#)).unwrap();
    assert_eq!(
        tool.data().unwrap(),
        JsHeaderData {
            text: "hello world".into(),
            level: 2
        }
    );
}

#[wasm_bindgen_test]
fn static_metadata() {
    assert!(HeaderTool::is_read_only_supported());

    let toolbox = HeaderTool::toolbox().unwrap();
    let title = js_sys::Reflect::get(&toolbox, &JsValue::from_str("title")).unwrap();
    assert_eq!(title.as_string().as_deref(), Some("Heading"));

    let sub_tools = HeaderTool::get_sub_tools(options("{ levels: [4, 2] }")).unwrap();
    let sub_tools = js_sys::Array::from(&sub_tools);
    assert_eq!(sub_tools.length(), 2);
}

#[wasm_bindgen_test]
fn sub_tools_for_empty_level_list() {
    let sub_tools = HeaderTool::get_sub_tools(options("{ levels: [] }")).unwrap();
    assert!(js_sys::Array::is_array(&sub_tools));
    assert_eq!(js_sys::Array::from(&sub_tools).length(), 0);

    let sub_tools = HeaderTool::get_sub_tools(JsValue::UNDEFINED).unwrap();
    assert_eq!(js_sys::Array::from(&sub_tools).length(), 6);
}
