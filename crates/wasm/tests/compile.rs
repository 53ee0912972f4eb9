#![cfg(target_arch = "wasm32")]

use mdlive_wasm::compile;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

#[derive(Deserialize, Debug)]
struct HtmlOutput {
    html: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ComponentOutput {
    entry_component: String,
    preview_blocks: HashMap<String, String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Options<'a> {
    export_type: &'a str,
}

#[wasm_bindgen_test]
fn compile_basic_markdown() {
    let source = "# Hello World\n\nThis is **bold** text.";
    let result =
        compile(source, "/docs/test.md", JsValue::UNDEFINED).expect("compile should succeed");

    let result: HtmlOutput = serde_wasm_bindgen::from_value(result).expect("deserialize result");
    assert_eq!(
        result.html,
        "<h1>Hello World</h1><p>This is <strong>bold</strong> text.</p>"
    );
}

#[wasm_bindgen_test]
fn compile_defaults_to_html_for_null_options() {
    let result = compile("# Hi", "/docs/test.md", JsValue::NULL).expect("compile should succeed");

    let result: HtmlOutput = serde_wasm_bindgen::from_value(result).expect("deserialize result");
    assert_eq!(result.html, "<h1>Hi</h1>");
}

#[wasm_bindgen_test]
fn compile_component_export() {
    let source = "```san export=preview\nvar x = 1;\n```\n";
    let options = serde_wasm_bindgen::to_value(&Options {
        export_type: "component",
    })
    .expect("options value");

    let result = compile(source, "/docs/demo.md", options).expect("compile should succeed");
    let result: ComponentOutput =
        serde_wasm_bindgen::from_value(result).expect("deserialize result");

    assert!(
        result
            .entry_component
            .contains("'preview-block-1-f677d6b': PreviewBlock1_f677d6b"),
        "entry: {}",
        result.entry_component
    );
    assert_eq!(result.preview_blocks.len(), 2);
    assert_eq!(
        result
            .preview_blocks
            .get("Component1_f677d6b.vpms")
            .map(String::as_str),
        Some("var x = 1;")
    );
    assert!(
        result
            .preview_blocks
            .contains_key("PreviewBlock1_f677d6b.vpms")
    );
}

#[wasm_bindgen_test]
fn compile_rejects_empty_filepath() {
    assert!(compile("# Hello", "", JsValue::UNDEFINED).is_err());
}
