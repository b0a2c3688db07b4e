//! Boundary serialization checks, run with `wasm-pack test --headless`.
#![cfg(target_arch = "wasm32")]

use prompt_relay::inject::InjectionPlan;
use prompt_relay::query::suggestions_for;
use prompt_relay::tab_data::TabInfo;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn suggestions_serialize_to_a_js_array() {
    let suggestions = suggestions_for("hello");
    let value = serde_wasm_bindgen::to_value(&suggestions).unwrap();

    assert!(js_sys::Array::is_array(&value));
    assert_eq!(js_sys::Array::from(&value).length(), 1);
}

#[wasm_bindgen_test]
fn plan_round_trips_across_the_boundary() {
    let plan = InjectionPlan::chat_input();

    let value = serde_wasm_bindgen::to_value(&plan).unwrap();
    let round: InjectionPlan = serde_wasm_bindgen::from_value(value).unwrap();

    assert_eq!(round, plan);
}

#[wasm_bindgen_test]
fn tab_info_round_trips_across_the_boundary() {
    let tab = TabInfo::new(3, "https://chatgpt.com/".to_string(), "ChatGPT".to_string(), true, 1);

    let value = serde_wasm_bindgen::to_value(&tab).unwrap();
    let round: TabInfo = serde_wasm_bindgen::from_value(value).unwrap();

    assert_eq!(round, tab);
}
