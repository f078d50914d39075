//! Facade error paths; these build a `JsValue`, so they only run on wasm32
//! (`wasm-pack test --node`).
#![cfg(target_arch = "wasm32")]

use grainfall_engine::Simulation;
use wasm_bindgen_test::*;

fn rejection(input: &str, config_json: Option<&str>) -> String {
    match Simulation::new(input, config_json.map(String::from)) {
        Ok(_) => panic!("expected {input:?} / {config_json:?} to be rejected"),
        Err(err) => err.as_string().unwrap_or_default(),
    }
}

#[wasm_bindgen_test]
fn malformed_input_is_rejected_with_its_line() {
    let msg = rejection("1,x -> 2,2", None);
    assert!(msg.contains("line 1"), "{msg}");
    assert!(msg.contains("1,x"), "{msg}");
}

#[wasm_bindgen_test]
fn unknown_config_field_is_rejected() {
    let msg = rejection("0,10 -> 10,10", Some(r#"{"gravity":1}"#));
    assert!(msg.starts_with("invalid config json"), "{msg}");
}

#[wasm_bindgen_test]
fn out_of_range_walls_are_rejected() {
    let msg = rejection("-2147483648,0 -> 2147483647,0", None);
    assert!(msg.contains("outside"), "{msg}");
}

#[wasm_bindgen_test]
fn valid_input_still_builds() {
    let sim = Simulation::new("0,10 -> 10,10", Some(r#"{"spawn_point":{"x":5,"y":0}}"#.into()));
    assert!(sim.is_ok());
}
