//! WASM bindings for the trajectory and emissions calculators.
//!
//! `solver` exposes the orthogonal trajectory pipeline, `emissions` the carbon
//! footprint arithmetic. Results cross the boundary as plain serialized objects.

mod emissions;
mod solver;

pub use emissions::{compute_emissions, fuel_kinds, saving_tips};
pub use solver::{
    default_params, example_equations, match_equation, solve_equation, unrecognized_hint,
    WasmTrajectorySolver,
};

use wasm_bindgen::prelude::*;

pub(crate) fn to_js_error(err: anyhow::Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}

pub(crate) fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

