//! Orthogonal trajectory solver bindings.

use crate::{to_js, to_js_error};
use anyhow::anyhow;
use js_sys::Array;
use serde::Serialize;
use trajectory_core::catalog::{FamilyDescriptor, FamilyKind};
use trajectory_core::error::TrajectoryError;
use trajectory_core::matcher::{find_matching_family, EXAMPLE_EQUATIONS, UNRECOGNIZED_HINT};
use trajectory_core::params::DefaultParams;
use trajectory_core::traits::CurveFamily;
use trajectory_core::trajectory::{solve, PlotTrace, TrajectoryPlot};
use wasm_bindgen::prelude::*;

/// Labels and derivation of a matched family, without any sampled curves.
#[derive(Debug, Serialize)]
pub(crate) struct FamilySummary {
    kind: FamilyKind,
    name: &'static str,
    original: &'static str,
    orthogonal: &'static str,
    steps: &'static [&'static str],
}

impl From<&FamilyDescriptor> for FamilySummary {
    fn from(family: &FamilyDescriptor) -> Self {
        Self {
            kind: family.kind,
            name: family.name(),
            original: family.original_label(),
            orthogonal: family.orthogonal_label(),
            steps: family.steps(),
        }
    }
}

pub(crate) fn summarize_match(equation: &str) -> Option<FamilySummary> {
    find_matching_family(equation).map(FamilySummary::from)
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub(crate) enum SolveResponse {
    Matched {
        plot: TrajectoryPlot,
        traces: Vec<PlotTrace>,
    },
    NotFound {
        equation: String,
        hint: String,
    },
}

pub(crate) fn build_response(equation: &str, params: &DefaultParams) -> SolveResponse {
    match solve(equation, params) {
        Ok(plot) => {
            let traces = plot.traces();
            SolveResponse::Matched { plot, traces }
        }
        Err(TrajectoryError::Unrecognized { equation, hint }) => SolveResponse::NotFound {
            equation,
            hint: hint.to_string(),
        },
    }
}

fn parse_params(value: JsValue) -> anyhow::Result<DefaultParams> {
    if value.is_undefined() || value.is_null() {
        return Ok(DefaultParams::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| anyhow!("Invalid parameters: {e}"))
}

#[wasm_bindgen]
pub struct WasmTrajectorySolver {
    params: DefaultParams,
}

impl WasmTrajectorySolver {
    pub(crate) fn with_params(params: DefaultParams) -> Self {
        Self { params }
    }

    pub(crate) fn respond(&self, equation: &str) -> SolveResponse {
        build_response(equation, &self.params)
    }
}

#[wasm_bindgen]
impl WasmTrajectorySolver {
    /// `params` may be `undefined`/`null` for the defaults, or an object with
    /// `original` and/or `orthogonal` constant arrays.
    #[wasm_bindgen(constructor)]
    pub fn new(params: JsValue) -> Result<WasmTrajectorySolver, JsValue> {
        console_error_panic_hook::set_once();
        let params = parse_params(params).map_err(to_js_error)?;
        Ok(Self::with_params(params))
    }

    pub fn solve(&self, equation: &str) -> Result<JsValue, JsValue> {
        to_js(&self.respond(equation))
    }

    pub fn params(&self) -> Result<JsValue, JsValue> {
        to_js(&self.params)
    }
}

/// Matches `equation` against the catalog without sampling; `null` when unrecognized.
#[wasm_bindgen]
pub fn match_equation(equation: &str) -> Result<JsValue, JsValue> {
    match summarize_match(equation) {
        Some(summary) => to_js(&summary),
        None => Ok(JsValue::NULL),
    }
}

/// Solves `equation` with the default family constants.
#[wasm_bindgen]
pub fn solve_equation(equation: &str) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();
    to_js(&build_response(equation, &DefaultParams::default()))
}

#[wasm_bindgen]
pub fn default_params() -> Result<JsValue, JsValue> {
    to_js(&DefaultParams::default())
}

#[wasm_bindgen]
pub fn example_equations() -> Array {
    EXAMPLE_EQUATIONS
        .iter()
        .map(|example| JsValue::from_str(example))
        .collect()
}

#[wasm_bindgen]
pub fn unrecognized_hint() -> String {
    UNRECOGNIZED_HINT.to_string()
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::{default_params, match_equation, solve_equation, WasmTrajectorySolver};
    use js_sys::Reflect;
    use serde::Serialize;
    use serde_wasm_bindgen::{from_value, to_value};
    use trajectory_core::params::DefaultParams;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[derive(Serialize)]
    struct OriginalOnly {
        original: Vec<f64>,
    }

    fn field(value: &JsValue, name: &str) -> JsValue {
        Reflect::get(value, &JsValue::from_str(name)).expect("field")
    }

    #[wasm_bindgen_test]
    fn constructor_rejects_malformed_params() {
        let result = WasmTrajectorySolver::new(JsValue::from_str("not params"));
        assert!(result.is_err(), "expected invalid parameter error");
    }

    #[wasm_bindgen_test]
    fn constructor_uses_defaults_for_undefined_and_null() {
        for value in [JsValue::UNDEFINED, JsValue::NULL] {
            let solver = WasmTrajectorySolver::new(value).expect("solver");
            let params: DefaultParams = from_value(solver.params().expect("params")).expect("decode");
            assert_eq!(params, DefaultParams::default());
        }
    }

    #[wasm_bindgen_test]
    fn partial_override_keeps_default_orthogonal_constants() {
        let value = to_value(&OriginalOnly {
            original: vec![3.0],
        })
        .expect("params");
        let solver = WasmTrajectorySolver::new(value).expect("solver");
        let params: DefaultParams = from_value(solver.params().expect("params")).expect("decode");
        assert_eq!(params.original, vec![3.0]);
        assert_eq!(params.orthogonal, DefaultParams::default().orthogonal);
    }

    #[wasm_bindgen_test]
    fn solve_response_is_tagged_by_status() {
        let matched = solve_equation("xy = C").expect("response");
        assert_eq!(field(&matched, "status").as_string().as_deref(), Some("matched"));
        let plot = field(&matched, "plot");
        assert_eq!(field(&plot, "kind").as_string().as_deref(), Some("hyperbolas"));
        assert!(js_sys::Array::is_array(&field(&matched, "traces")));

        let missing = solve_equation("garbage").expect("response");
        assert_eq!(field(&missing, "status").as_string().as_deref(), Some("not_found"));
        assert!(field(&missing, "hint")
            .as_string()
            .expect("hint")
            .starts_with("Equation not recognized."));
    }

    #[wasm_bindgen_test]
    fn match_equation_returns_null_when_unrecognized() {
        assert!(match_equation("garbage").expect("response").is_null());
        let summary = match_equation("y = Cx^2").expect("response");
        assert_eq!(field(&summary, "kind").as_string().as_deref(), Some("parabolas"));
    }

    #[wasm_bindgen_test]
    fn default_params_round_trip() {
        let params: DefaultParams = from_value(default_params().expect("params")).expect("decode");
        assert_eq!(params, DefaultParams::default());
    }
}
