//! Carbon footprint calculator bindings.

use crate::{to_js, to_js_error};
use js_sys::Array;
use serde::Serialize;
use trajectory_core::emissions::{
    compute_emissions as core_emissions, parse_amount, saving_tips_for, EmissionResult, FuelKind,
};
use wasm_bindgen::prelude::*;

#[derive(Debug, Serialize)]
pub(crate) struct FuelOption {
    key: &'static str,
    label: &'static str,
    unit: &'static str,
    factor: f64,
}

pub(crate) fn fuel_options() -> Vec<FuelOption> {
    FuelKind::ALL
        .into_iter()
        .map(|kind| FuelOption {
            key: kind.key(),
            label: kind.label(),
            unit: kind.unit(),
            factor: kind.factor(),
        })
        .collect()
}

/// Amounts arrive as raw form text; unparseable or negative input counts as zero.
pub(crate) fn emissions_from_form(
    fuel_kind: &str,
    fuel_amount: &str,
    electricity_kwh: &str,
    waste_kg: &str,
) -> anyhow::Result<EmissionResult> {
    let kind: FuelKind = fuel_kind.parse()?;
    Ok(core_emissions(
        kind,
        parse_amount(fuel_amount),
        parse_amount(electricity_kwh),
        parse_amount(waste_kg),
    ))
}

#[wasm_bindgen]
pub fn compute_emissions(
    fuel_kind: &str,
    fuel_amount: &str,
    electricity_kwh: &str,
    waste_kg: &str,
) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();
    let result = emissions_from_form(fuel_kind, fuel_amount, electricity_kwh, waste_kg)
        .map_err(to_js_error)?;
    to_js(&result)
}

#[wasm_bindgen]
pub fn saving_tips(category: &str) -> Array {
    saving_tips_for(category)
        .iter()
        .map(|tip| JsValue::from_str(tip))
        .collect()
}

#[wasm_bindgen]
pub fn fuel_kinds() -> Result<JsValue, JsValue> {
    to_js(&fuel_options())
}

#[cfg(test)]
mod tests {
    use super::*;
    use trajectory_core::emissions::EmissionCategory;

    #[test]
    fn form_input_is_sanitized_before_arithmetic() {
        let result = emissions_from_form("petrol", "10", "100", "twenty").expect("petrol is known");
        assert!((result.fuel - 23.1).abs() < 1e-9);
        assert!((result.electricity - 50.0).abs() < 1e-9);
        assert_eq!(result.waste, 0.0);
        assert_eq!(result.highest_category, EmissionCategory::Electricity);
    }

    #[test]
    fn unknown_fuel_kind_is_an_error() {
        let err = emissions_from_form("kerosene", "1", "1", "1").expect_err("unknown fuel");
        assert!(err.to_string().contains("kerosene"));
    }

    #[test]
    fn fuel_options_follow_catalog_order() {
        let options = fuel_options();
        let keys: Vec<&str> = options.iter().map(|o| o.key).collect();
        assert_eq!(keys, vec!["petrol", "diesel", "cng", "lpg", "coal"]);
        assert_eq!(options[1].factor, 2.68);
    }
}
