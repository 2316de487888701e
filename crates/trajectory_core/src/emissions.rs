//! Carbon footprint arithmetic: linear emission factors and saving tips.

use crate::error::EmissionsError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// kg CO₂ per kWh.
pub const ELECTRICITY_EMISSION_FACTOR: f64 = 0.5;
/// kg CO₂ per kg of waste.
pub const WASTE_EMISSION_FACTOR: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuelKind {
    Petrol,
    Diesel,
    Cng,
    Lpg,
    Coal,
}

impl FuelKind {
    pub const ALL: [FuelKind; 5] = [
        FuelKind::Petrol,
        FuelKind::Diesel,
        FuelKind::Cng,
        FuelKind::Lpg,
        FuelKind::Coal,
    ];

    /// kg CO₂ per unit of fuel.
    pub fn factor(self) -> f64 {
        match self {
            FuelKind::Petrol => 2.31,
            FuelKind::Diesel => 2.68,
            FuelKind::Cng => 2.0,
            FuelKind::Lpg => 1.51,
            FuelKind::Coal => 2.42,
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            FuelKind::Petrol | FuelKind::Diesel | FuelKind::Lpg => "liters",
            FuelKind::Cng | FuelKind::Coal => "kg",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FuelKind::Petrol => "Petrol",
            FuelKind::Diesel => "Diesel",
            FuelKind::Cng => "CNG (Compressed Natural Gas)",
            FuelKind::Lpg => "LPG (Liquefied Petroleum Gas)",
            FuelKind::Coal => "Coal",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            FuelKind::Petrol => "petrol",
            FuelKind::Diesel => "diesel",
            FuelKind::Cng => "cng",
            FuelKind::Lpg => "lpg",
            FuelKind::Coal => "coal",
        }
    }
}

impl FromStr for FuelKind {
    type Err = EmissionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        FuelKind::ALL
            .into_iter()
            .find(|kind| kind.key() == key)
            .ok_or_else(|| EmissionsError::UnknownFuelKind(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmissionCategory {
    Fuel,
    Electricity,
    Waste,
}

impl EmissionCategory {
    pub fn key(self) -> &'static str {
        match self {
            EmissionCategory::Fuel => "fuel",
            EmissionCategory::Electricity => "electricity",
            EmissionCategory::Waste => "waste",
        }
    }
}

impl FromStr for EmissionCategory {
    type Err = EmissionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fuel" => Ok(EmissionCategory::Fuel),
            "electricity" => Ok(EmissionCategory::Electricity),
            "waste" => Ok(EmissionCategory::Waste),
            _ => Err(EmissionsError::UnknownCategory(s.to_string())),
        }
    }
}

/// Emissions in kg CO₂ per category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionResult {
    pub fuel: f64,
    pub electricity: f64,
    pub waste: f64,
    pub total: f64,
    pub highest_category: EmissionCategory,
}

pub fn compute_emissions(
    fuel_kind: FuelKind,
    fuel_amount: f64,
    electricity_kwh: f64,
    waste_kg: f64,
) -> EmissionResult {
    let fuel = fuel_amount * fuel_kind.factor();
    let electricity = electricity_kwh * ELECTRICITY_EMISSION_FACTOR;
    let waste = waste_kg * WASTE_EMISSION_FACTOR;

    // A category only wins when strictly largest; ties fall back to fuel.
    let highest_category = if electricity > fuel && electricity > waste {
        EmissionCategory::Electricity
    } else if waste > fuel && waste > electricity {
        EmissionCategory::Waste
    } else {
        EmissionCategory::Fuel
    };

    EmissionResult {
        fuel,
        electricity,
        waste,
        total: fuel + electricity + waste,
        highest_category,
    }
}

const FUEL_TIPS: &[&str] = &[
    "Consider switching to public transportation or carpooling",
    "Maintain your vehicle regularly for better fuel efficiency",
    "Plan your trips to reduce unnecessary driving",
    "Consider switching to an electric or hybrid vehicle",
    "Walk or cycle for short distances",
];

const ELECTRICITY_TIPS: &[&str] = &[
    "Switch to LED bulbs - they use 75% less energy",
    "Unplug devices when not in use to avoid phantom loads",
    "Use natural light during the day",
    "Set your AC to 24-26°C for optimal efficiency",
    "Consider installing solar panels",
];

const WASTE_TIPS: &[&str] = &[
    "Start composting organic waste at home",
    "Reduce single-use plastic consumption",
    "Recycle paper, glass, and metal properly",
    "Buy products with minimal packaging",
    "Donate or repurpose items instead of throwing them away",
];

pub fn saving_tips(category: EmissionCategory) -> &'static [&'static str] {
    match category {
        EmissionCategory::Fuel => FUEL_TIPS,
        EmissionCategory::Electricity => ELECTRICITY_TIPS,
        EmissionCategory::Waste => WASTE_TIPS,
    }
}

/// Like [`saving_tips`], keyed by category name; unknown names give no tips.
pub fn saving_tips_for(category: &str) -> &'static [&'static str] {
    category.parse().map(saving_tips).unwrap_or_default()
}

/// Interprets user-entered text as a non-negative amount; anything else is zero.
pub fn parse_amount(input: &str) -> f64 {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn petrol_example_totals_and_ranks_categories() {
        let result = compute_emissions(FuelKind::Petrol, 10.0, 100.0, 20.0);
        assert!((result.fuel - 23.1).abs() < 1e-9);
        assert!((result.electricity - 50.0).abs() < 1e-9);
        assert!((result.waste - 10.0).abs() < 1e-9);
        assert!((result.total - 83.1).abs() < 1e-9);
        assert_eq!(result.highest_category, EmissionCategory::Electricity);
    }

    #[test]
    fn ties_and_zero_default_to_fuel() {
        let zero = compute_emissions(FuelKind::Diesel, 0.0, 0.0, 0.0);
        assert_eq!(zero.total, 0.0);
        assert_eq!(zero.highest_category, EmissionCategory::Fuel);

        let tie = compute_emissions(FuelKind::Cng, 0.0, 10.0, 10.0);
        assert_eq!(tie.highest_category, EmissionCategory::Fuel);
    }

    #[test]
    fn waste_wins_when_strictly_largest() {
        let result = compute_emissions(FuelKind::Coal, 1.0, 1.0, 100.0);
        assert!((result.fuel - 2.42).abs() < 1e-9);
        assert_eq!(result.highest_category, EmissionCategory::Waste);
    }

    #[test]
    fn fuel_kinds_parse_from_keys() {
        for kind in FuelKind::ALL {
            assert_eq!(kind.key().parse::<FuelKind>(), Ok(kind));
        }
        assert_eq!(" LPG ".parse::<FuelKind>(), Ok(FuelKind::Lpg));
        assert_eq!(
            "kerosene".parse::<FuelKind>(),
            Err(EmissionsError::UnknownFuelKind("kerosene".to_string()))
        );
        assert_eq!(FuelKind::Cng.unit(), "kg");
        assert_eq!(FuelKind::Petrol.unit(), "liters");
    }

    #[test]
    fn each_category_has_five_tips() {
        for category in [
            EmissionCategory::Fuel,
            EmissionCategory::Electricity,
            EmissionCategory::Waste,
        ] {
            assert_eq!(saving_tips(category).len(), 5);
            assert_eq!(saving_tips_for(category.key()), saving_tips(category));
        }
        assert_eq!(saving_tips(EmissionCategory::Fuel)[0], FUEL_TIPS[0]);
    }

    #[test]
    fn unknown_category_has_no_tips() {
        assert!(saving_tips_for("water").is_empty());
        assert!(saving_tips_for("").is_empty());
    }

    #[test]
    fn malformed_amounts_are_zero() {
        assert_eq!(parse_amount("12.5"), 12.5);
        assert_eq!(parse_amount(" 3 "), 3.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("-4"), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
        assert_eq!(parse_amount("inf"), 0.0);
    }
}
