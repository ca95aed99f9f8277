use std::collections::BTreeMap;

use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Category name to kilograms collected, as sent by the client.
pub type WasteInput = BTreeMap<String, f64>;

#[derive(EnumString, VariantArray, Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
pub enum WasteCategory {
    Plastic,
    Metal,
    Glass,
    Paper,
    Organic,
    Other,
}

/// Weight applied to categories missing from [`WEIGHTS`].
pub const DEFAULT_WEIGHT: f64 = 2.0;

pub const WEIGHTS: &[(WasteCategory, f64)] = &[
    (WasteCategory::Plastic, 4.0),
    (WasteCategory::Metal, 3.0),
];

impl WasteCategory {
    /// Exact-case lookup; unknown names fall into [`WasteCategory::Other`].
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or(WasteCategory::Other)
    }

    pub fn weight(&self) -> f64 {
        WEIGHTS
            .iter()
            .find(|(category, _)| category == self)
            .map(|(_, weight)| *weight)
            .unwrap_or(DEFAULT_WEIGHT)
    }
}

/// Sum of `kg * weight` over every entry of the mapping.
pub fn compute_risk_score(input: &WasteInput) -> f64 {
    input
        .iter()
        .map(|(name, kg)| kg * WasteCategory::from_name(name).weight())
        .sum()
}

pub fn total_kg(input: &WasteInput) -> f64 {
    input.values().sum()
}

pub fn validate_input(input: &WasteInput) -> ecoclean_shared::Result<()> {
    for (name, kg) in input {
        if !kg.is_finite() || *kg < 0.0 {
            ecoclean_shared::user!("Quantity for {name} must be a non-negative number");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(entries: &[(&str, f64)]) -> WasteInput {
        entries
            .iter()
            .map(|(name, kg)| (name.to_string(), *kg))
            .collect()
    }

    #[test]
    fn weight_table() {
        assert_eq!(WasteCategory::Plastic.weight(), 4.0);
        assert_eq!(WasteCategory::Metal.weight(), 3.0);
        for category in WasteCategory::VARIANTS {
            if !matches!(category, WasteCategory::Plastic | WasteCategory::Metal) {
                assert_eq!(category.weight(), DEFAULT_WEIGHT);
            }
        }
    }

    #[test]
    fn unknown_and_differently_cased_names_use_default_weight() {
        assert_eq!(WasteCategory::from_name("Styrofoam"), WasteCategory::Other);
        assert_eq!(WasteCategory::from_name("plastic"), WasteCategory::Other);
        assert_eq!(WasteCategory::from_name("Plastic"), WasteCategory::Plastic);
    }

    #[test]
    fn risk_score_is_weighted_sum() {
        let score = compute_risk_score(&input(&[("Plastic", 2.0), ("Metal", 1.0), ("Paper", 3.0)]));
        assert_eq!(score, 17.0);
    }

    #[test]
    fn risk_score_same_for_all_six_insertion_orders() {
        let orders = [
            [("Plastic", 2.0), ("Metal", 1.0), ("Paper", 3.0)],
            [("Plastic", 2.0), ("Paper", 3.0), ("Metal", 1.0)],
            [("Metal", 1.0), ("Plastic", 2.0), ("Paper", 3.0)],
            [("Metal", 1.0), ("Paper", 3.0), ("Plastic", 2.0)],
            [("Paper", 3.0), ("Plastic", 2.0), ("Metal", 1.0)],
            [("Paper", 3.0), ("Metal", 1.0), ("Plastic", 2.0)],
        ];

        for order in orders {
            assert_eq!(compute_risk_score(&input(&order)), 17.0);
        }
    }

    #[test]
    fn empty_input_scores_zero() {
        assert_eq!(compute_risk_score(&WasteInput::new()), 0.0);
        assert_eq!(total_kg(&WasteInput::new()), 0.0);
    }

    #[test]
    fn rejects_negative_and_non_finite_quantities() {
        assert!(validate_input(&input(&[("Plastic", 2.0), ("Metal", 0.0)])).is_ok());
        assert!(validate_input(&input(&[("Plastic", -1.0)])).is_err());
        assert!(validate_input(&input(&[("Plastic", f64::NAN)])).is_err());
        assert!(validate_input(&input(&[("Plastic", f64::INFINITY)])).is_err());
    }
}
