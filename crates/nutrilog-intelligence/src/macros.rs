// ABOUTME: Macronutrient presets and daily gram targets
// ABOUTME: Resolves a preset or custom split and converts calories into carbs, protein and fat grams
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutrilog_core::constants::macros::{
    KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN, PERCENT_TOTAL_TOLERANCE,
};
use nutrilog_core::errors::{AppError, AppResult};
pub use nutrilog_core::models::MacroPreset;
use serde::{Deserialize, Serialize};

/// Share of daily calories per macronutrient, in percent
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroDistribution {
    /// Carbohydrates
    pub carbs_percent: f64,
    /// Protein
    pub protein_percent: f64,
    /// Fat
    pub fat_percent: f64,
}

impl MacroDistribution {
    /// Create a distribution from percentages
    #[must_use]
    pub const fn new(carbs_percent: f64, protein_percent: f64, fat_percent: f64) -> Self {
        Self {
            carbs_percent,
            protein_percent,
            fat_percent,
        }
    }

    /// Check that each share is within 0-100 and the total is 100 (within 1 point)
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` describing the offending total or share
    pub fn validate(&self) -> AppResult<()> {
        let shares = [self.carbs_percent, self.protein_percent, self.fat_percent];
        if shares.iter().any(|p| !(0.0..=100.0).contains(p)) {
            return Err(AppError::out_of_range(
                "Macro percentages must each be between 0 and 100",
            ));
        }
        let total: f64 = shares.iter().sum();
        if (total - 100.0).abs() > PERCENT_TOTAL_TOLERANCE {
            return Err(AppError::out_of_range(format!(
                "Macro percentages must total 100, got {total}"
            )));
        }
        Ok(())
    }
}

/// Fixed split for a preset; `None` for `Custom`
#[must_use]
pub const fn preset_distribution(preset: MacroPreset) -> Option<MacroDistribution> {
    match preset {
        MacroPreset::Balanced => Some(MacroDistribution::new(40.0, 30.0, 30.0)),
        MacroPreset::LowCarb => Some(MacroDistribution::new(20.0, 40.0, 40.0)),
        MacroPreset::HighProtein => Some(MacroDistribution::new(30.0, 40.0, 30.0)),
        MacroPreset::Keto => Some(MacroDistribution::new(5.0, 25.0, 70.0)),
        MacroPreset::Mediterranean => Some(MacroDistribution::new(45.0, 20.0, 35.0)),
        MacroPreset::Custom => None,
    }
}

/// Pick the split for a preset, using `custom` for the `Custom` preset
#[must_use]
pub fn resolve_distribution(preset: MacroPreset, custom: MacroDistribution) -> MacroDistribution {
    preset_distribution(preset).unwrap_or(custom)
}

/// Daily gram targets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroTargets {
    /// Carbohydrates (g)
    pub carbs_g: f64,
    /// Protein (g)
    pub protein_g: f64,
    /// Fat (g)
    pub fat_g: f64,
    /// Split the targets were derived from
    pub distribution: MacroDistribution,
}

/// Convert a calorie goal into whole-gram macro targets
#[must_use]
pub fn calculate_macro_targets(
    daily_calories: f64,
    distribution: MacroDistribution,
) -> MacroTargets {
    let grams = |percent: f64, kcal_per_gram: f64| {
        (daily_calories * percent / 100.0 / kcal_per_gram).round_ties_even()
    };

    MacroTargets {
        carbs_g: grams(distribution.carbs_percent, KCAL_PER_GRAM_CARBS),
        protein_g: grams(distribution.protein_percent, KCAL_PER_GRAM_PROTEIN),
        fat_g: grams(distribution.fat_percent, KCAL_PER_GRAM_FAT),
        distribution,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced_targets_for_2000_kcal() {
        let targets = calculate_macro_targets(
            2000.0,
            resolve_distribution(MacroPreset::Balanced, MacroDistribution::new(0.0, 0.0, 0.0)),
        );
        assert!((targets.carbs_g - 200.0).abs() < f64::EPSILON);
        assert!((targets.protein_g - 150.0).abs() < f64::EPSILON);
        assert!((targets.fat_g - 67.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_custom_preset_uses_user_split() {
        let custom = MacroDistribution::new(50.0, 25.0, 25.0);
        assert_eq!(resolve_distribution(MacroPreset::Custom, custom), custom);
        assert_eq!(
            resolve_distribution(MacroPreset::Keto, custom),
            MacroDistribution::new(5.0, 25.0, 70.0)
        );
    }

    #[test]
    fn test_validate_tolerates_one_point() {
        assert!(MacroDistribution::new(33.0, 33.0, 33.0).validate().is_ok());
        assert!(MacroDistribution::new(50.0, 30.0, 30.0).validate().is_err());
        assert!(MacroDistribution::new(-10.0, 60.0, 50.0).validate().is_err());
    }

    #[test]
    fn test_every_fixed_preset_is_valid() {
        for preset in [
            MacroPreset::Balanced,
            MacroPreset::LowCarb,
            MacroPreset::HighProtein,
            MacroPreset::Keto,
            MacroPreset::Mediterranean,
        ] {
            assert!(preset_distribution(preset).unwrap().validate().is_ok(), "{preset:?}");
        }
    }
}
