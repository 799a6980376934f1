//! Calorie, fat-loss and protein targets
//!
//! Combines the primary metrics, weight ranges and safety policy into the
//! numbers shown to the user.
//!
//! Two fat-energy constants coexist on purpose: `weeklyFatLoss` is expressed
//! with 3500 kcal per pound while the goal recommendations use 7700 kcal per
//! kilogram. They feed different fields and must stay separate.

use crate::profile::UserProfile;
use crate::safety::{propagating_max, LossPlan};
use crate::units::kg_to_lbs;
use crate::weight_ranges::{calculate_ideal_waist_size, WeightRange};
use serde::{Deserialize, Serialize};

/// Energy stored in one pound of body fat (kcal)
pub const KCAL_PER_LB_FAT: f64 = 3500.0;

/// Energy stored in one kilogram of body fat (kcal)
pub const KCAL_PER_KG_FAT: f64 = 7700.0;

/// Daily surplus for lean muscle gain (kcal)
pub const MUSCLE_GAIN_SURPLUS: f64 = 300.0;

/// Day-to-day water weight swing as a fraction of body weight
pub const WATER_FLUCTUATION_FACTOR: f64 = 0.015;

/// Default protein setting (g per kg)
pub const DEFAULT_PROTEIN_PER_KG: f64 = 0.8;

/// Largest accepted protein amount (g per unit of body weight)
pub const MAX_PROTEIN_AMOUNT: f64 = 5.0;

// Atwater factors (kcal per gram)
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Share of calories assigned to fat in a macro split
pub const FAT_CALORIE_SHARE: f64 = 0.25;

// ============================================================================
// Protein Setting
// ============================================================================

/// Body-weight unit the protein amount refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProteinBasis {
    #[default]
    PerKg,
    PerLb,
}

/// User-adjustable protein recommendation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProteinSetting {
    /// Grams of protein per unit of body weight
    pub amount: f64,
    #[serde(default)]
    pub basis: ProteinBasis,
}

impl ProteinSetting {
    pub fn per_kg(amount: f64) -> Self {
        Self {
            amount,
            basis: ProteinBasis::PerKg,
        }
    }

    pub fn per_lb(amount: f64) -> Self {
        Self {
            amount,
            basis: ProteinBasis::PerLb,
        }
    }

    /// Check the amount is a usable recommendation
    pub fn validate(&self) -> Result<(), String> {
        if !self.amount.is_finite() || self.amount <= 0.0 || self.amount > MAX_PROTEIN_AMOUNT {
            return Err(format!(
                "protein.amount must be greater than 0 and at most {}",
                MAX_PROTEIN_AMOUNT
            ));
        }
        Ok(())
    }

    /// Daily grams for a body weight given in kg
    pub fn grams_for(&self, weight_kg: f64) -> f64 {
        match self.basis {
            ProteinBasis::PerKg => weight_kg * self.amount,
            ProteinBasis::PerLb => kg_to_lbs(weight_kg) * self.amount,
        }
    }
}

impl Default for ProteinSetting {
    fn default() -> Self {
        Self::per_kg(DEFAULT_PROTEIN_PER_KG)
    }
}

// ============================================================================
// Result Records
// ============================================================================

/// Daily calorie targets (kcal/day)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalorieTargets {
    pub maintenance: f64,
    pub rapid_loss: f64,
    pub slow_loss: f64,
    pub muscle_gain: f64,
}

/// Expected weekly fat loss for the loss targets (pounds of fat per week)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeeklyFatLoss {
    pub rapid: f64,
    pub slow: f64,
}

/// Goal-oriented recommendations
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalRecommendations {
    pub ideal_waist_size: f64,
    pub best_target_weight: f64,
    pub rapid_weight_loss_calories: f64,
    pub sustainable_weight_loss_calories: f64,
    /// kg per week
    pub max_weekly_fat_loss: f64,
    /// kg per week
    pub sustainable_weekly_fat_loss: f64,
    /// grams per day
    pub protein_intake_for_target: f64,
}

/// Daily macro-nutrient split in grams
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroSplit {
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
}

// ============================================================================
// Calculations
// ============================================================================

/// Calorie targets from TDEE and the guarded loss plan
pub fn calculate_calorie_targets(tdee: f64, plan: &LossPlan) -> CalorieTargets {
    CalorieTargets {
        maintenance: tdee,
        rapid_loss: plan.rapid_calories,
        slow_loss: plan.sustainable_calories,
        muscle_gain: tdee + MUSCLE_GAIN_SURPLUS,
    }
}

/// Weekly fat loss in pounds for a daily deficit
pub fn weekly_fat_loss_lbs(daily_deficit: f64) -> f64 {
    daily_deficit * 7.0 / KCAL_PER_LB_FAT
}

/// Weekly fat loss in kilograms for a daily deficit
pub fn weekly_fat_loss_kg(daily_deficit: f64) -> f64 {
    daily_deficit * 7.0 / KCAL_PER_KG_FAT
}

/// Weekly fat loss delivered by the guarded calorie targets
///
/// Uses the deficit that remains after the safety guards, not the raw one.
pub fn calculate_weekly_fat_loss(targets: &CalorieTargets) -> WeeklyFatLoss {
    WeeklyFatLoss {
        rapid: weekly_fat_loss_lbs(targets.maintenance - targets.rapid_loss),
        slow: weekly_fat_loss_lbs(targets.maintenance - targets.slow_loss),
    }
}

/// Expected day-to-day water weight swing (kg)
pub fn calculate_water_weight_fluctuation(weight_kg: f64) -> f64 {
    weight_kg * WATER_FLUCTUATION_FACTOR
}

/// Single protein figure against the ideal target weight (grams/day)
pub fn calculate_protein_intake(ideal_target_kg: f64, protein_per_kg: f64) -> f64 {
    ideal_target_kg * protein_per_kg
}

/// Best weight to aim for: body-composition target when known, else ideal target
pub fn best_target_weight(body_comp: Option<&WeightRange>, ideal: &WeightRange) -> f64 {
    body_comp.map(|range| range.target).unwrap_or(ideal.target)
}

/// Bundle the goal recommendations
pub fn calculate_goal_recommendations(
    profile: &UserProfile,
    plan: &LossPlan,
    ideal: &WeightRange,
    body_comp: Option<&WeightRange>,
    protein: ProteinSetting,
) -> GoalRecommendations {
    let best_target = best_target_weight(body_comp, ideal);

    GoalRecommendations {
        ideal_waist_size: calculate_ideal_waist_size(profile.height_cm, profile.sex),
        best_target_weight: best_target,
        rapid_weight_loss_calories: plan.rapid_calories,
        sustainable_weight_loss_calories: plan.sustainable_calories,
        max_weekly_fat_loss: weekly_fat_loss_kg(plan.safe_deficit),
        sustainable_weekly_fat_loss: weekly_fat_loss_kg(plan.sustainable_deficit),
        protein_intake_for_target: protein.grams_for(best_target),
    }
}

/// Split a calorie budget into protein, fat and carbohydrate grams
///
/// Protein is fixed by the caller, fat takes 25% of calories and carbs fill
/// whatever is left (never negative).
pub fn calculate_macro_split(calories: f64, protein_g: f64) -> MacroSplit {
    let fat_g = calories * FAT_CALORIE_SHARE / KCAL_PER_G_FAT;
    let remaining = calories - protein_g * KCAL_PER_G_PROTEIN - fat_g * KCAL_PER_G_FAT;
    MacroSplit {
        protein_g,
        fat_g,
        carbs_g: propagating_max(remaining, 0.0) / KCAL_PER_G_CARBS,
    }
}
