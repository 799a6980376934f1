//! Top-level calculation pipeline
//!
//! Runs every calculator in dependency order and assembles one immutable
//! `CalculationResult`. Nothing is cached between calls; every invocation is
//! a full, independent re-run.

use crate::health_metrics::{
    calculate_bmi_result, calculate_bmr, calculate_tdee, calculate_whr, BmiResult, WhrResult,
};
use crate::nutrition::{
    calculate_calorie_targets, calculate_goal_recommendations, calculate_macro_split,
    calculate_protein_intake, calculate_water_weight_fluctuation, calculate_weekly_fat_loss,
    weekly_fat_loss_kg, CalorieTargets, GoalRecommendations, MacroSplit, ProteinSetting,
    WeeklyFatLoss, DEFAULT_PROTEIN_PER_KG, MUSCLE_GAIN_SURPLUS,
};
use crate::profile::UserProfile;
use crate::safety::plan_weight_loss;
use crate::weight_ranges::{
    calculate_adonis_weight_range, calculate_body_comp_adjusted_weight,
    calculate_ideal_weight_range, WeightRange,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Every derived metric for one profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    /// kcal/day
    pub bmr: f64,
    /// kcal/day
    pub tdee: f64,
    pub bmi: BmiResult,
    /// Present only when both waist and hips were supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whr: Option<WhrResult>,
    pub ideal_weight_range: WeightRange,
    pub adonis_weight_range: WeightRange,
    pub body_comp_adjusted_weight: WeightRange,
    pub calorie_targets: CalorieTargets,
    pub weekly_fat_loss: WeeklyFatLoss,
    /// kg
    pub water_weight_fluctuation: f64,
    /// grams/day against the ideal target weight
    pub protein_intake: f64,
    pub goal_recommendations: GoalRecommendations,
}

/// Run the full pipeline with a per-kg protein setting
///
/// Callers must only invoke this once age, height and weight are known;
/// out-of-range or degenerate values are not rejected here and propagate as
/// NaN/Infinity.
pub fn calculate_all_results(profile: &UserProfile, protein_per_kg: f64) -> CalculationResult {
    calculate_with_protein(profile, ProteinSetting::per_kg(protein_per_kg))
}

/// Run the full pipeline with the default protein setting
pub fn calculate_default(profile: &UserProfile) -> CalculationResult {
    calculate_all_results(profile, DEFAULT_PROTEIN_PER_KG)
}

/// Run the full pipeline with an explicit protein setting
pub fn calculate_with_protein(profile: &UserProfile, protein: ProteinSetting) -> CalculationResult {
    let bmr = calculate_bmr(profile);
    let bmi = calculate_bmi_result(profile.weight_kg, profile.height_cm);
    let tdee = calculate_tdee(bmr, profile);

    let ideal_weight_range = calculate_ideal_weight_range(profile.height_cm);
    let adonis_weight_range = calculate_adonis_weight_range(profile.height_cm, profile.sex);
    let body_comp_adjusted_weight = calculate_body_comp_adjusted_weight(
        profile.height_cm,
        profile.sex,
        profile.body_fat(),
        profile.shoulder_cm(),
    );

    let plan = plan_weight_loss(profile.sex, profile.weight_kg, bmi.value, bmr, tdee);
    let calorie_targets = calculate_calorie_targets(tdee, &plan);
    let weekly_fat_loss = calculate_weekly_fat_loss(&calorie_targets);

    let whr = calculate_whr(profile);

    let goal_recommendations = calculate_goal_recommendations(
        profile,
        &plan,
        &ideal_weight_range,
        Some(&body_comp_adjusted_weight),
        protein,
    );

    debug!(
        bmr,
        tdee,
        bmi = bmi.value,
        rapid_loss = calorie_targets.rapid_loss,
        slow_loss = calorie_targets.slow_loss,
        has_whr = whr.is_some(),
        "Calculated health metrics"
    );

    CalculationResult {
        bmr,
        tdee,
        bmi,
        whr,
        ideal_weight_range,
        adonis_weight_range,
        body_comp_adjusted_weight,
        calorie_targets,
        weekly_fat_loss,
        water_weight_fluctuation: calculate_water_weight_fluctuation(profile.weight_kg),
        protein_intake: calculate_protein_intake(ideal_weight_range.target, protein.amount),
        goal_recommendations,
    }
}

/// Re-run the full pipeline as if the user already weighed `target_weight_kg`
pub fn recalculate_with_target_weight(
    profile: &UserProfile,
    target_weight_kg: f64,
    protein_per_kg: f64,
) -> CalculationResult {
    calculate_all_results(&profile.with_weight(target_weight_kg), protein_per_kg)
}

// ============================================================================
// Goal Projection
// ============================================================================

/// Direction the user wants their weight to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Lose,
    Maintain,
    Gain,
}

impl std::str::FromStr for Goal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lose" => Ok(Goal::Lose),
            "maintain" => Ok(Goal::Maintain),
            "gain" => Ok(Goal::Gain),
            _ => Err(format!("Unknown goal: {}. Must be one of: lose, maintain, gain", s)),
        }
    }
}

/// Metrics projected for a chosen goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProjection {
    pub goal: Goal,
    /// kcal/day to eat for this goal
    pub daily_calories: f64,
    /// kg per week; negative means losing
    pub weekly_change_kg: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_weight_kg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weeks_to_target: Option<f64>,
    pub macros: MacroSplit,
    pub current: CalculationResult,
    /// Full re-run at the target weight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub at_target: Option<CalculationResult>,
}

/// Expected weeks to move from `current_kg` to `target_kg` at `weekly_change_kg`
///
/// `None` when the change is zero or points away from the target.
pub fn weeks_to_target(current_kg: f64, target_kg: f64, weekly_change_kg: f64) -> Option<f64> {
    if weekly_change_kg == 0.0 || weekly_change_kg.is_nan() {
        return None;
    }
    let remaining = target_kg - current_kg;
    if remaining == 0.0 {
        return Some(0.0);
    }
    if remaining.signum() != weekly_change_kg.signum() {
        return None;
    }
    Some(remaining / weekly_change_kg)
}

/// Project a profile under a goal, optionally toward a target weight
pub fn project_goal(
    profile: &UserProfile,
    goal: Goal,
    target_weight_kg: Option<f64>,
    protein: ProteinSetting,
) -> GoalProjection {
    let current = calculate_with_protein(profile, protein);
    let at_target =
        target_weight_kg.map(|target| calculate_with_protein(&profile.with_weight(target), protein));

    let recommendations = current.goal_recommendations;
    let (daily_calories, weekly_change_kg) = match goal {
        Goal::Lose => (
            recommendations.sustainable_weight_loss_calories,
            -recommendations.sustainable_weekly_fat_loss,
        ),
        Goal::Maintain => (current.calorie_targets.maintenance, 0.0),
        Goal::Gain => (
            current.calorie_targets.muscle_gain,
            weekly_fat_loss_kg(MUSCLE_GAIN_SURPLUS),
        ),
    };

    let weeks = target_weight_kg
        .and_then(|target| weeks_to_target(profile.weight_kg, target, weekly_change_kg));

    debug!(
        ?goal,
        daily_calories,
        weekly_change_kg,
        weeks_to_target = ?weeks,
        "Projected goal"
    );

    GoalProjection {
        goal,
        daily_calories,
        weekly_change_kg,
        target_weight_kg,
        weeks_to_target: weeks,
        macros: calculate_macro_split(daily_calories, recommendations.protein_intake_for_target),
        current,
        at_target,
    }
}
