//! Body Metrics WASM Module
//!
//! WebAssembly bindings for the calculation engine. Profiles and results
//! cross the boundary as camelCase JSON strings.

use body_metrics_shared as metrics;
use metrics::{Goal, PartialProfile, ProteinSetting, UserProfile};
use wasm_bindgen::prelude::*;

fn parse_partial(profile_json: &str) -> Result<PartialProfile, String> {
    serde_json::from_str(profile_json).map_err(|e| format!("Invalid profile JSON: {}", e))
}

fn parse_profile(profile_json: &str) -> Result<UserProfile, String> {
    UserProfile::try_from(parse_partial(profile_json)?).map_err(|e| e.to_string())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Failed to serialize result: {}", e))
}

fn protein_setting(amount: f64, per_lb: bool) -> ProteinSetting {
    if per_lb {
        ProteinSetting::per_lb(amount)
    } else {
        ProteinSetting::per_kg(amount)
    }
}

fn calculate_all_results_json(profile_json: &str, protein_per_kg: f64) -> Result<String, String> {
    let profile = parse_profile(profile_json)?;
    to_json(&metrics::calculate_all_results(&profile, protein_per_kg))
}

fn recalculate_with_target_weight_json(
    profile_json: &str,
    target_weight_kg: f64,
    protein_per_kg: f64,
) -> Result<String, String> {
    let profile = parse_profile(profile_json)?;
    to_json(&metrics::recalculate_with_target_weight(
        &profile,
        target_weight_kg,
        protein_per_kg,
    ))
}

fn validate_user_data_json(profile_json: &str, measurements_optional: bool) -> Result<String, String> {
    let profile = parse_partial(profile_json)?;
    to_json(&metrics::validate_user_data(&profile, measurements_optional))
}

fn project_goal_json(
    profile_json: &str,
    goal: &str,
    target_weight_kg: Option<f64>,
    protein: ProteinSetting,
) -> Result<String, String> {
    let profile = parse_profile(profile_json)?;
    let goal: Goal = goal.parse()?;
    protein.validate()?;
    to_json(&metrics::project_goal(&profile, goal, target_weight_kg, protein))
}

/// Run every calculation for a profile and return the result as JSON
#[wasm_bindgen]
pub fn calculate_all_results(profile_json: &str, protein_per_kg: f64) -> Result<String, JsValue> {
    calculate_all_results_json(profile_json, protein_per_kg).map_err(|e| JsValue::from_str(&e))
}

/// Same as `calculate_all_results`, with the weight replaced by a target
#[wasm_bindgen]
pub fn recalculate_with_target_weight(
    profile_json: &str,
    target_weight_kg: f64,
    protein_per_kg: f64,
) -> Result<String, JsValue> {
    recalculate_with_target_weight_json(profile_json, target_weight_kg, protein_per_kg)
        .map_err(|e| JsValue::from_str(&e))
}

/// Range-check a (possibly incomplete) profile
#[wasm_bindgen]
pub fn validate_user_data(profile_json: &str, measurements_optional: bool) -> Result<String, JsValue> {
    validate_user_data_json(profile_json, measurements_optional).map_err(|e| JsValue::from_str(&e))
}

/// Project a profile under a goal ("lose", "maintain" or "gain")
#[wasm_bindgen]
pub fn project_goal(
    profile_json: &str,
    goal: &str,
    target_weight_kg: Option<f64>,
    protein_amount: f64,
    protein_per_lb: bool,
) -> Result<String, JsValue> {
    project_goal_json(
        profile_json,
        goal,
        target_weight_kg,
        protein_setting(protein_amount, protein_per_lb),
    )
    .map_err(|e| JsValue::from_str(&e))
}

#[wasm_bindgen]
pub fn kg_to_lbs(kg: f64) -> f64 {
    metrics::kg_to_lbs(kg)
}

#[wasm_bindgen]
pub fn lbs_to_kg(lbs: f64) -> f64 {
    metrics::lbs_to_kg(lbs)
}

#[wasm_bindgen]
pub fn cm_to_inches(cm: f64) -> f64 {
    metrics::cm_to_inches(cm)
}

#[wasm_bindgen]
pub fn inches_to_cm(inches: f64) -> f64 {
    metrics::inches_to_cm(inches)
}
