//! Calculator settings
//!
//! Settings are loaded hierarchically:
//! 1. Default values (in code)
//! 2. An optional TOML file
//! 3. Environment variables (prefix: BODY_METRICS__)

use crate::calculator::{calculate_with_protein, project_goal, CalculationResult, Goal, GoalProjection};
use crate::errors::SettingsError;
use crate::nutrition::ProteinSetting;
use crate::profile::{PartialProfile, UserProfile};
use crate::units::{format_height, format_weight, UnitSystem};
use crate::validation::{validate_user_data, ValidationResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// User-adjustable calculator settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculatorSettings {
    pub protein: ProteinSetting,
    /// When true, out-of-range circumferences block the form
    pub measurements_optional: bool,
    /// Display preference only; calculations are always metric
    pub unit_system: UnitSystem,
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        Self {
            protein: ProteinSetting::default(),
            measurements_optional: false,
            unit_system: UnitSystem::Metric,
        }
    }
}

impl CalculatorSettings {
    /// Load settings from defaults, an optional file and the environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. `path`, when given and present on disk
    /// 3. Environment variables with BODY_METRICS__ prefix
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        let mut builder = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&CalculatorSettings::default())?);

        if let Some(path) = path {
            debug!(path = %path.display(), "Loading calculator settings file");
            builder = builder.add_source(config::File::from(path).required(false));
        }

        let settings: CalculatorSettings = builder
            // e.g., BODY_METRICS__PROTEIN__AMOUNT=1.2 sets protein.amount
            .add_source(config::Environment::with_prefix("BODY_METRICS").separator("__"))
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    /// Reject settings that would produce meaningless protein targets
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.protein.validate().map_err(|message| {
            warn!(amount = self.protein.amount, "Rejected protein amount");
            SettingsError::Invalid(message)
        })
    }

    pub fn validate_profile(&self, profile: &PartialProfile) -> ValidationResult {
        validate_user_data(profile, self.measurements_optional)
    }

    pub fn calculate(&self, profile: &UserProfile) -> CalculationResult {
        calculate_with_protein(profile, self.protein)
    }

    pub fn project(&self, profile: &UserProfile, goal: Goal, target_weight_kg: Option<f64>) -> GoalProjection {
        project_goal(profile, goal, target_weight_kg, self.protein)
    }

    /// Display a stored weight in the preferred unit system
    pub fn format_weight(&self, weight_kg: f64) -> String {
        format_weight(weight_kg, self.unit_system)
    }

    /// Display a stored height in the preferred unit system
    pub fn format_height(&self, height_cm: f64) -> String {
        format_height(height_cm, self.unit_system)
    }
}
