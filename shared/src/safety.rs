//! Calorie safety policy
//!
//! Every loss-oriented calorie recommendation passes through two guards, in
//! this order:
//!
//! 1. the sex/size-based safe minimum intake
//! 2. the BMR floor (never below 90% of BMR)
//!
//! The deficit itself is bounded to 500-1000 kcal/day regardless of how the
//! BMI-based percentage works out.

use crate::profile::Sex;
use tracing::debug;

/// Smallest daily deficit ever recommended (kcal)
pub const MIN_DEFICIT: f64 = 500.0;

/// Largest daily deficit ever recommended (kcal)
pub const MAX_DEFICIT: f64 = 1000.0;

/// Cap on the sustainable (slow) deficit (kcal)
pub const SUSTAINABLE_DEFICIT_CAP: f64 = 400.0;

/// Share of the safe deficit used for sustainable loss
pub const SUSTAINABLE_DEFICIT_FACTOR: f64 = 0.8;

/// Fraction of BMR below which intake is never recommended
pub const BMR_FLOOR_FACTOR: f64 = 0.9;

/// Deficit percentage by BMI band: `(exclusive upper BMI, percentage)`
pub const DEFICIT_PERCENT_TABLE: [(f64, f64); 4] = [
    (18.5, 0.05),
    (25.0, 0.15),
    (30.0, 0.20),
    (35.0, 0.25),
];

/// Percentage for BMI 35 and above
pub const MAX_DEFICIT_PERCENT: f64 = 0.30;

/// `f64::max` that keeps NaN instead of discarding it.
pub(crate) fn propagating_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

/// `f64::min` that keeps NaN instead of discarding it.
pub(crate) fn propagating_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

/// Safe minimum daily intake for sex and body size
///
/// Base 1500 (male) / 1200 (female), plus 5 kcal per kg above 70 kg, never
/// below 1400 (male) / 1100 (female).
pub fn calculate_safe_min_calories(sex: Sex, weight_kg: f64) -> f64 {
    let (base, floor) = match sex {
        Sex::Male => (1500.0, 1400.0),
        Sex::Female => (1200.0, 1100.0),
    };
    let size_adjustment = propagating_max(0.0, (weight_kg - 70.0) * 5.0);
    propagating_max(base + size_adjustment, floor)
}

/// Deficit percentage for a BMI
pub fn deficit_percentage(bmi: f64) -> f64 {
    DEFICIT_PERCENT_TABLE
        .iter()
        .find(|(upper, _)| bmi < *upper)
        .map(|(_, pct)| *pct)
        .unwrap_or(MAX_DEFICIT_PERCENT)
}

/// Safe daily deficit (kcal), always within 500-1000
pub fn calculate_safe_deficit(bmi: f64, tdee: f64) -> f64 {
    let raw = (tdee * deficit_percentage(bmi)).round();
    let deficit = raw.clamp(MIN_DEFICIT, MAX_DEFICIT);
    if deficit != raw && !raw.is_nan() {
        debug!(raw, deficit, "Deficit clamped to safe bounds");
    }
    deficit
}

/// Sustainable deficit: 80% of the safe deficit, capped at 400 kcal
pub fn calculate_sustainable_deficit(safe_deficit: f64) -> f64 {
    propagating_min(SUSTAINABLE_DEFICIT_CAP, safe_deficit * SUSTAINABLE_DEFICIT_FACTOR)
}

/// Never recommend less than 90% of BMR
pub fn ensure_above_bmr(calories: f64, bmr: f64) -> f64 {
    let floor = bmr * BMR_FLOOR_FACTOR;
    if calories < floor {
        debug!(calories, floor, "Calorie target raised to BMR floor");
    }
    propagating_max(calories, floor)
}

/// Apply a deficit to TDEE through both guards (minimum first, BMR floor last)
pub fn guarded_calories(tdee: f64, deficit: f64, safe_min_calories: f64, bmr: f64) -> f64 {
    let above_minimum = propagating_max(safe_min_calories, tdee - deficit);
    ensure_above_bmr(above_minimum, bmr)
}

/// Guarded loss targets for a profile's energy numbers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LossPlan {
    pub safe_min_calories: f64,
    pub safe_deficit: f64,
    pub sustainable_deficit: f64,
    pub rapid_calories: f64,
    pub sustainable_calories: f64,
}

/// Compute rapid and sustainable loss calories through the safety chain
pub fn plan_weight_loss(sex: Sex, weight_kg: f64, bmi: f64, bmr: f64, tdee: f64) -> LossPlan {
    let safe_min_calories = calculate_safe_min_calories(sex, weight_kg);
    let safe_deficit = calculate_safe_deficit(bmi, tdee);
    let sustainable_deficit = calculate_sustainable_deficit(safe_deficit);

    LossPlan {
        safe_min_calories,
        safe_deficit,
        sustainable_deficit,
        rapid_calories: guarded_calories(tdee, safe_deficit, safe_min_calories, bmr),
        sustainable_calories: guarded_calories(tdee, sustainable_deficit, safe_min_calories, bmr),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(Sex::Male, 80.0, 1550.0)]
    #[case(Sex::Male, 60.0, 1500.0)]
    #[case(Sex::Female, 90.0, 1300.0)]
    #[case(Sex::Female, 50.0, 1200.0)]
    fn test_safe_min_calories(#[case] sex: Sex, #[case] weight: f64, #[case] expected: f64) {
        assert_eq!(calculate_safe_min_calories(sex, weight), expected);
    }

    #[test]
    fn test_light_users_get_base_minimum() {
        // No negative size adjustment below 70 kg
        assert_eq!(calculate_safe_min_calories(Sex::Male, 10.0), 1500.0);
        assert_eq!(calculate_safe_min_calories(Sex::Female, 10.0), 1200.0);
    }

    #[rstest]
    #[case(17.0, 0.05)]
    #[case(18.5, 0.15)]
    #[case(24.9, 0.15)]
    #[case(25.0, 0.20)]
    #[case(30.0, 0.25)]
    #[case(35.0, 0.30)]
    #[case(55.0, 0.30)]
    fn test_deficit_percentage(#[case] bmi: f64, #[case] expected: f64) {
        assert_eq!(deficit_percentage(bmi), expected);
    }

    #[test]
    fn test_safe_deficit_clamped() {
        // 2873 * 0.15 = 431 -> raised to 500
        assert_eq!(calculate_safe_deficit(24.7, 2873.1296), 500.0);
        // 1960.32 * 0.30 = 588.096 -> rounds to 588
        assert_eq!(calculate_safe_deficit(35.2, 1960.32), 588.0);
        // 5000 * 0.30 = 1500 -> capped at 1000
        assert_eq!(calculate_safe_deficit(45.0, 5000.0), 1000.0);
    }

    #[test]
    fn test_sustainable_deficit() {
        assert_eq!(calculate_sustainable_deficit(500.0), 400.0);
        assert_eq!(calculate_sustainable_deficit(1000.0), 400.0);
        assert!((calculate_sustainable_deficit(450.0) - 360.0).abs() < 1e-9);
    }

    #[test]
    fn test_ensure_above_bmr() {
        assert_eq!(ensure_above_bmr(2000.0, 1800.0), 2000.0);
        assert!((ensure_above_bmr(1300.0, 1633.6) - 1470.24).abs() < 1e-9);
    }

    #[test]
    fn test_guard_order_minimum_then_floor() {
        // TDEE 1960.32, deficit 588 -> 1372.32; minimum 1300 keeps it,
        // then the BMR floor (1470.24) raises it.
        let calories = guarded_calories(1960.32, 588.0, 1300.0, 1633.6);
        assert!((calories - 1470.24).abs() < 1e-9);

        // Minimum wins when it is above both
        let calories = guarded_calories(1800.0, 1000.0, 1550.0, 1200.0);
        assert_eq!(calories, 1550.0);
    }

    #[test]
    fn test_plan_weight_loss() {
        let plan = plan_weight_loss(Sex::Female, 90.0, 35.156, 1633.6, 1960.32);
        assert_eq!(plan.safe_min_calories, 1300.0);
        assert_eq!(plan.safe_deficit, 588.0);
        assert_eq!(plan.sustainable_deficit, 400.0);
        assert!((plan.rapid_calories - 1470.24).abs() < 1e-9);
        assert!((plan.sustainable_calories - 1560.32).abs() < 1e-9);
    }

    #[test]
    fn test_nan_propagates_through_guards() {
        assert!(ensure_above_bmr(f64::NAN, 1500.0).is_nan());
        assert!(calculate_safe_min_calories(Sex::Male, f64::NAN).is_nan());
        assert!(guarded_calories(f64::NAN, 500.0, 1500.0, 1600.0).is_nan());
        assert!(calculate_sustainable_deficit(f64::NAN).is_nan());
        assert!(calculate_safe_deficit(24.0, f64::NAN).is_nan());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Property: the deficit never leaves 500-1000
        #[test]
        fn prop_deficit_clamped(bmi in 0.0f64..=60.0, tdee in 500.0f64..=6000.0) {
            let deficit = calculate_safe_deficit(bmi, tdee);
            prop_assert!((MIN_DEFICIT..=MAX_DEFICIT).contains(&deficit));
        }

        /// Property: the BMR floor always holds
        #[test]
        fn prop_bmr_floor(calories in -5000.0f64..10000.0, bmr in 0.1f64..5000.0) {
            prop_assert!(ensure_above_bmr(calories, bmr) >= bmr * 0.9 - 1e-9);
        }

        /// Property: guarded calories respect both the minimum and the floor
        #[test]
        fn prop_guarded_calories(
            tdee in 1000.0f64..5000.0,
            deficit in 500.0f64..1000.0,
            min in 1100.0f64..2000.0,
            bmr in 800.0f64..3000.0
        ) {
            let calories = guarded_calories(tdee, deficit, min, bmr);
            prop_assert!(calories >= bmr * 0.9 - 1e-9);
            prop_assert!(calories >= min.min(bmr * 0.9) - 1e-9);
        }
    }
}
