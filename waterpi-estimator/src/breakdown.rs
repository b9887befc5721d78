use log::{debug, info};
use waterpi_model::{
    environment::EnvironmentTemperature,
    profile::{Gender, PersonProfile},
};

pub const BASE_INTAKE_ML_PER_KG: f64 = 25.0;
/// Extra water for every [`EXERCISE_INTERVAL_MINUTES`] of exercise.
pub const EXERCISE_INTAKE_ML: f64 = 500.0;
pub const EXERCISE_INTERVAL_MINUTES: f64 = 30.0;
pub const PREGNANCY_ADJUSTMENT_ML: f64 = 300.0;
pub const BREASTFEEDING_ADJUSTMENT_ML: f64 = 700.0;
pub const HIGH_TEMPERATURE_FACTOR: f64 = 0.20;
pub const LOW_TEMPERATURE_FACTOR: f64 = -0.05;
pub const MAX_DAILY_INTAKE_LITERS: f64 = 2.9;

/// Intermediate terms of a single intake estimate. All `*_ml` fields are in
/// milliliters, `liters` is the final rounded and capped recommendation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntakeBreakdown {
    pub base_ml: f64,
    pub exercise_ml: f64,
    pub physiological_ml: f64,
    pub environment_ml: f64,
    pub total_ml: f64,
    pub liters: f64,
    pub capped: bool,
}

impl IntakeBreakdown {
    pub fn compute(profile: &PersonProfile, environment: EnvironmentTemperature) -> Self {
        let base_ml = profile.weight_kg() * BASE_INTAKE_ML_PER_KG;
        let exercise_ml =
            profile.exercise_minutes() as f64 * (EXERCISE_INTAKE_ML / EXERCISE_INTERVAL_MINUTES);
        let daily_ml = base_ml + exercise_ml;

        // Pregnancy wins when both flags are set.
        let physiological_ml = if profile.is_pregnant() {
            PREGNANCY_ADJUSTMENT_ML
        } else if profile.is_breastfeeding() {
            BREASTFEEDING_ADJUSTMENT_ML
        } else {
            0.0
        };

        // Relative to base + exercise only, never to the physiological term.
        let environment_ml = match environment {
            EnvironmentTemperature::High => daily_ml * HIGH_TEMPERATURE_FACTOR,
            EnvironmentTemperature::Low => daily_ml * LOW_TEMPERATURE_FACTOR,
            EnvironmentTemperature::Moderate => 0.0,
        };

        let total_ml = daily_ml + (physiological_ml + environment_ml);
        let rounded = round_to_tenths(total_ml / 1000.0);
        let capped = rounded > MAX_DAILY_INTAKE_LITERS;
        let liters = if capped {
            MAX_DAILY_INTAKE_LITERS
        } else {
            rounded
        };

        let breakdown = Self {
            base_ml,
            exercise_ml,
            physiological_ml,
            environment_ml,
            total_ml,
            liters,
            capped,
        };
        debug!("Estimated intake for {:?} ({:?}): {:?}", profile, environment, breakdown);
        if capped {
            info!(
                "Intake of {:.1} L capped at {} L",
                rounded, MAX_DAILY_INTAKE_LITERS
            );
        }
        breakdown
    }
}

/// Rounds half up on the tenths digit, so 2.25 becomes 2.3 and -2.25
/// becomes -2.2.
fn round_to_tenths(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

/// Recommended daily water intake in liters, rounded to one decimal place and
/// capped at [`MAX_DAILY_INTAKE_LITERS`].
///
/// No input is rejected: a negative weight or exercise duration simply yields
/// a correspondingly small (possibly negative) result. See
/// [`crate::validate_profile`] for a checked alternative.
pub fn estimate_daily_water_intake_liters(
    weight_kg: f64,
    exercise_minutes: i32,
    is_pregnant: bool,
    is_breastfeeding: bool,
    gender: Gender,
    environment: EnvironmentTemperature,
) -> f64 {
    let profile = PersonProfile::new(
        weight_kg,
        exercise_minutes,
        is_pregnant,
        is_breastfeeding,
        gender,
    );
    IntakeBreakdown::compute(&profile, environment).liters
}
