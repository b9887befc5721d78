use log::warn;
use waterpi_model::{
    environment::EnvironmentTemperature, intake::WaterIntake, profile::PersonProfile,
};

use crate::breakdown::IntakeBreakdown;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;

pub trait IntakeEstimator: Send + Sync {
    /// Estimates intake for any profile, including physically meaningless ones.
    fn estimate(
        &self,
        profile: &PersonProfile,
        environment: EnvironmentTemperature,
    ) -> WaterIntake;

    /// Same as [`IntakeEstimator::estimate`], but rejects profiles with a
    /// negative or non-finite weight or a negative exercise duration.
    fn estimate_checked(
        &self,
        profile: &PersonProfile,
        environment: EnvironmentTemperature,
    ) -> Result<WaterIntake>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct IntakeEstimatorImpl;

impl IntakeEstimatorImpl {
    pub fn new() -> Self {
        Self
    }
}

pub fn create() -> impl IntakeEstimator {
    IntakeEstimatorImpl::new()
}

impl IntakeEstimator for IntakeEstimatorImpl {
    fn estimate(
        &self,
        profile: &PersonProfile,
        environment: EnvironmentTemperature,
    ) -> WaterIntake {
        WaterIntake::from_liters(IntakeBreakdown::compute(profile, environment).liters)
    }

    fn estimate_checked(
        &self,
        profile: &PersonProfile,
        environment: EnvironmentTemperature,
    ) -> Result<WaterIntake> {
        validate_profile(profile)?;
        Ok(self.estimate(profile, environment))
    }
}

pub fn validate_profile(profile: &PersonProfile) -> Result<()> {
    let weight = profile.weight_kg();
    if !weight.is_finite() || weight < 0.0 {
        warn!("Rejecting profile with weight {}", weight);
        return Err(Error::InvalidArgument(format!(
            "weight must be a non-negative number of kilograms, got {}",
            weight
        )));
    }

    let minutes = profile.exercise_minutes();
    if minutes < 0 {
        warn!("Rejecting profile with {} minutes of exercise", minutes);
        return Err(Error::InvalidArgument(format!(
            "exercise minutes must not be negative, got {}",
            minutes
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use waterpi_model::profile::Gender;

    use super::*;

    #[test]
    fn validate_profile() {
        let test_data = [
            (PersonProfile::new(70.0, 30, false, false, Gender::Male), true),
            (PersonProfile::new(0.0, 0, false, false, Gender::Male), true),
            (PersonProfile::new(-0.5, 0, false, false, Gender::Female), false),
            (PersonProfile::new(70.0, -1, false, false, Gender::Female), false),
            (PersonProfile::new(f64::NAN, 0, false, false, Gender::Other), false),
            (PersonProfile::new(f64::INFINITY, 0, false, false, Gender::Other), false),
        ];

        for (i, (profile, expected_output)) in test_data.into_iter().enumerate() {
            assert_eq!(
                super::validate_profile(&profile).is_ok(),
                expected_output,
                "Test case #{}",
                i
            );
        }
    }

    #[test]
    fn error_message() {
        let profile = PersonProfile::new(70.0, -15, false, false, Gender::Male);

        assert_eq!(
            super::validate_profile(&profile).unwrap_err().to_string(),
            "invalid argument: exercise minutes must not be negative, got -15"
        );
    }

    #[test]
    fn checked_and_unchecked_agree_on_valid_profiles() {
        let estimator = IntakeEstimatorImpl::new();
        let profile = PersonProfile::new(80.0, 0, false, false, Gender::Male);

        assert_eq!(
            estimator.estimate_checked(&profile, EnvironmentTemperature::High),
            Ok(estimator.estimate(&profile, EnvironmentTemperature::High))
        );
        assert_eq!(
            estimator
                .estimate(&profile, EnvironmentTemperature::High)
                .liters(),
            2.4
        );
    }

    #[test]
    fn unchecked_estimate_accepts_negative_weight() {
        let estimator = IntakeEstimatorImpl::new();
        let profile = PersonProfile::new(-40.0, 0, false, false, Gender::Female);

        assert_eq!(
            estimator
                .estimate(&profile, EnvironmentTemperature::Moderate)
                .liters(),
            -1.0
        );
        assert!(matches!(
            estimator.estimate_checked(&profile, EnvironmentTemperature::Moderate),
            Err(Error::InvalidArgument(_))
        ));
    }
}
