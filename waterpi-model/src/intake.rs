use std::fmt;

/// Recommended daily water intake, in liters.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct WaterIntake(f64);

impl WaterIntake {
    pub fn from_liters(liters: f64) -> Self {
        Self(liters)
    }

    pub fn from_milliliters(milliliters: f64) -> Self {
        Self(milliliters / 1000.0)
    }

    pub fn liters(&self) -> f64 {
        self.0
    }

    pub fn milliliters(&self) -> f64 {
        self.0 * 1000.0
    }
}

impl fmt::Display for WaterIntake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} L", self.0)
    }
}

impl From<WaterIntake> for f64 {
    fn from(intake: WaterIntake) -> Self {
        intake.0
    }
}
