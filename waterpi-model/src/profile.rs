/// Gender as selected by the user. Carried through to the estimator but not
/// used by the intake formula itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PersonProfile {
    weight_kg: f64,
    exercise_minutes: i32,
    is_pregnant: bool,
    is_breastfeeding: bool,
    gender: Gender,
}

impl PersonProfile {
    pub fn new(
        weight_kg: f64,
        exercise_minutes: i32,
        is_pregnant: bool,
        is_breastfeeding: bool,
        gender: Gender,
    ) -> Self {
        Self {
            weight_kg,
            exercise_minutes,
            is_pregnant,
            is_breastfeeding,
            gender,
        }
    }
    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }
    pub fn exercise_minutes(&self) -> i32 {
        self.exercise_minutes
    }
    pub fn is_pregnant(&self) -> bool {
        self.is_pregnant
    }
    pub fn is_breastfeeding(&self) -> bool {
        self.is_breastfeeding
    }
    pub fn gender(&self) -> Gender {
        self.gender
    }
}
