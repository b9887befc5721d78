/// Coarse classification of the ambient temperature the person is exposed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnvironmentTemperature {
    Low,
    Moderate,
    High,
}
