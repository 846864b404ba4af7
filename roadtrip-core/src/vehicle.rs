//! Vehicle dimension profiles.

/// Dimensional and weight constraints of the traveller's vehicle.
///
/// Used only as an input to overnight-stop suitability scoring; the engine
/// never mutates a profile.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleProfile {
    /// Display name, e.g. `"Hymer B-Class"`.
    pub name: String,
    /// Overall height in metres.
    pub height_m: f64,
    /// Overall length in metres.
    pub length_m: f64,
    /// Laden weight in tonnes.
    pub weight_t: f64,
}

impl VehicleProfile {
    /// Construct a profile from its dimensions.
    #[must_use]
    pub fn new(name: impl Into<String>, height_m: f64, length_m: f64, weight_t: f64) -> Self {
        Self {
            name: name.into(),
            height_m,
            length_m,
            weight_t,
        }
    }
}
