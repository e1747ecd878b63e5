use crate::models::{LocationInput, UnitPreference, WeatherReport};

/// Everything the form currently shows: the entered fields, the selected
/// unit system and the output of the last successful lookup.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub input: LocationInput,
    pub units: UnitPreference,
    pub last_report: Option<WeatherReport>,
}

impl FormState {
    pub fn set_input(&mut self, input: LocationInput, units: UnitPreference) {
        self.input = input;
        self.units = units;
    }

    pub fn set_report(&mut self, report: WeatherReport) {
        self.last_report = Some(report);
    }

    /// Resets every field and drops the last report
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
