//! Input parameter set and its constraint checks.

use serde::{Deserialize, Serialize};

use crate::errors::FilterError;
use crate::math::Scalar;

/// The nine design parameters of a single-tuned filter branch.
///
/// Values are carried in the units the parameter file quotes them in;
/// conversions to SI base units happen when the branch is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterParameters {
    /// System fundamental frequency in hertz.
    pub fundamental_frequency_hz: Scalar,
    /// Series resistance of the tuning inductor in ohms.
    pub inductor_resistance_ohm: Scalar,
    /// Tuning inductance in millihenries.
    pub inductance_mh: Scalar,
    /// Bank capacitance in microfarads.
    pub capacitance_uf: Scalar,
    /// Line-to-line RMS voltage in kilovolts.
    pub line_voltage_kv: Scalar,
    /// Design margin multiplier for the capacitor cell voltage rating.
    pub capacitor_overvoltage: Scalar,
    /// Design margin multiplier for the inductor rated current.
    pub inductor_overcurrent: Scalar,
    /// Capacitor cells in series per phase leg.
    pub series_cap_count: u32,
    /// Capacitor cell groups in parallel per phase leg.
    pub parallel_cap_count: u32,
}

impl FilterParameters {
    /// The parameter set written to the default template file: a 5th-harmonic
    /// filter on a 34.5 kV bus.
    #[must_use]
    pub fn template_defaults() -> Self {
        Self {
            fundamental_frequency_hz: 60.0,
            inductor_resistance_ohm: 2.849,
            inductance_mh: 204.949,
            capacitance_uf: 3.945,
            line_voltage_kv: 34.5,
            capacitor_overvoltage: 1.3,
            inductor_overcurrent: 1.66,
            series_cap_count: 2,
            parallel_cap_count: 1,
        }
    }

    /// Checks every field constraint, reporting the first violation.
    pub fn validate(&self) -> Result<(), FilterError> {
        let positive = |value: Scalar| value.is_finite() && value > 0.0;
        let at_least_one = |value: Scalar| value.is_finite() && value >= 1.0;

        if !positive(self.fundamental_frequency_hz) {
            return Err(FilterError::invalid("f1", "frequency must be positive"));
        }
        if !self.inductor_resistance_ohm.is_finite() || self.inductor_resistance_ohm < 0.0 {
            return Err(FilterError::invalid("r", "resistance must be non-negative"));
        }
        if !positive(self.inductance_mh) {
            return Err(FilterError::invalid("L_mH", "inductance must be positive"));
        }
        if !positive(self.capacitance_uf) {
            return Err(FilterError::invalid("C_uF", "capacitance must be positive"));
        }
        if !positive(self.line_voltage_kv) {
            return Err(FilterError::invalid(
                "V_line_kV",
                "line voltage must be positive",
            ));
        }
        if !at_least_one(self.capacitor_overvoltage) {
            return Err(FilterError::invalid(
                "capacitor_overvoltage",
                "overvoltage factor must be at least 1",
            ));
        }
        if !at_least_one(self.inductor_overcurrent) {
            return Err(FilterError::invalid(
                "inductor_overcurrent",
                "overcurrent factor must be at least 1",
            ));
        }
        if self.series_cap_count < 1 {
            return Err(FilterError::invalid(
                "series_cap_count",
                "at least one cell in series is required",
            ));
        }
        if self.parallel_cap_count < 1 {
            return Err(FilterError::invalid(
                "parallel_cap_count",
                "at least one cell group in parallel is required",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_defaults_are_valid() {
        assert!(FilterParameters::template_defaults().validate().is_ok());
    }

    #[test]
    fn zero_cap_counts_are_rejected() {
        let mut params = FilterParameters::template_defaults();
        params.series_cap_count = 0;
        assert!(matches!(
            params.validate(),
            Err(FilterError::InvalidParameter { field, .. }) if field == "series_cap_count"
        ));

        let mut params = FilterParameters::template_defaults();
        params.parallel_cap_count = 0;
        assert!(params.validate().is_err());
    }

    #[test]
    fn non_positive_scalars_are_rejected() {
        for mutate in [
            (|p: &mut FilterParameters| p.fundamental_frequency_hz = 0.0) as fn(&mut _),
            |p| p.inductance_mh = 0.0,
            |p| p.capacitance_uf = -1.0,
            |p| p.line_voltage_kv = 0.0,
            |p| p.inductor_resistance_ohm = -0.1,
        ] {
            let mut params = FilterParameters::template_defaults();
            mutate(&mut params);
            assert!(params.validate().is_err());
        }
    }

    #[test]
    fn margin_factors_below_one_are_rejected() {
        let mut params = FilterParameters::template_defaults();
        params.capacitor_overvoltage = 0.99;
        assert!(params.validate().is_err());

        let mut params = FilterParameters::template_defaults();
        params.inductor_overcurrent = 0.0;
        assert!(params.validate().is_err());
    }

    #[test]
    fn nan_fields_are_rejected() {
        let mut params = FilterParameters::template_defaults();
        params.fundamental_frequency_hz = Scalar::NAN;
        assert!(params.validate().is_err());
    }
}
