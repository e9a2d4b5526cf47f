//! Frequency and unit-conversion helpers shared across modules.
//!
//! Parameter files carry component values in the units engineers quote them
//! in (millihenries, microfarads, kilovolts); everything downstream works in
//! SI base units. The conversions live here so the factors appear exactly
//! once.

use std::f64::consts::PI;

use crate::math::Scalar;

/// Returns the angular frequency ω = 2πf for a linear frequency `hz`.
#[inline]
#[must_use]
pub fn angular_frequency(hz: Scalar) -> Scalar {
    2.0 * PI * hz
}

/// Line-to-neutral RMS voltage in volts of a balanced three-phase system,
/// derived from the line-to-line RMS voltage in kilovolts.
#[inline]
#[must_use]
pub fn phase_voltage_v(line_voltage_kv: Scalar) -> Scalar {
    line_voltage_kv * 1.0e3 / Scalar::sqrt(3.0)
}

/// Converts millihenries to henries.
#[inline]
#[must_use]
pub fn millihenry_to_henry(inductance_mh: Scalar) -> Scalar {
    inductance_mh * 1.0e-3
}

/// Converts microfarads to farads.
#[inline]
#[must_use]
pub fn microfarad_to_farad(capacitance_uf: Scalar) -> Scalar {
    capacitance_uf * 1.0e-6
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn angular_frequency_at_sixty_hertz() {
        assert_relative_eq!(angular_frequency(60.0), 376.991_118_4, max_relative = 1.0e-9);
    }

    #[test]
    fn phase_voltage_of_thirty_four_five_kv() {
        // 34.5 kV line-to-line → 19 918.6 V line-to-neutral.
        assert_relative_eq!(phase_voltage_v(34.5), 19_918.584_2, max_relative = 1.0e-6);
    }
}
