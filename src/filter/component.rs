//! Lumped R, L, and C element models.
//!
//! Constructors take values in the units filter engineers quote them in
//! (ohms, millihenries, microfarads) and store SI base quantities. All
//! impedances are evaluated at a strictly positive angular frequency; the
//! parameter layer rejects ω = 0 before any component is built.

use crate::constants::{microfarad_to_farad, millihenry_to_henry};
use crate::math::{CScalar, Scalar};
use crate::units::{Capacitance, Impedance, Inductance};

/// Trait implemented by elements that present a frequency-domain impedance.
pub trait Component {
    /// Returns the element impedance at angular frequency `omega` (rad/s).
    fn impedance(&self, omega: Scalar) -> CScalar;
}

/// Lumped resistor model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resistor {
    resistance: Impedance<Scalar>,
}

impl Resistor {
    /// Creates a resistor from a resistance in ohms.
    #[must_use]
    pub fn new(resistance_ohm: Scalar) -> Self {
        Self {
            resistance: Impedance::new(resistance_ohm),
        }
    }

    /// Resistance in ohms.
    #[must_use]
    pub fn resistance(&self) -> Scalar {
        self.resistance.value()
    }
}

impl Component for Resistor {
    fn impedance(&self, _omega: Scalar) -> CScalar {
        CScalar::new(self.resistance(), 0.0)
    }
}

/// Lumped inductor model (ideal; its series resistance is a separate
/// [`Resistor`] element in the branch).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inductor {
    inductance: Inductance<Scalar>,
}

impl Inductor {
    /// Creates an inductor from an inductance in millihenries.
    #[must_use]
    pub fn from_millihenries(inductance_mh: Scalar) -> Self {
        Self {
            inductance: Inductance::new(millihenry_to_henry(inductance_mh)),
        }
    }

    /// Inductance in henries.
    #[must_use]
    pub fn inductance(&self) -> Scalar {
        self.inductance.value()
    }
}

impl Component for Inductor {
    fn impedance(&self, omega: Scalar) -> CScalar {
        CScalar::new(0.0, omega * self.inductance())
    }
}

/// Lumped capacitor model (ideal).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Capacitor {
    capacitance: Capacitance<Scalar>,
}

impl Capacitor {
    /// Creates a capacitor from a capacitance in microfarads.
    #[must_use]
    pub fn from_microfarads(capacitance_uf: Scalar) -> Self {
        Self {
            capacitance: Capacitance::new(microfarad_to_farad(capacitance_uf)),
        }
    }

    /// Capacitance in farads.
    #[must_use]
    pub fn capacitance(&self) -> Scalar {
        self.capacitance.value()
    }
}

impl Component for Capacitor {
    fn impedance(&self, omega: Scalar) -> CScalar {
        CScalar::new(0.0, -1.0 / (omega * self.capacitance()))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::constants::angular_frequency;

    #[test]
    fn resistor_impedance_is_real() {
        let r = Resistor::new(2.849);
        let z = r.impedance(angular_frequency(60.0));
        assert_relative_eq!(z.re, 2.849);
        assert_relative_eq!(z.im, 0.0);
    }

    #[test]
    fn inductor_impedance_at_sixty_hertz() {
        let l = Inductor::from_millihenries(204.949);
        let z = l.impedance(angular_frequency(60.0));
        assert_relative_eq!(z.re, 0.0);
        assert_relative_eq!(z.im, 77.263_9, max_relative = 1.0e-5);
    }

    #[test]
    fn capacitor_impedance_is_negative_reactive() {
        let c = Capacitor::from_microfarads(3.945);
        let z = c.impedance(angular_frequency(60.0));
        assert_relative_eq!(z.re, 0.0);
        assert_relative_eq!(z.im, -672.391, max_relative = 1.0e-4);
    }
}
