//! Series R-L-C branch assembled from lumped components.

use crate::filter::component::{Capacitor, Component, Inductor, Resistor};
use crate::filter::params::FilterParameters;
use crate::math::{CScalar, Scalar};

/// Per-element and aggregate impedances of the branch at one frequency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BranchImpedances {
    /// Impedance of the damping resistor (Ω).
    pub resistor: CScalar,
    /// Impedance of the tuning inductor (Ω).
    pub inductor: CScalar,
    /// Impedance of the capacitor bank (Ω).
    pub capacitor: CScalar,
    /// Series total seen by the source (Ω).
    pub filter: CScalar,
}

/// Single-tuned filter branch: resistor, inductor, and capacitor in series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TunedFilter {
    resistor: Resistor,
    inductor: Inductor,
    capacitor: Capacitor,
}

impl TunedFilter {
    /// Builds the branch from validated parameters.
    #[must_use]
    pub fn from_parameters(params: &FilterParameters) -> Self {
        Self {
            resistor: Resistor::new(params.inductor_resistance_ohm),
            inductor: Inductor::from_millihenries(params.inductance_mh),
            capacitor: Capacitor::from_microfarads(params.capacitance_uf),
        }
    }

    /// Evaluates every element at angular frequency `omega`; the series
    /// total is the sum of the member impedances.
    #[must_use]
    pub fn impedances(&self, omega: Scalar) -> BranchImpedances {
        let resistor = self.resistor.impedance(omega);
        let inductor = self.inductor.impedance(omega);
        let capacitor = self.capacitor.impedance(omega);
        BranchImpedances {
            resistor,
            inductor,
            capacitor,
            filter: resistor + inductor + capacitor,
        }
    }

    /// Inductance of the tuning reactor in henries.
    #[must_use]
    pub fn inductance(&self) -> Scalar {
        self.inductor.inductance()
    }

    /// Series resistance of the tuning reactor in ohms.
    #[must_use]
    pub fn resistance(&self) -> Scalar {
        self.resistor.resistance()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::constants::angular_frequency;

    fn defaults() -> FilterParameters {
        FilterParameters::template_defaults()
    }

    #[test]
    fn series_total_is_sum_of_members() {
        let branch = TunedFilter::from_parameters(&defaults());
        let z = branch.impedances(angular_frequency(60.0));
        let sum = z.resistor + z.inductor + z.capacitor;
        assert_eq!(z.filter, sum);
    }

    #[test]
    fn tuned_branch_is_capacitive_at_fundamental() {
        // A 5th-harmonic filter looks capacitive at 60 Hz.
        let branch = TunedFilter::from_parameters(&defaults());
        let z = branch.impedances(angular_frequency(60.0));
        assert!(z.filter.im < 0.0);
        assert_relative_eq!(z.filter.re, 2.849);
    }
}
