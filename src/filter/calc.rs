//! Closed-form steady-state solution of the filter branch.
//!
//! The pipeline is strictly sequential: impedances, then the series current
//! and per-element voltage drops, then capacitor-bank sizing, then the
//! reactor short-circuit current. [`calculate`] is the only entry point;
//! each invocation is independent and retains no state.

use crate::constants::{angular_frequency, phase_voltage_v};
use crate::errors::FilterError;
use crate::filter::branch::{BranchImpedances, TunedFilter};
use crate::filter::params::FilterParameters;
use crate::math::{complex_power, CScalar, Scalar};

/// Below this |Z_filter| the branch is treated as exactly at series
/// resonance and the current solution is refused.
const RESONANCE_EPSILON_OHM: Scalar = 1.0e-9;

/// Series current phasors in amperes. All four positions carry the same
/// value in a series loop; they are stored separately so each consumer
/// reads its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BranchCurrents {
    /// Current through the resistor (A).
    pub resistor: CScalar,
    /// Current through the inductor (A).
    pub inductor: CScalar,
    /// Current through the capacitor (A).
    pub capacitor: CScalar,
    /// Current drawn from the bus (A).
    pub filter: CScalar,
}

/// Voltage drop phasors across each element, in volts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementVoltages {
    /// Drop across the resistor (V).
    pub resistor: CScalar,
    /// Drop across the inductor (V).
    pub inductor: CScalar,
    /// Drop across the capacitor (V).
    pub capacitor: CScalar,
}

/// Capacitor-bank sizing figures derived from the capacitor operating point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapacitorBank {
    /// Cells across all three phases.
    pub total_cells: u64,
    /// Rated voltage per cell, including the overvoltage margin (V).
    pub cell_voltage_v: Scalar,
    /// Rated reactive power per cell (VAr).
    pub cell_power_var: Scalar,
    /// Capacitance per cell (F).
    pub cell_capacitance_f: Scalar,
    /// Resulting series-parallel bank capacitance per phase (F).
    pub bank_capacitance_f: Scalar,
}

/// Complete steady-state solution for one parameter set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterResult {
    /// Element and series impedances (Ω).
    pub impedances: BranchImpedances,
    /// Series current at each position (A).
    pub currents: BranchCurrents,
    /// Voltage drop across each element (V).
    pub voltages: ElementVoltages,
    /// Capacitor-bank sizing figures.
    pub capacitor_bank: CapacitorBank,
    /// Fault current through the reactor alone (A).
    pub short_circuit_inductor_current_a: Scalar,
    /// Tuning inductance, echoed for the report layer (H).
    pub inductance_h: Scalar,
    /// Reactor series resistance, echoed for the report layer (Ω).
    pub inductor_resistance_ohm: Scalar,
    /// Reactor overcurrent margin factor, echoed for the report layer.
    pub inductor_overcurrent: Scalar,
}

/// Solves the series loop: one current everywhere, one voltage drop per
/// element. Refuses to divide by a resonant (near-zero) total impedance.
fn currents_and_voltages(
    params: &FilterParameters,
    impedances: &BranchImpedances,
) -> Result<(BranchCurrents, ElementVoltages), FilterError> {
    let magnitude = impedances.filter.norm();
    if magnitude <= RESONANCE_EPSILON_OHM {
        return Err(FilterError::ResonanceSingularity {
            magnitude_ohm: magnitude,
        });
    }

    let current = CScalar::new(phase_voltage_v(params.line_voltage_kv), 0.0) / impedances.filter;
    let currents = BranchCurrents {
        resistor: current,
        inductor: current,
        capacitor: current,
        filter: current,
    };
    let voltages = ElementVoltages {
        resistor: current * impedances.resistor,
        inductor: current * impedances.inductor,
        capacitor: current * impedances.capacitor,
    };
    Ok((currents, voltages))
}

/// Sizes the capacitor cells from the capacitor operating point.
///
/// The per-cell capacitance follows from Q = ωCV² applied to the rated
/// per-cell voltage and reactive power; the bank value recombines cells by
/// the series-parallel rule.
fn size_capacitor_bank(
    params: &FilterParameters,
    voltages: &ElementVoltages,
    currents: &BranchCurrents,
    omega: Scalar,
) -> CapacitorBank {
    let power = complex_power(voltages.capacitor, currents.capacitor);
    let series = Scalar::from(params.series_cap_count);
    let parallel = Scalar::from(params.parallel_cap_count);
    let total_cells =
        3 * u64::from(params.series_cap_count) * u64::from(params.parallel_cap_count);

    let cell_voltage_v = voltages.capacitor.norm() * params.capacitor_overvoltage / series;
    let cell_power_var =
        3.0 * power.norm() * params.capacitor_overvoltage.powi(2) / total_cells as Scalar;
    let cell_capacitance_f = cell_power_var / (omega * cell_voltage_v.powi(2));

    CapacitorBank {
        total_cells,
        cell_voltage_v,
        cell_power_var,
        cell_capacitance_f,
        bank_capacitance_f: cell_capacitance_f * parallel / series,
    }
}

/// Worst-case fault current through the reactor alone, ignoring the
/// resistor and the capacitor bank.
fn short_circuit_inductor_current(params: &FilterParameters, branch: &TunedFilter) -> Scalar {
    let reactance = angular_frequency(params.fundamental_frequency_hz) * branch.inductance();
    phase_voltage_v(params.line_voltage_kv) / reactance
}

/// Computes the full steady-state solution for one parameter set.
///
/// Validates the parameters, builds the branch, and runs the four solution
/// steps in order. Pure: identical inputs produce bit-identical results.
pub fn calculate(params: &FilterParameters) -> Result<FilterResult, FilterError> {
    params.validate()?;

    let omega = angular_frequency(params.fundamental_frequency_hz);
    let branch = TunedFilter::from_parameters(params);
    let impedances = branch.impedances(omega);
    let (currents, voltages) = currents_and_voltages(params, &impedances)?;
    let capacitor_bank = size_capacitor_bank(params, &voltages, &currents, omega);

    Ok(FilterResult {
        impedances,
        currents,
        voltages,
        capacitor_bank,
        short_circuit_inductor_current_a: short_circuit_inductor_current(params, &branch),
        inductance_h: branch.inductance(),
        inductor_resistance_ohm: branch.resistance(),
        inductor_overcurrent: params.inductor_overcurrent,
    })
}
