//! Convenience re-exports for sizing tuned filter branches.

pub use crate::constants::*;
pub use crate::errors::FilterError;
pub use crate::filter::{
    calculate, BranchCurrents, BranchImpedances, Capacitor, CapacitorBank, Component,
    ElementVoltages, FilterParameters, FilterResult, Inductor, Resistor, TunedFilter,
};
pub use crate::io::export::{workbook_bytes, write_artifacts, write_json, write_text};
pub use crate::io::params_file::{decode_text, load_parameters, parse_parameters};
pub use crate::io::template::{write_default_template, DEFAULT_TEMPLATE};
pub use crate::math::{complex_power, magnitude, phase_deg, CScalar, Scalar};
pub use crate::report::{Report, ReportEntry, ReportSection};
pub use crate::units::{
    Ampere, Capacitance, Farad, Henry, Impedance, Inductance, Ohm, Quantity, Unit, Volt,
};
