//! Filter branch modeling and the steady-state calculator.

pub mod branch;
pub mod calc;
pub mod component;
pub mod params;

pub use branch::{BranchImpedances, TunedFilter};
pub use calc::{calculate, BranchCurrents, CapacitorBank, ElementVoltages, FilterResult};
pub use component::{Capacitor, Component, Inductor, Resistor};
pub use params::FilterParameters;
