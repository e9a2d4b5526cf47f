//! Display-string report built from a calculation result.
//!
//! Numeric computation stays in [`crate::filter::calc`]; this module only
//! derives display quantities (voltage sum, apparent powers, rated current)
//! and renders strings. Phasors become `(magnitude ∠ angle°) unit` pairs,
//! sizing figures use engineering notation with an SI prefix.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::filter::calc::FilterResult;
use crate::math::{magnitude, phase_deg, CScalar, Scalar};
use crate::units::{Ampere, Ohm, Unit, Volt};

/// One labeled display value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    /// Row label, e.g. `Resistor`.
    pub label: String,
    /// Rendered value, e.g. `(77.26 ∠ 90.00°) Ω`.
    pub value: String,
}

/// One titled group of entries, rendered in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSection {
    /// Section heading, e.g. `Impedance (ohm)`.
    pub title: String,
    /// Ordered rows of the section.
    pub entries: Vec<ReportEntry>,
}

impl ReportSection {
    fn new(title: &str, rows: Vec<(&str, String)>) -> Self {
        Self {
            title: title.to_owned(),
            entries: rows
                .into_iter()
                .map(|(label, value)| ReportEntry {
                    label: label.to_owned(),
                    value,
                })
                .collect(),
        }
    }
}

/// Ordered, human-readable rendering of a [`FilterResult`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Sections in presentation order.
    pub sections: Vec<ReportSection>,
}

impl Report {
    /// Builds the six report sections from a calculation result.
    #[must_use]
    pub fn from_result(result: &FilterResult) -> Self {
        let z = &result.impedances;
        let i = &result.currents;
        let v = &result.voltages;
        let bank = &result.capacitor_bank;
        let v_sum = v.resistor + v.inductor + v.capacitor;

        let sections = vec![
            ReportSection::new(
                "Impedance (ohm)",
                vec![
                    ("Resistor", polar(z.resistor, Ohm::SYMBOL)),
                    ("Inductor", polar(z.inductor, Ohm::SYMBOL)),
                    ("Capacitor", polar(z.capacitor, Ohm::SYMBOL)),
                    ("Filter", polar(z.filter, Ohm::SYMBOL)),
                ],
            ),
            ReportSection::new(
                "Current (A)",
                vec![
                    ("Resistor", polar(i.resistor, Ampere::SYMBOL)),
                    ("Inductor", polar(i.inductor, Ampere::SYMBOL)),
                    ("Capacitor", polar(i.capacitor, Ampere::SYMBOL)),
                    ("Filter", polar(i.filter, Ampere::SYMBOL)),
                ],
            ),
            ReportSection::new(
                "Voltage (V)",
                vec![
                    ("Resistor", polar(v.resistor, Volt::SYMBOL)),
                    ("Inductor", polar(v.inductor, Volt::SYMBOL)),
                    ("Capacitor", polar(v.capacitor, Volt::SYMBOL)),
                    (
                        "Capac_pu",
                        format!("({:.2}) pu", magnitude(v.capacitor) / magnitude(v_sum)),
                    ),
                ],
            ),
            ReportSection::new(
                "Three-phase Power (kVA)",
                vec![
                    ("Resistor", three_phase_power(v.resistor, i.resistor, "kW")),
                    ("Inductor", three_phase_power(v.inductor, i.inductor, "kVAr")),
                    (
                        "Capacitor",
                        three_phase_power(v.capacitor, i.capacitor, "kVAr"),
                    ),
                    ("Filter", three_phase_power(v_sum, i.capacitor, "kVA")),
                ],
            ),
            ReportSection::new(
                "Capacitor Cells",
                vec![
                    ("Total Number of Cells", bank.total_cells.to_string()),
                    (
                        "Nominal Cell Voltage",
                        engineering(bank.cell_voltage_v, Volt::SYMBOL),
                    ),
                    ("Nominal Cell Power", engineering(bank.cell_power_var, "VAR")),
                    (
                        "Nominal Cell Capacitance",
                        engineering(bank.cell_capacitance_f, "F"),
                    ),
                    ("Bank Capacitance", engineering(bank.bank_capacitance_f, "F")),
                ],
            ),
            ReportSection::new(
                "Inductor",
                vec![
                    (
                        "Short-Circuit Current",
                        engineering(result.short_circuit_inductor_current_a, Ampere::SYMBOL),
                    ),
                    ("Inductance", engineering(result.inductance_h, "H")),
                    (
                        "Inductor Resistance",
                        engineering(result.inductor_resistance_ohm, Ohm::SYMBOL),
                    ),
                    (
                        "Inductor Rated Current",
                        engineering(
                            result.inductor_overcurrent * magnitude(i.inductor),
                            Ampere::SYMBOL,
                        ),
                    ),
                ],
            ),
        ];

        Self { sections }
    }
}

// JSON artifacts must keep section and row order, so serialization streams
// the vectors as maps instead of going through an intermediate map type.
impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for section in &self.sections {
            map.serialize_entry(&section.title, &Rows(&section.entries))?;
        }
        map.end()
    }
}

struct Rows<'a>(&'a [ReportEntry]);

impl Serialize for Rows<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in self.0 {
            map.serialize_entry(&entry.label, &entry.value)?;
        }
        map.end()
    }
}

/// Renders a phasor as `(magnitude ∠ angle°) unit` with two decimals.
fn polar(value: CScalar, unit: &str) -> String {
    format!("({:.2} ∠ {:.2}°) {unit}", magnitude(value), phase_deg(value))
}

/// Renders a three-phase power row: magnitude `3·|V|·|I|` in kilo-units,
/// angle `∠V − ∠I`. Under the passive sign convention the angle is +90° for
/// the inductor row and −90° for the capacitor row.
fn three_phase_power(voltage: CScalar, current: CScalar, unit: &str) -> String {
    let kilo = 3.0e-3 * magnitude(voltage) * magnitude(current);
    let angle = phase_deg(voltage) - phase_deg(current);
    format!("({kilo:.2} ∠ {angle:.2}°) {unit}")
}

/// Renders `value` with four significant digits and an SI prefix, e.g.
/// `14.63 kV` or `7.890 µF`.
fn engineering(value: Scalar, unit: &str) -> String {
    const PREFIXES: [&str; 17] = [
        "y", "z", "a", "f", "p", "n", "µ", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y",
    ];

    if value == 0.0 {
        return format!("0.000 {unit}");
    }
    let sign = if value.is_sign_negative() { "-" } else { "" };
    let abs = value.abs();
    let mut exp3 = (((abs.log10() / 3.0).floor()) * 3.0) as i32;
    exp3 = exp3.clamp(-24, 24);
    let mut mantissa = abs / 10f64.powi(exp3);

    let mut decimals = mantissa_decimals(mantissa);
    // rounding at four significant digits can carry into the next band
    let factor = 10f64.powi(decimals as i32);
    if (mantissa * factor).round() / factor >= 1000.0 && exp3 < 24 {
        mantissa /= 1000.0;
        exp3 += 3;
        decimals = 3;
    }

    let prefix = PREFIXES[((exp3 + 24) / 3) as usize];
    format!("{sign}{mantissa:.decimals$} {prefix}{unit}")
}

fn mantissa_decimals(mantissa: Scalar) -> usize {
    if mantissa < 10.0 {
        3
    } else if mantissa < 100.0 {
        2
    } else {
        1
    }
}
