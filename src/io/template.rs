//! Default parameter template.

use std::fs;
use std::path::Path;

use crate::errors::FilterError;

/// Contents of the default parameter file: a 5th-harmonic filter on a
/// 34.5 kV bus, matching [`crate::filter::FilterParameters::template_defaults`].
pub const DEFAULT_TEMPLATE: &str = "\
# Fundamental frequency in Hz
f1 = 60

# Series resistance of the tuning inductor in ohms
r = 2.849

# Tuning inductance in millihenries (mH)
L_mH = 204.949

# Bank capacitance in microfarads (uF)
C_uF = 3.945

# Line-to-line voltage in kV (kilovolts)
V_line_kV = 34.5

# Allowed capacitor overvoltage (multiplication factor)
capacitor_overvoltage = 1.3

# Allowed inductor overcurrent (multiplication factor)
inductor_overcurrent = 1.66

# Number of capacitor cells in series
series_cap_count = 2

# Number of capacitor cells in parallel
parallel_cap_count = 1
";

/// Writes the default template to `path`, replacing any previous copy.
///
/// The content is constant, so repeated calls are idempotent. Hosts invoke
/// this explicitly (for example at startup or behind an `--init` flag); the
/// library never writes it on its own.
pub fn write_default_template(path: impl AsRef<Path>) -> Result<(), FilterError> {
    fs::write(path, DEFAULT_TEMPLATE)?;
    Ok(())
}
