//! Parameter-file decoding and parsing.
//!
//! The on-disk format is one `key = value` pair per line. Blank lines and
//! lines starting with `#` are skipped, unknown keys are ignored, and the
//! last occurrence of a repeated key wins. Files may be UTF-8 or Latin-1.

use std::fs;
use std::path::Path;

use crate::errors::FilterError;
use crate::filter::params::FilterParameters;
use crate::math::Scalar;

/// Reads, decodes, and parses a parameter file.
pub fn load_parameters(path: impl AsRef<Path>) -> Result<FilterParameters, FilterError> {
    let bytes = fs::read(path)?;
    parse_parameters(&decode_text(&bytes)?)
}

/// Decodes parameter-file bytes as UTF-8, falling back to Latin-1.
///
/// Latin-1 maps every byte to the code point of the same value, so the
/// fallback itself cannot fail; content carrying control bytes other than
/// tab/CR/LF is rejected instead, since binary data is not a parameter file
/// under either encoding.
pub fn decode_text(bytes: &[u8]) -> Result<String, FilterError> {
    let text = match std::str::from_utf8(bytes) {
        Ok(text) => text.to_owned(),
        Err(_) => bytes.iter().map(|&byte| char::from(byte)).collect(),
    };
    if text
        .chars()
        .any(|c| c.is_control() && !matches!(c, '\t' | '\r' | '\n'))
    {
        return Err(FilterError::Decoding);
    }
    Ok(text)
}

/// Parses decoded parameter text into a validated parameter set.
pub fn parse_parameters(text: &str) -> Result<FilterParameters, FilterError> {
    let mut fields = RawFields::default();
    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let Some((key, value)) = trimmed.split_once('=') else {
            return Err(FilterError::invalid(
                format!("line {line_no}"),
                format!("expected `key = value`, got `{trimmed}`"),
            ));
        };
        let key = key.trim();
        let value = value.trim();
        if key.is_empty() {
            return Err(FilterError::invalid(
                format!("line {line_no}"),
                "missing key before `=`",
            ));
        }
        let number: Scalar = value.parse().map_err(|_| {
            FilterError::invalid(key, format!("`{value}` is not a number (line {line_no})"))
        })?;
        fields.set(key, number);
    }
    fields.finish()
}

/// Accumulates raw field values as they appear in the file.
#[derive(Debug, Default)]
struct RawFields {
    f1: Option<Scalar>,
    r: Option<Scalar>,
    l_mh: Option<Scalar>,
    c_uf: Option<Scalar>,
    v_line_kv: Option<Scalar>,
    capacitor_overvoltage: Option<Scalar>,
    inductor_overcurrent: Option<Scalar>,
    series_cap_count: Option<Scalar>,
    parallel_cap_count: Option<Scalar>,
}

impl RawFields {
    fn set(&mut self, key: &str, value: Scalar) {
        match key {
            "f1" => self.f1 = Some(value),
            "r" => self.r = Some(value),
            "L_mH" => self.l_mh = Some(value),
            "C_uF" => self.c_uf = Some(value),
            "V_line_kV" => self.v_line_kv = Some(value),
            "capacitor_overvoltage" => self.capacitor_overvoltage = Some(value),
            "inductor_overcurrent" => self.inductor_overcurrent = Some(value),
            "series_cap_count" => self.series_cap_count = Some(value),
            "parallel_cap_count" => self.parallel_cap_count = Some(value),
            _ => {}
        }
    }

    fn finish(self) -> Result<FilterParameters, FilterError> {
        let params = FilterParameters {
            fundamental_frequency_hz: require(self.f1, "f1")?,
            inductor_resistance_ohm: require(self.r, "r")?,
            inductance_mh: require(self.l_mh, "L_mH")?,
            capacitance_uf: require(self.c_uf, "C_uF")?,
            line_voltage_kv: require(self.v_line_kv, "V_line_kV")?,
            capacitor_overvoltage: require(self.capacitor_overvoltage, "capacitor_overvoltage")?,
            inductor_overcurrent: require(self.inductor_overcurrent, "inductor_overcurrent")?,
            series_cap_count: cell_count(
                require(self.series_cap_count, "series_cap_count")?,
                "series_cap_count",
            )?,
            parallel_cap_count: cell_count(
                require(self.parallel_cap_count, "parallel_cap_count")?,
                "parallel_cap_count",
            )?,
        };
        params.validate()?;
        Ok(params)
    }
}

fn require(field: Option<Scalar>, name: &str) -> Result<Scalar, FilterError> {
    field.ok_or_else(|| FilterError::invalid(name, "required field is missing"))
}

fn cell_count(value: Scalar, field: &str) -> Result<u32, FilterError> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(FilterError::invalid(
            field,
            format!("`{value}` is not a whole cell count"),
        ));
    }
    Ok(value as u32)
}
