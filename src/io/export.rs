//! Result artifact writers.
//!
//! All three exporters consume the rendered [`Report`], so the artifacts
//! always agree with what was shown on screen. The writer-generic functions
//! take any [`Write`] sink; [`write_artifacts`] renders every artifact in
//! memory before touching the filesystem so a failure leaves no partial set.

use std::fs;
use std::io::Write;
use std::path::Path;

use rust_xlsxwriter::Workbook;

use crate::errors::FilterError;
use crate::report::Report;

/// File names of the three result artifacts written by [`write_artifacts`].
pub const ARTIFACT_FILES: [&str; 3] = ["results.json", "results.txt", "results.xlsx"];

/// Writes the report as pretty-printed JSON, sections in report order.
pub fn write_json<W: Write>(writer: W, report: &Report) -> Result<(), FilterError> {
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}

/// Writes the report as `Section:` heading lines followed by
/// `Label: value` rows, with a blank line between sections.
pub fn write_text<W: Write>(mut writer: W, report: &Report) -> Result<(), FilterError> {
    for (index, section) in report.sections.iter().enumerate() {
        if index > 0 {
            writeln!(writer)?;
        }
        writeln!(writer, "{}:", section.title)?;
        for entry in &section.entries {
            writeln!(writer, "{}: {}", entry.label, entry.value)?;
        }
    }
    Ok(())
}

/// Renders the report as XLSX workbook bytes, one worksheet per section
/// with `Parameter` / `Value` columns.
pub fn workbook_bytes(report: &Report) -> Result<Vec<u8>, FilterError> {
    let mut workbook = Workbook::new();
    for section in &report.sections {
        let sheet = workbook.add_worksheet();
        sheet.set_name(&section.title)?;
        sheet.write_string(0, 0, "Parameter")?;
        sheet.write_string(0, 1, "Value")?;
        for (row, entry) in section.entries.iter().enumerate() {
            let row = row as u32 + 1;
            sheet.write_string(row, 0, &entry.label)?;
            sheet.write_string(row, 1, &entry.value)?;
        }
    }
    Ok(workbook.save_to_buffer()?)
}

/// Writes `results.json`, `results.txt`, and `results.xlsx` into `dir`.
pub fn write_artifacts(dir: &Path, report: &Report) -> Result<(), FilterError> {
    let mut json = Vec::new();
    write_json(&mut json, report)?;
    let mut text = Vec::new();
    write_text(&mut text, report)?;
    let workbook = workbook_bytes(report)?;

    fs::write(dir.join(ARTIFACT_FILES[0]), json)?;
    fs::write(dir.join(ARTIFACT_FILES[1]), text)?;
    fs::write(dir.join(ARTIFACT_FILES[2]), workbook)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::calc::calculate;
    use crate::filter::params::FilterParameters;

    fn default_report() -> Report {
        let result = calculate(&FilterParameters::template_defaults()).unwrap();
        Report::from_result(&result)
    }

    #[test]
    fn text_artifact_carries_every_section_and_row() {
        let report = default_report();
        let mut buffer = Vec::new();
        write_text(&mut buffer, &report).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        for section in &report.sections {
            assert!(text.contains(&format!("{}:", section.title)));
            for entry in &section.entries {
                assert!(text.contains(&format!("{}: {}", entry.label, entry.value)));
            }
        }
    }

    #[test]
    fn json_artifact_carries_every_section_and_row() {
        let report = default_report();
        let mut buffer = Vec::new();
        write_json(&mut buffer, &report).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        for section in &report.sections {
            let group = value
                .get(&section.title)
                .unwrap_or_else(|| panic!("section `{}` missing", section.title));
            for entry in &section.entries {
                assert_eq!(
                    group.get(&entry.label).and_then(serde_json::Value::as_str),
                    Some(entry.value.as_str())
                );
            }
        }
    }

    #[test]
    fn workbook_bytes_form_a_zip_container() {
        let bytes = workbook_bytes(&default_report()).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }
}
