//! Template → parse → calculate → report → export, end to end.

use std::fs;
use std::path::PathBuf;

use approx::assert_relative_eq;
use tuned_filter::prelude::*;

/// Fresh scratch directory for one test, removed on drop.
struct Scratch(PathBuf);

impl Scratch {
    fn new(tag: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("tuned-filter-{tag}-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        Self(dir)
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

#[test]
fn default_template_flows_through_the_whole_pipeline() {
    let scratch = Scratch::new("pipeline");
    let template = scratch.0.join("parameters.txt");

    // Template is idempotent: a second write leaves identical bytes.
    write_default_template(&template).unwrap();
    let first = fs::read(&template).unwrap();
    write_default_template(&template).unwrap();
    assert_eq!(first, fs::read(&template).unwrap());

    let params = load_parameters(&template).unwrap();
    assert_eq!(params, FilterParameters::template_defaults());

    let result = calculate(&params).unwrap();
    assert_relative_eq!(
        magnitude(result.impedances.inductor),
        77.264,
        max_relative = 1.0e-4
    );
    assert_relative_eq!(
        magnitude(result.impedances.capacitor),
        672.39,
        max_relative = 1.0e-4
    );
    assert_relative_eq!(phase_voltage_v(params.line_voltage_kv), 19_918.6, max_relative = 1.0e-5);
    assert_relative_eq!(
        result.short_circuit_inductor_current_a,
        257.8,
        max_relative = 1.0e-3
    );

    let report = Report::from_result(&result);
    write_artifacts(&scratch.0, &report).unwrap();

    // Every artifact exists and carries every section.
    let json: serde_json::Value =
        serde_json::from_slice(&fs::read(scratch.0.join("results.json")).unwrap()).unwrap();
    let text = fs::read_to_string(scratch.0.join("results.txt")).unwrap();
    let workbook = fs::read(scratch.0.join("results.xlsx")).unwrap();
    assert_eq!(&workbook[..2], b"PK");
    for section in &report.sections {
        assert!(json.get(&section.title).is_some(), "{} missing from JSON", section.title);
        assert!(text.contains(&format!("{}:", section.title)));
    }
}

#[test]
fn calculation_errors_yield_no_artifacts() {
    let scratch = Scratch::new("errors");
    let bad = scratch.0.join("parameters.txt");
    fs::write(&bad, DEFAULT_TEMPLATE.replace("f1 = 60", "f1 = 0")).unwrap();

    let err = load_parameters(&bad).unwrap_err();
    assert!(matches!(err, FilterError::InvalidParameter { field, .. } if field == "f1"));

    // The pipeline stops before export, so the scratch directory only holds
    // the parameter file itself.
    let entries: Vec<_> = fs::read_dir(&scratch.0).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn latin_1_parameter_file_loads() {
    let scratch = Scratch::new("latin1");
    let path = scratch.0.join("parameters.txt");
    let mut bytes = b"# Tens\xe3o de linha em kV\n".to_vec();
    bytes.extend_from_slice(DEFAULT_TEMPLATE.as_bytes());
    fs::write(&path, bytes).unwrap();

    let params = load_parameters(&path).unwrap();
    assert_eq!(params, FilterParameters::template_defaults());
}
