use std::path::PathBuf;
use switch_catalog_lint::utils::error::ErrorKind;
use switch_catalog_lint::{Catalog, LintConfig, LintError, SchemaViolation, Validator};
use tempfile::TempDir;

const CATALOG_7050X: &str = r#"
name: 7050X
last-eos-revision-supported: "4.28"
pdf-datasheet-url: https://example.com/7050x.pdf
end-of-sale-announced: true
end-of-sale-date: 2020-09-30
end-of-sale-url: https://example.com/eos
end-of-support-date: 2025-09-30T00:00:00Z
end-of-support-url: https://example.com/eol
notes:
  - Shipped with two PSUs.
models:
  - name: DCS-7050TX-64
    typical-watts: 195
    max-watts: 264.5
    rack-units: 1
    cpu-cores: 2
    cpu-ram-gb: 4
    cpu-flash-gb: 4
    switch-chip: Trident2
    ports:
      - type: 10Gbase-T
        count: 48
      - type: QSFP+
        count: 4
        note: each port can run as 4x10G
  - name: DCS-7050SX-128
    rack-units: 2
    switch-chip: Trident2+
    ports:
      - type: SFP+
        count: 96
      - type: QSFP+
        count: 8
"#;

fn write_fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_full_catalog_document_passes() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_fixture(&temp_dir, "7050x.yaml", CATALOG_7050X);

    let definition = Validator::new(Catalog::default()).validate_file(&path).unwrap();
    assert_eq!(definition.name, "7050X");
    assert_eq!(definition.last_eos_revision_supported, "4.28");
    assert_eq!(definition.models.len(), 2);
    assert_eq!(definition.models[1].ports[0].count, 96);
    assert_eq!(
        definition.end_of_support_date.map(|d| d.to_string()),
        Some("2025-09-30".to_string())
    );
}

#[test]
fn test_unknown_top_level_field_rejected() {
    let doc = format!("{}\nvendor: arista\n", CATALOG_7050X);
    let err = Validator::new(Catalog::default()).validate_bytes(doc.as_bytes()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
    assert!(err.to_string().contains("vendor"));
}

#[test]
fn test_unknown_model_field_rejected() {
    let doc = CATALOG_7050X.replace("rack-units: 2", "rack-unit: 2");
    let err = Validator::new(Catalog::default()).validate_bytes(doc.as_bytes()).unwrap_err();
    assert!(matches!(err, LintError::DecodeError(_)));
    assert!(err.to_string().contains("rack-unit"));
}

#[test]
fn test_unknown_port_type_names_owning_model() {
    let doc = CATALOG_7050X.replace("- type: SFP+", "- type: unknown-type");
    let err = Validator::new(Catalog::default()).validate_bytes(doc.as_bytes()).unwrap_err();
    match &err {
        LintError::SchemaError { model, violation } => {
            assert_eq!(model, "DCS-7050SX-128");
            assert_eq!(
                violation,
                &SchemaViolation::UnknownPortType("unknown-type".to_string())
            );
        }
        other => panic!("expected schema error, got {:?}", other),
    }
    assert_eq!(
        err.to_string(),
        r#"device "DCS-7050SX-128": port type "unknown-type" unknown"#
    );
}

#[test]
fn test_malformed_yaml_rejected() {
    let err = Validator::new(Catalog::default())
        .validate_bytes(b"models: [\n  - name: broken\n")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[test]
fn test_type_mismatch_rejected() {
    let doc = CATALOG_7050X.replace("count: 48", "count: forty-eight");
    let err = Validator::new(Catalog::default()).validate_bytes(doc.as_bytes()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[test]
fn test_extra_port_types_from_config() {
    let doc = CATALOG_7050X.replace("- type: SFP+", "- type: OSFP");
    assert!(Validator::new(Catalog::default()).validate_bytes(doc.as_bytes()).is_err());

    let config = LintConfig::from_toml_str("[port_types]\nextra = [\"OSFP\"]\n").unwrap();
    let validator = Validator::new(config.to_catalog());
    assert!(validator.validate_bytes(doc.as_bytes()).is_ok());
}

#[test]
fn test_switch_chip_enforcement() {
    let doc = CATALOG_7050X.replace("switch-chip: Trident2+", "switch-chip: Jericho");
    assert!(Validator::new(Catalog::default()).validate_bytes(doc.as_bytes()).is_ok());

    let strict = Validator::new(Catalog {
        check_switch_chips: true,
        ..Catalog::default()
    });
    let err = strict.validate_bytes(doc.as_bytes()).unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"device "DCS-7050SX-128": switch chip "Jericho" unknown"#
    );
}

#[test]
fn test_comment_only_file_is_empty_document() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_fixture(&temp_dir, "placeholder.yaml", "# nothing here yet\n");
    let err = Validator::new(Catalog::default()).validate_file(&path).unwrap_err();
    assert!(matches!(err, LintError::EmptyDocument));
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[test]
fn test_trailing_document_marker_ignored() {
    let doc = format!("{}---\n", CATALOG_7050X);
    let definition = Validator::new(Catalog::default())
        .validate_bytes(doc.as_bytes())
        .unwrap();
    assert_eq!(definition.models.len(), 2);

    let two_docs = format!("{}---\nname: second\nunknown-key: 1\n", CATALOG_7050X);
    assert!(Validator::new(Catalog::default())
        .validate_bytes(two_docs.as_bytes())
        .is_ok());
}

#[test]
fn test_negative_and_large_integers_are_not_decode_errors() {
    let doc = CATALOG_7050X
        .replace("count: 48", "count: -1")
        .replace("rack-units: 2", "rack-units: 5000000000");
    let definition = Validator::new(Catalog::default())
        .validate_bytes(doc.as_bytes())
        .unwrap();
    assert_eq!(definition.models[0].ports[0].count, -1);
    assert_eq!(definition.models[1].rack_units, 5_000_000_000);
}

#[test]
fn test_space_separated_end_of_sale_timestamp() {
    let doc = CATALOG_7050X.replace(
        "end-of-sale-date: 2020-09-30",
        "end-of-sale-date: 2020-09-30 10:00:00",
    );
    let definition = Validator::new(Catalog::default())
        .validate_bytes(doc.as_bytes())
        .unwrap();
    assert_eq!(
        definition.end_of_sale_date.map(|d| d.to_string()),
        Some("2020-09-30".to_string())
    );
}
