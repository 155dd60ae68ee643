//! End-to-end conversion: CSV input, YAML configuration, exported files.

use sheetfmt::{convert_file, Config, ConvertOptions, PipelineError, ValidationError};
use std::fs;
use std::path::{Path, PathBuf};

const PRODUCTS: &str = "ID,Name,Qty\n1,p1,20\n2,p3,40\n3,p3,80\n4,p3,80\n";

fn setup(dir: &Path) -> PathBuf {
    let input = dir.join("products.csv");
    fs::write(&input, PRODUCTS).unwrap();
    input
}

fn options(dir: &Path) -> ConvertOptions {
    ConvertOptions {
        out_dir: Some(dir.join("out")),
        dry_run: false,
    }
}

#[test]
fn dedup_split_aggregate_and_message() {
    let dir = tempfile::tempdir().unwrap();
    let input = setup(dir.path());
    let config = Config::from_yaml(
        r#"
unique_columns: [2, 3]
file_split:
  row: 2
distinct_column: 2
completion_message: "output {$distinct_column} outputs."
"#,
    )
    .unwrap();

    let report = convert_file(&input, &config, &options(dir.path())).unwrap();

    assert_eq!(
        report.files,
        vec![
            dir.path().join("out/products.csv"),
            dir.path().join("out/products_1.csv"),
        ]
    );
    assert_eq!(
        fs::read_to_string(&report.files[0]).unwrap(),
        "ID,Name,Qty\n1,p1,20\n2,p3,40\n"
    );
    assert_eq!(fs::read_to_string(&report.files[1]).unwrap(), "ID,Name,Qty\n3,p3,80\n");
    assert_eq!(report.output.aggregate, vec!["p1", "p3"]);
    assert_eq!(report.output.message, "output \np1\np3\n outputs.");
}

#[test]
fn overwrite_with_tsv_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = setup(dir.path());
    let config = Config::from_yaml(
        r#"
export_file_extension: tsv
overwrite_columns:
  - column: 3
    value: "0"
"#,
    )
    .unwrap();

    let report = convert_file(&input, &config, &options(dir.path())).unwrap();

    assert_eq!(report.files, vec![dir.path().join("out/products.tsv")]);
    assert_eq!(
        fs::read_to_string(&report.files[0]).unwrap(),
        "ID\tName\tQty\n1\tp1\t0\n2\tp3\t0\n3\tp3\t0\n4\tp3\t0\n"
    );
    assert!(report.output.message.is_empty());
}

#[test]
fn unknown_extension_falls_back_to_csv() {
    let dir = tempfile::tempdir().unwrap();
    let input = setup(dir.path());
    let config = Config::from_yaml("export_file_extension: parquet\n").unwrap();

    let report = convert_file(&input, &config, &options(dir.path())).unwrap();
    assert_eq!(report.files, vec![dir.path().join("out/products.csv")]);
}

#[test]
fn out_of_range_column_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = setup(dir.path());
    let config = Config::from_yaml("unique_columns: [1, 4]\n").unwrap();

    let err = convert_file(&input, &config, &options(dir.path())).unwrap_err();
    match err {
        PipelineError::Validation(ValidationError::OutOfRange { field, value, columns }) => {
            assert_eq!(field, "unique_columns");
            assert_eq!(value, 4);
            assert_eq!(columns, 3);
        }
        other => panic!("expected validation error, got {:?}", other),
    }
    assert!(!dir.path().join("out").exists());
}

#[test]
fn config_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input = setup(dir.path());
    let config_path = dir.path().join("sheetfmt.yaml");
    fs::write(&config_path, "file_split:\n  row: 1\n").unwrap();

    let config = Config::load(&config_path).unwrap();
    let report = convert_file(&input, &config, &options(dir.path())).unwrap();

    let names: Vec<_> = report
        .files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec!["products.csv", "products_1.csv", "products_2.csv", "products_3.csv"]
    );
    for file in &report.files {
        let content = fs::read_to_string(file).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(content.starts_with("ID,Name,Qty\n"));
    }
}
