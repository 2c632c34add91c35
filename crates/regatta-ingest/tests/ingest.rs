//! Integration tests for export and mapping loading.

use std::fs;
use std::path::PathBuf;

use regatta_common::column_strings;
use regatta_ingest::{IngestError, load_field_mapping, read_report_csv};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn reads_export_as_nullable_strings() {
    let dir = TempDir::new().expect("temp dir");
    let path = write(
        &dir,
        "teams.csv",
        "\u{feff}Team Id,Boat type,Club,Cox (if required)\n\
         teams/1,4x+,Tyne ARC,Y\n\
         ,,,\n\
         teams/2,1x, Durham ARC ,\n",
    );
    let df = read_report_csv(&path).expect("read csv");
    assert_eq!(df.height(), 2);
    assert_eq!(df.width(), 4);
    let clubs = column_strings(&df, "Club").unwrap();
    assert_eq!(
        clubs,
        vec![Some("Tyne ARC".to_string()), Some("Durham ARC".to_string())]
    );
    let cox = column_strings(&df, "Cox (if required)").unwrap();
    assert_eq!(cox, vec![Some("Y".to_string()), None]);
}

#[test]
fn empty_file_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = write(&dir, "empty.csv", "\n\n");
    let err = read_report_csv(&path).unwrap_err();
    assert!(matches!(err, IngestError::EmptyCsv { .. }));
}

#[test]
fn loads_and_validates_mapping() {
    let dir = TempDir::new().expect("temp dir");
    let path = write(
        &dir,
        "mapping.toml",
        r#"
[teams]
required = ["crew id"]
columns = [{ index = 0, name = "crew id" }, { index = 2, name = "club" }]

[team_members]
columns = [{ index = 1, name = "name" }]
"#,
    );
    let mapping = load_field_mapping(&path).expect("load mapping");
    assert_eq!(mapping.teams.columns[1].index, 2);

    let bad = write(
        &dir,
        "bad.toml",
        r#"
[teams]
required = ["seats"]
columns = [{ index = 0, name = "crew id" }]

[team_members]
columns = []
"#,
    );
    let err = load_field_mapping(&bad).unwrap_err();
    assert!(matches!(err, IngestError::InvalidMapping { .. }));
}
