//! End-to-end tests for the template migration utilities.
//!
//! These tests build template trees in temporary directories and verify
//! the on-disk results of the import and update pipelines.

use std::fs;
use std::path::Path;

use tempfile::tempdir;

use sdrf_migrate::batch::run_update;
use sdrf_migrate::discovery::find_template_tsv;
use sdrf_migrate::migrate::rewrite_file;
use sdrf_migrate::template::import_template;

fn write_template(root: &Path, name: &str, version: &str, content: &str) {
    let version_dir = root.join(name).join(version);
    fs::create_dir_all(&version_dir).unwrap();
    fs::write(version_dir.join(format!("{}.sdrf.tsv", name)), content).unwrap();
}

#[test]
fn test_update_converts_legacy_tree() {
    let root = tempdir().unwrap();

    write_template(
        root.path(),
        "plants",
        "1.0.0",
        "#version=1.0.0\n#template=plants\nsource name\tcharacteristics[organism]\nsample1\tArabidopsis\n\n",
    );
    write_template(
        root.path(),
        "cell-lines",
        "1.1.0",
        "#template=human\n#template=cell-lines\nsource name\ns1\n",
    );

    let templates = vec![
        "plants".to_string(),
        "cell-lines".to_string(),
        "olink".to_string(),
    ];
    let report = run_update(&templates, |name| find_template_tsv(root.path(), name));

    assert_eq!(report.updated_count(), 2);
    assert_eq!(report.skipped_count(), 1);
    assert!(!report.has_failures());

    let plants = fs::read_to_string(
        root.path().join("plants").join("1.0.0").join("plants.sdrf.tsv"),
    )
    .unwrap();
    assert_eq!(
        plants,
        "source name\tcharacteristics[organism]\tcomment[sdrf version]\tcomment[sdrf template]\tcomment[sdrf annotation tool]\nsample1\tArabidopsis\n"
    );

    // Two #template= lines produce two template columns.
    let cell_lines = fs::read_to_string(
        root.path()
            .join("cell-lines")
            .join("1.1.0")
            .join("cell-lines.sdrf.tsv"),
    )
    .unwrap();
    let header = cell_lines.lines().next().unwrap();
    assert_eq!(
        header.matches("comment[sdrf template]").count(),
        2,
        "header was: {}",
        header
    );
}

#[test]
fn test_update_is_stable_on_second_run() {
    let root = tempdir().unwrap();
    write_template(
        root.path(),
        "human",
        "1.0.0",
        "#version=1.1.0\n#template=human\nsource name\nsample1\n",
    );

    let templates = vec!["human".to_string()];
    let first = run_update(&templates, |name| find_template_tsv(root.path(), name));
    assert_eq!(first.updated_count(), 1);

    let converted = root.path().join("human").join("1.0.0").join("human.sdrf.tsv");
    let after_first = fs::read_to_string(&converted).unwrap();

    let second = run_update(&templates, |name| find_template_tsv(root.path(), name));
    assert_eq!(second.updated_count(), 0);
    assert!(!second.has_failures());
    assert_eq!(fs::read_to_string(&converted).unwrap(), after_first);
}

#[test]
fn test_update_leaves_malformed_file_untouched() {
    let root = tempdir().unwrap();
    let content = "#version=1.0.0\n#template=base\n\n";
    write_template(root.path(), "base", "1.0.0", content);

    let templates = vec!["base".to_string()];
    let report = run_update(&templates, |name| find_template_tsv(root.path(), name));

    assert_eq!(report.failure_count(), 1);
    assert!(report.has_failures());

    let path = root.path().join("base").join("1.0.0").join("base.sdrf.tsv");
    assert_eq!(fs::read_to_string(path).unwrap(), content);
}

#[test]
fn test_rewrite_file_reports_change() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("human.sdrf.tsv");
    fs::write(&path, "#template=human\nsource name\nsample1\n").unwrap();

    assert!(rewrite_file(&path).unwrap());
    assert!(!rewrite_file(&path).unwrap());
}

#[test]
fn test_import_then_update_pipeline() {
    let source = tempdir().unwrap();
    let target = tempdir().unwrap();

    let source_dir = source.path().join("plants");
    fs::create_dir_all(&source_dir).unwrap();
    fs::write(source_dir.join("plants.yaml"), "version: 1.2.0\nextends: base\n").unwrap();
    fs::write(
        source_dir.join("plants-template.sdrf.tsv"),
        "#version=1.0.0\n#template=plants\nsource name\nsample1\n",
    )
    .unwrap();

    let imported = import_template(source.path(), target.path(), "plants")
        .unwrap()
        .unwrap();
    assert_eq!(imported.version, "1.2.0");

    let templates = vec!["plants".to_string()];
    let report = run_update(&templates, |name| find_template_tsv(target.path(), name));
    assert_eq!(report.updated_count(), 1);

    let converted = fs::read_to_string(
        target.path().join("plants").join("1.2.0").join("plants.sdrf.tsv"),
    )
    .unwrap();
    assert!(converted.starts_with("source name\t"));
    assert!(!converted.contains('#'));
}
