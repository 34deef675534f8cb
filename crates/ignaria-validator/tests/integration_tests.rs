//! Integration tests for ignaria-validator
//!
//! Each test lays out a small corpus in a temporary directory and runs the
//! validators against it through the flat-file store.

use ignaria_store::YamlStore;
use ignaria_validator::{
    CorpusValidator, TemporalValidator, ValidationConfig, ValidationReport, ValidationStatus,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const COMPLETE_SECTION: &str = r#"  - author: Ignatius
    title: Epistle of Ignatius to the Ephesians
    start_marker: The Epistle of Ignatius to the Ephesians
    composition_year: 107
    author_region: Eastern
    author_location: Antioch
"#;

fn anthology_record(id: &str, sections: &str) -> String {
    format!(
        "text_info:\n  id: {}\n  title: Volume {}\n  authors:\n  - Ignatius\n  is_anthology: true\n  sections:\n{}publication:\n  original_language: Greek\ntechnical:\n  encoding: UTF-8\n",
        id.to_lowercase(),
        id,
        sections
    )
}

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

#[test]
fn test_one_incomplete_section_fails_its_volume() {
    let dir = TempDir::new().unwrap();
    let sources = dir.path().join("sources");

    for id in ["ANF-01", "ANF-02", "ANF-03", "ANF-04"] {
        write(dir.path(), &format!("sources/{}.meta.yaml", id), &anthology_record(id, COMPLETE_SECTION));
    }
    let undated = r#"  - author: Ignatius
    title: Epistle of Ignatius to Polycarp
    start_marker: The Epistle of Ignatius to Polycarp
    author_region: Eastern
    author_location: Smyrna
"#;
    write(
        dir.path(),
        "sources/ANF-05.meta.yaml",
        &anthology_record("ANF-05", &format!("{}{}", COMPLETE_SECTION, undated)),
    );

    let report = TemporalValidator::default_config()
        .validate(&YamlStore::new(&sources))
        .unwrap();

    assert_eq!(report.volumes.len(), 5);
    assert_eq!(report.status(), ValidationStatus::Fail);

    let incomplete: Vec<_> = report.incomplete_volumes().collect();
    assert_eq!(incomplete.len(), 1);
    assert_eq!(incomplete[0].volume_id, "ANF-05");
    assert_eq!(incomplete[0].total_sections, 2);
    assert_eq!(incomplete[0].sections_missing_temporal, 1);
    assert!(!incomplete[0].missing_sections[0].has_composition_year);
    assert!(incomplete[0].missing_sections[0].has_author_region);

    assert_eq!(report.total_sections(), 6);
    assert_eq!(report.complete_sections(), 5);
}

#[test]
fn test_missing_region_reported_with_flag() {
    let dir = TempDir::new().unwrap();
    let no_region = r#"  - author: Ignatius
    title: Epistle of Ignatius to the Romans
    start_marker: The Epistle of Ignatius to the Romans
    composition_year: 107
    author_location: Smyrna
"#;
    write(dir.path(), "sources/ANF-01.meta.yaml", &anthology_record("ANF-01", no_region));

    let report = TemporalValidator::default_config()
        .validate(&YamlStore::new(dir.path().join("sources")))
        .unwrap();

    let missing = &report.volumes[0].missing_sections[0];
    assert_eq!(missing.title, "Epistle of Ignatius to the Romans");
    assert!(!missing.has_author_region);
    assert!(missing.has_composition_year);
    assert!(missing.has_author_location);
}

#[test]
fn test_non_anthologies_skipped_and_malformed_reported() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "sources/ANF-01.meta.yaml", &anthology_record("ANF-01", COMPLETE_SECTION));
    write(dir.path(), "sources/NPNF1-03.meta.yaml", "text_info:\n  id: npnf1-03\n  title: On the Trinity\n  author: Augustine\n");
    write(dir.path(), "sources/BROKEN.meta.yaml", "text_info: [unclosed\n");

    let report = TemporalValidator::default_config()
        .validate(&YamlStore::new(dir.path().join("sources")))
        .unwrap();

    assert_eq!(report.volumes.len(), 1);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].starts_with("BROKEN"));
    assert_eq!(report.status(), ValidationStatus::Pass);
    assert!(!report.is_success());
    assert_eq!(report.completion_percent(), 100.0);
}

#[test]
fn test_loosely_typed_non_anthologies_are_skipped() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "sources/ANF-01.meta.yaml", &anthology_record("ANF-01", COMPLETE_SECTION));
    write(dir.path(), "sources/LXX.meta.yaml", "publication:\n  original_language: Greek\n");
    write(
        dir.path(),
        "sources/NPNF2-01.meta.yaml",
        "text_info:\n  id: npnf2-01\n  title: Church History\n  authors: Eusebius\n",
    );
    write(dir.path(), "sources/SBLGNT.meta.yaml", "text_info:\n  id: 42\n  title: Greek New Testament\n");

    let report = TemporalValidator::default_config()
        .validate(&YamlStore::new(dir.path().join("sources")))
        .unwrap();

    assert!(report.errors.is_empty(), "errors: {:?}", report.errors);
    assert_eq!(report.skipped, 3);
    assert_eq!(report.volumes.len(), 1);
    assert!(report.is_success());
}

#[test]
fn test_section_without_author_is_still_counted() {
    let dir = TempDir::new().unwrap();
    let anonymous = r#"  - title: Epistle to Diognetus
    start_marker: The Epistle to Diognetus
    composition_year: 150
"#;
    write(
        dir.path(),
        "sources/ANF-01.meta.yaml",
        &anthology_record("ANF-01", &format!("{}{}", COMPLETE_SECTION, anonymous)),
    );

    let report = TemporalValidator::default_config()
        .validate(&YamlStore::new(dir.path().join("sources")))
        .unwrap();

    assert!(report.errors.is_empty(), "errors: {:?}", report.errors);
    assert_eq!(report.volumes.len(), 1);
    let volume = &report.volumes[0];
    assert_eq!(volume.total_sections, 2);
    assert_eq!(volume.sections_missing_temporal, 1);
    assert_eq!(volume.missing_sections[0].author, "Unknown");
    assert!(!volume.missing_sections[0].has_author_region);
}

#[test]
fn test_temporal_report_serializes() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "sources/ANF-01.meta.yaml", &anthology_record("ANF-01", COMPLETE_SECTION));

    let report = TemporalValidator::default_config()
        .validate(&YamlStore::new(dir.path().join("sources")))
        .unwrap();
    let yaml = serde_yaml::to_string(&report).unwrap();

    assert!(yaml.contains("volume_id: ANF-01"));
    assert!(yaml.contains("sections_with_temporal: 1"));
}

fn corpus(root: &Path) {
    write(
        root,
        "manifest.yaml",
        r#"corpus:
  name: Ignaria
  version: 0.1.0
texts:
  - id: anf-01
    title: The Apostolic Fathers
    author: Various
    file: sources/ANF-01.txt
    metadata: sources/ANF-01.meta.yaml
"#,
    );
    write(root, "sources/ANF-01.txt", "The Epistle of Ignatius to the Ephesians\nIgnatius, who is also called Theophorus\n");
    write(root, "sources/ANF-01.meta.yaml", &anthology_record("ANF-01", COMPLETE_SECTION));
}

#[test]
fn test_clean_corpus_passes() {
    let dir = TempDir::new().unwrap();
    corpus(dir.path());

    let report = CorpusValidator::new(dir.path(), ValidationConfig::default()).validate();

    assert!(report.errors.is_empty(), "errors: {:?}", report.errors);
    assert!(report.warnings.is_empty(), "warnings: {:?}", report.warnings);
    assert_eq!(report.status(), ValidationStatus::Pass);
}

#[test]
fn test_missing_manifest_fails() {
    let dir = TempDir::new().unwrap();
    let report = CorpusValidator::new(dir.path(), ValidationConfig::default()).validate();

    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].starts_with("Manifest not found"));
    assert_eq!(report.status(), ValidationStatus::Fail);
}

#[test]
fn test_manifest_entry_problems() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "manifest.yaml",
        "corpus:\n  name: Ignaria\ntexts:\n  - id: anf-02\n    title: Justin Martyr\n    file: sources/ANF-02.txt\n",
    );

    let report = CorpusValidator::new(dir.path(), ValidationConfig::default()).validate();

    assert_eq!(report.errors.len(), 2);
    assert_eq!(report.errors[0], "Text entry 0: missing required field 'author'");
    assert!(report.errors[1].starts_with("Text entry 0: file not found"));
}

#[test]
fn test_manifest_without_texts_fails() {
    for texts in ["texts: []\n", "texts:\n"] {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "manifest.yaml", &format!("corpus:\n  name: Ignaria\n{}", texts));

        let report = CorpusValidator::new(dir.path(), ValidationConfig::default()).validate();

        assert_eq!(report.errors, vec!["Manifest lists no texts"], "manifest {:?}", texts);
        assert_eq!(report.status(), ValidationStatus::Fail);
    }
}

#[test]
fn test_text_file_problems() {
    let dir = TempDir::new().unwrap();
    corpus(dir.path());
    write(dir.path(), "sources/ANF-01.txt", "line one\r\nline two\nline\0three\n");

    let report = CorpusValidator::new(dir.path(), ValidationConfig::default()).validate();

    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].starts_with("Null bytes found"));
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].starts_with("Mixed line endings"));
}

#[test]
fn test_metadata_and_orphan_warnings() {
    let dir = TempDir::new().unwrap();
    corpus(dir.path());
    write(dir.path(), "sources/ANF-01.meta.yaml", "text_info:\n  id: anf-01\n");
    write(dir.path(), "sources/LXX.txt", "Ἐν ἀρχῇ ἐποίησεν ὁ θεὸς\n");

    let report = CorpusValidator::new(dir.path(), ValidationConfig::default()).validate();

    assert!(report.errors.is_empty());
    let expected = [
        "Missing metadata section 'publication'",
        "Missing metadata section 'technical'",
        "Missing text_info field 'title'",
        "Missing text_info field 'author' or 'authors'",
        "Orphaned text file",
    ];
    assert_eq!(report.warnings.len(), expected.len(), "warnings: {:?}", report.warnings);
    for (warning, prefix) in report.warnings.iter().zip(expected) {
        assert!(warning.starts_with(prefix), "'{}' should start with '{}'", warning, prefix);
    }
    assert!(report.warnings[4].ends_with("LXX.txt"));
}

#[test]
fn test_permissive_skips_orphans() {
    let dir = TempDir::new().unwrap();
    corpus(dir.path());
    write(dir.path(), "sources/LXX.txt", "orphan\n");

    let report = CorpusValidator::new(dir.path(), ValidationConfig::permissive()).validate();
    assert!(report.warnings.is_empty());
}

#[test]
fn test_report_written_as_yaml() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("report.yaml");

    let report = CorpusValidator::new(dir.path(), ValidationConfig::default()).validate();
    report.write_to(&out).unwrap();

    let raw = fs::read_to_string(&out).unwrap();
    assert!(raw.contains("validation_summary:"));
    assert!(raw.contains("status: FAIL"));
    assert_eq!(ValidationReport::from_yaml(&raw).unwrap(), report);
}
