use std::path::Path;
use std::process::{Command, Output};

const DEFAULT_SPLIT: &str = "721_5fold/1";

fn openea_prep(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_openea-prep"))
        .args(args)
        .output()
        .unwrap()
}

fn dataset(root: &Path) {
    let split = root.join(DEFAULT_SPLIT);
    std::fs::create_dir_all(&split).unwrap();
    std::fs::write(root.join("rel_triples_1"), "ent:a1\tent:r\tent:a2\n").unwrap();
    std::fs::write(root.join("rel_triples_2"), "ent:b1\tent:r\tent:b2\n").unwrap();
    std::fs::write(split.join("train_links"), "ent:a1\tent:b1\n").unwrap();
    std::fs::write(split.join("valid_links"), "ent:a2\tent:b2\n").unwrap();
    std::fs::write(split.join("test_links"), "ent:a1\tent:b1\n").unwrap();
}

#[test]
fn convert_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("kg.nt");
    std::fs::write(&src, "<e1> <p> <e2> .\n").unwrap();

    let out = openea_prep(&["convert", src.to_str().unwrap()]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("--output required"));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn separate_without_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("triples");
    std::fs::write(&src, "e1\tp\te2\n").unwrap();

    let out = openea_prep(&[
        "separate",
        src.to_str().unwrap(),
        "--rel-output",
        dir.path().join("rel").to_str().unwrap(),
    ]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr)
        .contains("--rel-output and --attr-output required"));
    assert!(!dir.path().join("rel").exists());
}

#[test]
fn validate_missing_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");

    let out = openea_prep(&["validate", missing.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("does not exist!"));
}

#[test]
fn validate_exit_status() {
    let dir = tempfile::tempdir().unwrap();
    dataset(dir.path());

    let out = openea_prep(&["validate", dir.path().to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stdout).contains("Dataset validation PASSED"));

    std::fs::write(dir.path().join(DEFAULT_SPLIT).join("test_links"), "\n\n").unwrap();
    let out = openea_prep(&["validate", dir.path().to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stdout).contains("Dataset validation FAILED"));
}

#[test]
fn validate_json() {
    let dir = tempfile::tempdir().unwrap();
    dataset(dir.path());

    let out = openea_prep(&["validate", dir.path().to_str().unwrap(), "--json"]);
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["passed"], true);
    assert_eq!(json["statistics"]["total_pairs"], 2);
}

#[test]
fn validate_without_dataset() {
    let out = openea_prep(&["validate"]);
    assert!(!out.status.success());
}
