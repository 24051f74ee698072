//! Command behavior against an in-memory store.

use soc_cli::commands::{
    run_complete, run_export, run_import, run_reset, run_set, run_status, run_steps, run_submit,
    run_validate,
};
use soc_model::StepId;
use soc_persistence::{AutoSaveConfig, MemoryStore};
use soc_wizard::WizardStore;
use tempfile::tempdir;

fn store() -> WizardStore<MemoryStore> {
    WizardStore::open(MemoryStore::new(), AutoSaveConfig::default())
}

fn fill_everything(store: &mut WizardStore<MemoryStore>) {
    for (field, value) in [
        ("title", "Edge gateway"),
        ("description", "Gateway for factory floor sensors"),
        ("industryFocus", "Industrial"),
        ("corePlatforms", "ARM Cortex-A"),
        ("operatingSystem", "Linux"),
        ("keyFeatures", "OTA,Secure boot"),
        ("hardwareRequirements", "Ethernet"),
        ("middlewareFrameworks", "MQTT"),
        ("cloudPlatforms", "AWS"),
        ("cloudStrategy", "Hybrid"),
        ("contact.fullName", "Ada Lovelace"),
        ("contact.email", "ada@example.com"),
        ("contact.companyName", "Analytical Engines"),
    ] {
        run_set(store, field, value).unwrap();
    }
}

#[test]
fn test_set_list_splits_on_commas() {
    let mut store = store();
    run_set(&mut store, "keyFeatures", "OTA, Secure boot,,OTA").unwrap();
    let features = store.form_data().key_features.as_ref().unwrap();
    assert_eq!(
        features.iter().map(String::as_str).collect::<Vec<_>>(),
        vec!["OTA", "Secure boot"]
    );
}

#[test]
fn test_set_reports_live_field_error() {
    let mut store = store();
    let output = run_set(&mut store, "contact.email", "not-an-email").unwrap();
    assert_eq!(output.exit_code, 0);
    assert!(output.text.contains("Please enter a valid email address"));

    let output = run_set(&mut store, "title", "Edge gateway").unwrap();
    assert!(!output.text.contains("warning"));
}

#[test]
fn test_set_rejects_unknown_fields() {
    let mut store = store();
    assert!(run_set(&mut store, "colour", "blue").is_err());
    assert!(run_set(&mut store, "contact.fax", "123").is_err());
    assert!(run_set(&mut store, "contactInfo", "x").is_err());
}

#[test]
fn test_complete_requires_valid_step_unless_forced() {
    let mut store = store();
    let output = run_complete(&mut store, "project-overview", false).unwrap();
    assert_eq!(output.exit_code, 1);
    assert!(!store.completed_steps().contains(StepId::ProjectOverview));

    let output = run_complete(&mut store, "project-overview", true).unwrap();
    assert_eq!(output.exit_code, 0);
    assert!(store.completed_steps().contains(StepId::ProjectOverview));
    assert!(output.text.contains("10%"));
}

#[test]
fn test_complete_unknown_step_is_error() {
    let mut store = store();
    assert!(run_complete(&mut store, "warp-drive", false).is_err());
}

#[test]
fn test_validate_reports_errors() {
    let mut store = store();
    run_set(&mut store, "industryFocus", "Other").unwrap();
    let output = run_validate(&store, "industry-focus").unwrap();
    assert_eq!(output.exit_code, 1);
    assert!(output.text.contains("otherIndustry"));

    let output = run_validate(&store, "welcome").unwrap();
    assert_eq!(output.exit_code, 0);
}

#[test]
fn test_export_then_import_into_fresh_store() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("snapshot.json");

    let mut source = store();
    fill_everything(&mut source);
    run_complete(&mut source, "project-overview", false).unwrap();
    run_export(&source, &path).unwrap();

    let mut target = store();
    let output = run_import(&mut target, &path).unwrap();
    assert_eq!(output.exit_code, 0);
    assert_eq!(target.form_data(), source.form_data());
    assert!(target.completed_steps().contains(StepId::ProjectOverview));
}

#[test]
fn test_import_invalid_file_keeps_state() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, r#"{"not":"a snapshot"}"#).unwrap();

    let mut store = store();
    run_set(&mut store, "title", "Keep me").unwrap();
    let err = run_import(&mut store, &path).unwrap_err();
    assert!(format!("{err:#}").contains("Invalid configuration file format"));
    assert_eq!(store.form_data().title.as_deref(), Some("Keep me"));
}

#[test]
fn test_submit_requires_valid_steps() {
    let mut store = store();
    let output = run_submit(&store, None).unwrap();
    assert_eq!(output.exit_code, 1);
    assert!(output.text.contains("Project Overview") || output.text.contains("project-overview"));

    fill_everything(&mut store);
    let output = run_submit(&store, None).unwrap();
    assert_eq!(output.exit_code, 0);
    let value: serde_json::Value = serde_json::from_str(&output.text).unwrap();
    assert_eq!(value["status"], "submitted");
    assert_eq!(value["formData"]["title"], "Edge gateway");
}

#[test]
fn test_reset_and_status() {
    let mut store = store();
    fill_everything(&mut store);
    run_complete(&mut store, "project-overview", false).unwrap();
    assert!(run_status(&store).text.contains("Next step: "));

    run_reset(&mut store).unwrap();
    assert!(store.form_data().is_empty());
    let status = run_status(&store).text;
    assert!(status.contains("Progress: 0%"));
    assert!(run_steps(&store).text.contains("contact-information"));
}
