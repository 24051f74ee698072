//! Step validation against realistic partial forms.

use std::collections::BTreeSet;

use proptest::prelude::*;
use serde_json::json;
use soc_model::{ContactInfo, FormData, SectionValue, StepId};
use soc_validate::{FieldValue, GENERAL_ERROR_KEY, validate, validate_field, validate_raw};

fn contact(full_name: &str, email: &str, company: &str) -> FormData {
    let mut form = FormData::new();
    form.apply(SectionValue::ContactInfo(Some(ContactInfo {
        full_name: Some(full_name.to_string()),
        email: Some(email.to_string()),
        company_name: Some(company.to_string()),
        ..Default::default()
    })));
    form
}

#[test]
fn test_other_industry_requires_name() {
    let mut form = FormData::new();
    form.apply(SectionValue::IndustryFocus(Some("Other".into())));

    let report = validate(StepId::IndustryFocus, &form);
    assert!(!report.is_valid());
    assert_eq!(report.error("otherIndustry"), Some("Industry name is required"));
    assert_eq!(report.error("industryFocus"), None);

    form.apply(SectionValue::OtherIndustry(Some("Maritime".into())));
    assert!(validate(StepId::IndustryFocus, &form).is_valid());
}

#[test]
fn test_named_industry_ignores_other_field() {
    let mut form = FormData::new();
    form.apply(SectionValue::IndustryFocus(Some("Automotive".into())));
    assert!(validate(StepId::IndustryFocus, &form).is_valid());
}

#[test]
fn test_switching_away_from_other_ignores_leftover_name() {
    let mut form = FormData::new();
    form.apply(SectionValue::IndustryFocus(Some("Other".into())));
    form.apply(SectionValue::OtherIndustry(Some("X".into())));
    assert!(!validate(StepId::IndustryFocus, &form).is_valid());

    form.apply(SectionValue::IndustryFocus(Some("Automotive".into())));
    let report = validate(StepId::IndustryFocus, &form);
    assert!(report.is_valid(), "errors: {:?}", report.errors);
    assert_eq!(report.error("otherIndustry"), None);
}

#[test]
fn test_contact_bad_email_reports_under_email_key() {
    let form = contact("Al", "not-an-email", "Acme");
    let report = validate(StepId::ContactInformation, &form);

    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.error("email"), Some("Please enter a valid email address"));
    assert_eq!(report.error("fullName"), None);
}

#[test]
fn test_contact_full_name_too_short() {
    let form = contact("A", "a@b.co", "Acme");
    let report = validate(StepId::ContactInformation, &form);
    assert_eq!(
        report.error("fullName"),
        Some("Full name must be at least 2 characters")
    );
}

#[test]
fn test_missing_contact_record_reports_each_required_field() {
    let report = validate(StepId::ContactInformation, &FormData::new());
    assert_eq!(
        report.errors.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["companyName", "email", "fullName"]
    );
}

#[test]
fn test_steps_without_schema_always_valid() {
    for step in [StepId::Welcome, StepId::DataProcessing, StepId::Review] {
        let report = validate(step, &FormData::new());
        assert!(report.is_valid(), "{step} should validate");
        assert!(!report.has_warnings());
    }
}

#[test]
fn test_empty_selection_blocks_multi_select() {
    let mut form = FormData::new();
    form.apply(SectionValue::list(soc_model::Section::KeyFeatures, Vec::<String>::new()).unwrap());
    let report = validate(StepId::KeyFeatures, &form);
    assert_eq!(
        report.error("keyFeatures"),
        Some("Please select at least one option for Key features")
    );
}

#[test]
fn test_validate_field_matches_step_rule() {
    assert_eq!(
        validate_field(
            StepId::ContactInformation,
            "email",
            FieldValue::Text(Some("a@b"))
        ),
        Some("Please enter a valid email address".to_string())
    );
    assert_eq!(
        validate_field(
            StepId::ContactInformation,
            "email",
            FieldValue::Text(Some("a@b.co"))
        ),
        None
    );
    // Conditional fields only check their own constraint
    assert_eq!(
        validate_field(StepId::IndustryFocus, "otherIndustry", FieldValue::Text(None)),
        None
    );
    assert!(
        validate_field(
            StepId::IndustryFocus,
            "otherIndustry",
            FieldValue::Text(Some("X"))
        )
        .is_some()
    );
}

#[test]
fn test_validate_raw_unknown_step_is_valid() {
    let report = validate_raw("bogus", &json!({ "title": 42 }));
    assert!(report.is_valid());
    assert_eq!(report.step, None);
}

#[test]
fn test_validate_raw_unreadable_input_is_general_error() {
    let report = validate_raw("project-overview", &json!({ "title": 42 }));
    assert_eq!(report.errors.len(), 1);
    assert!(report.error(GENERAL_ERROR_KEY).is_some());
}

#[test]
fn test_validate_raw_reads_camel_case() {
    let report = validate_raw(
        "cloud-integration",
        &json!({ "cloudPlatforms": ["AWS"], "cloudStrategy": "Hybrid" }),
    );
    assert!(report.is_valid(), "{:?}", report.errors);
}

proptest! {
    #[test]
    fn prop_warnings_never_block(items in prop::collection::btree_set("[a-z]{1,8}", 1..12)) {
        let mut form = FormData::new();
        form.core_platforms = Some(items.clone());
        let report = validate(StepId::CorePlatforms, &form);

        prop_assert!(report.is_valid());
        prop_assert_eq!(report.has_warnings(), items.len() > 3);
    }

    #[test]
    fn prop_title_length_decides_validity(title in "[a-zA-Z ]{0,12}") {
        let mut form = FormData::new();
        form.title = Some(title.clone());
        form.description = Some("A gateway for industrial sensors".to_string());
        let report = validate(StepId::ProjectOverview, &form);
        prop_assert_eq!(report.is_valid(), title.trim().chars().count() >= 3);
    }
}

#[test]
fn test_selection_sets_are_deduplicated_before_counting() {
    let items: BTreeSet<String> = ["A", "A", "B"].iter().map(|s| (*s).to_string()).collect();
    let mut form = FormData::new();
    form.core_platforms = Some(items);
    let report = validate(StepId::CorePlatforms, &form);
    assert!(report.is_valid());
    assert!(!report.has_warnings());
}
