//! The accumulating wizard form.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::section::{ContactField, Section, SectionValue};

/// Contact details collected on the last working step.
///
/// Every field stays optional while the form is partial; the
/// contact-information step decides which ones are required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_description: Option<String>,
}

impl ContactInfo {
    /// Value of one contact field.
    pub fn get(&self, field: ContactField) -> Option<&str> {
        match field {
            ContactField::FullName => self.full_name.as_deref(),
            ContactField::Email => self.email.as_deref(),
            ContactField::CompanyName => self.company_name.as_deref(),
            ContactField::PhoneNumber => self.phone_number.as_deref(),
            ContactField::ProjectDescription => self.project_description.as_deref(),
        }
    }

    /// Replace one contact field. Blank input clears it.
    pub fn set(&mut self, field: ContactField, value: Option<String>) {
        let value = value.filter(|v| !v.trim().is_empty());
        match field {
            ContactField::FullName => self.full_name = value,
            ContactField::Email => self.email = value,
            ContactField::CompanyName => self.company_name = value,
            ContactField::PhoneNumber => self.phone_number = value,
            ContactField::ProjectDescription => self.project_description = value,
        }
    }
}

/// Borrowed view of one section's current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionRef<'a> {
    Text(Option<&'a str>),
    List(Option<&'a BTreeSet<String>>),
    Contact(Option<&'a ContactInfo>),
}

/// All configuration answers gathered so far.
///
/// One optional field per section; absent sections are omitted when
/// serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry_focus: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub core_platforms: Option<BTreeSet<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_features: Option<BTreeSet<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware_requirements: Option<BTreeSet<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middleware_frameworks: Option<BTreeSet<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_needs: Option<BTreeSet<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_platforms: Option<BTreeSet<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iot_integration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_processing: Option<BTreeSet<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_strategy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<ContactInfo>,
}

impl FormData {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no section has a value.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Replace exactly one section, leaving all others untouched.
    pub fn apply(&mut self, value: SectionValue) {
        match value {
            SectionValue::Title(v) => self.title = v,
            SectionValue::Description(v) => self.description = v,
            SectionValue::IndustryFocus(v) => self.industry_focus = v,
            SectionValue::OtherIndustry(v) => self.other_industry = v,
            SectionValue::CorePlatforms(v) => self.core_platforms = v,
            SectionValue::OperatingSystem(v) => self.operating_system = v,
            SectionValue::KeyFeatures(v) => self.key_features = v,
            SectionValue::HardwareRequirements(v) => self.hardware_requirements = v,
            SectionValue::MiddlewareFrameworks(v) => self.middleware_frameworks = v,
            SectionValue::DriverNeeds(v) => self.driver_needs = v,
            SectionValue::CloudPlatforms(v) => self.cloud_platforms = v,
            SectionValue::IotIntegration(v) => self.iot_integration = v,
            SectionValue::DataProcessing(v) => self.data_processing = v,
            SectionValue::CloudStrategy(v) => self.cloud_strategy = v,
            SectionValue::ContactInfo(v) => self.contact_info = v,
        }
    }

    /// Current value of one section.
    pub fn get(&self, section: Section) -> SectionRef<'_> {
        match section {
            Section::Title => SectionRef::Text(self.title.as_deref()),
            Section::Description => SectionRef::Text(self.description.as_deref()),
            Section::IndustryFocus => SectionRef::Text(self.industry_focus.as_deref()),
            Section::OtherIndustry => SectionRef::Text(self.other_industry.as_deref()),
            Section::CorePlatforms => SectionRef::List(self.core_platforms.as_ref()),
            Section::OperatingSystem => SectionRef::Text(self.operating_system.as_deref()),
            Section::KeyFeatures => SectionRef::List(self.key_features.as_ref()),
            Section::HardwareRequirements => SectionRef::List(self.hardware_requirements.as_ref()),
            Section::MiddlewareFrameworks => SectionRef::List(self.middleware_frameworks.as_ref()),
            Section::DriverNeeds => SectionRef::List(self.driver_needs.as_ref()),
            Section::CloudPlatforms => SectionRef::List(self.cloud_platforms.as_ref()),
            Section::IotIntegration => SectionRef::Text(self.iot_integration.as_deref()),
            Section::DataProcessing => SectionRef::List(self.data_processing.as_ref()),
            Section::CloudStrategy => SectionRef::Text(self.cloud_strategy.as_deref()),
            Section::ContactInfo => SectionRef::Contact(self.contact_info.as_ref()),
        }
    }

    /// Text value of a text section (`None` for other kinds).
    pub fn text(&self, section: Section) -> Option<&str> {
        match self.get(section) {
            SectionRef::Text(value) => value,
            _ => None,
        }
    }

    /// Items of a list section (`None` for other kinds).
    pub fn list(&self, section: Section) -> Option<&BTreeSet<String>> {
        match self.get(section) {
            SectionRef::List(value) => value,
            _ => None,
        }
    }

    /// Sections that currently hold a value.
    pub fn filled_sections(&self) -> Vec<Section> {
        Section::all()
            .iter()
            .copied()
            .filter(|section| match self.get(*section) {
                SectionRef::Text(v) => v.is_some(),
                SectionRef::List(v) => v.is_some(),
                SectionRef::Contact(v) => v.is_some(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_replaces_only_one_section() {
        let mut form = FormData::new();
        form.apply(SectionValue::Title(Some("X".into())));
        form.apply(SectionValue::OperatingSystem(Some("Zephyr".into())));
        form.apply(SectionValue::Title(Some("Y".into())));

        assert_eq!(form.title.as_deref(), Some("Y"));
        assert_eq!(form.operating_system.as_deref(), Some("Zephyr"));
        assert_eq!(form.filled_sections(), vec![Section::Title, Section::OperatingSystem]);
    }

    #[test]
    fn test_serializes_camel_case_and_skips_absent() {
        let mut form = FormData::new();
        form.apply(SectionValue::IndustryFocus(Some("Other".into())));
        form.apply(SectionValue::OtherIndustry(Some("Robotics".into())));

        let json = serde_json::to_value(&form).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object["industryFocus"], "Other");
        assert_eq!(object["otherIndustry"], "Robotics");
    }

    #[test]
    fn test_deserializes_partial_contact() {
        let json = r#"{"contactInfo":{"email":"a@b.co"}}"#;
        let form: FormData = serde_json::from_str(json).unwrap();
        let contact = form.contact_info.unwrap();
        assert_eq!(contact.get(ContactField::Email), Some("a@b.co"));
        assert_eq!(contact.get(ContactField::FullName), None);
    }

    #[test]
    fn test_contact_set_blank_clears() {
        let mut contact = ContactInfo::default();
        contact.set(ContactField::PhoneNumber, Some("555".into()));
        contact.set(ContactField::PhoneNumber, Some(" ".into()));
        assert_eq!(contact.phone_number, None);
    }

    #[test]
    fn test_text_and_list_accessors_by_kind() {
        let mut form = FormData::new();
        form.apply(SectionValue::CorePlatforms(Some(
            ["ARM Cortex-M".to_string()].into_iter().collect(),
        )));
        assert!(form.list(Section::CorePlatforms).is_some());
        assert_eq!(form.text(Section::CorePlatforms), None);
        assert!(FormData::new().is_empty());
    }
}
