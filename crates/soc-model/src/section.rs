//! Form sections and the values that replace them.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::form::ContactInfo;

/// Industry value that makes `otherIndustry` mandatory.
pub const OTHER_INDUSTRY: &str = "Other";

// =============================================================================
// SECTION
// =============================================================================

/// One top-level field of [`FormData`](crate::FormData).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    Title,
    Description,
    IndustryFocus,
    OtherIndustry,
    CorePlatforms,
    OperatingSystem,
    KeyFeatures,
    HardwareRequirements,
    MiddlewareFrameworks,
    DriverNeeds,
    CloudPlatforms,
    IotIntegration,
    DataProcessing,
    CloudStrategy,
    ContactInfo,
}

/// Shape of a section's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// Free or single-choice text.
    Text,
    /// Multi-select set of strings.
    List,
    /// Nested contact record.
    Contact,
}

impl Section {
    /// All sections in form order.
    pub const fn all() -> &'static [Section] {
        &[
            Self::Title,
            Self::Description,
            Self::IndustryFocus,
            Self::OtherIndustry,
            Self::CorePlatforms,
            Self::OperatingSystem,
            Self::KeyFeatures,
            Self::HardwareRequirements,
            Self::MiddlewareFrameworks,
            Self::DriverNeeds,
            Self::CloudPlatforms,
            Self::IotIntegration,
            Self::DataProcessing,
            Self::CloudStrategy,
            Self::ContactInfo,
        ]
    }

    /// Field key as it appears in snapshots and error maps.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::IndustryFocus => "industryFocus",
            Self::OtherIndustry => "otherIndustry",
            Self::CorePlatforms => "corePlatforms",
            Self::OperatingSystem => "operatingSystem",
            Self::KeyFeatures => "keyFeatures",
            Self::HardwareRequirements => "hardwareRequirements",
            Self::MiddlewareFrameworks => "middlewareFrameworks",
            Self::DriverNeeds => "driverNeeds",
            Self::CloudPlatforms => "cloudPlatforms",
            Self::IotIntegration => "iotIntegration",
            Self::DataProcessing => "dataProcessing",
            Self::CloudStrategy => "cloudStrategy",
            Self::ContactInfo => "contactInfo",
        }
    }

    /// Value shape for this section.
    pub fn kind(&self) -> SectionKind {
        match self {
            Self::CorePlatforms
            | Self::KeyFeatures
            | Self::HardwareRequirements
            | Self::MiddlewareFrameworks
            | Self::DriverNeeds
            | Self::CloudPlatforms
            | Self::DataProcessing => SectionKind::List,
            Self::ContactInfo => SectionKind::Contact,
            _ => SectionKind::Text,
        }
    }

    /// Parse a field key.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::all().iter().copied().find(|section| section.as_str() == s)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ModelError::UnknownSection(s.to_string()))
    }
}

// =============================================================================
// CONTACT FIELD
// =============================================================================

/// One field of the nested contact record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    FullName,
    Email,
    CompanyName,
    PhoneNumber,
    ProjectDescription,
}

impl ContactField {
    /// All contact fields in form order.
    pub const fn all() -> &'static [ContactField] {
        &[
            Self::FullName,
            Self::Email,
            Self::CompanyName,
            Self::PhoneNumber,
            Self::ProjectDescription,
        ]
    }

    /// Field key as it appears in snapshots and error maps.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::CompanyName => "companyName",
            Self::PhoneNumber => "phoneNumber",
            Self::ProjectDescription => "projectDescription",
        }
    }

    /// Parse a field key.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::all().iter().copied().find(|field| field.as_str() == s)
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// SECTION VALUE
// =============================================================================

/// Replacement value for exactly one section.
///
/// `None` clears the section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionValue {
    Title(Option<String>),
    Description(Option<String>),
    IndustryFocus(Option<String>),
    OtherIndustry(Option<String>),
    CorePlatforms(Option<BTreeSet<String>>),
    OperatingSystem(Option<String>),
    KeyFeatures(Option<BTreeSet<String>>),
    HardwareRequirements(Option<BTreeSet<String>>),
    MiddlewareFrameworks(Option<BTreeSet<String>>),
    DriverNeeds(Option<BTreeSet<String>>),
    CloudPlatforms(Option<BTreeSet<String>>),
    IotIntegration(Option<String>),
    DataProcessing(Option<BTreeSet<String>>),
    CloudStrategy(Option<String>),
    ContactInfo(Option<ContactInfo>),
}

impl SectionValue {
    /// Section this value replaces.
    pub fn section(&self) -> Section {
        match self {
            Self::Title(_) => Section::Title,
            Self::Description(_) => Section::Description,
            Self::IndustryFocus(_) => Section::IndustryFocus,
            Self::OtherIndustry(_) => Section::OtherIndustry,
            Self::CorePlatforms(_) => Section::CorePlatforms,
            Self::OperatingSystem(_) => Section::OperatingSystem,
            Self::KeyFeatures(_) => Section::KeyFeatures,
            Self::HardwareRequirements(_) => Section::HardwareRequirements,
            Self::MiddlewareFrameworks(_) => Section::MiddlewareFrameworks,
            Self::DriverNeeds(_) => Section::DriverNeeds,
            Self::CloudPlatforms(_) => Section::CloudPlatforms,
            Self::IotIntegration(_) => Section::IotIntegration,
            Self::DataProcessing(_) => Section::DataProcessing,
            Self::CloudStrategy(_) => Section::CloudStrategy,
            Self::ContactInfo(_) => Section::ContactInfo,
        }
    }

    /// Build a text value for a text section.
    ///
    /// Empty input clears the section.
    pub fn text(section: Section, value: impl Into<String>) -> Result<Self, ModelError> {
        let value: String = value.into();
        let value = Some(value).filter(|v| !v.trim().is_empty());
        match section {
            Section::Title => Ok(Self::Title(value)),
            Section::Description => Ok(Self::Description(value)),
            Section::IndustryFocus => Ok(Self::IndustryFocus(value)),
            Section::OtherIndustry => Ok(Self::OtherIndustry(value)),
            Section::OperatingSystem => Ok(Self::OperatingSystem(value)),
            Section::IotIntegration => Ok(Self::IotIntegration(value)),
            Section::CloudStrategy => Ok(Self::CloudStrategy(value)),
            other => Err(ModelError::WrongKind {
                section: other.as_str(),
                expected: "text",
            }),
        }
    }

    /// Build a list value for a multi-select section.
    ///
    /// Blank entries are dropped; an empty list clears the section.
    pub fn list<I, T>(section: Section, items: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let set: BTreeSet<String> = items
            .into_iter()
            .map(|item| {
                let item: String = item.into();
                item.trim().to_string()
            })
            .filter(|item| !item.is_empty())
            .collect();
        let value = Some(set).filter(|s| !s.is_empty());
        match section {
            Section::CorePlatforms => Ok(Self::CorePlatforms(value)),
            Section::KeyFeatures => Ok(Self::KeyFeatures(value)),
            Section::HardwareRequirements => Ok(Self::HardwareRequirements(value)),
            Section::MiddlewareFrameworks => Ok(Self::MiddlewareFrameworks(value)),
            Section::DriverNeeds => Ok(Self::DriverNeeds(value)),
            Section::CloudPlatforms => Ok(Self::CloudPlatforms(value)),
            Section::DataProcessing => Ok(Self::DataProcessing(value)),
            other => Err(ModelError::WrongKind {
                section: other.as_str(),
                expected: "list",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_every_section() {
        for section in Section::all() {
            assert_eq!(Section::parse(section.as_str()), Some(*section));
        }
        assert_eq!(Section::parse("nope"), None);
        assert!("contactInfo".parse::<Section>().is_ok());
    }

    #[test]
    fn test_text_rejects_list_section() {
        let err = SectionValue::text(Section::CorePlatforms, "ARM").unwrap_err();
        assert!(matches!(err, ModelError::WrongKind { expected: "text", .. }));
    }

    #[test]
    fn test_blank_text_clears() {
        let value = SectionValue::text(Section::Title, "   ").unwrap();
        assert_eq!(value, SectionValue::Title(None));
    }

    #[test]
    fn test_list_trims_and_dedupes() {
        let value =
            SectionValue::list(Section::KeyFeatures, [" Secure Boot", "OTA", "", "OTA"]).unwrap();
        let SectionValue::KeyFeatures(Some(set)) = value else {
            panic!("expected key features");
        };
        assert_eq!(set.len(), 2);
        assert!(set.contains("Secure Boot"));
    }

    #[test]
    fn test_value_reports_its_section() {
        let value = SectionValue::list(Section::DriverNeeds, ["USB"]).unwrap();
        assert_eq!(value.section(), Section::DriverNeeds);
        assert_eq!(value.section().kind(), SectionKind::List);
    }
}
