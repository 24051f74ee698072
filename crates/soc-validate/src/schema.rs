//! Schema registry: one static rule table per wizard step.
//!
//! Lookup is an exhaustive match over [`StepId`], so adding or removing a
//! step is a compile-time change. Steps without a schema always validate.

use soc_model::{ContactField, OTHER_INDUSTRY, Section, StepId};

/// Location of a validated field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldPath {
    /// Top-level form section.
    Section(Section),
    /// Field of the nested contact record.
    Contact(ContactField),
}

impl FieldPath {
    /// Key used in error and warning maps.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Section(section) => section.as_str(),
            Self::Contact(field) => field.as_str(),
        }
    }
}

/// When a field must be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Always,
    Optional,
    /// Required only while another text section holds `value`.
    WhenEquals { field: Section, value: &'static str },
}

/// Constraint applied to a present value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    None,
    /// Minimum trimmed character count.
    MinLength(usize),
    /// Minimum number of selected items.
    MinItems(usize),
    Email,
}

/// Validation rule for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub path: FieldPath,
    pub label: &'static str,
    pub requirement: Requirement,
    pub constraint: Constraint,
}

/// Non-blocking suggestion attached to a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    /// Warn when a multi-select holds more than `max` items.
    MaxItems {
        section: Section,
        label: &'static str,
        max: usize,
    },
    /// Warn when an optional contact field is left empty.
    Recommended {
        field: ContactField,
        label: &'static str,
    },
}

/// Validation schema for one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    pub step: StepId,
    /// Section holding nested fields, if the step validates a nested record.
    pub nested: Option<Section>,
    pub fields: &'static [FieldRule],
    pub advisories: &'static [Advisory],
}

impl Schema {
    /// Rule for a field key, if this schema declares one.
    pub fn rule(&self, field: &str) -> Option<&FieldRule> {
        self.fields.iter().find(|rule| rule.path.key() == field)
    }
}

const fn required(section: Section, label: &'static str, constraint: Constraint) -> FieldRule {
    FieldRule {
        path: FieldPath::Section(section),
        label,
        requirement: Requirement::Always,
        constraint,
    }
}

const fn optional(section: Section, label: &'static str) -> FieldRule {
    FieldRule {
        path: FieldPath::Section(section),
        label,
        requirement: Requirement::Optional,
        constraint: Constraint::None,
    }
}

const fn contact(
    field: ContactField,
    label: &'static str,
    requirement: Requirement,
    constraint: Constraint,
) -> FieldRule {
    FieldRule {
        path: FieldPath::Contact(field),
        label,
        requirement,
        constraint,
    }
}

static PROJECT_OVERVIEW: Schema = Schema {
    step: StepId::ProjectOverview,
    nested: None,
    fields: &[
        required(Section::Title, "Project title", Constraint::MinLength(3)),
        required(Section::Description, "Project description", Constraint::MinLength(10)),
    ],
    advisories: &[],
};

static INDUSTRY_FOCUS: Schema = Schema {
    step: StepId::IndustryFocus,
    nested: None,
    fields: &[
        required(Section::IndustryFocus, "Industry focus", Constraint::MinLength(1)),
        FieldRule {
            path: FieldPath::Section(Section::OtherIndustry),
            label: "Industry name",
            requirement: Requirement::WhenEquals {
                field: Section::IndustryFocus,
                value: OTHER_INDUSTRY,
            },
            constraint: Constraint::MinLength(2),
        },
    ],
    advisories: &[],
};

static CORE_PLATFORMS: Schema = Schema {
    step: StepId::CorePlatforms,
    nested: None,
    fields: &[required(Section::CorePlatforms, "Core platforms", Constraint::MinItems(1))],
    advisories: &[Advisory::MaxItems {
        section: Section::CorePlatforms,
        label: "Core platforms",
        max: 3,
    }],
};

static OPERATING_SYSTEM: Schema = Schema {
    step: StepId::OperatingSystem,
    nested: None,
    fields: &[required(Section::OperatingSystem, "Operating system", Constraint::MinLength(1))],
    advisories: &[],
};

static KEY_FEATURES: Schema = Schema {
    step: StepId::KeyFeatures,
    nested: None,
    fields: &[required(Section::KeyFeatures, "Key features", Constraint::MinItems(1))],
    advisories: &[Advisory::MaxItems {
        section: Section::KeyFeatures,
        label: "Key features",
        max: 5,
    }],
};

static HARDWARE_REQUIREMENTS: Schema = Schema {
    step: StepId::HardwareRequirements,
    nested: None,
    fields: &[required(
        Section::HardwareRequirements,
        "Hardware requirements",
        Constraint::MinItems(1),
    )],
    advisories: &[],
};

static MIDDLEWARE_DRIVERS: Schema = Schema {
    step: StepId::MiddlewareDrivers,
    nested: None,
    fields: &[
        required(Section::MiddlewareFrameworks, "Middleware frameworks", Constraint::MinItems(1)),
        optional(Section::DriverNeeds, "Driver needs"),
    ],
    advisories: &[],
};

static CLOUD_INTEGRATION: Schema = Schema {
    step: StepId::CloudIntegration,
    nested: None,
    fields: &[
        required(Section::CloudPlatforms, "Cloud platforms", Constraint::MinItems(1)),
        optional(Section::IotIntegration, "IoT integration"),
        required(Section::CloudStrategy, "Cloud strategy", Constraint::MinLength(1)),
    ],
    advisories: &[],
};

static CONTACT_INFORMATION: Schema = Schema {
    step: StepId::ContactInformation,
    nested: Some(Section::ContactInfo),
    fields: &[
        contact(
            ContactField::FullName,
            "Full name",
            Requirement::Always,
            Constraint::MinLength(2),
        ),
        contact(ContactField::Email, "Email", Requirement::Always, Constraint::Email),
        contact(
            ContactField::CompanyName,
            "Company name",
            Requirement::Always,
            Constraint::MinLength(1),
        ),
        contact(
            ContactField::PhoneNumber,
            "Phone number",
            Requirement::Optional,
            Constraint::None,
        ),
        contact(
            ContactField::ProjectDescription,
            "Project description",
            Requirement::Optional,
            Constraint::None,
        ),
    ],
    advisories: &[
        Advisory::Recommended {
            field: ContactField::PhoneNumber,
            label: "Phone number",
        },
        Advisory::Recommended {
            field: ContactField::ProjectDescription,
            label: "Project description",
        },
    ],
};

/// Schema for a step, or `None` when the step has nothing to validate.
pub fn schema_for(step: StepId) -> Option<&'static Schema> {
    match step {
        StepId::ProjectOverview => Some(&PROJECT_OVERVIEW),
        StepId::IndustryFocus => Some(&INDUSTRY_FOCUS),
        StepId::CorePlatforms => Some(&CORE_PLATFORMS),
        StepId::OperatingSystem => Some(&OPERATING_SYSTEM),
        StepId::KeyFeatures => Some(&KEY_FEATURES),
        StepId::HardwareRequirements => Some(&HARDWARE_REQUIREMENTS),
        StepId::MiddlewareDrivers => Some(&MIDDLEWARE_DRIVERS),
        StepId::CloudIntegration => Some(&CLOUD_INTEGRATION),
        StepId::ContactInformation => Some(&CONTACT_INFORMATION),
        StepId::Welcome | StepId::DataProcessing | StepId::Review => None,
    }
}

/// Schema for a raw step identifier; unknown identifiers have no schema.
pub fn schema_for_id(step_id: &str) -> Option<&'static Schema> {
    StepId::parse(step_id).and_then(schema_for)
}
