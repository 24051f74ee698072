//! Wizard step identifiers and the fixed step sequence.
//!
//! The sequence is total-ordered and never changes at runtime:
//! a welcome page, ten working steps that each own one or more
//! form sections, and a final review page.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::section::Section;

// =============================================================================
// STEP ID
// =============================================================================

/// One page of the configuration wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepId {
    /// Landing page (pseudo-step, not counted toward completion)
    Welcome,
    ProjectOverview,
    IndustryFocus,
    CorePlatforms,
    OperatingSystem,
    KeyFeatures,
    HardwareRequirements,
    MiddlewareDrivers,
    CloudIntegration,
    DataProcessing,
    ContactInformation,
    /// Final summary page (pseudo-step, not counted toward completion)
    Review,
}

/// Number of steps that count toward the completion percentage.
///
/// Derived from the sequence: every step except the welcome and review pages.
/// Completed welcome or review entries are left out of the numerator too, so
/// the percentage never exceeds 100.
pub const TOTAL_COUNTED_STEPS: usize = StepId::counted().len();

impl StepId {
    /// All steps in display order.
    pub const fn all() -> &'static [StepId] {
        &[
            Self::Welcome,
            Self::ProjectOverview,
            Self::IndustryFocus,
            Self::CorePlatforms,
            Self::OperatingSystem,
            Self::KeyFeatures,
            Self::HardwareRequirements,
            Self::MiddlewareDrivers,
            Self::CloudIntegration,
            Self::DataProcessing,
            Self::ContactInformation,
            Self::Review,
        ]
    }

    /// Working steps that count toward completion, in display order.
    pub const fn counted() -> &'static [StepId] {
        &[
            Self::ProjectOverview,
            Self::IndustryFocus,
            Self::CorePlatforms,
            Self::OperatingSystem,
            Self::KeyFeatures,
            Self::HardwareRequirements,
            Self::MiddlewareDrivers,
            Self::CloudIntegration,
            Self::DataProcessing,
            Self::ContactInformation,
        ]
    }

    /// Stable identifier used in snapshots and persisted state.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::ProjectOverview => "project-overview",
            Self::IndustryFocus => "industry-focus",
            Self::CorePlatforms => "core-platforms",
            Self::OperatingSystem => "operating-system",
            Self::KeyFeatures => "key-features",
            Self::HardwareRequirements => "hardware-requirements",
            Self::MiddlewareDrivers => "middleware-drivers",
            Self::CloudIntegration => "cloud-integration",
            Self::DataProcessing => "data-processing",
            Self::ContactInformation => "contact-information",
            Self::Review => "review",
        }
    }

    /// Display title for this step.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Welcome => "Welcome",
            Self::ProjectOverview => "Project Overview",
            Self::IndustryFocus => "Industry Focus",
            Self::CorePlatforms => "Core Platforms",
            Self::OperatingSystem => "Operating System",
            Self::KeyFeatures => "Key Features",
            Self::HardwareRequirements => "Hardware Requirements",
            Self::MiddlewareDrivers => "Middleware & Drivers",
            Self::CloudIntegration => "Cloud Integration",
            Self::DataProcessing => "Data Processing",
            Self::ContactInformation => "Contact Information",
            Self::Review => "Review",
        }
    }

    /// Form sections edited on this step.
    pub fn sections(&self) -> &'static [Section] {
        match self {
            Self::Welcome | Self::Review => &[],
            Self::ProjectOverview => &[Section::Title, Section::Description],
            Self::IndustryFocus => &[Section::IndustryFocus, Section::OtherIndustry],
            Self::CorePlatforms => &[Section::CorePlatforms],
            Self::OperatingSystem => &[Section::OperatingSystem],
            Self::KeyFeatures => &[Section::KeyFeatures],
            Self::HardwareRequirements => &[Section::HardwareRequirements],
            Self::MiddlewareDrivers => &[Section::MiddlewareFrameworks, Section::DriverNeeds],
            Self::CloudIntegration => &[
                Section::CloudPlatforms,
                Section::IotIntegration,
                Section::CloudStrategy,
            ],
            Self::DataProcessing => &[Section::DataProcessing],
            Self::ContactInformation => &[Section::ContactInfo],
        }
    }

    /// Whether this step counts toward the completion percentage.
    pub fn is_counted(&self) -> bool {
        !matches!(self, Self::Welcome | Self::Review)
    }

    /// Position of this step in the sequence (0-based).
    pub fn index(&self) -> usize {
        match self {
            Self::Welcome => 0,
            Self::ProjectOverview => 1,
            Self::IndustryFocus => 2,
            Self::CorePlatforms => 3,
            Self::OperatingSystem => 4,
            Self::KeyFeatures => 5,
            Self::HardwareRequirements => 6,
            Self::MiddlewareDrivers => 7,
            Self::CloudIntegration => 8,
            Self::DataProcessing => 9,
            Self::ContactInformation => 10,
            Self::Review => 11,
        }
    }

    /// Step at the given position.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }

    /// Following step, if any.
    pub fn next(&self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// Preceding step, if any.
    pub fn previous(&self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    /// Parse a step identifier.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::all().iter().copied().find(|step| step.as_str() == s)
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StepId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ModelError::UnknownStep(s.to_string()))
    }
}

// =============================================================================
// SEQUENCER
// =============================================================================

/// Position of a raw step identifier in the sequence.
///
/// Returns `None` for identifiers that are not part of the sequence.
pub fn step_index(step_id: &str) -> Option<usize> {
    StepId::parse(step_id).map(|step| step.index())
}

/// Whether the user may navigate to `step`.
///
/// A step is reachable when it is at or before the current position, or when
/// it has already been completed (revisiting finished steps is always allowed).
pub fn is_reachable(step: StepId, completed: &CompletedSteps, current_index: usize) -> bool {
    step.index() <= current_index || completed.contains(step)
}

// =============================================================================
// COMPLETED STEPS
// =============================================================================

/// Steps the user has finished, in the order they were first completed.
///
/// Serialized as a plain array of step identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<StepId>", into = "Vec<StepId>")]
pub struct CompletedSteps {
    steps: Vec<StepId>,
}

impl CompletedSteps {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `step` if absent. Returns `true` if it was inserted.
    pub fn insert(&mut self, step: StepId) -> bool {
        if self.contains(step) {
            return false;
        }
        self.steps.push(step);
        true
    }

    /// Whether `step` has been completed.
    #[inline]
    pub fn contains(&self, step: StepId) -> bool {
        self.steps.contains(&step)
    }

    /// Number of completed steps.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether no steps are completed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of completed steps that count toward completion.
    pub fn counted_len(&self) -> usize {
        self.steps.iter().filter(|step| step.is_counted()).count()
    }

    /// Iterate in completion order.
    pub fn iter(&self) -> impl Iterator<Item = StepId> + '_ {
        self.steps.iter().copied()
    }

    /// Completed steps as a slice, in completion order.
    pub fn as_slice(&self) -> &[StepId] {
        &self.steps
    }

    /// Remove all steps.
    pub fn clear(&mut self) {
        self.steps.clear();
    }
}

impl TryFrom<Vec<StepId>> for CompletedSteps {
    type Error = ModelError;

    fn try_from(steps: Vec<StepId>) -> Result<Self, Self::Error> {
        let mut completed = Self::new();
        for step in steps {
            if !completed.insert(step) {
                return Err(ModelError::DuplicateStep(step.as_str().to_string()));
            }
        }
        Ok(completed)
    }
}

impl From<CompletedSteps> for Vec<StepId> {
    fn from(completed: CompletedSteps) -> Self {
        completed.steps
    }
}

impl FromIterator<StepId> for CompletedSteps {
    /// Collect steps, keeping the first occurrence of each.
    fn from_iter<I: IntoIterator<Item = StepId>>(iter: I) -> Self {
        let mut completed = Self::new();
        for step in iter {
            completed.insert(step);
        }
        completed
    }
}

impl<'a> IntoIterator for &'a CompletedSteps {
    type Item = StepId;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, StepId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter().copied()
    }
}
