use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use soc_model::{ContactField, Section, SectionKind, SectionValue, StepId};
use soc_persistence::KeyValueStore;
use soc_validate::{FieldPath, FieldValue, schema_for, validate_field};
use soc_wizard::{ImportOutcome, WizardStore};

use crate::summary::{progress_line, report_table, steps_table};

/// Rendered command result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub exit_code: i32,
}

impl CommandOutput {
    fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            exit_code: 0,
        }
    }

    fn failed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            exit_code: 1,
        }
    }
}

pub fn run_steps<S: KeyValueStore>(store: &WizardStore<S>) -> CommandOutput {
    CommandOutput::ok(format!("{}\n", steps_table(store)))
}

pub fn run_status<S: KeyValueStore>(store: &WizardStore<S>) -> CommandOutput {
    let mut text = format!("{}\n", progress_line(store));
    match store.next_incomplete_step() {
        Some(step) => text.push_str(&format!("Next step: {} ({})\n", step.title(), step)),
        None => text.push_str("All steps completed. Run `soc-wizard submit` to finish.\n"),
    }
    let filled = store.form_data().filled_sections();
    if !filled.is_empty() {
        let keys: Vec<&str> = filled.iter().map(Section::as_str).collect();
        text.push_str(&format!("Answered: {}\n", keys.join(", ")));
    }
    CommandOutput::ok(text)
}

/// Set one answer and report the field's live validation result.
pub fn run_set<S: KeyValueStore>(
    store: &mut WizardStore<S>,
    field: &str,
    value: &str,
) -> Result<CommandOutput> {
    let path = if let Some(name) = field.strip_prefix("contact.") {
        let contact = ContactField::parse(name).ok_or_else(|| {
            anyhow!(
                "unknown contact field '{name}' (expected one of: {})",
                ContactField::all()
                    .iter()
                    .map(ContactField::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        })?;
        store.update_contact(contact, Some(value.to_string()));
        FieldPath::Contact(contact)
    } else {
        let section: Section = field
            .parse()
            .with_context(|| format!("'{field}' is not a form section"))?;
        let update = match section.kind() {
            SectionKind::Text => SectionValue::text(section, value)?,
            SectionKind::List => SectionValue::list(section, value.split(','))?,
            SectionKind::Contact => bail!("set contact details with contact.<field>"),
        };
        store.update(update);
        FieldPath::Section(section)
    };

    let mut text = format!("Set {field}\n");
    let owner = match path {
        FieldPath::Section(section) => owning_step(section),
        FieldPath::Contact(_) => Some(StepId::ContactInformation),
    };
    if let Some(step) = owner {
        let current = FieldValue::read(store.form_data(), path);
        if let Some(message) = validate_field(step, path.key(), current) {
            text.push_str(&format!("  warning: {message}\n"));
        }
    }
    Ok(CommandOutput::ok(text))
}

/// Validate a step and mark it completed unless it has errors.
pub fn run_complete<S: KeyValueStore>(
    store: &mut WizardStore<S>,
    step_id: &str,
    force: bool,
) -> Result<CommandOutput> {
    let step = parse_step(step_id)?;
    let report = store.validate_step(step);

    if !report.is_valid() && !force {
        return Ok(CommandOutput::failed(format!(
            "{}\n{} has errors; fix them or pass --force\n",
            report_table(&report),
            step.title()
        )));
    }

    let mut text = String::new();
    if !report.is_valid() || report.has_warnings() {
        text.push_str(&format!("{}\n", report_table(&report)));
    }
    if store.mark_completed(step) {
        text.push_str(&format!("Completed {}\n", step.title()));
    } else {
        text.push_str(&format!("{} was already completed\n", step.title()));
    }
    text.push_str(&format!("{}\n", progress_line(store)));
    Ok(CommandOutput::ok(text))
}

pub fn run_validate<S: KeyValueStore>(
    store: &WizardStore<S>,
    step_id: &str,
) -> Result<CommandOutput> {
    let step = parse_step(step_id)?;
    let report = store.validate_step(step);

    if report.is_valid() && !report.has_warnings() {
        return Ok(CommandOutput::ok(format!("{} is valid\n", step.title())));
    }
    let text = format!("{}\n", report_table(&report));
    if report.is_valid() {
        Ok(CommandOutput::ok(text))
    } else {
        Ok(CommandOutput::failed(text))
    }
}

pub fn run_export<S: KeyValueStore>(store: &WizardStore<S>, path: &Path) -> Result<CommandOutput> {
    let snapshot = store.export_snapshot().map_err(|e| {
        let message = e.user_message();
        anyhow::Error::new(e).context(message)
    })?;
    std::fs::write(path, snapshot)
        .with_context(|| format!("write snapshot to {}", path.display()))?;
    Ok(CommandOutput::ok(format!(
        "Exported configuration to {}\n",
        path.display()
    )))
}

pub fn run_import<S: KeyValueStore>(
    store: &mut WizardStore<S>,
    path: &Path,
) -> Result<CommandOutput> {
    let outcome = store.import_file(path).map_err(|e| {
        let message = e.user_message();
        anyhow::Error::new(e).context(message)
    })?;
    match outcome {
        ImportOutcome::Applied => Ok(CommandOutput::ok(format!(
            "Imported configuration from {}\n{}\n",
            path.display(),
            progress_line(store)
        ))),
        ImportOutcome::Superseded => Ok(CommandOutput::failed(
            "Import was superseded by a newer one\n",
        )),
    }
}

pub fn run_reset<S: KeyValueStore>(store: &mut WizardStore<S>) -> Result<CommandOutput> {
    store.reset().context("clear saved progress")?;
    Ok(CommandOutput::ok("Configuration reset\n"))
}

/// Build a submission once every validated step passes.
pub fn run_submit<S: KeyValueStore>(
    store: &WizardStore<S>,
    output: Option<&Path>,
) -> Result<CommandOutput> {
    let failing: Vec<StepId> = StepId::all()
        .iter()
        .copied()
        .filter(|step| schema_for(*step).is_some())
        .filter(|step| !store.validate_step(*step).is_valid())
        .collect();
    if !failing.is_empty() {
        let mut text = String::from("Cannot submit; these steps have errors:\n");
        for step in failing {
            text.push_str(&format!("  {} ({})\n", step.title(), step));
        }
        return Ok(CommandOutput::failed(text));
    }

    let mut submission = store.to_submission();
    submission.submit()?;
    let json = serde_json::to_string_pretty(&submission).context("encode submission")?;

    match output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("write submission to {}", path.display()))?;
            tracing::info!(id = %submission.id, "submission written");
            Ok(CommandOutput::ok(format!(
                "Submission {} written to {}\n",
                submission.id,
                path.display()
            )))
        }
        None => Ok(CommandOutput::ok(format!("{json}\n"))),
    }
}

fn parse_step(step_id: &str) -> Result<StepId> {
    step_id.parse::<StepId>().with_context(|| {
        format!(
            "expected one of: {}",
            StepId::all()
                .iter()
                .map(StepId::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        )
    })
}

fn owning_step(section: Section) -> Option<StepId> {
    StepId::all()
        .iter()
        .copied()
        .find(|step| step.sections().contains(&section))
}
