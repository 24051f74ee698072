use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use soc_model::{StepId, TOTAL_COUNTED_STEPS};
use soc_persistence::KeyValueStore;
use soc_validate::{Severity, ValidationReport, schema_for};
use soc_wizard::WizardStore;

/// Table of every step with its completion and validation state.
pub fn steps_table<S: KeyValueStore>(store: &WizardStore<S>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Step"),
        header_cell("Title"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);

    for step in StepId::all() {
        table.add_row(vec![
            dim_cell(step.index()),
            Cell::new(step.as_str()),
            Cell::new(step.title()),
            status_cell(store, *step),
        ]);
    }
    table
}

/// Table of the errors and warnings in a report.
pub fn report_table(report: &ValidationReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Severity"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);

    let errors = report.errors.iter().map(|(k, v)| (k, Severity::Error, v));
    let warnings = report.warnings.iter().map(|(k, v)| (k, Severity::Warning, v));
    for (field, severity, message) in errors.chain(warnings) {
        table.add_row(vec![
            Cell::new(field),
            severity_cell(severity),
            Cell::new(message),
        ]);
    }
    table
}

/// One-line progress summary.
pub fn progress_line<S: KeyValueStore>(store: &WizardStore<S>) -> String {
    format!(
        "Progress: {}% ({} of {} steps completed)",
        store.completion_percentage(),
        store.completed_steps().counted_len(),
        TOTAL_COUNTED_STEPS
    )
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_cell<S: KeyValueStore>(store: &WizardStore<S>, step: StepId) -> Cell {
    if store.completed_steps().contains(step) {
        return Cell::new("completed")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold);
    }
    if schema_for(step).is_none() {
        return dim_cell("-");
    }
    if store.validate_step(step).is_valid() {
        Cell::new("ready").fg(Color::Cyan)
    } else {
        Cell::new("incomplete").fg(Color::Yellow)
    }
}

fn severity_cell(severity: Severity) -> Cell {
    let color = match severity {
        Severity::Error => Color::Red,
        Severity::Warning => Color::Yellow,
    };
    Cell::new(severity.label())
        .fg(color)
        .add_attribute(Attribute::Bold)
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}
