use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use form_cli::batch::BatchResult;
use form_model::{Issue, ValidationOutcome};

use form_cli::commands::CheckResult;

pub fn print_check(result: &CheckResult) {
    match &result.banner {
        Some(banner) => println!("{banner}"),
        None => println!("{}", result.outcome),
    }
    if result.issues.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Code"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    for issue in &result.issues {
        table.add_row(issue_row(issue));
    }
    println!();
    println!("Issues:");
    println!("{table}");
}

pub fn print_batch(result: &BatchResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Name"),
        header_cell("Email"),
        header_cell("Outcome"),
        header_cell("Issues"),
    ]);
    apply_batch_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    for entry in &result.entries {
        let codes: Vec<&str> = entry.report.issues.iter().map(Issue::code).collect();
        table.add_row(vec![
            Cell::new(entry.row),
            text_cell(&entry.name),
            text_cell(&entry.email),
            outcome_cell(entry.outcome),
            if codes.is_empty() {
                dim_cell("-")
            } else {
                Cell::new(codes.join(", "))
            },
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} rows", result.entries.len())).add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(format!(
            "{} accepted / {} rejected",
            result.accepted_count(),
            result.rejected_count()
        ))
        .add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");
}

fn issue_row(issue: &Issue) -> Vec<Cell> {
    vec![
        Cell::new(issue.field())
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        Cell::new(issue.code()).fg(Color::Red),
        Cell::new(issue.message()),
    ]
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_batch_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(5)),
            ColumnConstraint::UpperBoundary(Width::Percentage(25)),
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::LowerBoundary(Width::Fixed(10)),
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn outcome_cell(outcome: ValidationOutcome) -> Cell {
    match outcome {
        ValidationOutcome::Accepted => Cell::new("ACCEPTED").fg(Color::Green),
        ValidationOutcome::Rejected => Cell::new("REJECTED")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        ValidationOutcome::Pending => dim_cell("PENDING"),
    }
}

fn text_cell(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell("(empty)")
    } else {
        Cell::new(value)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
