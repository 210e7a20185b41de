//! Terminal rendering of parse results.

use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use listkit_model::{CanonicalField, Contact, ParseResult};

/// Row errors printed when `--all-errors` is not given.
pub const ERROR_PREVIEW_LIMIT: usize = 10;

pub fn print_summary(path: &Path, result: &ParseResult, preview_limit: usize, all_errors: bool) {
    println!("File: {}", path.display());
    println!("{}", summary_table(result));

    let preview = result.preview(preview_limit);
    if !preview.is_empty() {
        println!();
        println!(
            "Preview ({} of {} contacts):",
            preview.len(),
            result.valid_rows
        );
        println!("{}", preview_table(preview));
    }

    if !result.errors.is_empty() {
        let limit = if all_errors {
            result.errors.len()
        } else {
            ERROR_PREVIEW_LIMIT
        };
        eprintln!();
        eprintln!("Errors:");
        for line in error_lines(&result.errors, limit) {
            eprintln!("- {line}");
        }
    }

    if !result.is_usable() {
        eprintln!();
        eprintln!("No usable contacts found; nothing to upload.");
    }
}

/// Prints one personalized rendering of `template` per previewed contact.
pub fn print_personalized(result: &ParseResult, preview_limit: usize, template: &str) {
    println!();
    println!("Personalized preview:");
    for contact in result.preview(preview_limit) {
        let email = contact.email.as_deref().unwrap_or("-");
        println!("{email}: {}", contact.personalize(template));
    }
}

/// Rows, valid rows, invalid rows, and detected headers.
pub fn summary_table(result: &ParseResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rows"),
        header_cell("Valid"),
        header_cell("Invalid"),
        header_cell("Headers"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    let headers = if result.headers.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(result.headers.join(", "))
    };
    table.add_row(vec![
        Cell::new(result.total_rows).add_attribute(Attribute::Bold),
        count_cell(result.valid_rows, Color::Green),
        count_cell(result.invalid_rows(), Color::Red),
        headers,
    ]);
    table
}

/// One row per contact: canonical fields, then any pass-through columns.
pub fn preview_table(contacts: &[Contact]) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("#")];
    header.extend(
        CanonicalField::ALL
            .iter()
            .map(|field| header_cell(field.as_str())),
    );
    header.push(header_cell("other"));
    table.set_header(header);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);

    for (idx, contact) in contacts.iter().enumerate() {
        let mut row = vec![dim_cell(idx + 1)];
        row.extend(CanonicalField::ALL.iter().map(|field| {
            match contact.field(*field) {
                Some(value) if *field == CanonicalField::Email => Cell::new(value).fg(Color::Blue),
                Some(value) => Cell::new(value),
                None => dim_cell("-"),
            }
        }));
        row.push(other_cell(contact));
        table.add_row(row);
    }
    table
}

/// Up to `limit` error messages, followed by a count of the rest.
pub fn error_lines(errors: &[String], limit: usize) -> Vec<String> {
    let mut lines: Vec<String> = errors.iter().take(limit).cloned().collect();
    if errors.len() > limit {
        lines.push(format!("... and {} more", errors.len() - limit));
    }
    lines
}

/// Header synonym table for `listkit aliases`.
pub fn alias_table(aliases: &[(&str, CanonicalField)]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Header"), header_cell("Field")]);
    apply_table_style(&mut table);
    for (alias, field) in aliases {
        table.add_row(vec![
            Cell::new(*alias),
            Cell::new(field.as_str())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn other_cell(contact: &Contact) -> Cell {
    if contact.extra.is_empty() {
        return dim_cell("-");
    }
    let text = contact
        .extra
        .iter()
        .map(|(key, value)| format!("{key}: {value}"))
        .collect::<Vec<_>>()
        .join("\n");
    Cell::new(text)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
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
