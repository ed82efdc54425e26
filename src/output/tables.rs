use comfy_table::{
    modifiers, presets, Attribute, Cell, CellAlignment, Color, ContentArrangement, Table,
};
use terminal_size::{terminal_size, Width};

use crate::models::{GroupRecord, OutcomeStatus, UserCreationOutcome, UserRecord};
use crate::utils::format_datetime;

pub const ACTIVE_LABEL: &str = "🟢 Active";
pub const INACTIVE_LABEL: &str = "🔴 Inactive";

fn base_table(headers: Vec<Cell>) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_header(headers);
    if let Some(column) = table.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table
}

fn header(text: &str, color: Color) -> Cell {
    Cell::new(text).fg(color).add_attribute(Attribute::Bold)
}

/// Summary of a batch creation run, one row per CSV record.
pub fn creation_report_table(outcomes: &[UserCreationOutcome]) -> Table {
    let mut table = base_table(vec![
        header("ID", Color::White),
        header("User name", Color::White),
        header("Email", Color::White),
        header("Groups", Color::White),
        header("Status", Color::White),
    ]);
    for o in outcomes {
        let status_color = match o.status {
            OutcomeStatus::Succeeded => Color::Green,
            OutcomeStatus::Failed => Color::Red,
        };
        table.add_row(vec![
            Cell::new(&o.id),
            Cell::new(&o.name).add_attribute(Attribute::Bold),
            Cell::new(&o.email).fg(Color::Magenta),
            Cell::new(&o.groups).fg(Color::Cyan),
            Cell::new(o.status.label())
                .fg(status_color)
                .add_attribute(Attribute::Bold),
        ]);
    }
    table
}

pub fn users_table(users: &[UserRecord]) -> Table {
    let mut table = base_table(vec![
        header("ID", Color::Cyan),
        header("User name", Color::Cyan),
        header("Email", Color::Cyan),
        header("Created at", Color::Cyan),
        header("Status", Color::Cyan),
    ]);
    for u in users {
        let status = if u.is_active { ACTIVE_LABEL } else { INACTIVE_LABEL };
        table.add_row(vec![
            Cell::new(u.id),
            Cell::new(&u.name).add_attribute(Attribute::Bold),
            Cell::new(&u.email).fg(Color::Magenta),
            Cell::new(format_datetime(&u.created_at)).fg(Color::Green),
            Cell::new(status).fg(Color::Yellow).add_attribute(Attribute::Bold),
        ]);
    }
    table
}

pub fn groups_table(groups: &[GroupRecord]) -> Table {
    let mut table = base_table(vec![
        header("ID", Color::Blue),
        header("Group name", Color::Blue),
        header("Created at", Color::Blue),
    ]);
    for g in groups {
        table.add_row(vec![
            Cell::new(g.id),
            Cell::new(&g.name).fg(Color::Yellow).add_attribute(Attribute::Bold),
            Cell::new(format_datetime(&g.created_at)).fg(Color::Green),
        ]);
    }
    table
}

/// Print `table` under a bold title, sized to the terminal.
pub fn print_table(title: &str, mut table: Table) {
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }
    if !yansi::is_enabled() {
        table.force_no_tty();
    }
    println!("\n{}", yansi::Paint::new(title).bold());
    println!("{table}\n");
}
