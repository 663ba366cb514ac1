//! CLI display utilities for formatting output

use crate::task::api::TaskDescriptor;
use colored::Colorize;
use prettytable::{format, Cell, Row, Table};

/// Build the table listing registered tasks
pub fn task_table(descriptors: &[&TaskDescriptor], use_color: bool) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_CLEAN);

    let titles = ["Task", "Kind", "Version"]
        .iter()
        .map(|title| {
            if use_color {
                Cell::new(&title.cyan().bold().to_string())
            } else {
                Cell::new(title)
            }
        })
        .collect();
    table.set_titles(Row::new(titles));

    for descriptor in descriptors {
        let name = if use_color {
            descriptor.name().blue().to_string()
        } else {
            descriptor.name().to_string()
        };
        table.add_row(Row::new(vec![
            Cell::new(&name),
            Cell::new(&descriptor.kind().to_string()),
            Cell::new(&descriptor.version().to_string()),
        ]));
    }
    table
}

/// Print registered tasks sorted by name
pub fn display_task_table(descriptors: &[&TaskDescriptor], use_color: bool) {
    if descriptors.is_empty() {
        eprintln!("No tasks registered.");
        return;
    }
    task_table(descriptors, use_color).printstd();
}
