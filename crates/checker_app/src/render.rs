//! Terminal rendering of view-model snapshots.

use checker_core::{AppViewModel, EntryRowView, EntryStatus, StatusFilter};
use serde::Serialize;

const BAR_WIDTH: usize = 24;

/// Prints one progress line for the most recent resolution. With strict
/// in-order processing, the latest terminal entry is the last one resolved.
pub fn print_progress(view: &AppViewModel) {
    if let Some(row) = view.entries.iter().rev().find(|r| r.status.is_terminal()) {
        println!("{}  {}", progress_line(view), resolution_line(row));
    }
}

pub fn print_report(view: &AppViewModel) {
    let stats = view.stats;
    println!();
    println!(
        "Checked {} URLs: {} indexed, {} not indexed, {} errors",
        stats.total, stats.indexed, stats.not_indexed, stats.errors
    );

    let sections = [
        (StatusFilter::Indexed, "Indexed"),
        (StatusFilter::NotIndexed, "Not indexed"),
        (StatusFilter::Error, "Errors"),
    ];
    for (filter, heading) in sections {
        let rows = view.rows(filter);
        if rows.is_empty() {
            continue;
        }
        println!();
        println!("{heading} ({}):", rows.len());
        for row in rows {
            match &row.title {
                Some(title) => println!("  {}  ({title})", row.url),
                None => println!("  {}", row.url),
            }
        }
    }
}

fn progress_line(view: &AppViewModel) -> String {
    let stats = view.stats;
    let resolved = stats.total - stats.pending;
    let filled = if stats.total == 0 {
        0
    } else {
        resolved * BAR_WIDTH / stats.total
    };
    format!(
        "[{}{}] {:>3}% ({}/{})",
        "#".repeat(filled),
        ".".repeat(BAR_WIDTH - filled),
        view.progress_percent(),
        resolved,
        stats.total
    )
}

fn resolution_line(row: &EntryRowView) -> String {
    let label = status_label(row.status);
    match &row.title {
        Some(title) => format!("{label:<11}  {}  ({title})", row.url),
        None => format!("{label:<11}  {}", row.url),
    }
}

fn status_label(status: EntryStatus) -> &'static str {
    match status {
        EntryStatus::Pending => "pending",
        EntryStatus::Indexed => "indexed",
        EntryStatus::NotIndexed => "not indexed",
        EntryStatus::Error => "error",
    }
}

#[derive(Serialize)]
struct RunSummary<'a> {
    total: usize,
    indexed: usize,
    not_indexed: usize,
    errors: usize,
    entries: Vec<EntrySummary<'a>>,
}

#[derive(Serialize)]
struct EntrySummary<'a> {
    url: &'a str,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
}

pub fn json_summary(view: &AppViewModel) -> serde_json::Result<String> {
    let stats = view.stats;
    let summary = RunSummary {
        total: stats.total,
        indexed: stats.indexed,
        not_indexed: stats.not_indexed,
        errors: stats.errors,
        entries: view
            .entries
            .iter()
            .map(|row| EntrySummary {
                url: &row.url,
                status: status_label(row.status),
                title: row.title.as_deref(),
            })
            .collect(),
    };
    serde_json::to_string_pretty(&summary)
}
