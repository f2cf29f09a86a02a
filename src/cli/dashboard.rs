//! Dashboard view: summary cards, needs chart and final-status summary
//!
//! Statistics always cover every expat in the store. The filter only
//! narrows the checklist printed underneath.

use anyhow::Result;
use serde::Serialize;
use std::fmt::Write as _;

use crate::cli::list::render_checklist;
use crate::cli::ui::{pad, term_size};
use crate::config::Config;
use crate::engine::{aggregate, DashboardStats, ExpatFilter};
use crate::models::{Expat, FinalStatus};
use crate::store::Store;

const FILLED: char = '█';
const EMPTY: char = '░';
const LABEL_WIDTH: usize = 14;

/// Machine-readable dashboard, printed by `dashboard --json`
#[derive(Debug, Serialize)]
pub struct DashboardSnapshot<'a> {
    pub filter: &'a ExpatFilter,
    pub stats: DashboardStats,
    pub records: Vec<&'a Expat>,
}

/// Scale `value` out of `total` to a bar of at most `width` cells
fn scaled(value: usize, total: usize, width: usize) -> usize {
    if total == 0 {
        return 0;
    }
    (value * width + total / 2) / total
}

fn status_card(status: FinalStatus, stats: &DashboardStats) -> String {
    format!("{} {}", status.label(), stats.status_counts.get(status))
}

/// Render the statistics part of the dashboard as plain text
pub fn render_stats(stats: &DashboardStats, chart_width: usize) -> String {
    let mut out = String::new();

    // Summary cards
    let _ = writeln!(
        out,
        "Total {}   {}   {}   {}",
        stats.total,
        status_card(FinalStatus::Completed, stats),
        status_card(FinalStatus::InProgress, stats),
        status_card(FinalStatus::Pending, stats)
    );

    // Needs progress, one bar per item, ordered part first
    let _ = writeln!(out, "\nNEEDS  ({} ordered/assigned, {} not yet)\n", FILLED, EMPTY);
    for entry in &stats.bar_series {
        let total = entry.ordered + entry.not_ordered;
        let filled = scaled(entry.ordered, total, chart_width);
        let empty = if total == 0 { 0 } else { chart_width - filled };
        let bar: String = std::iter::repeat(FILLED)
            .take(filled)
            .chain(std::iter::repeat(EMPTY).take(empty))
            .collect();
        let _ = writeln!(
            out,
            "  {} {} {}",
            pad(entry.label, LABEL_WIDTH),
            pad(&bar, chart_width),
            format!("{}/{}", entry.ordered, total)
        );
    }

    // Final status distribution; zero-count statuses are not listed
    let _ = writeln!(out, "\nFINAL STATUS\n");
    if stats.pie_segments.is_empty() {
        let _ = writeln!(out, "  No expats.");
    }
    for segment in &stats.pie_segments {
        let percent = segment.percent(stats.total);
        let bar: String = std::iter::repeat(FILLED)
            .take(scaled(segment.value, stats.total, chart_width))
            .collect();
        let _ = writeln!(
            out,
            "  {} {:>3}%  {} {}",
            pad(segment.label, LABEL_WIDTH),
            percent,
            pad(&bar, chart_width),
            segment.value
        );
    }

    out
}

/// Render the whole dashboard: statistics plus the filtered checklist
pub fn render_dashboard(store: &Store, filter: &ExpatFilter, chart_width: usize, width: usize) -> String {
    let stats = aggregate(store.records());
    let shown = filter.apply(store.records());

    let mut out = render_stats(&stats, chart_width);
    if filter.is_empty() {
        let _ = writeln!(out, "\nCHECKLIST\n");
    } else {
        let _ = writeln!(
            out,
            "\nCHECKLIST  ({} of {}, filter: {})\n",
            shown.len(),
            store.len(),
            filter.describe()
        );
    }
    out.push_str(&render_checklist(&shown, width));
    out
}

/// Execute the dashboard command
pub fn run_dashboard(store: &Store, filter: &ExpatFilter, config: &Config, json: bool) -> Result<()> {
    if json {
        let snapshot = DashboardSnapshot {
            filter,
            stats: aggregate(store.records()),
            records: filter.apply(store.records()),
        };
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    let (width, _) = term_size();
    print!("{}", render_dashboard(store, filter, config.chart_width, width));
    Ok(())
}
