use anyhow::Result;
use std::fmt::Write as _;

use crate::cli::ui::{or_dash, pad, term_size};
use crate::engine::ExpatFilter;
use crate::models::{Expat, OrderStatus};
use crate::store::Store;

/// Marker appended to a handover date that precedes the arrival date
const DATE_WARNING_MARK: &str = "!";

/// Column layout based on terminal width
struct ColumnLayout {
    name_width: usize,
    logistics_width: usize,
    show_items: bool,
    show_logistics: bool,
}

impl ColumnLayout {
    fn for_width(width: usize) -> Self {
        if width >= 120 {
            // Full sheet: every checklist column
            ColumnLayout {
                name_width: 18,
                logistics_width: 14,
                show_items: true,
                show_logistics: true,
            }
        } else if width >= 80 {
            // Items as single marks, no driver/car names
            ColumnLayout {
                name_width: 18,
                logistics_width: 0,
                show_items: true,
                show_logistics: false,
            }
        } else {
            // Compact: name, dates, status and a needs counter
            ColumnLayout {
                name_width: width.saturating_sub(52).clamp(10, 18),
                logistics_width: 0,
                show_items: false,
                show_logistics: false,
            }
        }
    }
}

fn order_mark(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Ordered => "✓",
        OrderStatus::NotOrdered => "·",
    }
}

fn assigned_mark(assigned: bool) -> &'static str {
    if assigned {
        "✓"
    } else {
        "·"
    }
}

/// Number of provisioning items already ordered or assigned
fn needs_done(expat: &Expat) -> usize {
    [
        expat.business_card.is_ordered(),
        expat.phone.is_ordered(),
        expat.sim_card.is_ordered(),
        expat.hotel.is_ordered(),
        expat.driver_assigned(),
        expat.car_assigned(),
    ]
    .iter()
    .filter(|done| **done)
    .count()
}

fn handover_cell(expat: &Expat) -> String {
    let date = or_dash(&expat.handover_date);
    if expat.handover_before_arrival() {
        format!("{}{}", date, DATE_WARNING_MARK)
    } else {
        date.to_string()
    }
}

fn header_line(layout: &ColumnLayout) -> String {
    let mut line = format!("{:<8}  {}  {:<10}  ", "ID", pad("NAME", layout.name_width), "ARRIVAL");
    if layout.show_items {
        line.push_str("CARD PHONE SIM HOTEL  ");
    }
    if layout.show_logistics {
        let _ = write!(
            line,
            "{}  {}  ",
            pad("DRIVER", layout.logistics_width),
            pad("CAR", layout.logistics_width)
        );
    } else if layout.show_items {
        line.push_str("DRV CAR  ");
    } else {
        line.push_str("NEEDS  ");
    }
    let _ = write!(line, "{:<11}  STATUS", "HANDOVER");
    line
}

fn row_line(expat: &Expat, layout: &ColumnLayout) -> String {
    let mut line = format!(
        "{:<8}  {}  {:<10}  ",
        expat.short_id(),
        pad(expat.display_name(), layout.name_width),
        or_dash(&expat.arrival_date)
    );
    if layout.show_items {
        let _ = write!(
            line,
            "{:<4} {:<5} {:<3} {:<5}  ",
            order_mark(expat.business_card),
            order_mark(expat.phone),
            order_mark(expat.sim_card),
            order_mark(expat.hotel)
        );
    }
    if layout.show_logistics {
        let _ = write!(
            line,
            "{}  {}  ",
            pad(or_dash(&expat.driver), layout.logistics_width),
            pad(or_dash(&expat.car), layout.logistics_width)
        );
    } else if layout.show_items {
        let _ = write!(
            line,
            "{:<3} {:<3}  ",
            assigned_mark(expat.driver_assigned()),
            assigned_mark(expat.car_assigned())
        );
    } else {
        let _ = write!(line, "{:<5}  ", format!("{}/6", needs_done(expat)));
    }
    let _ = write!(line, "{:<11}  {}", handover_cell(expat), expat.final_status.label());
    line
}

/// Render the checklist table for `expats` at a given terminal width.
/// Rows with a handover before arrival are marked and explained below.
pub fn render_checklist(expats: &[&Expat], width: usize) -> String {
    if expats.is_empty() {
        return "No expats.\n".to_string();
    }

    let layout = ColumnLayout::for_width(width);
    let mut out = String::new();
    let _ = writeln!(out, "{}", header_line(&layout));
    for expat in expats {
        let _ = writeln!(out, "{}", row_line(expat, &layout));
    }

    let flagged: Vec<&&Expat> = expats.iter().filter(|e| e.handover_before_arrival()).collect();
    if !flagged.is_empty() {
        out.push('\n');
        for expat in flagged {
            let _ = writeln!(
                out,
                "{} {}: handover {} is before arrival {}",
                DATE_WARNING_MARK,
                expat.display_name(),
                expat.handover_date,
                expat.arrival_date
            );
        }
    }

    out
}

/// Print every field of one expat
pub fn print_expat_detail(expat: &Expat) {
    println!("{}\n", expat.display_name());
    println!("  id        {}", expat.id);
    println!("  arrival   {}", or_dash(&expat.arrival_date));
    println!("  handover  {}", handover_cell(expat));
    println!("  status    {}", expat.final_status.label());
    println!();
    println!("  business card  {}", expat.business_card.label());
    println!("  phone          {}", expat.phone.label());
    println!("  sim card       {}", expat.sim_card.label());
    println!("  hotel          {}", expat.hotel.label());
    println!("  driver         {}", or_dash(&expat.driver));
    println!("  car            {}", or_dash(&expat.car));
    if !expat.notes.trim().is_empty() {
        println!("\n  {}", expat.notes.trim());
    }
    if expat.handover_before_arrival() {
        println!("\n  Handover date is before arrival date.");
    }
}

/// Execute the list command
pub fn run_list(store: &Store, filter: &ExpatFilter) -> Result<()> {
    let shown = filter.apply(store.records());
    let (width, _) = term_size();

    if filter.is_empty() {
        println!("Checklist ({} total)\n", store.len());
    } else {
        println!(
            "Checklist ({} of {}, filter: {})\n",
            shown.len(),
            store.len(),
            filter.describe()
        );
    }
    print!("{}", render_checklist(&shown, width));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::example_expats;

    #[test]
    fn test_render_empty() {
        assert_eq!(render_checklist(&[], 120), "No expats.\n");
    }

    #[test]
    fn test_render_full_width_columns() {
        let expats = example_expats();
        let refs: Vec<&Expat> = expats.iter().collect();
        let out = render_checklist(&refs, 140);

        let mut lines = out.lines();
        let header = lines.next().unwrap();
        assert!(header.contains("DRIVER"));
        assert!(header.contains("HANDOVER"));
        assert!(out.contains("Budi Santoso"));
        assert!(out.contains("Toyota Avanza"));
        assert!(out.contains("Completed"));
        assert_eq!(out.lines().count(), 4);
    }

    #[test]
    fn test_render_compact_shows_needs_counter() {
        let expats = example_expats();
        let refs: Vec<&Expat> = expats.iter().collect();
        let out = render_checklist(&refs, 60);

        assert!(out.contains("NEEDS"));
        assert!(!out.contains("DRIVER"));
        // John: card, phone, hotel, driver, car
        assert!(out.lines().nth(1).unwrap().contains("5/6"));
        // Peter: nothing yet
        assert!(out.lines().nth(3).unwrap().contains("0/6"));
    }

    #[test]
    fn test_render_marks_date_problem() {
        let mut expat = Expat::new();
        expat.name = "Late Handover".to_string();
        expat.arrival_date = "2024-07-20".to_string();
        expat.handover_date = "2024-07-18".to_string();

        let out = render_checklist(&[&expat], 120);
        assert!(out.contains("2024-07-18!"));
        assert!(out.contains("! Late Handover: handover 2024-07-18 is before arrival 2024-07-20"));
    }

    #[test]
    fn test_needs_done() {
        let expats = example_expats();
        assert_eq!(needs_done(&expats[0]), 5);
        assert_eq!(needs_done(&expats[1]), 6);
        assert_eq!(needs_done(&expats[2]), 0);
    }

    #[test]
    fn test_unnamed_row() {
        let expat = Expat::new();
        let out = render_checklist(&[&expat], 100);
        assert!(out.contains("(unnamed)"));
        assert!(out.contains("In Progress"));
    }
}
