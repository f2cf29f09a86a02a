use anyhow::Result;
use tracing::warn;
use uuid::Uuid;

use crate::cli::list::print_expat_detail;
use crate::cli::ui::{clear_screen, prompt_field, select, status, warning, FormResult};
use crate::engine::ExpatFilter;
use crate::models::{Expat, ExpatField, FieldKind, FieldUpdate, FinalStatus, OrderStatus};
use crate::store::Store;

/// What happened when an edit was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditOutcome {
    /// The expat existed and the field was replaced
    pub applied: bool,
    /// The expat now has a handover date before its arrival date.
    /// Advisory only: the edit is kept either way.
    pub date_warning: bool,
}

/// Apply one field update and run the advisory date-order check
pub fn apply_edit(store: &mut Store, id: Uuid, update: FieldUpdate) -> EditOutcome {
    let field = update.field();
    let applied = store.update(id, update);
    let date_warning = applied
        && matches!(field, ExpatField::ArrivalDate | ExpatField::HandoverDate)
        && store.get(id).is_some_and(Expat::handover_before_arrival);

    if date_warning {
        warn!(%id, "handover date is before arrival date");
    }

    EditOutcome {
        applied,
        date_warning,
    }
}

/// One-line label used when picking an expat from a list
pub fn pick_label(expat: &Expat) -> String {
    let arrival = if expat.arrival_date.is_empty() {
        "no arrival date"
    } else {
        expat.arrival_date.as_str()
    };
    format!("{}  {} ({})", expat.short_id(), expat.display_name(), arrival)
}

/// Let the user pick one expat from the filtered checklist
pub fn pick_expat(store: &Store, filter: &ExpatFilter, prompt: &str) -> Result<Option<Uuid>> {
    let shown = filter.apply(store.records());
    if shown.is_empty() {
        status("No expats.");
        return Ok(None);
    }

    let labels: Vec<String> = shown.iter().map(|e| pick_label(e)).collect();
    Ok(select(prompt, &labels)?.map(|idx| shown[idx].id))
}

/// Ask for a new value of `field`. Returns None when cancelled.
fn prompt_update(expat: &Expat, field: ExpatField) -> Result<Option<FieldUpdate>> {
    let raw = match field.kind() {
        FieldKind::Order => {
            let labels: Vec<&str> = OrderStatus::ALL.iter().map(|s| s.label()).collect();
            match select(field.label(), &labels)? {
                Some(idx) => labels[idx].to_string(),
                None => return Ok(None),
            }
        }
        FieldKind::Status => {
            let labels: Vec<&str> = FinalStatus::ALL.iter().map(|s| s.label()).collect();
            match select(field.label(), &labels)? {
                Some(idx) => labels[idx].to_string(),
                None => return Ok(None),
            }
        }
        FieldKind::Text | FieldKind::Date => {
            let prompt = if field.kind() == FieldKind::Date {
                format!("{} (YYYY-MM-DD)", field.as_str())
            } else {
                field.as_str().to_string()
            };
            match prompt_field(&prompt, &field.current_value(expat))? {
                FormResult::Value(v) => v,
                FormResult::Cancelled => return Ok(None),
            }
        }
    };

    Ok(Some(FieldUpdate::parse(field, &raw)?))
}

/// Edit fields of one expat until the user is done
pub fn run_edit_expat(store: &mut Store, id: Uuid) -> Result<()> {
    let mut options: Vec<String> = ExpatField::ALL.iter().map(|f| f.label().to_string()).collect();
    options.push("Done".to_string());

    loop {
        let Some(expat) = store.get(id) else {
            return Ok(());
        };

        let _ = clear_screen();
        print_expat_detail(expat);
        println!();

        let Some(idx) = select("edit:", &options)? else {
            return Ok(());
        };
        let Some(&field) = ExpatField::ALL.get(idx) else {
            // "Done"
            return Ok(());
        };

        let expat = expat.clone();
        let Some(update) = prompt_update(&expat, field)? else {
            continue;
        };

        let outcome = apply_edit(store, id, update);
        if outcome.date_warning {
            warning("Handover date is before arrival date. Saved anyway.");
            crate::cli::ui::wait_for_continue();
        }
    }
}

/// Execute the interactive edit: pick from the checklist, then edit
pub fn run_edit(store: &mut Store, filter: &ExpatFilter) -> Result<()> {
    let Some(id) = pick_expat(store, filter, "Edit:")? else {
        return Ok(());
    };
    run_edit_expat(store, id)
}

/// Apply `value` to `field` of the expat matching `identifier` (a full id or
/// a unique prefix of it)
pub fn edit_by_identifier(
    store: &mut Store,
    identifier: &str,
    field: &str,
    value: &str,
) -> Result<(Uuid, EditOutcome)> {
    let id = store.find_by_prefix(identifier)?.id;
    let field = ExpatField::parse(field)?;
    let update = FieldUpdate::parse(field, value)?;
    Ok((id, apply_edit(store, id, update)))
}

/// Execute the edit command: change one field and print the result.
/// Nothing is persisted, so the change only lives for this run.
pub fn run_edit_command(store: &mut Store, identifier: &str, field: &str, value: &str) -> Result<()> {
    let (id, outcome) = edit_by_identifier(store, identifier, field, value)?;
    if let Some(expat) = store.get(id) {
        print_expat_detail(expat);
    }
    if outcome.date_warning {
        println!();
        warning("Handover date is before arrival date. Saved anyway.");
    }
    Ok(())
}
