use anyhow::{anyhow, Result};
use std::io::{self, IsTerminal};

use crate::cli::list::{print_expat_detail, render_checklist};
use crate::cli::ui::{confirm, status, term_size};
use crate::cli::update::pick_expat;
use crate::engine::ExpatFilter;
use crate::models::Expat;
use crate::store::Store;

/// Execute the remove command: pick from the checklist, confirm, remove
pub fn run_remove(store: &mut Store, filter: &ExpatFilter) -> Result<()> {
    let Some(id) = pick_expat(store, filter, "Remove:")? else {
        return Ok(());
    };
    let Some(expat) = store.get(id) else {
        return Ok(());
    };

    let display_name = expat.display_name().to_string();
    println!();
    print_expat_detail(expat);
    println!();

    if !confirm(&format!("Remove {}?", display_name))? {
        return Ok(());
    }

    if store.remove(id) {
        status("Removed.");
    } else {
        eprintln!("Error: failed to remove {}", display_name);
    }
    Ok(())
}

/// Remove the expat matching `identifier` (a full id or a unique prefix of
/// it) and return it
pub fn remove_by_identifier(store: &mut Store, identifier: &str) -> Result<Expat> {
    let expat = store.find_by_prefix(identifier)?.clone();
    store.remove(expat.id);
    Ok(expat)
}

/// Execute the remove command: confirm unless forced, remove, then print
/// the remaining checklist. Nothing is persisted.
pub fn run_remove_command(store: &mut Store, identifier: &str, force: bool) -> Result<()> {
    let expat = store.find_by_prefix(identifier)?;
    let display_name = expat.display_name().to_string();

    if !force {
        if !io::stdin().is_terminal() {
            return Err(anyhow!("Confirmation requires a terminal. Use --force."));
        }
        print_expat_detail(expat);
        println!();
        if !confirm(&format!("Remove {}?", display_name))? {
            return Ok(());
        }
    }

    remove_by_identifier(store, identifier)?;
    status(&format!("Removed {}.", display_name));
    println!();

    let (width, _) = term_size();
    let remaining: Vec<&Expat> = store.records().iter().collect();
    print!("{}", render_checklist(&remaining, width));
    Ok(())
}
