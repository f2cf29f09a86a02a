use anyhow::Result;

use crate::cli::ui::{confirm, status};
use crate::cli::update::run_edit_expat;
use crate::store::Store;

/// Execute the add command: append a default expat, then offer to fill it in
pub fn run_add(store: &mut Store) -> Result<()> {
    let id = store.add();
    status("Added.");

    if confirm("Fill in details now?")? {
        run_edit_expat(store, id)?;
    }
    Ok(())
}
