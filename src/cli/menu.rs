//! Interactive session for expatcmd
//!
//! The session owns the store and the checklist filter. Every action runs
//! to completion before the menu is shown again, and every view is rebuilt
//! from the current records.

use anyhow::{anyhow, Result};
use inquire::Select;
use std::io::{self, IsTerminal};
use tracing::info;

use crate::cli::dashboard::render_dashboard;
use crate::cli::list::render_checklist;
use crate::cli::ui::{clear_screen, minimal_render_config, term_size, text_input, wait_for_continue};
use crate::cli::{run_add, run_edit, run_remove};
use crate::config::Config;
use crate::engine::ExpatFilter;
use crate::store::Store;

/// Menu options with type-safe variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuOption {
    Dashboard,
    Checklist,
    FilterName,
    FilterDate,
    ResetFilter,
    Add,
    Edit,
    Remove,
    Quit,
}

impl MenuOption {
    const ALL: &'static [MenuOption] = &[
        MenuOption::Dashboard,
        MenuOption::Checklist,
        MenuOption::FilterName,
        MenuOption::FilterDate,
        MenuOption::ResetFilter,
        MenuOption::Add,
        MenuOption::Edit,
        MenuOption::Remove,
        MenuOption::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            MenuOption::Dashboard => "Dashboard",
            MenuOption::Checklist => "Checklist",
            MenuOption::FilterName => "Filter by name",
            MenuOption::FilterDate => "Filter by arrival date",
            MenuOption::ResetFilter => "Reset filter",
            MenuOption::Add => "Add",
            MenuOption::Edit => "Edit",
            MenuOption::Remove => "Remove",
            MenuOption::Quit => "Quit",
        }
    }

    fn from_label(s: &str) -> Option<MenuOption> {
        MenuOption::ALL.iter().find(|opt| opt.label() == s).copied()
    }
}

/// State owned by one interactive session
pub struct Session {
    pub store: Store,
    pub filter: ExpatFilter,
    config: Config,
}

impl Session {
    pub fn new(store: Store, config: Config) -> Self {
        Self {
            store,
            filter: ExpatFilter::default(),
            config,
        }
    }

    /// Menu title: record count plus the active filter, if any
    fn title(&self) -> String {
        if self.filter.is_empty() {
            format!("expatcmd ({} expats)", self.store.len())
        } else {
            let shown = self.filter.apply(self.store.records()).len();
            format!(
                "expatcmd ({} of {} expats, filter: {})",
                shown,
                self.store.len(),
                self.filter.describe()
            )
        }
    }

    fn show_dashboard(&self) {
        let (width, _) = term_size();
        print!(
            "{}",
            render_dashboard(&self.store, &self.filter, self.config.chart_width, width)
        );
    }

    fn show_checklist(&self) {
        let (width, _) = term_size();
        let shown = self.filter.apply(self.store.records());
        println!("{}\n", self.title());
        print!("{}", render_checklist(&shown, width));
    }

    /// Store filter input. The name query is kept as typed, so surrounding
    /// spaces take part in the substring match. Dates are trimmed.
    fn set_filter(&mut self, choice: MenuOption, input: String) {
        match choice {
            MenuOption::FilterName => self.filter.name = input,
            MenuOption::FilterDate => self.filter.arrival_date = input.trim().to_string(),
            _ => {}
        }
    }

    /// Execute a menu command. Returns Ok(true) if the user wants to quit.
    fn execute(&mut self, choice: MenuOption) -> Result<bool> {
        match choice {
            MenuOption::Dashboard => {
                self.show_dashboard();
                wait_for_continue();
            }
            MenuOption::Checklist => {
                self.show_checklist();
                wait_for_continue();
            }
            MenuOption::FilterName => {
                if let Some(name) = text_input("name contains: ")? {
                    self.set_filter(choice, name);
                }
            }
            MenuOption::FilterDate => {
                if let Some(date) = text_input("arrival date (YYYY-MM-DD): ")? {
                    self.set_filter(choice, date);
                }
            }
            MenuOption::ResetFilter => self.filter.reset(),
            MenuOption::Add => run_add(&mut self.store)?,
            MenuOption::Edit => run_edit(&mut self.store, &self.filter)?,
            MenuOption::Remove => run_remove(&mut self.store, &self.filter)?,
            MenuOption::Quit => return Ok(true),
        }
        Ok(false)
    }
}

/// Run the interactive main menu
pub fn run_menu(store: Store, config: Config) -> Result<()> {
    // TTY check: interactive menu requires a terminal
    if !io::stdin().is_terminal() {
        return Err(anyhow!(
            "Interactive menu requires a terminal. Use subcommands for non-interactive use:\n  \
            expatcmd dashboard\n  \
            expatcmd list --name <query>\n  \
            expatcmd export --format csv\n  \
            expatcmd edit <id> <field> <value>\n  \
            Run 'expatcmd --help' for all options."
        ));
    }

    let mut session = Session::new(store, config);
    let menu_labels: Vec<&str> = MenuOption::ALL.iter().map(|opt| opt.label()).collect();
    info!(expats = session.store.len(), "session started");

    loop {
        // Clear screen - if this fails, continue anyway (degraded but functional)
        let _ = clear_screen();
        session.show_dashboard();
        println!();

        let selection = Select::new(&session.title(), menu_labels.clone())
            .with_render_config(minimal_render_config())
            .with_page_size(menu_labels.len())
            .with_vim_mode(true)
            .prompt_skippable();

        // Ctrl+C or terminal issues end the session
        let Ok(Some(choice_label)) = selection else {
            break;
        };

        let Some(choice) = MenuOption::from_label(choice_label) else {
            continue;
        };

        let _ = clear_screen();

        match session.execute(choice) {
            Ok(true) => break,
            Ok(false) => {}
            Err(e) => {
                eprintln!("\nError: {}", e);
                wait_for_continue();
            }
        }
    }

    info!(expats = session.store.len(), "session ended");
    Ok(())
}
