use clap::{Args, Parser, Subcommand};

pub mod add;
pub mod dashboard;
pub mod delete;
pub mod export;
pub mod list;
pub mod menu;
pub mod ui;
pub mod update;

pub use add::run_add;
pub use dashboard::run_dashboard;
pub use delete::{run_remove, run_remove_command};
pub use export::{run_export, ExportFormat};
pub use list::run_list;
pub use menu::run_menu;
pub use update::{run_edit, run_edit_command};

use crate::engine::ExpatFilter;

#[derive(Parser)]
#[command(name = "expatcmd")]
#[command(about = "Expat onboarding tracker for the command line")]
#[command(version)]
pub struct Cli {
    /// Start with an empty list instead of the example expats
    #[arg(long, global = true)]
    pub empty: bool,

    /// Width of the chart bars in columns
    #[arg(long, global = true, value_name = "COLUMNS")]
    pub width: Option<usize>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show summary, needs chart, status summary and the checklist
    Dashboard(DashboardArgs),
    /// Show the onboarding checklist
    List(ListArgs),
    /// Write expats to stdout as JSON or CSV
    Export(ExportArgs),
    /// Change one field of an expat and print it (not saved)
    Edit(EditArgs),
    /// Remove an expat and print the remaining checklist (not saved)
    Remove(RemoveArgs),
}

/// Checklist filter shared by every subcommand
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Only expats whose name contains this text (case-insensitive)
    #[arg(short, long, default_value = "")]
    pub name: String,
    /// Only expats arriving on this date (YYYY-MM-DD)
    #[arg(short, long, default_value = "")]
    pub date: String,
}

impl FilterArgs {
    pub fn to_filter(&self) -> ExpatFilter {
        ExpatFilter::new(self.name.as_str(), self.date.as_str())
    }
}

#[derive(Args)]
pub struct DashboardArgs {
    #[command(flatten)]
    pub filter: FilterArgs,
    /// Print statistics and matching expats as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub filter: FilterArgs,
}

#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub filter: FilterArgs,
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
    pub format: ExportFormat,
}

#[derive(Args)]
pub struct EditArgs {
    /// Expat id or a unique prefix of it
    pub id: String,
    /// Field to change, e.g. name, arrival-date, sim-card, final-status
    pub field: String,
    /// New value (ordered/not-ordered, in-progress/completed/pending, or text)
    #[arg(allow_hyphen_values = true)]
    pub value: String,
}

#[derive(Args)]
pub struct RemoveArgs {
    /// Expat id or a unique prefix of it
    pub id: String,
    /// Skip confirmation
    #[arg(short, long)]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_dashboard_with_filter() {
        let cli = Cli::try_parse_from(["expatcmd", "dashboard", "-n", "jo", "--json"]).unwrap();
        match cli.command {
            Some(Commands::Dashboard(args)) => {
                assert!(args.json);
                assert_eq!(args.filter.to_filter(), ExpatFilter::new("jo", ""));
            }
            _ => panic!("expected dashboard"),
        }
    }

    #[test]
    fn test_parse_export_format_and_globals() {
        let cli =
            Cli::try_parse_from(["expatcmd", "export", "--format", "csv", "--empty"]).unwrap();
        assert!(cli.empty);
        match cli.command {
            Some(Commands::Export(args)) => assert_eq!(args.format, ExportFormat::Csv),
            _ => panic!("expected export"),
        }
    }

    #[test]
    fn test_parse_edit_and_remove() {
        let cli = Cli::try_parse_from(["expatcmd", "edit", "3f2a", "hotel", "ordered"]).unwrap();
        match cli.command {
            Some(Commands::Edit(args)) => {
                assert_eq!(args.id, "3f2a");
                assert_eq!(args.field, "hotel");
                assert_eq!(args.value, "ordered");
            }
            _ => panic!("expected edit"),
        }

        let cli = Cli::try_parse_from(["expatcmd", "remove", "3f2a", "-f"]).unwrap();
        match cli.command {
            Some(Commands::Remove(args)) => {
                assert_eq!(args.id, "3f2a");
                assert!(args.force);
            }
            _ => panic!("expected remove"),
        }
    }

    #[test]
    fn test_no_subcommand_is_interactive() {
        let cli = Cli::try_parse_from(["expatcmd"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.empty);
    }
}
