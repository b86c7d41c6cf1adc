use clap::{Args, Parser, Subcommand};

use crate::prompt::InvalidInputPolicy;

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Ask for a book's structure and create one Todoist task per section.
    Create(CreateArgs),
    /// Ask for a book's structure and print the task labels without sending them.
    Plan(PlanArgs),
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Todoist REST API base URL (default: `TODOIST_API_BASE_URL` or the public API).
    #[arg(long)]
    pub api_base_url: Option<String>,

    /// Maximum concurrent task-creation requests.
    #[arg(long, default_value_t = 8)]
    pub concurrency: usize,

    /// Per-request timeout.
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// What to do when a count is not a non-negative integer.
    #[arg(long, value_enum, default_value_t = InvalidInputPolicy::Fail)]
    pub on_invalid_input: InvalidInputPolicy,
}

#[derive(Debug, Args)]
pub struct PlanArgs {
    /// What to do when a count is not a non-negative integer.
    #[arg(long, value_enum, default_value_t = InvalidInputPolicy::Fail)]
    pub on_invalid_input: InvalidInputPolicy,
}
