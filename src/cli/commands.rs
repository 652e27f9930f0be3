use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::model::filter::{CategoryFilter, StatusFilter};
use crate::model::task::{Category, TaskId};

#[derive(Parser)]
#[command(name = "tick", about = concat!("[x] tick v", env!("CARGO_PKG_VERSION"), " - a small local task list"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Keep tasks in a different directory
    #[arg(short = 'C', long = "data-dir", env = "TICK_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Read configuration from this file instead of the default location
    #[arg(long, env = "TICK_CONFIG", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a task
    Add(AddArgs),
    /// List tasks, optionally filtered
    List(ListArgs),
    /// Flip a task between pending and completed
    Toggle(IdArgs),
    /// Change a task's text (prompts when no text is given)
    Edit(EditArgs),
    /// Delete a task
    Rm(RmArgs),
    /// Delete all completed tasks
    Clear(ConfirmArgs),
    /// Show total, completed and pending counts
    Stats,
    /// Show or change the saved theme
    Theme(ThemeArgs),
}

#[derive(Args)]
pub struct AddArgs {
    /// Task text (words are joined with spaces)
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
    /// Category: general, work, school (default: from config)
    #[arg(long, short = 'c', value_parser = parse_category)]
    pub category: Option<Category>,
}

#[derive(Args)]
pub struct ListArgs {
    /// Status filter: all, completed, pending
    #[arg(long, short = 's', default_value = "all", value_parser = parse_status)]
    pub status: StatusFilter,
    /// Category filter: all, general, work, school
    #[arg(long, short = 'c', default_value = "all", value_parser = parse_category_filter)]
    pub category: CategoryFilter,
}

#[derive(Args)]
pub struct IdArgs {
    /// Task id
    #[arg(value_parser = parse_id)]
    pub id: TaskId,
}

#[derive(Args)]
pub struct EditArgs {
    /// Task id
    #[arg(value_parser = parse_id)]
    pub id: TaskId,
    /// New text; prompts with the current text when omitted
    pub text: Vec<String>,
}

#[derive(Args)]
pub struct RmArgs {
    /// Task id
    #[arg(value_parser = parse_id)]
    pub id: TaskId,
    #[command(flatten)]
    pub confirm: ConfirmArgs,
}

#[derive(Args)]
pub struct ConfirmArgs {
    /// Don't ask for confirmation
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(Args)]
pub struct ThemeArgs {
    /// New theme; prints the current one when omitted
    pub mode: Option<ThemeChoice>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeChoice {
    Dark,
    Light,
    Toggle,
}

fn parse_category(s: &str) -> Result<Category, String> {
    s.parse()
}

fn parse_category_filter(s: &str) -> Result<CategoryFilter, String> {
    s.parse()
}

fn parse_status(s: &str) -> Result<StatusFilter, String> {
    s.parse()
}

fn parse_id(s: &str) -> Result<TaskId, String> {
    s.parse()
        .map_err(|_| format!("invalid task id '{}' (expected a number)", s))
}
