use std::error::Error;
use std::path::PathBuf;

use crate::cli::commands::{
    AddArgs, Commands, ConfirmArgs, EditArgs, IdArgs, ListArgs, RmArgs, ThemeArgs, ThemeChoice,
};
use crate::cli::output::{
    ChangedJson, ClearedJson, ThemeJson, ToggleJson, format_screen, format_stats,
};
use crate::cli::prompt::StdioPrompter;
use crate::io::persist;
use crate::io::storage::FileStore;
use crate::model::config::{Config, ThemeMode};
use crate::model::task::TaskId;
use crate::ops::controller::{Controller, Prompter};
use crate::ops::display::TaskRow;
use crate::ops::store::TaskStore;

type CmdResult = Result<(), Box<dyn Error>>;

/// Everything a subcommand needs besides its own arguments
pub struct Context {
    pub json: bool,
    pub data_dir: PathBuf,
    pub config: Config,
}

impl Context {
    fn open_controller(&self) -> Controller {
        let backend = FileStore::new(&self.data_dir);
        Controller::new(TaskStore::open(
            Box::new(backend),
            &self.config.ui.date_format,
        ))
    }
}

pub fn dispatch(command: Commands, ctx: &Context) -> CmdResult {
    tracing::debug!(data_dir = %ctx.data_dir.display(), "running command");
    match command {
        Commands::Add(args) => cmd_add(args, ctx),
        Commands::List(args) => cmd_list(args, ctx),
        Commands::Toggle(args) => cmd_toggle(args, ctx),
        Commands::Edit(args) => cmd_edit(args, ctx),
        Commands::Rm(args) => cmd_rm(args, ctx),
        Commands::Clear(args) => cmd_clear(args, ctx),
        Commands::Stats => cmd_stats(ctx),
        Commands::Theme(args) => cmd_theme(args, ctx),
    }
}

/// Turns an alert into the command's error instead of printing it
struct FailOnAlert<P> {
    inner: P,
    alert: Option<String>,
}

impl<P: Prompter> Prompter for FailOnAlert<P> {
    fn confirm(&mut self, message: &str) -> bool {
        self.inner.confirm(message)
    }

    fn prompt(&mut self, message: &str, default: &str) -> Option<String> {
        self.inner.prompt(message, default)
    }

    fn alert(&mut self, message: &str) {
        self.alert = Some(message.to_string());
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> CmdResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn report_missing(id: TaskId) {
    eprintln!("no task with id {}", id);
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_list(args: ListArgs, ctx: &Context) -> CmdResult {
    let mut controller = ctx.open_controller();
    controller.set_status_filter(args.status);
    controller.set_category_filter(args.category);
    let screen = controller.screen();
    if ctx.json {
        return print_json(&screen);
    }
    for line in format_screen(&screen) {
        println!("{}", line);
    }
    Ok(())
}

fn cmd_stats(ctx: &Context) -> CmdResult {
    let controller = ctx.open_controller();
    let stats = controller.screen().stats;
    if ctx.json {
        return print_json(&stats);
    }
    println!("{}", format_stats(&stats));
    Ok(())
}

// ---------------------------------------------------------------------------
// Write commands
// ---------------------------------------------------------------------------

fn cmd_add(args: AddArgs, ctx: &Context) -> CmdResult {
    let mut controller = ctx.open_controller();
    let text = args.text.join(" ");
    let category = args.category.unwrap_or(ctx.config.ui.default_category);
    let mut ui = FailOnAlert {
        inner: StdioPrompter::stdio(),
        alert: None,
    };

    let Some(id) = controller.submit_new_task(&text, category, &mut ui) else {
        let message = ui
            .alert
            .unwrap_or_else(|| "task was not added".to_string());
        return Err(message.into());
    };

    if ctx.json {
        let task = controller
            .store()
            .get(id)
            .ok_or_else(|| format!("task {} vanished after add", id))?;
        return print_json(&TaskRow::from_task(task));
    }
    println!("{}", id);
    Ok(())
}

fn cmd_toggle(args: IdArgs, ctx: &Context) -> CmdResult {
    let mut controller = ctx.open_controller();
    let Some(completed) = controller.toggle(args.id) else {
        report_missing(args.id);
        return Ok(());
    };
    if ctx.json {
        return print_json(&ToggleJson {
            id: args.id,
            completed,
        });
    }
    let state = if completed { "completed" } else { "pending" };
    println!("{} {}", args.id, state);
    Ok(())
}

fn cmd_edit(args: EditArgs, ctx: &Context) -> CmdResult {
    let mut controller = ctx.open_controller();
    if controller.store().get(args.id).is_none() {
        report_missing(args.id);
        return Ok(());
    }
    let reply = if args.text.is_empty() {
        None
    } else {
        Some(args.text.join(" "))
    };
    let mut ui = StdioPrompter::stdio().with_reply(reply);
    let changed = controller.request_edit(args.id, &mut ui);
    print_changed(args.id, changed, "edited", ctx)
}

fn cmd_rm(args: RmArgs, ctx: &Context) -> CmdResult {
    let mut controller = ctx.open_controller();
    if controller.store().get(args.id).is_none() {
        report_missing(args.id);
        return Ok(());
    }
    let mut ui = StdioPrompter::stdio().assume_yes(args.confirm.yes);
    let changed = controller.request_delete(args.id, &mut ui);
    print_changed(args.id, changed, "deleted", ctx)
}

fn print_changed(id: TaskId, changed: bool, verb: &str, ctx: &Context) -> CmdResult {
    if ctx.json {
        return print_json(&ChangedJson { id, changed });
    }
    if changed {
        println!("{} {}", verb, id);
    } else {
        println!("unchanged {}", id);
    }
    Ok(())
}

fn cmd_clear(args: ConfirmArgs, ctx: &Context) -> CmdResult {
    let mut controller = ctx.open_controller();
    let mut ui = StdioPrompter::stdio().assume_yes(args.yes);
    let removed = controller.request_clear_completed(&mut ui);
    if ctx.json {
        return print_json(&ClearedJson { removed });
    }
    if removed > 0 {
        println!("cleared {} task(s)", removed);
    }
    Ok(())
}

fn cmd_theme(args: ThemeArgs, ctx: &Context) -> CmdResult {
    let mut backend = FileStore::new(&ctx.data_dir);
    let current = persist::load_theme(&backend);
    let theme = match args.mode {
        None => current,
        Some(choice) => {
            let next = match choice {
                ThemeChoice::Dark => ThemeMode::Dark,
                ThemeChoice::Light => ThemeMode::Light,
                ThemeChoice::Toggle => current.toggled(),
            };
            persist::save_theme(&mut backend, next)?;
            next
        }
    };
    if ctx.json {
        return print_json(&ThemeJson { theme });
    }
    println!("{}", theme);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::Category;
    use tempfile::TempDir;

    fn ctx(dir: &TempDir) -> Context {
        Context {
            json: false,
            data_dir: dir.path().to_path_buf(),
            config: Config::default(),
        }
    }

    #[test]
    fn fail_on_alert_captures_message() {
        let dir = TempDir::new().unwrap();
        let mut controller = ctx(&dir).open_controller();
        let mut ui = FailOnAlert {
            inner: StdioPrompter::new(std::io::empty(), std::io::sink()),
            alert: None,
        };
        assert_eq!(controller.submit_new_task("  ", Category::Work, &mut ui), None);
        assert_eq!(ui.alert.as_deref(), Some("Please enter a task!"));
    }

    #[test]
    fn controller_reads_what_an_earlier_command_wrote() {
        let dir = TempDir::new().unwrap();
        let context = ctx(&dir);
        let mut first = context.open_controller();
        let mut ui = StdioPrompter::new(std::io::empty(), std::io::sink());
        let id = first
            .submit_new_task("Buy milk", Category::General, &mut ui)
            .unwrap();

        let second = context.open_controller();
        assert_eq!(second.store().get(id).map(|t| t.text.as_str()), Some("Buy milk"));
    }

    #[test]
    fn theme_command_persists_choice() {
        let dir = TempDir::new().unwrap();
        let context = ctx(&dir);
        cmd_theme(
            ThemeArgs {
                mode: Some(ThemeChoice::Toggle),
            },
            &context,
        )
        .unwrap();
        assert_eq!(
            persist::load_theme(&FileStore::new(dir.path())),
            ThemeMode::Light
        );
    }
}
