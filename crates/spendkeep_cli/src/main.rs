//! `spendkeep` command-line front end.
//!
//! # Responsibility
//! - Map subcommands onto `ExpenseTracker` / `Keeper` operations.
//! - Ask for confirmation before destructive actions unless `--yes`.
//! - Print notices and view models as plain text.

mod config;

use clap::{Args, Parser, Subcommand};
use config::{Config, DEFAULT_CONFIG_FILE};
use log::{info, warn};
use spendkeep_core::db::open_db;
use spendkeep_core::{
    init_logging, BreakdownDisplay, CategoryFilter, Clock, Confirmation, ExpenseForm, ExpenseId,
    ExpenseListView, ExpenseTracker, Keeper, KeeperView, KeyValueStore, Notice, NoticeLevel,
    NoteId, SqliteKeyValueStore, SystemClock, Theme,
};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "spendkeep",
    version,
    about = "Expense tracker and note keeper on a local slot store"
)]
struct Cli {
    /// Path to config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Database file (overrides config file)
    #[arg(long)]
    db: Option<PathBuf>,

    /// Log level (overrides config file)
    #[arg(short, long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Expense tracker commands
    #[command(subcommand)]
    Expense(ExpenseCommand),
    /// Note keeper commands
    #[command(subcommand)]
    Note(NoteCommand),
}

#[derive(Subcommand, Debug)]
enum ExpenseCommand {
    /// Add an expense
    Add(ExpenseFields),
    /// Edit an expense; omitted fields keep their current value
    Edit {
        id: String,
        #[command(flatten)]
        fields: ExpenseEdits,
    },
    /// Delete one expense
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Delete every expense
    DeleteAll {
        #[arg(long)]
        yes: bool,
    },
    /// List expenses, newest first
    List {
        /// Category name or `all`
        #[arg(long, default_value = "all")]
        category: CategoryFilter,
    },
    /// Show aggregate statistics
    Stats,
    /// Write all expenses to a dated JSON file
    Export {
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Merge expenses from a JSON file
    Import { file: PathBuf },
    /// Show or set the theme preference
    Theme { theme: Option<Theme> },
}

#[derive(Args, Debug)]
struct ExpenseFields {
    #[arg(long)]
    name: String,
    #[arg(long)]
    amount: String,
    #[arg(long)]
    category: String,
    /// YYYY-MM-DD, defaults to today
    #[arg(long)]
    date: Option<String>,
    #[arg(long, default_value = "")]
    notes: String,
}

#[derive(Args, Debug)]
struct ExpenseEdits {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    amount: Option<String>,
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    date: Option<String>,
    #[arg(long)]
    notes: Option<String>,
}

#[derive(Subcommand, Debug)]
enum NoteCommand {
    /// Add a note
    Add {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        content: String,
    },
    /// Delete a note by id
    Delete { id: i64 },
    /// List notes, optionally filtered by a search string
    List {
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Show the theme, or flip it with --toggle
    Theme {
        #[arg(long)]
        toggle: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, String> {
    let config = Config::load(&cli.config)?;
    let cwd = std::env::current_dir().map_err(|err| format!("cannot read cwd: {err}"))?;
    let level = cli.log_level.unwrap_or_else(|| config.logging.level.clone());
    if let Err(err) = init_logging(&level, config.log_dir(&cwd)) {
        eprintln!("warning: logging disabled: {err}");
    }

    let db_path = cli.db.unwrap_or_else(|| config.storage.path.clone());
    let conn = open_db(&db_path)
        .map_err(|err| format!("cannot open `{}`: {err}", db_path.display()))?;
    let store = SqliteKeyValueStore::new(&conn);

    match cli.command {
        Command::Expense(command) => {
            let tracker =
                ExpenseTracker::load(store, SystemClock).map_err(|err| err.to_string())?;
            run_expense(tracker, command)
        }
        Command::Note(command) => {
            let keeper = Keeper::load(store, SystemClock).map_err(|err| err.to_string())?;
            run_note(keeper, command)
        }
    }
}

fn run_expense<C: Clock>(
    mut tracker: ExpenseTracker<SqliteKeyValueStore<'_>, C>,
    command: ExpenseCommand,
) -> Result<ExitCode, String> {
    let notice = match command {
        ExpenseCommand::Add(fields) => {
            let mut form = tracker.clear_form();
            form.name = fields.name;
            form.amount = fields.amount;
            form.category = fields.category;
            if let Some(date) = fields.date {
                form.date = date;
            }
            form.notes = fields.notes;
            tracker.submit(&form).map_err(|err| err.to_string())?
        }
        ExpenseCommand::Edit { id, fields } => {
            let Some(session) = tracker.begin_edit(&ExpenseId(id.clone())) else {
                return Ok(report(&Notice::warning(format!("Expense `{id}` not found"))));
            };
            let form = apply_edits(session.form, fields);
            tracker.submit(&form).map_err(|err| err.to_string())?
        }
        ExpenseCommand::Delete { id, yes } => {
            let confirmation = tracker.request_delete(ExpenseId(id));
            if !confirm_or_cancel(&confirmation, yes)? {
                return Ok(ExitCode::SUCCESS);
            }
            tracker.confirm(confirmation).map_err(|err| err.to_string())?
        }
        ExpenseCommand::DeleteAll { yes } => match tracker.request_delete_all() {
            Ok(confirmation) => {
                if !confirm_or_cancel(&confirmation, yes)? {
                    return Ok(ExitCode::SUCCESS);
                }
                tracker.confirm(confirmation).map_err(|err| err.to_string())?
            }
            Err(refused) => refused,
        },
        ExpenseCommand::List { category } => {
            print_expense_list(&tracker.list(category));
            return Ok(ExitCode::SUCCESS);
        }
        ExpenseCommand::Stats => {
            print_stats(&tracker);
            return Ok(ExitCode::SUCCESS);
        }
        ExpenseCommand::Export { out_dir } => {
            let export = tracker.export().map_err(|err| err.to_string())?;
            if let Some(file) = export.file {
                let path = out_dir.join(&file.file_name);
                std::fs::write(&path, file.contents)
                    .map_err(|err| format!("cannot write `{}`: {err}", path.display()))?;
                info!(
                    "event=export_written module=cli status=ok path={}",
                    path.display()
                );
                println!("{}", path.display());
            }
            export.notice
        }
        ExpenseCommand::Import { file } => match std::fs::read_to_string(&file) {
            Ok(payload) => tracker.import(&payload).map_err(|err| err.to_string())?,
            Err(err) => {
                warn!("event=import_read module=cli status=error error={err}");
                Notice::error("Error importing file. Please check the file format.")
            }
        },
        ExpenseCommand::Theme { theme } => {
            if let Some(theme) = theme {
                tracker.set_theme(theme).map_err(|err| err.to_string())?;
            }
            println!("{}", tracker.theme());
            return Ok(ExitCode::SUCCESS);
        }
    };

    Ok(report(&notice))
}

fn run_note<C: Clock>(
    mut keeper: Keeper<SqliteKeyValueStore<'_>, C>,
    command: NoteCommand,
) -> Result<ExitCode, String> {
    match command {
        NoteCommand::Add { title, content } => {
            match keeper.add(&title, &content).map_err(|err| err.to_string())? {
                Some(note) => println!("{}", note.id),
                None => println!("nothing to add"),
            }
        }
        NoteCommand::Delete { id } => {
            let notice = delete_note(&mut keeper, NoteId(id))?;
            return Ok(report(&notice));
        }
        NoteCommand::List { search } => print_notes(&keeper.view(&search)),
        NoteCommand::Theme { toggle } => {
            if toggle {
                keeper.toggle_theme().map_err(|err| err.to_string())?;
            }
            println!("{}", keeper.theme());
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn delete_note<S: KeyValueStore, C: Clock>(
    keeper: &mut Keeper<S, C>,
    id: NoteId,
) -> Result<Notice, String> {
    if keeper.delete(id).map_err(|err| err.to_string())? {
        Ok(Notice::success("Note deleted"))
    } else {
        Ok(Notice::warning(format!("Note `{id}` not found")))
    }
}

fn apply_edits(mut form: ExpenseForm, edits: ExpenseEdits) -> ExpenseForm {
    if let Some(name) = edits.name {
        form.name = name;
    }
    if let Some(amount) = edits.amount {
        form.amount = amount;
    }
    if let Some(category) = edits.category {
        form.category = category;
    }
    if let Some(date) = edits.date {
        form.date = date;
    }
    if let Some(notes) = edits.notes {
        form.notes = notes;
    }
    form
}

fn confirm_or_cancel(confirmation: &Confirmation, assume_yes: bool) -> Result<bool, String> {
    if assume_yes {
        return Ok(true);
    }
    print!("{} [y/N] ", confirmation.prompt());
    std::io::stdout()
        .flush()
        .map_err(|err| format!("cannot write prompt: {err}"))?;
    let mut answer = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut answer)
        .map_err(|err| format!("cannot read answer: {err}"))?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

fn report(notice: &Notice) -> ExitCode {
    match notice.level {
        NoticeLevel::Error => {
            eprintln!("{notice}");
            ExitCode::FAILURE
        }
        _ => {
            println!("{notice}");
            ExitCode::SUCCESS
        }
    }
}

fn print_expense_list(view: &ExpenseListView) {
    match view {
        ExpenseListView::Empty { title, hint } => println!("{title}\n{hint}"),
        ExpenseListView::Rows(rows) => {
            for row in rows {
                let notes = row
                    .notes
                    .as_deref()
                    .map(|notes| format!("  {notes}"))
                    .unwrap_or_default();
                println!(
                    "{}  {}  {} [{}]  ₹ {}{notes}",
                    row.id, row.date, row.name, row.category, row.amount
                );
            }
        }
    }
}

fn print_stats<C: Clock>(tracker: &ExpenseTracker<SqliteKeyValueStore<'_>, C>) {
    let display = tracker.stats().display();
    println!("Total:          {}", display.total);
    println!("Transactions:   {}", display.transaction_count);
    println!("Today:          {}", display.today_total);
    println!("Last 7 days:    {}", display.week_total);
    println!("Average/day:    {}", display.average_per_day);
    println!("Top category:   {}", display.top_category);
    match display.breakdown {
        BreakdownDisplay::Empty { message } => println!("{message}"),
        BreakdownDisplay::Rows(rows) => {
            for row in rows {
                println!(
                    "  {:<14} {:>14} {:>7}",
                    row.category, row.amount, row.percentage
                );
            }
        }
    }
}

fn print_notes(view: &KeeperView) {
    for card in &view.cards {
        println!("#{} {} ({})", card.id, card.title, card.date);
        if !card.content.is_empty() {
            println!("    {}", card.content);
        }
    }
    println!("theme: {} [{}]", view.theme, view.theme_toggle_label);
}
