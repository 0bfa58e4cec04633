pub mod commands;
pub mod error;
pub mod prompt;
pub mod scope;
pub mod utils;

use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::resolve_db_path;
use crate::db::utils::current_dir_string;
use crate::db::{Database, SqliteDatabase, TodoScope};
use error::CliResult;
use prompt::{LinePrompter, Prompter};
use utils::DateFormat;

#[derive(Parser)]
#[command(name = "toto")]
#[command(author, version, about = "Directory-scoped todo list", long_about = None)]
pub struct Cli {
    /// Database file (default: TOTO_DB env or ~/.local/share/toto/toto.db)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// List todo's for the current project (defined by the current directory)
    List {
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// List todo's across every project
    Ls {
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// List todo's with more data for the current project
    #[command(name = "list-long")]
    ListLong {
        /// Return the dates as full timestamps
        #[arg(short = 'D', long = "Full-Date")]
        full_date: bool,
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// List todo's with more data across every project
    Lsl {
        /// Return the dates as full timestamps
        #[arg(short = 'D', long = "Full-Date")]
        full_date: bool,
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Add a todo to the current project
    Add {
        /// Todo title
        title: String,
        /// Todo description
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Mark a todo as done
    Done {
        /// Todo ID
        id: i64,
    },
    /// Delete a todo
    Rm {
        /// Todo ID
        id: i64,
    },
    /// Reset the database, remove all existing todos and set the ids back to 1
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        confirm: bool,
    },
    /// Manage projects
    Project {
        #[command(subcommand)]
        command: ProjectCommands,
    },
}

#[derive(Subcommand, Debug)]
pub(crate) enum ProjectCommands {
    /// Create a project (prompts for anything not given)
    Add {
        /// Project title
        title: Option<String>,
        /// Project description
        #[arg(short, long)]
        description: Option<String>,
        /// Directory the project belongs to (default: current directory)
        #[arg(long)]
        path: Option<String>,
    },
    /// List projects
    #[command(visible_alias = "ls")]
    List {
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Delete a project and all of its todos
    #[command(visible_alias = "del")]
    Delete {
        /// Project ID
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },
}

/// Initialize tracing subscriber with env filter, writing to stderr.
fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env("TOTO_LOG")
                .unwrap_or_else(|_| "toto=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Run one command against `db`, reading answers from `prompter`.
pub(crate) async fn execute<D: Database, P: Prompter>(
    db: &D,
    prompter: &mut P,
    command: Commands,
) -> CliResult<String> {
    debug!(?command, "executing command");

    match command {
        Commands::List { format } => {
            let project_id = scope::resolve_scope(db, prompter, &current_dir_string()?).await?;
            commands::list::list_todos(db, TodoScope::Project(project_id), &format).await
        }
        Commands::Ls { format } => commands::list::list_todos(db, TodoScope::All, &format).await,
        Commands::ListLong { full_date, format } => {
            let project_id = scope::resolve_scope(db, prompter, &current_dir_string()?).await?;
            commands::list::list_todos_long(
                db,
                TodoScope::Project(project_id),
                DateFormat::from_full_flag(full_date),
                &format,
            )
            .await
        }
        Commands::Lsl { full_date, format } => {
            commands::list::list_todos_long(
                db,
                TodoScope::All,
                DateFormat::from_full_flag(full_date),
                &format,
            )
            .await
        }
        Commands::Add { title, description } => {
            let cwd = current_dir_string()?;
            commands::todo::add_todo(db, prompter, &cwd, title, description).await
        }
        Commands::Done { id } => commands::todo::complete_todo(db, id).await,
        Commands::Rm { id } => commands::todo::remove_todo(db, id).await,
        Commands::Reset { confirm } => commands::reset::reset(db, prompter, confirm).await,
        Commands::Project { command } => match command {
            ProjectCommands::Add {
                title: Some(title),
                description,
                path,
            } => {
                commands::project::add_project(
                    db,
                    crate::db::NewProject {
                        title,
                        description,
                        archived: false,
                        filepath: path,
                    },
                )
                .await
            }
            ProjectCommands::Add {
                title: None,
                description,
                path,
            } => {
                commands::project::add_project_interactive(
                    db,
                    prompter,
                    None,
                    description,
                    path.as_deref(),
                )
                .await
            }
            ProjectCommands::List { format } => {
                commands::project::list_projects(db, &format).await
            }
            ProjectCommands::Delete { id } => commands::project::delete_project(db, id).await,
        },
    }
}

/// Print a command outcome. Cancellation is reported but is not a failure.
fn report(result: CliResult<String>) {
    match result {
        Ok(output) => println!("{}", output),
        Err(e) if e.is_cancelled() => println!("Operation cancelled. Aborting!"),
        Err(e) => println!("Error: {}", e),
    }
}

pub async fn run() -> CliResult<()> {
    let cli = Cli::parse();
    init_tracing();

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let db_path = resolve_db_path(cli.db);
    debug!(path = %db_path.display(), "using database");

    let db = SqliteDatabase::open(&db_path).await?;
    db.migrate().await?;

    let mut prompter = LinePrompter::stdio();
    report(execute(&db, &mut prompter, command).await);
    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

#[cfg(test)]
#[path = "scope_test.rs"]
mod scope_test;

#[cfg(test)]
#[path = "utils_test.rs"]
mod utils_test;
