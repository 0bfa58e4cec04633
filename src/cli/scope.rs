//! Resolution of the current directory to a project.

use tracing::debug;

use crate::cli::commands::project::create_project_interactive;
use crate::cli::error::{CliError, CliResult};
use crate::cli::prompt::Prompter;
use crate::db::{Database, DbError, DbResult, Project, ProjectRepository};

pub const NO_PROJECT_PROMPT: &str = "There is currently no project for this filepath.
Would you like to
  0 - Cancel
  1 - Add to the global todo list?
  OR
  2 - Create a new project for this filepath?
> ";

/// What to do when the current directory has no project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackChoice {
    Cancel,
    Global,
    CreateProject,
}

impl FallbackChoice {
    /// `1` picks the global list, `2` creates a project, anything else cancels.
    pub fn parse(answer: &str) -> Self {
        match answer.trim() {
            "1" => FallbackChoice::Global,
            "2" => FallbackChoice::CreateProject,
            _ => FallbackChoice::Cancel,
        }
    }
}

/// Look up the project stored for `cwd` (exact string match).
pub async fn resolve_current_project<D: Database>(db: &D, cwd: &str) -> DbResult<Project> {
    db.projects().find_by_filepath(cwd).await
}

/// Resolve `cwd` to a project id, asking the user what to do when no
/// project matches.
pub async fn resolve_scope<D: Database, P: Prompter>(
    db: &D,
    prompter: &mut P,
    cwd: &str,
) -> CliResult<i64> {
    match resolve_current_project(db, cwd).await {
        Ok(project) => Ok(project.id),
        Err(DbError::NotFound { .. }) => {
            let choice = FallbackChoice::parse(&prompter.ask(NO_PROJECT_PROMPT)?);
            debug!(?choice, %cwd, "no project for directory");

            match choice {
                FallbackChoice::Cancel => Err(CliError::UserCancelled),
                FallbackChoice::Global => Ok(db.projects().ensure_global().await?.id),
                FallbackChoice::CreateProject => {
                    let project =
                        create_project_interactive(db, prompter, None, None, Some(cwd)).await?;
                    Ok(project.id)
                }
            }
        }
        Err(e) => Err(e.into()),
    }
}
