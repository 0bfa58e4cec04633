use tabled::{Table, Tabled};

use crate::cli::error::CliResult;
use crate::cli::prompt::Prompter;
use crate::cli::utils::{apply_table_style, format_optional, truncate_with_ellipsis};
use crate::db::{Database, NewProject, Project, ProjectRepository};

pub const TITLE_PROMPT: &str = "Please enter the title of your new project...\n";
pub const DESCRIPTION_PROMPT: &str = "Please enter the description of your new project...\n";

#[derive(Tabled)]
struct ProjectDisplay {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Filepath")]
    filepath: String,
    #[tabled(rename = "Created At")]
    created_at: String,
}

impl From<&Project> for ProjectDisplay {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id,
            title: truncate_with_ellipsis(&project.title, 40),
            description: format_optional(
                project
                    .description
                    .as_deref()
                    .map(|d| truncate_with_ellipsis(d, 50))
                    .as_deref(),
            ),
            filepath: if project.is_global() {
                "(global)".to_string()
            } else {
                project.filepath.clone()
            },
            created_at: project.created_at.format("%d-%m-%Y").to_string(),
        }
    }
}

/// Create a project from already-gathered input.
pub async fn add_project<D: Database>(db: &D, project: NewProject) -> CliResult<String> {
    let created = db.projects().create(&project).await?;
    Ok(format!("New project added: {}.", created.title))
}

/// Fill in a missing title or description by asking the user.
pub fn prompt_project_details<P: Prompter>(
    prompter: &mut P,
    title: Option<String>,
    description: Option<String>,
) -> std::io::Result<(String, Option<String>)> {
    let title = match title.filter(|t| !t.trim().is_empty()) {
        Some(title) => title,
        None => prompter.ask(TITLE_PROMPT)?,
    };

    let description = match description {
        Some(description) => Some(description),
        None => Some(prompter.ask(DESCRIPTION_PROMPT)?),
    };

    Ok((title, description))
}

/// Create a project, prompting for any missing title or description.
pub async fn create_project_interactive<D: Database, P: Prompter>(
    db: &D,
    prompter: &mut P,
    title: Option<String>,
    description: Option<String>,
    filepath: Option<&str>,
) -> CliResult<Project> {
    let (title, description) = prompt_project_details(prompter, title, description)?;

    let project = db
        .projects()
        .create(&NewProject {
            title,
            description,
            archived: false,
            filepath: filepath.map(str::to_string),
        })
        .await?;

    Ok(project)
}

/// `project add`: interactive when no title is given.
pub async fn add_project_interactive<D: Database, P: Prompter>(
    db: &D,
    prompter: &mut P,
    title: Option<String>,
    description: Option<String>,
    filepath: Option<&str>,
) -> CliResult<String> {
    let project = create_project_interactive(db, prompter, title, description, filepath).await?;
    Ok(format!("New project added: {}.", project.title))
}

/// List every project
pub async fn list_projects<D: Database>(db: &D, format: &str) -> CliResult<String> {
    let projects = db.projects().list().await?;

    match format {
        "json" => Ok(serde_json::to_string_pretty(&projects)?),
        _ => Ok(format_table(&projects)),
    }
}

fn format_table(projects: &[Project]) -> String {
    if projects.is_empty() {
        return "No projects found.".to_string();
    }

    let display_projects: Vec<ProjectDisplay> = projects.iter().map(|p| p.into()).collect();
    let mut table = Table::new(display_projects);
    apply_table_style(&mut table);
    table.to_string()
}

/// Delete a project together with all of its todos
pub async fn delete_project<D: Database>(db: &D, id: i64) -> CliResult<String> {
    let removed = db.projects().delete(id).await?;
    Ok(format!(
        "Project with ID {} and all associated todos ({}) deleted successfully.",
        id, removed
    ))
}
