use crate::cli::error::CliResult;
use crate::cli::prompt::Prompter;
use crate::cli::scope::resolve_scope;
use crate::db::{Database, NewTodo, TodoRepository};

/// Add a todo to the project of `cwd`.
pub async fn add_todo<D: Database, P: Prompter>(
    db: &D,
    prompter: &mut P,
    cwd: &str,
    title: String,
    description: Option<String>,
) -> CliResult<String> {
    let project_id = resolve_scope(db, prompter, cwd).await?;

    let todo = db
        .todos()
        .create(&NewTodo {
            title,
            description,
            project_id,
        })
        .await?;

    Ok(format!("Added todo {}: {}", todo.id, todo.title))
}

/// Mark a todo as done
pub async fn complete_todo<D: Database>(db: &D, id: i64) -> CliResult<String> {
    let todo = db.todos().complete(id).await?;
    Ok(format!("Completed todo {}: {}", todo.id, todo.title))
}

/// Delete a single todo
pub async fn remove_todo<D: Database>(db: &D, id: i64) -> CliResult<String> {
    db.todos().delete(id).await?;
    Ok(format!("Deleted todo {}", id))
}
