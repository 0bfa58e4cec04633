use std::io::Cursor;

use crate::cli::error::CliError;
use crate::cli::prompt::LinePrompter;
use crate::cli::scope::*;
use crate::db::{
    Database, DbError, GLOBAL_PROJECT_ID, NewProject, ProjectRepository, SqliteDatabase,
};

async fn setup_db() -> SqliteDatabase {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().await.expect("Migration should succeed");
    db
}

fn answers(input: &str) -> LinePrompter<Cursor<String>, Vec<u8>> {
    LinePrompter::new(Cursor::new(input.to_string()), Vec::new())
}

#[test]
fn fallback_choice_parsing() {
    assert_eq!(FallbackChoice::parse("1"), FallbackChoice::Global);
    assert_eq!(FallbackChoice::parse(" 2 "), FallbackChoice::CreateProject);
    assert_eq!(FallbackChoice::parse("0"), FallbackChoice::Cancel);
    assert_eq!(FallbackChoice::parse(""), FallbackChoice::Cancel);
    assert_eq!(FallbackChoice::parse("global"), FallbackChoice::Cancel);
}

#[tokio::test]
async fn resolve_current_project_matches_filepath() {
    let db = setup_db().await;
    let project = db
        .projects()
        .create(&NewProject {
            title: "Work".to_string(),
            filepath: Some("/home/user/work".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    let resolved = resolve_current_project(&db, "/home/user/work").await.unwrap();
    assert_eq!(resolved.id, project.id);

    let missing = resolve_current_project(&db, "/home/user").await;
    assert!(matches!(missing, Err(DbError::NotFound { .. })));
}

#[tokio::test]
async fn resolve_scope_does_not_prompt_when_project_exists() {
    let db = setup_db().await;
    let project = db
        .projects()
        .create(&NewProject {
            title: "Work".to_string(),
            filepath: Some("/work".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    let mut prompter = answers("");

    let id = resolve_scope(&db, &mut prompter, "/work").await.unwrap();
    assert_eq!(id, project.id);
    assert!(prompter.into_writer().is_empty());
}

#[tokio::test]
async fn resolve_scope_cancel_is_user_cancelled() {
    let db = setup_db().await;
    let mut prompter = answers("0\n");

    let err = resolve_scope(&db, &mut prompter, "/nowhere")
        .await
        .expect_err("Cancelled");
    assert!(matches!(err, CliError::UserCancelled));
}

#[tokio::test]
async fn resolve_scope_falls_back_to_global_project() {
    let db = setup_db().await;
    db.reset().await.unwrap();
    let mut prompter = answers("1\n");

    let id = resolve_scope(&db, &mut prompter, "/nowhere").await.unwrap();
    assert_eq!(id, GLOBAL_PROJECT_ID);
    assert!(db.projects().get(GLOBAL_PROJECT_ID).await.is_ok());
}

#[tokio::test]
async fn resolve_scope_creates_project_for_directory() {
    let db = setup_db().await;
    let mut prompter = answers("2\nSide project\nweekend hacking\n");

    let id = resolve_scope(&db, &mut prompter, "/side").await.unwrap();

    let project = db.projects().get(id).await.unwrap();
    assert_eq!(project.title, "Side project");
    assert_eq!(project.description.as_deref(), Some("weekend hacking"));
    assert_eq!(project.filepath, "/side");
}

#[tokio::test]
async fn resolve_scope_surfaces_ambiguous_directories() {
    let db = setup_db().await;
    for title in ["One", "Two"] {
        db.projects()
            .create(&NewProject {
                title: title.to_string(),
                filepath: Some("/dup".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
    }
    let mut prompter = answers("1\n");

    let err = resolve_scope(&db, &mut prompter, "/dup").await.expect_err("Ambiguous");
    assert!(matches!(
        err,
        CliError::Db(DbError::AmbiguousProject { .. })
    ));
}
