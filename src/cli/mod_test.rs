use std::io::Cursor;

use clap::Parser;
use serial_test::serial;

use crate::cli::prompt::LinePrompter;
use crate::cli::{Cli, Commands, ProjectCommands, execute};
use crate::db::{Database, ProjectRepository, SqliteDatabase, TodoRepository};

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

fn parse(args: &[&str]) -> Commands {
    Cli::try_parse_from(args)
        .expect("Arguments should parse")
        .command
        .expect("Command should be present")
}

#[test]
fn full_date_flag_has_short_and_long_forms() {
    for args in [
        ["toto", "list-long", "-D"],
        ["toto", "list-long", "--Full-Date"],
    ] {
        assert!(matches!(
            parse(&args),
            Commands::ListLong {
                full_date: true,
                ..
            }
        ));
    }

    assert!(matches!(
        parse(&["toto", "lsl"]),
        Commands::Lsl {
            full_date: false,
            ..
        }
    ));
}

#[test]
fn reset_confirm_flag() {
    assert!(matches!(
        parse(&["toto", "reset", "-c"]),
        Commands::Reset { confirm: true }
    ));
    assert!(matches!(
        parse(&["toto", "reset", "--confirm"]),
        Commands::Reset { confirm: true }
    ));
    assert!(matches!(
        parse(&["toto", "reset"]),
        Commands::Reset { confirm: false }
    ));
}

#[test]
fn project_delete_accepts_alias_and_negative_ids() {
    assert!(matches!(
        parse(&["toto", "project", "del", "-3"]),
        Commands::Project {
            command: ProjectCommands::Delete { id: -3 }
        }
    ));
}

#[test]
fn global_db_flag_is_accepted_after_subcommand() {
    let cli = Cli::try_parse_from(["toto", "ls", "--db", "/tmp/other.db"]).unwrap();
    assert_eq!(cli.db.unwrap().to_str(), Some("/tmp/other.db"));
}

#[test]
fn list_takes_no_positional_arguments() {
    assert!(Cli::try_parse_from(["toto", "list", "extra"]).is_err());
}

#[tokio::test]
async fn ls_lists_every_project() {
    let db = setup_db().await;
    let mut prompter = answers("");

    let output = execute(&db, &mut prompter, parse(&["toto", "ls"]))
        .await
        .unwrap();
    assert_eq!(output, "No todos found.");
}

#[tokio::test]
#[serial]
async fn list_uses_project_of_current_directory() {
    let db = setup_db().await;
    let dir = tempfile::tempdir().expect("tempdir");
    let original = std::env::current_dir().expect("cwd");
    std::env::set_current_dir(dir.path()).expect("chdir");

    let mut prompter = answers("");
    let created = execute(
        &db,
        &mut prompter,
        parse(&["toto", "project", "add", "Here", "-d", "cwd project"]),
    )
    .await;
    let added = execute(&db, &mut prompter, parse(&["toto", "add", "Local task"])).await;
    let listed = execute(&db, &mut prompter, parse(&["toto", "list"])).await;

    std::env::set_current_dir(original).expect("restore cwd");

    assert_eq!(created.unwrap(), "New project added: Here.");
    assert!(added.is_ok());
    assert!(listed.unwrap().contains("Local task"));

    let project = db.projects().get(2).await.unwrap();
    assert_eq!(db.todos().get(1).await.unwrap().project_id, project.id);
}

#[tokio::test]
async fn reset_via_command_respects_flag() {
    let db = setup_db().await;
    let mut prompter = answers("");

    let output = execute(&db, &mut prompter, parse(&["toto", "reset", "-c"]))
        .await
        .unwrap();
    assert_eq!(output, "Database cleared successfully!");
    assert!(db.projects().list().await.unwrap().is_empty());
}
