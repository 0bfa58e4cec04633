use tracing::warn;

use crate::cli::error::{CliError, CliResult};
use crate::cli::prompt::{Prompter, is_affirmative};
use crate::db::Database;

pub const RESET_PROMPT: &str = "You are about to remove all data from the database. Please confirm that you want to continue (y/N): ";

/// Wipe every project and todo and restart ids at 1.
///
/// Unless `confirmed`, the user must answer `y` or `yes`; any other answer
/// cancels before anything is touched.
pub async fn reset<D: Database, P: Prompter>(
    db: &D,
    prompter: &mut P,
    confirmed: bool,
) -> CliResult<String> {
    if !confirmed && !is_affirmative(&prompter.ask(RESET_PROMPT)?) {
        return Err(CliError::UserCancelled);
    }

    warn!("resetting database");
    db.reset().await?;
    Ok("Database cleared successfully!".to_string())
}
