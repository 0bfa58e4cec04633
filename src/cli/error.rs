use miette::Diagnostic;
use thiserror::Error;

use crate::db::DbError;

#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Db(#[from] DbError),

    #[error("Failed to read input: {0}")]
    #[diagnostic(code(toto::cli::io))]
    Io(#[from] std::io::Error),

    #[error("Failed to render output: {message}")]
    #[diagnostic(code(toto::cli::output))]
    Output { message: String },

    /// The user declined a prompt. Not a failure: the runner reports it and
    /// exits normally.
    #[error("Operation cancelled by user")]
    #[diagnostic(code(toto::cli::cancelled))]
    UserCancelled,
}

impl CliError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, CliError::UserCancelled)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Output {
            message: e.to_string(),
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
