use thiserror::Error;

#[derive(Debug, Error)]
pub enum OpenSpecError {
    #[error("unknown slash command '{0}': expected proposal, apply, archive, research, or audit")]
    UnknownCommand(String),

    #[error("unknown tool: {0}")]
    UnknownTool(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, OpenSpecError>;
