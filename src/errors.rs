use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("missing ':' in line: {0}")]
    MissingSeparator(String),

    #[error("parent name {0:?} not found in tree")]
    ParentNotFound(String),

    #[error("unknown person: {0}")]
    UnknownPerson(String),

    #[error("failed to read lineage file: {0}")]
    FileReadError(#[from] std::io::Error),
}

pub type TreeResult<T> = Result<T, TreeError>;
