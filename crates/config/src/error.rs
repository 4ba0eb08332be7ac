#![forbid(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to extract configuration: {0}")]
    Figment(#[from] Box<figment::Error>),

    #[error("failed to serialize TOML: {0}")]
    TomlSer(#[from] toml_edit::ser::Error),

    #[error("invalid path: {0}")]
    InvalidPath(PathBuf),

    #[error("invalid value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}
