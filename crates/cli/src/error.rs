use crate::signals::SignalEvent;
use flume::SendError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to install signal handler: {0}")]
    SignalHandler(#[source] io::Error),

    #[error("Failed to send signal event: {0}")]
    SendSignal(#[from] SendError<SignalEvent>),

    #[error("Failed to create snapshot dump {path:?}: {source}")]
    DumpCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write snapshot dump: {0}")]
    DumpWrite(#[from] serde_json::Error),
}
