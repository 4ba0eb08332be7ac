#![forbid(unsafe_code)]

pub mod clock;
pub mod entropy;
pub mod error;
pub mod session;
pub mod simulator;
pub mod summarizer;

pub use clock::{Clock, SystemClock};
pub use error::Error;
pub use session::{Session, SessionManager, initial_snapshot};
pub use simulator::{LiveUpdateSimulator, SharedSnapshot, TickRule};
pub use summarizer::{LogAnalyst, SummarizationUnavailable, Summarizer};
