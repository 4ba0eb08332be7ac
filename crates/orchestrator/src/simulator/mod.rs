#![forbid(unsafe_code)]

mod rules;
mod runner;
mod shared;
pub mod tick;

pub use rules::{LiveTail, MetricsJitter, TickRule};
pub use runner::LiveUpdateSimulator;
pub use shared::SharedSnapshot;
