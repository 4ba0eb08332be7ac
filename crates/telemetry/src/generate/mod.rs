#![forbid(unsafe_code)]

mod alerts;
mod logs;
pub mod phrases;
mod series;
mod services;

pub use alerts::AlertSeeder;
pub use logs::{BACKLOG_WINDOW_MS, LogStreamGenerator};
pub use series::traffic_series;
pub use services::ServiceSnapshotGenerator;
