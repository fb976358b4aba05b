mod config;
mod coordinator;
mod report;
mod timer;

pub use config::BenchmarkConfig;
pub use coordinator::BenchmarkCoordinator;
pub use report::{BenchmarkReport, Ranking, TimingRecord};
pub use timer::ScopedTimer;
