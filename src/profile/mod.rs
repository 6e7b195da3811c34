pub mod profiler;
pub mod report;

pub use profiler::Profiler;
pub use report::{ProfileEntry, ProfileReport};
