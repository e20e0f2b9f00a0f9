pub mod merger;
pub mod parallel_processor;
pub mod scanner;

pub use merger::MergeCoordinator;
pub use parallel_processor::MeasurementsProcessor;
pub use scanner::scan_partition;
