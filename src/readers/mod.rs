pub mod partitioner;
pub mod source;

pub use partitioner::{partition, Partition};
pub use source::{InputSource, SourcingStrategy};
