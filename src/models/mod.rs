pub mod aggregate;
pub mod table;
pub mod temperature;

pub use aggregate::StationAggregate;
pub use table::{fnv1a_hash, AggregateTable};
pub use temperature::{decode_tenths, Tenths};
