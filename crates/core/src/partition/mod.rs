mod generator;

pub use generator::PartitionKeyGenerator;
