mod adapter;

pub use adapter::MemoryPersistenceAdapter;
