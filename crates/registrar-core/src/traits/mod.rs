mod storage;

pub use storage::IRegistryStorage;
