// Adapters layer: concrete implementations for external systems (document
// formats, filesystem).

pub mod loader;
pub mod storage;
