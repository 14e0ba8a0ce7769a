// Adapters layer: concrete implementations for external systems
// (catalog HTTP client, cart storage, notification sinks).

pub mod http;
pub mod notify;
pub mod storage;
