// Adapters layer: concrete implementations for external systems (input source, http, storage).

pub mod http;
pub mod source;
pub mod storage;

pub use http::{check_url, HttpProbe};
pub use source::{parse_numbers, read_numbers};
pub use storage::LocalStorage;
