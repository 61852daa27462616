// Adapters layer: concrete implementations for external systems (file storage, CSV decoding).

pub mod csv_source;
pub mod storage;

pub use csv_source::read_rows;
pub use storage::LocalStorage;
