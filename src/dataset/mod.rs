mod loader;

pub use loader::{load_records, read_records, RawRecord};
