//! Flat string key-value persistence.
//!
//! Worlds use it for exactly one thing: remembering the aspect ratio of a
//! background image under `"<namespace>-ratio-<image>"`, so the next run can
//! lay out correctly before the image has loaded.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::error::SimError;

/// Browser-storage-like string map.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: String) -> Result<(), SimError>;
}
