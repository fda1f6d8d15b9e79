use std::collections::HashMap;

use super::{AssetEvent, AssetKey, AssetLoader, ImageAsset};
use crate::error::SimError;

/// Loader serving images registered up front.
///
/// Requests still complete on the next `poll`, like a real network load;
/// unknown sources complete with an error.
#[derive(Debug, Default)]
pub struct MemoryLoader {
    images: HashMap<String, ImageAsset>,
    queue: Vec<(AssetKey, String)>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `image` under an already resolved `source`.
    pub fn insert(&mut self, source: impl Into<String>, image: ImageAsset) {
        self.images.insert(source.into(), image);
    }

    pub fn with(mut self, source: impl Into<String>, image: ImageAsset) -> Self {
        self.insert(source, image);
        self
    }

    /// Number of requests not yet delivered.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

impl AssetLoader for MemoryLoader {
    fn resolve(&self, id: &str) -> String {
        id.to_string()
    }

    fn request(&mut self, key: AssetKey, source: &str) {
        self.queue.push((key, source.to_string()));
    }

    fn poll(&mut self) -> Vec<AssetEvent> {
        self.queue
            .drain(..)
            .map(|(key, source)| {
                let result = self
                    .images
                    .get(&source)
                    .cloned()
                    .ok_or_else(|| SimError::asset(source.as_str(), "not registered"));
                AssetEvent { key, source, result }
            })
            .collect()
    }
}
