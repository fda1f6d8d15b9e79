use crate::coords::Viewport;
use crate::error::SimError;
use crate::store::KeyValueStore;

use super::WorldDims;

/// Prefix of persisted ratio keys unless a world configures its own.
pub const DEFAULT_NAMESPACE: &str = "simhelpers";

/// Resolves a world's aspect ratio.
///
/// Priority:
/// 1) explicit width and height: `w / h`
/// 2) ratio cached for the background image
/// 3) viewport width / height
/// 4) `1.0` for a degenerate viewport
#[derive(Debug, Clone, PartialEq)]
pub struct AspectResolver {
    key: Option<String>,
}

impl AspectResolver {
    /// Worlds without a background image never consult the store.
    pub fn new(namespace: &str, image: Option<&str>) -> Self {
        let key = image
            .filter(|img| !img.is_empty())
            .map(|img| format!("{namespace}-ratio-{img}"));
        Self { key }
    }

    /// Store key, `"<namespace>-ratio-<image>"`.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Reads the cached ratio. Unparsable or non-positive entries are ignored.
    pub fn load_cached(&self, store: &dyn KeyValueStore) -> Option<f32> {
        let key = self.key.as_deref()?;
        let raw = store.get(key)?;
        match raw.trim().parse::<f32>() {
            Ok(ratio) if ratio.is_finite() && ratio > 0.0 => Some(ratio),
            _ => {
                log::warn!("ignoring stored aspect ratio {raw:?} under {key}");
                None
            }
        }
    }

    pub fn resolve(&self, dims: WorldDims, cached: Option<f32>, viewport: Viewport) -> f32 {
        dims.forced_ratio()
            .or(cached)
            .or_else(|| viewport.ratio())
            .unwrap_or(1.0)
    }

    /// Persists an image's native ratio unless explicit dimensions override
    /// it. Returns whether anything was written.
    pub fn persist(
        &self,
        store: &mut dyn KeyValueStore,
        dims: WorldDims,
        native_ratio: f32,
    ) -> Result<bool, SimError> {
        if dims.forced_ratio().is_some() {
            return Ok(false);
        }
        let Some(key) = self.key.as_deref() else {
            return Ok(false);
        };
        store.set(key, native_ratio.to_string())?;
        log::info!("stored aspect ratio {native_ratio} under {key}");
        Ok(true)
    }
}
