//! Image loading collaborator.
//!
//! Loads are requested when a drawable (or the world background) is created
//! and complete on a later [`AssetLoader::poll`], which the world calls at the
//! start of every update. Nothing is cached across requests.

mod fs;
mod bitmap;
mod memory;

pub use self::fs::FsImageLoader;
pub use self::bitmap::ImageAsset;
pub use self::memory::MemoryLoader;

use crate::drawable::DrawableId;
use crate::error::SimError;

/// Default host for identifiers of the form `simhelpers/...`.
pub const SIMHELPERS_BASE: &str = "https://gymburgdorf.github.io";

/// Who asked for an image.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum AssetKey {
    Background,
    Drawable(DrawableId),
}

/// A finished load, successful or not.
#[derive(Debug, Clone)]
pub struct AssetEvent {
    pub key: AssetKey,
    pub source: String,
    pub result: Result<ImageAsset, SimError>,
}

/// Asynchronous image source.
pub trait AssetLoader {
    /// Maps an image identifier to the URL or path actually loaded.
    fn resolve(&self, id: &str) -> String {
        resolve_url(SIMHELPERS_BASE, id)
    }

    /// Queues a load of `source` (already resolved) on behalf of `key`.
    fn request(&mut self, key: AssetKey, source: &str);

    /// Returns the loads that finished since the last poll, in request order.
    fn poll(&mut self) -> Vec<AssetEvent>;
}

/// Identifiers starting with `simhelpers` live under `base`; anything else is
/// used verbatim.
pub fn resolve_url(base: &str, id: &str) -> String {
    if id.starts_with("simhelpers") {
        format!("{}/{}", base.trim_end_matches('/'), id)
    } else {
        id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_identifiers_resolve_under_base() {
        assert_eq!(
            resolve_url(SIMHELPERS_BASE, "simhelpers/img/flugi50.png"),
            "https://gymburgdorf.github.io/simhelpers/img/flugi50.png"
        );
        assert_eq!(resolve_url("assets/", "simhelpers/a.png"), "assets/simhelpers/a.png");
    }

    #[test]
    fn other_identifiers_pass_through() {
        assert_eq!(resolve_url(SIMHELPERS_BASE, "img/Track.svg"), "img/Track.svg");
    }
}
