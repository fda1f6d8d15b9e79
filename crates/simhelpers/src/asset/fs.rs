use std::path::{Path, PathBuf};

use image::RgbaImage;
use resvg::{tiny_skia, usvg};

use super::{resolve_url, AssetEvent, AssetKey, AssetLoader, ImageAsset};
use crate::error::SimError;

/// Loader decoding images from the local filesystem.
///
/// Raster formats go through `image`; `.svg` files are rasterized at their
/// intrinsic size with `resvg`. Decoding happens in `poll`, so completion is
/// observed one update after the request.
#[derive(Debug)]
pub struct FsImageLoader {
    root: PathBuf,
    queue: Vec<(AssetKey, String)>,
}

impl FsImageLoader {
    /// `root` replaces the web host for `simhelpers/...` identifiers; other
    /// identifiers are used as paths as-is.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), queue: Vec::new() }
    }

    fn decode(path: &Path) -> Result<ImageAsset, SimError> {
        let source = path.display().to_string();
        let is_svg = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

        if is_svg {
            let data = std::fs::read(path).map_err(|err| SimError::asset(source.as_str(), err))?;
            return rasterize_svg(&data).map_err(|msg| SimError::asset(source.as_str(), msg));
        }

        let img = image::open(path).map_err(|err| SimError::asset(source.as_str(), err))?;
        Ok(ImageAsset::new(img.to_rgba8()))
    }
}

fn rasterize_svg(data: &[u8]) -> Result<ImageAsset, String> {
    let tree = usvg::Tree::from_data(data, &usvg::Options::default()).map_err(|e| e.to_string())?;
    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| "svg has zero size".to_string())?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());
    let img = RgbaImage::from_raw(size.width(), size.height(), pixmap.take())
        .ok_or_else(|| "pixmap size mismatch".to_string())?;
    Ok(ImageAsset::new(img))
}

impl AssetLoader for FsImageLoader {
    fn resolve(&self, id: &str) -> String {
        resolve_url(&self.root.to_string_lossy(), id)
    }

    fn request(&mut self, key: AssetKey, source: &str) {
        log::debug!("queued image {source}");
        self.queue.push((key, source.to_string()));
    }

    fn poll(&mut self) -> Vec<AssetEvent> {
        self.queue
            .drain(..)
            .map(|(key, source)| {
                let result = Self::decode(Path::new(&source));
                AssetEvent { key, source, result }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use image::Rgba;

    use super::*;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("simhelpers-asset-{}-{name}", std::process::id()))
    }

    #[test]
    fn decodes_png_on_poll() {
        let path = scratch("dot.png");
        RgbaImage::from_pixel(3, 2, Rgba([10, 20, 30, 255])).save(&path).unwrap();

        let mut loader = FsImageLoader::new("unused");
        loader.request(AssetKey::Background, path.to_str().unwrap());
        let events = loader.poll();
        assert_eq!(events.len(), 1);
        let img = events[0].result.as_ref().unwrap();
        assert_eq!((img.width(), img.height()), (3, 2));
        assert!(loader.poll().is_empty());
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn rasterizes_svg_at_intrinsic_size() {
        let path = scratch("track.svg");
        std::fs::write(
            &path,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="40" height="20"><rect width="20" height="20" fill="red"/></svg>"#,
        )
        .unwrap();

        let mut loader = FsImageLoader::new("unused");
        loader.request(AssetKey::Background, path.to_str().unwrap());
        let img = loader.poll().remove(0).result.unwrap();
        assert_eq!((img.width(), img.height()), (40, 20));
        assert_eq!(img.alpha_at(5, 5), 255);
        assert_eq!(img.alpha_at(30, 5), 0);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn missing_file_completes_with_asset_error() {
        let mut loader = FsImageLoader::new("unused");
        loader.request(AssetKey::Background, "/definitely/not/here.png");
        let event = loader.poll().remove(0);
        assert!(matches!(event.result, Err(SimError::Asset { .. })));
    }

    #[test]
    fn bundled_identifiers_resolve_under_root() {
        let loader = FsImageLoader::new("/srv/assets");
        assert_eq!(loader.resolve("simhelpers/img/a.png"), "/srv/assets/simhelpers/img/a.png");
    }
}
