//! Icon lookup for the activate button.

use std::collections::BTreeMap;
use std::path::PathBuf;

use image::imageops::{self, FilterType};
use image::RgbaImage;
use tracing::{debug, warn};
use winview_config::IconConfig;
use winview_platform::{ExternalWindow, WindowManager};

/// Resolves a square icon per window: a configured override image for the
/// window's class group, else the window's own icon.
#[derive(Debug, Clone)]
pub struct IconResolver {
    size: u32,
    overrides: BTreeMap<String, PathBuf>,
}

impl IconResolver {
    pub fn new(config: &IconConfig) -> Self {
        Self {
            size: config.size,
            overrides: config
                .overrides
                .iter()
                .map(|(class, path)| (class.clone(), PathBuf::from(path)))
                .collect(),
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// `None` means the button is drawn blank.
    pub fn resolve(&self, wm: &dyn WindowManager, window: &ExternalWindow) -> Option<RgbaImage> {
        let icon = self
            .from_override(&window.class_group)
            .or_else(|| match wm.window_icon(window.id) {
                Ok(icon) => icon,
                Err(e) => {
                    debug!(window = %window.id, "icon unavailable: {e}");
                    None
                }
            })?;
        Some(self.fit(icon))
    }

    fn from_override(&self, class_group: &str) -> Option<RgbaImage> {
        let path = self.overrides.get(class_group)?;
        match image::open(path) {
            Ok(image) => Some(image.to_rgba8()),
            Err(e) => {
                warn!(class = class_group, path = %path.display(), "icon override unreadable: {e}");
                None
            }
        }
    }

    fn fit(&self, icon: RgbaImage) -> RgbaImage {
        if icon.dimensions() == (self.size, self.size) {
            icon
        } else {
            imageops::resize(&icon, self.size, self.size, FilterType::Lanczos3)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use winview_common::{Rect, WindowId};
    use winview_platform::fake::window;
    use winview_platform::FakeDesktop;

    fn firefox() -> ExternalWindow {
        window(1, Some(0), Rect::new(0, 0, 10, 10), "Firefox")
    }

    fn resolver(overrides: &[(&str, String)]) -> IconResolver {
        IconResolver::new(&IconConfig {
            size: 32,
            overrides: overrides
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        })
    }

    #[test]
    fn window_icon_is_scaled() {
        let desktop = FakeDesktop::new()
            .with_window(firefox())
            .with_icon(WindowId(1), RgbaImage::from_pixel(128, 128, Rgba([255, 0, 0, 255])));
        let icon = resolver(&[]).resolve(&desktop, &firefox()).unwrap();
        assert_eq!(icon.dimensions(), (32, 32));
        assert_eq!(icon.get_pixel(16, 16).0[0], 255);
    }

    #[test]
    fn missing_icon_is_none() {
        let desktop = FakeDesktop::new().with_window(firefox());
        assert!(resolver(&[]).resolve(&desktop, &firefox()).is_none());
    }

    #[test]
    fn override_file_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("firefox.png");
        RgbaImage::from_pixel(64, 64, Rgba([0, 0, 255, 255]))
            .save(&path)
            .unwrap();

        let desktop = FakeDesktop::new()
            .with_window(firefox())
            .with_icon(WindowId(1), RgbaImage::from_pixel(32, 32, Rgba([255, 0, 0, 255])));
        let resolver = resolver(&[("Firefox", path.display().to_string())]);
        let icon = resolver.resolve(&desktop, &firefox()).unwrap();
        assert_eq!(icon.dimensions(), (32, 32));
        assert_eq!(icon.get_pixel(16, 16).0, [0, 0, 255, 255]);
    }

    #[test]
    fn unreadable_override_falls_back_to_window_icon() {
        let desktop = FakeDesktop::new()
            .with_window(firefox())
            .with_icon(WindowId(1), RgbaImage::from_pixel(32, 32, Rgba([255, 0, 0, 255])));
        let resolver = resolver(&[("Firefox", "/nonexistent/firefox.png".into())]);
        let icon = resolver.resolve(&desktop, &firefox()).unwrap();
        assert_eq!(icon.get_pixel(0, 0).0, [255, 0, 0, 255]);
    }

    #[test]
    fn override_is_keyed_by_class_group() {
        let desktop = FakeDesktop::new().with_window(firefox());
        let resolver = resolver(&[("Alacritty", "/nonexistent/alacritty.png".into())]);
        assert!(resolver.resolve(&desktop, &firefox()).is_none());
    }
}
