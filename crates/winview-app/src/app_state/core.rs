//! OverviewApp struct definition and constructor.

use std::collections::HashMap;
use std::time::Instant;

use image::RgbaImage;
use tracing::info;
use winview_common::{Rect, Result, WindowId};
use winview_config::WinviewConfig;
use winview_overview::{build_overview, place, IconResolver, Placement, Snapshot, ThumbnailGeometry};
use winview_platform::X11Desktop;

use super::types::{layout_metrics, Palette, View};

/// Top-level application state.
pub struct OverviewApp {
    pub(super) desktop: X11Desktop,
    pub(super) config: WinviewConfig,

    // Desktop state, read once at startup
    pub(super) snapshot: Snapshot,
    pub(super) placement: Placement,
    pub(super) icons: HashMap<WindowId, RgbaImage>,

    // Drawing
    pub(super) thumbnail: ThumbnailGeometry,
    pub(super) palette: Palette,
    pub(super) view: View,

    // Whether the app should exit
    pub(super) should_exit: bool,

    // Dirty flag -- set on expose, cleared after a full repaint
    pub(super) needs_redraw: bool,
    pub(super) last_refresh: Instant,
}

impl OverviewApp {
    pub fn new(desktop: X11Desktop, config: WinviewConfig) -> Result<Self> {
        let snapshot = Snapshot::take(&desktop)?;
        let overview = build_overview(&snapshot, config.layout.mode);

        let resolver = IconResolver::new(&config.icons);
        let icons: HashMap<WindowId, RgbaImage> = overview
            .cards()
            .into_iter()
            .filter_map(|card| {
                let window = snapshot.window(card.window)?;
                let icon = resolver.resolve(&desktop, window)?;
                Some((card.window, icon))
            })
            .collect();

        let thumbnail = ThumbnailGeometry::from_config(&config.thumbnail);
        let font = Self::open_font(&desktop)?;
        let placement = place(&overview, &layout_metrics(&config, &thumbnail, &font.1));
        let palette = Palette::from_config(&config);
        let screen = desktop.screen();
        let area = snapshot.monitors.first().map(|m| m.bounds).unwrap_or_else(|| {
            Rect::new(
                0,
                0,
                screen.width_in_pixels.into(),
                screen.height_in_pixels.into(),
            )
        });
        let view = Self::create_view(&desktop, &config, &palette, &placement, area, font)?;

        info!(
            cards = overview.cards().len(),
            icons = icons.len(),
            width = view.width,
            height = view.height,
            "Overview built"
        );

        Ok(Self {
            desktop,
            config,
            snapshot,
            placement,
            icons,
            thumbnail,
            palette,
            view,
            should_exit: false,
            needs_redraw: true,
            last_refresh: Instant::now(),
        })
    }
}
