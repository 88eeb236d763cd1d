//! Overview window creation.

use tracing::debug;
use winview_common::{Rect, Result};
use winview_config::WinviewConfig;
use winview_overview::Placement;
use winview_platform::x11::OrRequest;
use winview_platform::X11Desktop;
use x11rb::connection::Connection;
use x11rb::protocol::xproto::{
    AtomEnum, ConnectionExt as _, CreateGCAux, CreateWindowAux, EventMask, Font, PropMode,
    WindowClass,
};
use x11rb::properties::{WmSizeHints, WmSizeHintsSpecification};
use x11rb::wrapper::ConnectionExt as _;

use super::core::OverviewApp;
use super::types::{centred_origin, window_size, FontMetrics, Palette, View, FONT_NAME, WM_CLASS};

impl OverviewApp {
    /// Open the label font and read its metrics.
    pub(super) fn open_font(desktop: &X11Desktop) -> Result<(Font, FontMetrics)> {
        let conn = desktop.connection();
        let font = conn.generate_id().or_request()?;
        conn.open_font(font, FONT_NAME).or_request()?;
        let info = conn.query_font(font).or_request()?.reply().or_request()?;
        let metrics = FontMetrics {
            ascent: info.font_ascent.max(0) as u32,
            descent: info.font_descent.max(0) as u32,
            char_width: info.max_bounds.character_width.max(1) as u32,
        };
        debug!(?metrics, "font opened");
        Ok((font, metrics))
    }

    /// Create, decorate, and map the overview window.
    pub(super) fn create_view(
        desktop: &X11Desktop,
        config: &WinviewConfig,
        palette: &Palette,
        placement: &Placement,
        area: Rect,
        (font, font_metrics): (Font, FontMetrics),
    ) -> Result<View> {
        let conn = desktop.connection();
        let screen = desktop.screen();
        let atoms = desktop.atoms();
        let (width, height) = window_size(placement, config);
        let (x, y) = centred_origin(&area, width, height);

        let window = conn.generate_id().or_request()?;
        conn.create_window(
            screen.root_depth,
            window,
            screen.root,
            x,
            y,
            width,
            height,
            0,
            WindowClass::INPUT_OUTPUT,
            screen.root_visual,
            &CreateWindowAux::new()
                .background_pixel(palette.background.to_pixel())
                .event_mask(EventMask::EXPOSURE | EventMask::BUTTON_PRESS),
        )
        .or_request()?;

        // Window managers ignore the create-time position without this hint.
        let mut hints = WmSizeHints::new();
        hints.position = Some((
            WmSizeHintsSpecification::ProgramSpecified,
            i32::from(x),
            i32::from(y),
        ));
        hints.set_normal_hints(conn, window).or_request()?;

        let title = config.window.title.as_bytes();
        conn.change_property8(
            PropMode::REPLACE,
            window,
            AtomEnum::WM_NAME,
            AtomEnum::STRING,
            title,
        )
        .or_request()?;
        conn.change_property8(
            PropMode::REPLACE,
            window,
            atoms._NET_WM_NAME,
            atoms.UTF8_STRING,
            title,
        )
        .or_request()?;
        conn.change_property8(
            PropMode::REPLACE,
            window,
            AtomEnum::WM_CLASS,
            AtomEnum::STRING,
            WM_CLASS,
        )
        .or_request()?;
        conn.change_property32(
            PropMode::REPLACE,
            window,
            atoms.WM_PROTOCOLS,
            AtomEnum::ATOM,
            &[atoms.WM_DELETE_WINDOW],
        )
        .or_request()?;

        let gc = conn.generate_id().or_request()?;
        conn.create_gc(
            gc,
            window,
            &CreateGCAux::new()
                .foreground(palette.text.to_pixel())
                .background(palette.background.to_pixel())
                .font(font),
        )
        .or_request()?;

        conn.map_window(window).or_request()?;
        conn.flush().or_request()?;
        debug!(window, x, y, width, height, "overview window mapped");

        Ok(View {
            window,
            gc,
            font,
            font_metrics,
            width,
            height,
        })
    }
}
