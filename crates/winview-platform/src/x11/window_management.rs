use image::RgbaImage;
use tracing::debug;
use winview_common::{Rect, WindowId, WorkspaceId};
use x11rb::connection::Connection;
use x11rb::protocol::xproto::{
    Atom, AtomEnum, ClientMessageEvent, ConnectionExt as _, EventMask, Window,
};

use super::props::{self, ALL_DESKTOPS};
use super::{xid, OrRequest, X11Desktop};
use crate::{ExternalWindow, Result, Timestamp, WindowManager, Workspace};

/// EWMH source indication for requests coming from a pager.
const SOURCE_PAGER: u32 = 2;

impl WindowManager for X11Desktop {
    fn list_windows(&self) -> Result<Vec<ExternalWindow>> {
        let ids = props::cardinals(
            &self.conn,
            self.root(),
            self.atoms._NET_CLIENT_LIST,
            AtomEnum::WINDOW,
        )?;
        let mut windows = Vec::with_capacity(ids.len());
        for id in ids {
            // Windows may vanish between the list read and the property reads.
            match self.describe_window(id) {
                Ok(window) => windows.push(window),
                Err(e) => debug!(window = id, "skipping window: {e}"),
            }
        }
        Ok(windows)
    }

    fn list_workspaces(&self) -> Result<Vec<Workspace>> {
        let root = self.root();
        let count = props::cardinals(
            &self.conn,
            root,
            self.atoms._NET_NUMBER_OF_DESKTOPS,
            AtomEnum::CARDINAL,
        )?
        .first()
        .copied()
        .unwrap_or(0);
        let names = props::text(
            &self.conn,
            root,
            self.atoms._NET_DESKTOP_NAMES,
            self.atoms.UTF8_STRING,
        )?
        .unwrap_or_default();
        let mut names = names.split('\0');

        Ok((0..count)
            .map(|n| Workspace {
                id: WorkspaceId(n),
                name: names.next().filter(|s| !s.is_empty()).map(str::to_string),
            })
            .collect())
    }

    fn window_icon(&self, window: WindowId) -> Result<Option<RgbaImage>> {
        let data = props::cardinals(
            &self.conn,
            xid(window)?,
            self.atoms._NET_WM_ICON,
            AtomEnum::CARDINAL,
        )?;
        Ok(props::largest_icon(&data))
    }

    fn activate_workspace(&self, workspace: WorkspaceId, time: Timestamp) -> Result<()> {
        debug!(%workspace, time, "activating workspace");
        self.send_root_message(
            self.root(),
            self.atoms._NET_CURRENT_DESKTOP,
            [workspace.0, time, 0, 0, 0],
        )
    }

    fn activate_window(&self, window: WindowId, time: Timestamp) -> Result<()> {
        debug!(%window, time, "activating window");
        self.send_root_message(
            xid(window)?,
            self.atoms._NET_ACTIVE_WINDOW,
            [SOURCE_PAGER, time, 0, 0, 0],
        )
    }

    fn close_window(&self, window: WindowId, time: Timestamp) -> Result<()> {
        debug!(%window, time, "closing window");
        self.send_root_message(
            xid(window)?,
            self.atoms._NET_CLOSE_WINDOW,
            [time, SOURCE_PAGER, 0, 0, 0],
        )
    }
}

impl X11Desktop {
    fn describe_window(&self, id: Window) -> Result<ExternalWindow> {
        let conn = &self.conn;
        let atoms = &self.atoms;

        let desktop = props::cardinals(conn, id, atoms._NET_WM_DESKTOP, AtomEnum::CARDINAL)?
            .first()
            .copied();
        let workspace = props::desktop_index(desktop).map(WorkspaceId);
        if desktop == Some(ALL_DESKTOPS) {
            debug!(window = id, "window is on all workspaces");
        }

        let state = props::cardinals(conn, id, atoms._NET_WM_STATE, AtomEnum::ATOM)?;
        let is_minimized = state.contains(&atoms._NET_WM_STATE_HIDDEN);

        let class_group = props::text(conn, id, AtomEnum::WM_CLASS, AtomEnum::STRING)?
            .as_deref()
            .and_then(props::class_group)
            .unwrap_or_default()
            .to_string();

        let title = match props::text(conn, id, atoms._NET_WM_NAME, atoms.UTF8_STRING)? {
            Some(title) => title,
            None => props::text(conn, id, AtomEnum::WM_NAME, AtomEnum::ANY)?.unwrap_or_default(),
        };

        Ok(ExternalWindow {
            id: WindowId(id.into()),
            workspace,
            frame: self.root_frame(id)?,
            is_minimized,
            class_group,
            title,
        })
    }

    /// Window rectangle translated into root coordinates.
    fn root_frame(&self, id: Window) -> Result<Rect> {
        let geometry = self.conn.get_geometry(id).or_request()?.reply().or_request()?;
        let origin = self
            .conn
            .translate_coordinates(id, self.root(), 0, 0)
            .or_request()?
            .reply()
            .or_request()?;
        Ok(Rect::new(
            origin.dst_x.into(),
            origin.dst_y.into(),
            geometry.width.into(),
            geometry.height.into(),
        ))
    }

    fn send_root_message(&self, window: Window, message: Atom, data: [u32; 5]) -> Result<()> {
        let event = ClientMessageEvent::new(32, window, message, data);
        self.conn
            .send_event(
                false,
                self.root(),
                EventMask::SUBSTRUCTURE_REDIRECT | EventMask::SUBSTRUCTURE_NOTIFY,
                event,
            )
            .or_request()?;
        self.conn.flush().or_request()
    }
}
