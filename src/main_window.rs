use tauri::{AppHandle, WebviewUrl, WebviewWindow, WebviewWindowBuilder};
use url::Url;

use crate::{bootstrapper::WindowHost, ShellBootstrapper, ShellManifest, MAIN_WINDOW_LABEL};

pub(crate) type MainShell = ShellBootstrapper<WebviewWindow>;

pub(crate) struct TauriWindowHost<'a> {
    app_handle: &'a AppHandle,
    manifest: &'a ShellManifest,
}

impl<'a> TauriWindowHost<'a> {
    pub(crate) fn new(app_handle: &'a AppHandle, manifest: &'a ShellManifest) -> Self {
        Self {
            app_handle,
            manifest,
        }
    }
}

impl WindowHost for TauriWindowHost<'_> {
    type Window = WebviewWindow;

    fn open_window(&self, target: &Url) -> Result<WebviewWindow, String> {
        WebviewWindowBuilder::new(
            self.app_handle,
            MAIN_WINDOW_LABEL,
            WebviewUrl::External(target.clone()),
        )
        .title(self.manifest.title.as_str())
        .inner_size(self.manifest.width, self.manifest.height)
        .build()
        .map_err(|error| error.to_string())
    }
}
